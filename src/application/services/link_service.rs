//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_valid_code};
use crate::utils::url_validator::validate_url;
use tracing::{debug, error, warn};

/// Default number of codes drawn before giving up on a creation.
pub const DEFAULT_CODE_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating short links and resolving them for redirects.
///
/// Every creation produces a new record; identical URLs are not deduplicated.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
    max_attempts: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix used to build short URLs; a trailing
    /// slash is ignored. `max_attempts` is clamped to at least 1.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>, max_attempts: usize) -> Self {
        Self {
            link_repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Creates a short link for `long_url`.
    ///
    /// Draws a random code and inserts it; if the code is taken, draws again,
    /// up to the configured number of attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, not HTTP(S), or
    /// contains a control character.
    /// Returns [`AppError::CodeSpaceExhausted`] if every drawn code collided.
    pub async fn create_short_link(&self, long_url: String) -> Result<Link, AppError> {
        validate_url(&long_url).map_err(|e| AppError::invalid_url(e.to_string()))?;

        for attempt in 1..=self.max_attempts {
            let new_link = NewLink {
                code: generate_code(),
                long_url: long_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    metrics::counter!("links_created_total").increment(1);
                    debug!(code = %link.code, attempt, "Short link created");
                    return Ok(link);
                }
                Err(AppError::Conflict { details, .. }) => {
                    metrics::counter!("short_code_collisions_total").increment(1);
                    warn!(attempt, %details, "Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        error!(
            attempts = self.max_attempts,
            "Exhausted all retries generating a unique short code"
        );
        Err(AppError::code_space_exhausted(self.max_attempts))
    }

    /// Resolves a short code for a redirect, counting one click.
    ///
    /// The returned link carries the click count including this click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code doesn't exist.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::code_not_found(code));
        }

        let link = self
            .link_repository
            .record_click(code)
            .await?
            .ok_or_else(|| AppError::code_not_found(code))?;

        metrics::counter!("link_redirects_total").increment(1);
        debug!(code, clicks = link.clicks, "Short link resolved");

        Ok(link)
    }

    /// Builds the public short URL for a code.
    pub fn get_short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;
    use serde_json::json;

    const BASE_URL: &str = "http://localhost:5000";

    fn create_test_link(code: &str, url: &str, clicks: u64) -> Link {
        Link::new(code.to_string(), url.to_string(), Utc::now(), clicks)
    }

    fn service(repo: MockLinkRepository) -> LinkService<MockLinkRepository> {
        LinkService::new(
            Arc::new(repo),
            BASE_URL,
            DEFAULT_CODE_GENERATION_ATTEMPTS,
        )
    }

    #[tokio::test]
    async fn test_create_short_link_success() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_create()
            .withf(|new_link| {
                new_link.long_url == "https://example.com" && is_valid_code(&new_link.code)
            })
            .times(1)
            .returning(|new_link| Ok(create_test_link(&new_link.code, &new_link.long_url, 0)));

        let link = service(mock_link_repo)
            .create_short_link("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert!(is_valid_code(&link.code));
    }

    #[tokio::test]
    async fn test_create_short_link_retries_on_collision() {
        let mut mock_link_repo = MockLinkRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_link_repo
            .expect_create()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::conflict("taken", json!({}))));

        mock_link_repo
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|new_link| Ok(create_test_link(&new_link.code, &new_link.long_url, 0)));

        let result = service(mock_link_repo)
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_short_link_exhausts_attempts() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_create()
            .times(DEFAULT_CODE_GENERATION_ATTEMPTS)
            .returning(|_| Err(AppError::conflict("taken", json!({}))));

        let result = service(mock_link_repo)
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::CodeSpaceExhausted { .. }
        ));
    }

    #[tokio::test]
    async fn test_create_short_link_propagates_other_errors() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("boom", json!({}))));

        let result = service(mock_link_repo)
            .create_short_link("https://example.com".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_short_link_invalid_url() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_create().times(0);

        let service = service(mock_link_repo);

        for url in ["", "not-a-url", "ftp://example.com", "https://example.com/a\nb"] {
            let result = service.create_short_link(url.to_string()).await;
            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "{url:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_record_click()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|code| Ok(Some(create_test_link(code, "https://example.com", 1))));

        let link = service(mock_link_repo).resolve("abc123").await.unwrap();

        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.clicks, 1);
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_record_click()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_link_repo).resolve("zzzzzz").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_malformed_code_skips_repository() {
        let mut mock_link_repo = MockLinkRepository::new();
        mock_link_repo.expect_record_click().times(0);

        let result = service(mock_link_repo).resolve("favicon.ico").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[test]
    fn test_get_short_url_trims_trailing_slash() {
        let service = LinkService::new(
            Arc::new(MockLinkRepository::new()),
            "https://s.example.com/",
            DEFAULT_CODE_GENERATION_ATTEMPTS,
        );

        assert_eq!(
            service.get_short_url("abc123"),
            "https://s.example.com/abc123"
        );
    }

    #[test]
    fn test_zero_attempts_is_clamped() {
        let service = LinkService::new(Arc::new(MockLinkRepository::new()), BASE_URL, 0);
        assert_eq!(service.max_attempts, 1);
    }
}
