//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkStats};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_valid_code;

/// Read-only access to link statistics.
///
/// Lookups never count a click.
pub struct StatsService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> StatsService<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns URL, click count and creation time for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code doesn't exist.
    pub async fn get_link_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        if !is_valid_code(code) {
            return Err(AppError::code_not_found(code));
        }

        self.link_repository
            .find_by_code(code)
            .await?
            .map(LinkStats::from)
            .ok_or_else(|| AppError::code_not_found(code))
    }

    /// Returns every stored link, oldest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Returns the number of stored links.
    pub async fn count_links(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }
}
