//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short code registry.
///
/// Implementations must make every operation atomic with respect to the
/// others: a code is never assigned twice and click increments are never lost.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with zero clicks and the current time as `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken. The
    /// existing record is left untouched.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code without counting a click.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter of `code`.
    ///
    /// Returns the post-increment snapshot, or `Ok(None)` if the code is unknown.
    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns a consistent snapshot of all links ordered by creation time.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Counts stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
