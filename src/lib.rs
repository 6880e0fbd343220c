//! # URL Shortener (in-memory)
//!
//! A minimal URL shortening service built with Axum. Links and click counters
//! live in process memory and are lost on restart.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Link creation, resolution and statistics
//! - **Infrastructure Layer** ([`infrastructure`]) - The concurrent in-memory store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Concurrency
//!
//! The store guarantees that no two creations receive the same short code and
//! that concurrent redirects never lose a click. See
//! [`infrastructure::persistence::InMemoryLinkRepository`].
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{Link, LinkStats, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
