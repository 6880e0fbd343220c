//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryLinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<InMemoryLinkRepository>>,
}

impl AppState {
    /// Wires both services to one shared repository.
    pub fn new(
        link_repository: Arc<InMemoryLinkRepository>,
        base_url: impl Into<String>,
        code_generation_attempts: usize,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(
                link_repository.clone(),
                base_url,
                code_generation_attempts,
            )),
            stats_service: Arc::new(StatsService::new(link_repository)),
        }
    }

    /// Builds state with an empty store from the service configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(InMemoryLinkRepository::new()),
            config.base_url.clone(),
            config.code_generation_attempts,
        )
    }
}
