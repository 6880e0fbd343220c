#![allow(dead_code)]

use std::sync::Arc;
use url_shortener_mem::domain::entities::{Link, NewLink};
use url_shortener_mem::domain::repositories::LinkRepository;
use url_shortener_mem::infrastructure::persistence::InMemoryLinkRepository;
use url_shortener_mem::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:5000";

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repo.clone(), TEST_BASE_URL, 5);
    (state, repo)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.create(NewLink {
        code: code.to_string(),
        long_url: url.to_string(),
    })
    .await
    .unwrap()
}
