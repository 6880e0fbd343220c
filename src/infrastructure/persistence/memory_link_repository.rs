//! In-process implementation of [`LinkRepository`].
//!
//! Records live in a `HashMap` behind a `parking_lot::RwLock`. Each record is
//! shared through an `Arc` and carries its own `AtomicU64` click counter:
//!
//! - inserts take the write lock, so they serialize with each other and with
//!   [`LinkRepository::list`];
//! - clicks take the read lock only long enough to clone the `Arc`, then bump
//!   the counter lock-free, so clicks on different codes never contend;
//! - a record is fully built before it is inserted, so readers never observe
//!   a partially initialized entry.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Stored form of a link. Only `clicks` changes after insertion.
#[derive(Debug)]
struct StoredLink {
    code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    clicks: AtomicU64,
}

impl StoredLink {
    fn snapshot(&self) -> Link {
        self.snapshot_with(self.clicks.load(Ordering::Acquire))
    }

    fn snapshot_with(&self, clicks: u64) -> Link {
        Link::new(
            self.code.clone(),
            self.long_url.clone(),
            self.created_at,
            clicks,
        )
    }
}

/// Thread-safe in-memory link store.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<String, Arc<StoredLink>>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, code: &str) -> Option<Arc<StoredLink>> {
        self.links.read().get(code).cloned()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let record = Arc::new(StoredLink {
            code: new_link.code,
            long_url: new_link.long_url,
            created_at: Utc::now(),
            clicks: AtomicU64::new(0),
        });

        let mut links = self.links.write();
        match links.entry(record.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Short code already exists",
                json!({ "short_code": record.code }),
            )),
            Entry::Vacant(slot) => {
                let link = record.snapshot_with(0);
                slot.insert(record);
                debug!(code = %link.code, total = links.len(), "Link stored");
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.get(code).map(|record| record.snapshot()))
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.get(code).map(|record| {
            let clicks = record.clicks.fetch_add(1, Ordering::AcqRel) + 1;
            record.snapshot_with(clicks)
        }))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self
            .links
            .read()
            .values()
            .map(|record| record.snapshot())
            .collect();

        links.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.code.cmp(&b.code))
        });

        Ok(links)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.links.read().len())
    }
}
