//! DTOs for link statistics endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Link, LinkStats};

/// Statistics for a single short link.
///
/// `created_at` is serialized as RFC 3339 (an ISO-8601 profile).
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            url: stats.long_url,
            clicks: stats.clicks,
            created_at: stats.created_at,
        }
    }
}

/// One entry of the link listing.
#[derive(Debug, Serialize)]
pub struct LinkSummary {
    pub short_code: String,
    pub url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkSummary {
    fn from(link: Link) -> Self {
        Self {
            short_code: link.code,
            url: link.long_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

/// Listing of every stored link.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub total: usize,
    pub urls: Vec<LinkSummary>,
}
