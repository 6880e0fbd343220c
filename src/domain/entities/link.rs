//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A point-in-time view of a stored short link.
///
/// Values of this type are copies handed out by the store; mutating them
/// has no effect on the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: u64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, long_url: String, created_at: DateTime<Utc>, clicks: u64) -> Self {
        Self {
            code,
            long_url,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}

/// Click statistics for a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub long_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkStats {
    fn from(link: Link) -> Self {
        Self {
            long_url: link.long_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}
