//! Repository implementations.
//!
//! - [`InMemoryLinkRepository`] - process-local store of short links and click counters

mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
