//! Core domain entities.
//!
//! - [`Link`] - A snapshot of a shortened URL mapping with its click count
//! - [`NewLink`] - Input for creating a link
//! - [`LinkStats`] - Click statistics returned by stats lookups

pub mod link;

pub use link::{Link, LinkStats, NewLink};
