//! Infrastructure layer implementing the domain repository traits.
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
