//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Short code generation and shape checks
//! - [`url_validator`] - The HTTP(S) URL validity predicate

pub mod code_generator;
pub mod url_validator;
