//! Short code generation and shape checks.
//!
//! Codes are 6 characters drawn uniformly from `[A-Za-z0-9]`, giving
//! 62^6 (about 5.7 * 10^10) combinations. The generator is not
//! collision-free; uniqueness is enforced by the store on insert.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` has the shape of a generated short code.
///
/// Lookups for codes that fail this check can skip the store entirely.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
