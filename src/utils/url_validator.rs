//! Validation predicate for URLs accepted by the shortener.
//!
//! A URL is accepted when it is non-empty, starts with `http://` or
//! `https://` and contains no control characters. The accepted string is
//! stored and later sent verbatim as a `Location` header, so anything that
//! cannot appear in a header value is rejected here.

/// Reasons a URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedScheme,

    #[error("URL contains a control character at byte {0}")]
    ControlCharacter(usize),
}

const ALLOWED_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Checks that `raw` is a plausible HTTP(S) URL.
///
/// The value is not rewritten; callers store exactly what they validated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com").is_ok());
/// assert!(validate_url("http://").is_ok());
/// assert_eq!(validate_url("not-a-url"), Err(UrlValidationError::UnsupportedScheme));
/// assert_eq!(validate_url(""), Err(UrlValidationError::Empty));
/// ```
pub fn validate_url(raw: &str) -> Result<(), UrlValidationError> {
    if raw.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let has_prefix = ALLOWED_PREFIXES.iter().any(|prefix| {
        raw.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    });
    if !has_prefix {
        return Err(UrlValidationError::UnsupportedScheme);
    }

    // CR, LF, tab, NUL and DEL would make the redirect header unbuildable
    if let Some((index, _)) = raw.char_indices().find(|(_, c)| c.is_control()) {
        return Err(UrlValidationError::ControlCharacter(index));
    }

    Ok(())
}
