//! Tag normalization: tokenize raw input, trim, drop empties,
//! deduplicate, and encode the result as a JSON array of strings.

use thiserror::Error;

use crate::models::TagList;

/// Environment variable holding the raw tag list.
pub const TAGS_VAR: &str = "TAGS";

/// Errors that can occur while normalizing tags.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The normalized list could not be encoded as JSON.
    #[error("failed to encode tags as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Normalizes a raw tag string into an ordered, deduplicated tag list.
///
/// The input is split on newlines, each line on commas; every segment
/// is trimmed and segments that are empty after trimming are dropped.
/// Duplicates keep their first occurrence. Tags differing in case or
/// internal whitespace are distinct; no normalization happens beyond
/// trimming. Absent input is equivalent to an empty string.
pub fn normalize(raw: Option<&str>) -> TagList {
    let Some(raw) = raw else {
        return TagList::default();
    };
    if raw.trim().is_empty() {
        return TagList::default();
    }

    TagList::from_tokens(
        raw.split('\n')
            .flat_map(|line| line.split(','))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
    )
}

/// Normalizes raw input and encodes the result as a JSON array literal.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn normalize_to_json(raw: Option<&str>) -> Result<String, NormalizeError> {
    let tags = normalize(raw);
    Ok(serde_json::to_string(&tags)?)
}

/// Reads the `TAGS` environment variable and normalizes its value into
/// a JSON array literal. An unset variable is treated the same as an
/// empty string.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn normalize_env() -> Result<String, NormalizeError> {
    let raw = std::env::var(TAGS_VAR).ok();
    normalize_to_json(raw.as_deref())
}
