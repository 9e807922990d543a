//! Query normalization
//!
//! User input is trimmed and lowercased before it is used as a path segment.

use crate::error::FetchError;
use std::fmt;

/// A normalized, non-empty lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Normalize raw input. Empty (or whitespace-only) input is rejected,
    /// as are `.` and `..`, which cannot be sent as a path segment.
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() || normalized == "." || normalized == ".." {
            return Err(FetchError::InvalidQuery);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name with the first letter uppercased, e.g. "pikachu" -> "Pikachu"
    pub fn display_name(&self) -> String {
        capitalize(&self.0)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
