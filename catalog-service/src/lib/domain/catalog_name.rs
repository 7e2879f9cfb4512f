use std::fmt;

use thiserror::Error;

/// Error for catalog name normalization failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogNameError {
    #[error("Name is empty after removing punctuation and whitespace")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Normalized author name or book title.
///
/// Lowercased, stripped of every character that is neither alphanumeric nor
/// whitespace, with whitespace runs collapsed to a single space. Two inputs
/// naming the same work normalize to the same value, which is what the
/// uniqueness constraints and substring searches compare.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogName(String);

impl CatalogName {
    const MAX_LENGTH: usize = 255;

    /// Normalize a raw name.
    ///
    /// # Errors
    /// * `Empty` - Nothing remains after normalization
    /// * `TooLong` - Normalized name exceeds 255 characters
    pub fn new(raw: &str) -> Result<Self, CatalogNameError> {
        let kept: String = raw
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        let normalized = kept.split_whitespace().collect::<Vec<_>>().join(" ");

        let length = normalized.chars().count();
        if length == 0 {
            Err(CatalogNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(CatalogNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatalogName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
