//! Error types for scene list operations.

use thiserror::Error;

/// Errors from mutating a composite scene list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneCacheError {
    /// No component list with this index.
    #[error("unknown component list {0}")]
    UnknownComponent(usize),

    /// A range that does not fit the list it was applied to.
    #[error("range {start}..{end} is outside a list of {len} scenes")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Cache settings that cannot be used.
    #[error("invalid cache configuration: {0}")]
    InvalidConfig(String),
}

impl SceneCacheError {
    /// Create an InvalidRange error.
    pub fn invalid_range(range: &std::ops::Range<usize>, len: usize) -> Self {
        Self::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        }
    }
}

/// Result type for scene list operations.
pub type Result<T> = std::result::Result<T, SceneCacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SceneCacheError::UnknownComponent(3).to_string(),
            "unknown component list 3"
        );
        assert_eq!(
            SceneCacheError::invalid_range(&(2..9), 4).to_string(),
            "range 2..9 is outside a list of 4 scenes"
        );
        assert_eq!(
            SceneCacheError::InvalidConfig("date_cache_capacity must be > 0".into()).to_string(),
            "invalid cache configuration: date_cache_capacity must be > 0"
        );
    }
}
