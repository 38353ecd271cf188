//! Error types for sortviz-core.

use serde::{Deserialize, Serialize};

/// Error type for operations that can genuinely fail.
///
/// Rejected playback commands (a `start` with nothing to run) report through
/// `bool` returns instead, and index misuse in snapshot primitives panics as
/// a programming error; this enum covers serialization and trace validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SortVizError {
    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// A decoded trace violated a structural invariant
    #[error("Invalid trace: {reason}")]
    InvalidTrace { reason: String },
}

impl SortVizError {
    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Serialization { .. } => "serialization",
            Self::InvalidTrace { .. } => "trace",
        }
    }
}

impl From<serde_json::Error> for SortVizError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = SortVizError::InvalidTrace {
            reason: "truncated".to_string(),
        };
        assert_eq!(err.category(), "trace");
    }

    #[test]
    fn test_json_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SortVizError = bad.into();
        assert!(matches!(err, SortVizError::Serialization { .. }));
        assert_eq!(err.category(), "serialization");
    }

    #[test]
    fn test_serialization_round_trip() {
        let err = SortVizError::Serialization {
            reason: "test".to_string(),
        };
        let serialized = serde_json::to_string(&err).unwrap();
        let deserialized: SortVizError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(err, deserialized);
    }
}
