//! Error types for the formatting library.

use thiserror::Error;

/// Errors surfaced by [`crate::Formatter::format`].
///
/// Construction and chaining never fail; the skeleton is only validated
/// when a pattern is requested from the ICU engine at render time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The accumulated or custom skeleton cannot be resolved into a
    /// pattern for the given locale. Deterministic: retrying with the same
    /// input never succeeds.
    #[error("Unsupported skeleton '{skeleton}' for locale '{locale}'")]
    UnsupportedSkeleton { skeleton: String, locale: String },

    /// The input value cannot be normalized to a formattable instant
    /// (outside the representable datetime range).
    #[error("Datetime value out of range: {message}")]
    OutOfRange { message: String },

    /// The normalized value could not be handed to the engine. Signals a
    /// conversion fault between the datetime library and the engine, not
    /// a problem with the caller's input.
    #[error("Failed to convert value for the pattern engine: {message}")]
    ConversionFailed { message: String },
}

impl FormatError {
    /// Creates an unsupported-skeleton error for a (skeleton, locale) pair.
    pub(crate) fn unsupported(
        skeleton: impl Into<String>,
        locale: &icu::locale::Locale,
    ) -> Self {
        FormatError::UnsupportedSkeleton {
            skeleton: skeleton.into(),
            locale: locale.to_string(),
        }
    }

    /// Creates an out-of-range error from a normalization failure.
    pub(crate) fn out_of_range(source: impl std::fmt::Display) -> Self {
        FormatError::OutOfRange {
            message: source.to_string(),
        }
    }

    /// Creates a conversion error from an engine hand-off failure.
    pub(crate) fn conversion(source: impl std::fmt::Display) -> Self {
        FormatError::ConversionFailed {
            message: source.to_string(),
        }
    }
}

/// Result type alias for formatting operations.
pub type Result<T> = std::result::Result<T, FormatError>;
