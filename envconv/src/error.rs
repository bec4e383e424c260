//! Error types for value conversion

use thiserror::Error;

/// Errors that can occur while converting raw text into a typed value
#[derive(Error, Debug, Clone)]
pub enum FormatError {
    /// A map entry did not split into exactly one key and one value
    #[error("Invalid format in map entry: {token:?}")]
    MalformedPair {
        /// Offending entry token, verbatim
        token: String,
    },

    /// The raw text was rejected by the conversion for its target type
    #[error("Invalid {target} value {value:?}: {reason}")]
    InvalidValue {
        /// Name of the target type
        target: &'static str,
        /// Raw text that failed to convert
        value: String,
        /// Underlying parser message
        reason: String,
    },
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_pair_display_carries_token() {
        let e = FormatError::MalformedPair {
            token: "b".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid format in map entry: \"b\"");
    }

    #[test]
    fn invalid_value_display_names_target_and_value() {
        let e = FormatError::InvalidValue {
            target: "u16",
            value: "70000".to_string(),
            reason: "number too large".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("u16"), "missing target in: {msg}");
        assert!(msg.contains("70000"), "missing value in: {msg}");
    }
}
