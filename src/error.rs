//! Error types for frame decoding.
//!
//! Two layers of errors exist:
//!
//! - [`DecodeError`] describes why a single payload segment could not be turned
//!   into a [`Frame`](crate::Frame). It is a plain value: the decoder returns one
//!   per rejected segment and keeps going with its siblings.
//! - [`MoveeError`] covers everything around the decoder: hex input, configuration
//!   files, and decode failures attributed to a segment index.
//!
//! ```rust
//! use movee::{DecodeErrorKind, decode_frame};
//!
//! let err = decode_frame(&[0xC1, 0x15]).unwrap_err();
//! assert_eq!(err.kind(), DecodeErrorKind::TooShort);
//! assert!(err.to_string().contains("2 bytes"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::types::{FrameType, LengthRule};

/// Result type alias for crate operations.
pub type Result<T, E = MoveeError> = std::result::Result<T, E>;

/// Why a payload segment was rejected by the decoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("payload has {actual} bytes, a frame needs at least 3 header bytes")]
    TooShort { actual: usize },

    #[error("unknown frame type {discriminant:#04x}")]
    UnknownType { discriminant: u8 },

    #[error("{frame_type} frame must be {expected} bytes long, got {actual}")]
    BadLength { frame_type: FrameType, expected: LengthRule, actual: usize },

    #[error("field '{field}' could not be read at offset {offset}")]
    MalformedField { field: &'static str, offset: usize },
}

/// Fieldless discriminant of [`DecodeError`], handy for matching and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    TooShort,
    UnknownType,
    BadLength,
    MalformedField,
}

impl DecodeError {
    /// Returns the kind of this error without its context.
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::TooShort { .. } => DecodeErrorKind::TooShort,
            DecodeError::UnknownType { .. } => DecodeErrorKind::UnknownType,
            DecodeError::BadLength { .. } => DecodeErrorKind::BadLength,
            DecodeError::MalformedField { .. } => DecodeErrorKind::MalformedField,
        }
    }
}

/// Main error type for everything surrounding the decoder.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MoveeError {
    #[error("input {index} is not valid hex")]
    InvalidHex {
        index: usize,
        #[source]
        source: hex::FromHexError,
    },

    #[error("configuration error: {reason}")]
    Config {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("frame {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: DecodeError,
    },
}

impl MoveeError {
    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            MoveeError::InvalidHex { .. } => vec![
                "Check the input only contains hexadecimal digits",
                "Make sure the input has an even number of digits",
            ],
            MoveeError::Config { .. } => vec![
                "Check the YAML syntax of the configuration file",
                "Verify the sentinel is a single byte (0-255 or a two-digit hex string)",
            ],
            MoveeError::File { .. } => {
                vec!["Check the file exists and is readable", "Check file permissions"]
            }
            MoveeError::Decode { .. } => vec![
                "Check the sensor firmware emits a supported frame type",
                "Verify the sentinel byte matches the one used by the sensor",
            ],
        }
    }

    /// Helper constructor for hex decoding failures.
    pub fn invalid_hex(index: usize, source: hex::FromHexError) -> Self {
        MoveeError::InvalidHex { index, source }
    }

    /// Helper constructor for configuration errors without an underlying cause.
    pub fn config(reason: impl Into<String>) -> Self {
        MoveeError::Config { reason: reason.into(), source: None }
    }

    /// Helper constructor for configuration errors with source.
    pub fn config_with_source(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        MoveeError::Config { reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        MoveeError::File { path, source }
    }

    /// Attribute a decode failure to the segment it came from.
    pub fn decode(index: usize, source: DecodeError) -> Self {
        MoveeError::Decode { index, source }
    }
}

impl From<serde_yaml_ng::Error> for MoveeError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        MoveeError::config_with_source("invalid YAML", Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn decode_error_messages_carry_their_context(
            actual in 0usize..3,
            discriminant in any::<u8>(),
            offset in 0usize..16,
        ) {
            let too_short = DecodeError::TooShort { actual };
            prop_assert!(too_short.to_string().contains(&actual.to_string()));

            let unknown = DecodeError::UnknownType { discriminant };
            let expected = format!("{discriminant:#04x}");
            prop_assert!(unknown.to_string().contains(&expected));

            let malformed = DecodeError::MalformedField { field: "roll", offset };
            let msg = malformed.to_string();
            prop_assert!(msg.contains("roll"));
            prop_assert!(msg.contains(&offset.to_string()));
        }

        #[test]
        fn segment_index_survives_wrapping(index in any::<usize>(), discriminant in any::<u8>()) {
            let err = MoveeError::decode(index, DecodeError::UnknownType { discriminant });
            let expected = format!("frame {index}:");
            prop_assert!(err.to_string().starts_with(&expected));
            let source = std::error::Error::source(&err);
            prop_assert!(source.is_some());
        }
    }

    #[test]
    fn bad_length_reports_expected_and_actual() {
        let err = DecodeError::BadLength {
            frame_type: FrameType::Tilt,
            expected: LengthRule::Exactly(7),
            actual: 6,
        };
        assert_eq!(err.to_string(), "Tilt frame must be exactly 7 bytes long, got 6");
        assert_eq!(err.kind(), DecodeErrorKind::BadLength);
    }

    #[test]
    fn error_traits_validation() {
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<MoveeError>();
        assert_send_sync_static::<DecodeError>();

        let error = MoveeError::config("test");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn recovery_suggestions_are_descriptive() {
        let errors = [
            MoveeError::config("bad sentinel"),
            MoveeError::invalid_hex(0, hex::FromHexError::OddLength),
            MoveeError::decode(3, DecodeError::TooShort { actual: 1 }),
            MoveeError::file_error(
                PathBuf::from("/nope.yaml"),
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            ),
        ];

        for error in &errors {
            let suggestions = error.recovery_suggestions();
            assert!(!suggestions.is_empty());
            assert!(suggestions.iter().all(|s| s.len() > 5));
        }
    }

    #[test]
    fn yaml_errors_convert_to_config() {
        let yaml_err = serde_yaml_ng::from_str::<u8>("[not, a, byte]").unwrap_err();
        let err: MoveeError = yaml_err.into();
        assert!(matches!(err, MoveeError::Config { source: Some(_), .. }));
    }
}
