//! Unified error type definition

use thiserror::Error;

/// Coarse classification of a failed load.
///
/// Every kind is handled the same way by the presenter (indicator stopped,
/// list left as it was); the kind only matters for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The hardcoded/configured endpoint is not a valid URL
    Configuration,
    /// Network, DNS or TLS failure
    Transport,
    /// Payload absent, empty or structurally invalid
    Decode,
}

/// Decoder error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Not valid JSON, or not an array of objects
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// A mapped key is absent from one of the entries
    #[error("Entry {index}: missing key '{key}'")]
    MissingField { index: usize, key: String },

    /// A mapped key is present but does not hold a string
    #[error("Entry {index}: key '{key}' is not a string")]
    WrongType { index: usize, key: String },
}

/// Load error (fetch + decode)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The endpoint string could not be parsed; no request was sent
    #[error("Invalid endpoint '{endpoint}': {detail}")]
    InvalidEndpoint { endpoint: String, detail: String },

    /// network error
    #[error("Network error: {0}")]
    Transport(String),

    /// The response carried no bytes
    #[error("No data received")]
    EmptyBody,

    /// The payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl LoadError {
    /// Error classification
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEndpoint { .. } => ErrorKind::Configuration,
            Self::Transport(_) => ErrorKind::Transport,
            Self::EmptyBody | Self::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Whether it is expected behavior (remote data shape, empty response), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::EmptyBody | Self::Decode(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_mapping() {
        let invalid = LoadError::InvalidEndpoint {
            endpoint: "::".into(),
            detail: "relative URL without a base".into(),
        };
        assert_eq!(invalid.kind(), ErrorKind::Configuration);
        assert_eq!(LoadError::Transport("refused".into()).kind(), ErrorKind::Transport);
        assert_eq!(LoadError::EmptyBody.kind(), ErrorKind::Decode);
        assert_eq!(
            LoadError::Decode(DecodeError::Malformed("eof".into())).kind(),
            ErrorKind::Decode
        );
    }

    #[test]
    fn expected_errors_are_remote_data_problems() {
        assert!(LoadError::EmptyBody.is_expected());
        assert!(LoadError::Decode(DecodeError::MissingField {
            index: 0,
            key: "Nicknames".into(),
        })
        .is_expected());
        assert!(!LoadError::Transport("timeout".into()).is_expected());
    }

    #[test]
    fn decode_error_message_names_entry_and_key() {
        let e = LoadError::from(DecodeError::WrongType {
            index: 3,
            key: "Names".into(),
        });
        assert_eq!(e.to_string(), "Decode error: Entry 3: key 'Names' is not a string");
    }
}
