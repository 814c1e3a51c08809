//! Error type shared by filter construction and element encoding.
use thiserror::Error;

/// Errors returned by filter operations.
///
/// Both kinds are caller configuration or data errors; neither is
/// transient and retrying never helps.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A construction parameter was out of range, e.g. a zero-length
    /// bit array or zero hash probes.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An element could not be encoded to bytes.
    #[error("encoding failed: {0}")]
    Encoding(String),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Build an [`Error::Encoding`] from an encoder's failure message.
    ///
    /// Exposed so that user-supplied [`Encode`](crate::Encode)
    /// implementations can report failures in the same shape as the
    /// built-in ones.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Error::Encoding(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = Error::invalid_argument("m and k must both be positive");
        assert_eq!(
            err.to_string(),
            "invalid argument: m and k must both be positive"
        );

        let err = Error::encoding("no canonical byte form");
        assert_eq!(err.to_string(), "encoding failed: no canonical byte form");
    }
}
