//! Error types for JSON serialization and record reconstruction.

use thiserror::Error;

/// Errors returned by [`serialize`](crate::serialize) and the deserialize functions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JsonBridgeError {
    /// The input text is not well-formed JSON.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The parsed values do not fit the shape's positional constructor.
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// The record cannot be represented as JSON (e.g. a map with non-string keys).
    #[error("cannot serialize record: {0}")]
    Serialize(String),
}

/// Malformed JSON text.
///
/// Line and column are 1-based and point at the character where parsing stopped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid JSON at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json appends " at line X column Y" to its Display output
        let message = err.to_string();
        let message = match message.rfind(" at line ") {
            Some(idx) => message[..idx].to_string(),
            None => message,
        };
        ParseError {
            message,
            line: err.line(),
            column: err.column(),
        }
    }
}

/// The positional arguments could not be fed to a shape's constructor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// No value was available for a required parameter.
    #[error("{shape}: missing argument `{parameter}` at position {position}")]
    MissingArgument {
        shape: &'static str,
        parameter: &'static str,
        position: usize,
    },

    /// A value was present but has the wrong type for its parameter.
    #[error("{shape}: invalid argument `{parameter}` at position {position}: {reason}")]
    InvalidArgument {
        shape: &'static str,
        parameter: &'static str,
        position: usize,
        reason: String,
    },

    /// More values were supplied than the constructor takes.
    #[error("{shape}: expected {expected} argument(s), found {found}")]
    TooManyArguments {
        shape: &'static str,
        expected: usize,
        found: usize,
    },

    /// The JSON value has no fields to enumerate (`null`).
    #[error("{shape}: cannot construct from null")]
    NotARecord { shape: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_from_serde() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let parse = ParseError::from(err);
        assert_eq!(parse.line, 2);
        assert!(!parse.message.contains(" at line "));
    }

    #[test]
    fn construction_error_messages() {
        let err = ConstructionError::TooManyArguments {
            shape: "Rectangle",
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "Rectangle: expected 2 argument(s), found 3");

        let err = JsonBridgeError::from(ConstructionError::NotARecord { shape: "Circle" });
        assert_eq!(err.to_string(), "Circle: cannot construct from null");
    }
}
