//! Error types for kvwire
//!
//! Each component has its own error enum so callers can tell local
//! failures (tokenize/encode) from connection-fatal ones (decode/transport).
//! [`KvError`] unifies them for the connection and the CLI.

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for kvwire operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Command Line Errors
    // -------------------------------------------------------------------------
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] TokenizeError),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KvError {
    /// True when the underlying stream can no longer be trusted and the
    /// connection has to be closed.
    pub fn is_connection_fatal(&self) -> bool {
        matches!(self, KvError::Io(_) | KvError::Decode(_))
    }
}

/// Failures while splitting a command line into arguments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("unterminated quoted token starting at column {position}")]
    UnterminatedQuote { position: usize },

    #[error("illegal quote in unquoted token at column {position}")]
    IllegalQuote { position: usize },

    #[error("missing separator after quoted token at column {position}")]
    MissingSeparator { position: usize },
}

/// Failures while building request bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("too few arguments: a command needs at least one")]
    TooFewArguments,
}

/// Failures while reading a reply off the wire
///
/// Any of these leaves the stream at an undefined framing position.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("transport failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("stream ended before the reply was complete")]
    UnexpectedEof,

    #[error("malformed {field} line: {line:?}")]
    InvalidLength { field: &'static str, line: String },

    #[error("unknown reply type byte '{}'", escape_byte(.0))]
    UnknownPrefix(u8),

    #[error("bulk payload is not followed by CRLF")]
    MissingTerminator,

    #[error("line exceeds the maximum length of {limit} bytes")]
    LineTooLong { limit: usize },

    #[error("request frame is not an array of bulk strings")]
    NotACommand,
}

fn escape_byte(byte: &u8) -> String {
    std::ascii::escape_default(*byte).to_string()
}

/// Failures while turning a reply into a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The reply was a server error; its message is passed through untouched.
    #[error("{0}")]
    Server(String),

    #[error("cannot convert {kind} reply to a scalar")]
    TypeMismatch { kind: &'static str },

    #[error("not a base-10 integer: {text:?}")]
    NotANumber { text: String },

    #[error("{text} is out of range for {target}")]
    OutOfRange { text: String, target: &'static str },
}
