//! Reply definitions
//!
//! Represents one decoded server response.

use std::borrow::Cow;

use bytes::Bytes;

use crate::error::ConversionError;

/// A decoded server reply
///
/// `Bulk(None)` and `MultiBulk(None)` are the protocol's null sentinels and
/// compare unequal to an empty payload or an empty array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `+OK` style one-line status
    Status(String),

    /// `-ERR ...` reported by the server
    Error(String),

    /// `:42`, kept as text until converted
    Integer(String),

    /// `$<len>` length-prefixed payload
    Bulk(Option<Bytes>),

    /// `*<count>` array of nested replies
    MultiBulk(Option<Vec<Reply>>),
}

macro_rules! scalar_accessor {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Parse the reply text as a base-10 `", stringify!($ty), "`.")]
            pub fn $name(&self) -> Result<$ty, ConversionError> {
                self.parse_integer(stringify!($ty))
            }
        )*
    };
}

impl Reply {
    /// Create a bulk reply from anything convertible into bytes
    pub fn bulk(payload: impl Into<Bytes>) -> Self {
        Reply::Bulk(Some(payload.into()))
    }

    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Status(_) => "status",
            Reply::Error(_) => "error",
            Reply::Integer(_) => "integer",
            Reply::Bulk(Some(_)) => "bulk",
            Reply::Bulk(None) => "null bulk",
            Reply::MultiBulk(Some(_)) => "array",
            Reply::MultiBulk(None) => "null array",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    /// True for either null sentinel
    pub fn is_nil(&self) -> bool {
        matches!(self, Reply::Bulk(None) | Reply::MultiBulk(None))
    }

    /// Scalar text of a status, integer or bulk reply
    ///
    /// Bulk payloads that are not valid UTF-8 are decoded lossily. A server
    /// error is handed back as [`ConversionError::Server`].
    pub fn as_text(&self) -> Result<Cow<'_, str>, ConversionError> {
        match self {
            Reply::Status(text) | Reply::Integer(text) => Ok(Cow::Borrowed(text)),
            Reply::Bulk(Some(bytes)) => Ok(String::from_utf8_lossy(bytes)),
            Reply::Error(message) => Err(ConversionError::Server(message.clone())),
            Reply::Bulk(None) | Reply::MultiBulk(_) => {
                Err(ConversionError::TypeMismatch { kind: self.kind() })
            }
        }
    }

    scalar_accessor! {
        to_i8 => i8,
        to_i16 => i16,
        to_i32 => i32,
        to_i64 => i64,
        to_u8 => u8,
        to_u16 => u16,
        to_u32 => u32,
        to_u64 => u64,
    }

    /// Parse through `i128` so that both "not a number" and "too wide for
    /// the target" are reported distinctly for every width.
    fn parse_integer<T: TryFrom<i128>>(&self, target: &'static str) -> Result<T, ConversionError> {
        let text = self.as_text()?;
        let wide: i128 = text.parse().map_err(|err: std::num::ParseIntError| {
            match err.kind() {
                std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
                    ConversionError::OutOfRange {
                        text: text.to_string(),
                        target,
                    }
                }
                _ => ConversionError::NotANumber {
                    text: text.to_string(),
                },
            }
        })?;

        T::try_from(wide).map_err(|_| ConversionError::OutOfRange {
            text: text.to_string(),
            target,
        })
    }
}
