//! Protocol codec
//!
//! Encoding of commands and decoding of replies for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request (Command) Format
//! ```text
//! *<argc>\r\n
//! $<len(arg_1)>\r\n<arg_1 bytes>\r\n
//! ...
//! $<len(arg_N)>\r\n<arg_N bytes>\r\n
//! ```
//!
//! ### Reply Format
//! ```text
//! ┌────────────┬──────────────────────────────────────────────┐
//! │ Prefix (1) │ Body                                         │
//! ├────────────┼──────────────────────────────────────────────┤
//! │ +          │ <status line>\r\n                            │
//! │ -          │ <error line>\r\n                             │
//! │ :          │ <decimal>\r\n                                │
//! │ $          │ <len>\r\n<len bytes>\r\n   or  -1\r\n        │
//! │ *          │ <count>\r\n<count replies> or  -1\r\n        │
//! └────────────┴──────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Cursor, Read, Write};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{DecodeError, EncodeError, Result};
use super::Reply;

/// Line terminator for every header and payload
pub const CRLF: &[u8] = b"\r\n";

pub const STATUS_PREFIX: u8 = b'+';
pub const ERROR_PREFIX: u8 = b'-';
pub const INTEGER_PREFIX: u8 = b':';
pub const BULK_PREFIX: u8 = b'$';
pub const MULTI_BULK_PREFIX: u8 = b'*';

/// Length/count value marking a null bulk or null array
pub const NULL_LENGTH: i64 = -1;

/// Cap on up-front allocation driven by a length or count header
const PREALLOC_LIMIT: usize = 64 * 1024;

/// Decoder limits
///
/// The default imposes no maximum line length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Longest accepted status/error/integer/length line, terminator excluded
    pub max_line_length: Option<usize>,
}

// =============================================================================
// Command Encoding
// =============================================================================

/// Encode an argument list as a request
///
/// Each argument is framed by its exact byte length.
pub fn encode_command<A: AsRef<[u8]>>(args: &[A]) -> std::result::Result<Bytes, EncodeError> {
    if args.is_empty() {
        return Err(EncodeError::TooFewArguments);
    }

    let payload_len: usize = args.iter().map(|arg| arg.as_ref().len() + 16).sum();
    let mut buf = BytesMut::with_capacity(16 + payload_len);

    put_header(&mut buf, MULTI_BULK_PREFIX, args.len());
    for arg in args {
        let arg = arg.as_ref();
        put_header(&mut buf, BULK_PREFIX, arg.len());
        buf.put_slice(arg);
        buf.put_slice(CRLF);
    }

    Ok(buf.freeze())
}

fn put_header(buf: &mut BytesMut, prefix: u8, value: usize) {
    buf.put_u8(prefix);
    buf.put_slice(value.to_string().as_bytes());
    buf.put_slice(CRLF);
}

/// Write a command to a stream
pub fn write_command<W: Write, A: AsRef<[u8]>>(writer: &mut W, args: &[A]) -> Result<()> {
    let bytes = encode_command(args)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Reply Decoding
// =============================================================================

/// Read one complete reply from a stream
///
/// Blocks until the reply is complete or an error occurs.
pub fn read_reply<R: BufRead>(reader: &mut R) -> std::result::Result<Reply, DecodeError> {
    read_reply_with(reader, &DecodeOptions::default())
}

/// Read one complete reply from a stream, honoring `options`
pub fn read_reply_with<R: BufRead>(
    reader: &mut R,
    options: &DecodeOptions,
) -> std::result::Result<Reply, DecodeError> {
    let mut prefix = [0u8; 1];
    read_exact(reader, &mut prefix)?;

    match prefix[0] {
        STATUS_PREFIX => Ok(Reply::Status(read_line(reader, options)?)),
        ERROR_PREFIX => Ok(Reply::Error(read_line(reader, options)?)),
        INTEGER_PREFIX => Ok(Reply::Integer(read_line(reader, options)?)),
        BULK_PREFIX => read_bulk(reader, options),
        MULTI_BULK_PREFIX => read_multi_bulk(reader, options),
        other => Err(DecodeError::UnknownPrefix(other)),
    }
}

/// Decode one reply from an in-memory buffer
pub fn decode_reply(bytes: &[u8]) -> std::result::Result<Reply, DecodeError> {
    read_reply(&mut Cursor::new(bytes))
}

/// Decode request framing back into its argument list
///
/// A request is a non-empty, non-null array whose elements are all non-null
/// bulk strings; anything else is rejected.
pub fn decode_command(bytes: &[u8]) -> std::result::Result<Vec<Bytes>, DecodeError> {
    let Reply::MultiBulk(Some(items)) = decode_reply(bytes)? else {
        return Err(DecodeError::NotACommand);
    };
    if items.is_empty() {
        return Err(DecodeError::NotACommand);
    }

    items
        .into_iter()
        .map(|item| match item {
            Reply::Bulk(Some(arg)) => Ok(arg),
            _ => Err(DecodeError::NotACommand),
        })
        .collect()
}

/// `$<len>\r\n<payload>\r\n` after the prefix byte
fn read_bulk<R: BufRead>(
    reader: &mut R,
    options: &DecodeOptions,
) -> std::result::Result<Reply, DecodeError> {
    let Some(len) = read_length(reader, options, "bulk length")? else {
        return Ok(Reply::Bulk(None));
    };

    // Grow with the data actually received instead of trusting the header.
    let mut payload = Vec::with_capacity(len.min(PREALLOC_LIMIT));
    let received = reader.by_ref().take(len as u64).read_to_end(&mut payload)?;
    if received < len {
        return Err(DecodeError::UnexpectedEof);
    }

    let mut terminator = [0u8; 2];
    read_exact(reader, &mut terminator)?;
    if terminator != CRLF {
        return Err(DecodeError::MissingTerminator);
    }

    Ok(Reply::Bulk(Some(Bytes::from(payload))))
}

/// `*<count>\r\n` followed by `count` nested replies
fn read_multi_bulk<R: BufRead>(
    reader: &mut R,
    options: &DecodeOptions,
) -> std::result::Result<Reply, DecodeError> {
    let Some(count) = read_length(reader, options, "array count")? else {
        return Ok(Reply::MultiBulk(None));
    };

    let mut items = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    for _ in 0..count {
        items.push(read_reply_with(reader, options)?);
    }

    Ok(Reply::MultiBulk(Some(items)))
}

/// Parse a length/count line; `None` for the null sentinel
fn read_length<R: BufRead>(
    reader: &mut R,
    options: &DecodeOptions,
    field: &'static str,
) -> std::result::Result<Option<usize>, DecodeError> {
    let line = read_line(reader, options)?;
    let invalid = || DecodeError::InvalidLength {
        field,
        line: line.clone(),
    };

    let value: i64 = line.parse().map_err(|_| invalid())?;
    if value == NULL_LENGTH {
        return Ok(None);
    }

    usize::try_from(value).map(Some).map_err(|_| invalid())
}

/// Read up to and including `\n`, returning the text with every CR and LF
/// byte removed
///
/// Accepts both `\r\n` and a bare `\n`.
fn read_line<R: BufRead>(
    reader: &mut R,
    options: &DecodeOptions,
) -> std::result::Result<String, DecodeError> {
    let mut line = Vec::new();

    match options.max_line_length {
        None => {
            reader.read_until(b'\n', &mut line)?;
        }
        Some(limit) => {
            // Room for the longest legal line plus its two terminator bytes.
            let budget = (limit as u64).saturating_add(2);
            reader.by_ref().take(budget).read_until(b'\n', &mut line)?;
            if line.last() != Some(&b'\n') && line.len() as u64 >= budget {
                return Err(DecodeError::LineTooLong { limit });
            }
        }
    }

    if line.pop() != Some(b'\n') {
        return Err(DecodeError::UnexpectedEof);
    }
    line.retain(|&b| b != b'\r');

    if let Some(limit) = options.max_line_length {
        if line.len() > limit {
            return Err(DecodeError::LineTooLong { limit });
        }
    }

    Ok(String::from_utf8_lossy(&line).into_owned())
}

fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::result::Result<(), DecodeError> {
    reader.read_exact(buf).map_err(|err| match err.kind() {
        std::io::ErrorKind::UnexpectedEof => DecodeError::UnexpectedEof,
        _ => DecodeError::Io(err),
    })
}
