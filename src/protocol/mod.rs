//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (line / length-prefixed)
//!
//! ### Request Format
//! Every command is an array of bulk strings:
//! ```text
//! *3\r\n$3\r\nSET\r\n$1\r\nk\r\n$1\r\nv\r\n
//! ```
//!
//! ### Reply Types
//! - `+`: Status  - one line of text
//! - `-`: Error   - one line reported by the server
//! - `:`: Integer - one line of decimal text
//! - `$`: Bulk    - length line + payload + CRLF, `$-1` is null
//! - `*`: Array   - count line + nested replies, `*-1` is null

mod codec;
mod render;
mod reply;

pub use codec::{
    decode_command, decode_reply, encode_command, read_reply, read_reply_with, write_command,
    DecodeOptions, BULK_PREFIX, CRLF, ERROR_PREFIX, INTEGER_PREFIX, MULTI_BULK_PREFIX,
    NULL_LENGTH, STATUS_PREFIX,
};
pub use render::{render, NIL_MARKER};
pub use reply::Reply;
