//! # kvwire
//!
//! A blocking client for Redis-compatible key-value servers:
//! - Command tokenizer with double-quote support
//! - Request encoder for the line / length-prefixed wire format
//! - Recursive reply decoder with null bulk and null array sentinels
//! - Indented reply renderer for interactive use
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    kvwire-cli (REPL)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ input line
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Session / Tokenizer                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ argv
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Connection                               │
//! └──────────┬──────────────────────────────────▲───────────────┘
//!            │                                  │
//!            ▼                                  │
//!   ┌─────────────────┐                ┌────────┴────────┐
//!   │     Encoder     │ ──► stream ──► │     Decoder     │
//!   └─────────────────┘                └────────┬────────┘
//!                                               │ Reply
//!                                               ▼
//!                                      ┌─────────────────┐
//!                                      │    Renderer     │
//!                                      └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod shell;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::ClientConfig;
pub use network::Connection;
pub use protocol::Reply;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
