//! Shell Module
//!
//! Text-facing side of the client.
//!
//! ## Flow
//! ```text
//! input line ──► Session::parse_input ──► tokenize ──► argv ──► encoder
//! ```

mod tokenizer;
mod session;

pub use tokenizer::tokenize;
pub use session::{Input, Session};
