//! Interactive session state
//!
//! Interprets REPL input and tracks the database selected on the server.

use crate::error::TokenizeError;
use crate::protocol::Reply;
use super::tokenize;

const QUIT_COMMAND: &str = "quit";
const SELECT_COMMAND: &str = "select";

/// One interpreted line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Nothing to send
    Empty,

    /// Leave the shell
    Quit,

    /// A non-empty argument list, ready for the encoder
    Command(Vec<String>),
}

/// Prompt and database bookkeeping for one connection
#[derive(Debug, Clone)]
pub struct Session {
    /// Server address shown in the prompt
    addr: String,

    /// Database index from the last successful SELECT
    db: u32,
}

impl Session {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            db: 0,
        }
    }

    /// Interpret a raw input line
    ///
    /// Surrounding whitespace is trimmed first. A line that yields no
    /// arguments is reported as [`Input::Empty`] so it never reaches the
    /// encoder.
    pub fn parse_input(line: &str) -> Result<Input, TokenizeError> {
        let line = line.trim();
        if line.eq_ignore_ascii_case(QUIT_COMMAND) {
            return Ok(Input::Quit);
        }

        let args = tokenize(line)?;
        if args.is_empty() {
            Ok(Input::Empty)
        } else {
            Ok(Input::Command(args))
        }
    }

    pub fn prompt(&self) -> String {
        if self.db == 0 {
            format!("redis {}>", self.addr)
        } else {
            format!("redis {}[{}]>", self.addr, self.db)
        }
    }

    /// Currently selected database
    pub fn db(&self) -> u32 {
        self.db
    }

    /// Record the effect of a completed command
    pub fn observe(&mut self, args: &[String], reply: &Reply) {
        if reply.is_error() {
            return;
        }

        if let [command, index] = args {
            if command.eq_ignore_ascii_case(SELECT_COMMAND) {
                match index.parse() {
                    Ok(db) => self.db = db,
                    Err(_) => tracing::debug!("Ignoring unparsable database index {:?}", index),
                }
            }
        }
    }
}
