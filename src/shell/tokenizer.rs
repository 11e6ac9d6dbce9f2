//! Command line tokenizer
//!
//! Splits one line of user input into command arguments.
//!
//! ## Rules
//! - Tokens are separated by runs of the space character. Tabs and other
//!   whitespace are ordinary token characters.
//! - A token starting with `"` extends to the next unescaped `"` and may
//!   contain spaces. `\"` inside it does not close the token and is kept
//!   verbatim, backslash included.
//! - A closing quote must be followed by a space or the end of the line.
//! - `"` and `'` are not allowed inside an unquoted token.

use crate::error::TokenizeError;

const SEPARATOR: u8 = b' ';
const DOUBLE_QUOTE: u8 = b'"';
const SINGLE_QUOTE: u8 = b'\'';
const ESCAPE: u8 = b'\\';

/// Split `line` into arguments
///
/// An empty or all-space line yields an empty list.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = skip_separators(bytes, 0);

    while pos < bytes.len() {
        let (token, end) = if bytes[pos] == DOUBLE_QUOTE {
            read_quoted(line, pos)?
        } else {
            read_unquoted(line, pos)?
        };
        tokens.push(token);

        if end < bytes.len() && bytes[end] != SEPARATOR {
            return Err(TokenizeError::MissingSeparator { position: end });
        }
        pos = skip_separators(bytes, end);
    }

    Ok(tokens)
}

fn skip_separators(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos) == Some(&SEPARATOR) {
        pos += 1;
    }
    pos
}

/// Returns the token and the index just past it.
fn read_unquoted(line: &str, start: usize) -> Result<(String, usize), TokenizeError> {
    let bytes = line.as_bytes();
    let mut pos = start;

    while pos < bytes.len() && bytes[pos] != SEPARATOR {
        if bytes[pos] == DOUBLE_QUOTE || bytes[pos] == SINGLE_QUOTE {
            return Err(TokenizeError::IllegalQuote { position: pos });
        }
        pos += 1;
    }

    // Delimiters are ASCII, so the slice always falls on char boundaries.
    Ok((line[start..pos].to_string(), pos))
}

/// `start` points at the opening quote. Returns the text between the quotes
/// and the index just past the closing quote.
fn read_quoted(line: &str, start: usize) -> Result<(String, usize), TokenizeError> {
    let bytes = line.as_bytes();
    let mut pos = start + 1;

    while pos < bytes.len() {
        match bytes[pos] {
            // Both bytes stay in the token; the quote just doesn't close it.
            ESCAPE if bytes.get(pos + 1) == Some(&DOUBLE_QUOTE) => pos += 2,
            DOUBLE_QUOTE => return Ok((line[start + 1..pos].to_string(), pos + 1)),
            _ => pos += 1,
        }
    }

    Err(TokenizeError::UnterminatedQuote { position: start })
}
