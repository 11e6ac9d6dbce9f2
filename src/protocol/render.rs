//! Reply rendering
//!
//! Turns a [`Reply`] into the text shown to an interactive user:
//!
//! ```text
//! 0) 0) (integer) 1
//!    1) foo
//! 1) (nil)
//! ```

use std::fmt;

use super::Reply;

pub const NIL_MARKER: &str = "(nil)";

/// Render a reply as indented, human-readable text
///
/// The result carries no trailing line terminator. An empty array has no
/// lines and renders as the empty string.
pub fn render(reply: &Reply) -> String {
    let mut out = String::new();
    render_into(reply, 0, &mut out);
    out
}

/// `indent` is the column at which continuation lines of `reply` start.
fn render_into(reply: &Reply, indent: usize, out: &mut String) {
    match reply {
        Reply::Status(text) | Reply::Error(text) => out.push_str(text),
        Reply::Integer(text) => {
            out.push_str("(integer) ");
            out.push_str(text);
        }
        Reply::Bulk(Some(bytes)) => out.push_str(&String::from_utf8_lossy(bytes)),
        Reply::Bulk(None) | Reply::MultiBulk(None) => out.push_str(NIL_MARKER),
        Reply::MultiBulk(Some(items)) => {
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push('\n');
                    out.extend(std::iter::repeat(' ').take(indent));
                }
                let ordinal = format!("{index}) ");
                out.push_str(&ordinal);
                render_into(item, indent + ordinal.len(), out);
            }
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
