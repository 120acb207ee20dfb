//! Directive selection.
//!
//! Selection is pattern matching over the whole text rather than line
//! splitting: the keyword, at least one blank, then everything up to the end
//! of the line. Carriage returns never end up in a body, so CRLF dumps resolve
//! exactly like LF ones.

use crate::Result;
use regex::Regex;

/// Keyword of server directives.
pub const ADD_SERVER: &str = "add server";
/// Keyword of service directives.
pub const ADD_SERVICE: &str = "add service";

/// A matched directive with its keyword stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// 1-based line the directive starts on.
    pub line: usize,
    /// Everything after the keyword, trailing blanks removed.
    pub body: &'a str,
}

/// Return every directive introduced by `keyword`, in file order.
///
/// No match is an empty vector, not an error.
pub fn select<'a>(text: &'a str, keyword: &str) -> Result<Vec<Directive<'a>>> {
    let pattern = format!(r"{}[ \t]+([^\r\n]*)", regex::escape(keyword));
    let re = Regex::new(&pattern)?;

    let mut directives = Vec::new();
    let mut line = 1;
    let mut cursor = 0;
    for caps in re.captures_iter(text) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        line += text[cursor..whole.start()].matches('\n').count();
        cursor = whole.start();
        directives.push(Directive { line, body: body.as_str().trim_end() });
    }

    tracing::debug!(keyword, count = directives.len(), "selected directives");
    Ok(directives)
}
