//! Quote-aware field reader.
//!
//! Reads the leading name-like field of a directive fragment. The first quoted
//! span in the fragment decides the shape:
//!
//! ```text
//! "Web 01" 10.0.0.1            quote at offset 0  -> Quoted
//! web01 10.0.0.1 "rack 4"      quote further in   -> BareBeforeComment
//! web01 10.0.0.1               no quote           -> Bare
//! ```
//!
//! A quote further in belongs to a trailing comment, never to the name, so the
//! name is the bare token up to the first blank. Quotes inside that comment are
//! left untouched for whatever reads the remainder next.

use regex::Regex;

/// How the leading field of a fragment was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// `"name with blanks" ...`
    Quoted,
    /// `name ... "comment"`
    BareBeforeComment,
    /// `name ...`
    Bare,
}

/// A leading field and what is left of the fragment after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'a str,
    /// Unconsumed fragment, trimmed.
    pub rest: &'a str,
    pub shape: FieldShape,
}

/// Split the leading name-like field off `fragment`.
///
/// Returns `None` when the fragment holds no name at all (blank, or `""`).
pub fn read_field(fragment: &str) -> Option<Field<'_>> {
    let fragment = fragment.trim();

    let field = match quoted_span().find(fragment) {
        Some(span) if span.start() == 0 => {
            let quoted = span.as_str();
            Field {
                name: quoted[1..quoted.len() - 1].trim(),
                rest: fragment[span.end()..].trim(),
                shape: FieldShape::Quoted,
            }
        }
        Some(_) => bare(fragment, FieldShape::BareBeforeComment),
        None => bare(fragment, FieldShape::Bare),
    };

    tracing::trace!(fragment, name = field.name, shape = ?field.shape, "read field");
    (!field.name.is_empty()).then_some(field)
}

/// A double-quoted span: no nested quotes, no line breaks.
pub(super) fn quoted_span() -> &'static Regex {
    regex!(r#""[^"\r\n]*""#)
}

fn bare(fragment: &str, shape: FieldShape) -> Field<'_> {
    let (name, rest) = fragment.split_once(char::is_whitespace).unwrap_or((fragment, ""));
    Field { name, rest: rest.trim(), shape }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_at_start() {
        let f = read_field(r#""Name One" 10.0.0.2"#).unwrap();
        assert_eq!(f, Field { name: "Name One", rest: "10.0.0.2", shape: FieldShape::Quoted });
    }

    #[test]
    fn quoted_name_is_trimmed_inside_the_quotes() {
        let f = read_field(r#""  Svc A " S1 HTTP 80"#).unwrap();
        assert_eq!(f.name, "Svc A");
        assert_eq!(f.rest, "S1 HTTP 80");
    }

    #[test]
    fn bare_name_before_comment() {
        let f = read_field(r#"S2 10.0.0.3 "primary DC""#).unwrap();
        assert_eq!(f.name, "S2");
        assert_eq!(f.rest, r#"10.0.0.3 "primary DC""#);
        assert_eq!(f.shape, FieldShape::BareBeforeComment);
    }

    #[test]
    fn bare_name_without_quotes() {
        let f = read_field("S1   10.0.0.1").unwrap();
        assert_eq!(f, Field { name: "S1", rest: "10.0.0.1", shape: FieldShape::Bare });
    }

    #[test]
    fn lone_token_has_empty_rest() {
        let f = read_field("S1").unwrap();
        assert_eq!(f.name, "S1");
        assert_eq!(f.rest, "");
    }

    #[test]
    fn unterminated_quote_reads_as_bare() {
        let f = read_field(r#""broken 10.0.0.1"#).unwrap();
        assert_eq!(f.name, "\"broken");
        assert_eq!(f.shape, FieldShape::Bare);
    }

    #[test]
    fn remainder_can_be_read_again() {
        let svc = read_field(r#"web_svc "Web Server" HTTP 80"#).unwrap();
        assert_eq!(svc.name, "web_svc");
        assert_eq!(svc.shape, FieldShape::BareBeforeComment);

        let server = read_field(svc.rest).unwrap();
        assert_eq!(server.name, "Web Server");
        assert_eq!(server.rest, "HTTP 80");
        assert_eq!(server.shape, FieldShape::Quoted);
    }

    #[test]
    fn empty_fragments_have_no_field() {
        assert_eq!(read_field(""), None);
        assert_eq!(read_field("   \t"), None);
        assert_eq!(read_field(r#""" 10.0.0.1"#), None);
    }
}
