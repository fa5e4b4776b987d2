use crate::parsing::html::escape_text;
use crate::parsing::inline::types::Marker;

/// Entity used for whitespace inside `@@...@@` and `@<...>@`.
pub const SPACE_ENTITY: &str = "&#32;";

/// The marker ending a literal span started by `opener`.
pub fn terminator(opener: Marker) -> Option<Marker> {
    match opener {
        Marker::Literal => Some(Marker::Literal),
        Marker::RawOpen => Some(Marker::RawClose),
        _ => None,
    }
}

/// Encodes text found inside a literal span.
///
/// `@@` content is HTML-escaped; `@<` content is passed through so authors
/// can write entities. Whitespace is entity-encoded in both.
pub fn encode(text: &str, escape: bool) -> String {
    let text = if escape {
        escape_text(text)
    } else {
        text.into()
    };
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_whitespace() {
            out.push_str(SPACE_ENTITY);
        } else {
            out.push(c);
        }
    }
    out
}
