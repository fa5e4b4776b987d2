//! # Inline Parsing
//!
//! Turns the text of one block fragment into HTML.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing. Block renderers hand it
//! fragments (a paragraph line, a list item, a table cell) and splice the
//! result into their own markup.
//!
//! ## Modules
//!
//! - **`types`**: `Token`, `TokenKind` and the doubled `Marker` set
//! - **`kinds`**: bracket constructs, color heads, comments and literal spans
//! - **`cursor`**: `Cursor` for scanning text, `TokenCursor` for neighbour lookahead
//! - **`lexer`**: `lex()` greedy longest-prefix tokenizer
//! - **`node`**: arena `NodeTree` and its HTML serializer
//! - **`parser`**: `InlineParser` formatting automaton
//!
//! ## Open/Close Adjacency
//!
//! A doubled marker opens only when the next token is not whitespace and
//! closes only when the previous token is not whitespace. Anything else is
//! literal text. `[[span]]`, `[[size]]` and the literal spans ignore this.

pub mod cursor;
pub mod kinds;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod types;

use crate::error::ConvertError;
use crate::options::ConvertOptions;

pub use lexer::lex;
pub use parser::InlineParser;
pub use types::{Marker, Token, TokenKind};

/// Renders a single inline fragment with a fresh parser.
pub fn render_fragment(text: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let mut parser = InlineParser::new(options);
    parser.feed(text)?;
    Ok(parser.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_round_trips_escaped() {
        let html = render_fragment("Fish & chips <today>", &ConvertOptions::default()).unwrap();
        assert_eq!(html, "Fish &amp; chips &lt;today&gt;");
    }

    #[test]
    fn span_ids_use_configured_prefix() {
        let options = ConvertOptions {
            div_id_prefix: "user-".to_string(),
            ..ConvertOptions::default()
        };
        let html = render_fragment(r#"[[span id="x"]]a[[/span]]"#, &options).unwrap();
        assert_eq!(html, r#"<span id="user-x">a</span>"#);
    }
}
