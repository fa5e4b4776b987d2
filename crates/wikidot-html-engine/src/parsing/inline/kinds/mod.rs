//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters. The lexer asks each
//! kind how long a match at the cursor is; the parser asks it to interpret
//! the matched text. Neither hardcodes `[[`, `##` or `[!--` itself.
//!
//! - **`comment`**: `[!-- ... --]`, dropped from output
//! - **`color`**: `##name|` heads and bare `##` ends
//! - **`link`**: `[[[href|text]]]`, `[href text]` and bare URLs
//! - **`element`**: `[[...]]` forms (span, size, image, anchor)
//! - **`literal`**: entity encoding for `@@...@@` and `@<...>@`

pub mod color;
pub mod comment;
pub mod element;
pub mod link;
pub mod literal;

pub use color::Color;
pub use comment::Comment;
pub use element::{DoubleBracket, Element};
pub use link::{BareUrl, BracketLink, TripleLink};
