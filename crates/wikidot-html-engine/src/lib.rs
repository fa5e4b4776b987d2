//! Conversion engine for Wikidot-style wiki markup.
//!
//! Lines are classified and grouped into blocks, each block's text is run
//! through an inline formatting automaton, and the result is written out as
//! an HTML fragment.
//!
//! ```
//! let html = wikidot_html_engine::convert("//hello// **world**").unwrap();
//! assert_eq!(html, "<p><em>hello</em> <strong>world</strong></p>\n");
//! ```

pub mod error;
pub mod options;
pub mod parsing;

// Re-export key types for easier usage
pub use error::ConvertError;
pub use options::ConvertOptions;
pub use parsing::{
    Converter, convert,
    blocks::{BlockAssembler, BlockKind},
    inline::render_fragment,
};
