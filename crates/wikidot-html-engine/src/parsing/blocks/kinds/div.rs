use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::html::Attributes;

/// `[[div ...]]` / `[[/div]]` lines.
///
/// Div tags are only recognised alone on a line; anywhere else they are
/// inline text.
pub struct Div;

impl Div {
    pub const CLOSE_TAG: &'static str = "</div>\n";

    fn open_regex() -> &'static Regex {
        static OPEN_REGEX: OnceLock<Regex> = OnceLock::new();
        OPEN_REGEX.get_or_init(|| {
            Regex::new(r"(?i)^\s*\[\[div(\s[^\]]*)?\]\]\s*$").expect("Invalid div open regex")
        })
    }

    fn close_regex() -> &'static Regex {
        static CLOSE_REGEX: OnceLock<Regex> = OnceLock::new();
        CLOSE_REGEX.get_or_init(|| {
            Regex::new(r"(?i)^\s*\[\[/div\]\]\s*$").expect("Invalid div close regex")
        })
    }

    /// Parses a div opener line into its attributes.
    pub fn parse_open(line: &str, id_prefix: &str) -> Option<Attributes> {
        let caps = Self::open_regex().captures(line)?;
        let args = caps.get(1).map_or("", |m| m.as_str());
        Some(Attributes::parse(args, id_prefix))
    }

    pub fn is_close(line: &str) -> bool {
        Self::close_regex().is_match(line)
    }

    pub fn write_open(attrs: &Attributes, out: &mut String) {
        out.push_str("<div");
        attrs.write_to(out);
        out.push_str(">\n");
    }
}
