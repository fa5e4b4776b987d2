use std::sync::OnceLock;

use regex::Regex;

use super::types::{BlockKind, Classification};

/// Trailing marker that forces a line break but keeps the block open.
pub const SOFT_BREAK: &str = " _";

/// Removes a trailing soft break, reporting whether there was one.
pub fn split_soft_break(line: &str) -> (&str, bool) {
    match line.strip_suffix(SOFT_BREAK) {
        Some(content) => (content, true),
        None => (line, false),
    }
}

fn list_regex() -> &'static Regex {
    static LIST_REGEX: OnceLock<Regex> = OnceLock::new();
    LIST_REGEX
        .get_or_init(|| Regex::new(r"^([ \t]*)(\*+|#+)\s+(\S.*)$").expect("Invalid list regex"))
}

fn table_regex() -> &'static Regex {
    static TABLE_REGEX: OnceLock<Regex> = OnceLock::new();
    TABLE_REGEX.get_or_init(|| Regex::new(r"^\s*(\|\|.*)$").expect("Invalid table regex"))
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX
        .get_or_init(|| Regex::new(r"^\s*(\+{1,6})\s+(\S.*)$").expect("Invalid heading regex"))
}

fn rule_regex() -> &'static Regex {
    static RULE_REGEX: OnceLock<Regex> = OnceLock::new();
    RULE_REGEX.get_or_init(|| Regex::new(r"^\s*-{4,}\s*$").expect("Invalid rule regex"))
}

/// Classifies individual lines for the block assembler.
///
/// Each line is classified on its own; the assembler decides whether it
/// joins the open block.
pub struct WikidotLineClassifier;

impl WikidotLineClassifier {
    /// Classifies a line already stripped of blockquote markers.
    ///
    /// Patterns are tried in a fixed order: list item, table row, heading,
    /// horizontal rule, blank, paragraph. Paragraph always matches.
    pub fn classify(&self, line: &str) -> Classification {
        let (content, soft_break) = split_soft_break(line);

        if let Some(caps) = list_regex().captures(content) {
            let marker = &caps[2];
            return Classification {
                kind: BlockKind::List,
                indent: caps[1].chars().count() + marker.len() - 1,
                tag: marker[..1].to_string(),
                content: caps[3].to_string(),
                soft_break,
                continuation: false,
            };
        }
        if let Some(caps) = table_regex().captures(content) {
            return Self::simple(BlockKind::Table, "", &caps[1], soft_break);
        }
        if let Some(caps) = heading_regex().captures(content) {
            return Self::simple(BlockKind::Heading, &caps[1], &caps[2], soft_break);
        }
        // Rules and blanks take no soft break, so match the untouched line.
        if rule_regex().is_match(line) {
            return Self::simple(BlockKind::HorizontalRule, "", "", false);
        }
        if line.trim().is_empty() {
            return Self::simple(BlockKind::Blank, "", "", false);
        }
        Self::simple(BlockKind::Paragraph, "", content, soft_break)
    }

    /// Classifies a line that follows a soft break as part of `kind`.
    ///
    /// The whole line is content; only a new soft break is detected.
    pub fn continuation(&self, line: &str, kind: BlockKind) -> Classification {
        let (content, soft_break) = split_soft_break(line);
        Classification {
            continuation: true,
            ..Self::simple(kind, "", content, soft_break)
        }
    }

    fn simple(kind: BlockKind, tag: &str, content: &str, soft_break: bool) -> Classification {
        Classification {
            kind,
            indent: 0,
            tag: tag.to_string(),
            content: content.to_string(),
            soft_break,
            continuation: false,
        }
    }
}
