use crate::error::ConvertError;
use crate::parsing::{context::ConvertContext, inline::render_fragment};

use super::super::types::Block;

/// The HTML list element a level renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTag {
    Unordered,
    Ordered,
}

impl ListTag {
    /// Maps a raw item marker to its list element.
    pub fn from_marker(marker: &str) -> Result<Self, ConvertError> {
        match marker {
            "*" => Ok(ListTag::Unordered),
            "#" => Ok(ListTag::Ordered),
            other => Err(ConvertError::UnknownListTag(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ListTag::Unordered => "ul",
            ListTag::Ordered => "ol",
        }
    }
}

/// One open nesting level.
struct Level {
    tag: ListTag,
    in_item: bool,
}

/// Nested `*` / `#` lists.
///
/// Levels are opened and closed as the indent of consecutive items moves,
/// so the output is always balanced even for irregular indentation.
pub struct List;

impl List {
    pub fn render(
        block: &Block,
        ctx: &ConvertContext,
        out: &mut String,
    ) -> Result<(), ConvertError> {
        let mut levels: Vec<Level> = Vec::new();

        for class in block.lines() {
            let fragment = render_fragment(&class.content, &ctx.options)?;

            if class.continuation {
                if !levels.is_empty() {
                    out.push_str("<br />");
                }
                out.push_str(&fragment);
                continue;
            }

            let tag = ListTag::from_marker(&class.tag)?;
            let indent = class.indent;

            while levels.len() > indent + 1 {
                Self::close_level(&mut levels, out);
            }
            if levels.get(indent).is_some_and(|level| level.tag != tag) {
                Self::close_level(&mut levels, out);
            }
            while levels.len() < indent + 1 {
                match levels.last_mut() {
                    Some(parent) => {
                        if !parent.in_item {
                            out.push_str("<li>");
                            parent.in_item = true;
                        }
                        out.push_str(&format!("\n<{}>\n", tag.name()));
                    }
                    None => out.push_str(&format!("<{}>\n", tag.name())),
                }
                levels.push(Level {
                    tag,
                    in_item: false,
                });
            }

            if let Some(level) = levels.last_mut() {
                if level.in_item {
                    out.push_str("</li>\n");
                }
                level.in_item = true;
            }
            out.push_str("<li>");
            out.push_str(&fragment);
        }

        while !levels.is_empty() {
            Self::close_level(&mut levels, out);
        }
        Ok(())
    }

    fn close_level(levels: &mut Vec<Level>, out: &mut String) {
        if let Some(level) = levels.pop() {
            if level.in_item {
                out.push_str("</li>\n");
            }
            out.push_str(&format!("</{}>\n", level.tag.name()));
        }
    }
}
