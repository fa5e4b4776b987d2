use crate::error::ConvertError;
use crate::parsing::{context::ConvertContext, html::escape_attr, inline::render_fragment};

use super::super::types::Block;

/// `+ Title` through `++++++ Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '+';

    /// Heading level from the `+` run, clamped to `h1`..`h6`.
    pub fn level(tag: &str) -> usize {
        tag.chars()
            .filter(|c| *c == Self::MARKER)
            .count()
            .clamp(1, 6)
    }

    pub fn render(
        block: &Block,
        ctx: &mut ConvertContext,
        out: &mut String,
    ) -> Result<(), ConvertError> {
        let level = Self::level(&block.head().tag);
        let id = ctx.next_heading_id();
        let id = escape_attr(&id);

        out.push_str(&format!("<h{level} id=\"{id}\"><span>"));
        for (i, line) in block.lines().iter().enumerate() {
            if i > 0 {
                out.push_str("<br />");
            }
            out.push_str(&render_fragment(&line.content, &ctx.options)?);
        }
        out.push_str(&format!("</span></h{level}>\n"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("+", 1)]
    #[case("+++", 3)]
    #[case("++++++", 6)]
    fn levels(#[case] tag: &str, #[case] expected: usize) {
        assert_eq!(Heading::level(tag), expected);
    }
}
