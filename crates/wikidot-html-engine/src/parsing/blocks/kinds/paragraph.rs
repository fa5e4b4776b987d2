use crate::error::ConvertError;
use crate::parsing::{context::ConvertContext, inline::render_fragment};

use super::super::types::Block;

/// Paragraph block type.
///
/// Paragraphs have no delimiters; they are the default block when no other
/// pattern matches. Each line is parsed on its own and the results are
/// joined with hard breaks.
pub struct Paragraph;

impl Paragraph {
    pub const OPEN: &'static str = "<p>";
    pub const CLOSE: &'static str = "</p>\n";
    pub const LINE_JOIN: &'static str = "<br />\n";

    pub fn render(
        block: &Block,
        ctx: &ConvertContext,
        out: &mut String,
    ) -> Result<(), ConvertError> {
        let fragments = block
            .lines()
            .iter()
            .map(|line| render_fragment(&line.content, &ctx.options))
            .collect::<Result<Vec<_>, _>>()?;
        out.push_str(Self::OPEN);
        out.push_str(&fragments.join(Self::LINE_JOIN));
        out.push_str(Self::CLOSE);
        Ok(())
    }
}
