use crate::error::ConvertError;
use crate::parsing::context::ConvertContext;

use super::{
    kinds::{Heading, List, Paragraph, Table},
    types::{Block, BlockKind},
};

pub const HORIZONTAL_RULE: &str = "<hr />\n";

/// Writes a finished block to `out`, dispatching on its kind.
pub fn render_block(
    block: &Block,
    ctx: &mut ConvertContext,
    out: &mut String,
) -> Result<(), ConvertError> {
    log::debug!(
        "rendering {:?} block of {} line(s)",
        block.kind(),
        block.lines().len()
    );
    match block.kind() {
        BlockKind::Paragraph => Paragraph::render(block, ctx, out),
        BlockKind::List => List::render(block, ctx, out),
        BlockKind::Table => Table::render(block, ctx, out),
        BlockKind::Heading => Heading::render(block, ctx, out),
        BlockKind::HorizontalRule => {
            out.push_str(HORIZONTAL_RULE);
            Ok(())
        }
        BlockKind::Blank => Ok(()),
    }
}
