use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::parsing::context::ConvertContext;

use super::{
    classify::WikidotLineClassifier,
    containers::ContainerStack,
    kinds::{BlockQuote, Div},
    render::render_block,
    types::Block,
};

/// Line-at-a-time state machine grouping lines into blocks.
///
/// Output is appended as soon as a block closes; callers may drain it
/// between lines with [`BlockAssembler::take_output`].
pub struct BlockAssembler {
    classifier: WikidotLineClassifier,
    containers: ContainerStack,
    current: Option<Block>,
    /// The previous line ended with a soft break.
    soft_break: bool,
    ctx: ConvertContext,
    out: String,
}

impl BlockAssembler {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            classifier: WikidotLineClassifier,
            containers: ContainerStack::default(),
            current: None,
            soft_break: false,
            ctx: ConvertContext::new(options),
            out: String::new(),
        }
    }

    pub fn push(&mut self, line: &str) -> Result<(), ConvertError> {
        let line = line.trim_end_matches(['\r', '\n']);

        let (depth, rest) = BlockQuote::strip_prefixes(line);
        if depth != self.containers.quote_depth() {
            self.close_block()?;
            self.containers.set_blockquote_depth(depth, &mut self.out);
        }

        if let Some(attrs) = Div::parse_open(rest, &self.ctx.options.div_id_prefix) {
            self.close_block()?;
            self.containers.open_div(&attrs, &mut self.out);
            return Ok(());
        }
        if Div::is_close(rest) {
            if self.containers.can_close_div() {
                self.close_block()?;
                self.containers.close_div(&mut self.out);
                return Ok(());
            }
            log::debug!("no open div to close, keeping {rest:?} as text");
        }

        let class = match &self.current {
            Some(block) if self.soft_break => self.classifier.continuation(rest, block.kind()),
            _ => self.classifier.classify(rest),
        };
        let soft_break = class.soft_break;

        let joins = self.current.as_ref().is_some_and(|block| {
            class.continuation || (block.kind() == class.kind && class.kind.is_multiline())
        });
        if let Some(block) = self.current.as_mut().filter(|_| joins) {
            block.push(class)?;
        } else {
            self.close_block()?;
            self.current = Some(Block::new(class));
        }
        self.soft_break = soft_break;
        Ok(())
    }

    /// Removes and returns everything rendered so far.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    /// Closes the open block and every container, returning the remaining
    /// output.
    pub fn finish(mut self) -> Result<String, ConvertError> {
        self.close_block()?;
        self.containers.close_all(&mut self.out);
        Ok(self.out)
    }

    fn close_block(&mut self) -> Result<(), ConvertError> {
        self.soft_break = false;
        if let Some(block) = self.current.take() {
            render_block(&block, &mut self.ctx, &mut self.out)?;
        }
        Ok(())
    }
}

impl Default for BlockAssembler {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}
