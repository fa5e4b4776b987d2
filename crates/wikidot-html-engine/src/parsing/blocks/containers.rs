use crate::parsing::html::Attributes;

use super::kinds::{BlockQuote, Div};

/// Blockquote depth and open divs, kept well nested.
///
/// Every method writes the tags it opens or closes to `out`.
#[derive(Debug, Default, Clone)]
pub struct ContainerStack {
    quote_depth: usize,
    /// The blockquote depth each open div was opened at, innermost last.
    divs: Vec<usize>,
}

impl ContainerStack {
    pub fn quote_depth(&self) -> usize {
        self.quote_depth
    }

    /// Moves to `depth`, emitting one tag per level crossed.
    ///
    /// Divs opened inside a blockquote being closed are closed first.
    pub fn set_blockquote_depth(&mut self, depth: usize, out: &mut String) {
        while self.quote_depth < depth {
            self.quote_depth += 1;
            log::debug!("opening blockquote level {}", self.quote_depth);
            out.push_str(BlockQuote::OPEN);
        }
        while self.quote_depth > depth {
            while self
                .divs
                .last()
                .is_some_and(|&opened_at| opened_at >= self.quote_depth)
            {
                self.pop_div(out);
            }
            log::debug!("closing blockquote level {}", self.quote_depth);
            out.push_str(BlockQuote::CLOSE);
            self.quote_depth -= 1;
        }
    }

    pub fn open_div(&mut self, attrs: &Attributes, out: &mut String) {
        log::debug!("opening div at blockquote depth {}", self.quote_depth);
        Div::write_open(attrs, out);
        self.divs.push(self.quote_depth);
    }

    /// True if the innermost div was opened at the current blockquote depth,
    /// so closing it here keeps the output well nested.
    pub fn can_close_div(&self) -> bool {
        self.divs
            .last()
            .is_some_and(|&opened_at| opened_at == self.quote_depth)
    }

    /// Closes the innermost div. Returns false when there is none to close.
    pub fn close_div(&mut self, out: &mut String) -> bool {
        if !self.can_close_div() {
            return false;
        }
        self.pop_div(out);
        true
    }

    /// Unwinds every blockquote, then every remaining div.
    pub fn close_all(&mut self, out: &mut String) {
        self.set_blockquote_depth(0, out);
        while !self.divs.is_empty() {
            self.pop_div(out);
        }
    }

    fn pop_div(&mut self, out: &mut String) {
        if let Some(opened_at) = self.divs.pop() {
            log::debug!("closing div opened at blockquote depth {opened_at}");
            out.push_str(Div::CLOSE_TAG);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn depth_deltas() {
        let mut stack = ContainerStack::default();
        let mut out = String::new();
        stack.set_blockquote_depth(2, &mut out);
        stack.set_blockquote_depth(1, &mut out);
        assert_eq!(out, "<blockquote>\n<blockquote>\n</blockquote>\n");
        assert_eq!(stack.quote_depth(), 1);
    }

    #[test]
    fn lowering_depth_closes_inner_divs_first() {
        let mut stack = ContainerStack::default();
        let mut out = String::new();
        stack.set_blockquote_depth(1, &mut out);
        stack.open_div(&Attributes::default(), &mut out);
        stack.set_blockquote_depth(0, &mut out);
        assert_eq!(out, "<blockquote>\n<div>\n</div>\n</blockquote>\n");
        assert!(!stack.can_close_div());
        assert!(!stack.close_div(&mut out));
    }

    #[test]
    fn outer_div_survives_inner_blockquote() {
        let mut stack = ContainerStack::default();
        let mut out = String::new();
        stack.open_div(&Attributes::default(), &mut out);
        stack.set_blockquote_depth(1, &mut out);
        assert!(!stack.can_close_div());
        stack.set_blockquote_depth(0, &mut out);
        assert!(stack.close_div(&mut out));
        assert_eq!(out, "<div>\n<blockquote>\n</blockquote>\n</div>\n");
    }

    #[test]
    fn close_without_div() {
        let mut stack = ContainerStack::default();
        let mut out = String::new();
        assert!(!stack.close_div(&mut out));
        assert!(out.is_empty());
    }

    #[test]
    fn close_all_unwinds_everything() {
        let mut stack = ContainerStack::default();
        let mut out = String::new();
        stack.open_div(&Attributes::default(), &mut out);
        stack.set_blockquote_depth(1, &mut out);
        stack.open_div(&Attributes::default(), &mut out);
        stack.close_all(&mut out);
        assert_eq!(
            out,
            "<div>\n<blockquote>\n<div>\n</div>\n</blockquote>\n</div>\n"
        );
    }
}
