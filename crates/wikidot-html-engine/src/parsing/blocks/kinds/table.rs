use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::parsing::context::ConvertContext;
use crate::parsing::inline::{InlineParser, Marker, Token, TokenKind, lex};

use super::super::types::Block;

/// Horizontal alignment requested by a cell's leading tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    fn css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

/// The one-character tag a cell's first fragment may start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTag {
    Header,
    Align(Align),
}

impl CellTag {
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        if token.kind != TokenKind::Text {
            return None;
        }
        match token.text {
            "~" => Some(CellTag::Header),
            "<" => Some(CellTag::Align(Align::Left)),
            "=" => Some(CellTag::Align(Align::Center)),
            ">" => Some(CellTag::Align(Align::Right)),
            _ => None,
        }
    }
}

struct Cell {
    header: bool,
    align: Option<Align>,
    colspan: usize,
    parser: InlineParser,
}

impl Cell {
    fn new(
        tokens: &[Token<'_>],
        colspan: usize,
        options: &ConvertOptions,
    ) -> Result<Self, ConvertError> {
        let mut cell = Cell {
            header: false,
            align: None,
            colspan,
            parser: InlineParser::new(options),
        };
        let mut tokens = trim(tokens);
        if let Some(tag) = tokens.first().and_then(CellTag::from_token) {
            match tag {
                CellTag::Header => cell.header = true,
                CellTag::Align(align) => cell.align = Some(align),
            }
            tokens = trim(&tokens[1..]);
        }
        cell.parser.feed_tokens(tokens)?;
        Ok(cell)
    }

    fn render(self, out: &mut String) {
        let name = if self.header { "th" } else { "td" };
        out.push('<');
        out.push_str(name);
        if self.colspan > 1 {
            out.push_str(&format!(" colspan=\"{}\"", self.colspan));
        }
        if let Some(align) = self.align {
            out.push_str(&format!(" style=\"text-align: {};\"", align.css()));
        }
        out.push('>');
        out.push_str(&self.parser.finish());
        out.push_str(&format!("</{name}>"));
    }
}

#[derive(Default)]
struct Row {
    cells: Vec<Cell>,
    /// Empty cells seen since the last real one.
    pending_colspan: usize,
}

impl Row {
    fn push(&mut self, tokens: &[Token<'_>], options: &ConvertOptions) -> Result<(), ConvertError> {
        let tokens = trim(tokens);
        if tokens.is_empty() {
            self.pending_colspan += 1;
            return Ok(());
        }
        let colspan = 1 + std::mem::take(&mut self.pending_colspan);
        self.cells.push(Cell::new(tokens, colspan, options)?);
        Ok(())
    }

    /// Continues the last cell with text from the next physical line.
    fn extend(
        &mut self,
        tokens: &[Token<'_>],
        line_break: bool,
        options: &ConvertOptions,
    ) -> Result<(), ConvertError> {
        let tokens = trim(tokens);
        match self.cells.last_mut() {
            Some(cell) => {
                if line_break {
                    cell.parser.line_break();
                }
                cell.parser.feed_tokens(tokens)
            }
            None if tokens.is_empty() => Ok(()),
            None => self.push(tokens, options),
        }
    }

    fn render(self, out: &mut String) {
        if self.cells.is_empty() {
            return;
        }
        out.push_str("<tr>");
        for cell in self.cells {
            cell.render(out);
        }
        out.push_str("</tr>\n");
    }
}

/// Drops whitespace tokens from both ends.
fn trim<'t, 'a>(tokens: &'t [Token<'a>]) -> &'t [Token<'a>] {
    let start = tokens
        .iter()
        .position(|t| !t.is_whitespace())
        .unwrap_or(tokens.len());
    let end = tokens
        .iter()
        .rposition(|t| !t.is_whitespace())
        .map_or(start, |i| i + 1);
    &tokens[start..end]
}

fn is_separator(token: &Token<'_>) -> bool {
    token.kind == TokenKind::Marker(Marker::CellSeparator)
}

/// `||`-delimited rows.
///
/// A row whose line does not end with `||` stays open: the next line's
/// text up to its first `||` continues the last cell and any further cells
/// join the same row.
pub struct Table;

impl Table {
    pub const OPEN: &'static str = "<table>\n";
    pub const CLOSE: &'static str = "</table>\n";

    pub fn render(
        block: &Block,
        ctx: &ConvertContext,
        out: &mut String,
    ) -> Result<(), ConvertError> {
        let options = &ctx.options;
        let mut open_row: Option<Row> = None;
        let mut prev_soft_break = false;

        out.push_str(Self::OPEN);
        for line in block.lines() {
            let tokens = lex(&line.content);
            let segments: Vec<&[Token<'_>]> = tokens.split(is_separator).collect();
            let has_separator = segments.len() > 1;

            let (mut row, rest) = match open_row.take() {
                Some(mut row) => {
                    row.extend(segments[0], prev_soft_break, options)?;
                    (row, &segments[1..])
                }
                None if !has_separator => {
                    log::debug!("table line without separators rendered as one cell");
                    let mut row = Row::default();
                    row.push(segments[0], options)?;
                    row.render(out);
                    prev_soft_break = line.soft_break;
                    continue;
                }
                None => (Row::default(), &segments[1..]),
            };

            match rest.split_last() {
                Some((tail, cells)) => {
                    for cell in cells {
                        row.push(cell, options)?;
                    }
                    if trim(tail).is_empty() {
                        row.render(out);
                    } else {
                        row.push(tail, options)?;
                        open_row = Some(row);
                    }
                }
                None => open_row = Some(row),
            }
            prev_soft_break = line.soft_break;
        }

        if let Some(row) = open_row {
            row.render(out);
        }
        out.push_str(Self::CLOSE);
        Ok(())
    }
}
