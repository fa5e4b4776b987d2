use std::mem::discriminant;

use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::parsing::html::escape_text;

use super::{
    cursor::TokenCursor,
    kinds::{BareUrl, BracketLink, Color, Element, TripleLink, literal},
    lexer::lex,
    node::{Child, Closure, Leaf, NodeId, NodeKind, NodeTree},
    types::{Marker, Token, TokenKind},
};

/// Which formatting kinds currently have an open node on the stack.
#[derive(Debug, Default)]
struct Flags {
    italic: bool,
    bold: bool,
    fixed_width: bool,
    strike: bool,
    underline: bool,
    subscript: bool,
    superscript: bool,
    escape_literal: bool,
    raw_literal: bool,
    color: bool,
    size: bool,
    span_depth: usize,
}

impl Flags {
    fn slot(&mut self, kind: &NodeKind) -> Option<&mut bool> {
        match kind {
            NodeKind::Italic => Some(&mut self.italic),
            NodeKind::Bold => Some(&mut self.bold),
            NodeKind::FixedWidth => Some(&mut self.fixed_width),
            NodeKind::Strike => Some(&mut self.strike),
            NodeKind::Underline => Some(&mut self.underline),
            NodeKind::Subscript => Some(&mut self.subscript),
            NodeKind::Superscript => Some(&mut self.superscript),
            NodeKind::EscapeLiteral => Some(&mut self.escape_literal),
            NodeKind::RawLiteral => Some(&mut self.raw_literal),
            NodeKind::Color(_) => Some(&mut self.color),
            NodeKind::Size(_) => Some(&mut self.size),
            NodeKind::Root | NodeKind::Span(_) => None,
        }
    }

    fn set(&mut self, kind: &NodeKind, open: bool) {
        if let NodeKind::Span(_) = kind {
            if open {
                self.span_depth += 1;
            } else {
                self.span_depth = self.span_depth.saturating_sub(1);
            }
        } else if let Some(flag) = self.slot(kind) {
            *flag = open;
        }
    }

    fn in_literal(&self) -> bool {
        self.escape_literal || self.raw_literal
    }
}

/// Stack machine turning inline tokens into a [`NodeTree`].
///
/// A parser may be fed several fragments before it is finished; formatting
/// left open by one fragment stays open for the next. Table cells rely on
/// this when a row continues over several lines.
pub struct InlineParser {
    tree: NodeTree,
    stack: Vec<NodeId>,
    flags: Flags,
    id_prefix: String,
}

impl InlineParser {
    pub fn new(options: &ConvertOptions) -> Self {
        Self {
            tree: NodeTree::new(),
            stack: vec![NodeTree::ROOT],
            flags: Flags::default(),
            id_prefix: options.div_id_prefix.clone(),
        }
    }

    /// Lexes and parses one fragment.
    pub fn feed(&mut self, fragment: &str) -> Result<(), ConvertError> {
        let tokens = lex(fragment);
        self.feed_tokens(&tokens)
    }

    /// Parses an already lexed token slice.
    ///
    /// Whitespace adjacency is judged within the slice only; the slice
    /// boundaries count as whitespace.
    pub fn feed_tokens(&mut self, tokens: &[Token<'_>]) -> Result<(), ConvertError> {
        let mut cur = TokenCursor::new(tokens);
        while let Some(token) = cur.next() {
            if self.flags.in_literal() {
                self.literal_token(token)?;
            } else {
                self.token(token, &cur)?;
            }
        }
        Ok(())
    }

    /// Appends a hard line break at the current nesting level.
    pub fn line_break(&mut self) {
        self.append(Child::Leaf(Leaf::LineBreak));
    }

    /// Serializes everything fed so far. Nodes still open render as text.
    pub fn finish(self) -> String {
        if self.stack.len() > 1 {
            log::debug!(
                "{} inline node(s) left open at end of fragment",
                self.stack.len() - 1
            );
        }
        self.tree.render()
    }

    fn top(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(NodeTree::ROOT)
    }

    fn append(&mut self, child: Child) {
        let top = self.top();
        self.tree.append(top, child);
    }

    fn text(&mut self, text: &str) {
        self.append(Child::Text(escape_text(text).into_owned()));
    }

    fn fallback(&mut self, token: &Token<'_>) {
        log::debug!("malformed inline construct kept as text: {:?}", token.text);
        self.text(token.text);
    }

    fn token(&mut self, token: &Token<'_>, cur: &TokenCursor<'_, '_>) -> Result<(), ConvertError> {
        match &token.kind {
            TokenKind::Whitespace => self.append(Child::Whitespace(token.text.to_string())),
            TokenKind::Text => self.text(token.text),
            TokenKind::Comment => {}
            TokenKind::Url => self.append(Child::Leaf(BareUrl::parse(token.text))),
            TokenKind::TripleBracket => match TripleLink::parse(token.text) {
                Some(leaf) => self.append(Child::Leaf(leaf)),
                None => self.fallback(token),
            },
            TokenKind::SingleBracket => match BracketLink::parse(token.text) {
                Some(leaf) => self.append(Child::Leaf(leaf)),
                None => self.fallback(token),
            },
            TokenKind::DoubleBracket => self.element(token)?,
            TokenKind::ColorHead(name) => {
                if self.flags.color {
                    return Err(ConvertError::NestedColor {
                        inner: name.clone(),
                    });
                }
                if cur.next_is_space() {
                    self.text(token.text);
                } else {
                    self.open(NodeKind::Color(Color::css_value(name)), token.text);
                }
            }
            TokenKind::ColorEnd => {
                if self.flags.color && !cur.prev_is_space() {
                    self.close(&NodeKind::Color(String::new()), token.text)?;
                } else {
                    self.text(token.text);
                }
            }
            TokenKind::Marker(marker) => self.marker(*marker, token, cur)?,
        }
        Ok(())
    }

    fn marker(
        &mut self,
        marker: Marker,
        token: &Token<'_>,
        cur: &TokenCursor<'_, '_>,
    ) -> Result<(), ConvertError> {
        let kind = match marker {
            Marker::Italic => NodeKind::Italic,
            Marker::Bold => NodeKind::Bold,
            Marker::Strike => NodeKind::Strike,
            Marker::Underline => NodeKind::Underline,
            Marker::Subscript => NodeKind::Subscript,
            Marker::Superscript => NodeKind::Superscript,
            Marker::FixedOpen => {
                if !self.flags.fixed_width && !cur.next_is_space() {
                    self.open(NodeKind::FixedWidth, token.text);
                } else {
                    self.text(token.text);
                }
                return Ok(());
            }
            Marker::FixedClose => {
                if self.flags.fixed_width && !cur.prev_is_space() {
                    self.close(&NodeKind::FixedWidth, token.text)?;
                } else {
                    self.text(token.text);
                }
                return Ok(());
            }
            Marker::Literal => {
                self.open(NodeKind::EscapeLiteral, token.text);
                return Ok(());
            }
            Marker::RawOpen => {
                self.open(NodeKind::RawLiteral, token.text);
                return Ok(());
            }
            Marker::RawClose | Marker::CellSeparator => {
                self.text(token.text);
                return Ok(());
            }
        };

        let is_open = self.flags.slot(&kind).is_some_and(|flag| *flag);
        if is_open {
            if cur.prev_is_space() {
                self.text(token.text);
            } else {
                self.close(&kind, token.text)?;
            }
        } else if cur.next_is_space() {
            self.text(token.text);
        } else {
            self.open(kind, token.text);
        }
        Ok(())
    }

    /// Inside `@@...@@` or `@<...>@` every token is literal except the
    /// matching terminator.
    fn literal_token(&mut self, token: &Token<'_>) -> Result<(), ConvertError> {
        let escape = self.flags.escape_literal;
        let terminator = if escape { Marker::Literal } else { Marker::RawClose };
        if token.kind == TokenKind::Marker(terminator) {
            let kind = if escape {
                NodeKind::EscapeLiteral
            } else {
                NodeKind::RawLiteral
            };
            return self.close(&kind, token.text);
        }
        self.append(Child::Text(literal::encode(token.text, escape)));
        Ok(())
    }

    fn element(&mut self, token: &Token<'_>) -> Result<(), ConvertError> {
        let Some(element) = Element::parse(token.text, &self.id_prefix) else {
            self.fallback(token);
            return Ok(());
        };
        match element {
            Element::Leaf(leaf) => self.append(Child::Leaf(leaf)),
            Element::SpanOpen(attrs) => self.open(NodeKind::Span(attrs), token.text),
            Element::SpanClose if self.flags.span_depth > 0 => {
                self.close(&NodeKind::Span(Default::default()), token.text)?;
            }
            Element::SizeOpen(size) if !self.flags.size => {
                self.open(NodeKind::Size(size), token.text);
            }
            Element::SizeClose if self.flags.size => {
                self.close(&NodeKind::Size(String::new()), token.text)?;
            }
            Element::SpanClose | Element::SizeOpen(_) | Element::SizeClose => {
                self.text(token.text);
            }
        }
        Ok(())
    }

    fn open(&mut self, kind: NodeKind, raw: &str) {
        self.flags.set(&kind, true);
        let id = self.tree.alloc(kind, escape_text(raw).into_owned());
        self.append(Child::Node(id));
        self.stack.push(id);
    }

    /// Closes the innermost open node of `target`'s kind.
    ///
    /// Nodes opened after it are popped and reopened as continuations after
    /// the closed node, each deferring its own closure to its continuation.
    fn close(&mut self, target: &NodeKind, marker: &str) -> Result<(), ConvertError> {
        let mut interrupted = Vec::new();
        loop {
            // The root sits at the bottom and is never popped.
            let id = match self.stack.as_slice() {
                [_, .., top] => *top,
                _ => {
                    return Err(ConvertError::EmptyFormattingStack {
                        marker: marker.to_string(),
                    });
                }
            };
            self.stack.pop();
            let kind = self.tree.get(id).kind.clone();
            self.flags.set(&kind, false);
            if discriminant(&kind) == discriminant(target) {
                self.tree.get_mut(id).closure = Closure::Closed;
                break;
            }
            interrupted.push(id);
        }

        for id in interrupted.into_iter().rev() {
            let kind = self.tree.get(id).kind.clone();
            log::trace!("reopening {kind:?} after closing {target:?}");
            self.flags.set(&kind, true);
            let continuation = self.tree.alloc(kind, String::new());
            self.append(Child::Node(continuation));
            self.stack.push(continuation);
            self.tree.get_mut(id).closure = Closure::DeferredTo(continuation);
        }
        Ok(())
    }
}
