use super::types::Token;

/// A cursor for character-by-character scanning of an inline fragment.
///
/// Positions are byte offsets into `s` and always sit on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Peeks at the current char without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances by one char, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes and returns the consumed slice.
    ///
    /// `n` must land on a char boundary.
    pub fn take(&mut self, n: usize) -> &'a str {
        let start = self.i;
        self.i = (self.i + n).min(self.s.len());
        &self.s[start..self.i]
    }
}

/// Lookahead over an owned token sequence.
///
/// The formatting automaton decides open/close legality from the immediate
/// neighbours of a marker; a missing neighbour counts as whitespace.
pub struct TokenCursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    /// Index of the token most recently returned by [`TokenCursor::next`].
    current: Option<usize>,
}

impl<'t, 'a> TokenCursor<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            current: None,
        }
    }

    /// Advances to and returns the next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&'t Token<'a>> {
        let idx = self.current.map_or(0, |i| i + 1);
        let tok = self.tokens.get(idx)?;
        self.current = Some(idx);
        Some(tok)
    }

    /// The token before the current one.
    pub fn peek_prev(&self) -> Option<&'t Token<'a>> {
        let idx = self.current?.checked_sub(1)?;
        self.tokens.get(idx)
    }

    /// The token after the current one.
    pub fn peek_next(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.current.map_or(0, |i| i + 1))
    }

    /// True if the previous token is whitespace or there is none.
    pub fn prev_is_space(&self) -> bool {
        self.peek_prev().is_none_or(Token::is_whitespace)
    }

    /// True if the next token is whitespace or there is none.
    pub fn next_is_space(&self) -> bool {
        self.peek_next().is_none_or(Token::is_whitespace)
    }
}
