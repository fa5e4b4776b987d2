//! # Inline Lexer
//!
//! Greedy longest-prefix scan of one inline fragment. At every position the
//! patterns are tried in a fixed priority order:
//!
//! 1. bracket constructs: `[[[...]]]`, `[!--...--]`, `[[...]]`, `[href text]`
//! 2. color heads `##name|` and bare `##`
//! 3. a whitespace run
//! 4. doubled two-character markers (see [`Marker::ALL`])
//! 5. absolute URLs
//!
//! Anything else starts a literal run that grows one char at a time until
//! one of the patterns above matches. Every byte of the input lands in
//! exactly one token.
//!
//! The body of a `@@...@@` or `@<...>@` span is not scanned for patterns:
//! when the terminator occurs later in the fragment, everything up to it is
//! a single text token, so URLs and brackets inside cannot swallow it.

use super::{
    cursor::Cursor,
    kinds::{BareUrl, BracketLink, Color, Comment, DoubleBracket, TripleLink, literal},
    types::{Marker, Token, TokenKind},
};

/// Tokenizes an inline fragment.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let mut cur = Cursor::new(input);
    let mut tokens = Vec::new();
    let mut text_start = None;

    while !cur.eof() {
        if let Some((kind, len)) = match_special(cur.rest()) {
            if let Some(start) = text_start.take() {
                tokens.push(Token::new(TokenKind::Text, &input[start..cur.i]));
            }
            let literal_close = match kind {
                TokenKind::Marker(marker) => literal::terminator(marker),
                _ => None,
            };
            tokens.push(Token::new(kind, cur.take(len)));

            if let Some(close) = literal_close
                && let Some(end) = cur.rest().find(close.text())
            {
                if end > 0 {
                    tokens.push(Token::new(TokenKind::Text, cur.take(end)));
                }
                let text = cur.take(close.text().len());
                tokens.push(Token::new(TokenKind::Marker(close), text));
            }
            continue;
        }
        text_start.get_or_insert(cur.i);
        cur.bump();
    }

    if let Some(start) = text_start {
        tokens.push(Token::new(TokenKind::Text, &input[start..]));
    }

    log::trace!("lexed {} tokens from {input:?}", tokens.len());
    tokens
}

/// Tries every non-literal pattern at the start of `rest`.
fn match_special(rest: &str) -> Option<(TokenKind, usize)> {
    let first = rest.chars().next()?;
    match first {
        '[' => match_bracket(rest),
        '#' => match_color(rest),
        c if c.is_whitespace() => {
            let len = rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            Some((TokenKind::Whitespace, len))
        }
        'h' | 'f' => BareUrl::scan(rest).map(|len| (TokenKind::Url, len)),
        _ => match_marker(rest),
    }
}

fn match_bracket(rest: &str) -> Option<(TokenKind, usize)> {
    if let Some(len) = TripleLink::scan(rest) {
        return Some((TokenKind::TripleBracket, len));
    }
    if let Some(len) = Comment::scan(rest) {
        return Some((TokenKind::Comment, len));
    }
    if let Some(len) = DoubleBracket::scan(rest) {
        return Some((TokenKind::DoubleBracket, len));
    }
    BracketLink::scan(rest).map(|len| (TokenKind::SingleBracket, len))
}

fn match_color(rest: &str) -> Option<(TokenKind, usize)> {
    if let Some((len, name)) = Color::scan_head(rest) {
        return Some((TokenKind::ColorHead(name.to_string()), len));
    }
    if rest.starts_with(Color::END) {
        return Some((TokenKind::ColorEnd, Color::END.len()));
    }
    None
}

fn match_marker(rest: &str) -> Option<(TokenKind, usize)> {
    Marker::ALL
        .iter()
        .find(|(text, _)| rest.starts_with(text))
        .map(|(text, marker)| (TokenKind::Marker(*marker), text.len()))
}
