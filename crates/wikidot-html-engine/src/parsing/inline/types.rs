/// A two-character formatting marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `//`
    Italic,
    /// `**`
    Bold,
    /// `{{`
    FixedOpen,
    /// `}}`
    FixedClose,
    /// `--`
    Strike,
    /// `__`
    Underline,
    /// `,,`
    Subscript,
    /// `^^`
    Superscript,
    /// `@@`
    Literal,
    /// `@<`
    RawOpen,
    /// `>@`
    RawClose,
    /// `||`
    CellSeparator,
}

impl Marker {
    /// All markers with their source text, in lexing priority order.
    pub const ALL: [(&'static str, Marker); 12] = [
        ("//", Marker::Italic),
        ("**", Marker::Bold),
        ("{{", Marker::FixedOpen),
        ("}}", Marker::FixedClose),
        ("--", Marker::Strike),
        ("__", Marker::Underline),
        (",,", Marker::Subscript),
        ("^^", Marker::Superscript),
        ("@@", Marker::Literal),
        ("@<", Marker::RawOpen),
        (">@", Marker::RawClose),
        ("||", Marker::CellSeparator),
    ];

    /// The marker's source text.
    pub fn text(self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(_, marker)| *marker == self)
            .map_or("", |(text, _)| text)
    }
}

/// What a lexed token is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of whitespace.
    Whitespace,
    /// Plain characters that matched no other pattern.
    Text,
    /// One of the doubled markers.
    Marker(Marker),
    /// `##name|`, carrying `name`.
    ColorHead(String),
    /// A bare `##`.
    ColorEnd,
    /// `[[[...]]]`
    TripleBracket,
    /// `[[...]]`
    DoubleBracket,
    /// `[href text]`
    SingleBracket,
    /// `[!-- ... --]`
    Comment,
    /// A bare absolute URL.
    Url,
}

/// A token borrowing its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}
