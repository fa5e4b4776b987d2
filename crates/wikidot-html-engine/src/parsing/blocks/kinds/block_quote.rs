/// Blockquote markers with owned delimiter constants.
///
/// All blockquote syntax knowledge lives here, not in the assembler.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    pub const OPEN: &'static str = "<blockquote>\n";
    pub const CLOSE: &'static str = "</blockquote>\n";

    /// Strips blockquote prefixes from a line, returning (depth, remainder).
    ///
    /// The `>` run must start the line. Whitespace after it is dropped.
    ///
    /// # Returns
    /// - `depth`: Number of `>` prefixes found (0 if not a blockquote)
    /// - `remainder`: The line after the prefixes
    pub fn strip_prefixes(s: &str) -> (usize, &str) {
        let rest = s.trim_start_matches(Self::PREFIX);
        let depth = s.len() - rest.len();
        if depth == 0 {
            return (0, s);
        }
        (depth, rest.trim_start())
    }
}
