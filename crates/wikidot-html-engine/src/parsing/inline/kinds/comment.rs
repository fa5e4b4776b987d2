/// `[!-- ... --]`. Comments never reach the output.
pub struct Comment;

impl Comment {
    pub const OPEN: &'static str = "[!--";
    pub const CLOSE: &'static str = "--]";

    /// Length of a comment at the start of `rest`, terminator included.
    ///
    /// An unterminated opener is not a comment.
    pub fn scan(rest: &str) -> Option<usize> {
        let body = rest.strip_prefix(Self::OPEN)?;
        let end = body.find(Self::CLOSE)?;
        Some(Self::OPEN.len() + end + Self::CLOSE.len())
    }
}
