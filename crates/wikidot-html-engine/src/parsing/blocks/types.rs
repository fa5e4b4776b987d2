use crate::error::ConvertError;

/// The kind of a block, decided by the line classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Default when no other pattern matches.
    Paragraph,
    /// `*` / `#` items, possibly nested and mixed.
    List,
    /// `||` rows.
    Table,
    /// `+` through `++++++`.
    Heading,
    /// `----` or longer.
    HorizontalRule,
    /// Whitespace only. Renders nothing.
    Blank,
}

impl BlockKind {
    /// Kinds whose consecutive lines group into one block.
    pub fn is_multiline(self) -> bool {
        matches!(
            self,
            BlockKind::Paragraph | BlockKind::List | BlockKind::Table
        )
    }
}

/// Local facts about one line, after blockquote markers are stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: BlockKind,
    /// List nesting level, zero based. Zero for other kinds.
    pub indent: usize,
    /// The raw block marker: `*`/`#` for list items, the `+` run for
    /// headings, empty otherwise.
    pub tag: String,
    /// Text handed to inline parsing, soft break removed.
    pub content: String,
    /// The line ended with ` _`.
    pub soft_break: bool,
    /// The line was taken into the open block because the previous line
    /// soft-broke, whatever it would classify as on its own.
    pub continuation: bool,
}

/// A run of classified lines rendered as one HTML block element.
#[derive(Debug, Clone)]
pub struct Block {
    kind: BlockKind,
    lines: Vec<Classification>,
}

impl Block {
    pub fn new(class: Classification) -> Self {
        Self {
            kind: class.kind,
            lines: vec![class],
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn lines(&self) -> &[Classification] {
        &self.lines
    }

    /// The classification of the first line, which decides block-wide
    /// facts such as heading level.
    pub fn head(&self) -> &Classification {
        &self.lines[0]
    }

    /// Appends a line of the same kind.
    pub fn push(&mut self, class: Classification) -> Result<(), ConvertError> {
        if class.kind != self.kind {
            return Err(ConvertError::BlockKindMismatch {
                expected: self.kind,
                found: class.kind,
            });
        }
        self.lines.push(class);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(kind: BlockKind, content: &str) -> Classification {
        Classification {
            kind,
            indent: 0,
            tag: String::new(),
            content: content.to_string(),
            soft_break: false,
            continuation: false,
        }
    }

    #[test]
    fn push_same_kind() {
        let mut block = Block::new(class(BlockKind::Paragraph, "a"));
        block.push(class(BlockKind::Paragraph, "b")).unwrap();
        assert_eq!(block.lines().len(), 2);
        assert_eq!(block.lines()[1].content, "b");
        assert_eq!(block.head().content, "a");
    }

    #[test]
    fn push_mismatched_kind_is_fatal() {
        let mut block = Block::new(class(BlockKind::Paragraph, "a"));
        let err = block.push(class(BlockKind::List, "b")).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::BlockKindMismatch {
                expected: BlockKind::Paragraph,
                found: BlockKind::List
            }
        ));
    }

    #[test]
    fn multiline_kinds() {
        assert!(BlockKind::Table.is_multiline());
        assert!(!BlockKind::Heading.is_multiline());
        assert!(!BlockKind::Blank.is_multiline());
    }
}
