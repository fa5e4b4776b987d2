use crate::parsing::blocks::BlockKind;

/// Unrecoverable conversion faults.
///
/// Anything the dialect does not understand degrades to literal text; these
/// variants only cover states the engine cannot give a meaning to. A fault
/// aborts the whole conversion and no partial output is returned.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("color span `{inner}` opened inside another color span")]
    NestedColor { inner: String },
    /// Closing is only attempted for kinds the parser's flags report open,
    /// so this means the flags and the node stack disagree.
    #[error("close requested for `{marker}` but the formatting stack is empty")]
    EmptyFormattingStack { marker: String },
    #[error("cannot continue a {expected:?} block with a {found:?} line")]
    BlockKindMismatch { expected: BlockKind, found: BlockKind },
    #[error("unrecognized list tag: {0:?}")]
    UnknownListTag(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
