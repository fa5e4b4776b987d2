//! # Block Parsing
//!
//! Two-phase block parsing with a container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line, minus its blockquote
//!    markers, is classified into a `Classification` containing local facts
//!    (kind, indent, raw tag, content, soft break)
//!
//! 2. **Block Assembly** (`builder`): A `BlockAssembler` tracks blockquote
//!    depth and open divs, groups lines into `Block`s and renders each block
//!    as soon as it closes
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`, `Classification`)
//! - **`kinds`**: Block-specific types with owned delimiters and renderers
//!   (BlockQuote, Div, Heading, List, Paragraph, Table)
//! - **`classify`**: `WikidotLineClassifier` produces a `Classification` for each line
//! - **`containers`**: `ContainerStack` for blockquote depth and div nesting
//! - **`render`**: `render_block` dispatch over `BlockKind`
//! - **`builder`**: `BlockAssembler` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Every block holds lines of a single kind
//! - Blockquote and div tags are always emitted well nested
//! - A line after a soft break joins the open block whatever it looks like

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod render;
pub mod types;

pub use builder::BlockAssembler;
pub use classify::WikidotLineClassifier;
pub use containers::ContainerStack;
pub use types::{Block, BlockKind, Classification};
