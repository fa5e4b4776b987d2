pub mod block_quote;
pub mod div;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;

pub use block_quote::BlockQuote;
pub use div::Div;
pub use heading::Heading;
pub use list::{List, ListTag};
pub use paragraph::Paragraph;
pub use table::{Align, CellTag, Table};
