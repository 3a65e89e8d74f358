pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod list;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind};
pub use heading::Heading;
pub use indented_code::IndentedCode;
pub use list::{ListKind, ListMarker, TaskState};
pub use paragraph::Paragraph;
pub use table::{Alignment, Table};
pub use thematic_break::ThematicBreak;
