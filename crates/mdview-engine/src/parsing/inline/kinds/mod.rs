//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser asks
//! these types what to look for; it never hardcodes `[`, `~~` or `` ` ``.

pub mod autolink;
pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod hard_break;
pub mod link;
pub mod strikethrough;

pub use autolink::Autolink;
pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strength};
pub use escape::Escape;
pub use hard_break::HardBreak;
pub use link::Link;
pub use strikethrough::Strikethrough;
