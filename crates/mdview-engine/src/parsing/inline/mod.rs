//! # Inline Parsing
//!
//! A single left-to-right scan that turns a text range into escaped HTML.
//!
//! ## Architecture
//!
//! At each position the rules in [`parser`] are tried in a fixed priority
//! order; the first match consumes its construct and is written out
//! immediately. No inline tree is built.
//!
//! Link labels, emphasis and strikethrough interiors are parsed
//! recursively, always on a strictly shorter range. Code spans are raw
//! zones: their interior is escaped but not parsed.
//!
//! ## Modules
//!
//! - **`types`**: `InlineMatch`, the tagged result of a successful rule
//! - **`kinds`**: inline types owning their delimiters
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`parser`**: `render_inline()` and the `try_parse_*` rules

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::render_inline;
pub(crate) use parser::render_inline_into;
pub use types::InlineMatch;
