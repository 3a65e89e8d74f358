//! # Block Parsing
//!
//! Line-oriented block parsing that writes HTML as it goes.
//!
//! ## Parsing Phases
//!
//! 1. **Dispatch** (`open`): `try_open_block` decides which block the line at
//!    the cursor opens, looking at most one line ahead
//!
//! 2. **Rendering** (`renderer`): `BlockRenderer` consumes the block's line
//!    run, writes its HTML and moves the cursor past it
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, Table, ListMarker...)
//! - **`open`**: `try_open_block` dispatch in priority order
//! - **`renderer`**: `BlockRenderer` orchestration and recursion
//!
//! ## Key Invariants
//!
//! - The line cursor strictly increases on every dispatch step
//! - Fenced and indented code are raw zones: no block/inline parsing inside
//! - Blockquote and list item bodies are rendered by recursion on borrowed
//!   lines, never by re-joining text and re-splitting it
//! - Nesting depth is capped by `RenderOptions::max_nesting`

pub mod kinds;
pub mod open;
pub mod renderer;

pub use open::{BlockOpen, try_open_block};
pub use renderer::BlockRenderer;
