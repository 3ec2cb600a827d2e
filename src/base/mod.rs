//! Foundation types shared by the lexer and parser.
//!
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//!
//! This module has NO dependencies on other weaver modules.

mod line_index;

pub use line_index::{LineCol, LineIndex};
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
