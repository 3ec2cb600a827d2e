//! Lossless parser for Java source extended with aspects
//!
//! This module provides an error-tolerant recursive-descent parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! Every byte of the input, whitespace and comments included, ends up in the
//! tree, so printing the root reproduces the source exactly. A typed AST
//! layer is provided on top.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! TokenSource → lookahead, mark/reset for speculation
//!     ↓
//! Parser + grammar → events → GreenNode tree
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//! ```
//!
//! ## Error tolerance
//!
//! Malformed input never aborts a parse. Unexpected tokens are skipped into
//! `ERROR` nodes up to a recovery point chosen by the enclosing context, and
//! every problem is recorded as a [`SyntaxError`] on the [`Parse`].

pub mod ast;
mod errors;
pub(crate) mod grammar;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;
pub(crate) mod resolver;
pub mod rule_parser;
mod syntax_kind;
mod token_set;
mod token_source;

pub use errors::{ErrorCode, ErrorKind, ParseContext, RelatedInfo, SyntaxError, SyntaxErrorBuilder};
pub use lexer::{Lexer, tokenize};
pub use parser::{
    Parse, ParseConfig, parse_compilation_unit, parse_many, parse_many_with, parse_source,
    parse_source_with, parse_tokens, parse_tokens_with,
};
pub use syntax_kind::{
    AspectLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};
pub use token_source::{Mark, Token, TokenSource, TokenStream, TokenStreamError};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
