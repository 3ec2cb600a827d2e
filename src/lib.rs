//! # weaver-base
//!
//! Syntactic front end for Java source extended with aspects: advice,
//! pointcuts, inter-type declarations and `declare` forms.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! parser    → Logos lexer, recursive-descent parser, rowan CST, typed AST
//!   ↓
//! base      → Primitives (TextRange, LineCol, LineIndex)
//! ```
//!
//! ## Example
//!
//! ```
//! use weaver::parser::{ast::{AstNode, CompilationUnit}, parse_source};
//!
//! let parse = parse_source("aspect Tracer { before(): call(* *(..)) { } }");
//! assert!(parse.ok());
//! let unit = CompilationUnit::cast(parse.syntax()).unwrap();
//! assert_eq!(unit.type_decls().count(), 1);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser)
// ============================================================================

/// Foundation types: TextRange, line/column conversion
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, CST and AST
pub mod parser;

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};

// Re-export the entry points
pub use parser::{Parse, ParseConfig, SyntaxError, SyntaxKind, SyntaxNode, parse_many, parse_source};
