//! Parser error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - Error kinds (syntax, end of input, exhausted ambiguity, cancellation)
//! - Context-aware error messages and recovery sets
//! - Related span tracking (e.g., "opened here" for unclosed braces)

mod codes;
mod context;
mod error;

pub use codes::ErrorCode;
pub use context::ParseContext;
pub use error::{ErrorKind, RelatedInfo, SyntaxError, SyntaxErrorBuilder, describe_expected};

#[cfg(test)]
mod tests;
