//! Syntax error types
//!
//! Provides rich error information including:
//! - Error kind and code for categorization
//! - Expected token kinds and the token actually found
//! - Hints/suggestions for fixes
//! - Related source locations

use indexmap::IndexSet;
use rowan::{TextRange, TextSize};
use thiserror::Error;

use super::codes::ErrorCode;
use crate::base::LineCol;
use crate::parser::SyntaxKind;

/// How a diagnostic came about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    /// No alternative matched the lookahead; the parser recovered
    #[default]
    Syntax,
    /// The token stream ended in the middle of a rule
    UnexpectedEndOfInput,
    /// Every speculative alternative at a decision point failed
    AmbiguityExhausted,
    /// The caller cancelled the parse; the remaining input was not parsed
    Cancelled,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Syntax => "syntax error",
            Self::UnexpectedEndOfInput => "unexpected end of input",
            Self::AmbiguityExhausted => "no alternative matched",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Related location information for an error
///
/// Used to point to related source locations, e.g.,
/// "unclosed brace opened here" pointing to the opening `{`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Description of this related location
    pub message: String,
    /// Source range
    pub range: TextRange,
}

impl RelatedInfo {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// A syntax error with location, expectation and recovery information
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Span of the offending token
    pub range: TextRange,
    /// Line/column of the offending token
    pub line_col: LineCol,
    pub kind: ErrorKind,
    pub code: ErrorCode,
    /// Token kinds that would have been accepted, in the order the grammar tried them
    pub expected: Vec<SyntaxKind>,
    /// The token actually found
    pub found: Option<SyntaxKind>,
    /// Optional suggestion for fixing the error
    pub hint: Option<String>,
    pub related: Vec<RelatedInfo>,
}

impl SyntaxError {
    /// Create a new syntax error with minimal information
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            line_col: LineCol::default(),
            kind: ErrorKind::Syntax,
            code,
            expected: Vec::new(),
            found: None,
            hint: None,
            related: vec![],
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    /// Create a builder for more complex error construction
    pub fn builder(code: ErrorCode) -> SyntaxErrorBuilder {
        SyntaxErrorBuilder::new(code)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    pub fn has_related(&self) -> bool {
        !self.related.is_empty()
    }

    /// Format the error for display, including the hint
    pub fn format(&self) -> String {
        let mut result = format!(
            "{}:{}: {}",
            self.line_col.line + 1,
            self.line_col.col + 1,
            self
        );
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

/// Builder for creating complex syntax errors
pub struct SyntaxErrorBuilder {
    code: ErrorCode,
    kind: ErrorKind,
    message: Option<String>,
    range: Option<TextRange>,
    line_col: LineCol,
    expected: IndexSet<SyntaxKind>,
    found: Option<SyntaxKind>,
    hint: Option<String>,
    related: Vec<RelatedInfo>,
}

impl SyntaxErrorBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            kind: ErrorKind::Syntax,
            message: None,
            range: None,
            line_col: LineCol::default(),
            expected: IndexSet::new(),
            found: None,
            hint: None,
            related: vec![],
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn range(mut self, range: TextRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the offset (creates an empty range at that position)
    pub fn at_offset(mut self, offset: TextSize) -> Self {
        self.range = Some(TextRange::empty(offset));
        self
    }

    pub fn line_col(mut self, line_col: LineCol) -> Self {
        self.line_col = line_col;
        self
    }

    pub fn kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Add an expected token kind; duplicates keep their first position
    pub fn expected(mut self, kind: SyntaxKind) -> Self {
        self.expected.insert(kind);
        self
    }

    pub fn expected_all(mut self, kinds: impl IntoIterator<Item = SyntaxKind>) -> Self {
        self.expected.extend(kinds);
        self
    }

    pub fn found(mut self, kind: SyntaxKind) -> Self {
        self.found = Some(kind);
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn related(mut self, message: impl Into<String>, range: TextRange) -> Self {
        self.related.push(RelatedInfo::new(message, range));
        self
    }

    /// Build the syntax error. Missing message or range fall back to defaults.
    pub fn build(self) -> SyntaxError {
        SyntaxError {
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            range: self
                .range
                .unwrap_or_else(|| TextRange::empty(TextSize::new(0))),
            line_col: self.line_col,
            kind: self.kind,
            code: self.code,
            expected: self.expected.into_iter().collect(),
            found: self.found,
            hint: self.hint,
            related: self.related,
        }
    }
}

/// Describe an expected-token list: `';'`, `';' or ')'`, `'(', ',' or ')'`
pub fn describe_expected(kinds: &[SyntaxKind]) -> String {
    match kinds {
        [] => "something else".to_string(),
        [one] => one.display_name().to_string(),
        [init @ .., last] => {
            let init: Vec<_> = init.iter().map(|k| k.display_name()).collect();
            format!("{} or {}", init.join(", "), last.display_name())
        }
    }
}
