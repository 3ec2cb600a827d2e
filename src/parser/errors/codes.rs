//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (braces, semicolons)
//! - E03xx: Declaration errors (types, members, modifiers)
//! - E04xx: Expression errors
//! - E05xx: Statement errors
//! - E06xx: Pointcut errors
//! - E07xx: Pattern errors
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering, documentation, and IDE integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors (invalid tokens)
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string or character literal
    E0102,
    /// Unterminated block comment
    E0103,
    /// Invalid numeric literal
    E0104,

    // =========================================================================
    // E02xx: Structural errors (braces, semicolons, delimiters)
    // =========================================================================
    /// Missing semicolon
    E0201,
    /// Unclosed brace `{`
    E0202,
    /// Unclosed parenthesis `(`
    E0203,
    /// Unclosed bracket `[`
    E0204,
    /// Unexpected closing delimiter
    E0205,
    /// Unclosed type argument list `<`
    E0206,
    /// Input continues after the rule or compilation unit ended
    E0207,
    /// Constructs nested deeper than the configured limit
    E0208,

    // =========================================================================
    // E03xx: Declaration errors
    // =========================================================================
    /// Missing identifier/name
    E0301,
    /// Modifier not allowed on this declaration
    E0302,
    /// Repeated modifier
    E0303,
    /// Unexpected token at a declaration boundary
    E0304,
    /// Member could not be classified as any declaration form
    E0305,
    /// Missing body (neither `;` nor `{`)
    E0306,
    /// Missing type
    E0307,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Missing expression where expected
    E0401,
    /// Missing operand after an operator
    E0402,
    /// Unclosed method call argument list
    E0403,
    /// Invalid creator after `new`
    E0404,

    // =========================================================================
    // E05xx: Statement errors
    // =========================================================================
    /// Expected a statement
    E0501,
    /// `try` without `catch` or `finally`
    E0502,
    /// Malformed `for` header
    E0503,
    /// Invalid switch label
    E0504,

    // =========================================================================
    // E06xx: Pointcut errors
    // =========================================================================
    /// Expected a pointcut expression
    E0601,
    /// Missing `:` before a pointcut
    E0602,
    /// Invalid per-clause
    E0603,
    /// Invalid advice specification
    E0604,

    // =========================================================================
    // E07xx: Pattern errors
    // =========================================================================
    /// Expected a type pattern
    E0701,
    /// `..` repeated within one contiguous run of a parameter pattern list
    E0702,
    /// Expected a name pattern
    E0703,
    /// Unknown `declare @` form
    E0704,

    // =========================================================================
    // E09xx: Generic errors
    // =========================================================================
    /// Unexpected token
    E0901,
    /// Unexpected end of input
    E0902,
    /// Parse cancelled
    E0903,
}

impl ErrorCode {
    /// Get the string representation of this error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0207 => "E0207",
            Self::E0208 => "E0208",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            Self::E0307 => "E0307",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0404 => "E0404",
            Self::E0501 => "E0501",
            Self::E0502 => "E0502",
            Self::E0503 => "E0503",
            Self::E0504 => "E0504",
            Self::E0601 => "E0601",
            Self::E0602 => "E0602",
            Self::E0603 => "E0603",
            Self::E0604 => "E0604",
            Self::E0701 => "E0701",
            Self::E0702 => "E0702",
            Self::E0703 => "E0703",
            Self::E0704 => "E0704",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
            Self::E0903 => "E0903",
        }
    }

    /// Get a human-readable category description
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 => "lexical error",
            Self::E0201
            | Self::E0202
            | Self::E0203
            | Self::E0204
            | Self::E0205
            | Self::E0206
            | Self::E0207
            | Self::E0208 => "structural error",
            Self::E0301
            | Self::E0302
            | Self::E0303
            | Self::E0304
            | Self::E0305
            | Self::E0306
            | Self::E0307 => "declaration error",
            Self::E0401 | Self::E0402 | Self::E0403 | Self::E0404 => "expression error",
            Self::E0501 | Self::E0502 | Self::E0503 | Self::E0504 => "statement error",
            Self::E0601 | Self::E0602 | Self::E0603 | Self::E0604 => "pointcut error",
            Self::E0701 | Self::E0702 | Self::E0703 | Self::E0704 => "pattern error",
            Self::E0901 | Self::E0902 | Self::E0903 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated literal",
            Self::E0103 => "unterminated block comment",
            Self::E0104 => "invalid numeric literal",
            // Structural
            Self::E0201 => "missing semicolon",
            Self::E0202 => "unclosed brace",
            Self::E0203 => "unclosed parenthesis",
            Self::E0204 => "unclosed bracket",
            Self::E0205 => "unexpected closing delimiter",
            Self::E0206 => "unclosed type argument list",
            Self::E0207 => "unexpected trailing input",
            Self::E0208 => "nesting too deep",
            // Declaration
            Self::E0301 => "missing identifier",
            Self::E0302 => "modifier not allowed here",
            Self::E0303 => "repeated modifier",
            Self::E0304 => "expected a declaration",
            Self::E0305 => "unrecognized member declaration",
            Self::E0306 => "missing body",
            Self::E0307 => "expected a type",
            // Expression
            Self::E0401 => "expected expression",
            Self::E0402 => "missing operand",
            Self::E0403 => "unclosed argument list",
            Self::E0404 => "invalid creator",
            // Statement
            Self::E0501 => "expected statement",
            Self::E0502 => "'try' without 'catch' or 'finally'",
            Self::E0503 => "malformed 'for' header",
            Self::E0504 => "invalid switch label",
            // Pointcut
            Self::E0601 => "expected pointcut expression",
            Self::E0602 => "missing ':' before pointcut",
            Self::E0603 => "invalid per-clause",
            Self::E0604 => "invalid advice specification",
            // Pattern
            Self::E0701 => "expected type pattern",
            Self::E0702 => "repeated '..' in pattern list",
            Self::E0703 => "expected name pattern",
            Self::E0704 => "unknown 'declare @' form",
            // Generic
            Self::E0901 => "unexpected token",
            Self::E0902 => "unexpected end of input",
            Self::E0903 => "parse cancelled",
        }
    }

    /// Check if this is a structural error (delimiter-related)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201
                | Self::E0202
                | Self::E0203
                | Self::E0204
                | Self::E0205
                | Self::E0206
                | Self::E0207
                | Self::E0208
        )
    }

    /// Check if this is a recoverable error (parsing can continue)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::E0902 | Self::E0903)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::E0201.as_str(), "E0201");
        assert_eq!(ErrorCode::E0702.as_str(), "E0702");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::E0601), "E0601");
    }

    #[test]
    fn test_error_code_default_message() {
        assert_eq!(ErrorCode::E0201.default_message(), "missing semicolon");
        assert_eq!(
            ErrorCode::E0502.default_message(),
            "'try' without 'catch' or 'finally'"
        );
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::E0202.category_description(), "structural error");
        assert_eq!(ErrorCode::E0302.category_description(), "declaration error");
        assert_eq!(ErrorCode::E0601.category_description(), "pointcut error");
        assert_eq!(ErrorCode::E0702.category_description(), "pattern error");
    }

    #[test]
    fn test_is_structural() {
        assert!(ErrorCode::E0202.is_structural());
        assert!(!ErrorCode::E0301.is_structural());
    }

    #[test]
    fn test_is_recoverable() {
        assert!(ErrorCode::E0201.is_recoverable());
        assert!(!ErrorCode::E0902.is_recoverable());
        assert!(!ErrorCode::E0903.is_recoverable());
    }
}
