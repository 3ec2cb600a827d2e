//! Integration tests for the errors module

use super::*;
use crate::parser::SyntaxKind;
use rowan::{TextRange, TextSize};

#[test]
fn test_error_module_exports() {
    let _code = ErrorCode::E0201;
    let _kind = ErrorKind::AmbiguityExhausted;
    let _context = ParseContext::TopLevel;

    let _err = SyntaxError::new(
        "test error",
        TextRange::empty(TextSize::new(0)),
        ErrorCode::E0901,
    );
}

#[test]
fn test_unclosed_brace_workflow() {
    let opening_brace = TextRange::new(TextSize::new(10), TextSize::new(11));
    let error_pos = TextRange::empty(TextSize::new(50));

    let err = SyntaxError::builder(ErrorCode::E0202)
        .message("unclosed '{' in aspect body")
        .range(error_pos)
        .kind(ErrorKind::UnexpectedEndOfInput)
        .expected(SyntaxKind::R_BRACE)
        .found(SyntaxKind::EOF)
        .hint("add '}' to close the aspect body")
        .related("opening brace here", opening_brace)
        .build();

    assert_eq!(err.code, ErrorCode::E0202);
    assert_eq!(err.kind, ErrorKind::UnexpectedEndOfInput);
    assert!(err.has_hint());
    assert_eq!(err.related[0].range, opening_brace);
    assert_eq!(err.expected, vec![SyntaxKind::R_BRACE]);
}

#[test]
fn test_error_code_exhaustiveness() {
    let codes = [
        ErrorCode::E0101,
        ErrorCode::E0102,
        ErrorCode::E0103,
        ErrorCode::E0104,
        ErrorCode::E0201,
        ErrorCode::E0202,
        ErrorCode::E0203,
        ErrorCode::E0204,
        ErrorCode::E0205,
        ErrorCode::E0206,
        ErrorCode::E0207,
        ErrorCode::E0208,
        ErrorCode::E0301,
        ErrorCode::E0302,
        ErrorCode::E0303,
        ErrorCode::E0304,
        ErrorCode::E0305,
        ErrorCode::E0306,
        ErrorCode::E0307,
        ErrorCode::E0401,
        ErrorCode::E0402,
        ErrorCode::E0403,
        ErrorCode::E0404,
        ErrorCode::E0501,
        ErrorCode::E0502,
        ErrorCode::E0503,
        ErrorCode::E0504,
        ErrorCode::E0601,
        ErrorCode::E0602,
        ErrorCode::E0603,
        ErrorCode::E0604,
        ErrorCode::E0701,
        ErrorCode::E0702,
        ErrorCode::E0703,
        ErrorCode::E0704,
        ErrorCode::E0901,
        ErrorCode::E0902,
        ErrorCode::E0903,
    ];

    for code in codes {
        assert!(code.as_str().starts_with('E'));
        assert_eq!(code.as_str().len(), 5);
        assert!(!code.default_message().is_empty());
        assert!(!code.category_description().is_empty());
    }
}

#[test]
fn test_context_recovery_sets_end_at_eof() {
    let contexts = [
        ParseContext::TopLevel,
        ParseContext::ClassBody,
        ParseContext::AspectBody,
        ParseContext::EnumBody,
        ParseContext::AnnotationBody,
        ParseContext::Block,
        ParseContext::SwitchBlock,
        ParseContext::ParameterList,
        ParseContext::ArgumentList,
        ParseContext::Expression,
        ParseContext::Pointcut,
        ParseContext::PatternList,
    ];

    for context in contexts {
        assert!(context.recovery_tokens().contains(SyntaxKind::EOF), "{context:?}");
        assert!(!context.description().is_empty());
        assert!(!context.expected_description().is_empty());
    }
}
