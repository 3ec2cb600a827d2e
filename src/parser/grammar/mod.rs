//! Grammar rules
//!
//! Hand-written recursive descent over the [`Parser`] event API:
//! - `declarations` - compilation unit members, classes, interfaces, enums, members
//! - `aspects` - aspect declarations, advice, pointcut declarations, inter-type and declare forms
//! - `types` - types, type arguments and type parameters
//! - `expressions` - the precedence-climbed expression grammar
//! - `statements` - blocks and statements
//! - `pointcuts` - boolean pointcut expressions and the pointcut primitives
//! - `patterns` - type, method, constructor, field and argument patterns
//!
//! Rules that may match nothing return `bool` (whether anything was consumed)
//! and leave the diagnostic to the caller, which knows what was expected.

pub(crate) mod aspects;
pub(crate) mod declarations;
pub(crate) mod expressions;
pub(crate) mod patterns;
pub(crate) mod pointcuts;
pub(crate) mod statements;
pub(crate) mod types;

use super::errors::{ErrorCode, ParseContext};
use super::parser::Parser;
use super::resolver;
use super::syntax_kind::SyntaxKind;

/// CompilationUnit = PackageDecl? ImportDecl* TypeDecl* EOF
pub(crate) fn compilation_unit(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::COMPILATION_UNIT);

    if resolver::at_package_decl(p) {
        declarations::parse_package(p);
        p.recover(ParseContext::TopLevel);
    }

    while p.at(SyntaxKind::IMPORT_KW) {
        if p.check_cancelled() {
            break;
        }
        declarations::parse_import(p);
        p.recover(ParseContext::TopLevel);
    }

    while !p.at_end() {
        if p.check_cancelled() {
            break;
        }
        let start = p.pos();
        if p.at(SyntaxKind::IMPORT_KW) {
            let range = p.current_range();
            p.report(
                ErrorCode::E0304,
                "import declarations must precede type declarations",
                range,
            );
            declarations::parse_import(p);
        } else {
            declarations::parse_type_declaration(p, ParseContext::TopLevel);
        }
        if p.pos() == start {
            p.err_and_bump(ErrorCode::E0304, "expected a type declaration");
        }
        p.recover(ParseContext::TopLevel);
    }

    p.bump_eof();
    p.finish_node();
}

// =============================================================================
// Names
// =============================================================================

/// Name = IDENT | aspect keyword
///
/// Emits a NAME node. Reports E0301 when no name is present.
pub(crate) fn parse_name(p: &mut Parser<'_>) -> bool {
    if p.at_name() {
        p.start_node(SyntaxKind::NAME);
        p.bump();
        p.finish_node();
        true
    } else {
        p.error_expected(&[SyntaxKind::IDENT]);
        false
    }
}

/// Consume a bare name token without wrapping it
pub(crate) fn expect_name_token(p: &mut Parser<'_>) -> bool {
    if p.at_name() {
        p.bump();
        true
    } else {
        p.error_expected(&[SyntaxKind::IDENT]);
        false
    }
}

/// QualifiedName = Name ('.' Name)*
pub(crate) fn parse_qualified_name(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::QUALIFIED_NAME);
    expect_name_token(p);
    while p.at(SyntaxKind::DOT) && p.nth_at_name(1) {
        p.bump();
        p.bump();
    }
    p.finish_node();
}
