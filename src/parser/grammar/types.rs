//! Types, type arguments and type parameters

use super::*;
use crate::parser::token_set::PRIMITIVE_TYPES;

/// Check whether the current token can begin a type
pub(crate) fn at_type_start(p: &Parser<'_>) -> bool {
    p.at_name() || p.at_any(PRIMITIVE_TYPES)
}

/// Type = (PrimitiveType | ClassType) ('[' ']')*
///
/// Returns false without consuming anything when no type starts here.
pub(crate) fn parse_type(p: &mut Parser<'_>) -> bool {
    if !at_type_start(p) {
        return false;
    }
    let cp = p.checkpoint();
    if p.at_any(PRIMITIVE_TYPES) {
        p.start_node(SyntaxKind::PRIMITIVE_TYPE);
        p.bump();
        p.finish_node();
    } else {
        parse_class_type(p);
    }
    while p.at(SyntaxKind::L_BRACKET) && p.nth_at(1, SyntaxKind::R_BRACKET) {
        p.start_node_at(cp, SyntaxKind::ARRAY_TYPE);
        p.bump();
        p.bump();
        p.finish_node();
    }
    true
}

/// A type or `void`, as used for method results
pub(crate) fn parse_result_type(p: &mut Parser<'_>) -> bool {
    if p.at(SyntaxKind::VOID_KW) {
        p.start_node(SyntaxKind::PRIMITIVE_TYPE);
        p.bump();
        p.finish_node();
        true
    } else {
        parse_type(p)
    }
}

/// Type with an error if none is present
pub(crate) fn expect_type(p: &mut Parser<'_>) -> bool {
    if parse_type(p) {
        true
    } else {
        p.error(
            ErrorCode::E0307,
            format!("expected a type, found {}", p.current().display_name()),
        );
        false
    }
}

/// ClassType = Name TypeArguments? ('.' Name TypeArguments?)*
pub(crate) fn parse_class_type(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::CLASS_TYPE);
    expect_name_token(p);
    if p.at(SyntaxKind::LT) {
        parse_type_arguments(p);
    }
    while p.at(SyntaxKind::DOT) && p.nth_at_name(1) {
        p.bump();
        p.bump();
        if p.at(SyntaxKind::LT) {
            parse_type_arguments(p);
        }
    }
    p.finish_node();
}

/// TypeArguments = '<' (TypeArgument (',' TypeArgument)*)? '>'
///
/// The empty form is the diamond of a class instance creation.
pub(crate) fn parse_type_arguments(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::TYPE_ARGUMENTS);
    let open = p.bump_range();
    if !p.at(SyntaxKind::GT) {
        loop {
            parse_type_argument(p);
            if !p.eat(SyntaxKind::COMMA) {
                break;
            }
        }
    }
    if !p.eat(SyntaxKind::GT) {
        let err = p
            .error_builder(ErrorCode::E0206)
            .message(format!(
                "expected '>' to close type arguments, found {}",
                p.current().display_name()
            ))
            .expected(SyntaxKind::GT)
            .related("type arguments opened here", open)
            .build();
        p.push_error(err, true);
    }
    p.finish_node();
}

/// TypeArgument = Type | '?' (('extends' | 'super') Type)?
fn parse_type_argument(p: &mut Parser<'_>) {
    p.nested((), type_argument);
}

fn type_argument(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::TYPE_ARGUMENT);
    if p.at(SyntaxKind::QUESTION) {
        p.start_node(SyntaxKind::WILDCARD_TYPE);
        p.bump();
        if p.at(SyntaxKind::EXTENDS_KW) || p.at(SyntaxKind::SUPER_KW) {
            p.bump();
            expect_type(p);
        }
        p.finish_node();
    } else {
        expect_type(p);
    }
    p.finish_node();
}

/// TypeParameters = '<' TypeParameter (',' TypeParameter)* '>'
pub(crate) fn parse_type_parameters(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::TYPE_PARAMETERS);
    let open = p.bump_range();
    loop {
        p.start_node(SyntaxKind::TYPE_PARAMETER);
        while p.at(SyntaxKind::AT) {
            declarations::parse_annotation(p);
        }
        parse_name(p);
        if p.at(SyntaxKind::EXTENDS_KW) {
            p.start_node(SyntaxKind::TYPE_BOUND);
            p.bump();
            expect_type(p);
            while p.eat(SyntaxKind::AMP) {
                expect_type(p);
            }
            p.finish_node();
        }
        p.finish_node();
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    if !p.eat(SyntaxKind::GT) {
        let err = p
            .error_builder(ErrorCode::E0206)
            .message(format!(
                "expected '>' to close type parameters, found {}",
                p.current().display_name()
            ))
            .expected(SyntaxKind::GT)
            .related("type parameters opened here", open)
            .build();
        p.push_error(err, true);
    }
    p.finish_node();
}

/// TypeList = Type (',' Type)*
pub(crate) fn parse_type_list(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::TYPE_LIST);
    expect_type(p);
    while p.eat(SyntaxKind::COMMA) {
        expect_type(p);
    }
    p.finish_node();
}

/// Dims = ('[' ']')+ after a declarator name
pub(crate) fn parse_opt_dims(p: &mut Parser<'_>) {
    if !(p.at(SyntaxKind::L_BRACKET) && p.nth_at(1, SyntaxKind::R_BRACKET)) {
        return;
    }
    p.start_node(SyntaxKind::DIMS);
    while p.at(SyntaxKind::L_BRACKET) && p.nth_at(1, SyntaxKind::R_BRACKET) {
        p.bump();
        p.bump();
    }
    p.finish_node();
}
