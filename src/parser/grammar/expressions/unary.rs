//! Prefix operators, casts and postfix selectors

use super::*;
use crate::parser::parser::Checkpoint;

/// Unary = PrefixOp Unary | Cast | Postfix
pub(super) fn parse_unary(p: &mut Parser<'_>) -> bool {
    match p.current() {
        SyntaxKind::PLUS
        | SyntaxKind::MINUS
        | SyntaxKind::BANG
        | SyntaxKind::TILDE
        | SyntaxKind::PLUS_PLUS
        | SyntaxKind::MINUS_MINUS => {
            p.start_node(SyntaxKind::PREFIX_EXPR);
            p.bump();
            p.nested((), |p| expect_operand(p, parse_unary));
            p.finish_node();
            true
        }
        SyntaxKind::L_PAREN if resolver::is_cast(p) => {
            parse_cast(p);
            true
        }
        _ => parse_postfix(p),
    }
}

/// Cast = '(' Type ('&' Type)* ')' Unary
fn parse_cast(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::CAST_EXPR);
    let open = p.bump_range();
    types::expect_type(p);
    while p.eat(SyntaxKind::AMP) {
        types::expect_type(p);
    }
    p.expect_closing(SyntaxKind::R_PAREN, open);
    p.nested((), |p| expect_operand(p, parse_unary));
    p.finish_node();
}

// =============================================================================
// Postfix selectors
// =============================================================================

/// Postfix = Primary Selector* ('++' | '--')*
fn parse_postfix(p: &mut Parser<'_>) -> bool {
    let cp = p.checkpoint();
    let Some(mut last) = primary::parse_primary(p) else {
        return false;
    };
    loop {
        last = match p.current() {
            SyntaxKind::DOT => match parse_dot_selector(p, cp) {
                Some(kind) => kind,
                None => break,
            },
            SyntaxKind::L_BRACKET if p.nth_at(1, SyntaxKind::R_BRACKET) => {
                if !resolver::at_array_class_literal(p) {
                    break;
                }
                p.start_node_at(cp, SyntaxKind::CLASS_LITERAL);
                while p.at(SyntaxKind::L_BRACKET) {
                    p.bump();
                    p.bump();
                }
                p.bump(); // .
                p.bump(); // class
                p.finish_node();
                SyntaxKind::CLASS_LITERAL
            }
            SyntaxKind::L_BRACKET => {
                p.start_node_at(cp, SyntaxKind::ARRAY_ACCESS);
                let open = p.bump_range();
                expect_expression(p);
                p.expect_closing(SyntaxKind::R_BRACKET, open);
                p.finish_node();
                SyntaxKind::ARRAY_ACCESS
            }
            SyntaxKind::L_PAREN if is_callee(last) => {
                p.start_node_at(cp, SyntaxKind::METHOD_CALL);
                parse_argument_list(p);
                p.finish_node();
                SyntaxKind::METHOD_CALL
            }
            SyntaxKind::PLUS_PLUS | SyntaxKind::MINUS_MINUS => {
                p.start_node_at(cp, SyntaxKind::POSTFIX_EXPR);
                p.bump();
                p.finish_node();
                SyntaxKind::POSTFIX_EXPR
            }
            _ => break,
        };
    }
    true
}

/// Expressions that a directly following `(` turns into a call
///
/// `this(...)` and `super(...)` are explicit constructor invocations.
fn is_callee(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::NAME_REF
            | SyntaxKind::THIS_EXPR
            | SyntaxKind::SUPER_EXPR
            | SyntaxKind::QUALIFIED_SUPER
            | SyntaxKind::QUALIFIED_THIS
    )
}

/// Selector after `.`; None leaves the dot unconsumed
fn parse_dot_selector(p: &mut Parser<'_>, cp: Checkpoint) -> Option<SyntaxKind> {
    let kind = match p.nth(1) {
        SyntaxKind::THIS_KW => {
            p.start_node_at(cp, SyntaxKind::QUALIFIED_THIS);
            p.bump();
            p.bump();
            SyntaxKind::QUALIFIED_THIS
        }
        SyntaxKind::SUPER_KW => {
            p.start_node_at(cp, SyntaxKind::QUALIFIED_SUPER);
            p.bump();
            p.bump();
            SyntaxKind::QUALIFIED_SUPER
        }
        SyntaxKind::CLASS_KW => {
            p.start_node_at(cp, SyntaxKind::CLASS_LITERAL);
            p.bump();
            p.bump();
            SyntaxKind::CLASS_LITERAL
        }
        SyntaxKind::NEW_KW => {
            p.start_node_at(cp, SyntaxKind::INNER_CREATION);
            p.bump(); // .
            p.bump(); // new
            if p.at(SyntaxKind::LT) {
                types::parse_type_arguments(p);
            }
            types::parse_class_type(p);
            if p.at(SyntaxKind::L_PAREN) {
                parse_argument_list(p);
            } else {
                p.error(
                    ErrorCode::E0404,
                    format!(
                        "expected '(' after the inner class name, found {}",
                        p.found_description()
                    ),
                );
            }
            if p.at(SyntaxKind::L_BRACE) {
                declarations::parse_class_body(p, SyntaxKind::CLASS_BODY, ParseContext::ClassBody);
            }
            SyntaxKind::INNER_CREATION
        }
        SyntaxKind::LT => {
            // explicit generic invocation: `obj.<T>m(...)`
            p.start_node_at(cp, SyntaxKind::METHOD_CALL);
            p.bump();
            types::parse_type_arguments(p);
            parse_name(p);
            parse_call_arguments(p);
            SyntaxKind::METHOD_CALL
        }
        kind if kind.is_name() => {
            if p.nth_at(2, SyntaxKind::L_PAREN) {
                p.start_node_at(cp, SyntaxKind::METHOD_CALL);
                p.bump();
                parse_name(p);
                parse_argument_list(p);
                SyntaxKind::METHOD_CALL
            } else {
                p.start_node_at(cp, SyntaxKind::FIELD_ACCESS);
                p.bump();
                parse_name(p);
                SyntaxKind::FIELD_ACCESS
            }
        }
        _ => {
            p.start_node_at(cp, SyntaxKind::FIELD_ACCESS);
            p.bump();
            p.error_expected(&[SyntaxKind::IDENT]);
            p.finish_node();
            return None;
        }
    };
    p.finish_node();
    Some(kind)
}

/// Arguments that must follow a generic method name
pub(super) fn parse_call_arguments(p: &mut Parser<'_>) {
    if p.at(SyntaxKind::L_PAREN) {
        parse_argument_list(p);
    } else {
        p.error_expected(&[SyntaxKind::L_PAREN]);
    }
}
