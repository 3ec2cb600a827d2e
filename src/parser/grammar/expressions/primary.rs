//! Primary expressions and instance creation

use super::*;
use crate::parser::token_set::{LITERALS, PRIMITIVE_TYPES};

/// Primary = Literal | 'this' | 'super' | '(' Expression ')' | Creator
///         | (PrimitiveType | 'void') Dims? '.' 'class' | GenericCall | Name
///
/// Returns the kind of the node produced, or None if no primary starts here.
pub(super) fn parse_primary(p: &mut Parser<'_>) -> Option<SyntaxKind> {
    let kind = match p.current() {
        kind if LITERALS.contains(kind) => {
            p.start_node(SyntaxKind::LITERAL);
            p.bump();
            SyntaxKind::LITERAL
        }
        SyntaxKind::THIS_KW => {
            p.start_node(SyntaxKind::THIS_EXPR);
            p.bump();
            SyntaxKind::THIS_EXPR
        }
        SyntaxKind::SUPER_KW => {
            p.start_node(SyntaxKind::SUPER_EXPR);
            p.bump();
            SyntaxKind::SUPER_EXPR
        }
        SyntaxKind::L_PAREN => {
            p.start_node(SyntaxKind::PAREN_EXPR);
            let open = p.bump_range();
            expect_expression(p);
            p.expect_closing(SyntaxKind::R_PAREN, open);
            SyntaxKind::PAREN_EXPR
        }
        SyntaxKind::NEW_KW => return Some(parse_creator(p)),
        kind if PRIMITIVE_TYPES.contains(kind) || kind == SyntaxKind::VOID_KW => {
            return parse_primitive_class_literal(p);
        }
        SyntaxKind::LT => {
            // `<T>m(...)`
            p.start_node(SyntaxKind::METHOD_CALL);
            types::parse_type_arguments(p);
            parse_name(p);
            unary::parse_call_arguments(p);
            SyntaxKind::METHOD_CALL
        }
        _ if p.at_name() => {
            p.start_node(SyntaxKind::NAME_REF);
            p.bump();
            SyntaxKind::NAME_REF
        }
        _ => return None,
    };
    p.finish_node();
    Some(kind)
}

/// `int.class`, `int[][].class`, `void.class`
fn parse_primitive_class_literal(p: &mut Parser<'_>) -> Option<SyntaxKind> {
    if !resolver::at_primitive_class_literal(p) {
        return None;
    }
    p.start_node(SyntaxKind::CLASS_LITERAL);
    types::parse_result_type(p);
    p.bump(); // .
    p.bump(); // class
    p.finish_node();
    Some(SyntaxKind::CLASS_LITERAL)
}

// =============================================================================
// Creators
// =============================================================================

/// Creator = 'new' TypeArguments? CreatedName (ClassCreatorRest | ArrayCreatorRest)
///
/// ClassCreatorRest = Arguments ClassBody?
/// ArrayCreatorRest = ('[' Expression ']')+ Dims? | Dims ArrayInitializer
fn parse_creator(p: &mut Parser<'_>) -> SyntaxKind {
    let cp = p.checkpoint();
    p.bump(); // new
    if p.at(SyntaxKind::LT) {
        types::parse_type_arguments(p);
    }
    if p.at_any(PRIMITIVE_TYPES) {
        p.start_node(SyntaxKind::PRIMITIVE_TYPE);
        p.bump();
        p.finish_node();
    } else if p.at_name() {
        types::parse_class_type(p);
    } else {
        p.start_node_at(cp, SyntaxKind::NEW_EXPR);
        p.error(
            ErrorCode::E0404,
            format!("expected a type after 'new', found {}", p.found_description()),
        );
        p.finish_node();
        return SyntaxKind::NEW_EXPR;
    }

    match p.current() {
        SyntaxKind::L_BRACKET => {
            p.start_node_at(cp, SyntaxKind::ARRAY_CREATION);
            parse_array_creator_rest(p);
            p.finish_node();
            SyntaxKind::ARRAY_CREATION
        }
        SyntaxKind::L_PAREN => {
            p.start_node_at(cp, SyntaxKind::NEW_EXPR);
            parse_argument_list(p);
            if p.at(SyntaxKind::L_BRACE) {
                declarations::parse_class_body(p, SyntaxKind::CLASS_BODY, ParseContext::ClassBody);
            }
            p.finish_node();
            SyntaxKind::NEW_EXPR
        }
        _ => {
            p.start_node_at(cp, SyntaxKind::NEW_EXPR);
            p.error(
                ErrorCode::E0404,
                format!(
                    "expected '(' or '[' in instance creation, found {}",
                    p.found_description()
                ),
            );
            p.finish_node();
            SyntaxKind::NEW_EXPR
        }
    }
}

fn parse_array_creator_rest(p: &mut Parser<'_>) {
    if p.nth_at(1, SyntaxKind::R_BRACKET) {
        types::parse_opt_dims(p);
        if p.at(SyntaxKind::L_BRACE) {
            declarations::parse_array_initializer(p);
        } else {
            p.error(
                ErrorCode::E0404,
                format!(
                    "expected an array initializer or dimension expression, found {}",
                    p.found_description()
                ),
            );
        }
        return;
    }
    while p.at(SyntaxKind::L_BRACKET) && !p.nth_at(1, SyntaxKind::R_BRACKET) {
        p.start_node(SyntaxKind::DIM_EXPR);
        let open = p.bump_range();
        expect_expression(p);
        p.expect_closing(SyntaxKind::R_BRACKET, open);
        p.finish_node();
    }
    types::parse_opt_dims(p);
}

// =============================================================================
// Arguments
// =============================================================================

/// Arguments = '(' (Expression (',' Expression)*)? ')'
pub(crate) fn parse_argument_list(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ARGUMENT_LIST);
    let open = p.bump_range();
    if !p.at(SyntaxKind::R_PAREN) {
        loop {
            expect_expression(p);
            if !p.eat(SyntaxKind::COMMA) {
                break;
            }
        }
    }
    if !p.eat(SyntaxKind::R_PAREN) {
        let err = p
            .error_builder(ErrorCode::E0403)
            .message(format!(
                "expected ')' to close the argument list, found {}",
                p.found_description()
            ))
            .expected(SyntaxKind::R_PAREN)
            .related("argument list opened here", open)
            .build();
        p.push_error(err, true);
    }
    p.finish_node();
}
