//! Pointcut expressions
//!
//! ```text
//! Pointcut     = OrPointcut
//! OrPointcut   = AndPointcut ('||' AndPointcut)*
//! AndPointcut  = NotPointcut ('&&' NotPointcut)*
//! NotPointcut  = '!' NotPointcut | AtomPointcut
//! AtomPointcut = '(' Pointcut ')' | Primitive | ReferencePointcut
//! ```
//!
//! The boolean layer has the same loop shape as the logical operators of the
//! expression grammar. Primitive dispatch is a flat switch on the keyword.

use super::*;

/// Parse a pointcut expression; false if nothing was consumed
pub(crate) fn parse_pointcut_expression(p: &mut Parser<'_>) -> bool {
    p.nested(true, parse_or_pointcut)
}

/// Parse a pointcut expression, reporting E0601 if none starts here
pub(crate) fn expect_pointcut_expression(p: &mut Parser<'_>) -> bool {
    if parse_pointcut_expression(p) {
        return true;
    }
    p.error(
        ErrorCode::E0601,
        format!("expected a pointcut expression, found {}", p.found_description()),
    );
    false
}

fn parse_or_pointcut(p: &mut Parser<'_>) -> bool {
    let cp = p.checkpoint();
    if !parse_and_pointcut(p) {
        return false;
    }
    while p.at(SyntaxKind::PIPE_PIPE) {
        p.start_node_at(cp, SyntaxKind::POINTCUT_BINARY);
        p.bump();
        expect_operand(p, parse_and_pointcut, "||");
        p.finish_node();
    }
    true
}

fn parse_and_pointcut(p: &mut Parser<'_>) -> bool {
    let cp = p.checkpoint();
    if !parse_not_pointcut(p) {
        return false;
    }
    while p.at(SyntaxKind::AMP_AMP) {
        p.start_node_at(cp, SyntaxKind::POINTCUT_BINARY);
        p.bump();
        expect_operand(p, parse_not_pointcut, "&&");
        p.finish_node();
    }
    true
}

fn parse_not_pointcut(p: &mut Parser<'_>) -> bool {
    if p.at(SyntaxKind::BANG) {
        p.start_node(SyntaxKind::POINTCUT_NOT);
        p.bump();
        p.nested((), |p| expect_operand(p, parse_not_pointcut, "!"));
        p.finish_node();
        true
    } else {
        parse_atom_pointcut(p)
    }
}

fn expect_operand(p: &mut Parser<'_>, rule: fn(&mut Parser<'_>) -> bool, op: &str) {
    if !rule(p) {
        p.error(
            ErrorCode::E0601,
            format!(
                "expected a pointcut after '{}', found {}",
                op,
                p.found_description()
            ),
        );
        p.missing();
    }
}

fn parse_atom_pointcut(p: &mut Parser<'_>) -> bool {
    if p.at(SyntaxKind::L_PAREN) {
        p.start_node(SyntaxKind::POINTCUT_PAREN);
        let open = p.bump_range();
        expect_pointcut_expression(p);
        p.expect_closing(SyntaxKind::R_PAREN, open);
        p.finish_node();
        return true;
    }
    if let Some(primitive) = primitive_at(p) {
        parse_primitive(p, primitive);
        return true;
    }
    if p.at_name() {
        parse_reference_pointcut(p);
        return true;
    }
    false
}

// =============================================================================
// Primitives
// =============================================================================

/// Payload shape of a primitive pointcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Payload {
    MethodOrConstructor,
    Constructor,
    Field,
    TypePattern,
    Pointcut,
    OptionalExpression,
    TypeOrIdentifier,
    ArgsList,
    AnnotationOrIdentifier,
    AnnotationList,
    Empty,
}

/// Recognize a primitive: its keyword (after an optional `@`) directly followed by `(`
fn primitive_at(p: &Parser<'_>) -> Option<Payload> {
    if p.at(SyntaxKind::AT) {
        if !p.nth_at(2, SyntaxKind::L_PAREN) {
            return None;
        }
        return match p.nth(1) {
            SyntaxKind::THIS_KW
            | SyntaxKind::TARGET_KW
            | SyntaxKind::WITHIN_KW
            | SyntaxKind::WITHINCODE_KW
            | SyntaxKind::ANNOTATION_KW => Some(Payload::AnnotationOrIdentifier),
            SyntaxKind::ARGS_KW => Some(Payload::AnnotationList),
            _ => None,
        };
    }
    if !p.nth_at(1, SyntaxKind::L_PAREN) {
        return None;
    }
    let payload = match p.current() {
        SyntaxKind::CALL_KW | SyntaxKind::EXECUTION_KW | SyntaxKind::WITHINCODE_KW => {
            Payload::MethodOrConstructor
        }
        SyntaxKind::INITIALIZATION_KW | SyntaxKind::PREINITIALIZATION_KW => Payload::Constructor,
        SyntaxKind::GET_KW | SyntaxKind::SET_KW => Payload::Field,
        SyntaxKind::STATICINITIALIZATION_KW | SyntaxKind::WITHIN_KW | SyntaxKind::HANDLER_KW => {
            Payload::TypePattern
        }
        SyntaxKind::CFLOW_KW | SyntaxKind::CFLOWBELOW_KW => Payload::Pointcut,
        SyntaxKind::IF_KW => Payload::OptionalExpression,
        SyntaxKind::THIS_KW | SyntaxKind::TARGET_KW => Payload::TypeOrIdentifier,
        SyntaxKind::ARGS_KW => Payload::ArgsList,
        SyntaxKind::ADVICEEXECUTION_KW => Payload::Empty,
        _ => return None,
    };
    Some(payload)
}

/// Primitive = '@'? Keyword '(' Payload ')'
fn parse_primitive(p: &mut Parser<'_>, payload: Payload) {
    p.start_node(SyntaxKind::POINTCUT_PRIMITIVE);
    p.eat(SyntaxKind::AT);
    p.bump(); // keyword

    match payload {
        Payload::ArgsList => {
            patterns::parse_args_pattern_list(p);
            p.finish_node();
            return;
        }
        Payload::AnnotationList => {
            patterns::parse_annotation_list_pattern(p);
            p.finish_node();
            return;
        }
        _ => {}
    }

    let open = p.bump_range(); // (
    match payload {
        Payload::MethodOrConstructor => {
            if resolver::at_constructor_pattern(p) {
                patterns::parse_constructor_pattern(p);
            } else {
                patterns::parse_method_pattern(p);
            }
        }
        Payload::Constructor => patterns::parse_constructor_pattern(p),
        Payload::Field => patterns::parse_field_pattern(p),
        Payload::TypePattern => {
            patterns::expect_type_pattern(p);
        }
        Payload::Pointcut => {
            expect_pointcut_expression(p);
        }
        Payload::OptionalExpression => {
            if !p.at(SyntaxKind::R_PAREN) {
                expressions::expect_expression(p);
            }
        }
        Payload::TypeOrIdentifier => patterns::parse_type_or_identifier(p),
        Payload::AnnotationOrIdentifier => patterns::parse_annotation_or_identifier(p),
        Payload::Empty | Payload::ArgsList | Payload::AnnotationList => {}
    }
    p.expect_closing(SyntaxKind::R_PAREN, open);
    p.finish_node();
}

// =============================================================================
// Reference pointcuts
// =============================================================================

/// ReferencePointcut = (Name '.')* Name ArgsPatternList
///
/// The qualifier names the declaring type; resolution happens later.
fn parse_reference_pointcut(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::REFERENCE_POINTCUT);
    p.bump();
    while p.at(SyntaxKind::DOT) && p.nth_at_name(1) {
        p.bump();
        p.bump();
    }
    if p.at(SyntaxKind::L_PAREN) {
        patterns::parse_args_pattern_list(p);
    } else {
        p.error_expected(&[SyntaxKind::L_PAREN]);
    }
    p.finish_node();
}
