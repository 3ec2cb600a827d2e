//! Aspect declarations and the aspect-only member forms: advice, pointcut
//! declarations, inter-type declarations and `declare` statements

use super::declarations::{
    ADVICE_MODIFIERS, ASPECT_MODIFIERS, CONSTRUCTOR_MODIFIERS, FIELD_MODIFIERS, METHOD_MODIFIERS,
    Modifiers, POINTCUT_MODIFIERS, check_modifiers, expect_block_body, parse_annotation,
    parse_class_body, parse_formal_parameter, parse_formal_parameters, parse_method_body,
    parse_opt_implements, parse_opt_throws, parse_variable_initializer,
};
use super::*;
use crate::parser::parser::Checkpoint;
use crate::parser::token_set::TokenSet;

/// AspectDecl = 'aspect' Name TypeParameters? ('extends' Type)? ('implements' TypeList)? PerClause? AspectBody
pub(crate) fn parse_aspect_decl(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::ASPECT_DECL);
    check_modifiers(p, mods, ASPECT_MODIFIERS, "an aspect");
    p.bump(); // aspect
    parse_name(p);
    if p.at(SyntaxKind::LT) {
        types::parse_type_parameters(p);
    }
    if p.at(SyntaxKind::EXTENDS_KW) {
        p.start_node(SyntaxKind::EXTENDS_CLAUSE);
        p.bump();
        types::expect_type(p);
        p.finish_node();
    }
    parse_opt_implements(p);
    if at_per_clause(p) {
        parse_per_clause(p);
    }
    parse_class_body(p, SyntaxKind::ASPECT_BODY, ParseContext::AspectBody);
    p.finish_node();
}

fn at_per_clause(p: &Parser<'_>) -> bool {
    matches!(
        p.current(),
        SyntaxKind::PERTHIS_KW
            | SyntaxKind::PERTARGET_KW
            | SyntaxKind::PERCFLOW_KW
            | SyntaxKind::PERCFLOWBELOW_KW
            | SyntaxKind::PERTYPEWITHIN_KW
            | SyntaxKind::ISSINGLETON_KW
    )
}

/// PerClause = ('perthis' | 'pertarget' | 'percflow' | 'percflowbelow') '(' Pointcut ')'
///           | 'pertypewithin' '(' TypePattern ')'
///           | 'issingleton' ('(' ')')?
fn parse_per_clause(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::PER_CLAUSE);
    let keyword = p.current();
    p.bump();
    if keyword == SyntaxKind::ISSINGLETON_KW {
        if p.at(SyntaxKind::L_PAREN) {
            let open = p.bump_range();
            p.expect_closing(SyntaxKind::R_PAREN, open);
        }
        p.finish_node();
        return;
    }
    if !p.at(SyntaxKind::L_PAREN) {
        p.error(
            ErrorCode::E0603,
            format!(
                "expected '(' after '{}', found {}",
                keyword.keyword_text(),
                p.found_description()
            ),
        );
        p.finish_node();
        return;
    }
    let open = p.bump_range();
    if keyword == SyntaxKind::PERTYPEWITHIN_KW {
        patterns::expect_type_pattern(p);
    } else {
        pointcuts::expect_pointcut_expression(p);
    }
    p.expect_closing(SyntaxKind::R_PAREN, open);
    p.finish_node();
}

// =============================================================================
// Advice
// =============================================================================

/// AdviceDecl = Modifiers AdviceSpec Throws? ':' Pointcut Block
pub(crate) fn parse_advice(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::ADVICE_DECL);
    check_modifiers(p, mods, ADVICE_MODIFIERS, "advice");
    parse_advice_spec(p);
    parse_opt_throws(p);
    if p.eat(SyntaxKind::COLON) {
        pointcuts::expect_pointcut_expression(p);
    } else {
        p.error(
            ErrorCode::E0602,
            format!("expected ':' before the advice pointcut, found {}", p.found_description()),
        );
    }
    expect_block_body(p);
    p.finish_node();
}

/// AdviceSpec = 'before' FormalParameters
///            | 'after' FormalParameters (AfterReturning | AfterThrowing)?
///            | ResultType 'around' FormalParameters
fn parse_advice_spec(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ADVICE_SPEC);
    match p.current() {
        SyntaxKind::BEFORE_KW => {
            p.bump();
            parse_formal_parameters(p);
        }
        SyntaxKind::AFTER_KW => {
            p.bump();
            parse_formal_parameters(p);
            match p.current() {
                SyntaxKind::RETURNING_KW => parse_after_binding(p, SyntaxKind::ADVICE_RETURNING),
                SyntaxKind::THROWING_KW => parse_after_binding(p, SyntaxKind::ADVICE_THROWING),
                kind if kind.is_name() => p.error(
                    ErrorCode::E0604,
                    format!(
                        "expected 'returning', 'throwing' or ':' after the advice parameters, found {}",
                        p.found_description()
                    ),
                ),
                _ => {}
            }
        }
        _ => {
            types::parse_result_type(p);
            if !p.eat(SyntaxKind::AROUND_KW) {
                p.error(
                    ErrorCode::E0604,
                    format!("expected 'around', found {}", p.found_description()),
                );
            }
            parse_formal_parameters(p);
        }
    }
    p.finish_node();
}

/// ('returning' | 'throwing') ('(' FormalParameter? ')')?
fn parse_after_binding(p: &mut Parser<'_>, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump();
    if p.at(SyntaxKind::L_PAREN) {
        let open = p.bump_range();
        if !p.at(SyntaxKind::R_PAREN) {
            parse_formal_parameter(p);
        }
        p.expect_closing(SyntaxKind::R_PAREN, open);
    }
    p.finish_node();
}

// =============================================================================
// Pointcut declarations
// =============================================================================

/// PointcutDecl = Modifiers 'pointcut' Name FormalParameters (':' Pointcut)? ';'
///
/// The expression is omitted for abstract pointcuts.
pub(crate) fn parse_pointcut_decl(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::POINTCUT_DECL);
    check_modifiers(p, mods, POINTCUT_MODIFIERS, "a pointcut");
    p.bump(); // pointcut
    parse_name(p);
    parse_formal_parameters(p);
    if p.eat(SyntaxKind::COLON) {
        pointcuts::expect_pointcut_expression(p);
    } else if !p.at(SyntaxKind::SEMICOLON) {
        p.error(
            ErrorCode::E0602,
            format!("expected ':' before the pointcut expression, found {}", p.found_description()),
        );
    }
    p.expect_semicolon();
    p.finish_node();
}

// =============================================================================
// Inter-type declarations
// =============================================================================

/// InterTypeMethod = Modifiers TypeParameters? ResultType Target '.' Name FormalParameters Dims? Throws? (Block | ';')
pub(crate) fn parse_inter_type_method(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::INTER_TYPE_METHOD);
    check_modifiers(p, mods, METHOD_MODIFIERS, "an inter-type method");
    if p.at(SyntaxKind::LT) {
        types::parse_type_parameters(p);
    }
    types::parse_result_type(p);
    parse_inter_type_target(p);
    p.expect(SyntaxKind::DOT);
    parse_name(p);
    parse_formal_parameters(p);
    types::parse_opt_dims(p);
    parse_opt_throws(p);
    parse_method_body(p);
    p.finish_node();
}

/// InterTypeField = Modifiers Type Target '.' Name ('=' VariableInitializer)? ';'
pub(crate) fn parse_inter_type_field(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::INTER_TYPE_FIELD);
    check_modifiers(p, mods, FIELD_MODIFIERS, "an inter-type field");
    types::expect_type(p);
    parse_inter_type_target(p);
    p.expect(SyntaxKind::DOT);
    parse_name(p);
    if p.eat(SyntaxKind::EQ) {
        parse_variable_initializer(p);
    }
    p.expect_semicolon();
    p.finish_node();
}

/// InterTypeConstructor = Modifiers TypeParameters? Target '.' 'new' FormalParameters Throws? Block
pub(crate) fn parse_inter_type_constructor(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::INTER_TYPE_CONSTRUCTOR);
    check_modifiers(p, mods, CONSTRUCTOR_MODIFIERS, "an inter-type constructor");
    if p.at(SyntaxKind::LT) {
        types::parse_type_parameters(p);
    }
    parse_inter_type_target(p);
    p.expect(SyntaxKind::DOT);
    p.expect(SyntaxKind::NEW_KW);
    parse_formal_parameters(p);
    parse_opt_throws(p);
    expect_block_body(p);
    p.finish_node();
}

/// The target type of an inter-type declaration: every dotted segment except
/// the final `.name` / `.new`.
fn parse_inter_type_target(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::INTER_TYPE_TARGET);
    p.start_node(SyntaxKind::CLASS_TYPE);
    expect_name_token(p);
    if p.at(SyntaxKind::LT) {
        types::parse_type_arguments(p);
    }
    while p.at(SyntaxKind::DOT)
        && p.nth_at_name(1)
        && !matches!(
            p.nth(2),
            SyntaxKind::L_PAREN | SyntaxKind::EQ | SyntaxKind::SEMICOLON
        )
    {
        p.bump();
        p.bump();
        if p.at(SyntaxKind::LT) {
            types::parse_type_arguments(p);
        }
    }
    p.finish_node();
    p.finish_node();
}

// =============================================================================
// Declare forms
// =============================================================================

/// DeclareDecl = 'declare' ( 'parents' ':' TypePattern ('extends' | 'implements') TypeList
///                         | ('warning' | 'error') ':' Pointcut ':' Expression
///                         | 'soft' ':' TypePattern ':' Pointcut
///                         | 'precedence' ':' TypePatternList
///                         | '@' Form ':' Pattern ':' Annotation ) ';'
pub(crate) fn parse_declare(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    let kind = match p.nth(1) {
        SyntaxKind::PARENTS_KW => SyntaxKind::DECLARE_PARENTS,
        SyntaxKind::WARNING_KW => SyntaxKind::DECLARE_WARNING,
        SyntaxKind::ERROR_KW => SyntaxKind::DECLARE_ERROR,
        SyntaxKind::SOFT_KW => SyntaxKind::DECLARE_SOFT,
        SyntaxKind::PRECEDENCE_KW => SyntaxKind::DECLARE_PRECEDENCE,
        _ => SyntaxKind::DECLARE_ANNOTATION,
    };
    p.start_node_at(cp, kind);
    check_modifiers(p, mods, TokenSet::EMPTY, "a declare statement");
    p.bump(); // declare

    match kind {
        SyntaxKind::DECLARE_PARENTS => {
            p.bump();
            p.expect(SyntaxKind::COLON);
            patterns::expect_type_pattern(p);
            if p.at(SyntaxKind::EXTENDS_KW) || p.at(SyntaxKind::IMPLEMENTS_KW) {
                p.bump();
                types::parse_type_list(p);
            } else {
                p.error_expected(&[SyntaxKind::EXTENDS_KW, SyntaxKind::IMPLEMENTS_KW]);
            }
        }
        SyntaxKind::DECLARE_WARNING | SyntaxKind::DECLARE_ERROR => {
            p.bump();
            p.expect(SyntaxKind::COLON);
            pointcuts::expect_pointcut_expression(p);
            p.expect(SyntaxKind::COLON);
            expressions::expect_expression(p);
        }
        SyntaxKind::DECLARE_SOFT => {
            p.bump();
            p.expect(SyntaxKind::COLON);
            patterns::expect_type_pattern(p);
            p.expect(SyntaxKind::COLON);
            pointcuts::expect_pointcut_expression(p);
        }
        SyntaxKind::DECLARE_PRECEDENCE => {
            p.bump();
            p.expect(SyntaxKind::COLON);
            patterns::parse_type_pattern_list(p);
        }
        _ => parse_declare_annotation(p),
    }
    p.expect_semicolon();
    p.finish_node();
}

/// '@' ('type' | 'method' | 'constructor' | 'field') ':' Pattern ':' Annotation
fn parse_declare_annotation(p: &mut Parser<'_>) {
    if !p.eat(SyntaxKind::AT) {
        p.error(
            ErrorCode::E0704,
            format!(
                "expected 'parents', 'warning', 'error', 'soft', 'precedence' or '@' after 'declare', found {}",
                p.found_description()
            ),
        );
        return;
    }
    let form = p.nth_text(0).to_string();
    let form_range = p.current_range();
    if !expect_name_token(p) {
        return;
    }
    p.expect(SyntaxKind::COLON);
    match form.as_str() {
        "type" => {
            patterns::expect_type_pattern(p);
        }
        "method" => patterns::parse_method_pattern(p),
        "constructor" => patterns::parse_constructor_pattern(p),
        "field" => patterns::parse_field_pattern(p),
        other => {
            p.report(
                ErrorCode::E0704,
                format!(
                    "unknown 'declare @{}' form, expected @type, @method, @constructor or @field",
                    other
                ),
                form_range,
            );
            patterns::expect_type_pattern(p);
        }
    }
    p.expect(SyntaxKind::COLON);
    if p.at(SyntaxKind::AT) {
        parse_annotation(p);
    } else {
        p.error_expected(&[SyntaxKind::AT]);
    }
}
