//! Package, import and type declarations, class bodies and ordinary members

use super::*;
use crate::parser::parser::Checkpoint;
use crate::parser::resolver::MemberKind;
use crate::parser::token_set::{CLOSING_DELIMITERS, MODIFIERS, TokenSet};
use rowan::TextRange;

// =============================================================================
// Modifier legality
// =============================================================================

use crate::parser::syntax_kind::SyntaxKind::{
    ABSTRACT_KW, FINAL_KW, NATIVE_KW, PRIVATE_KW, PRIVILEGED_KW, PROTECTED_KW, PUBLIC_KW,
    STATIC_KW, STRICTFP_KW, SYNCHRONIZED_KW, TRANSIENT_KW, VOLATILE_KW,
};

pub(crate) const CLASS_MODIFIERS: TokenSet = TokenSet::new(&[
    PUBLIC_KW,
    PROTECTED_KW,
    PRIVATE_KW,
    ABSTRACT_KW,
    STATIC_KW,
    FINAL_KW,
    STRICTFP_KW,
]);
pub(crate) const INTERFACE_MODIFIERS: TokenSet = TokenSet::new(&[
    PUBLIC_KW,
    PROTECTED_KW,
    PRIVATE_KW,
    ABSTRACT_KW,
    STATIC_KW,
    STRICTFP_KW,
]);
pub(crate) const ENUM_MODIFIERS: TokenSet =
    TokenSet::new(&[PUBLIC_KW, PROTECTED_KW, PRIVATE_KW, STATIC_KW, STRICTFP_KW]);
pub(crate) const ASPECT_MODIFIERS: TokenSet = CLASS_MODIFIERS.with(PRIVILEGED_KW);
pub(crate) const METHOD_MODIFIERS: TokenSet = TokenSet::new(&[
    PUBLIC_KW,
    PROTECTED_KW,
    PRIVATE_KW,
    ABSTRACT_KW,
    STATIC_KW,
    FINAL_KW,
    SYNCHRONIZED_KW,
    NATIVE_KW,
    STRICTFP_KW,
]);
pub(crate) const FIELD_MODIFIERS: TokenSet = TokenSet::new(&[
    PUBLIC_KW,
    PROTECTED_KW,
    PRIVATE_KW,
    STATIC_KW,
    FINAL_KW,
    TRANSIENT_KW,
    VOLATILE_KW,
]);
pub(crate) const CONSTRUCTOR_MODIFIERS: TokenSet =
    TokenSet::new(&[PUBLIC_KW, PROTECTED_KW, PRIVATE_KW]);
pub(crate) const POINTCUT_MODIFIERS: TokenSet = TokenSet::new(&[
    PUBLIC_KW,
    PROTECTED_KW,
    PRIVATE_KW,
    ABSTRACT_KW,
    STATIC_KW,
    FINAL_KW,
]);
pub(crate) const ADVICE_MODIFIERS: TokenSet = TokenSet::new(&[STRICTFP_KW]);
pub(crate) const LOCAL_MODIFIERS: TokenSet = TokenSet::new(&[FINAL_KW]);
const INITIALIZER_MODIFIERS: TokenSet = TokenSet::new(&[STATIC_KW]);

/// Modifier keywords seen in a MODIFIER_LIST, in source order
#[derive(Debug, Default)]
pub(crate) struct Modifiers {
    items: Vec<(SyntaxKind, TextRange)>,
    annotations: usize,
}

impl Modifiers {
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty() && self.annotations == 0
    }

    pub(crate) fn contains(&self, kind: SyntaxKind) -> bool {
        self.items.iter().any(|(k, _)| *k == kind)
    }
}

/// Modifiers = (ModifierKeyword | Annotation)*
///
/// Always emits a MODIFIER_LIST node, possibly empty. Repeated keywords are
/// reported here; legality depends on what follows and is checked by the
/// declaration rule via [`check_modifiers`].
pub(crate) fn parse_modifiers(p: &mut Parser<'_>) -> Modifiers {
    let mut mods = Modifiers::default();
    p.start_node(SyntaxKind::MODIFIER_LIST);
    loop {
        if p.at_any(MODIFIERS) && is_modifier_here(p) {
            let kind = p.current();
            let range = p.current_range();
            if mods.contains(kind) {
                p.report(
                    ErrorCode::E0303,
                    format!("repeated modifier '{}'", kind.keyword_text()),
                    range,
                );
            }
            mods.items.push((kind, range));
            p.bump();
        } else if p.at(SyntaxKind::AT) && !p.nth_at(1, SyntaxKind::INTERFACE_KW) {
            parse_annotation(p);
            mods.annotations += 1;
        } else {
            break;
        }
    }
    p.finish_node();
    mods
}

/// `privileged` is only a modifier in front of an aspect; `synchronized (`
/// starts a statement.
fn is_modifier_here(p: &Parser<'_>) -> bool {
    match p.current() {
        PRIVILEGED_KW => {
            let next = p.nth(1);
            next == SyntaxKind::ASPECT_KW || next == SyntaxKind::AT || MODIFIERS.contains(next)
        }
        SYNCHRONIZED_KW => !p.nth_at(1, SyntaxKind::L_PAREN),
        _ => true,
    }
}

/// Report every modifier keyword not in `allowed`
pub(crate) fn check_modifiers(p: &mut Parser<'_>, mods: &Modifiers, allowed: TokenSet, what: &str) {
    for &(kind, range) in &mods.items {
        if !allowed.contains(kind) {
            p.report(
                ErrorCode::E0302,
                format!("modifier '{}' not allowed on {}", kind.keyword_text(), what),
                range,
            );
        }
    }
}

// =============================================================================
// Annotations
// =============================================================================

/// Annotation = '@' QualifiedName ('(' AnnotationArgs? ')')?
pub(crate) fn parse_annotation(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ANNOTATION);
    p.bump(); // @
    parse_qualified_name(p);
    if p.at(SyntaxKind::L_PAREN) {
        parse_annotation_args(p);
    }
    p.finish_node();
}

fn parse_annotation_args(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ANNOTATION_ARGS);
    let open = p.bump_range();
    if !p.at(SyntaxKind::R_PAREN) {
        if p.at_name() && p.nth_at(1, SyntaxKind::EQ) {
            loop {
                p.start_node(SyntaxKind::ELEMENT_VALUE_PAIR);
                parse_name(p);
                p.expect(SyntaxKind::EQ);
                parse_element_value(p);
                p.finish_node();
                if !p.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
        } else {
            parse_element_value(p);
        }
    }
    p.expect_closing(SyntaxKind::R_PAREN, open);
    p.finish_node();
}

/// ElementValue = Annotation | '{' (ElementValue (',' ElementValue)*)? ','? '}' | ConditionalExpression
pub(crate) fn parse_element_value(p: &mut Parser<'_>) {
    match p.current() {
        SyntaxKind::AT => parse_annotation(p),
        SyntaxKind::L_BRACE => {
            p.start_node(SyntaxKind::ELEMENT_VALUE_ARRAY);
            let open = p.bump_range();
            while !p.at(SyntaxKind::R_BRACE) && !p.at_end() {
                parse_element_value(p);
                if !p.eat(SyntaxKind::COMMA) {
                    break;
                }
            }
            p.expect_closing(SyntaxKind::R_BRACE, open);
            p.finish_node();
        }
        _ => {
            if !expressions::parse_conditional_expression(p) {
                p.error(
                    ErrorCode::E0401,
                    format!("expected an element value, found {}", p.found_description()),
                );
            }
        }
    }
}

// =============================================================================
// Package and imports
// =============================================================================

/// PackageDecl = Annotation* 'package' QualifiedName ';'
pub(crate) fn parse_package(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::PACKAGE_DECL);
    while p.at(SyntaxKind::AT) {
        parse_annotation(p);
    }
    p.expect(SyntaxKind::PACKAGE_KW);
    parse_qualified_name(p);
    p.expect_semicolon();
    p.finish_node();
}

/// ImportDecl = 'import' 'static'? QualifiedName ('.' '*')? ';'
pub(crate) fn parse_import(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::IMPORT_DECL);
    p.bump(); // import
    p.eat(SyntaxKind::STATIC_KW);
    parse_qualified_name(p);
    if p.at(SyntaxKind::DOT) && p.nth_at(1, SyntaxKind::STAR) {
        p.bump();
        p.bump();
    }
    p.expect_semicolon();
    p.finish_node();
}

// =============================================================================
// Type declarations
// =============================================================================

/// TypeDecl = ';' | Modifiers (ClassDecl | InterfaceDecl | EnumDecl | AnnotationTypeDecl | AspectDecl | ';')
pub(crate) fn parse_type_declaration(p: &mut Parser<'_>, context: ParseContext) {
    if p.at(SyntaxKind::SEMICOLON) {
        p.start_node(SyntaxKind::EMPTY_DECL);
        p.bump();
        p.finish_node();
        return;
    }
    let cp = p.checkpoint();
    let mods = parse_modifiers(p);
    if parse_type_declaration_rest(p, cp, &mods) {
        return;
    }
    p.start_node_at(cp, SyntaxKind::ERROR);
    let code = if p.at_any(CLOSING_DELIMITERS) && mods.is_empty() {
        ErrorCode::E0205
    } else {
        ErrorCode::E0304
    };
    p.error(
        code,
        format!(
            "expected {} {}, found {}",
            context.expected_description(),
            context.description(),
            p.found_description()
        ),
    );
    if mods.is_empty() {
        p.bump();
    }
    p.finish_node();
}

/// Dispatch on the keyword following already-parsed modifiers.
/// Returns false when no type declaration starts here.
pub(crate) fn parse_type_declaration_rest(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) -> bool {
    match p.current() {
        SyntaxKind::CLASS_KW => parse_class_decl(p, cp, mods),
        SyntaxKind::INTERFACE_KW => parse_interface_decl(p, cp, mods),
        SyntaxKind::ENUM_KW => parse_enum_decl(p, cp, mods),
        SyntaxKind::AT if p.nth_at(1, SyntaxKind::INTERFACE_KW) => {
            parse_annotation_type_decl(p, cp, mods)
        }
        SyntaxKind::ASPECT_KW if p.nth_at_name(1) => aspects::parse_aspect_decl(p, cp, mods),
        SyntaxKind::SEMICOLON if !mods.is_empty() => {
            p.start_node_at(cp, SyntaxKind::EMPTY_DECL);
            p.bump();
            p.finish_node();
        }
        _ => return false,
    }
    true
}

/// ClassDecl = 'class' Name TypeParameters? ('extends' Type)? ('implements' TypeList)? ClassBody
fn parse_class_decl(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::CLASS_DECL);
    check_modifiers(p, mods, CLASS_MODIFIERS, "a class");
    p.bump(); // class
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
    parse_class_body(p, SyntaxKind::CLASS_BODY, ParseContext::ClassBody);
    p.finish_node();
}

/// InterfaceDecl = 'interface' Name TypeParameters? ('extends' TypeList)? ClassBody
fn parse_interface_decl(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::INTERFACE_DECL);
    check_modifiers(p, mods, INTERFACE_MODIFIERS, "an interface");
    p.bump(); // interface
    parse_name(p);
    if p.at(SyntaxKind::LT) {
        types::parse_type_parameters(p);
    }
    if p.at(SyntaxKind::EXTENDS_KW) {
        p.start_node(SyntaxKind::EXTENDS_CLAUSE);
        p.bump();
        types::parse_type_list(p);
        p.finish_node();
    }
    parse_class_body(p, SyntaxKind::CLASS_BODY, ParseContext::ClassBody);
    p.finish_node();
}

/// EnumDecl = 'enum' Name ('implements' TypeList)? EnumBody
fn parse_enum_decl(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::ENUM_DECL);
    check_modifiers(p, mods, ENUM_MODIFIERS, "an enum");
    p.bump(); // enum
    parse_name(p);
    parse_opt_implements(p);
    parse_enum_body(p);
    p.finish_node();
}

/// AnnotationTypeDecl = '@' 'interface' Name ClassBody
fn parse_annotation_type_decl(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::ANNOTATION_TYPE_DECL);
    check_modifiers(p, mods, INTERFACE_MODIFIERS, "an annotation type");
    p.bump(); // @
    p.bump(); // interface
    parse_name(p);
    parse_class_body(p, SyntaxKind::CLASS_BODY, ParseContext::AnnotationBody);
    p.finish_node();
}

pub(crate) fn parse_opt_implements(p: &mut Parser<'_>) {
    if p.at(SyntaxKind::IMPLEMENTS_KW) {
        p.start_node(SyntaxKind::IMPLEMENTS_CLAUSE);
        p.bump();
        types::parse_type_list(p);
        p.finish_node();
    }
}

// =============================================================================
// Bodies
// =============================================================================

/// Body = '{' Member* '}'
///
/// Shared by classes, interfaces, annotation types, anonymous classes and aspects;
/// `context` selects the member forms and the recovery set.
pub(crate) fn parse_class_body(p: &mut Parser<'_>, kind: SyntaxKind, context: ParseContext) {
    p.start_node(kind);
    if !p.at(SyntaxKind::L_BRACE) {
        p.error(
            ErrorCode::E0306,
            format!("expected '{{' to start the body, found {}", p.found_description()),
        );
        p.finish_node();
        return;
    }
    let open = p.bump_range();
    parse_members(p, context);
    p.expect_closing(SyntaxKind::R_BRACE, open);
    p.finish_node();
}

/// Member loop; each member boundary is a recovery and cancellation point
///
/// After a single stray token the loop resumes right away when a member
/// starts at the next token, so that member is not skipped with it.
fn parse_members(p: &mut Parser<'_>, context: ParseContext) {
    while !p.at(SyntaxKind::R_BRACE) && !p.at_end() {
        if p.check_cancelled() {
            break;
        }
        let start = p.pos();
        let mut stray = !parse_member(p, context);
        if p.pos() == start {
            stray = true;
            p.err_and_bump(
                ErrorCode::E0304,
                format!(
                    "expected {} {}, found {}",
                    context.expected_description(),
                    context.description(),
                    p.found_description()
                ),
            );
        }
        if stray && resolver::classify_member(p, context) != MemberKind::Unknown {
            p.resume();
        }
        p.recover(context);
    }
}

/// EnumBody = '{' (EnumConstant (',' EnumConstant)* ','?)? (';' Member*)? '}'
fn parse_enum_body(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ENUM_BODY);
    if !p.at(SyntaxKind::L_BRACE) {
        p.error(
            ErrorCode::E0306,
            format!("expected '{{' to start the enum body, found {}", p.found_description()),
        );
        p.finish_node();
        return;
    }
    let open = p.bump_range();
    while p.at_name() || p.at(SyntaxKind::AT) {
        parse_enum_constant(p);
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    if p.eat(SyntaxKind::SEMICOLON) {
        parse_members(p, ParseContext::EnumBody);
    } else if !p.at(SyntaxKind::R_BRACE) {
        p.error_expected(&[SyntaxKind::COMMA, SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE]);
        parse_members(p, ParseContext::EnumBody);
    }
    p.expect_closing(SyntaxKind::R_BRACE, open);
    p.finish_node();
}

/// EnumConstant = Annotation* Name Arguments? ClassBody?
fn parse_enum_constant(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ENUM_CONSTANT);
    while p.at(SyntaxKind::AT) {
        parse_annotation(p);
    }
    parse_name(p);
    if p.at(SyntaxKind::L_PAREN) {
        expressions::parse_argument_list(p);
    }
    if p.at(SyntaxKind::L_BRACE) {
        parse_class_body(p, SyntaxKind::CLASS_BODY, ParseContext::ClassBody);
    }
    p.finish_node();
}

// =============================================================================
// Members
// =============================================================================

/// Member dispatch; the resolver decides which form follows the modifiers.
/// Returns false when no member form matched.
pub(crate) fn parse_member(p: &mut Parser<'_>, context: ParseContext) -> bool {
    p.nested(true, |p| member(p, context))
}

fn member(p: &mut Parser<'_>, context: ParseContext) -> bool {
    let kind = resolver::classify_member(p, context);
    if kind == MemberKind::Empty {
        p.start_node(SyntaxKind::EMPTY_DECL);
        p.bump();
        p.finish_node();
        return true;
    }

    let cp = p.checkpoint();
    let mods = parse_modifiers(p);
    match kind {
        MemberKind::Empty => {}
        MemberKind::Initializer => {
            p.start_node_at(cp, SyntaxKind::INITIALIZER_BLOCK);
            check_modifiers(p, &mods, INITIALIZER_MODIFIERS, "an initializer");
            statements::parse_block(p);
            p.finish_node();
        }
        MemberKind::NestedType => {
            parse_type_declaration_rest(p, cp, &mods);
        }
        MemberKind::Method => parse_method(p, cp, &mods),
        MemberKind::Constructor => parse_constructor(p, cp, &mods),
        MemberKind::Field => parse_field(p, cp, &mods),
        MemberKind::AnnotationMethod => parse_annotation_method(p, cp, &mods),
        MemberKind::Pointcut => aspects::parse_pointcut_decl(p, cp, &mods),
        MemberKind::Declare => aspects::parse_declare(p, cp, &mods),
        MemberKind::Advice => aspects::parse_advice(p, cp, &mods),
        MemberKind::InterTypeMethod => aspects::parse_inter_type_method(p, cp, &mods),
        MemberKind::InterTypeField => aspects::parse_inter_type_field(p, cp, &mods),
        MemberKind::InterTypeConstructor => aspects::parse_inter_type_constructor(p, cp, &mods),
        MemberKind::Unknown => {
            p.start_node_at(cp, SyntaxKind::ERROR);
            let err = p
                .error_builder(ErrorCode::E0305)
                .kind(crate::parser::errors::ErrorKind::AmbiguityExhausted)
                .message(format!(
                    "expected {} {}, found {}",
                    context.expected_description(),
                    context.description(),
                    p.found_description()
                ))
                .build();
            p.push_error(err, true);
            if mods.is_empty() {
                p.bump();
            }
            p.finish_node();
            return false;
        }
    }
    true
}

/// MethodDecl = Modifiers TypeParameters? ResultType Name FormalParameters Dims? Throws? (Block | ';')
fn parse_method(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::METHOD_DECL);
    check_modifiers(p, mods, METHOD_MODIFIERS, "a method");
    if p.at(SyntaxKind::LT) {
        types::parse_type_parameters(p);
    }
    types::parse_result_type(p);
    parse_name(p);
    parse_formal_parameters(p);
    types::parse_opt_dims(p);
    parse_opt_throws(p);
    parse_method_body(p);
    p.finish_node();
}

/// ConstructorDecl = Modifiers TypeParameters? Name FormalParameters Throws? Block
fn parse_constructor(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::CONSTRUCTOR_DECL);
    check_modifiers(p, mods, CONSTRUCTOR_MODIFIERS, "a constructor");
    if p.at(SyntaxKind::LT) {
        types::parse_type_parameters(p);
    }
    parse_name(p);
    parse_formal_parameters(p);
    parse_opt_throws(p);
    expect_block_body(p);
    p.finish_node();
}

/// FieldDecl = Modifiers Type VariableDeclarators ';'
fn parse_field(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::FIELD_DECL);
    check_modifiers(p, mods, FIELD_MODIFIERS, "a field");
    types::expect_type(p);
    parse_variable_declarators(p);
    p.expect_semicolon();
    p.finish_node();
}

/// AnnotationMethod = Modifiers Type Name '(' ')' Dims? ('default' ElementValue)? ';'
fn parse_annotation_method(p: &mut Parser<'_>, cp: Checkpoint, mods: &Modifiers) {
    p.start_node_at(cp, SyntaxKind::ANNOTATION_METHOD);
    check_modifiers(p, mods, INTERFACE_MODIFIERS.union(FIELD_MODIFIERS), "an annotation element");
    types::expect_type(p);
    parse_name(p);
    let open = p.current_range();
    if p.expect(SyntaxKind::L_PAREN) {
        p.expect_closing(SyntaxKind::R_PAREN, open);
    }
    types::parse_opt_dims(p);
    if p.at(SyntaxKind::DEFAULT_KW) {
        p.start_node(SyntaxKind::DEFAULT_VALUE);
        p.bump();
        parse_element_value(p);
        p.finish_node();
    }
    p.expect_semicolon();
    p.finish_node();
}

/// Block or `;` for abstract and native methods
pub(crate) fn parse_method_body(p: &mut Parser<'_>) {
    if p.at(SyntaxKind::L_BRACE) {
        statements::parse_block(p);
    } else if !p.eat(SyntaxKind::SEMICOLON) {
        p.error(
            ErrorCode::E0306,
            format!("expected a method body or ';', found {}", p.found_description()),
        );
    }
}

/// A mandatory block body (constructors, advice)
pub(crate) fn expect_block_body(p: &mut Parser<'_>) {
    if p.at(SyntaxKind::L_BRACE) {
        statements::parse_block(p);
    } else {
        p.error(
            ErrorCode::E0306,
            format!("expected a body, found {}", p.found_description()),
        );
    }
}

/// Throws = 'throws' TypeList
pub(crate) fn parse_opt_throws(p: &mut Parser<'_>) {
    if p.at(SyntaxKind::THROWS_KW) {
        p.start_node(SyntaxKind::THROWS_CLAUSE);
        p.bump();
        types::parse_type_list(p);
        p.finish_node();
    }
}

// =============================================================================
// Parameters and declarators
// =============================================================================

/// FormalParameters = '(' (FormalParameter (',' FormalParameter)*)? ')'
pub(crate) fn parse_formal_parameters(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::FORMAL_PARAMETERS);
    if !p.at(SyntaxKind::L_PAREN) {
        p.error_expected(&[SyntaxKind::L_PAREN]);
        p.finish_node();
        return;
    }
    let open = p.bump_range();
    if !p.at(SyntaxKind::R_PAREN) {
        loop {
            parse_formal_parameter(p);
            if !p.eat(SyntaxKind::COMMA) {
                break;
            }
        }
    }
    p.expect_closing(SyntaxKind::R_PAREN, open);
    p.finish_node();
}

/// FormalParameter = Modifiers Type '...'? Name Dims?
pub(crate) fn parse_formal_parameter(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::FORMAL_PARAMETER);
    let mods = parse_modifiers(p);
    check_modifiers(p, &mods, LOCAL_MODIFIERS, "a parameter");
    types::expect_type(p);
    p.eat(SyntaxKind::ELLIPSIS);
    parse_name(p);
    types::parse_opt_dims(p);
    p.finish_node();
}

/// VariableDeclarators = VariableDeclarator (',' VariableDeclarator)*
pub(crate) fn parse_variable_declarators(p: &mut Parser<'_>) {
    loop {
        parse_variable_declarator(p);
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
}

/// VariableDeclarator = Name Dims? ('=' VariableInitializer)?
fn parse_variable_declarator(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::VARIABLE_DECLARATOR);
    parse_name(p);
    types::parse_opt_dims(p);
    if p.eat(SyntaxKind::EQ) {
        parse_variable_initializer(p);
    }
    p.finish_node();
}

/// VariableInitializer = ArrayInitializer | Expression
pub(crate) fn parse_variable_initializer(p: &mut Parser<'_>) {
    if p.at(SyntaxKind::L_BRACE) {
        parse_array_initializer(p);
    } else {
        expressions::expect_expression(p);
    }
}

/// ArrayInitializer = '{' (VariableInitializer (',' VariableInitializer)*)? ','? '}'
pub(crate) fn parse_array_initializer(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ARRAY_INITIALIZER);
    let open = p.bump_range();
    while !p.at(SyntaxKind::R_BRACE) && !p.at_end() {
        parse_variable_initializer(p);
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    p.expect_closing(SyntaxKind::R_BRACE, open);
    p.finish_node();
}
