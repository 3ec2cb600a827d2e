//! Ambiguity resolution
//!
//! The grammar is not LL(k) for any fixed k at a handful of decision points.
//! Each of them is answered here, either by a bounded token scan or by a
//! speculative parse that is rolled back before the real parse commits:
//!
//! - cast vs. parenthesized expression ([`is_cast`])
//! - local variable declaration vs. expression statement ([`is_local_var_decl`])
//! - enhanced vs. classic `for` header ([`is_foreach`])
//! - the kind of a class or aspect body member ([`classify_member`])
//! - method vs. constructor pattern ([`at_constructor_pattern`])
//! - class literals after primitive types and array brackets
//!
//! Speculative answers are memoized per parse by decision and token position.

use super::errors::ParseContext;
use super::grammar::{declarations, patterns, types};
use super::parser::{Parser, Speculation};
use super::syntax_kind::SyntaxKind;
use super::token_set::{CAST_FOLLOW, MODIFIERS, PRIMITIVE_TYPES};
use tracing::trace;

// =============================================================================
// Members
// =============================================================================

/// What a member declaration turns out to be once its modifiers are skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MemberKind {
    Empty,
    Initializer,
    NestedType,
    Method,
    Constructor,
    Field,
    AnnotationMethod,
    Pointcut,
    Declare,
    Advice,
    InterTypeMethod,
    InterTypeField,
    InterTypeConstructor,
    Unknown,
}

/// Classify the member starting at the cursor without consuming anything
pub(crate) fn classify_member(p: &mut Parser<'_>, context: ParseContext) -> MemberKind {
    if p.at(SyntaxKind::SEMICOLON) {
        return MemberKind::Empty;
    }
    let pos = p.pos();
    let kind = p.lookahead(|p| classify(p, context));
    trace!(?kind, pos, ?context, "classified member");
    kind
}

fn classify(p: &mut Parser<'_>, context: ParseContext) -> MemberKind {
    let in_aspect = context == ParseContext::AspectBody;
    declarations::parse_modifiers(p);

    match p.current() {
        SyntaxKind::L_BRACE => return MemberKind::Initializer,
        SyntaxKind::CLASS_KW | SyntaxKind::INTERFACE_KW | SyntaxKind::ENUM_KW => {
            return MemberKind::NestedType;
        }
        SyntaxKind::AT if p.nth_at(1, SyntaxKind::INTERFACE_KW) => return MemberKind::NestedType,
        SyntaxKind::ASPECT_KW if p.nth_at_name(1) => return MemberKind::NestedType,
        SyntaxKind::POINTCUT_KW if p.nth_at_name(1) && context != ParseContext::AnnotationBody => {
            return MemberKind::Pointcut;
        }
        SyntaxKind::DECLARE_KW if in_aspect && at_declare_form(p) => return MemberKind::Declare,
        SyntaxKind::BEFORE_KW | SyntaxKind::AFTER_KW
            if in_aspect && p.nth_at(1, SyntaxKind::L_PAREN) =>
        {
            return MemberKind::Advice;
        }
        _ => {}
    }

    if p.at(SyntaxKind::LT) {
        types::parse_type_parameters(p);
    }
    if p.at_name() && p.nth_at(1, SyntaxKind::L_PAREN) {
        return MemberKind::Constructor;
    }
    if in_aspect && p.at_name() && at_inter_type_constructor(p) {
        return MemberKind::InterTypeConstructor;
    }

    if !types::parse_result_type(p) {
        return MemberKind::Unknown;
    }
    if in_aspect && p.at(SyntaxKind::AROUND_KW) && p.nth_at(1, SyntaxKind::L_PAREN) {
        return MemberKind::Advice;
    }
    if !p.at_name() {
        return MemberKind::Unknown;
    }
    match p.nth(1) {
        SyntaxKind::L_PAREN if context == ParseContext::AnnotationBody => {
            MemberKind::AnnotationMethod
        }
        SyntaxKind::L_PAREN => MemberKind::Method,
        SyntaxKind::EQ | SyntaxKind::SEMICOLON | SyntaxKind::COMMA | SyntaxKind::L_BRACKET => {
            MemberKind::Field
        }
        SyntaxKind::DOT | SyntaxKind::LT if in_aspect => {
            types::parse_class_type(p);
            match p.current() {
                SyntaxKind::L_PAREN => MemberKind::InterTypeMethod,
                SyntaxKind::EQ | SyntaxKind::SEMICOLON => MemberKind::InterTypeField,
                _ => MemberKind::Unknown,
            }
        }
        _ => MemberKind::Unknown,
    }
}

/// `declare parents:`, `declare warning:`, ..., or `declare @form:`
fn at_declare_form(p: &Parser<'_>) -> bool {
    match p.nth(1) {
        SyntaxKind::PARENTS_KW
        | SyntaxKind::WARNING_KW
        | SyntaxKind::ERROR_KW
        | SyntaxKind::SOFT_KW
        | SyntaxKind::PRECEDENCE_KW => p.nth_at(2, SyntaxKind::COLON),
        SyntaxKind::AT => true,
        _ => false,
    }
}

/// `Target.new(`, where the target may be qualified and generic
fn at_inter_type_constructor(p: &mut Parser<'_>) -> bool {
    p.lookahead(|p| {
        types::parse_class_type(p);
        p.at(SyntaxKind::DOT) && p.nth_at(1, SyntaxKind::NEW_KW)
    })
}

// =============================================================================
// Statements
// =============================================================================

/// `(Type) operand` rather than `(expression)`
///
/// A cast to a primitive type accepts any unary operand. A cast to a
/// reference type only accepts operands that cannot continue a binary
/// expression, so `(a) - b` stays a subtraction.
pub(crate) fn is_cast(p: &mut Parser<'_>) -> bool {
    p.speculate(Speculation::Cast, |p| {
        p.bump(); // (
        let primitive = p.at_any(PRIMITIVE_TYPES) && !p.nth_at(1, SyntaxKind::L_BRACKET);
        if !types::parse_type(p) {
            return false;
        }
        while p.eat(SyntaxKind::AMP) {
            if !types::parse_type(p) {
                return false;
            }
        }
        if !p.eat(SyntaxKind::R_PAREN) {
            return false;
        }
        if primitive {
            return !matches!(
                p.current(),
                SyntaxKind::EOF
                    | SyntaxKind::SEMICOLON
                    | SyntaxKind::R_PAREN
                    | SyntaxKind::COMMA
                    | SyntaxKind::DOT
            );
        }
        p.at_any(CAST_FOLLOW) || p.at_name()
    })
}

/// `Modifiers Type Name` begins the statement
pub(crate) fn is_local_var_decl(p: &mut Parser<'_>) -> bool {
    p.speculate(Speculation::LocalVarDecl, |p| {
        declarations::parse_modifiers(p);
        types::parse_type(p) && p.at_name()
    })
}

/// `( Modifiers Type Name Dims? :` after `for`
pub(crate) fn is_foreach(p: &mut Parser<'_>) -> bool {
    p.speculate(Speculation::ForEach, |p| {
        p.bump(); // (
        declarations::parse_modifiers(p);
        if !types::parse_type(p) || !p.at_name() {
            return false;
        }
        p.bump();
        types::parse_opt_dims(p);
        p.at(SyntaxKind::COLON)
    })
}

/// A class, interface, enum, annotation type or aspect declared inside a block
pub(crate) fn at_local_type_decl(p: &mut Parser<'_>) -> bool {
    fn at_keyword(p: &Parser<'_>) -> bool {
        match p.current() {
            SyntaxKind::CLASS_KW | SyntaxKind::INTERFACE_KW | SyntaxKind::ENUM_KW => true,
            SyntaxKind::AT => p.nth_at(1, SyntaxKind::INTERFACE_KW),
            SyntaxKind::ASPECT_KW => p.nth_at_name(1),
            _ => false,
        }
    }
    if at_keyword(p) {
        return true;
    }
    if !p.at_any(MODIFIERS) && !p.at(SyntaxKind::AT) {
        return false;
    }
    p.lookahead(|p| {
        declarations::parse_modifiers(p);
        at_keyword(p)
    })
}

// =============================================================================
// Compilation unit
// =============================================================================

/// A package declaration, possibly annotated, starts the unit
pub(crate) fn at_package_decl(p: &mut Parser<'_>) -> bool {
    if p.at(SyntaxKind::PACKAGE_KW) {
        return true;
    }
    if !p.at(SyntaxKind::AT) || p.nth_at(1, SyntaxKind::INTERFACE_KW) {
        return false;
    }
    p.lookahead(|p| {
        while p.at(SyntaxKind::AT) && !p.nth_at(1, SyntaxKind::INTERFACE_KW) {
            declarations::parse_annotation(p);
        }
        p.at(SyntaxKind::PACKAGE_KW)
    })
}

// =============================================================================
// Patterns and primaries
// =============================================================================

/// Inside `call(...)`, `execution(...)` or `withincode(...)`: the member
/// pattern names a constructor iff `new` follows its declaring type.
///
/// The declaring type is parsed for real and rolled back, so a
/// parenthesized disjunction of any length is looked through.
pub(crate) fn at_constructor_pattern(p: &mut Parser<'_>) -> bool {
    if p.at(SyntaxKind::NEW_KW) {
        return true;
    }
    p.lookahead(patterns::at_new_after_declaring_type)
}

/// `int.class`, `int[].class`, `void.class`
pub(crate) fn at_primitive_class_literal(p: &Parser<'_>) -> bool {
    let mut i = 1;
    while p.nth_at(i, SyntaxKind::L_BRACKET) && p.nth_at(i + 1, SyntaxKind::R_BRACKET) {
        i += 2;
    }
    p.nth_at(i, SyntaxKind::DOT) && p.nth_at(i + 1, SyntaxKind::CLASS_KW)
}

/// `[][].class` after a name
pub(crate) fn at_array_class_literal(p: &Parser<'_>) -> bool {
    let mut i = 0;
    while p.nth_at(i, SyntaxKind::L_BRACKET) && p.nth_at(i + 1, SyntaxKind::R_BRACKET) {
        i += 2;
    }
    i > 0 && p.nth_at(i, SyntaxKind::DOT) && p.nth_at(i + 1, SyntaxKind::CLASS_KW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;
    use crate::parser::parser::ParseConfig;
    use crate::parser::token_source::TokenStream;

    fn with_parser<T>(text: &str, f: impl FnOnce(&mut Parser<'_>) -> T) -> T {
        let mut stream = TokenStream::new(tokenize(text)).unwrap();
        let config = ParseConfig::default();
        let mut p = Parser::new(&mut stream, &config);
        let result = f(&mut p);
        assert_eq!(p.pos(), 0, "resolver must not consume tokens");
        result
    }

    #[test]
    fn test_classify_class_members() {
        let cases = [
            ("int x;", MemberKind::Field),
            ("int[] xs = {};", MemberKind::Field),
            ("public void run() {}", MemberKind::Method),
            ("<T> T id(T t) { return t; }", MemberKind::Method),
            ("Foo() {}", MemberKind::Constructor),
            ("static {}", MemberKind::Initializer),
            ("class Inner {}", MemberKind::NestedType),
            ("pointcut pc(): call(* *(..));", MemberKind::Pointcut),
            ("before() : pc() {}", MemberKind::Constructor),
        ];
        for (text, expected) in cases {
            let kind = with_parser(text, |p| classify_member(p, ParseContext::ClassBody));
            assert_eq!(kind, expected, "{text}");
        }
    }

    #[test]
    fn test_classify_aspect_members() {
        let cases = [
            ("before(): pc() {}", MemberKind::Advice),
            ("after() returning: pc() {}", MemberKind::Advice),
            ("Object around(): pc() { return proceed(); }", MemberKind::Advice),
            ("declare parents: Foo implements Bar;", MemberKind::Declare),
            ("declare @type: Foo: @Bar;", MemberKind::Declare),
            ("public int Foo.count = 0;", MemberKind::InterTypeField),
            ("public void com.x.Foo.run() {}", MemberKind::InterTypeMethod),
            ("public Foo.new(int x) {}", MemberKind::InterTypeConstructor),
            ("int x;", MemberKind::Field),
            ("privileged aspect Inner {}", MemberKind::NestedType),
        ];
        for (text, expected) in cases {
            let kind = with_parser(text, |p| classify_member(p, ParseContext::AspectBody));
            assert_eq!(kind, expected, "{text}");
        }
    }

    #[test]
    fn test_inter_type_forms_outside_aspect() {
        let kind = with_parser("int Foo.count;", |p| classify_member(p, ParseContext::ClassBody));
        assert_eq!(kind, MemberKind::Unknown);
    }

    #[test]
    fn test_cast_decisions() {
        assert!(with_parser("(int) -x", is_cast));
        assert!(with_parser("(String) o", is_cast));
        assert!(with_parser("(List<String>) o", is_cast));
        assert!(!with_parser("(a) - b", is_cast));
        assert!(!with_parser("(a + b)", is_cast));
        assert!(!with_parser("(a < b)", is_cast));
    }

    #[test]
    fn test_constructor_pattern_scan() {
        assert!(with_parser("Foo.new(..))", at_constructor_pattern));
        assert!(with_parser("new(..))", at_constructor_pattern));
        assert!(with_parser("(A || B).new())", at_constructor_pattern));
        assert!(with_parser("public com.acme..*+.new(..))", at_constructor_pattern));
        assert!(!with_parser("* Foo.bar(..))", at_constructor_pattern));
        assert!(!with_parser("* *(..))", at_constructor_pattern));
        assert!(!with_parser("(A || B) Foo.bar(..))", at_constructor_pattern));
    }

    #[test]
    fn test_constructor_pattern_past_lookahead_limit() {
        let types: Vec<String> = (0..40).map(|i| format!("T{i}")).collect();
        let text = format!("({}).new(..))", types.join(" || "));
        assert!(with_parser(&text, at_constructor_pattern));
        let text = format!("* ({}).run(..))", types.join(" || "));
        assert!(!with_parser(&text, at_constructor_pattern));
    }

    #[test]
    fn test_local_var_decl() {
        assert!(with_parser("final int x = 1;", is_local_var_decl));
        assert!(with_parser("Map<K, V> m;", is_local_var_decl));
        assert!(!with_parser("x = 1;", is_local_var_decl));
        assert!(!with_parser("foo(x);", is_local_var_decl));
    }
}
