//! Parser Tests - Expressions
//!
//! Operator precedence and associativity, casts against parenthesized
//! expressions, and the primary/selector forms.

use rstest::rstest;
use weaver::parser::ast::*;
use weaver::parser::rule_parser::{Rule, parse_rule};

fn parse_expr(input: &str) -> Expr {
    let result = parse_rule(Rule::Expression, input);
    assert!(result.is_ok(), "Failed to parse {}: {:?}", input, result.errors());
    Expr::cast(result.node().expect("expression node")).expect("an expression")
}

/// Fully parenthesized rendering of binary and assignment structure
fn grouping(expr: &Expr) -> String {
    match expr {
        Expr::Binary(b) => format!(
            "({} {} {})",
            b.lhs().map(|e| grouping(&e)).unwrap_or_default(),
            b.op().map(|op| op.as_str()).unwrap_or("?"),
            b.rhs().map(|e| grouping(&e)).unwrap_or_default()
        ),
        Expr::Assign(a) => format!(
            "({} = {})",
            a.target().map(|e| grouping(&e)).unwrap_or_default(),
            a.value().map(|e| grouping(&e)).unwrap_or_default()
        ),
        other => other.text(),
    }
}

// ============================================================================
// Precedence
// ============================================================================

#[rstest]
#[case("a + b * c", "(a + (b * c))")]
#[case("a * b + c", "((a * b) + c)")]
#[case("a - b - c", "((a - b) - c)")]
#[case("a / b % c", "((a / b) % c)")]
#[case("a << 1 + 2", "(a << (1 + 2))")]
#[case("a >> b >>> c", "((a >> b) >>> c)")]
#[case("a < b == c > d", "((a < b) == (c > d))")]
#[case("a <= b != c >= d", "((a <= b) != (c >= d))")]
#[case("a & b ^ c | d", "(((a & b) ^ c) | d)")]
#[case("a | b && c | d", "((a | b) && (c | d))")]
#[case("a || b && c", "(a || (b && c))")]
#[case("a == b && c != d || e", "(((a == b) && (c != d)) || e)")]
#[case("x = y = a + 1", "(x = (y = (a + 1)))")]
fn test_binary_grouping(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(grouping(&parse_expr(input)), expected);
}

#[test]
fn test_compound_assignment_operator() {
    let Expr::Assign(assign) = parse_expr("mask >>>= 2") else {
        panic!("expected assignment");
    };
    assert_eq!(assign.op(), Some(weaver::parser::SyntaxKind::USHR_EQ));
}

#[test]
fn test_conditional_is_right_nested() {
    let Expr::Conditional(cond) = parse_expr("a ? b : c ? d : e") else {
        panic!("expected conditional");
    };
    assert_eq!(cond.condition().unwrap().text(), "a");
    assert!(matches!(cond.else_expr(), Some(Expr::Conditional(_))));
}

#[test]
fn test_instanceof_binds_tighter_than_and() {
    let Expr::Binary(and) = parse_expr("o instanceof String && ok") else {
        panic!("expected binary");
    };
    assert_eq!(and.op(), Some(BinaryOp::And));
    assert!(matches!(and.lhs(), Some(Expr::InstanceOf(_))));
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    let Expr::Binary(and) = parse_expr("!a && -b < ~c") else {
        panic!("expected binary");
    };
    let Some(Expr::Prefix(not)) = and.lhs() else {
        panic!("expected prefix");
    };
    assert_eq!(not.op(), Some(PrefixOp::Not));
    assert!(matches!(and.rhs(), Some(Expr::Binary(_))));
}

// ============================================================================
// Casts and parentheses
// ============================================================================

#[rstest]
#[case("(int) x", true)]
#[case("(int) -x", true)]
#[case("(String) o.toString()", true)]
#[case("(java.util.List<String>) raw", true)]
#[case("(Runnable & java.io.Serializable) r", true)]
#[case("(a) - b", false)]
#[case("(a + b) * c", false)]
#[case("(a)", false)]
fn test_cast_or_parenthesized(#[case] input: &str, #[case] is_cast: bool) {
    let expr = parse_expr(input);
    let found_cast = expr
        .syntax()
        .descendants()
        .any(|n| n.kind() == weaver::parser::SyntaxKind::CAST_EXPR);
    assert_eq!(found_cast, is_cast, "{input}");
}

#[test]
fn test_intersection_cast_types() {
    let Expr::Cast(cast) = parse_expr("(Runnable & java.io.Serializable) r") else {
        panic!("expected cast");
    };
    assert_eq!(cast.types().count(), 2);
    assert_eq!(cast.operand().unwrap().text(), "r");
}

// ============================================================================
// Primaries and selectors
// ============================================================================

#[rstest]
#[case("42", "Literal")]
#[case("\"text\"", "Literal")]
#[case("name", "NameRef")]
#[case("this", "This")]
#[case("Outer.this", "QualifiedThis")]
#[case("Outer.super.run()", "MethodCall")]
#[case("String.class", "ClassLiteral")]
#[case("int[].class", "ClassLiteral")]
#[case("a.b.c", "FieldAccess")]
#[case("a.b().c()", "MethodCall")]
#[case("xs[i + 1]", "ArrayAccess")]
#[case("new Point(1, 2)", "New")]
#[case("new java.util.ArrayList<String>()", "New")]
#[case("new Runnable() { public void run() { } }", "New")]
#[case("new int[3][]", "ArrayCreation")]
#[case("new String[] { \"a\" }", "ArrayCreation")]
#[case("outer.new Inner()", "InnerCreation")]
#[case("Collections.<String>emptyList()", "MethodCall")]
#[case("i++", "Postfix")]
#[case("--i", "Prefix")]
fn test_primary_forms(#[case] input: &str, #[case] expected: &str) {
    let expr = parse_expr(input);
    let variant = match expr {
        Expr::Literal(_) => "Literal",
        Expr::NameRef(_) => "NameRef",
        Expr::This(_) => "This",
        Expr::QualifiedThis(_) => "QualifiedThis",
        Expr::MethodCall(_) => "MethodCall",
        Expr::ClassLiteral(_) => "ClassLiteral",
        Expr::FieldAccess(_) => "FieldAccess",
        Expr::ArrayAccess(_) => "ArrayAccess",
        Expr::New(_) => "New",
        Expr::ArrayCreation(_) => "ArrayCreation",
        Expr::InnerCreation(_) => "InnerCreation",
        Expr::Postfix(_) => "Postfix",
        Expr::Prefix(_) => "Prefix",
        _ => "other",
    };
    assert_eq!(variant, expected, "{input}");
}

#[test]
fn test_anonymous_class_body() {
    let Expr::New(new) = parse_expr("new Runnable() { public void run() { } }") else {
        panic!("expected new");
    };
    assert!(new.is_anonymous());
    assert_eq!(new.body().unwrap().members().count(), 1);
}

#[test]
fn test_array_creation_dimensions() {
    let Expr::ArrayCreation(array) = parse_expr("new int[n][2][]") else {
        panic!("expected array creation");
    };
    assert_eq!(array.dimensions().len(), 2);
    assert!(!array.has_initializer());
}

#[test]
fn test_class_literal_type_text() {
    let Expr::ClassLiteral(literal) = parse_expr("int[][].class") else {
        panic!("expected class literal");
    };
    assert_eq!(literal.type_text(), "int[][]");
}

// ============================================================================
// Errors
// ============================================================================

#[rstest]
#[case("(a +) * b", "E0402")]
#[case("a +", "E0902")]
#[case("a * (b", "E0203")]
#[case("f(a,", "E0902")]
#[case("xs[", "E0902")]
fn test_malformed_expressions(#[case] input: &str, #[case] code: &str) {
    let result = parse_rule(Rule::Expression, input);
    assert_eq!(result.errors().len(), 1, "{:?}", result.errors());
    assert_eq!(result.errors()[0].code.as_str(), code);
    assert_eq!(result.syntax().text().to_string(), input);
}
