//! Parser Tests - Pointcuts
//!
//! Boolean structure of pointcut expressions, every primitive designator
//! and its payload, and reference pointcuts.

use rstest::rstest;
use weaver::parser::ast::*;
use weaver::parser::rule_parser::{Rule, parse_rule};

fn parse_pointcut(input: &str) -> PointcutExpr {
    let result = parse_rule(Rule::PointcutExpression, input);
    assert!(result.is_ok(), "Failed to parse {}: {:?}", input, result.errors());
    PointcutExpr::cast(result.node().expect("pointcut node")).expect("a pointcut expression")
}

/// Fully parenthesized rendering of the boolean structure
fn grouping(expr: &PointcutExpr) -> String {
    match expr {
        PointcutExpr::Binary(b) => format!(
            "({} {} {})",
            b.lhs().map(|e| grouping(&e)).unwrap_or_default(),
            match b.op() {
                Some(PointcutOp::And) => "&&",
                Some(PointcutOp::Or) => "||",
                None => "?",
            },
            b.rhs().map(|e| grouping(&e)).unwrap_or_default()
        ),
        PointcutExpr::Not(n) => format!("!{}", n.operand().map(|e| grouping(&e)).unwrap_or_default()),
        PointcutExpr::Paren(p) => p.inner().map(|e| grouping(&e)).unwrap_or_default(),
        PointcutExpr::Primitive(p) => p
            .kind()
            .map(|k| k.designator().to_string())
            .unwrap_or_default(),
        PointcutExpr::Reference(r) => r.name(),
    }
}

// ============================================================================
// Boolean structure
// ============================================================================

#[rstest]
#[case("a() && b() || c()", "((a && b) || c)")]
#[case("a() || b() && c()", "(a || (b && c))")]
#[case("a() && b() && c()", "((a && b) && c)")]
#[case("a() || b() || c()", "((a || b) || c)")]
#[case("!a() && b()", "(!a && b)")]
#[case("!(a() || b())", "!(a || b)")]
#[case("(a() || b()) && c()", "((a || b) && c)")]
#[case("call(* *(..)) && !within(Foo)", "(call && !within)")]
fn test_pointcut_grouping(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(grouping(&parse_pointcut(input)), expected);
}

// ============================================================================
// Primitives
// ============================================================================

#[rstest]
#[case("call(* *(..))", PrimitiveKind::Call)]
#[case("call(Foo.new())", PrimitiveKind::Call)]
#[case("execution(public void Foo.run())", PrimitiveKind::Execution)]
#[case("initialization(Foo.new(..))", PrimitiveKind::Initialization)]
#[case("preinitialization(new(int))", PrimitiveKind::PreInitialization)]
#[case("staticinitialization(com.acme..*)", PrimitiveKind::StaticInitialization)]
#[case("get(int Point.x)", PrimitiveKind::Get)]
#[case("set(* *)", PrimitiveKind::Set)]
#[case("handler(IOException+)", PrimitiveKind::Handler)]
#[case("adviceexecution()", PrimitiveKind::AdviceExecution)]
#[case("within(com.acme..*)", PrimitiveKind::Within)]
#[case("withincode(* Foo.bar(..))", PrimitiveKind::WithinCode)]
#[case("cflow(call(* main(..)))", PrimitiveKind::Cflow)]
#[case("cflowbelow(traced())", PrimitiveKind::CflowBelow)]
#[case("if(enabled && level > 2)", PrimitiveKind::If)]
#[case("if()", PrimitiveKind::If)]
#[case("this(Foo)", PrimitiveKind::This)]
#[case("target(t)", PrimitiveKind::Target)]
#[case("args(int, ..)", PrimitiveKind::Args)]
#[case("@this(Audited)", PrimitiveKind::AtThis)]
#[case("@target(a)", PrimitiveKind::AtTarget)]
#[case("@within(com.acme.Secured)", PrimitiveKind::AtWithin)]
#[case("@withincode(Traced)", PrimitiveKind::AtWithinCode)]
#[case("@annotation(Audited)", PrimitiveKind::AtAnnotation)]
#[case("@args(Entity, ..)", PrimitiveKind::AtArgs)]
fn test_primitive_kinds(#[case] input: &str, #[case] expected: PrimitiveKind) {
    let PointcutExpr::Primitive(primitive) = parse_pointcut(input) else {
        panic!("expected a primitive for {input}");
    };
    assert_eq!(primitive.kind(), Some(expected));
}

#[test]
fn test_call_to_constructor_gets_constructor_pattern() {
    let PointcutExpr::Primitive(call) = parse_pointcut("call(com.acme.Point.new(int, int))") else {
        panic!("expected primitive");
    };
    let PrimitivePayload::Constructor(pattern) = call.payload() else {
        panic!("expected constructor pattern");
    };
    assert_eq!(pattern.declaring_type().unwrap().text(), "com.acme.Point");
    assert_eq!(pattern.parameters().unwrap().formals().count(), 2);
}

#[test]
fn test_call_with_array_declaring_type_is_a_method_call() {
    let PointcutExpr::Primitive(call) = parse_pointcut("call(* java.util.List<String>+[].*(..))") else {
        panic!("expected primitive");
    };
    let PrimitivePayload::Method(pattern) = call.payload() else {
        panic!("expected method pattern");
    };
    let TypePattern::Simple(declaring) = pattern.declaring_type().unwrap() else {
        panic!("expected a simple declaring type");
    };
    assert!(declaring.includes_subtypes());
    assert_eq!(declaring.dimensions(), 1);
    assert_eq!(pattern.name().unwrap().text(), "*");
}

#[test]
fn test_constructor_with_long_declaring_disjunction() {
    let types: Vec<String> = (0..48).map(|i| format!("com.acme.T{i}")).collect();
    let input = format!("call(({}).new(..))", types.join(" || "));
    let PointcutExpr::Primitive(call) = parse_pointcut(&input) else {
        panic!("expected primitive");
    };
    let PrimitivePayload::Constructor(pattern) = call.payload() else {
        panic!("expected constructor pattern");
    };
    assert!(matches!(pattern.declaring_type(), Some(TypePattern::Paren(_))));
}

#[test]
fn test_field_payload() {
    let PointcutExpr::Primitive(get) = parse_pointcut("get(private int com.acme.Point.x)") else {
        panic!("expected primitive");
    };
    let PrimitivePayload::Field(field) = get.payload() else {
        panic!("expected field pattern");
    };
    assert_eq!(field.field_type().unwrap().text(), "int");
    assert_eq!(field.declaring_type().unwrap().text(), "com.acme.Point");
    assert_eq!(field.name().unwrap().text(), "x");
}

#[test]
fn test_if_payload_is_expression() {
    let PointcutExpr::Primitive(guard) = parse_pointcut("if(count > 10)") else {
        panic!("expected primitive");
    };
    let PrimitivePayload::Expression(expr) = guard.payload() else {
        panic!("expected expression");
    };
    assert!(matches!(expr, Expr::Binary(_)));
}

// ============================================================================
// Argument lists
// ============================================================================

#[rstest]
#[case("args()", vec![])]
#[case("args(..)", vec![".."])]
#[case("args(int, ..)", vec!["int", ".."])]
#[case("args(.., String)", vec!["..", "String"])]
#[case("args(*, .., *)", vec!["*", "..", "*"])]
#[case("args(x, y)", vec!["x", "y"])]
fn test_args_patterns(#[case] input: &str, #[case] expected: Vec<&str>) {
    let PointcutExpr::Primitive(args) = parse_pointcut(input) else {
        panic!("expected primitive");
    };
    let PrimitivePayload::Args(list) = args.payload() else {
        panic!("expected args list");
    };
    let rendered: Vec<String> = list
        .args()
        .filter_map(|a| a.kind())
        .map(|k| match k {
            ArgPatternKind::AnyRemaining => "..".to_string(),
            ArgPatternKind::AnySingle => "*".to_string(),
            ArgPatternKind::TypeOrIdentifier(t) => t.text(),
        })
        .collect();
    assert_eq!(rendered, expected);
}

#[rstest]
#[case("args(.., ..)")]
#[case("args(int, .., .., String)")]
#[case("@args(.., ..)")]
fn test_adjacent_any_remaining_is_rejected(#[case] input: &str) {
    let result = parse_rule(Rule::PointcutExpression, input);
    assert_eq!(result.errors().len(), 1, "{:?}", result.errors());
    assert_eq!(result.errors()[0].code.as_str(), "E0702");
    assert_eq!(result.syntax().text().to_string(), input);
}

// ============================================================================
// Reference pointcuts
// ============================================================================

#[rstest]
#[case("traced()", "traced", 0)]
#[case("traced(o)", "traced", 1)]
#[case("Tracing.entry(o, ..)", "Tracing.entry", 2)]
#[case("com.acme.Tracing.entry(*)", "com.acme.Tracing.entry", 1)]
fn test_reference_pointcuts(#[case] input: &str, #[case] name: &str, #[case] arity: usize) {
    let PointcutExpr::Reference(reference) = parse_pointcut(input) else {
        panic!("expected a reference for {input}");
    };
    assert_eq!(reference.name(), name);
    assert_eq!(reference.arguments().map_or(0, |a| a.args().count()), arity);
}

// ============================================================================
// Errors
// ============================================================================

#[rstest]
#[case("call(* *(..)) &&", "E0902")]
#[case("call(* *(..)) && ;", "E0601")]
#[case("within(com.acme..* ", "E0203")]
fn test_malformed_pointcuts(#[case] input: &str, #[case] code: &str) {
    let result = parse_rule(Rule::PointcutExpression, input);
    assert!(!result.is_ok());
    assert_eq!(result.errors()[0].code.as_str(), code, "{:?}", result.errors());
    assert_eq!(result.syntax().text().to_string(), input);
}
