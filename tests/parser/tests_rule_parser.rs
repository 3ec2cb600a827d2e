//! Rule-Based Parser Tests
//!
//! Each grammar rule is parsed on its own, and subtrees cut out of a full
//! compilation unit are re-parsed with the rule that produced them.

use rstest::rstest;
use weaver::parser::rule_parser::{Rule, parse_rule};
use weaver::parser::{SyntaxKind, SyntaxNode, parse_source};

/// Helper to assert that a rule parses successfully and consumes the whole input
fn assert_rule_parses(rule: Rule, input: &str, desc: &str) {
    let result = parse_rule(rule, input);
    assert!(
        result.is_ok(),
        "Failed to parse {} as {:?}: {:?}\nInput: {}",
        desc,
        rule,
        result.errors(),
        input
    );
    assert!(result.fully_consumed(), "{} left input over", desc);
}

fn shape(node: &SyntaxNode) -> Vec<(SyntaxKind, String)> {
    node.descendants()
        .map(|n| (n.kind(), n.text().to_string()))
        .collect()
}

// =============================================================================
// Declarations
// =============================================================================

#[rstest]
#[case("class A {}", "empty class")]
#[case("public final class A<T extends Comparable<T>> extends B<T> implements C, D {}", "generic class")]
#[case("interface I extends J, K { void run(); }", "interface")]
#[case("enum E { A, B, C; }", "enum")]
#[case("@interface Marker { int value() default 0; }", "annotation type")]
#[case("aspect A {}", "empty aspect")]
#[case("privileged abstract aspect A<T> extends B implements C pertypewithin(com..*) {}", "aspect header")]
#[case("aspect A issingleton() {}", "singleton aspect")]
fn test_type_declaration(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::TypeDeclaration, input, desc);
}

#[rstest]
#[case("int x;", "field")]
#[case("private String[] names = { \"a\", \"b\" };", "array field")]
#[case("public <T> List<T> copy(List<? extends T> src) throws IOException { return null; }", "generic method")]
#[case("A(int... xs) { super(xs); }", "varargs constructor")]
#[case("static { init(); }", "static initializer")]
#[case("@Override public String toString() { return \"\"; }", "annotated method")]
fn test_class_member(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::ClassBodyMember, input, desc);
}

#[rstest]
#[case("before(): call(* *(..)) { }", "before advice")]
#[case("after(Object o) returning: this(o) { }", "after returning without binding")]
#[case("after() throwing(RuntimeException e): execution(* run()) { }", "after throwing")]
#[case("Object around(Object t) throws Exception: target(t) { return proceed(t); }", "around advice")]
#[case("public pointcut p(): adviceexecution();", "pointcut")]
#[case("abstract pointcut q(int x);", "abstract pointcut")]
#[case("int Point.x;", "inter-type field")]
#[case("public <T> void com.acme.Point<T>.set(T t) { }", "generic inter-type method")]
#[case("Point.new() { this(0); }", "inter-type constructor")]
#[case("declare parents: (Foo || Bar) extends Base;", "declare parents")]
#[case("declare soft: Exception: within(Foo);", "declare soft")]
#[case("declare @method: public * Point.get*(): @Getter;", "declare annotation")]
fn test_aspect_member(#[case] input: &str, #[case] desc: &str) {
    assert_rule_parses(Rule::AspectBodyMember, input, desc);
}

#[rstest]
#[case(Rule::Type, "java.util.Map<String, List<? super Integer>>[]")]
#[case(Rule::Type, "int[][]")]
#[case(Rule::Annotation, "@SuppressWarnings({\"a\", \"b\"})")]
#[case(Rule::Annotation, "@Retry(times = 3, on = IOException.class)")]
#[case(Rule::Block, "{ int x = 1; x++; }")]
#[case(Rule::FormalsPattern, "(int, .., String...)")]
#[case(Rule::ArgsPatternList, "(.., int, *)")]
#[case(Rule::ConstructorPattern, "public com.acme.*.new(..) throws *Exception")]
#[case(Rule::FieldPattern, "static final * *.LOG*")]
fn test_individual_rules(#[case] rule: Rule, #[case] input: &str) {
    assert_rule_parses(rule, input, rule.description());
}

// =============================================================================
// Leftover input
// =============================================================================

#[test]
fn test_trailing_input_is_reported() {
    let result = parse_rule(Rule::Expression, "a + b c");
    assert!(!result.is_ok());
    assert!(!result.fully_consumed());
    assert_eq!(result.errors()[0].code.as_str(), "E0207");
    assert_eq!(result.syntax().text().to_string(), "a + b c");
}

// =============================================================================
// Subtree re-parsing
// =============================================================================

#[rstest]
#[case(
    "aspect A { pointcut p(): call(* *(..)) && !within(A) || cflow(q()); }",
    SyntaxKind::POINTCUT_BINARY,
    Rule::PointcutExpression
)]
#[case(
    "class A { int f() { return a * (b + c) << 2; } }",
    SyntaxKind::BINARY_EXPR,
    Rule::Expression
)]
#[case(
    "class A { void f() { if (a) { g(); } else h(); } }",
    SyntaxKind::IF_STMT,
    Rule::Statement
)]
#[case(
    "aspect A { before(): call(public * com.acme..*Service+.find*(String, ..)) { } }",
    SyntaxKind::METHOD_PATTERN,
    Rule::MethodPattern
)]
#[case(
    "aspect A { declare parents: (com.a.* && !com.a.Impl) implements I; }",
    SyntaxKind::TYPE_PATTERN_PAREN,
    Rule::TypePattern
)]
fn test_subtree_reparse_matches(#[case] source: &str, #[case] kind: SyntaxKind, #[case] rule: Rule) {
    let parse = parse_source(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors);
    let subtree = parse
        .syntax()
        .descendants()
        .find(|n| n.kind() == kind)
        .expect("subtree");

    let text = subtree.text().to_string();
    let result = parse_rule(rule, &text);
    assert!(result.is_ok(), "{text}: {:?}", result.errors());
    assert!(result.fully_consumed());
    let reparsed = result.node().expect("rule node");
    assert_eq!(shape(&reparsed), shape(&subtree));
}
