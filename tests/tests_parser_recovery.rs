//! Parser Tests - Error Recovery
//!
//! Malformed input still yields a complete, lossless tree: skipped tokens
//! land in ERROR nodes, one diagnostic is reported per problem, and parsing
//! resumes at the next declaration or statement.

use rstest::rstest;
use weaver::parser::ast::*;
use weaver::parser::rule_parser::{Rule, parse_rule};
use weaver::parser::{ErrorCode, ErrorKind, ParseConfig, SyntaxKind, parse_source, parse_source_with};
use weaver::{LineIndex, TextSize};

fn error_nodes(source: &str) -> usize {
    parse_source(source)
        .syntax()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::ERROR)
        .count()
}

fn method_names(source: &str) -> Vec<String> {
    parse_source(source)
        .syntax()
        .descendants()
        .filter_map(MethodDecl::cast)
        .filter_map(|m| m.name().and_then(|n| n.text()))
        .collect()
}

// ============================================================================
// One diagnostic, parsing continues
// ============================================================================

#[rstest]
#[case("class A {\n    int x = ;\n    void later() {}\n}", "later")]
#[case("class A {\n    # stray tokens;\n    void later() {}\n}", "later")]
#[case("class A {\n    int x = 1 2;\n    void later() {}\n}", "later")]
#[case("class A {\n    void broken( {}\n    void later() {}\n}", "later")]
#[case("aspect A {\n    before(): call(* *(..)) && { }\n    void later() {}\n}", "later")]
#[case("aspect A {\n    declare bogus: Foo;\n    void later() {}\n}", "later")]
fn test_member_level_recovery(#[case] source: &str, #[case] survivor: &str) {
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    assert_eq!(parse.syntax().text().to_string(), source);
    assert!(
        method_names(source).iter().any(|n| n == survivor),
        "'{survivor}' was not parsed in {source}"
    );
}

#[rstest]
#[case("class A { void f() { int x = ; g(); } }")]
#[case("class A { void f() { x = = 1; g(); } }")]
#[case("class A { void f() { if (a { h(); } g(); } }")]
#[case("class A { void f() { return 1 2; g(); } }")]
fn test_statement_level_recovery(#[case] source: &str) {
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    assert_eq!(parse.syntax().text().to_string(), source);
    let calls: Vec<_> = parse
        .syntax()
        .descendants()
        .filter_map(MethodCall::cast)
        .filter_map(|c| c.name())
        .collect();
    assert!(calls.iter().any(|n| n == "g"), "g() lost in {source}: {calls:?}");
}

// ============================================================================
// A stray token does not take the next construct with it
// ============================================================================

fn statement_kinds(source: &str) -> Vec<SyntaxKind> {
    let parse = parse_source(source);
    let block = parse
        .syntax()
        .descendants()
        .find_map(Block::cast)
        .expect("method body");
    block.statements().map(|s| s.syntax().kind()).collect()
}

#[rstest]
#[case("class A { void f() { foo(); ) bar(); } }", vec![SyntaxKind::EXPR_STMT, SyntaxKind::EXPR_STMT])]
#[case("class A { void f() { # y = 2; } }", vec![SyntaxKind::EXPR_STMT])]
#[case("class A { void f() { ] int y = 2; } }", vec![SyntaxKind::LOCAL_VAR_DECL])]
#[case("class A { void f() { ) return; } }", vec![SyntaxKind::RETURN_STMT])]
fn test_statement_after_stray_token_survives(#[case] source: &str, #[case] expected: Vec<SyntaxKind>) {
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    assert_eq!(parse.syntax().text().to_string(), source);
    assert_eq!(statement_kinds(source), expected);
}

#[test]
fn test_assignment_after_invalid_character_is_kept() {
    let source = "class A { void f() { # y = 2; } }";
    let parse = parse_source(source);
    assert_eq!(parse.errors[0].code, ErrorCode::E0101);
    let assign = parse
        .syntax()
        .descendants()
        .find(|n| n.kind() == SyntaxKind::ASSIGN_EXPR)
        .expect("y = 2 parsed");
    assert_eq!(assign.text().to_string(), "y = 2");
}

#[rstest]
#[case("class A { ) int x; }", 1, 0)]
#[case("class A { ] void later() {} }", 0, 1)]
#[case("class A { # int x; void later() {} }", 1, 1)]
fn test_member_after_stray_token_survives(
    #[case] source: &str,
    #[case] fields: usize,
    #[case] methods: usize,
) {
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    assert_eq!(parse.syntax().text().to_string(), source);
    let root = parse.syntax();
    assert_eq!(root.descendants().filter_map(FieldDecl::cast).count(), fields);
    assert_eq!(method_names(source).len(), methods);
}

#[test]
fn test_stray_token_after_modifiers_still_skips() {
    let source = "class A { public ) int x; void later() {} }";
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    assert_eq!(parse.syntax().text().to_string(), source);
    assert_eq!(method_names(source), vec!["later"]);
}

// ============================================================================
// Nesting limit
// ============================================================================

#[test]
fn test_deep_parentheses_stop_at_nesting_limit() {
    let depth = 2500;
    let source = format!(
        "class A {{ int x = {}1{}; void later() {{}} }}",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let parse = parse_source(&source);
    assert_eq!(parse.syntax().text().to_string(), source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    assert_eq!(parse.errors[0].code, ErrorCode::E0208);
    assert!(error_nodes(&source) >= 1);
    assert_eq!(method_names(&source), vec!["later"]);
}

#[test]
fn test_nesting_limit_is_configurable() {
    let source = "class A { void f() { { { { x(); } } } } }";
    assert!(parse_source(source).ok());

    let config = ParseConfig::default().with_nesting_limit(4);
    let parse = parse_source_with(source, &config);
    assert_eq!(parse.syntax().text().to_string(), source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    assert_eq!(parse.errors[0].code, ErrorCode::E0208);
    assert!(parse.errors[0].code.is_structural());
}

fn deep(open: &str, inner: &str, close: &str) -> String {
    format!("{}{}{}", open.repeat(3000), inner, close.repeat(3000))
}

#[rstest]
#[case(format!("class A {{ boolean b = {}; }}", deep("!", "x", "")))]
#[case(format!("class A {{ void f() {{ {} }} }}", deep("{", "g();", "}")))]
#[case(format!("class A {{ void f() {{ {} }} }}", deep("if (a) ", "g();", "")))]
#[case(format!("aspect A {{ pointcut p(): {}; }}", deep("(", "call(* *(..))", ")")))]
#[case(format!("aspect A {{ pointcut p(): within({}); }}", deep("!", "Foo", "")))]
#[case(format!("class A {{ {} }}", deep("class B { ", "int x;", "}")))]
fn test_deep_nesting_is_bounded(#[case] source: String) {
    let parse = parse_source(&source);
    assert_eq!(parse.syntax().text().to_string(), source);
    assert!(
        parse.errors.iter().any(|e| e.code == ErrorCode::E0208),
        "errors: {:?}",
        parse.errors
    );
}

#[test]
fn test_deeply_nested_type_arguments_are_bounded() {
    let input = deep("List<", "String", ">");
    let result = parse_rule(Rule::Type, &input);
    assert_eq!(result.syntax().text().to_string(), input);
    assert_eq!(result.errors()[0].code, ErrorCode::E0208);
}

#[test]
fn test_top_level_garbage_skipped_to_next_type() {
    let source = "garbage tokens here\nclass A {}";
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 1);
    assert_eq!(parse.errors[0].code, ErrorCode::E0304);
    let cu = CompilationUnit::cast(parse.syntax()).unwrap();
    let names: Vec<_> = cu
        .type_decls()
        .filter_map(|d| d.name().and_then(|n| n.text()))
        .collect();
    assert_eq!(names, vec!["A"]);
    assert!(error_nodes(source) >= 1);
}

// ============================================================================
// Specific diagnostics
// ============================================================================

#[test]
fn test_missing_semicolon_at_line_end() {
    let source = "class A {\n    void f() {\n        int x = 1\n        g();\n    }\n}";
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    let err = &parse.errors[0];
    assert_eq!(err.code, ErrorCode::E0201);
    assert!(err.has_hint());

    let end_of_one = TextSize::from((source.find("= 1").unwrap() + 3) as u32);
    assert_eq!(err.range.start(), end_of_one);
    assert_eq!(LineIndex::new(source).line_col(err.range.start()).line, 2);

    let block = parse
        .syntax()
        .descendants()
        .find_map(Block::cast)
        .expect("method body");
    let kinds: Vec<_> = block.statements().map(|s| s.syntax().kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::LOCAL_VAR_DECL, SyntaxKind::EXPR_STMT]);
}

#[test]
fn test_unclosed_brace_points_at_opening() {
    let source = "class A {\n    void f() { g(); }\n";
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 1);
    let err = &parse.errors[0];
    assert_eq!(err.code, ErrorCode::E0202);
    assert_eq!(err.kind, ErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.expected, vec![SyntaxKind::R_BRACE]);
    assert_eq!(err.related.len(), 1);
    assert_eq!(err.related[0].range.start(), TextSize::from(8));
}

#[test]
fn test_unterminated_string_is_lexical_error() {
    let source = "class A {\n    String s = \"abc\n    ;\n}";
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    assert_eq!(parse.errors[0].code, ErrorCode::E0102);
    assert_eq!(parse.syntax().text().to_string(), source);
}

#[test]
fn test_modifier_not_allowed_is_reported_without_desync() {
    let source = "class A { transient void f() {} void g() {} }";
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    assert_eq!(method_names(source), vec!["f", "g"]);
}

#[test]
fn test_speculation_leaves_no_diagnostics() {
    let source = "class A { void f() { x = (a) - b; y = (int) -z; List<String> l = (List<String>) o; } }";
    let parse = parse_source(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors);
}

#[test]
fn test_errors_are_in_source_order() {
    let source = "class A {\n    int x = ;\n    int y = ;\n    int z = ;\n}";
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 3, "errors: {:?}", parse.errors);
    let starts: Vec<_> = parse.errors.iter().map(|e| e.range.start()).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
    let lines: Vec<_> = parse.errors.iter().map(|e| e.line_col.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn test_stray_closing_brace_between_types() {
    let source = "class A {}\n}\nclass B {}";
    let parse = parse_source(source);
    assert_eq!(parse.errors.len(), 1, "errors: {:?}", parse.errors);
    assert_eq!(parse.errors[0].code, ErrorCode::E0205);
    let cu = CompilationUnit::cast(parse.syntax()).unwrap();
    assert_eq!(cu.type_decls().count(), 2);
    assert_eq!(parse.syntax().text().to_string(), source);
}
