//! Parser Tests - Statements
//!
//! Statement forms, the local-variable/expression decision, and the
//! dangling `else`.

use rstest::rstest;
use weaver::parser::SyntaxKind;
use weaver::parser::ast::*;
use weaver::parser::rule_parser::{Rule, parse_rule};

fn parse_stmt(input: &str) -> Stmt {
    let result = parse_rule(Rule::Statement, input);
    assert!(result.is_ok(), "Failed to parse {}: {:?}", input, result.errors());
    Stmt::cast(result.node().expect("statement node")).expect("a statement")
}

fn stmt_kind(input: &str) -> SyntaxKind {
    parse_stmt(input).syntax().kind()
}

// ============================================================================
// Statement forms
// ============================================================================

#[rstest]
#[case("{ }", SyntaxKind::BLOCK)]
#[case(";", SyntaxKind::EMPTY_STMT)]
#[case("if (a) b();", SyntaxKind::IF_STMT)]
#[case("while (running) step();", SyntaxKind::WHILE_STMT)]
#[case("do { step(); } while (running);", SyntaxKind::DO_STMT)]
#[case("for (int i = 0, j = n; i < j; i++, j--) swap(i, j);", SyntaxKind::FOR_STMT)]
#[case("for (final Map.Entry<K, V> e : map.entrySet()) { }", SyntaxKind::FOREACH_STMT)]
#[case("try { } finally { }", SyntaxKind::TRY_STMT)]
#[case("switch (c) { case 'a': break; default: }", SyntaxKind::SWITCH_STMT)]
#[case("synchronized (lock) { n++; }", SyntaxKind::SYNCHRONIZED_STMT)]
#[case("return;", SyntaxKind::RETURN_STMT)]
#[case("throw new IllegalStateException();", SyntaxKind::THROW_STMT)]
#[case("break outer;", SyntaxKind::BREAK_STMT)]
#[case("continue;", SyntaxKind::CONTINUE_STMT)]
#[case("assert n > 0 : \"positive\";", SyntaxKind::ASSERT_STMT)]
#[case("loop: while (true) { }", SyntaxKind::LABELED_STMT)]
#[case("count += 2;", SyntaxKind::EXPR_STMT)]
fn test_statement_forms(#[case] input: &str, #[case] expected: SyntaxKind) {
    assert_eq!(stmt_kind(input), expected, "{input}");
}

#[test]
fn test_local_class_in_block() {
    let result = parse_rule(Rule::Block, "{ class Local { } new Local(); }");
    assert!(result.is_ok(), "{:?}", result.errors());
    let block = Block::cast(result.node().unwrap()).unwrap();
    assert_eq!(block.local_types().count(), 1);
    assert_eq!(block.statements().count(), 1);
}

// ============================================================================
// Local variable or expression
// ============================================================================

#[rstest]
#[case("int x;", true)]
#[case("int[] xs = new int[4];", true)]
#[case("final String s = \"\";", true)]
#[case("List<String> names = load();", true)]
#[case("Map<String, List<Integer>> index;", true)]
#[case("java.util.Set<?> any;", true)]
#[case("Outer.Inner value = null;", true)]
#[case("a < b;", false)]
#[case("x = 1;", false)]
#[case("run();", false)]
#[case("xs[0] = 1;", false)]
#[case("i++;", false)]
#[case("a.b.c = d;", false)]
fn test_local_var_or_expression(#[case] input: &str, #[case] is_local: bool) {
    let stmt = parse_stmt(input);
    assert_eq!(matches!(stmt, Stmt::LocalVar(_)), is_local, "{input}");
}

#[test]
fn test_local_var_declarators() {
    let Stmt::LocalVar(decl) = parse_stmt("int a = 1, b, c[] = {};") else {
        panic!("expected local variable");
    };
    assert_eq!(decl.ty().unwrap().text(), "int");
    assert_eq!(decl.declarators().count(), 3);
}

// ============================================================================
// Control flow details
// ============================================================================

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    let Stmt::If(outer) = parse_stmt("if (a) if (b) x(); else y();") else {
        panic!("expected if");
    };
    assert!(outer.else_branch().is_none());
    let Some(Stmt::If(inner)) = outer.then_branch() else {
        panic!("expected nested if");
    };
    assert!(matches!(inner.else_branch(), Some(Stmt::Expr(_))));
}

#[test]
fn test_else_if_chain() {
    let Stmt::If(first) = parse_stmt("if (a) x(); else if (b) y(); else z();") else {
        panic!("expected if");
    };
    let Some(Stmt::If(second)) = first.else_branch() else {
        panic!("expected else-if");
    };
    assert!(second.else_branch().is_some());
}

#[test]
fn test_for_parts() {
    let Stmt::For(for_stmt) = parse_stmt("for (i = 0; i < n; i++, j++) { }") else {
        panic!("expected for");
    };
    assert!(for_stmt.has_init());
    assert_eq!(for_stmt.update().len(), 2);
    assert!(matches!(for_stmt.body(), Some(Stmt::Block(_))));
}

#[test]
fn test_foreach_parts() {
    let Stmt::ForEach(each) = parse_stmt("for (String s : names) print(s);") else {
        panic!("expected foreach");
    };
    assert_eq!(each.variable().unwrap().name().unwrap().text(), Some("s".to_string()));
    assert_eq!(each.iterable().unwrap().text(), "names");
}

#[test]
fn test_try_with_resources() {
    let Stmt::Try(try_stmt) = parse_stmt("try (Reader r = open(); Writer w = out()) { copy(r, w); }") else {
        panic!("expected try");
    };
    assert!(try_stmt.has_resources());
    assert_eq!(try_stmt.catch_clauses().count(), 0);
}

#[test]
fn test_switch_labels() {
    let Stmt::Switch(switch) = parse_stmt("switch (x) { case 1: case 2: f(); break; default: g(); }") else {
        panic!("expected switch");
    };
    let groups: Vec<_> = switch.groups().collect();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].labels().count(), 2);
    assert_eq!(groups[0].statements().count(), 2);
    assert!(groups[1].labels().next().unwrap().is_default());
}

#[test]
fn test_assert_message() {
    let Stmt::Assert(assert_stmt) = parse_stmt("assert ok : \"failed\";") else {
        panic!("expected assert");
    };
    assert_eq!(assert_stmt.condition().unwrap().text(), "ok");
    assert!(assert_stmt.message().is_some());
}

#[test]
fn test_labeled_continue() {
    let Stmt::Labeled(labeled) = parse_stmt("outer: for (;;) { continue outer; }") else {
        panic!("expected labeled statement");
    };
    assert_eq!(labeled.label().unwrap().text(), Some("outer".to_string()));
    let continues: Vec<_> = labeled
        .syntax()
        .descendants()
        .filter_map(ContinueStmt::cast)
        .collect();
    assert_eq!(continues.len(), 1);
    assert_eq!(continues[0].label().unwrap().text(), Some("outer".to_string()));
}
