//! Blocks and statements
//!
//! Every statement boundary inside a block is a recovery and cancellation
//! point. Local variable declarations are told apart from expression
//! statements by a speculative parse (see [`resolver::is_local_var_decl`]).

use super::declarations::{self, LOCAL_MODIFIERS};
use crate::parser::token_set::STMT_RESUME;
use super::*;

/// Block = '{' BlockStatement* '}'
pub(crate) fn parse_block(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::BLOCK);
    if !p.at(SyntaxKind::L_BRACE) {
        p.error_expected(&[SyntaxKind::L_BRACE]);
        p.finish_node();
        return;
    }
    let open = p.bump_range();
    parse_block_statements(p, ParseContext::Block);
    p.expect_closing(SyntaxKind::R_BRACE, open);
    p.finish_node();
}

/// Statement loop shared by blocks and switch groups
///
/// Stops at `}` and, inside a switch, at the next label.
fn parse_block_statements(p: &mut Parser<'_>, context: ParseContext) {
    loop {
        if p.at(SyntaxKind::R_BRACE) || p.at_end() {
            break;
        }
        if context == ParseContext::SwitchBlock && at_switch_label(p) {
            break;
        }
        if p.check_cancelled() {
            break;
        }
        let start = p.pos();
        parse_block_statement(p);
        if p.pos() == start {
            p.err_and_bump(
                ErrorCode::E0501,
                format!("expected a statement, found {}", p.found_description()),
            );
            // A statement right after the stray token is kept
            if p.at_any(STMT_RESUME) || p.at_name() {
                p.resume();
            }
        }
        p.recover(context);
    }
}

/// BlockStatement = LocalTypeDecl | LocalVarDecl ';' | Statement
pub(crate) fn parse_block_statement(p: &mut Parser<'_>) -> bool {
    if resolver::at_local_type_decl(p) {
        let cp = p.checkpoint();
        let mods = declarations::parse_modifiers(p);
        return declarations::parse_type_declaration_rest(p, cp, &mods);
    }
    if resolver::is_local_var_decl(p) {
        p.start_node(SyntaxKind::LOCAL_VAR_DECL);
        parse_local_var_decl_rest(p);
        p.expect_semicolon();
        p.finish_node();
        return true;
    }
    parse_statement(p)
}

/// Modifiers Type VariableDeclarators, inside an already open node
fn parse_local_var_decl_rest(p: &mut Parser<'_>) {
    let mods = declarations::parse_modifiers(p);
    declarations::check_modifiers(p, &mods, LOCAL_MODIFIERS, "a local variable");
    types::expect_type(p);
    declarations::parse_variable_declarators(p);
}

/// A statement where one is required, such as a loop body
fn expect_statement(p: &mut Parser<'_>) {
    if !parse_statement(p) {
        p.error(
            ErrorCode::E0501,
            format!("expected a statement, found {}", p.found_description()),
        );
    }
}

/// Statement; false if nothing was consumed
pub(crate) fn parse_statement(p: &mut Parser<'_>) -> bool {
    p.nested(true, statement)
}

fn statement(p: &mut Parser<'_>) -> bool {
    match p.current() {
        SyntaxKind::L_BRACE => parse_block(p),
        SyntaxKind::SEMICOLON => {
            p.start_node(SyntaxKind::EMPTY_STMT);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::IF_KW => parse_if(p),
        SyntaxKind::FOR_KW => parse_for(p),
        SyntaxKind::WHILE_KW => {
            p.start_node(SyntaxKind::WHILE_STMT);
            p.bump();
            parse_condition(p);
            expect_statement(p);
            p.finish_node();
        }
        SyntaxKind::DO_KW => {
            p.start_node(SyntaxKind::DO_STMT);
            p.bump();
            expect_statement(p);
            if p.expect(SyntaxKind::WHILE_KW) {
                parse_condition(p);
            }
            p.expect_semicolon();
            p.finish_node();
        }
        SyntaxKind::TRY_KW => parse_try(p),
        SyntaxKind::SWITCH_KW => parse_switch(p),
        SyntaxKind::SYNCHRONIZED_KW => {
            p.start_node(SyntaxKind::SYNCHRONIZED_STMT);
            p.bump();
            parse_condition(p);
            parse_block(p);
            p.finish_node();
        }
        SyntaxKind::RETURN_KW => {
            p.start_node(SyntaxKind::RETURN_STMT);
            p.bump();
            if !p.at(SyntaxKind::SEMICOLON) {
                expressions::parse_expression(p);
            }
            p.expect_semicolon();
            p.finish_node();
        }
        SyntaxKind::THROW_KW => {
            p.start_node(SyntaxKind::THROW_STMT);
            p.bump();
            expressions::expect_expression(p);
            p.expect_semicolon();
            p.finish_node();
        }
        SyntaxKind::BREAK_KW | SyntaxKind::CONTINUE_KW => {
            let kind = if p.at(SyntaxKind::BREAK_KW) {
                SyntaxKind::BREAK_STMT
            } else {
                SyntaxKind::CONTINUE_STMT
            };
            p.start_node(kind);
            p.bump();
            if p.at_name() {
                parse_name(p);
            }
            p.expect_semicolon();
            p.finish_node();
        }
        SyntaxKind::ASSERT_KW => {
            p.start_node(SyntaxKind::ASSERT_STMT);
            p.bump();
            expressions::expect_expression(p);
            if p.eat(SyntaxKind::COLON) {
                expressions::expect_expression(p);
            }
            p.expect_semicolon();
            p.finish_node();
        }
        _ if p.at_name() && p.nth_at(1, SyntaxKind::COLON) => {
            p.start_node(SyntaxKind::LABELED_STMT);
            parse_name(p);
            p.bump(); // :
            expect_statement(p);
            p.finish_node();
        }
        _ => {
            let cp = p.checkpoint();
            if !expressions::parse_expression(p) {
                return false;
            }
            p.start_node_at(cp, SyntaxKind::EXPR_STMT);
            p.expect_semicolon();
            p.finish_node();
        }
    }
    true
}

/// '(' Expression ')'
fn parse_condition(p: &mut Parser<'_>) {
    if !p.at(SyntaxKind::L_PAREN) {
        p.error_expected(&[SyntaxKind::L_PAREN]);
        return;
    }
    let open = p.bump_range();
    expressions::expect_expression(p);
    p.expect_closing(SyntaxKind::R_PAREN, open);
}

/// IfStmt = 'if' '(' Expression ')' Statement ('else' Statement)?
///
/// The innermost `if` takes the `else`, because the then-branch is parsed
/// completely before the `else` is looked at.
fn parse_if(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::IF_STMT);
    p.bump();
    parse_condition(p);
    expect_statement(p);
    if p.eat(SyntaxKind::ELSE_KW) {
        expect_statement(p);
    }
    p.finish_node();
}

// =============================================================================
// Loops
// =============================================================================

/// ForStmt     = 'for' '(' ForInit? ';' Expression? ';' ForUpdate? ')' Statement
/// ForEachStmt = 'for' '(' Modifiers Type Name ':' Expression ')' Statement
fn parse_for(p: &mut Parser<'_>) {
    let cp = p.checkpoint();
    p.bump(); // for
    if !p.at(SyntaxKind::L_PAREN) {
        p.start_node_at(cp, SyntaxKind::FOR_STMT);
        p.error(
            ErrorCode::E0503,
            format!("expected '(' after 'for', found {}", p.found_description()),
        );
        p.finish_node();
        return;
    }
    if resolver::is_foreach(p) {
        p.start_node_at(cp, SyntaxKind::FOREACH_STMT);
        let open = p.bump_range();
        declarations::parse_formal_parameter(p);
        p.bump(); // :
        expressions::expect_expression(p);
        p.expect_closing(SyntaxKind::R_PAREN, open);
        expect_statement(p);
        p.finish_node();
        return;
    }

    p.start_node_at(cp, SyntaxKind::FOR_STMT);
    let open = p.bump_range();
    if !p.at(SyntaxKind::SEMICOLON) {
        p.start_node(SyntaxKind::FOR_INIT);
        if resolver::is_local_var_decl(p) {
            p.start_node(SyntaxKind::LOCAL_VAR_DECL);
            parse_local_var_decl_rest(p);
            p.finish_node();
        } else {
            parse_expression_list(p);
        }
        p.finish_node();
    }
    if expect_header_semicolon(p) {
        if !p.at(SyntaxKind::SEMICOLON) {
            expressions::expect_expression(p);
        }
        if expect_header_semicolon(p) && !p.at(SyntaxKind::R_PAREN) {
            p.start_node(SyntaxKind::FOR_UPDATE);
            parse_expression_list(p);
            p.finish_node();
        }
    }
    p.expect_closing(SyntaxKind::R_PAREN, open);
    expect_statement(p);
    p.finish_node();
}

fn expect_header_semicolon(p: &mut Parser<'_>) -> bool {
    if p.eat(SyntaxKind::SEMICOLON) {
        return true;
    }
    let err = p
        .error_builder(ErrorCode::E0503)
        .message(format!(
            "expected ';' in 'for' header, found {}",
            p.found_description()
        ))
        .expected(SyntaxKind::SEMICOLON)
        .build();
    p.push_error(err, true);
    false
}

/// Expression (',' Expression)*
fn parse_expression_list(p: &mut Parser<'_>) {
    loop {
        expressions::expect_expression(p);
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
}

// =============================================================================
// Try
// =============================================================================

/// TryStmt = 'try' ResourceSpec? Block CatchClause* FinallyClause?
///
/// Without resources, at least one `catch` or `finally` is required.
fn parse_try(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::TRY_STMT);
    let try_range = p.bump_range();
    let has_resources = p.at(SyntaxKind::L_PAREN);
    if has_resources {
        parse_resource_spec(p);
    }
    parse_block(p);
    let mut handlers = 0;
    while p.at(SyntaxKind::CATCH_KW) {
        parse_catch_clause(p);
        handlers += 1;
    }
    if p.at(SyntaxKind::FINALLY_KW) {
        p.start_node(SyntaxKind::FINALLY_CLAUSE);
        p.bump();
        parse_block(p);
        p.finish_node();
        handlers += 1;
    }
    if handlers == 0 && !has_resources {
        p.report(
            ErrorCode::E0502,
            "'try' without 'catch', 'finally' or resource declarations",
            try_range,
        );
    }
    p.finish_node();
}

/// ResourceSpec = '(' Resource (';' Resource)* ';'? ')'
fn parse_resource_spec(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::RESOURCE_SPEC);
    let open = p.bump_range();
    loop {
        p.start_node(SyntaxKind::RESOURCE);
        let mods = declarations::parse_modifiers(p);
        declarations::check_modifiers(p, &mods, LOCAL_MODIFIERS, "a resource");
        types::expect_type(p);
        parse_name(p);
        if p.expect(SyntaxKind::EQ) {
            expressions::expect_expression(p);
        }
        p.finish_node();
        if !p.eat(SyntaxKind::SEMICOLON) || p.at(SyntaxKind::R_PAREN) {
            break;
        }
    }
    p.expect_closing(SyntaxKind::R_PAREN, open);
    p.finish_node();
}

/// CatchClause = 'catch' '(' Modifiers Type ('|' Type)* Name ')' Block
fn parse_catch_clause(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::CATCH_CLAUSE);
    p.bump();
    if p.at(SyntaxKind::L_PAREN) {
        let open = p.bump_range();
        p.start_node(SyntaxKind::CATCH_PARAMETER);
        let mods = declarations::parse_modifiers(p);
        declarations::check_modifiers(p, &mods, LOCAL_MODIFIERS, "a catch parameter");
        types::expect_type(p);
        while p.eat(SyntaxKind::PIPE) {
            types::expect_type(p);
        }
        parse_name(p);
        p.finish_node();
        p.expect_closing(SyntaxKind::R_PAREN, open);
    } else {
        p.error_expected(&[SyntaxKind::L_PAREN]);
    }
    parse_block(p);
    p.finish_node();
}

// =============================================================================
// Switch
// =============================================================================

fn at_switch_label(p: &Parser<'_>) -> bool {
    p.at(SyntaxKind::CASE_KW) || (p.at(SyntaxKind::DEFAULT_KW) && p.nth_at(1, SyntaxKind::COLON))
}

/// SwitchStmt  = 'switch' '(' Expression ')' '{' SwitchGroup* '}'
/// SwitchGroup = SwitchLabel+ BlockStatement*
fn parse_switch(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::SWITCH_STMT);
    p.bump();
    parse_condition(p);
    if !p.at(SyntaxKind::L_BRACE) {
        p.error_expected(&[SyntaxKind::L_BRACE]);
        p.finish_node();
        return;
    }
    let open = p.bump_range();
    while !p.at(SyntaxKind::R_BRACE) && !p.at_end() {
        if p.check_cancelled() {
            break;
        }
        if !at_switch_label(p) {
            p.err_and_bump(
                ErrorCode::E0504,
                format!("expected 'case' or 'default', found {}", p.found_description()),
            );
            p.recover(ParseContext::SwitchBlock);
            continue;
        }
        p.start_node(SyntaxKind::SWITCH_GROUP);
        while at_switch_label(p) {
            parse_switch_label(p);
        }
        parse_block_statements(p, ParseContext::SwitchBlock);
        p.finish_node();
    }
    p.expect_closing(SyntaxKind::R_BRACE, open);
    p.finish_node();
}

/// SwitchLabel = 'case' Expression ':' | 'default' ':'
fn parse_switch_label(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::SWITCH_LABEL);
    if p.eat(SyntaxKind::CASE_KW) {
        expressions::expect_expression(p);
    } else {
        p.bump(); // default
    }
    if !p.eat(SyntaxKind::COLON) {
        p.error(
            ErrorCode::E0504,
            format!("expected ':' after switch label, found {}", p.found_description()),
        );
    }
    p.finish_node();
}

#[cfg(test)]
mod tests {
    use crate::parser::rule_parser::{Rule, parse_rule};
    use crate::parser::syntax_kind::SyntaxKind;

    fn stmt_kind(text: &str) -> SyntaxKind {
        let result = parse_rule(Rule::Statement, text);
        assert!(result.is_ok(), "{text}: {:?}", result.errors());
        result.node().expect("statement node").kind()
    }

    #[test]
    fn test_statement_kinds() {
        assert_eq!(stmt_kind("int x = 1;"), SyntaxKind::LOCAL_VAR_DECL);
        assert_eq!(stmt_kind("x = 1;"), SyntaxKind::EXPR_STMT);
        assert_eq!(stmt_kind("List<String> xs;"), SyntaxKind::LOCAL_VAR_DECL);
        assert_eq!(stmt_kind("a < b;"), SyntaxKind::EXPR_STMT);
        assert_eq!(stmt_kind("outer: x++;"), SyntaxKind::LABELED_STMT);
        assert_eq!(stmt_kind("for (String s : xs) f(s);"), SyntaxKind::FOREACH_STMT);
        assert_eq!(stmt_kind("for (int i = 0; i < n; i++) {}"), SyntaxKind::FOR_STMT);
        assert_eq!(stmt_kind("for (;;) {}"), SyntaxKind::FOR_STMT);
    }

    #[test]
    fn test_try_requires_handler() {
        let result = parse_rule(Rule::Statement, "try { f(); }");
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].code.as_str(), "E0502");
        assert!(parse_rule(Rule::Statement, "try (Reader r = open()) { }").is_ok());
    }

    #[test]
    fn test_multi_catch() {
        let result = parse_rule(
            Rule::Statement,
            "try { f(); } catch (IOException | RuntimeException e) { } finally { }",
        );
        assert!(result.is_ok(), "{:?}", result.errors());
        let node = result.node().expect("try");
        let clauses: Vec<_> = node
            .children()
            .filter(|n| n.kind() == SyntaxKind::CATCH_CLAUSE)
            .collect();
        assert_eq!(clauses.len(), 1);
    }

    #[test]
    fn test_switch_groups() {
        let result = parse_rule(
            Rule::Statement,
            "switch (x) { case 1: case 2: f(); break; default: g(); }",
        );
        assert!(result.is_ok(), "{:?}", result.errors());
        let groups = result
            .node()
            .expect("switch")
            .children()
            .filter(|n| n.kind() == SyntaxKind::SWITCH_GROUP)
            .count();
        assert_eq!(groups, 2);
    }
}
