//! Rule-based parser for testing individual grammar rules
//!
//! Parses a single grammar construct as a complete input, without wrapping
//! it in a compilation unit. The result is rooted at a `FRAGMENT` node whose
//! first child is the node the rule produced. Input left over after the rule
//! is reported (E0207) and kept in an `ERROR` node, so re-parsing the text of
//! any subtree with its rule reproduces the subtree.
//!
//! # Example
//!
//! ```
//! use weaver::parser::rule_parser::{Rule, parse_rule};
//!
//! let result = parse_rule(Rule::PointcutExpression, "call(* *(..)) && this(t)");
//! assert!(result.is_ok());
//! ```

use super::errors::{ErrorCode, ParseContext, SyntaxError};
use super::grammar::{self, declarations, expressions, patterns, pointcuts, statements, types};
use super::lexer::tokenize;
use super::parser::{Parse, ParseConfig, Parser};
use super::syntax_kind::SyntaxKind;
use super::token_source::{Token, TokenSource, TokenStream, TokenStreamError};
use super::SyntaxNode;

/// Grammar rules that can be parsed individually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    CompilationUnit,
    TypeDeclaration,
    /// A member of a class, interface or enum body
    ClassBodyMember,
    /// A member of an aspect body: advice, pointcuts, inter-type and declare forms included
    AspectBodyMember,
    Block,
    /// A block statement, local variable and type declarations included
    Statement,
    Expression,
    Type,
    PointcutExpression,
    TypePattern,
    MethodPattern,
    ConstructorPattern,
    FieldPattern,
    FormalsPattern,
    ArgsPatternList,
    Annotation,
}

impl Rule {
    /// Human-readable rule name for diagnostics
    pub fn description(&self) -> &'static str {
        match self {
            Self::CompilationUnit => "compilation unit",
            Self::TypeDeclaration => "type declaration",
            Self::ClassBodyMember => "class member",
            Self::AspectBodyMember => "aspect member",
            Self::Block => "block",
            Self::Statement => "statement",
            Self::Expression => "expression",
            Self::Type => "type",
            Self::PointcutExpression => "pointcut expression",
            Self::TypePattern => "type pattern",
            Self::MethodPattern => "method pattern",
            Self::ConstructorPattern => "constructor pattern",
            Self::FieldPattern => "field pattern",
            Self::FormalsPattern => "parameter pattern list",
            Self::ArgsPatternList => "argument pattern list",
            Self::Annotation => "annotation",
        }
    }
}

/// Parse result for a single rule
#[derive(Debug)]
pub struct RuleParseResult {
    /// The parse result with green tree and errors
    pub parse: Parse,
    /// The rule that was parsed
    pub rule: Rule,
    /// The original input
    pub input: String,
}

impl RuleParseResult {
    /// Check if parsing succeeded without errors
    pub fn is_ok(&self) -> bool {
        self.parse.ok()
    }

    /// Get the errors from parsing
    pub fn errors(&self) -> &[SyntaxError] {
        &self.parse.errors
    }

    /// Get the syntax tree root
    pub fn syntax(&self) -> SyntaxNode {
        self.parse.syntax()
    }

    /// The node produced by the rule
    pub fn node(&self) -> Option<SyntaxNode> {
        let root = self.parse.syntax();
        if self.rule == Rule::CompilationUnit {
            return Some(root);
        }
        root.first_child()
    }

    /// Check if the rule consumed the entire input
    pub fn fully_consumed(&self) -> bool {
        let root = self.parse.syntax();
        root.text() == self.input.as_str()
            && !self.parse.errors.iter().any(|e| e.code == ErrorCode::E0207)
    }
}

/// Parse `input` as a single `rule`
pub fn parse_rule(rule: Rule, input: &str) -> RuleParseResult {
    let config = ParseConfig::default();
    let mut stream = match TokenStream::new(tokenize(input)) {
        Ok(stream) => stream,
        Err(err) => unreachable!("the lexer always terminates its stream: {err}"),
    };
    RuleParseResult {
        parse: run_rule(rule, &mut stream, &config),
        rule,
        input: input.to_string(),
    }
}

/// Parse a pre-lexed token sequence as a single `rule`
pub fn parse_rule_tokens(rule: Rule, tokens: Vec<Token>) -> Result<RuleParseResult, TokenStreamError> {
    let input: String = tokens.iter().map(|t| t.text.as_str()).collect();
    let config = ParseConfig::default();
    let mut stream = TokenStream::new(tokens)?;
    Ok(RuleParseResult {
        parse: run_rule(rule, &mut stream, &config),
        rule,
        input,
    })
}

fn run_rule(rule: Rule, source: &mut dyn TokenSource, config: &ParseConfig) -> Parse {
    let mut p = Parser::new(source, config);
    if rule == Rule::CompilationUnit {
        grammar::compilation_unit(&mut p);
        return p.finish();
    }

    p.start_node(SyntaxKind::FRAGMENT);
    match rule {
        Rule::CompilationUnit => {}
        Rule::TypeDeclaration => declarations::parse_type_declaration(&mut p, ParseContext::TopLevel),
        Rule::ClassBodyMember => {
            declarations::parse_member(&mut p, ParseContext::ClassBody);
        }
        Rule::AspectBodyMember => {
            declarations::parse_member(&mut p, ParseContext::AspectBody);
        }
        Rule::Block => statements::parse_block(&mut p),
        Rule::Statement => {
            if !statements::parse_block_statement(&mut p) {
                p.error(
                    ErrorCode::E0501,
                    format!("expected a statement, found {}", p.found_description()),
                );
            }
        }
        Rule::Expression => {
            expressions::expect_expression(&mut p);
        }
        Rule::Type => {
            types::expect_type(&mut p);
        }
        Rule::PointcutExpression => {
            pointcuts::expect_pointcut_expression(&mut p);
        }
        Rule::TypePattern => {
            patterns::expect_type_pattern(&mut p);
        }
        Rule::MethodPattern => patterns::parse_method_pattern(&mut p),
        Rule::ConstructorPattern => patterns::parse_constructor_pattern(&mut p),
        Rule::FieldPattern => patterns::parse_field_pattern(&mut p),
        Rule::FormalsPattern => patterns::parse_formals_pattern(&mut p),
        Rule::ArgsPatternList => patterns::parse_args_pattern_list(&mut p),
        Rule::Annotation => {
            if p.at(SyntaxKind::AT) {
                declarations::parse_annotation(&mut p);
            } else {
                p.error_expected(&[SyntaxKind::AT]);
            }
        }
    }

    if !p.at_end() && !p.is_cancelled() {
        let range = p.current_range();
        p.report(
            ErrorCode::E0207,
            format!(
                "expected end of input after the {}, found {}",
                rule.description(),
                p.found_description()
            ),
            range,
        );
        p.start_node(SyntaxKind::ERROR);
        while !p.at_end() {
            p.bump();
        }
        p.finish_node();
    }
    p.bump_eof();
    p.finish_node();
    p.finish()
}
