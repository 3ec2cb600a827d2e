//! Parse context tracking for context-aware error messages
//!
//! Each recovery point in the grammar names its context. The context supplies
//! the wording of diagnostics and the synchronizing tokens for panic-mode recovery.

use crate::parser::SyntaxKind;
use crate::parser::token_set::{self, TokenSet};

/// Represents the current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseContext {
    /// At the top level of a compilation unit
    TopLevel,
    /// Inside a class or interface body
    ClassBody,
    /// Inside an aspect body
    AspectBody,
    /// Inside an enum body
    EnumBody,
    /// Inside an annotation type body
    AnnotationBody,
    /// Inside a block
    Block,
    /// Inside a switch block
    SwitchBlock,
    /// Parsing a formal parameter list
    ParameterList,
    /// Parsing an argument list
    ArgumentList,
    /// Parsing an expression
    Expression,
    /// Parsing a pointcut expression
    Pointcut,
    /// Parsing a pattern list (`(..)`, `args(..)`, `declare precedence`)
    PatternList,
}

impl ParseContext {
    /// Get a human-readable description of this context for error messages
    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "at top level",
            Self::ClassBody => "in class body",
            Self::AspectBody => "in aspect body",
            Self::EnumBody => "in enum body",
            Self::AnnotationBody => "in annotation type body",
            Self::Block => "in block",
            Self::SwitchBlock => "in switch block",
            Self::ParameterList => "in parameter list",
            Self::ArgumentList => "in argument list",
            Self::Expression => "in expression",
            Self::Pointcut => "in pointcut",
            Self::PatternList => "in pattern list",
        }
    }

    /// Get a description of what tokens are expected in this context
    pub fn expected_description(&self) -> &'static str {
        match self {
            Self::TopLevel => "a package, import, or type declaration",
            Self::ClassBody => "a field, method, constructor, or nested type",
            Self::AspectBody => "advice, a pointcut, an inter-type declaration, or a member",
            Self::EnumBody => "an enum constant or member",
            Self::AnnotationBody => "an annotation element or constant",
            Self::Block => "a statement",
            Self::SwitchBlock => "a 'case' or 'default' label",
            Self::ParameterList => "a parameter",
            Self::ArgumentList => "an argument",
            Self::Expression => "an expression",
            Self::Pointcut => "a pointcut primitive or named pointcut",
            Self::PatternList => "a type pattern or '..'",
        }
    }

    /// Get the recovery tokens appropriate for this context
    pub fn recovery_tokens(&self) -> TokenSet {
        match self {
            Self::TopLevel => token_set::TOP_LEVEL_RECOVERY,
            Self::ClassBody | Self::AspectBody | Self::EnumBody | Self::AnnotationBody => {
                token_set::MEMBER_RECOVERY
            }
            Self::Block | Self::SwitchBlock => token_set::STMT_RECOVERY,
            Self::ParameterList | Self::PatternList => TokenSet::new(&[
                SyntaxKind::R_PAREN,
                SyntaxKind::COMMA,
                SyntaxKind::L_BRACE,
                SyntaxKind::SEMICOLON,
            ]),
            Self::ArgumentList | Self::Expression => TokenSet::new(&[
                SyntaxKind::SEMICOLON,
                SyntaxKind::R_PAREN,
                SyntaxKind::R_BRACE,
                SyntaxKind::R_BRACKET,
                SyntaxKind::COMMA,
            ]),
            Self::Pointcut => TokenSet::new(&[
                SyntaxKind::SEMICOLON,
                SyntaxKind::L_BRACE,
                SyntaxKind::R_PAREN,
            ]),
        }
        .with(SyntaxKind::EOF)
    }

    /// Check if this context is a member-level body
    pub fn is_in_body(&self) -> bool {
        matches!(
            self,
            Self::ClassBody | Self::AspectBody | Self::EnumBody | Self::AnnotationBody
        )
    }

    /// Check if this context is a statement-level body
    pub fn is_in_block(&self) -> bool {
        matches!(self, Self::Block | Self::SwitchBlock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_description() {
        assert_eq!(ParseContext::TopLevel.description(), "at top level");
        assert_eq!(ParseContext::AspectBody.description(), "in aspect body");
        assert_eq!(ParseContext::Pointcut.description(), "in pointcut");
    }

    #[test]
    fn test_recovery_tokens() {
        let top = ParseContext::TopLevel.recovery_tokens();
        assert!(top.contains(SyntaxKind::CLASS_KW));
        assert!(top.contains(SyntaxKind::ASPECT_KW));
        assert!(top.contains(SyntaxKind::EOF));

        let block = ParseContext::Block.recovery_tokens();
        assert!(block.contains(SyntaxKind::SEMICOLON));
        assert!(block.contains(SyntaxKind::R_BRACE));
        assert!(block.contains(SyntaxKind::IF_KW));
        assert!(!block.contains(SyntaxKind::IDENT));
    }

    #[test]
    fn test_context_classification() {
        assert!(ParseContext::AspectBody.is_in_body());
        assert!(!ParseContext::Block.is_in_body());
        assert!(ParseContext::SwitchBlock.is_in_block());
    }
}
