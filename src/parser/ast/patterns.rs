//! Type, member and argument patterns

use super::*;

ast_enum! {
    TypePattern {
        Binary(TypePatternBinary) = TYPE_PATTERN_BINARY,
        Not(TypePatternNot) = TYPE_PATTERN_NOT,
        Paren(TypePatternParen) = TYPE_PATTERN_PAREN,
        Simple(SimpleTypePattern) = SIMPLE_TYPE_PATTERN,
    }
}

impl TypePattern {
    /// Pattern text without trivia, e.g. `com.acme..*Service+`
    pub fn text(&self) -> String {
        compact_text(self.syntax())
    }
}

ast_node!(TypePatternBinary, TYPE_PATTERN_BINARY);

impl TypePatternBinary {
    token_to_enum_method!(op, PointcutOp, [AMP_AMP => And, PIPE_PIPE => Or]);

    pub fn lhs(&self) -> Option<TypePattern> {
        self.0.children().find_map(TypePattern::cast)
    }

    pub fn rhs(&self) -> Option<TypePattern> {
        self.0.children().filter_map(TypePattern::cast).nth(1)
    }
}

ast_node!(TypePatternNot, TYPE_PATTERN_NOT);

impl TypePatternNot {
    first_child_method!(operand, TypePattern);
}

ast_node!(TypePatternParen, TYPE_PATTERN_PAREN);

impl TypePatternParen {
    first_child_method!(inner, TypePattern);
}

ast_node!(SimpleTypePattern, SIMPLE_TYPE_PATTERN);

impl SimpleTypePattern {
    first_child_method!(annotation, AnnotationPattern);
    first_child_method!(name, DottedNamePattern);
    has_token_method!(includes_subtypes, PLUS, "Collection+");
    has_token_method!(is_void, VOID_KW);
    has_token_method!(is_any_sequence, DOT_DOT);

    /// Number of trailing `[]` pairs
    pub fn dimensions(&self) -> usize {
        significant_tokens(&self.0)
            .filter(|t| t.kind() == SyntaxKind::L_BRACKET)
            .count()
    }
}

ast_node!(DottedNamePattern, DOTTED_NAME_PATTERN);

impl DottedNamePattern {
    /// Pattern text without trivia, type arguments included
    pub fn text(&self) -> String {
        compact_text(&self.0)
    }

    /// A lone `*`
    pub fn is_wildcard(&self) -> bool {
        let mut tokens = significant_tokens(&self.0);
        matches!(tokens.next(), Some(t) if t.kind() == SyntaxKind::STAR) && tokens.next().is_none()
    }
}

ast_node!(SimpleNamePattern, SIMPLE_NAME_PATTERN);

impl SimpleNamePattern {
    pub fn text(&self) -> String {
        compact_text(&self.0)
    }
}

ast_node!(AnnotationPattern, ANNOTATION_PATTERN);

impl AnnotationPattern {
    /// Each `@Type` term with its negation flag
    pub fn terms(&self) -> Vec<(bool, String)> {
        let mut terms = Vec::new();
        let mut negated = false;
        for element in self.0.children_with_tokens() {
            match element {
                rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::BANG => negated = true,
                rowan::NodeOrToken::Node(n) => {
                    terms.push((negated, compact_text(&n)));
                    negated = false;
                }
                _ => {}
            }
        }
        terms
    }
}

ast_node!(ModifiersPattern, MODIFIERS_PATTERN);

impl ModifiersPattern {
    /// Required (`true`) and excluded (`false`) modifier keywords
    pub fn modifiers(&self) -> Vec<(bool, SyntaxKind)> {
        let mut result = Vec::new();
        let mut negated = false;
        for token in significant_tokens(&self.0) {
            if token.kind() == SyntaxKind::BANG {
                negated = true;
            } else {
                result.push((!negated, token.kind()));
                negated = false;
            }
        }
        result
    }
}

// ============================================================================
// Member patterns
// ============================================================================

ast_node!(MethodPattern, METHOD_PATTERN);

impl MethodPattern {
    first_child_method!(annotation, AnnotationPattern);
    first_child_method!(modifiers, ModifiersPattern);
    first_child_method!(name, SimpleNamePattern);
    first_child_method!(parameters, FormalsPattern);
    first_child_method!(throws, ThrowsPattern);

    pub fn return_type(&self) -> Option<TypePattern> {
        self.0.children().find_map(TypePattern::cast)
    }

    /// The declaring type, when the member name is qualified
    pub fn declaring_type(&self) -> Option<TypePattern> {
        patterns_before_name(&self.0).into_iter().nth(1)
    }
}

ast_node!(ConstructorPattern, CONSTRUCTOR_PATTERN);

impl ConstructorPattern {
    first_child_method!(annotation, AnnotationPattern);
    first_child_method!(modifiers, ModifiersPattern);
    first_child_method!(parameters, FormalsPattern);
    first_child_method!(throws, ThrowsPattern);

    pub fn declaring_type(&self) -> Option<TypePattern> {
        self.0.children().find_map(TypePattern::cast)
    }
}

ast_node!(FieldPattern, FIELD_PATTERN);

impl FieldPattern {
    first_child_method!(annotation, AnnotationPattern);
    first_child_method!(modifiers, ModifiersPattern);
    first_child_method!(name, SimpleNamePattern);

    pub fn field_type(&self) -> Option<TypePattern> {
        self.0.children().find_map(TypePattern::cast)
    }

    pub fn declaring_type(&self) -> Option<TypePattern> {
        patterns_before_name(&self.0).into_iter().nth(1)
    }
}

/// Type patterns that precede the member name pattern
fn patterns_before_name(node: &SyntaxNode) -> Vec<TypePattern> {
    node.children()
        .take_while(|c| c.kind() != SyntaxKind::SIMPLE_NAME_PATTERN)
        .filter_map(TypePattern::cast)
        .collect()
}

ast_node!(FormalsPattern, FORMALS_PATTERN);

impl FormalsPattern {
    children_method!(formals, FormalPattern);
}

ast_node!(FormalPattern, FORMAL_PATTERN);

impl FormalPattern {
    has_token_method!(is_any_remaining, DOT_DOT, "..");
    has_token_method!(is_varargs, ELLIPSIS, "String...");
    first_child_method!(ty, TypePattern);
}

ast_node!(ThrowsPattern, THROWS_PATTERN);

impl ThrowsPattern {
    children_method!(types, TypePattern);
}

// ============================================================================
// Argument patterns
// ============================================================================

ast_node!(ArgsPatternList, ARGS_PATTERN_LIST);

impl ArgsPatternList {
    children_method!(args, ArgsPattern);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgPatternKind {
    /// `..`, zero or more arguments
    AnyRemaining,
    /// `*`, exactly one argument of any type
    AnySingle,
    /// A type or a binding name, told apart during resolution
    TypeOrIdentifier(TypeOrIdentifier),
}

ast_node!(ArgsPattern, ARGS_PATTERN);

impl ArgsPattern {
    pub fn kind(&self) -> Option<ArgPatternKind> {
        if let Some(inner) = self.0.children().find_map(TypeOrIdentifier::cast) {
            return Some(ArgPatternKind::TypeOrIdentifier(inner));
        }
        match significant_tokens(&self.0).next()?.kind() {
            SyntaxKind::DOT_DOT => Some(ArgPatternKind::AnyRemaining),
            SyntaxKind::STAR => Some(ArgPatternKind::AnySingle),
            _ => None,
        }
    }
}

ast_node!(TypeOrIdentifier, TYPE_OR_IDENTIFIER);

impl TypeOrIdentifier {
    first_child_method!(pattern, SimpleTypePattern);

    pub fn text(&self) -> String {
        compact_text(&self.0)
    }
}

ast_node!(AnnotationOrIdentifier, ANNOTATION_OR_IDENTIFIER);

impl AnnotationOrIdentifier {
    pub fn text(&self) -> String {
        compact_text(&self.0)
    }
}

ast_node!(AnnotationListPattern, ANNOTATION_LIST_PATTERN);

impl AnnotationListPattern {
    children_method!(elements, AnnotationOrIdentifier);
}

ast_node!(TypePatternList, TYPE_PATTERN_LIST);

impl TypePatternList {
    children_method!(patterns, TypePattern);
}
