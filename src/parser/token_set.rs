//! Bitset of token kinds for O(1) membership tests.
//!
//! Used for recovery (synchronizing) sets and first-sets of grammar rules.

use super::syntax_kind::SyntaxKind;

/// A set of token kinds. Only kinds up to and including `EOF` can be stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet([u128; 2]);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet([0; 2]);

    /// Create a set from a slice of kinds
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    /// Add a token kind to this set (builder for const contexts)
    #[must_use]
    pub const fn with(self, kind: SyntaxKind) -> Self {
        let bit = kind as u16 as usize;
        if bit > SyntaxKind::EOF as u16 as usize {
            return self;
        }
        let mut words = self.0;
        words[bit / 128] |= 1u128 << (bit % 128);
        Self(words)
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self([self.0[0] | other.0[0], self.0[1] | other.0[1]])
    }

    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let bit = kind as u16 as usize;
        bit <= SyntaxKind::EOF as u16 as usize && (self.0[bit / 128] & (1u128 << (bit % 128))) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }

    /// Members in discriminant order
    pub fn iter(&self) -> impl Iterator<Item = SyntaxKind> + '_ {
        (0..=SyntaxKind::EOF as u16)
            .map(|raw| SyntaxKind::from(rowan::SyntaxKind(raw)))
            .filter(move |kind| self.contains(*kind))
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

use SyntaxKind::*;

/// Modifier keywords in any position
pub const MODIFIERS: TokenSet = TokenSet::new(&[
    PUBLIC_KW,
    PROTECTED_KW,
    PRIVATE_KW,
    ABSTRACT_KW,
    STATIC_KW,
    FINAL_KW,
    SYNCHRONIZED_KW,
    NATIVE_KW,
    STRICTFP_KW,
    TRANSIENT_KW,
    VOLATILE_KW,
    PRIVILEGED_KW,
]);

pub const PRIMITIVE_TYPES: TokenSet = TokenSet::new(&[
    BOOLEAN_KW, BYTE_KW, CHAR_KW, SHORT_KW, INT_KW, LONG_KW, FLOAT_KW, DOUBLE_KW,
]);

pub const LITERALS: TokenSet = TokenSet::new(&[
    INT_LITERAL,
    FLOAT_LITERAL,
    CHAR_LITERAL,
    STRING_LITERAL,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
]);

/// Keywords that start a type declaration
pub const TYPE_DECL_START: TokenSet =
    TokenSet::new(&[CLASS_KW, INTERFACE_KW, ENUM_KW, ASPECT_KW]);

/// The twelve assignment operators
pub const ASSIGN_OPS: TokenSet = TokenSet::new(&[
    EQ, PLUS_EQ, MINUS_EQ, STAR_EQ, SLASH_EQ, PERCENT_EQ, AMP_EQ, PIPE_EQ, CARET_EQ, SHL_EQ,
    SHR_EQ, USHR_EQ,
]);

/// Keywords that begin a statement
pub const STMT_START: TokenSet = TokenSet::new(&[
    IF_KW,
    FOR_KW,
    WHILE_KW,
    DO_KW,
    TRY_KW,
    SWITCH_KW,
    RETURN_KW,
    THROW_KW,
    BREAK_KW,
    CONTINUE_KW,
    SYNCHRONIZED_KW,
    ASSERT_KW,
]);

/// Tokens that may follow `(Type)` in a reference-type cast
pub const CAST_FOLLOW: TokenSet = LITERALS
    .union(PRIMITIVE_TYPES)
    .union(TokenSet::new(&[IDENT, L_PAREN, BANG, TILDE, THIS_KW, SUPER_KW, NEW_KW, VOID_KW]));

pub const CLOSING_DELIMITERS: TokenSet = TokenSet::new(&[R_PAREN, R_BRACKET, R_BRACE]);

/// Top-level recovery points
pub const TOP_LEVEL_RECOVERY: TokenSet = MODIFIERS
    .union(TYPE_DECL_START)
    .union(TokenSet::new(&[IMPORT_KW, PACKAGE_KW, AT, SEMICOLON, EOF]));

/// Member boundaries inside class and aspect bodies
pub const MEMBER_RECOVERY: TokenSet = MODIFIERS.union(TYPE_DECL_START).union(TokenSet::new(&[
    POINTCUT_KW,
    DECLARE_KW,
    BEFORE_KW,
    AFTER_KW,
    SEMICOLON,
    R_BRACE,
    EOF,
]));

/// Statement boundaries inside blocks
pub const STMT_RECOVERY: TokenSet = STMT_START
    .union(TYPE_DECL_START)
    .union(TokenSet::new(&[SEMICOLON, L_BRACE, R_BRACE, CASE_KW, DEFAULT_KW, EOF]));

/// Tokens that start a statement, where parsing resumes after a stray token
pub const STMT_RESUME: TokenSet = STMT_RECOVERY
    .union(LITERALS)
    .union(PRIMITIVE_TYPES)
    .union(MODIFIERS)
    .union(TokenSet::new(&[
        THIS_KW, SUPER_KW, NEW_KW, VOID_KW, AT, PLUS_PLUS, MINUS_MINUS,
    ]));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        assert!(TokenSet::EMPTY.is_empty());
        assert!(!TokenSet::EMPTY.contains(SEMICOLON));
    }

    #[test]
    fn test_contains_and_union() {
        let a = TokenSet::new(&[SEMICOLON, IDENT]);
        let b = TokenSet::new(&[WITHINCODE_KW]);
        let u = a.union(b);
        assert!(u.contains(SEMICOLON));
        assert!(u.contains(WITHINCODE_KW));
        assert!(!a.contains(WITHINCODE_KW));
    }

    #[test]
    fn test_statement_resume_set() {
        assert!(STMT_RESUME.contains(INT_KW));
        assert!(STMT_RESUME.contains(RETURN_KW));
        assert!(STMT_RESUME.contains(STRING_LITERAL));
        assert!(!STMT_RESUME.contains(R_PAREN));
        assert!(!STMT_RESUME.contains(ERROR));
    }

    #[test]
    fn test_node_kinds_are_never_members() {
        let set = TokenSet::EMPTY.with(COMPILATION_UNIT);
        assert!(set.is_empty());
        assert!(!set.contains(COMPILATION_UNIT));
    }

    #[test]
    fn test_iter_in_order() {
        let set = TokenSet::new(&[R_PAREN, L_PAREN]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![L_PAREN, R_PAREN]);
    }

    #[test]
    fn test_cast_follow_excludes_additive() {
        assert!(CAST_FOLLOW.contains(IDENT));
        assert!(!CAST_FOLLOW.contains(PLUS));
        assert!(!CAST_FOLLOW.contains(MINUS));
    }
}
