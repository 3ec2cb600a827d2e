//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Token kinds come first so that every token fits in a [`TokenSet`](super::TokenSet).

/// All syntax kinds (tokens and nodes) of the language
///
/// Tokens are leaves (identifiers, keywords, literals, punctuation).
/// Nodes are composite (declarations, statements, expressions, pointcuts, patterns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,
    INT_LITERAL,    // 42, 0x2A, 42L
    FLOAT_LITERAL,  // 3.14, 1e10f
    CHAR_LITERAL,   // 'a'
    STRING_LITERAL, // "hello"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,     // {
    R_BRACE,     // }
    L_PAREN,     // (
    R_PAREN,     // )
    L_BRACKET,   // [
    R_BRACKET,   // ]
    SEMICOLON,   // ;
    COMMA,       // ,
    DOT,         // .
    DOT_DOT,     // ..
    ELLIPSIS,    // ...
    AT,          // @
    COLON,       // :
    QUESTION,    // ?
    EQ,          // =
    EQ_EQ,       // ==
    BANG_EQ,     // !=
    LT,          // <
    GT,          // >
    LT_EQ,       // <=
    GT_EQ,       // >=
    BANG,        // !
    TILDE,       // ~
    PLUS,        // +
    MINUS,       // -
    STAR,        // *
    SLASH,       // /
    PERCENT,     // %
    AMP,         // &
    PIPE,        // |
    CARET,       // ^
    AMP_AMP,     // &&
    PIPE_PIPE,   // ||
    PLUS_PLUS,   // ++
    MINUS_MINUS, // --
    PLUS_EQ,     // +=
    MINUS_EQ,    // -=
    STAR_EQ,     // *=
    SLASH_EQ,    // /=
    PERCENT_EQ,  // %=
    AMP_EQ,      // &=
    PIPE_EQ,     // |=
    CARET_EQ,    // ^=
    SHL_EQ,      // <<=
    SHR_EQ,      // >>=
    USHR_EQ,     // >>>=

    // =========================================================================
    // KEYWORDS - Java
    // =========================================================================
    ABSTRACT_KW,
    ASSERT_KW,
    BOOLEAN_KW,
    BREAK_KW,
    BYTE_KW,
    CASE_KW,
    CATCH_KW,
    CHAR_KW,
    CLASS_KW,
    CONST_KW,
    CONTINUE_KW,
    DEFAULT_KW,
    DO_KW,
    DOUBLE_KW,
    ELSE_KW,
    ENUM_KW,
    EXTENDS_KW,
    FINAL_KW,
    FINALLY_KW,
    FLOAT_KW,
    FOR_KW,
    GOTO_KW,
    IF_KW,
    IMPLEMENTS_KW,
    IMPORT_KW,
    INSTANCEOF_KW,
    INT_KW,
    INTERFACE_KW,
    LONG_KW,
    NATIVE_KW,
    NEW_KW,
    PACKAGE_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    PUBLIC_KW,
    RETURN_KW,
    SHORT_KW,
    STATIC_KW,
    STRICTFP_KW,
    SUPER_KW,
    SWITCH_KW,
    SYNCHRONIZED_KW,
    THIS_KW,
    THROW_KW,
    THROWS_KW,
    TRANSIENT_KW,
    TRY_KW,
    VOID_KW,
    VOLATILE_KW,
    WHILE_KW,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,

    // =========================================================================
    // KEYWORDS - aspects (contextual: also usable as identifiers)
    // =========================================================================
    ADVICEEXECUTION_KW,
    ANNOTATION_KW,
    ARGS_KW,
    AFTER_KW,
    AROUND_KW,
    ASPECT_KW,
    BEFORE_KW,
    CALL_KW,
    CFLOW_KW,
    CFLOWBELOW_KW,
    DECLARE_KW,
    ERROR_KW,
    EXECUTION_KW,
    GET_KW,
    HANDLER_KW,
    INITIALIZATION_KW,
    ISSINGLETON_KW,
    PARENTS_KW,
    PERCFLOW_KW,
    PERCFLOWBELOW_KW,
    PERTARGET_KW,
    PERTHIS_KW,
    PERTYPEWITHIN_KW,
    POINTCUT_KW,
    PRECEDENCE_KW,
    PREINITIALIZATION_KW,
    PRIVILEGED_KW,
    RETURNING_KW,
    SET_KW,
    SOFT_KW,
    STATICINITIALIZATION_KW,
    TARGET_KW,
    THROWING_KW,
    WARNING_KW,
    WITHIN_KW,
    WITHINCODE_KW,

    /// End-of-input marker; always the last token of a stream
    EOF,

    // =========================================================================
    // NODES - declarations
    // =========================================================================
    COMPILATION_UNIT,
    PACKAGE_DECL,
    IMPORT_DECL,
    MODIFIER_LIST,
    ANNOTATION,
    ANNOTATION_ARGS,
    ELEMENT_VALUE_PAIR,
    ELEMENT_VALUE_ARRAY,
    NAME,
    CLASS_DECL,
    INTERFACE_DECL,
    ENUM_DECL,
    ANNOTATION_TYPE_DECL,
    ASPECT_DECL,
    EMPTY_DECL,
    TYPE_PARAMETERS,
    TYPE_PARAMETER,
    TYPE_BOUND,
    EXTENDS_CLAUSE,
    IMPLEMENTS_CLAUSE,
    CLASS_BODY,
    ENUM_BODY,
    ENUM_CONSTANT,
    ANNOTATION_METHOD,
    DEFAULT_VALUE,
    METHOD_DECL,
    CONSTRUCTOR_DECL,
    FIELD_DECL,
    VARIABLE_DECLARATOR,
    ARRAY_INITIALIZER,
    FORMAL_PARAMETERS,
    FORMAL_PARAMETER,
    THROWS_CLAUSE,
    INITIALIZER_BLOCK,
    DIMS,

    // =========================================================================
    // NODES - aspects
    // =========================================================================
    ASPECT_BODY,
    PER_CLAUSE,
    ADVICE_DECL,
    ADVICE_SPEC,
    ADVICE_RETURNING,
    ADVICE_THROWING,
    POINTCUT_DECL,
    INTER_TYPE_METHOD,
    INTER_TYPE_CONSTRUCTOR,
    INTER_TYPE_FIELD,
    INTER_TYPE_TARGET,
    DECLARE_PARENTS,
    DECLARE_WARNING,
    DECLARE_ERROR,
    DECLARE_SOFT,
    DECLARE_PRECEDENCE,
    DECLARE_ANNOTATION,

    // =========================================================================
    // NODES - types
    // =========================================================================
    PRIMITIVE_TYPE,
    CLASS_TYPE,
    TYPE_ARGUMENTS,
    TYPE_ARGUMENT,
    WILDCARD_TYPE,
    ARRAY_TYPE,
    QUALIFIED_NAME,
    TYPE_LIST,

    // =========================================================================
    // NODES - statements
    // =========================================================================
    BLOCK,
    LOCAL_VAR_DECL,
    IF_STMT,
    FOR_STMT,
    FOR_INIT,
    FOR_UPDATE,
    FOREACH_STMT,
    WHILE_STMT,
    DO_STMT,
    TRY_STMT,
    RESOURCE_SPEC,
    RESOURCE,
    CATCH_CLAUSE,
    CATCH_PARAMETER,
    FINALLY_CLAUSE,
    SWITCH_STMT,
    SWITCH_GROUP,
    SWITCH_LABEL,
    SYNCHRONIZED_STMT,
    RETURN_STMT,
    THROW_STMT,
    BREAK_STMT,
    CONTINUE_STMT,
    EMPTY_STMT,
    EXPR_STMT,
    LABELED_STMT,
    ASSERT_STMT,

    // =========================================================================
    // NODES - expressions
    // =========================================================================
    ASSIGN_EXPR,
    CONDITIONAL_EXPR,
    BINARY_EXPR,
    INSTANCEOF_EXPR,
    PREFIX_EXPR,
    POSTFIX_EXPR,
    CAST_EXPR,
    PAREN_EXPR,
    LITERAL,
    NAME_REF,
    THIS_EXPR,
    SUPER_EXPR,
    CLASS_LITERAL,
    FIELD_ACCESS,
    METHOD_CALL,
    ARRAY_ACCESS,
    ARGUMENT_LIST,
    NEW_EXPR,
    ARRAY_CREATION,
    DIM_EXPR,
    QUALIFIED_THIS,
    QUALIFIED_SUPER,
    INNER_CREATION,

    // =========================================================================
    // NODES - pointcuts
    // =========================================================================
    POINTCUT_BINARY,
    POINTCUT_NOT,
    POINTCUT_PAREN,
    POINTCUT_PRIMITIVE,
    REFERENCE_POINTCUT,

    // =========================================================================
    // NODES - patterns
    // =========================================================================
    TYPE_PATTERN_BINARY,
    TYPE_PATTERN_NOT,
    TYPE_PATTERN_PAREN,
    SIMPLE_TYPE_PATTERN,
    DOTTED_NAME_PATTERN,
    ANNOTATION_PATTERN,
    MODIFIERS_PATTERN,
    METHOD_PATTERN,
    CONSTRUCTOR_PATTERN,
    FIELD_PATTERN,
    SIMPLE_NAME_PATTERN,
    FORMALS_PATTERN,
    FORMAL_PATTERN,
    ARGS_PATTERN_LIST,
    ARGS_PATTERN,
    THROWS_PATTERN,
    TYPE_PATTERN_LIST,
    ANNOTATION_OR_IDENTIFIER,
    ANNOTATION_LIST_PATTERN,
    TYPE_OR_IDENTIFIER,

    // Root of a single-rule parse (see `rule_parser`)
    FRAGMENT,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a token kind (as opposed to a node kind)
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16) || self == Self::ERROR
    }

    /// Reserved Java keyword (including `true`, `false`, `null`)
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::ABSTRACT_KW as u16) && (self as u16) <= (Self::NULL_KW as u16)
    }

    /// Aspect keyword; these never reserve the word and may appear wherever a name may
    pub fn is_contextual_keyword(self) -> bool {
        (self as u16) >= (Self::ADVICEEXECUTION_KW as u16)
            && (self as u16) <= (Self::WITHINCODE_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::USHR_EQ as u16)
    }

    /// Check if this is a literal token
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INT_LITERAL
                | Self::FLOAT_LITERAL
                | Self::CHAR_LITERAL
                | Self::STRING_LITERAL
                | Self::TRUE_KW
                | Self::FALSE_KW
                | Self::NULL_KW
        )
    }

    /// Tokens usable as a name: identifiers and aspect keywords
    pub fn is_name(self) -> bool {
        self == Self::IDENT || self.is_contextual_keyword()
    }

    /// `boolean`, `byte`, `char`, `short`, `int`, `long`, `float`, `double`
    pub fn is_primitive_type(self) -> bool {
        matches!(
            self,
            Self::BOOLEAN_KW
                | Self::BYTE_KW
                | Self::CHAR_KW
                | Self::SHORT_KW
                | Self::INT_KW
                | Self::LONG_KW
                | Self::FLOAT_KW
                | Self::DOUBLE_KW
        )
    }

    /// Source spelling of a token kind, for diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::LINE_COMMENT | Self::BLOCK_COMMENT => "comment",
            Self::IDENT => "identifier",
            Self::INT_LITERAL => "integer literal",
            Self::FLOAT_LITERAL => "floating-point literal",
            Self::CHAR_LITERAL => "character literal",
            Self::STRING_LITERAL => "string literal",
            Self::L_BRACE => "'{'",
            Self::R_BRACE => "'}'",
            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::L_BRACKET => "'['",
            Self::R_BRACKET => "']'",
            Self::SEMICOLON => "';'",
            Self::COMMA => "','",
            Self::DOT => "'.'",
            Self::DOT_DOT => "'..'",
            Self::ELLIPSIS => "'...'",
            Self::AT => "'@'",
            Self::COLON => "':'",
            Self::QUESTION => "'?'",
            Self::EQ => "'='",
            Self::EQ_EQ => "'=='",
            Self::BANG_EQ => "'!='",
            Self::LT => "'<'",
            Self::GT => "'>'",
            Self::LT_EQ => "'<='",
            Self::GT_EQ => "'>='",
            Self::BANG => "'!'",
            Self::TILDE => "'~'",
            Self::PLUS => "'+'",
            Self::MINUS => "'-'",
            Self::STAR => "'*'",
            Self::SLASH => "'/'",
            Self::PERCENT => "'%'",
            Self::AMP => "'&'",
            Self::PIPE => "'|'",
            Self::CARET => "'^'",
            Self::AMP_AMP => "'&&'",
            Self::PIPE_PIPE => "'||'",
            Self::PLUS_PLUS => "'++'",
            Self::MINUS_MINUS => "'--'",
            Self::PLUS_EQ => "'+='",
            Self::MINUS_EQ => "'-='",
            Self::STAR_EQ => "'*='",
            Self::SLASH_EQ => "'/='",
            Self::PERCENT_EQ => "'%='",
            Self::AMP_EQ => "'&='",
            Self::PIPE_EQ => "'|='",
            Self::CARET_EQ => "'^='",
            Self::SHL_EQ => "'<<='",
            Self::SHR_EQ => "'>>='",
            Self::USHR_EQ => "'>>>='",
            Self::EOF => "end of input",
            kind if kind.is_keyword() || kind.is_contextual_keyword() => kind.keyword_text(),
            _ => "syntax",
        }
    }

    /// Keyword spelling, or the empty string for non-keywords
    pub fn keyword_text(self) -> &'static str {
        match self {
            Self::ABSTRACT_KW => "abstract",
            Self::ASSERT_KW => "assert",
            Self::BOOLEAN_KW => "boolean",
            Self::BREAK_KW => "break",
            Self::BYTE_KW => "byte",
            Self::CASE_KW => "case",
            Self::CATCH_KW => "catch",
            Self::CHAR_KW => "char",
            Self::CLASS_KW => "class",
            Self::CONST_KW => "const",
            Self::CONTINUE_KW => "continue",
            Self::DEFAULT_KW => "default",
            Self::DO_KW => "do",
            Self::DOUBLE_KW => "double",
            Self::ELSE_KW => "else",
            Self::ENUM_KW => "enum",
            Self::EXTENDS_KW => "extends",
            Self::FINAL_KW => "final",
            Self::FINALLY_KW => "finally",
            Self::FLOAT_KW => "float",
            Self::FOR_KW => "for",
            Self::GOTO_KW => "goto",
            Self::IF_KW => "if",
            Self::IMPLEMENTS_KW => "implements",
            Self::IMPORT_KW => "import",
            Self::INSTANCEOF_KW => "instanceof",
            Self::INT_KW => "int",
            Self::INTERFACE_KW => "interface",
            Self::LONG_KW => "long",
            Self::NATIVE_KW => "native",
            Self::NEW_KW => "new",
            Self::PACKAGE_KW => "package",
            Self::PRIVATE_KW => "private",
            Self::PROTECTED_KW => "protected",
            Self::PUBLIC_KW => "public",
            Self::RETURN_KW => "return",
            Self::SHORT_KW => "short",
            Self::STATIC_KW => "static",
            Self::STRICTFP_KW => "strictfp",
            Self::SUPER_KW => "super",
            Self::SWITCH_KW => "switch",
            Self::SYNCHRONIZED_KW => "synchronized",
            Self::THIS_KW => "this",
            Self::THROW_KW => "throw",
            Self::THROWS_KW => "throws",
            Self::TRANSIENT_KW => "transient",
            Self::TRY_KW => "try",
            Self::VOID_KW => "void",
            Self::VOLATILE_KW => "volatile",
            Self::WHILE_KW => "while",
            Self::TRUE_KW => "true",
            Self::FALSE_KW => "false",
            Self::NULL_KW => "null",
            Self::ADVICEEXECUTION_KW => "adviceexecution",
            Self::ANNOTATION_KW => "annotation",
            Self::ARGS_KW => "args",
            Self::AFTER_KW => "after",
            Self::AROUND_KW => "around",
            Self::ASPECT_KW => "aspect",
            Self::BEFORE_KW => "before",
            Self::CALL_KW => "call",
            Self::CFLOW_KW => "cflow",
            Self::CFLOWBELOW_KW => "cflowbelow",
            Self::DECLARE_KW => "declare",
            Self::ERROR_KW => "error",
            Self::EXECUTION_KW => "execution",
            Self::GET_KW => "get",
            Self::HANDLER_KW => "handler",
            Self::INITIALIZATION_KW => "initialization",
            Self::ISSINGLETON_KW => "issingleton",
            Self::PARENTS_KW => "parents",
            Self::PERCFLOW_KW => "percflow",
            Self::PERCFLOWBELOW_KW => "percflowbelow",
            Self::PERTARGET_KW => "pertarget",
            Self::PERTHIS_KW => "perthis",
            Self::PERTYPEWITHIN_KW => "pertypewithin",
            Self::POINTCUT_KW => "pointcut",
            Self::PRECEDENCE_KW => "precedence",
            Self::PREINITIALIZATION_KW => "preinitialization",
            Self::PRIVILEGED_KW => "privileged",
            Self::RETURNING_KW => "returning",
            Self::SET_KW => "set",
            Self::SOFT_KW => "soft",
            Self::STATICINITIALIZATION_KW => "staticinitialization",
            Self::TARGET_KW => "target",
            Self::THROWING_KW => "throwing",
            Self::WARNING_KW => "warning",
            Self::WITHIN_KW => "within",
            Self::WITHINCODE_KW => "withincode",
            _ => "",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AspectLanguage {}

impl rowan::Language for AspectLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<AspectLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<AspectLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<AspectLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<AspectLanguage>;
