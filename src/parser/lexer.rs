//! Logos-based reference lexer
//!
//! Produces the token stream the parser consumes. Trivia is kept so the tree
//! stays lossless; `<` and `>` are never merged into shift operators.

use super::syntax_kind::SyntaxKind;
use super::token_source::Token;
use crate::base::LineIndex;
use logos::Logos;
use rowan::{TextRange, TextSize};

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    line_index: LineIndex,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            line_index: LineIndex::new(input),
        }
    }

    /// End-of-input token positioned after the last character
    fn eof_token(&self) -> Token {
        let end = TextSize::of(self.inner.source());
        Token::new(SyntaxKind::EOF, "", TextRange::empty(end), self.line_index.line_col(end))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();
        let range = TextRange::new(TextSize::new(span.start as u32), TextSize::new(span.end as u32));

        let kind = match logos_token {
            Ok(LogosToken::Ident) if !is_java_identifier(text) => SyntaxKind::ERROR,
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token::new(kind, text, range, self.line_index.line_col(range.start())))
    }
}

/// Tokenize an entire string, appending the end-of-input token
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens: Vec<Token> = lexer.by_ref().collect();
    tokens.push(lexer.eof_token());
    tokens
}

/// Unicode check for identifiers that contain non-ASCII characters
fn is_java_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let start_ok = first == '$' || first == '_' || unicode_ident::is_xid_start(first);
    start_ok && chars.all(|c| c == '$' || unicode_ident::is_xid_continue(c))
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    UnterminatedComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"([a-zA-Z_$]|[^\x00-\x7F])([a-zA-Z0-9_$]|[^\x00-\x7F])*")]
    Ident,

    #[regex(r"[0-9][0-9_]*[lL]?")]
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    #[regex(r"0[bB][01_]+[lL]?")]
    IntLiteral,

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9_]+)?[fFdD]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9_]+[fFdD]?")]
    #[regex(r"[0-9][0-9_]*[fFdD]")]
    #[regex(r"0[xX][0-9a-fA-F_]*\.?[0-9a-fA-F_]*[pP][+-]?[0-9_]+[fFdD]?")]
    FloatLiteral,

    #[regex(r"'([^'\\\r\n]|\\[^\r\n])*'")]
    CharLiteral,

    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#)]
    StringLiteral,

    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*"#)]
    UnterminatedString,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("...")]
    Ellipsis,
    #[token("..")]
    DotDot,
    #[token(">>>=")]
    UshrEq,
    #[token(">>=")]
    ShrEq,
    #[token("<<=")]
    ShlEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,

    // =========================================================================
    // KEYWORDS - Java
    // =========================================================================
    #[token("abstract")]
    AbstractKw,
    #[token("assert")]
    AssertKw,
    #[token("boolean")]
    BooleanKw,
    #[token("break")]
    BreakKw,
    #[token("byte")]
    ByteKw,
    #[token("case")]
    CaseKw,
    #[token("catch")]
    CatchKw,
    #[token("char")]
    CharKw,
    #[token("class")]
    ClassKw,
    #[token("const")]
    ConstKw,
    #[token("continue")]
    ContinueKw,
    #[token("default")]
    DefaultKw,
    #[token("do")]
    DoKw,
    #[token("double")]
    DoubleKw,
    #[token("else")]
    ElseKw,
    #[token("enum")]
    EnumKw,
    #[token("extends")]
    ExtendsKw,
    #[token("final")]
    FinalKw,
    #[token("finally")]
    FinallyKw,
    #[token("float")]
    FloatKw,
    #[token("for")]
    ForKw,
    #[token("goto")]
    GotoKw,
    #[token("if")]
    IfKw,
    #[token("implements")]
    ImplementsKw,
    #[token("import")]
    ImportKw,
    #[token("instanceof")]
    InstanceofKw,
    #[token("int")]
    IntKw,
    #[token("interface")]
    InterfaceKw,
    #[token("long")]
    LongKw,
    #[token("native")]
    NativeKw,
    #[token("new")]
    NewKw,
    #[token("package")]
    PackageKw,
    #[token("private")]
    PrivateKw,
    #[token("protected")]
    ProtectedKw,
    #[token("public")]
    PublicKw,
    #[token("return")]
    ReturnKw,
    #[token("short")]
    ShortKw,
    #[token("static")]
    StaticKw,
    #[token("strictfp")]
    StrictfpKw,
    #[token("super")]
    SuperKw,
    #[token("switch")]
    SwitchKw,
    #[token("synchronized")]
    SynchronizedKw,
    #[token("this")]
    ThisKw,
    #[token("throw")]
    ThrowKw,
    #[token("throws")]
    ThrowsKw,
    #[token("transient")]
    TransientKw,
    #[token("try")]
    TryKw,
    #[token("void")]
    VoidKw,
    #[token("volatile")]
    VolatileKw,
    #[token("while")]
    WhileKw,
    #[token("true")]
    TrueKw,
    #[token("false")]
    FalseKw,
    #[token("null")]
    NullKw,

    // =========================================================================
    // KEYWORDS - aspects
    // =========================================================================
    #[token("adviceexecution")]
    AdviceexecutionKw,
    #[token("annotation")]
    AnnotationKw,
    #[token("args")]
    ArgsKw,
    #[token("after")]
    AfterKw,
    #[token("around")]
    AroundKw,
    #[token("aspect")]
    AspectKw,
    #[token("before")]
    BeforeKw,
    #[token("call")]
    CallKw,
    #[token("cflow")]
    CflowKw,
    #[token("cflowbelow")]
    CflowbelowKw,
    #[token("declare")]
    DeclareKw,
    #[token("error")]
    ErrorKw,
    #[token("execution")]
    ExecutionKw,
    #[token("get")]
    GetKw,
    #[token("handler")]
    HandlerKw,
    #[token("initialization")]
    InitializationKw,
    #[token("issingleton")]
    IssingletonKw,
    #[token("parents")]
    ParentsKw,
    #[token("percflow")]
    PercflowKw,
    #[token("percflowbelow")]
    PercflowbelowKw,
    #[token("pertarget")]
    PertargetKw,
    #[token("perthis")]
    PerthisKw,
    #[token("pertypewithin")]
    PertypewithinKw,
    #[token("pointcut")]
    PointcutKw,
    #[token("precedence")]
    PrecedenceKw,
    #[token("preinitialization")]
    PreinitializationKw,
    #[token("privileged")]
    PrivilegedKw,
    #[token("returning")]
    ReturningKw,
    #[token("set")]
    SetKw,
    #[token("soft")]
    SoftKw,
    #[token("staticinitialization")]
    StaticinitializationKw,
    #[token("target")]
    TargetKw,
    #[token("throwing")]
    ThrowingKw,
    #[token("warning")]
    WarningKw,
    #[token("within")]
    WithinKw,
    #[token("withincode")]
    WithincodeKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,
            UnterminatedComment | UnterminatedString => SyntaxKind::ERROR,
            Ident => SyntaxKind::IDENT,
            IntLiteral => SyntaxKind::INT_LITERAL,
            FloatLiteral => SyntaxKind::FLOAT_LITERAL,
            CharLiteral => SyntaxKind::CHAR_LITERAL,
            StringLiteral => SyntaxKind::STRING_LITERAL,

            Ellipsis => SyntaxKind::ELLIPSIS,
            DotDot => SyntaxKind::DOT_DOT,
            UshrEq => SyntaxKind::USHR_EQ,
            ShrEq => SyntaxKind::SHR_EQ,
            ShlEq => SyntaxKind::SHL_EQ,
            EqEq => SyntaxKind::EQ_EQ,
            BangEq => SyntaxKind::BANG_EQ,
            LtEq => SyntaxKind::LT_EQ,
            GtEq => SyntaxKind::GT_EQ,
            AmpAmp => SyntaxKind::AMP_AMP,
            PipePipe => SyntaxKind::PIPE_PIPE,
            PlusPlus => SyntaxKind::PLUS_PLUS,
            MinusMinus => SyntaxKind::MINUS_MINUS,
            PlusEq => SyntaxKind::PLUS_EQ,
            MinusEq => SyntaxKind::MINUS_EQ,
            StarEq => SyntaxKind::STAR_EQ,
            SlashEq => SyntaxKind::SLASH_EQ,
            PercentEq => SyntaxKind::PERCENT_EQ,
            AmpEq => SyntaxKind::AMP_EQ,
            PipeEq => SyntaxKind::PIPE_EQ,
            CaretEq => SyntaxKind::CARET_EQ,

            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            Semicolon => SyntaxKind::SEMICOLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            At => SyntaxKind::AT,
            Colon => SyntaxKind::COLON,
            Question => SyntaxKind::QUESTION,
            Eq => SyntaxKind::EQ,
            Lt => SyntaxKind::LT,
            Gt => SyntaxKind::GT,
            Bang => SyntaxKind::BANG,
            Tilde => SyntaxKind::TILDE,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Slash => SyntaxKind::SLASH,
            Percent => SyntaxKind::PERCENT,
            Amp => SyntaxKind::AMP,
            Pipe => SyntaxKind::PIPE,
            Caret => SyntaxKind::CARET,

            AbstractKw => SyntaxKind::ABSTRACT_KW,
            AssertKw => SyntaxKind::ASSERT_KW,
            BooleanKw => SyntaxKind::BOOLEAN_KW,
            BreakKw => SyntaxKind::BREAK_KW,
            ByteKw => SyntaxKind::BYTE_KW,
            CaseKw => SyntaxKind::CASE_KW,
            CatchKw => SyntaxKind::CATCH_KW,
            CharKw => SyntaxKind::CHAR_KW,
            ClassKw => SyntaxKind::CLASS_KW,
            ConstKw => SyntaxKind::CONST_KW,
            ContinueKw => SyntaxKind::CONTINUE_KW,
            DefaultKw => SyntaxKind::DEFAULT_KW,
            DoKw => SyntaxKind::DO_KW,
            DoubleKw => SyntaxKind::DOUBLE_KW,
            ElseKw => SyntaxKind::ELSE_KW,
            EnumKw => SyntaxKind::ENUM_KW,
            ExtendsKw => SyntaxKind::EXTENDS_KW,
            FinalKw => SyntaxKind::FINAL_KW,
            FinallyKw => SyntaxKind::FINALLY_KW,
            FloatKw => SyntaxKind::FLOAT_KW,
            ForKw => SyntaxKind::FOR_KW,
            GotoKw => SyntaxKind::GOTO_KW,
            IfKw => SyntaxKind::IF_KW,
            ImplementsKw => SyntaxKind::IMPLEMENTS_KW,
            ImportKw => SyntaxKind::IMPORT_KW,
            InstanceofKw => SyntaxKind::INSTANCEOF_KW,
            IntKw => SyntaxKind::INT_KW,
            InterfaceKw => SyntaxKind::INTERFACE_KW,
            LongKw => SyntaxKind::LONG_KW,
            NativeKw => SyntaxKind::NATIVE_KW,
            NewKw => SyntaxKind::NEW_KW,
            PackageKw => SyntaxKind::PACKAGE_KW,
            PrivateKw => SyntaxKind::PRIVATE_KW,
            ProtectedKw => SyntaxKind::PROTECTED_KW,
            PublicKw => SyntaxKind::PUBLIC_KW,
            ReturnKw => SyntaxKind::RETURN_KW,
            ShortKw => SyntaxKind::SHORT_KW,
            StaticKw => SyntaxKind::STATIC_KW,
            StrictfpKw => SyntaxKind::STRICTFP_KW,
            SuperKw => SyntaxKind::SUPER_KW,
            SwitchKw => SyntaxKind::SWITCH_KW,
            SynchronizedKw => SyntaxKind::SYNCHRONIZED_KW,
            ThisKw => SyntaxKind::THIS_KW,
            ThrowKw => SyntaxKind::THROW_KW,
            ThrowsKw => SyntaxKind::THROWS_KW,
            TransientKw => SyntaxKind::TRANSIENT_KW,
            TryKw => SyntaxKind::TRY_KW,
            VoidKw => SyntaxKind::VOID_KW,
            VolatileKw => SyntaxKind::VOLATILE_KW,
            WhileKw => SyntaxKind::WHILE_KW,
            TrueKw => SyntaxKind::TRUE_KW,
            FalseKw => SyntaxKind::FALSE_KW,
            NullKw => SyntaxKind::NULL_KW,

            AdviceexecutionKw => SyntaxKind::ADVICEEXECUTION_KW,
            AnnotationKw => SyntaxKind::ANNOTATION_KW,
            ArgsKw => SyntaxKind::ARGS_KW,
            AfterKw => SyntaxKind::AFTER_KW,
            AroundKw => SyntaxKind::AROUND_KW,
            AspectKw => SyntaxKind::ASPECT_KW,
            BeforeKw => SyntaxKind::BEFORE_KW,
            CallKw => SyntaxKind::CALL_KW,
            CflowKw => SyntaxKind::CFLOW_KW,
            CflowbelowKw => SyntaxKind::CFLOWBELOW_KW,
            DeclareKw => SyntaxKind::DECLARE_KW,
            ErrorKw => SyntaxKind::ERROR_KW,
            ExecutionKw => SyntaxKind::EXECUTION_KW,
            GetKw => SyntaxKind::GET_KW,
            HandlerKw => SyntaxKind::HANDLER_KW,
            InitializationKw => SyntaxKind::INITIALIZATION_KW,
            IssingletonKw => SyntaxKind::ISSINGLETON_KW,
            ParentsKw => SyntaxKind::PARENTS_KW,
            PercflowKw => SyntaxKind::PERCFLOW_KW,
            PercflowbelowKw => SyntaxKind::PERCFLOWBELOW_KW,
            PertargetKw => SyntaxKind::PERTARGET_KW,
            PerthisKw => SyntaxKind::PERTHIS_KW,
            PertypewithinKw => SyntaxKind::PERTYPEWITHIN_KW,
            PointcutKw => SyntaxKind::POINTCUT_KW,
            PrecedenceKw => SyntaxKind::PRECEDENCE_KW,
            PreinitializationKw => SyntaxKind::PREINITIALIZATION_KW,
            PrivilegedKw => SyntaxKind::PRIVILEGED_KW,
            ReturningKw => SyntaxKind::RETURNING_KW,
            SetKw => SyntaxKind::SET_KW,
            SoftKw => SyntaxKind::SOFT_KW,
            StaticinitializationKw => SyntaxKind::STATICINITIALIZATION_KW,
            TargetKw => SyntaxKind::TARGET_KW,
            ThrowingKw => SyntaxKind::THROWING_KW,
            WarningKw => SyntaxKind::WARNING_KW,
            WithinKw => SyntaxKind::WITHIN_KW,
            WithincodeKw => SyntaxKind::WITHINCODE_KW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        tokenize(input)
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
            .collect()
    }

    #[test]
    fn test_lex_class_header() {
        let tokens = tokenize("class A {}");
        assert_eq!(tokens.len(), 7); // class, ws, A, ws, {, }, EOF
        assert_eq!(tokens[0].kind, SyntaxKind::CLASS_KW);
        assert_eq!(tokens[1].kind, SyntaxKind::WHITESPACE);
        assert_eq!(tokens[2].kind, SyntaxKind::IDENT);
        assert_eq!(tokens[6].kind, SyntaxKind::EOF);
    }

    #[test]
    fn test_lex_aspect_keywords() {
        assert_eq!(
            kinds("pointcut p(): call(* *(..));"),
            vec![
                SyntaxKind::POINTCUT_KW,
                SyntaxKind::IDENT,
                SyntaxKind::L_PAREN,
                SyntaxKind::R_PAREN,
                SyntaxKind::COLON,
                SyntaxKind::CALL_KW,
                SyntaxKind::L_PAREN,
                SyntaxKind::STAR,
                SyntaxKind::STAR,
                SyntaxKind::L_PAREN,
                SyntaxKind::DOT_DOT,
                SyntaxKind::R_PAREN,
                SyntaxKind::R_PAREN,
                SyntaxKind::SEMICOLON,
                SyntaxKind::EOF,
            ]
        );
    }

    #[test]
    fn test_shift_is_not_one_token() {
        assert_eq!(
            kinds("a >>> b"),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::GT,
                SyntaxKind::GT,
                SyntaxKind::GT,
                SyntaxKind::IDENT,
                SyntaxKind::EOF
            ]
        );
        assert_eq!(kinds("a >>>= b")[1], SyntaxKind::USHR_EQ);
    }

    #[test]
    fn test_lex_literals() {
        assert_eq!(
            kinds("42 0x2AL 3.14f .5 1e10 'c' \"s\" true null"),
            vec![
                SyntaxKind::INT_LITERAL,
                SyntaxKind::INT_LITERAL,
                SyntaxKind::FLOAT_LITERAL,
                SyntaxKind::FLOAT_LITERAL,
                SyntaxKind::FLOAT_LITERAL,
                SyntaxKind::CHAR_LITERAL,
                SyntaxKind::STRING_LITERAL,
                SyntaxKind::TRUE_KW,
                SyntaxKind::NULL_KW,
                SyntaxKind::EOF,
            ]
        );
    }

    #[test]
    fn test_dot_dot_and_ellipsis() {
        assert_eq!(
            kinds("com..* String..."),
            vec![
                SyntaxKind::IDENT,
                SyntaxKind::DOT_DOT,
                SyntaxKind::STAR,
                SyntaxKind::IDENT,
                SyntaxKind::ELLIPSIS,
                SyntaxKind::EOF
            ]
        );
    }

    #[test]
    fn test_comments_are_trivia() {
        let tokens = tokenize("/* a **/ // b\nx");
        assert_eq!(tokens[0].kind, SyntaxKind::BLOCK_COMMENT);
        assert_eq!(tokens[2].kind, SyntaxKind::LINE_COMMENT);
        assert_eq!(tokens[4].kind, SyntaxKind::IDENT);
        assert_eq!(tokens[4].line_col.line, 1);
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let tokens = tokenize("\"abc\nx");
        assert_eq!(tokens[0].kind, SyntaxKind::ERROR);
        assert_eq!(tokens[0].text, "\"abc");
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(kinds("größe"), vec![SyntaxKind::IDENT, SyntaxKind::EOF]);
        assert_eq!(kinds("\u{00A0}")[0], SyntaxKind::ERROR);
    }

    #[test]
    fn test_eof_is_last() {
        let tokens = tokenize("x ");
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, SyntaxKind::EOF);
        assert_eq!(eof.range, TextRange::empty(TextSize::new(2)));
    }
}
