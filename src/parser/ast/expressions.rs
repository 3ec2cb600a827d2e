//! Expressions

use super::*;

ast_enum! {
    Expr {
        Assign(AssignExpr) = ASSIGN_EXPR,
        Conditional(ConditionalExpr) = CONDITIONAL_EXPR,
        Binary(BinaryExpr) = BINARY_EXPR,
        InstanceOf(InstanceOfExpr) = INSTANCEOF_EXPR,
        Prefix(PrefixExpr) = PREFIX_EXPR,
        Postfix(PostfixExpr) = POSTFIX_EXPR,
        Cast(CastExpr) = CAST_EXPR,
        Paren(ParenExpr) = PAREN_EXPR,
        Literal(Literal) = LITERAL,
        NameRef(NameRef) = NAME_REF,
        This(ThisExpr) = THIS_EXPR,
        Super(SuperExpr) = SUPER_EXPR,
        ClassLiteral(ClassLiteral) = CLASS_LITERAL,
        FieldAccess(FieldAccess) = FIELD_ACCESS,
        MethodCall(MethodCall) = METHOD_CALL,
        ArrayAccess(ArrayAccess) = ARRAY_ACCESS,
        New(NewExpr) = NEW_EXPR,
        ArrayCreation(ArrayCreation) = ARRAY_CREATION,
        QualifiedThis(QualifiedThis) = QUALIFIED_THIS,
        QualifiedSuper(QualifiedSuper) = QUALIFIED_SUPER,
        InnerCreation(InnerCreation) = INNER_CREATION,
    }
}

impl Expr {
    /// Expression text without trivia
    pub fn text(&self) -> String {
        compact_text(self.syntax())
    }
}

/// Operands are the first and second expression children
fn operands(node: &SyntaxNode) -> (Option<Expr>, Option<Expr>) {
    let mut exprs = node.children().filter_map(Expr::cast);
    (exprs.next(), exprs.next())
}

// ============================================================================
// Operators
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Shl,
    Shr,
    UShr,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }
}

ast_node!(BinaryExpr, BINARY_EXPR);

impl BinaryExpr {
    /// The operator; shifts are spelled by two or three angle tokens
    pub fn op(&self) -> Option<BinaryOp> {
        let tokens: Vec<SyntaxKind> = significant_tokens(&self.0).map(|t| t.kind()).collect();
        let op = match tokens.as_slice() {
            [SyntaxKind::LT, SyntaxKind::LT] => BinaryOp::Shl,
            [SyntaxKind::GT, SyntaxKind::GT] => BinaryOp::Shr,
            [SyntaxKind::GT, SyntaxKind::GT, SyntaxKind::GT] => BinaryOp::UShr,
            [single] => match single {
                SyntaxKind::PIPE_PIPE => BinaryOp::Or,
                SyntaxKind::AMP_AMP => BinaryOp::And,
                SyntaxKind::PIPE => BinaryOp::BitOr,
                SyntaxKind::CARET => BinaryOp::BitXor,
                SyntaxKind::AMP => BinaryOp::BitAnd,
                SyntaxKind::EQ_EQ => BinaryOp::Eq,
                SyntaxKind::BANG_EQ => BinaryOp::NotEq,
                SyntaxKind::LT => BinaryOp::Lt,
                SyntaxKind::GT => BinaryOp::Gt,
                SyntaxKind::LT_EQ => BinaryOp::LtEq,
                SyntaxKind::GT_EQ => BinaryOp::GtEq,
                SyntaxKind::PLUS => BinaryOp::Add,
                SyntaxKind::MINUS => BinaryOp::Sub,
                SyntaxKind::STAR => BinaryOp::Mul,
                SyntaxKind::SLASH => BinaryOp::Div,
                SyntaxKind::PERCENT => BinaryOp::Rem,
                _ => return None,
            },
            _ => return None,
        };
        Some(op)
    }

    pub fn lhs(&self) -> Option<Expr> {
        operands(&self.0).0
    }

    pub fn rhs(&self) -> Option<Expr> {
        operands(&self.0).1
    }
}

ast_node!(InstanceOfExpr, INSTANCEOF_EXPR);

impl InstanceOfExpr {
    first_child_method!(expr, Expr);
    first_child_method!(ty, Type);
}

ast_node!(AssignExpr, ASSIGN_EXPR);

impl AssignExpr {
    /// The operator text, `=` or a compound form such as `>>>=`
    pub fn op(&self) -> Option<SyntaxKind> {
        significant_tokens(&self.0)
            .map(|t| t.kind())
            .find(|k| crate::parser::token_set::ASSIGN_OPS.contains(*k))
    }

    pub fn target(&self) -> Option<Expr> {
        operands(&self.0).0
    }

    pub fn value(&self) -> Option<Expr> {
        operands(&self.0).1
    }
}

ast_node!(ConditionalExpr, CONDITIONAL_EXPR);

impl ConditionalExpr {
    pub fn condition(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn then_expr(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }

    pub fn else_expr(&self) -> Option<Expr> {
        let (_, after) = split_at_token::<Expr>(&self.0, SyntaxKind::COLON);
        after.into_iter().next()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    Plus,
    Minus,
    Not,
    BitNot,
    Increment,
    Decrement,
}

ast_node!(PrefixExpr, PREFIX_EXPR);

impl PrefixExpr {
    token_to_enum_method!(op, PrefixOp, [
        PLUS => Plus,
        MINUS => Minus,
        BANG => Not,
        TILDE => BitNot,
        PLUS_PLUS => Increment,
        MINUS_MINUS => Decrement,
    ]);

    first_child_method!(operand, Expr);
}

ast_node!(PostfixExpr, POSTFIX_EXPR);

impl PostfixExpr {
    first_child_method!(operand, Expr);
    has_token_method!(is_increment, PLUS_PLUS);
}

ast_node!(CastExpr, CAST_EXPR);

impl CastExpr {
    /// Target type; intersection casts list further bounds in [`CastExpr::types`]
    pub fn ty(&self) -> Option<Type> {
        self.0.children().find_map(Type::cast)
    }

    children_method!(types, Type);
    first_child_method!(operand, Expr);
}

ast_node!(ParenExpr, PAREN_EXPR);

impl ParenExpr {
    first_child_method!(inner, Expr);
}

// ============================================================================
// Primaries and selectors
// ============================================================================

ast_node!(Literal, LITERAL);

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        significant_tokens(&self.0).next()
    }

    pub fn kind(&self) -> Option<SyntaxKind> {
        self.token().map(|t| t.kind())
    }
}

ast_node!(NameRef, NAME_REF);

impl NameRef {
    pub fn text(&self) -> Option<String> {
        find_name_token(&self.0).map(|t| t.text().to_string())
    }
}

ast_node!(ThisExpr, THIS_EXPR);
ast_node!(SuperExpr, SUPER_EXPR);

ast_node!(ClassLiteral, CLASS_LITERAL);

impl ClassLiteral {
    /// The type whose class object is denoted, e.g. `int[]` in `int[].class`
    pub fn type_text(&self) -> String {
        let text = compact_text(&self.0);
        text.strip_suffix(".class").unwrap_or(&text).to_string()
    }
}

ast_node!(FieldAccess, FIELD_ACCESS);

impl FieldAccess {
    first_child_method!(receiver, Expr);
    first_child_method!(name, Name);
}

ast_node!(MethodCall, METHOD_CALL);

impl MethodCall {
    /// Receiver of a qualified call, or the callee name reference of an unqualified one
    pub fn receiver(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    /// The method name: the selector name, or the callee of `name(...)`
    pub fn name(&self) -> Option<String> {
        if let Some(name) = self.0.children().find_map(Name::cast) {
            return name.text();
        }
        match self.receiver()? {
            Expr::NameRef(r) => r.text(),
            Expr::This(_) => Some("this".to_string()),
            Expr::Super(_) => Some("super".to_string()),
            _ => None,
        }
    }

    first_child_method!(arguments, ArgumentList);
}

ast_node!(ArgumentList, ARGUMENT_LIST);

impl ArgumentList {
    children_method!(args, Expr);
}

ast_node!(ArrayAccess, ARRAY_ACCESS);

impl ArrayAccess {
    pub fn array(&self) -> Option<Expr> {
        operands(&self.0).0
    }

    pub fn index(&self) -> Option<Expr> {
        operands(&self.0).1
    }
}

ast_node!(NewExpr, NEW_EXPR);

impl NewExpr {
    first_child_method!(ty, Type);
    first_child_method!(arguments, ArgumentList);
    first_child_method!(body, ClassBody);

    /// Anonymous class instance creation
    pub fn is_anonymous(&self) -> bool {
        self.body().is_some()
    }
}

ast_node!(ArrayCreation, ARRAY_CREATION);

impl ArrayCreation {
    first_child_method!(element_type, Type);

    /// Dimension expressions, `[n]`
    pub fn dimensions(&self) -> Vec<Expr> {
        self.0
            .children()
            .filter(|c| c.kind() == SyntaxKind::DIM_EXPR)
            .filter_map(|c| c.children().find_map(Expr::cast))
            .collect()
    }

    pub fn has_initializer(&self) -> bool {
        self.0.children().any(|c| c.kind() == SyntaxKind::ARRAY_INITIALIZER)
    }
}

ast_node!(QualifiedThis, QUALIFIED_THIS);

impl QualifiedThis {
    first_child_method!(qualifier, Expr);
}

ast_node!(QualifiedSuper, QUALIFIED_SUPER);

impl QualifiedSuper {
    first_child_method!(qualifier, Expr);
}

ast_node!(InnerCreation, INNER_CREATION);

impl InnerCreation {
    first_child_method!(outer, Expr);
    first_child_method!(ty, ClassType);
    first_child_method!(arguments, ArgumentList);
}
