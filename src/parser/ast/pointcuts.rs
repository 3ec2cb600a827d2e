//! Pointcut expressions and primitives

use super::*;

ast_enum! {
    PointcutExpr {
        Binary(PointcutBinary) = POINTCUT_BINARY,
        Not(PointcutNot) = POINTCUT_NOT,
        Paren(PointcutParen) = POINTCUT_PAREN,
        Primitive(PointcutPrimitive) = POINTCUT_PRIMITIVE,
        Reference(ReferencePointcut) = REFERENCE_POINTCUT,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointcutOp {
    And,
    Or,
}

ast_node!(PointcutBinary, POINTCUT_BINARY);

impl PointcutBinary {
    token_to_enum_method!(op, PointcutOp, [AMP_AMP => And, PIPE_PIPE => Or]);

    pub fn lhs(&self) -> Option<PointcutExpr> {
        self.0.children().find_map(PointcutExpr::cast)
    }

    pub fn rhs(&self) -> Option<PointcutExpr> {
        self.0.children().filter_map(PointcutExpr::cast).nth(1)
    }
}

ast_node!(PointcutNot, POINTCUT_NOT);

impl PointcutNot {
    first_child_method!(operand, PointcutExpr);
}

ast_node!(PointcutParen, POINTCUT_PAREN);

impl PointcutParen {
    first_child_method!(inner, PointcutExpr);
}

/// The primitive pointcut designators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Call,
    Execution,
    Initialization,
    PreInitialization,
    StaticInitialization,
    Get,
    Set,
    Handler,
    AdviceExecution,
    Within,
    WithinCode,
    Cflow,
    CflowBelow,
    If,
    This,
    Target,
    Args,
    AtThis,
    AtTarget,
    AtWithin,
    AtWithinCode,
    AtAnnotation,
    AtArgs,
}

impl PrimitiveKind {
    /// Designator as written, e.g. `cflowbelow` or `@within`
    pub fn designator(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Execution => "execution",
            Self::Initialization => "initialization",
            Self::PreInitialization => "preinitialization",
            Self::StaticInitialization => "staticinitialization",
            Self::Get => "get",
            Self::Set => "set",
            Self::Handler => "handler",
            Self::AdviceExecution => "adviceexecution",
            Self::Within => "within",
            Self::WithinCode => "withincode",
            Self::Cflow => "cflow",
            Self::CflowBelow => "cflowbelow",
            Self::If => "if",
            Self::This => "this",
            Self::Target => "target",
            Self::Args => "args",
            Self::AtThis => "@this",
            Self::AtTarget => "@target",
            Self::AtWithin => "@within",
            Self::AtWithinCode => "@withincode",
            Self::AtAnnotation => "@annotation",
            Self::AtArgs => "@args",
        }
    }
}

/// What a primitive's parentheses contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimitivePayload {
    Method(MethodPattern),
    Constructor(ConstructorPattern),
    Field(FieldPattern),
    Type(TypePattern),
    Pointcut(PointcutExpr),
    Expression(Expr),
    TypeOrIdentifier(TypeOrIdentifier),
    AnnotationOrIdentifier(AnnotationOrIdentifier),
    Args(ArgsPatternList),
    AnnotationList(AnnotationListPattern),
    /// `adviceexecution()` and `if()`
    Empty,
}

ast_node!(PointcutPrimitive, POINTCUT_PRIMITIVE);

impl PointcutPrimitive {
    pub fn kind(&self) -> Option<PrimitiveKind> {
        let mut tokens = significant_tokens(&self.0);
        let mut first = tokens.next()?;
        let annotated = first.kind() == SyntaxKind::AT;
        if annotated {
            first = tokens.next()?;
        }
        let kind = match (annotated, first.kind()) {
            (false, SyntaxKind::CALL_KW) => PrimitiveKind::Call,
            (false, SyntaxKind::EXECUTION_KW) => PrimitiveKind::Execution,
            (false, SyntaxKind::INITIALIZATION_KW) => PrimitiveKind::Initialization,
            (false, SyntaxKind::PREINITIALIZATION_KW) => PrimitiveKind::PreInitialization,
            (false, SyntaxKind::STATICINITIALIZATION_KW) => PrimitiveKind::StaticInitialization,
            (false, SyntaxKind::GET_KW) => PrimitiveKind::Get,
            (false, SyntaxKind::SET_KW) => PrimitiveKind::Set,
            (false, SyntaxKind::HANDLER_KW) => PrimitiveKind::Handler,
            (false, SyntaxKind::ADVICEEXECUTION_KW) => PrimitiveKind::AdviceExecution,
            (false, SyntaxKind::WITHIN_KW) => PrimitiveKind::Within,
            (false, SyntaxKind::WITHINCODE_KW) => PrimitiveKind::WithinCode,
            (false, SyntaxKind::CFLOW_KW) => PrimitiveKind::Cflow,
            (false, SyntaxKind::CFLOWBELOW_KW) => PrimitiveKind::CflowBelow,
            (false, SyntaxKind::IF_KW) => PrimitiveKind::If,
            (false, SyntaxKind::THIS_KW) => PrimitiveKind::This,
            (false, SyntaxKind::TARGET_KW) => PrimitiveKind::Target,
            (false, SyntaxKind::ARGS_KW) => PrimitiveKind::Args,
            (true, SyntaxKind::THIS_KW) => PrimitiveKind::AtThis,
            (true, SyntaxKind::TARGET_KW) => PrimitiveKind::AtTarget,
            (true, SyntaxKind::WITHIN_KW) => PrimitiveKind::AtWithin,
            (true, SyntaxKind::WITHINCODE_KW) => PrimitiveKind::AtWithinCode,
            (true, SyntaxKind::ANNOTATION_KW) => PrimitiveKind::AtAnnotation,
            (true, SyntaxKind::ARGS_KW) => PrimitiveKind::AtArgs,
            _ => return None,
        };
        Some(kind)
    }

    pub fn payload(&self) -> PrimitivePayload {
        for child in self.0.children() {
            if let Some(p) = MethodPattern::cast(child.clone()) {
                return PrimitivePayload::Method(p);
            }
            if let Some(p) = ConstructorPattern::cast(child.clone()) {
                return PrimitivePayload::Constructor(p);
            }
            if let Some(p) = FieldPattern::cast(child.clone()) {
                return PrimitivePayload::Field(p);
            }
            if let Some(p) = TypePattern::cast(child.clone()) {
                return PrimitivePayload::Type(p);
            }
            if let Some(p) = PointcutExpr::cast(child.clone()) {
                return PrimitivePayload::Pointcut(p);
            }
            if let Some(p) = TypeOrIdentifier::cast(child.clone()) {
                return PrimitivePayload::TypeOrIdentifier(p);
            }
            if let Some(p) = AnnotationOrIdentifier::cast(child.clone()) {
                return PrimitivePayload::AnnotationOrIdentifier(p);
            }
            if let Some(p) = ArgsPatternList::cast(child.clone()) {
                return PrimitivePayload::Args(p);
            }
            if let Some(p) = AnnotationListPattern::cast(child.clone()) {
                return PrimitivePayload::AnnotationList(p);
            }
            if let Some(e) = Expr::cast(child) {
                return PrimitivePayload::Expression(e);
            }
        }
        PrimitivePayload::Empty
    }
}

ast_node!(ReferencePointcut, REFERENCE_POINTCUT);

impl ReferencePointcut {
    /// Qualified name of the referenced pointcut, e.g. `Tracing.traced`
    pub fn name(&self) -> String {
        significant_tokens(&self.0)
            .filter(|t| t.kind().is_name() || t.kind() == SyntaxKind::DOT)
            .map(|t| t.text().to_string())
            .collect()
    }

    first_child_method!(arguments, ArgsPatternList);
}
