//! Aspects and the aspect-only member forms

use super::*;

ast_node!(AspectDecl, ASPECT_DECL);

impl AspectDecl {
    modifiers_method!();
    first_child_method!(name, Name);
    first_child_method!(type_parameters, TypeParameters);
    first_child_method!(per_clause, PerClause);

    pub fn is_privileged(&self) -> bool {
        self.modifiers()
            .is_some_and(|m| m.has(SyntaxKind::PRIVILEGED_KW))
    }

    pub fn is_abstract(&self) -> bool {
        self.modifiers()
            .is_some_and(|m| m.has(SyntaxKind::ABSTRACT_KW))
    }

    pub fn extends(&self) -> Option<Type> {
        self.0
            .children()
            .find(|c| c.kind() == SyntaxKind::EXTENDS_CLAUSE)
            .and_then(|c| c.children().find_map(Type::cast))
    }

    pub fn members(&self) -> Vec<Member> {
        self.0
            .children()
            .find(|c| c.kind() == SyntaxKind::ASPECT_BODY)
            .map(|body| body.children().filter_map(Member::cast).collect())
            .unwrap_or_default()
    }

    pub fn advice(&self) -> impl Iterator<Item = AdviceDecl> {
        self.members().into_iter().filter_map(|m| match m {
            Member::Advice(a) => Some(a),
            _ => None,
        })
    }
}

/// Aspect instantiation model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerClauseKind {
    PerThis,
    PerTarget,
    PerCflow,
    PerCflowBelow,
    PerTypeWithin,
    IsSingleton,
}

ast_node!(PerClause, PER_CLAUSE);

impl PerClause {
    token_to_enum_method!(kind, PerClauseKind, [
        PERTHIS_KW => PerThis,
        PERTARGET_KW => PerTarget,
        PERCFLOW_KW => PerCflow,
        PERCFLOWBELOW_KW => PerCflowBelow,
        PERTYPEWITHIN_KW => PerTypeWithin,
        ISSINGLETON_KW => IsSingleton,
    ]);

    first_child_method!(pointcut, PointcutExpr);
    first_child_method!(type_pattern, TypePattern);
}

// ============================================================================
// Advice
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceKind {
    Before,
    After,
    AfterReturning,
    AfterThrowing,
    Around,
}

ast_node!(AdviceDecl, ADVICE_DECL);

impl AdviceDecl {
    modifiers_method!();
    first_child_method!(throws, ThrowsClause);
    first_child_method!(pointcut, PointcutExpr);
    first_child_method!(body, Block);

    fn spec(&self) -> Option<SyntaxNode> {
        self.0.children().find(|c| c.kind() == SyntaxKind::ADVICE_SPEC)
    }

    pub fn kind(&self) -> Option<AdviceKind> {
        let spec = self.spec()?;
        if has_token(&spec, SyntaxKind::BEFORE_KW) {
            return Some(AdviceKind::Before);
        }
        if has_token(&spec, SyntaxKind::AROUND_KW) {
            return Some(AdviceKind::Around);
        }
        if !has_token(&spec, SyntaxKind::AFTER_KW) {
            return None;
        }
        let kind = spec.children().find_map(|c| match c.kind() {
            SyntaxKind::ADVICE_RETURNING => Some(AdviceKind::AfterReturning),
            SyntaxKind::ADVICE_THROWING => Some(AdviceKind::AfterThrowing),
            _ => None,
        });
        Some(kind.unwrap_or(AdviceKind::After))
    }

    pub fn parameters(&self) -> Option<FormalParameters> {
        self.spec()?.children().find_map(FormalParameters::cast)
    }

    /// Result type of around advice
    pub fn return_type(&self) -> Option<Type> {
        self.spec()?.children().find_map(Type::cast)
    }

    /// The formal bound by `returning(...)` or `throwing(...)`
    pub fn binding(&self) -> Option<FormalParameter> {
        self.spec()?
            .children()
            .find(|c| matches!(c.kind(), SyntaxKind::ADVICE_RETURNING | SyntaxKind::ADVICE_THROWING))
            .and_then(|c| c.children().find_map(FormalParameter::cast))
    }
}

// ============================================================================
// Pointcut declarations
// ============================================================================

ast_node!(PointcutDecl, POINTCUT_DECL);

impl PointcutDecl {
    modifiers_method!();
    first_child_method!(name, Name);
    first_child_method!(parameters, FormalParameters);
    first_child_method!(expression, PointcutExpr);

    /// Abstract pointcuts have no expression
    pub fn is_abstract(&self) -> bool {
        self.expression().is_none()
    }
}

// ============================================================================
// Inter-type declarations
// ============================================================================

ast_node!(InterTypeTarget, INTER_TYPE_TARGET);

impl InterTypeTarget {
    first_child_method!(ty, ClassType);

    pub fn text(&self) -> String {
        compact_text(&self.0)
    }
}

ast_node!(InterTypeMethod, INTER_TYPE_METHOD);

impl InterTypeMethod {
    modifiers_method!();
    first_child_method!(return_type, Type);
    first_child_method!(target, InterTypeTarget);
    first_child_method!(name, Name);
    first_child_method!(parameters, FormalParameters);
    first_child_method!(body, Block);
}

ast_node!(InterTypeField, INTER_TYPE_FIELD);

impl InterTypeField {
    modifiers_method!();
    first_child_method!(ty, Type);
    first_child_method!(target, InterTypeTarget);
    first_child_method!(name, Name);

    pub fn initializer(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

ast_node!(InterTypeConstructor, INTER_TYPE_CONSTRUCTOR);

impl InterTypeConstructor {
    modifiers_method!();
    first_child_method!(target, InterTypeTarget);
    first_child_method!(parameters, FormalParameters);
    first_child_method!(body, Block);
}

// ============================================================================
// Declare forms
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclareKind {
    Parents,
    Warning,
    Error,
    Soft,
    Precedence,
    Annotation,
}

/// Which members a `declare @...` form annotates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclareAnnotationTarget {
    Type,
    Method,
    Constructor,
    Field,
}

/// Any `declare` member; the node kind says which form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclareDecl(pub(crate) SyntaxNode);

impl AstNode for DeclareDecl {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::DECLARE_PARENTS
                | SyntaxKind::DECLARE_WARNING
                | SyntaxKind::DECLARE_ERROR
                | SyntaxKind::DECLARE_SOFT
                | SyntaxKind::DECLARE_PRECEDENCE
                | SyntaxKind::DECLARE_ANNOTATION
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        Self::can_cast(node.kind()).then(|| Self(node))
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl DeclareDecl {
    pub fn kind(&self) -> DeclareKind {
        match self.0.kind() {
            SyntaxKind::DECLARE_PARENTS => DeclareKind::Parents,
            SyntaxKind::DECLARE_WARNING => DeclareKind::Warning,
            SyntaxKind::DECLARE_ERROR => DeclareKind::Error,
            SyntaxKind::DECLARE_SOFT => DeclareKind::Soft,
            SyntaxKind::DECLARE_PRECEDENCE => DeclareKind::Precedence,
            _ => DeclareKind::Annotation,
        }
    }

    /// The matched type pattern of `parents`, `soft` and `@type` forms
    pub fn type_pattern(&self) -> Option<TypePattern> {
        self.0.children().find_map(TypePattern::cast)
    }

    /// The pointcut of `warning`, `error` and `soft` forms
    pub fn pointcut(&self) -> Option<PointcutExpr> {
        self.0.children().find_map(PointcutExpr::cast)
    }

    /// The message expression of `warning` and `error` forms
    pub fn message(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    has_token_method!(is_implements, IMPLEMENTS_KW, "declare parents: A implements I;");

    /// Parent types of `declare parents`
    pub fn parent_types(&self) -> Vec<Type> {
        self.0
            .children()
            .find(|c| c.kind() == SyntaxKind::TYPE_LIST)
            .map(|list| list.children().filter_map(Type::cast).collect())
            .unwrap_or_default()
    }

    /// Ordered aspect patterns of `declare precedence`
    pub fn precedence(&self) -> Vec<TypePattern> {
        self.0
            .children()
            .find(|c| c.kind() == SyntaxKind::TYPE_PATTERN_LIST)
            .map(|list| list.children().filter_map(TypePattern::cast).collect())
            .unwrap_or_default()
    }

    /// The `@type`, `@method`, `@constructor` or `@field` target of an annotation form
    pub fn annotation_target(&self) -> Option<DeclareAnnotationTarget> {
        if self.kind() != DeclareKind::Annotation {
            return None;
        }
        let mut tokens = significant_tokens(&self.0).skip_while(|t| t.kind() != SyntaxKind::AT);
        tokens.next()?;
        match tokens.next()?.text() {
            "type" => Some(DeclareAnnotationTarget::Type),
            "method" => Some(DeclareAnnotationTarget::Method),
            "constructor" => Some(DeclareAnnotationTarget::Constructor),
            "field" => Some(DeclareAnnotationTarget::Field),
            _ => None,
        }
    }

    first_child_method!(method_pattern, MethodPattern);
    first_child_method!(constructor_pattern, ConstructorPattern);
    first_child_method!(field_pattern, FieldPattern);

    /// The annotation applied by a `declare @...` form
    pub fn annotation(&self) -> Option<Annotation> {
        self.0.children().find_map(Annotation::cast)
    }
}
