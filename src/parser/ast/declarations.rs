//! Compilation units, type declarations, members and types

use super::*;

// ============================================================================
// Names
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    pub fn text(&self) -> Option<String> {
        find_name_token(&self.0).map(|t| t.text().to_string())
    }
}

ast_node!(QualifiedName, QUALIFIED_NAME);

impl QualifiedName {
    /// The dotted segments, in order
    pub fn segments(&self) -> Vec<String> {
        significant_tokens(&self.0)
            .filter(|t| t.kind().is_name())
            .map(|t| t.text().to_string())
            .collect()
    }

    pub fn text(&self) -> String {
        self.segments().join(".")
    }
}

// ============================================================================
// Compilation unit
// ============================================================================

ast_node!(CompilationUnit, COMPILATION_UNIT);

impl CompilationUnit {
    first_child_method!(package, PackageDecl);
    children_method!(imports, ImportDecl);
    children_method!(type_decls, TypeDecl);
}

ast_node!(PackageDecl, PACKAGE_DECL);

impl PackageDecl {
    children_method!(annotations, Annotation);
    first_child_method!(name, QualifiedName);
}

ast_node!(ImportDecl, IMPORT_DECL);

impl ImportDecl {
    has_token_method!(is_static, STATIC_KW, "import static a.B.c;");
    has_token_method!(is_wildcard, STAR, "import a.b.*;");
    first_child_method!(name, QualifiedName);

    /// The imported name, `.*` included for on-demand imports
    pub fn target(&self) -> Option<String> {
        let name = self.name()?.text();
        Some(if self.is_wildcard() { format!("{name}.*") } else { name })
    }
}

// ============================================================================
// Modifiers and annotations
// ============================================================================

ast_node!(ModifierList, MODIFIER_LIST);

impl ModifierList {
    /// Modifier keywords in source order
    pub fn keywords(&self) -> Vec<SyntaxKind> {
        significant_tokens(&self.0)
            .map(|t| t.kind())
            .filter(|k| k.is_keyword())
            .collect()
    }

    pub fn has(&self, kind: SyntaxKind) -> bool {
        has_token(&self.0, kind)
    }

    children_method!(annotations, Annotation);
}

ast_node!(Annotation, ANNOTATION);

impl Annotation {
    first_child_method!(name, QualifiedName);

    /// `@Marker` without an argument list
    pub fn is_marker(&self) -> bool {
        !self.0.children().any(|c| c.kind() == SyntaxKind::ANNOTATION_ARGS)
    }

    /// Named element-value pairs; empty for the single-value and marker forms
    pub fn element_names(&self) -> Vec<String> {
        self.0
            .children()
            .filter(|c| c.kind() == SyntaxKind::ANNOTATION_ARGS)
            .flat_map(|args| args.children())
            .filter(|c| c.kind() == SyntaxKind::ELEMENT_VALUE_PAIR)
            .filter_map(|pair| pair.children().find_map(Name::cast))
            .filter_map(|name| name.text())
            .collect()
    }
}

// ============================================================================
// Type declarations
// ============================================================================

ast_enum! {
    /// Any type declaration, aspects included
    TypeDecl {
        Class(ClassDecl) = CLASS_DECL,
        Interface(InterfaceDecl) = INTERFACE_DECL,
        Enum(EnumDecl) = ENUM_DECL,
        AnnotationType(AnnotationTypeDecl) = ANNOTATION_TYPE_DECL,
        Aspect(AspectDecl) = ASPECT_DECL,
    }
}

impl TypeDecl {
    pub fn name(&self) -> Option<Name> {
        self.syntax().children().find_map(Name::cast)
    }

    pub fn modifiers(&self) -> Option<ModifierList> {
        self.syntax().children().find_map(ModifierList::cast)
    }
}

ast_node!(ClassDecl, CLASS_DECL);

impl ClassDecl {
    modifiers_method!();
    first_child_method!(name, Name);
    first_child_method!(type_parameters, TypeParameters);
    first_child_method!(body, ClassBody);

    /// The superclass named in `extends`
    pub fn extends(&self) -> Option<Type> {
        self.0
            .children()
            .find(|c| c.kind() == SyntaxKind::EXTENDS_CLAUSE)
            .and_then(|c| c.children().find_map(Type::cast))
    }

    /// The interfaces named in `implements`
    pub fn implements(&self) -> Vec<Type> {
        clause_types(&self.0, SyntaxKind::IMPLEMENTS_CLAUSE)
    }
}

ast_node!(InterfaceDecl, INTERFACE_DECL);

impl InterfaceDecl {
    modifiers_method!();
    first_child_method!(name, Name);
    first_child_method!(type_parameters, TypeParameters);
    first_child_method!(body, ClassBody);

    pub fn extends(&self) -> Vec<Type> {
        clause_types(&self.0, SyntaxKind::EXTENDS_CLAUSE)
    }
}

ast_node!(EnumDecl, ENUM_DECL);

impl EnumDecl {
    modifiers_method!();
    first_child_method!(name, Name);

    pub fn implements(&self) -> Vec<Type> {
        clause_types(&self.0, SyntaxKind::IMPLEMENTS_CLAUSE)
    }

    pub fn constants(&self) -> Vec<EnumConstant> {
        self.enum_body()
            .map(|body| body.children().filter_map(EnumConstant::cast).collect())
            .unwrap_or_default()
    }

    /// Members after the constant list
    pub fn members(&self) -> Vec<Member> {
        self.enum_body()
            .map(|body| body.children().filter_map(Member::cast).collect())
            .unwrap_or_default()
    }

    fn enum_body(&self) -> Option<SyntaxNode> {
        self.0.children().find(|c| c.kind() == SyntaxKind::ENUM_BODY)
    }
}

ast_node!(EnumConstant, ENUM_CONSTANT);

impl EnumConstant {
    first_child_method!(name, Name);
    first_child_method!(arguments, ArgumentList);
    first_child_method!(body, ClassBody);
}

ast_node!(AnnotationTypeDecl, ANNOTATION_TYPE_DECL);

impl AnnotationTypeDecl {
    modifiers_method!();
    first_child_method!(name, Name);
    first_child_method!(body, ClassBody);
}

/// Types listed in a clause node (`implements A, B` or interface `extends A, B`)
fn clause_types(node: &SyntaxNode, clause: SyntaxKind) -> Vec<Type> {
    node.children()
        .find(|c| c.kind() == clause)
        .and_then(|c| c.children().find(|l| l.kind() == SyntaxKind::TYPE_LIST))
        .map(|list| list.children().filter_map(Type::cast).collect())
        .unwrap_or_default()
}

ast_node!(ClassBody, CLASS_BODY);

impl ClassBody {
    children_method!(members, Member);
}

ast_node!(TypeParameters, TYPE_PARAMETERS);

impl TypeParameters {
    /// Declared type variable names
    pub fn names(&self) -> Vec<String> {
        self.0
            .children()
            .filter(|c| c.kind() == SyntaxKind::TYPE_PARAMETER)
            .filter_map(|c| c.children().find_map(Name::cast))
            .filter_map(|n| n.text())
            .collect()
    }
}

// ============================================================================
// Members
// ============================================================================

ast_enum! {
    /// A member of a class, interface, enum, annotation type or aspect body
    Member {
        Method(MethodDecl) = METHOD_DECL,
        Constructor(ConstructorDecl) = CONSTRUCTOR_DECL,
        Field(FieldDecl) = FIELD_DECL,
        Initializer(InitializerBlock) = INITIALIZER_BLOCK,
        AnnotationMethod(AnnotationMethod) = ANNOTATION_METHOD,
        Class(ClassDecl) = CLASS_DECL,
        Interface(InterfaceDecl) = INTERFACE_DECL,
        Enum(EnumDecl) = ENUM_DECL,
        AnnotationType(AnnotationTypeDecl) = ANNOTATION_TYPE_DECL,
        Aspect(AspectDecl) = ASPECT_DECL,
        Advice(AdviceDecl) = ADVICE_DECL,
        Pointcut(PointcutDecl) = POINTCUT_DECL,
        InterTypeMethod(InterTypeMethod) = INTER_TYPE_METHOD,
        InterTypeField(InterTypeField) = INTER_TYPE_FIELD,
        InterTypeConstructor(InterTypeConstructor) = INTER_TYPE_CONSTRUCTOR,
        DeclareParents(DeclareDecl) = DECLARE_PARENTS,
        DeclareWarning(DeclareDecl) = DECLARE_WARNING,
        DeclareError(DeclareDecl) = DECLARE_ERROR,
        DeclareSoft(DeclareDecl) = DECLARE_SOFT,
        DeclarePrecedence(DeclareDecl) = DECLARE_PRECEDENCE,
        DeclareAnnotation(DeclareDecl) = DECLARE_ANNOTATION,
    }
}

impl Member {
    /// The declare form, whichever kind it is
    pub fn as_declare(&self) -> Option<&DeclareDecl> {
        match self {
            Self::DeclareParents(d)
            | Self::DeclareWarning(d)
            | Self::DeclareError(d)
            | Self::DeclareSoft(d)
            | Self::DeclarePrecedence(d)
            | Self::DeclareAnnotation(d) => Some(d),
            _ => None,
        }
    }
}

ast_node!(MethodDecl, METHOD_DECL);

impl MethodDecl {
    modifiers_method!();
    first_child_method!(type_parameters, TypeParameters);
    first_child_method!(return_type, Type);
    first_child_method!(name, Name);
    first_child_method!(parameters, FormalParameters);
    first_child_method!(throws, ThrowsClause);
    first_child_method!(body, Block);

    /// Declared without a body (`abstract` or `native`)
    pub fn is_abstract(&self) -> bool {
        self.body().is_none()
    }
}

ast_node!(ConstructorDecl, CONSTRUCTOR_DECL);

impl ConstructorDecl {
    modifiers_method!();
    first_child_method!(name, Name);
    first_child_method!(parameters, FormalParameters);
    first_child_method!(throws, ThrowsClause);
    first_child_method!(body, Block);
}

ast_node!(FieldDecl, FIELD_DECL);

impl FieldDecl {
    modifiers_method!();
    first_child_method!(ty, Type);
    children_method!(declarators, VariableDeclarator);
}

ast_node!(VariableDeclarator, VARIABLE_DECLARATOR);

impl VariableDeclarator {
    first_child_method!(name, Name);
    has_token_method!(has_initializer, EQ);

    /// Initializer expression; None for array initializers
    pub fn initializer(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

ast_node!(FormalParameters, FORMAL_PARAMETERS);

impl FormalParameters {
    children_method!(params, FormalParameter);
}

ast_node!(FormalParameter, FORMAL_PARAMETER);

impl FormalParameter {
    modifiers_method!();
    first_child_method!(ty, Type);
    first_child_method!(name, Name);
    has_token_method!(is_varargs, ELLIPSIS, "String... args");
}

ast_node!(ThrowsClause, THROWS_CLAUSE);

impl ThrowsClause {
    pub fn types(&self) -> Vec<Type> {
        self.0
            .children()
            .find(|c| c.kind() == SyntaxKind::TYPE_LIST)
            .map(|list| list.children().filter_map(Type::cast).collect())
            .unwrap_or_default()
    }
}

ast_node!(InitializerBlock, INITIALIZER_BLOCK);

impl InitializerBlock {
    first_child_method!(body, Block);

    pub fn is_static(&self) -> bool {
        self.0
            .children()
            .find_map(ModifierList::cast)
            .is_some_and(|m| m.has(SyntaxKind::STATIC_KW))
    }
}

ast_node!(AnnotationMethod, ANNOTATION_METHOD);

impl AnnotationMethod {
    modifiers_method!();
    first_child_method!(ty, Type);
    first_child_method!(name, Name);

    pub fn has_default(&self) -> bool {
        self.0.children().any(|c| c.kind() == SyntaxKind::DEFAULT_VALUE)
    }
}

// ============================================================================
// Types
// ============================================================================

ast_enum! {
    Type {
        Primitive(PrimitiveType) = PRIMITIVE_TYPE,
        Class(ClassType) = CLASS_TYPE,
        Array(ArrayType) = ARRAY_TYPE,
    }
}

impl Type {
    /// Source text without trivia, e.g. `Map<String,int[]>`
    pub fn text(&self) -> String {
        compact_text(self.syntax())
    }
}

ast_node!(PrimitiveType, PRIMITIVE_TYPE);

impl PrimitiveType {
    /// The keyword kind, `VOID_KW` included
    pub fn kind(&self) -> Option<SyntaxKind> {
        significant_tokens(&self.0).map(|t| t.kind()).next()
    }
}

ast_node!(ClassType, CLASS_TYPE);

impl ClassType {
    /// Dotted segment names, type arguments excluded
    pub fn segments(&self) -> Vec<String> {
        significant_tokens(&self.0)
            .filter(|t| t.kind().is_name())
            .map(|t| t.text().to_string())
            .collect()
    }

    /// Type arguments of every segment, in order
    pub fn type_arguments(&self) -> Vec<TypeArgument> {
        self.0
            .children()
            .filter(|c| c.kind() == SyntaxKind::TYPE_ARGUMENTS)
            .flat_map(|args| args.children())
            .filter_map(TypeArgument::cast)
            .collect()
    }
}

ast_node!(TypeArgument, TYPE_ARGUMENT);

impl TypeArgument {
    first_child_method!(ty, Type);

    pub fn is_wildcard(&self) -> bool {
        self.0.children().any(|c| c.kind() == SyntaxKind::WILDCARD_TYPE)
    }
}

ast_node!(ArrayType, ARRAY_TYPE);

impl ArrayType {
    first_child_method!(element, Type);

    /// Number of `[]` pairs around the innermost element type
    pub fn dimensions(&self) -> usize {
        let mut dims = 1;
        let mut current = self.element();
        while let Some(Type::Array(inner)) = current {
            dims += 1;
            current = inner.element();
        }
        dims
    }
}
