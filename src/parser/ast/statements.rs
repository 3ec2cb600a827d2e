//! Blocks and statements

use super::*;

ast_enum! {
    Stmt {
        Block(Block) = BLOCK,
        LocalVar(LocalVarDecl) = LOCAL_VAR_DECL,
        If(IfStmt) = IF_STMT,
        For(ForStmt) = FOR_STMT,
        ForEach(ForEachStmt) = FOREACH_STMT,
        While(WhileStmt) = WHILE_STMT,
        Do(DoStmt) = DO_STMT,
        Try(TryStmt) = TRY_STMT,
        Switch(SwitchStmt) = SWITCH_STMT,
        Synchronized(SynchronizedStmt) = SYNCHRONIZED_STMT,
        Return(ReturnStmt) = RETURN_STMT,
        Throw(ThrowStmt) = THROW_STMT,
        Break(BreakStmt) = BREAK_STMT,
        Continue(ContinueStmt) = CONTINUE_STMT,
        Empty(EmptyStmt) = EMPTY_STMT,
        Expr(ExprStmt) = EXPR_STMT,
        Labeled(LabeledStmt) = LABELED_STMT,
        Assert(AssertStmt) = ASSERT_STMT,
    }
}

ast_node!(Block, BLOCK);

impl Block {
    children_method!(statements, Stmt);
    children_method!(local_types, TypeDecl);
}

ast_node!(LocalVarDecl, LOCAL_VAR_DECL);

impl LocalVarDecl {
    modifiers_method!();
    first_child_method!(ty, Type);
    children_method!(declarators, VariableDeclarator);
}

ast_node!(IfStmt, IF_STMT);

impl IfStmt {
    first_child_method!(condition, Expr);

    pub fn then_branch(&self) -> Option<Stmt> {
        let (before, _) = split_at_token::<Stmt>(&self.0, SyntaxKind::ELSE_KW);
        before.into_iter().next()
    }

    /// The `else` branch; a nested `if` here is an `else if` chain
    pub fn else_branch(&self) -> Option<Stmt> {
        let (_, after) = split_at_token::<Stmt>(&self.0, SyntaxKind::ELSE_KW);
        after.into_iter().next()
    }
}

ast_node!(ForStmt, FOR_STMT);

impl ForStmt {
    /// The loop condition between the two semicolons
    pub fn condition(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn has_init(&self) -> bool {
        self.0.children().any(|c| c.kind() == SyntaxKind::FOR_INIT)
    }

    pub fn update(&self) -> Vec<Expr> {
        self.0
            .children()
            .find(|c| c.kind() == SyntaxKind::FOR_UPDATE)
            .map(|c| c.children().filter_map(Expr::cast).collect())
            .unwrap_or_default()
    }

    first_child_method!(body, Stmt);
}

ast_node!(ForEachStmt, FOREACH_STMT);

impl ForEachStmt {
    first_child_method!(variable, FormalParameter);
    first_child_method!(iterable, Expr);
    first_child_method!(body, Stmt);
}

ast_node!(WhileStmt, WHILE_STMT);

impl WhileStmt {
    first_child_method!(condition, Expr);
    first_child_method!(body, Stmt);
}

ast_node!(DoStmt, DO_STMT);

impl DoStmt {
    first_child_method!(body, Stmt);
    first_child_method!(condition, Expr);
}

ast_node!(TryStmt, TRY_STMT);

impl TryStmt {
    pub fn has_resources(&self) -> bool {
        self.0.children().any(|c| c.kind() == SyntaxKind::RESOURCE_SPEC)
    }

    first_child_method!(body, Block);
    children_method!(catch_clauses, CatchClause);

    pub fn finally_block(&self) -> Option<Block> {
        self.0
            .children()
            .find(|c| c.kind() == SyntaxKind::FINALLY_CLAUSE)
            .and_then(|c| c.children().find_map(Block::cast))
    }
}

ast_node!(CatchClause, CATCH_CLAUSE);

impl CatchClause {
    fn parameter(&self) -> Option<SyntaxNode> {
        self.0.children().find(|c| c.kind() == SyntaxKind::CATCH_PARAMETER)
    }

    /// Caught types; more than one for a multi-catch
    pub fn types(&self) -> Vec<Type> {
        self.parameter()
            .map(|p| p.children().filter_map(Type::cast).collect())
            .unwrap_or_default()
    }

    pub fn name(&self) -> Option<Name> {
        self.parameter()?.children().find_map(Name::cast)
    }

    first_child_method!(body, Block);
}

ast_node!(SwitchStmt, SWITCH_STMT);

impl SwitchStmt {
    first_child_method!(selector, Expr);
    children_method!(groups, SwitchGroup);
}

ast_node!(SwitchGroup, SWITCH_GROUP);

impl SwitchGroup {
    children_method!(labels, SwitchLabel);
    children_method!(statements, Stmt);
}

ast_node!(SwitchLabel, SWITCH_LABEL);

impl SwitchLabel {
    has_token_method!(is_default, DEFAULT_KW);
    first_child_method!(value, Expr);
}

ast_node!(SynchronizedStmt, SYNCHRONIZED_STMT);

impl SynchronizedStmt {
    first_child_method!(lock, Expr);
    first_child_method!(body, Block);
}

ast_node!(ReturnStmt, RETURN_STMT);

impl ReturnStmt {
    first_child_method!(value, Expr);
}

ast_node!(ThrowStmt, THROW_STMT);

impl ThrowStmt {
    first_child_method!(exception, Expr);
}

ast_node!(BreakStmt, BREAK_STMT);

impl BreakStmt {
    first_child_method!(label, Name);
}

ast_node!(ContinueStmt, CONTINUE_STMT);

impl ContinueStmt {
    first_child_method!(label, Name);
}

ast_node!(EmptyStmt, EMPTY_STMT);

ast_node!(ExprStmt, EXPR_STMT);

impl ExprStmt {
    first_child_method!(expr, Expr);
}

ast_node!(LabeledStmt, LABELED_STMT);

impl LabeledStmt {
    first_child_method!(label, Name);
    first_child_method!(body, Stmt);
}

ast_node!(AssertStmt, ASSERT_STMT);

impl AssertStmt {
    first_child_method!(condition, Expr);

    pub fn message(&self) -> Option<Expr> {
        let (_, after) = split_at_token::<Expr>(&self.0, SyntaxKind::COLON);
        after.into_iter().next()
    }
}
