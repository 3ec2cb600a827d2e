//! Whole-file fixtures: clean parses, lossless trees, typed views

use crate::helpers::source_fixtures::*;
use rstest::rstest;
use weaver::parser::ast::*;
use weaver::parser::{SyntaxKind, parse_source};

#[rstest]
#[case(SIMPLE_CLASS)]
#[case(CLASS_WITH_MEMBERS)]
#[case(ENUM_AND_INTERFACE)]
#[case(TRACING_ASPECT)]
#[case(INTRODUCTION_ASPECT)]
#[case(ABSTRACT_ASPECT)]
fn test_fixture_parses_cleanly(#[case] source: &str) {
    let parse = parse_source(source);
    assert!(parse.ok(), "errors: {:?}", parse.errors);
    assert!(!parse.is_cancelled());
    assert_eq!(parse.syntax().text().to_string(), source);
    assert!(
        !parse
            .syntax()
            .descendants()
            .any(|n| n.kind() == SyntaxKind::ERROR)
    );
}

#[test]
fn test_class_fixture_shape() {
    let cu = CompilationUnit::cast(parse_source(CLASS_WITH_MEMBERS).syntax()).unwrap();
    assert_eq!(cu.package().unwrap().name().unwrap().text(), "com.acme.bank");
    assert_eq!(cu.imports().count(), 2);

    let decl = cu.type_decls().next().unwrap();
    assert_eq!(decl.doc_comment(), Some("An account.".to_string()));
    let TypeDecl::Class(class) = decl else {
        panic!("expected class");
    };
    let members: Vec<_> = class.body().unwrap().members().collect();
    assert_eq!(members.len(), 6);
    let methods: Vec<_> = members
        .iter()
        .filter_map(|m| match m {
            Member::Method(method) => method.name().and_then(|n| n.text()),
            _ => None,
        })
        .collect();
    assert_eq!(methods, vec!["deposit", "getBalance"]);
}

#[test]
fn test_enum_interface_and_annotation_fixture() {
    let cu = CompilationUnit::cast(parse_source(ENUM_AND_INTERFACE).syntax()).unwrap();
    let decls: Vec<_> = cu.type_decls().collect();
    assert_eq!(decls.len(), 3);

    let TypeDecl::Enum(color) = &decls[0] else {
        panic!("expected enum");
    };
    assert_eq!(color.constants().len(), 3);
    let TypeDecl::Interface(named) = &decls[1] else {
        panic!("expected interface");
    };
    assert_eq!(named.extends().len(), 2);
    assert!(matches!(decls[2], TypeDecl::AnnotationType(_)));
}

#[test]
fn test_tracing_aspect_fixture() {
    let cu = CompilationUnit::cast(parse_source(TRACING_ASPECT).syntax()).unwrap();
    let Some(TypeDecl::Aspect(aspect)) = cu.type_decls().next() else {
        panic!("expected aspect");
    };
    assert!(!aspect.is_privileged());
    assert!(aspect.per_clause().is_none());
    let kinds: Vec<_> = aspect.advice().filter_map(|a| a.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            AdviceKind::Before,
            AdviceKind::AfterReturning,
            AdviceKind::AfterThrowing,
            AdviceKind::Around
        ]
    );
}

#[test]
fn test_introduction_aspect_declares() {
    let cu = CompilationUnit::cast(parse_source(INTRODUCTION_ASPECT).syntax()).unwrap();
    let Some(TypeDecl::Aspect(aspect)) = cu.type_decls().next() else {
        panic!("expected aspect");
    };
    assert!(aspect.is_privileged());
    let declares: Vec<_> = aspect
        .members()
        .iter()
        .filter_map(|m| m.as_declare())
        .map(|d| d.kind())
        .collect();
    assert_eq!(
        declares,
        vec![
            DeclareKind::Parents,
            DeclareKind::Parents,
            DeclareKind::Warning,
            DeclareKind::Error,
            DeclareKind::Soft,
            DeclareKind::Precedence,
            DeclareKind::Annotation,
            DeclareKind::Annotation,
            DeclareKind::Annotation,
        ]
    );
}

#[test]
fn test_abstract_aspect_fixture() {
    let cu = CompilationUnit::cast(parse_source(ABSTRACT_ASPECT).syntax()).unwrap();
    let Some(TypeDecl::Aspect(aspect)) = cu.type_decls().next() else {
        panic!("expected aspect");
    };
    assert!(aspect.is_abstract());
    assert_eq!(aspect.per_clause().unwrap().kind(), Some(PerClauseKind::PerTarget));
    let Member::Pointcut(monitored) = &aspect.members()[0] else {
        panic!("expected pointcut");
    };
    assert!(monitored.is_abstract());
    let around = aspect.advice().next().unwrap();
    assert_eq!(around.kind(), Some(AdviceKind::Around));
    assert_eq!(around.return_type().unwrap().text(), "void");
}
