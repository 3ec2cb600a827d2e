//! Type, method, constructor, field and argument patterns
//!
//! Name patterns are runs of adjacent fragments (`get*Name`, `*Service`)
//! joined into segments by `.` or `..` (`com.foo..*`). Whether fragments
//! belong together is decided by adjacency: `* com.Foo.bar(..)` is a return
//! type pattern `*` followed by the member `com.Foo.bar`.

use super::*;
use crate::parser::token_set::MODIFIERS;

/// Tokens that may appear in a name pattern fragment
fn is_fragment(kind: SyntaxKind) -> bool {
    kind.is_name() || kind == SyntaxKind::STAR || kind.is_primitive_type()
}

// =============================================================================
// Name runs
// =============================================================================

/// Number of dotted segments in the name run starting at the current token
fn scan_name_run(p: &Parser<'_>) -> usize {
    let limit = p.lookahead_limit();
    let mut i = 0;
    let mut segments = 0;
    while i < limit && is_fragment(p.nth(i)) {
        segments += 1;
        i += 1;
        while is_fragment(p.nth(i)) && p.nth_joined(i - 1) {
            i += 1;
        }
        if p.nth_at(i, SyntaxKind::LT) {
            match skip_angles(p, i) {
                Some(end) => i = end,
                None => break,
            }
        }
        let mut j = i;
        if p.nth_at(j, SyntaxKind::PLUS) {
            j += 1;
        }
        while p.nth_at(j, SyntaxKind::L_BRACKET) && p.nth_at(j + 1, SyntaxKind::R_BRACKET) {
            j += 2;
        }
        if is_separator(p.nth(j)) {
            i = j;
        }
        if is_separator(p.nth(i)) && is_fragment(p.nth(i + 1)) {
            i += 1;
        } else {
            break;
        }
    }
    segments
}

fn is_separator(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::DOT | SyntaxKind::DOT_DOT)
}

/// Index just past the `>` matching the `<` at `start`
fn skip_angles(p: &Parser<'_>, start: usize) -> Option<usize> {
    let limit = start + p.lookahead_limit();
    let mut depth = 0usize;
    let mut i = start;
    while i < limit {
        match p.nth(i) {
            SyntaxKind::LT => depth += 1,
            SyntaxKind::GT => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            SyntaxKind::EOF
            | SyntaxKind::SEMICOLON
            | SyntaxKind::L_PAREN
            | SyntaxKind::R_PAREN
            | SyntaxKind::L_BRACE => return None,
            _ => {}
        }
        i += 1;
    }
    None
}

/// DottedNamePattern = Segment (('.' | '..') Segment)*, limited to `segments` segments
fn parse_dotted_name_pattern(p: &mut Parser<'_>, segments: usize) {
    p.start_node(SyntaxKind::DOTTED_NAME_PATTERN);
    for n in 0..segments {
        if n > 0 {
            eat_subtypes_and_dims(p);
            p.bump(); // separator
        }
        p.bump();
        while is_fragment(p.current()) && p.at_joined() {
            p.bump();
        }
        if p.at(SyntaxKind::LT) {
            parse_pattern_type_arguments(p);
        }
    }
    p.finish_node();
}

/// '<' (TypePattern | '?' (('extends' | 'super') TypePattern)?) (',' ...)* '>'
fn parse_pattern_type_arguments(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::TYPE_ARGUMENTS);
    let open = p.bump_range();
    loop {
        if p.eat(SyntaxKind::QUESTION) {
            if p.at(SyntaxKind::EXTENDS_KW) || p.at(SyntaxKind::SUPER_KW) {
                p.bump();
                expect_type_pattern(p);
            }
        } else {
            expect_type_pattern(p);
        }
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    if !p.eat(SyntaxKind::GT) {
        let err = p
            .error_builder(ErrorCode::E0206)
            .message(format!(
                "expected '>' to close type arguments, found {}",
                p.found_description()
            ))
            .expected(SyntaxKind::GT)
            .related("type arguments opened here", open)
            .build();
        p.push_error(err, true);
    }
    p.finish_node();
}

/// SimpleNamePattern = Fragment+ (adjacent)
fn parse_simple_name_pattern(p: &mut Parser<'_>) {
    if !is_fragment(p.current()) {
        p.error(
            ErrorCode::E0703,
            format!("expected a name pattern, found {}", p.found_description()),
        );
        return;
    }
    p.start_node(SyntaxKind::SIMPLE_NAME_PATTERN);
    p.bump();
    while is_fragment(p.current()) && p.at_joined() {
        p.bump();
    }
    p.finish_node();
}

// =============================================================================
// Type patterns
// =============================================================================

/// TypePattern = OrTypePattern; false if nothing was consumed
pub(crate) fn parse_type_pattern(p: &mut Parser<'_>) -> bool {
    p.nested(true, parse_or_type_pattern)
}

fn parse_or_type_pattern(p: &mut Parser<'_>) -> bool {
    let cp = p.checkpoint();
    if !parse_and_type_pattern(p) {
        return false;
    }
    while p.at(SyntaxKind::PIPE_PIPE) {
        p.start_node_at(cp, SyntaxKind::TYPE_PATTERN_BINARY);
        p.bump();
        expect_operand(p, parse_and_type_pattern, "||");
        p.finish_node();
    }
    true
}

/// Parse a type pattern, reporting E0701 if none starts here
pub(crate) fn expect_type_pattern(p: &mut Parser<'_>) -> bool {
    if parse_type_pattern(p) {
        return true;
    }
    p.error(
        ErrorCode::E0701,
        format!("expected a type pattern, found {}", p.found_description()),
    );
    false
}

fn parse_and_type_pattern(p: &mut Parser<'_>) -> bool {
    let cp = p.checkpoint();
    if !parse_not_type_pattern(p) {
        return false;
    }
    while p.at(SyntaxKind::AMP_AMP) {
        p.start_node_at(cp, SyntaxKind::TYPE_PATTERN_BINARY);
        p.bump();
        expect_operand(p, parse_not_type_pattern, "&&");
        p.finish_node();
    }
    true
}

fn parse_not_type_pattern(p: &mut Parser<'_>) -> bool {
    if p.at(SyntaxKind::BANG) {
        p.start_node(SyntaxKind::TYPE_PATTERN_NOT);
        p.bump();
        p.nested((), |p| expect_operand(p, parse_not_type_pattern, "!"));
        p.finish_node();
        return true;
    }
    if p.at(SyntaxKind::L_PAREN) {
        p.start_node(SyntaxKind::TYPE_PATTERN_PAREN);
        let open = p.bump_range();
        expect_type_pattern(p);
        p.expect_closing(SyntaxKind::R_PAREN, open);
        p.finish_node();
        return true;
    }
    parse_simple_type_pattern(p)
}

fn expect_operand(p: &mut Parser<'_>, rule: fn(&mut Parser<'_>) -> bool, op: &str) {
    if !rule(p) {
        p.error(
            ErrorCode::E0701,
            format!(
                "expected a type pattern after '{}', found {}",
                op,
                p.found_description()
            ),
        );
        p.missing();
    }
}

/// SimpleTypePattern = AnnotationPattern? (DottedNamePattern | 'void' | '..') '+'? ('[' ']')*
fn parse_simple_type_pattern(p: &mut Parser<'_>) -> bool {
    let kind = p.current();
    let starts = is_fragment(kind)
        || matches!(kind, SyntaxKind::VOID_KW | SyntaxKind::DOT_DOT)
        || at_annotation_pattern(p);
    if !starts {
        return false;
    }
    p.start_node(SyntaxKind::SIMPLE_TYPE_PATTERN);
    if at_annotation_pattern(p) {
        parse_annotation_pattern(p);
    }
    match p.current() {
        SyntaxKind::VOID_KW | SyntaxKind::DOT_DOT => p.bump(),
        kind if is_fragment(kind) => {
            let segments = scan_name_run(p);
            parse_dotted_name_pattern(p, segments);
        }
        SyntaxKind::L_PAREN => {
            p.start_node(SyntaxKind::TYPE_PATTERN_PAREN);
            let open = p.bump_range();
            expect_type_pattern(p);
            p.expect_closing(SyntaxKind::R_PAREN, open);
            p.finish_node();
        }
        _ => p.error(
            ErrorCode::E0701,
            format!(
                "expected a type pattern after the annotation pattern, found {}",
                p.found_description()
            ),
        ),
    }
    eat_subtypes_and_dims(p);
    p.finish_node();
    true
}

/// '+'? ('[' ']')*
fn eat_subtypes_and_dims(p: &mut Parser<'_>) {
    p.eat(SyntaxKind::PLUS);
    while p.at(SyntaxKind::L_BRACKET) && p.nth_at(1, SyntaxKind::R_BRACKET) {
        p.bump();
        p.bump();
    }
}

/// TypePatternList = TypePattern (',' TypePattern)*
pub(crate) fn parse_type_pattern_list(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::TYPE_PATTERN_LIST);
    loop {
        expect_type_pattern(p);
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    p.finish_node();
}

// =============================================================================
// Annotation and modifier patterns
// =============================================================================

fn at_annotation_pattern(p: &Parser<'_>) -> bool {
    p.at(SyntaxKind::AT) || (p.at(SyntaxKind::BANG) && p.nth_at(1, SyntaxKind::AT))
}

/// AnnotationPattern = ('!'? '@' (DottedNamePattern | '(' TypePattern ')'))+
fn parse_annotation_pattern(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ANNOTATION_PATTERN);
    while at_annotation_pattern(p) {
        p.eat(SyntaxKind::BANG);
        p.bump(); // @
        if p.at(SyntaxKind::L_PAREN) {
            p.start_node(SyntaxKind::TYPE_PATTERN_PAREN);
            let open = p.bump_range();
            expect_type_pattern(p);
            p.expect_closing(SyntaxKind::R_PAREN, open);
            p.finish_node();
        } else if is_fragment(p.current()) {
            let segments = scan_name_run(p);
            parse_dotted_name_pattern(p, segments);
        } else {
            p.error(
                ErrorCode::E0703,
                format!("expected an annotation type pattern, found {}", p.found_description()),
            );
            break;
        }
    }
    p.finish_node();
}

fn at_modifiers_pattern(p: &Parser<'_>) -> bool {
    let is_modifier = |kind: SyntaxKind| MODIFIERS.contains(kind) && kind != SyntaxKind::PRIVILEGED_KW;
    is_modifier(p.current()) || (p.at(SyntaxKind::BANG) && is_modifier(p.nth(1)))
}

/// ModifiersPattern = ('!'? Modifier)+
fn parse_modifiers_pattern(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::MODIFIERS_PATTERN);
    while at_modifiers_pattern(p) {
        p.eat(SyntaxKind::BANG);
        p.bump();
    }
    p.finish_node();
}

fn parse_member_prefix(p: &mut Parser<'_>) {
    if at_annotation_pattern(p) {
        parse_annotation_pattern(p);
    }
    if at_modifiers_pattern(p) {
        parse_modifiers_pattern(p);
    }
}

// =============================================================================
// Member patterns
// =============================================================================

/// MethodPattern = AnnotationPattern? ModifiersPattern? TypePattern
///                 (DeclaringType ('.' | '..'))? SimpleNamePattern FormalsPattern ThrowsPattern?
pub(crate) fn parse_method_pattern(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::METHOD_PATTERN);
    parse_member_prefix(p);
    if !parse_type_pattern(p) {
        p.error(
            ErrorCode::E0701,
            format!("expected a return type pattern, found {}", p.found_description()),
        );
    }
    parse_declaring_type_and_name(p);
    parse_formals_pattern(p);
    if p.at(SyntaxKind::THROWS_KW) {
        parse_throws_pattern(p);
    }
    p.finish_node();
}

/// ConstructorPattern = AnnotationPattern? ModifiersPattern? (DeclaringType ('.' | '..'))? 'new'
///                      FormalsPattern ThrowsPattern?
pub(crate) fn parse_constructor_pattern(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::CONSTRUCTOR_PATTERN);
    parse_member_prefix(p);
    if !p.eat(SyntaxKind::NEW_KW) {
        parse_declaring_type(p, 0);
        if is_separator(p.current()) {
            p.bump();
        } else {
            p.error_expected(&[SyntaxKind::DOT]);
        }
        p.expect(SyntaxKind::NEW_KW);
    }
    parse_formals_pattern(p);
    if p.at(SyntaxKind::THROWS_KW) {
        parse_throws_pattern(p);
    }
    p.finish_node();
}

/// FieldPattern = AnnotationPattern? ModifiersPattern? TypePattern
///                (DeclaringType ('.' | '..'))? SimpleNamePattern
pub(crate) fn parse_field_pattern(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::FIELD_PATTERN);
    parse_member_prefix(p);
    if !parse_type_pattern(p) {
        p.error(
            ErrorCode::E0701,
            format!("expected a field type pattern, found {}", p.found_description()),
        );
    }
    parse_declaring_type_and_name(p);
    p.finish_node();
}

/// Split `com.foo..Bar.get*` into declaring type `com.foo..Bar`, separator and name `get*`
fn parse_declaring_type_and_name(p: &mut Parser<'_>) {
    if p.at(SyntaxKind::L_PAREN) {
        // `(A || B).name`
        parse_type_pattern(p);
        if is_separator(p.current()) {
            p.bump();
        } else {
            p.error_expected(&[SyntaxKind::DOT, SyntaxKind::DOT_DOT]);
        }
    } else if is_fragment(p.current()) {
        let segments = scan_name_run(p);
        if segments > 1 {
            parse_declaring_type(p, segments - 1);
            p.bump(); // separator
        }
    }
    parse_simple_name_pattern(p);
}

/// Declaring type over `segments` segments, or the whole run when `segments` is 0
fn parse_declaring_type(p: &mut Parser<'_>, segments: usize) {
    if p.at(SyntaxKind::L_PAREN) {
        parse_type_pattern(p);
        return;
    }
    if !is_fragment(p.current()) {
        p.error(
            ErrorCode::E0701,
            format!("expected a declaring type pattern, found {}", p.found_description()),
        );
        return;
    }
    let segments = if segments == 0 { scan_name_run(p) } else { segments };
    p.start_node(SyntaxKind::SIMPLE_TYPE_PATTERN);
    parse_dotted_name_pattern(p, segments);
    eat_subtypes_and_dims(p);
    p.finish_node();
}

/// Consume a member pattern up to its name and tell whether `new` follows
pub(crate) fn at_new_after_declaring_type(p: &mut Parser<'_>) -> bool {
    parse_member_prefix(p);
    if p.at(SyntaxKind::NEW_KW) {
        return true;
    }
    parse_declaring_type(p, 0);
    is_separator(p.current()) && p.nth_at(1, SyntaxKind::NEW_KW)
}

/// FormalsPattern = '(' (FormalPattern (',' FormalPattern)*)? ')'
/// FormalPattern  = '..' | TypePattern '...'?
pub(crate) fn parse_formals_pattern(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::FORMALS_PATTERN);
    if !p.at(SyntaxKind::L_PAREN) {
        p.error_expected(&[SyntaxKind::L_PAREN]);
        p.finish_node();
        return;
    }
    let open = p.bump_range();
    let mut ellipsis = AnyRemainingTracker::default();
    if !p.at(SyntaxKind::R_PAREN) {
        loop {
            p.start_node(SyntaxKind::FORMAL_PATTERN);
            if p.at(SyntaxKind::DOT_DOT) {
                ellipsis.any_remaining(p);
                p.bump();
            } else {
                ellipsis.concrete();
                if !parse_type_pattern(p) {
                    p.error(
                        ErrorCode::E0701,
                        format!(
                            "expected a parameter type pattern or '..', found {}",
                            p.found_description()
                        ),
                    );
                }
                p.eat(SyntaxKind::ELLIPSIS);
            }
            p.finish_node();
            if !p.eat(SyntaxKind::COMMA) {
                break;
            }
        }
    }
    p.expect_closing(SyntaxKind::R_PAREN, open);
    p.finish_node();
}

/// ThrowsPattern = 'throws' TypePattern (',' TypePattern)*
fn parse_throws_pattern(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::THROWS_PATTERN);
    p.bump(); // throws
    loop {
        expect_type_pattern(p);
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    p.finish_node();
}

/// Enforces that `..` never directly follows another `..` in one list
#[derive(Default)]
struct AnyRemainingTracker {
    previous_was_any: bool,
}

impl AnyRemainingTracker {
    fn any_remaining(&mut self, p: &mut Parser<'_>) {
        if self.previous_was_any {
            let range = p.current_range();
            p.report(
                ErrorCode::E0702,
                "'..' may not directly follow another '..'",
                range,
            );
        }
        self.previous_was_any = true;
    }

    fn concrete(&mut self) {
        self.previous_was_any = false;
    }
}

// =============================================================================
// Argument patterns
// =============================================================================

/// ArgsPatternList = '(' (ArgsPattern (',' ArgsPattern)*)? ')'
/// ArgsPattern     = '..' | '*' | TypeOrIdentifier
pub(crate) fn parse_args_pattern_list(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ARGS_PATTERN_LIST);
    if !p.at(SyntaxKind::L_PAREN) {
        p.error_expected(&[SyntaxKind::L_PAREN]);
        p.finish_node();
        return;
    }
    let open = p.bump_range();
    let mut ellipsis = AnyRemainingTracker::default();
    if !p.at(SyntaxKind::R_PAREN) {
        loop {
            p.start_node(SyntaxKind::ARGS_PATTERN);
            if p.at(SyntaxKind::DOT_DOT) {
                ellipsis.any_remaining(p);
                p.bump();
            } else if at_lone_star(p) {
                ellipsis.concrete();
                p.bump();
            } else {
                ellipsis.concrete();
                parse_type_or_identifier(p);
            }
            p.finish_node();
            if !p.eat(SyntaxKind::COMMA) {
                break;
            }
        }
    }
    p.expect_closing(SyntaxKind::R_PAREN, open);
    p.finish_node();
}

/// `*` standing alone as a list element
fn at_lone_star(p: &Parser<'_>) -> bool {
    p.at(SyntaxKind::STAR) && matches!(p.nth(1), SyntaxKind::COMMA | SyntaxKind::R_PAREN)
}

/// TypeOrIdentifier = SimpleTypePattern (a binding name or a type, resolved later)
pub(crate) fn parse_type_or_identifier(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::TYPE_OR_IDENTIFIER);
    if !parse_simple_type_pattern(p) {
        p.error(
            ErrorCode::E0701,
            format!("expected a type or identifier, found {}", p.found_description()),
        );
    }
    p.finish_node();
}

/// AnnotationOrIdentifier = DottedNamePattern
pub(crate) fn parse_annotation_or_identifier(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ANNOTATION_OR_IDENTIFIER);
    if is_fragment(p.current()) {
        let segments = scan_name_run(p);
        parse_dotted_name_pattern(p, segments);
    } else {
        p.error(
            ErrorCode::E0703,
            format!(
                "expected an annotation type or identifier, found {}",
                p.found_description()
            ),
        );
    }
    p.finish_node();
}

/// AnnotationListPattern = '(' (Element (',' Element)*)? ')'
/// Element               = '..' | '*' | AnnotationOrIdentifier
pub(crate) fn parse_annotation_list_pattern(p: &mut Parser<'_>) {
    p.start_node(SyntaxKind::ANNOTATION_LIST_PATTERN);
    if !p.at(SyntaxKind::L_PAREN) {
        p.error_expected(&[SyntaxKind::L_PAREN]);
        p.finish_node();
        return;
    }
    let open = p.bump_range();
    let mut ellipsis = AnyRemainingTracker::default();
    if !p.at(SyntaxKind::R_PAREN) {
        loop {
            if p.at(SyntaxKind::DOT_DOT) {
                ellipsis.any_remaining(p);
                p.start_node(SyntaxKind::ANNOTATION_OR_IDENTIFIER);
                p.bump();
                p.finish_node();
            } else if at_lone_star(p) {
                ellipsis.concrete();
                p.start_node(SyntaxKind::ANNOTATION_OR_IDENTIFIER);
                p.bump();
                p.finish_node();
            } else {
                ellipsis.concrete();
                parse_annotation_or_identifier(p);
            }
            if !p.eat(SyntaxKind::COMMA) {
                break;
            }
        }
    }
    p.expect_closing(SyntaxKind::R_PAREN, open);
    p.finish_node();
}
