//! Expression parsing
//!
//! The precedence chain, lowest to highest binding:
//!
//! ```text
//! Expression → Assignment → Conditional → '||' → '&&' → '|' → '^' → '&'
//!     → Equality → Relational/instanceof → Shift → Additive → Multiplicative
//!     → Unary (prefix, cast) → Postfix (selectors) → Primary
//! ```
//!
//! Binary tiers share one precedence-climbing loop: each operand is parsed
//! at the next-higher tier and the loop continues while the lookahead is an
//! operator of the current tier or higher. Operands are wrapped after the
//! fact through a checkpoint, so no flat operator list is ever rebalanced.

mod primary;
mod unary;

use super::*;
use crate::parser::token_set::ASSIGN_OPS;

pub(crate) use primary::parse_argument_list;

/// Parse an expression; false if nothing was consumed
pub(crate) fn parse_expression(p: &mut Parser<'_>) -> bool {
    p.nested(true, parse_assignment)
}

/// Parse an expression, reporting E0401 if none starts here
pub(crate) fn expect_expression(p: &mut Parser<'_>) -> bool {
    if parse_expression(p) {
        return true;
    }
    p.error(
        ErrorCode::E0401,
        format!("expected an expression, found {}", p.found_description()),
    );
    false
}

/// Assignment = Conditional (AssignOp Expression)?
///
/// Right associative: `a = b = c` is `a = (b = c)`.
fn parse_assignment(p: &mut Parser<'_>) -> bool {
    let cp = p.checkpoint();
    if !parse_conditional_expression(p) {
        return false;
    }
    if p.at_any(ASSIGN_OPS) {
        p.start_node_at(cp, SyntaxKind::ASSIGN_EXPR);
        p.bump();
        expect_operand(p, parse_expression);
        p.finish_node();
    }
    true
}

/// Conditional = Binary ('?' Expression ':' Conditional)?
pub(crate) fn parse_conditional_expression(p: &mut Parser<'_>) -> bool {
    let cp = p.checkpoint();
    if !parse_binary(p, 1) {
        return false;
    }
    if p.at(SyntaxKind::QUESTION) {
        p.start_node_at(cp, SyntaxKind::CONDITIONAL_EXPR);
        p.bump();
        expect_operand(p, parse_expression);
        if p.expect(SyntaxKind::COLON) {
            expect_operand(p, parse_conditional_expression);
        }
        p.finish_node();
    }
    true
}

fn expect_operand(p: &mut Parser<'_>, rule: fn(&mut Parser<'_>) -> bool) {
    if !rule(p) {
        p.error(
            ErrorCode::E0402,
            format!("expected an operand, found {}", p.found_description()),
        );
        p.missing();
    }
}

// =============================================================================
// Binary operators
// =============================================================================

/// Binding power of the binary operator at the cursor, and how many tokens spell it
///
/// Shift operators are not lexed as single tokens; `>>` and `>>>` are
/// reassembled here from adjacent `>` tokens so that nested type arguments
/// never need splitting.
fn binary_op(p: &Parser<'_>) -> Option<(u8, usize)> {
    let op = match p.current() {
        SyntaxKind::PIPE_PIPE => (1, 1),
        SyntaxKind::AMP_AMP => (2, 1),
        SyntaxKind::PIPE => (3, 1),
        SyntaxKind::CARET => (4, 1),
        SyntaxKind::AMP => (5, 1),
        SyntaxKind::EQ_EQ | SyntaxKind::BANG_EQ => (6, 1),
        SyntaxKind::LT if p.nth_at(1, SyntaxKind::LT) && p.nth_joined(0) => (8, 2),
        SyntaxKind::GT if p.nth_at(1, SyntaxKind::GT) && p.nth_joined(0) => {
            if p.nth_at(2, SyntaxKind::GT) && p.nth_joined(1) {
                (8, 3)
            } else {
                (8, 2)
            }
        }
        SyntaxKind::LT
        | SyntaxKind::GT
        | SyntaxKind::LT_EQ
        | SyntaxKind::GT_EQ
        | SyntaxKind::INSTANCEOF_KW => (7, 1),
        SyntaxKind::PLUS | SyntaxKind::MINUS => (9, 1),
        SyntaxKind::STAR | SyntaxKind::SLASH | SyntaxKind::PERCENT => (10, 1),
        _ => return None,
    };
    Some(op)
}

/// Binary = Unary (BinaryOp Unary)*, climbing from `min_bp`
///
/// Every operator is left associative.
fn parse_binary(p: &mut Parser<'_>, min_bp: u8) -> bool {
    let cp = p.checkpoint();
    if !unary::parse_unary(p) {
        return false;
    }
    while let Some((bp, len)) = binary_op(p) {
        if bp < min_bp {
            break;
        }
        if p.at(SyntaxKind::INSTANCEOF_KW) {
            p.start_node_at(cp, SyntaxKind::INSTANCEOF_EXPR);
            p.bump();
            types::expect_type(p);
            p.finish_node();
            continue;
        }
        p.start_node_at(cp, SyntaxKind::BINARY_EXPR);
        for _ in 0..len {
            p.bump();
        }
        if !parse_binary(p, bp + 1) {
            p.error(
                ErrorCode::E0402,
                format!("expected an operand, found {}", p.found_description()),
            );
            p.missing();
        }
        p.finish_node();
    }
    true
}
