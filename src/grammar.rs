use crate::{
    ast::{BinOp, Expr},
    error::ParseFailure,
    parser::{Parsed, Parser},
    parsers::{boolean, literal, operator},
    state::ParseState,
};

/// expr := term ("||" term)*
pub fn expr(state: ParseState<'_>) -> Parsed<'_, Expr> {
    let (first, state) = term.labeled("expr").parse(state)?;
    let (rest, state) = operator_chain(state, operator("||", BinOp::Or), term);
    Ok((fold_left(first, rest), state))
}

/// term := factor ("&&" factor)*
pub fn term(state: ParseState<'_>) -> Parsed<'_, Expr> {
    let (first, state) = factor.labeled("term").parse(state)?;
    let (rest, state) = operator_chain(state, operator("&&", BinOp::And), factor);
    Ok((fold_left(first, rest), state))
}

/// factor := "!" factor | "(" expr ")" | boolean
pub fn factor(state: ParseState<'_>) -> Parsed<'_, Expr> {
    negation
        .or(grouping)
        .or(constant)
        .labeled("factor")
        .parse(state)
}

/// The operand is another factor, so `!` binds tighter than the binary
/// operators and stacks. Once the `!` has matched, a failing operand is not
/// retried against the other alternatives.
fn negation(state: ParseState<'_>) -> Parsed<'_, Expr> {
    let ((), state) = literal("!").parse(state)?;
    let (operand, state) = factor(state).map_err(ParseFailure::commit)?;
    Ok((Expr::not(operand), state))
}

/// Parentheses wrap a whole expression and leave no node behind.
fn grouping(state: ParseState<'_>) -> Parsed<'_, Expr> {
    let ((), state) = literal("(").parse(state)?;
    let (inner, state) = expr(state)?;
    let ((), state) = literal(")").parse(state)?;
    Ok((inner, state))
}

fn constant(state: ParseState<'_>) -> Parsed<'_, Expr> {
    let (value, state) = boolean().parse(state)?;
    Ok((Expr::Literal(value), state))
}

/// Greedily collect `op`-then-`operand` pairs in source order. Stops at the
/// first position where the pair no longer matches, discarding that failure;
/// a partial trailing match consumes nothing.
fn operator_chain<'p>(
    state: ParseState<'p>,
    op: impl Parser<'p, BinOp>,
    operand: impl Parser<'p, Expr>,
) -> (Vec<(BinOp, Expr)>, ParseState<'p>) {
    let mut pairs = Vec::new();
    let mut current = state;
    loop {
        let Ok((tag, after_op)) = op.parse(current) else {
            break;
        };
        let Ok((rhs, after_operand)) = operand.parse(after_op) else {
            break;
        };
        pairs.push((tag, rhs));
        current = after_operand;
    }
    (pairs, current)
}

/// Fold the flat operand/operator sequence into a left-associative tree:
/// `a op b op c` nests as `(a op b) op c`.
fn fold_left(first: Expr, rest: Vec<(BinOp, Expr)>) -> Expr {
    rest.into_iter()
        .fold(first, |lhs, (op, rhs)| op.apply(lhs, rhs))
}
