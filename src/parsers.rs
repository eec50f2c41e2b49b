use crate::{ast::BinOp, error::ParseFailure, parser::Parser, state::ParseState};

/// Create a parser matching an exact string, case-sensitively. A failure
/// reports the position where the input diverged from the literal, so a
/// partial match counts as progress.
pub fn literal<'p>(expected: &'static str) -> impl Parser<'p, ()> + 'p {
    move |state: ParseState<'p>| {
        let matched = expected
            .bytes()
            .zip(state.remaining().bytes())
            .take_while(|(a, b)| a == b)
            .count();
        if matched == expected.len() {
            Ok(((), state.advance(matched)))
        } else {
            Err(ParseFailure::expected(expected, state.pos() + matched))
        }
    }
}

/// Match `true` or `false`, in that order. The two literal failures fold
/// into a single expectation labeled `boolean`.
pub fn boolean<'p>() -> impl Parser<'p, bool> + 'p {
    literal("true")
        .map(|()| true)
        .or(literal("false").map(|()| false))
        .relabel("boolean")
}

/// Match an operator symbol, producing its tag.
pub fn operator<'p>(symbol: &'static str, op: BinOp) -> impl Parser<'p, BinOp> + 'p {
    literal(symbol).map(move |()| op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_advances_past_an_exact_match() {
        let ((), rest) = literal("&&").parse(ParseState::new("&&true")).unwrap();
        assert_eq!(rest.remaining(), "true");
        assert_eq!(rest.pos(), 2);
    }

    #[test]
    fn literal_requires_the_full_text() {
        let failure = literal("&&").parse(ParseState::new("&true")).unwrap_err();
        assert_eq!(failure.pos(), 1);
        assert_eq!(failure.to_string(), "expected &&");
    }

    #[test]
    fn partial_match_reports_the_divergence_point() {
        let failure = literal("false").parse(ParseState::new("falsy")).unwrap_err();
        assert_eq!(failure.pos(), 4);
    }

    #[test]
    fn boolean_produces_the_matched_value() {
        let (value, _) = boolean().parse(ParseState::new("true")).unwrap();
        assert!(value);
        let (value, _) = boolean().parse(ParseState::new("false")).unwrap();
        assert!(!value);
    }

    #[test]
    fn boolean_failure_is_a_single_label() {
        let failure = boolean().parse(ParseState::new("flase")).unwrap_err();
        assert_eq!(failure.to_string(), "expected boolean");
        assert_eq!(failure.pos(), 1);
    }

    #[test]
    fn operator_produces_its_tag() {
        let (op, rest) = operator("||", BinOp::Or)
            .parse(ParseState::new("||false"))
            .unwrap();
        assert_eq!(op, BinOp::Or);
        assert_eq!(rest.remaining(), "false");
    }
}
