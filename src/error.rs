use std::fmt::{self, Display};

use thiserror::Error;

/// One failed expectation: the label of what a matcher wanted, the chain of
/// grammar rules the attempt was inside (innermost first), and the position
/// the match stopped at.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Expectation {
    label: &'static str,
    context: Vec<&'static str>,
    pos: usize,
}

/// Why a parse attempt failed. Holds one expectation per attempted
/// alternative, in attempt order, plus the deepest position any of them
/// reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    expected: Vec<Expectation>,
    pos: usize,
    committed: bool,
}

impl ParseFailure {
    /// A failure from a single matcher that wanted `label` at `pos`.
    pub(crate) fn expected(label: &'static str, pos: usize) -> Self {
        ParseFailure {
            expected: vec![Expectation {
                label,
                context: Vec::new(),
                pos,
            }],
            pos,
            committed: false,
        }
    }

    /// The deepest input position reached before the parse failed.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Record the grammar rule this failure escaped from.
    pub(crate) fn labeled(mut self, rule: &'static str) -> Self {
        for expectation in &mut self.expected {
            expectation.context.push(rule);
        }
        self
    }

    /// Collapse every expectation into a single one named `label`, keeping
    /// the deepest position.
    pub(crate) fn relabel(mut self, label: &'static str) -> Self {
        self.expected = vec![Expectation {
            label,
            context: Vec::new(),
            pos: self.pos,
        }];
        self
    }

    /// Fold in the failure of a later alternative tried from the same
    /// position. Expectations accumulate in attempt order; the deeper
    /// position wins.
    pub(crate) fn merge(mut self, other: ParseFailure) -> Self {
        self.expected.extend(other.expected);
        self.pos = self.pos.max(other.pos);
        self.committed = self.committed || other.committed;
        self
    }

    /// Mark this failure as past the point of backtracking. Ordered choice
    /// stops trying alternatives once it sees a committed failure.
    pub(crate) fn commit(mut self) -> Self {
        self.committed = true;
        self
    }

    pub(crate) fn is_committed(&self) -> bool {
        self.committed
    }
}

// The expectation that made the most progress leads the message (ties go to
// the one attempted first) and its rule chain is walked outward in full.
// Every other expectation contributes its own label once.
impl Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lead = self
            .expected
            .iter()
            .position(|expectation| expectation.pos == self.pos)
            .unwrap_or(0);
        let Some(deepest) = self.expected.get(lead) else {
            return f.write_str("unexpected token or end of input");
        };

        write!(f, "expected {}", deepest.label)?;
        let mut chain = deepest.context.iter();
        if let Some(enclosing) = chain.next() {
            write!(f, " while processing {enclosing}")?;
        }
        for rule in chain {
            write!(f, ", followed by {rule}")?;
        }

        let mut seen = vec![deepest.label];
        for (index, alternative) in self.expected.iter().enumerate() {
            if index == lead || seen.contains(&alternative.label) {
                continue;
            }
            seen.push(alternative.label);
            write!(f, " or {}", alternative.label)?;
        }
        Ok(())
    }
}

/// An error returned by [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No expression could be parsed; describes what was expected and where.
    #[error("{0}")]
    Syntax(ParseFailure),
    /// A valid expression was parsed but did not consume the whole input.
    #[error("could not parse {remainder:?}")]
    TrailingInput {
        /// The unconsumed suffix of the input.
        remainder: String,
        /// Byte offset where the suffix starts.
        pos: usize,
    },
}

impl ParseError {
    /// Byte offset in the input where the error occurred.
    pub fn position(&self) -> usize {
        match self {
            ParseError::Syntax(failure) => failure.pos(),
            ParseError::TrailingInput { pos, .. } => *pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_expectation_walks_its_context() {
        let failure = ParseFailure::expected("!", 0)
            .labeled("factor")
            .labeled("term");
        assert_eq!(
            failure.to_string(),
            "expected ! while processing factor, followed by term"
        );
    }

    #[test]
    fn merged_alternatives_keep_attempt_order() {
        let failure = ParseFailure::expected("!", 0)
            .merge(ParseFailure::expected("(", 0))
            .merge(ParseFailure::expected("boolean", 0))
            .labeled("factor");
        assert_eq!(
            failure.to_string(),
            "expected ! while processing factor or ( or boolean"
        );
    }

    #[test]
    fn deepest_alternative_leads_the_message() {
        let failure = ParseFailure::expected("!", 0).merge(ParseFailure::expected(")", 5));
        assert_eq!(failure.pos(), 5);
        assert_eq!(failure.to_string(), "expected ) or !");
    }

    #[test]
    fn ties_go_to_the_first_alternative_attempted() {
        let failure = ParseFailure::expected("(", 2).merge(ParseFailure::expected("boolean", 2));
        assert_eq!(failure.to_string(), "expected ( or boolean");
    }

    #[test]
    fn relabel_collapses_alternatives() {
        let failure = ParseFailure::expected("true", 3)
            .merge(ParseFailure::expected("false", 0))
            .relabel("boolean");
        assert_eq!(failure.pos(), 3);
        assert_eq!(failure.to_string(), "expected boolean");
    }

    #[test]
    fn duplicate_labels_print_once() {
        let failure =
            ParseFailure::expected("boolean", 1).merge(ParseFailure::expected("boolean", 0));
        assert_eq!(failure.to_string(), "expected boolean");
    }

    #[test]
    fn merging_preserves_commitment() {
        let failure = ParseFailure::expected("!", 0)
            .commit()
            .merge(ParseFailure::expected("(", 0));
        assert!(failure.is_committed());
    }

    #[test]
    fn trailing_input_message_quotes_the_suffix() {
        let error = ParseError::TrailingInput {
            remainder: " true".to_string(),
            pos: 4,
        };
        assert_eq!(error.to_string(), "could not parse \" true\"");
        assert_eq!(error.position(), 4);
    }
}
