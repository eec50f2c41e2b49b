use crate::{error::ParseFailure, state::ParseState};

/// The outcome of one parsing step: the parsed value plus the state left
/// over, or a failure describing what was expected.
pub type Parsed<'p, T> = Result<(T, ParseState<'p>), ParseFailure>;

/// A parsing step, with combinators for modifying its behavior. Implemented
/// by every `fn(ParseState) -> Parsed<T>`, so grammar rules stay plain
/// functions and combinators stay closures.
pub trait Parser<'p, T: 'p>: Sized {
    fn parse(&self, state: ParseState<'p>) -> Parsed<'p, T>;

    /// Map the output value using a mapping function.
    fn map<V: 'p>(self, f: impl Fn(T) -> V + 'p) -> impl Parser<'p, V> + 'p
    where
        Self: 'p,
    {
        move |state: ParseState<'p>| self.parse(state).map(|(value, rest)| (f(value), rest))
    }

    /// Try another parser from the same position if this one fails without
    /// committing. If both miss, their failures are merged.
    fn or(self, other: impl Parser<'p, T> + 'p) -> impl Parser<'p, T> + 'p
    where
        Self: 'p,
    {
        move |state: ParseState<'p>| match self.parse(state) {
            Ok(success) => Ok(success),
            Err(failure) if failure.is_committed() => Err(failure),
            Err(failure) => match other.parse(state) {
                Ok(success) => Ok(success),
                Err(second) => Err(failure.merge(second)),
            },
        }
    }

    /// Wrap escaping failures with the name of the enclosing grammar rule.
    fn labeled(self, rule: &'static str) -> impl Parser<'p, T> + 'p
    where
        Self: 'p,
    {
        move |state: ParseState<'p>| self.parse(state).map_err(|failure| failure.labeled(rule))
    }

    /// Collapse escaping failures into a single expectation named `label`.
    fn relabel(self, label: &'static str) -> impl Parser<'p, T> + 'p
    where
        Self: 'p,
    {
        move |state: ParseState<'p>| self.parse(state).map_err(|failure| failure.relabel(label))
    }
}

impl<'p, T: 'p, F> Parser<'p, T> for F
where
    F: Fn(ParseState<'p>) -> Parsed<'p, T>,
{
    fn parse(&self, state: ParseState<'p>) -> Parsed<'p, T> {
        self(state)
    }
}
