//! Parser for a small boolean-expression language.
//!
//! The language has the literals `true` and `false`, negation `!`,
//! conjunction `&&`, disjunction `||`, and parentheses for grouping. `&&`
//! binds tighter than `||`, `!` binds tighter than both and stacks, and the
//! binary operators associate to the left. There is no whitespace: the
//! grammar is exactly the seven tokens above, butted together.
//!
//! [`parse`] turns an input string into an [`Expr`] tree or a [`ParseError`]
//! describing what was expected and where; [`parse_pretty`] renders the
//! failure as a caret diagnostic instead.
//!
//! ```
//! use boolex::{parse, Expr};
//!
//! let tree = parse("!(true&&false)||true").unwrap();
//! assert_eq!(
//!     tree,
//!     Expr::or(
//!         Expr::not(Expr::and(Expr::Literal(true), Expr::Literal(false))),
//!         Expr::Literal(true),
//!     )
//! );
//! ```

mod ast;
mod error;
mod grammar;
mod parser;
mod parsers;
mod pretty;
mod state;

pub use ast::Expr;
pub use error::{ParseError, ParseFailure};

use pretty::{pretty_error, PrettyOptions};
use state::ParseState;

/// Parse a complete boolean expression.
///
/// The whole input must be consumed: a valid expression followed by anything
/// else is a [`ParseError::TrailingInput`].
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let (value, rest) = grammar::expr(ParseState::new(input)).map_err(ParseError::Syntax)?;
    if !rest.at_end() {
        return Err(ParseError::TrailingInput {
            remainder: rest.remaining().to_string(),
            pos: rest.pos(),
        });
    }
    Ok(value)
}

/// Parse a complete boolean expression, rendering any failure as a caret
/// diagnostic ready for terminal display.
pub fn parse_pretty(input: &str, color: bool) -> Result<Expr, String> {
    parse(input).map_err(|error| {
        let options = if color {
            PrettyOptions::default()
        } else {
            PrettyOptions::no_color()
        };
        pretty_error(input, error.position(), error.to_string(), &options)
    })
}
