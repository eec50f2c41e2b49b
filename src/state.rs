/// A cursor into the input. Passed by value between parsing steps, so a
/// failed branch is abandoned by dropping its copy; nothing is ever rewound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseState<'p> {
    input: &'p str,
    pos: usize,
}

impl<'p> ParseState<'p> {
    pub fn new(input: &'p str) -> Self {
        ParseState { input, pos: 0 }
    }

    /// The unconsumed suffix of the input.
    pub fn remaining(&self) -> &'p str {
        &self.input[self.pos..]
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// A new state with `bytes` more of the input consumed.
    pub fn advance(self, bytes: usize) -> Self {
        ParseState {
            input: self.input,
            pos: self.input.len().min(self.pos + bytes),
        }
    }
}

pub fn line(s: &str) -> usize {
    s.bytes().filter(|b| *b == b'\n').count() + 1
}

pub fn col(s: &str) -> usize {
    s.chars().rev().take_while(|c| *c != '\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_returns_a_new_state() {
        let state = ParseState::new("true");
        let advanced = state.advance(2);
        assert_eq!(state.remaining(), "true");
        assert_eq!(advanced.remaining(), "ue");
        assert_eq!(advanced.pos(), 2);
    }

    #[test]
    fn advance_clamps_to_the_end() {
        let state = ParseState::new("!").advance(10);
        assert!(state.at_end());
        assert_eq!(state.remaining(), "");
    }

    #[test]
    fn line_and_col_count_from_the_consumed_prefix() {
        assert_eq!(line(""), 1);
        assert_eq!(col(""), 0);
        assert_eq!(line("true\ntr"), 2);
        assert_eq!(col("true\ntr"), 2);
    }
}
