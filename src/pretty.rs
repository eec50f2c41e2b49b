use crate::state::{col, line};

/// Options to configure the output of pretty errors.
pub struct PrettyOptions {
    /// The color of the caret pointing at the failure.
    error_indicator_color: &'static str,
    /// The color of the `[line:col]` position tag.
    position_color: &'static str,
    /// The color code used for everything that is not usually colored.
    default_color: &'static str,
    /// Whether to show the ^ under the failure position.
    show_caret: bool,
}

impl PrettyOptions {
    /// No colors.
    pub fn no_color() -> Self {
        PrettyOptions {
            error_indicator_color: "",
            position_color: "",
            default_color: "",
            show_caret: true,
        }
    }
}

impl Default for PrettyOptions {
    fn default() -> Self {
        PrettyOptions {
            error_indicator_color: "\x1b[31m",
            position_color: "\x1b[33m",
            default_color: "\x1b[0m",
            show_caret: true,
        }
    }
}

/// Generate a pretty error message visually pointing out the location of the
/// error.
#[must_use]
pub fn pretty_error(input: &str, pos: usize, error: String, options: &PrettyOptions) -> String {
    let pos = pos.min(input.len());
    let line = line(&input[..pos]);
    let col = col(&input[..pos]);
    let error_line = input.lines().nth(line - 1).unwrap_or_default();

    let (window, cursor) = error_window(error_line, col);
    let padding = " ".repeat(cursor);
    let caret = if options.show_caret { "^" } else { "" };
    let red = options.error_indicator_color;
    let yellow = options.position_color;
    let reset = options.default_color;
    format!(
        "{window}\n{padding}{red}{caret}{reset}\n{yellow}[{line}:{col}]{reset} {error}",
        col = col + 1
    )
}

/// Slice the error line down to at most 40 characters either side of the
/// failure column, counting characters rather than bytes so multi-byte input
/// cannot split.
fn error_window(error_line: &str, col: usize) -> (String, usize) {
    let start = col.saturating_sub(40);
    let window = error_line.chars().skip(start).take(col + 40 - start).collect();
    (window, col - start)
}
