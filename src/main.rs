use std::io::{self, BufRead, Write};

use boolex::parse_pretty;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut lines = io::stdin().lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match parse_pretty(&line, true) {
            Ok(tree) => writeln!(stdout, "{tree}")?,
            Err(diagnostic) => writeln!(stdout, "{diagnostic}")?,
        }
    }
}
