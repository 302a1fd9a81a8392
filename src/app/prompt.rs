use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Something that can ask the user to pick one entry from a list.
pub trait LanguagePicker {
    /// Returns `None` when the user cancels.
    fn pick(&mut self, message: &str, choices: &[String]) -> Result<Option<String>>;
}

/// Numbered single-select list over a line-oriented reader and writer.
pub struct TerminalPicker<R, W> {
    input: R,
    output: W,
}

impl TerminalPicker<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn print_choices(&mut self, message: &str, choices: &[String]) -> io::Result<()> {
        writeln!(self.output, "? {}", message)?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, choice)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> LanguagePicker for TerminalPicker<R, W> {
    fn pick(&mut self, message: &str, choices: &[String]) -> Result<Option<String>> {
        if choices.is_empty() {
            return Ok(None);
        }
        self.print_choices(message, choices)
            .context("Failed to write prompt")?;

        loop {
            write!(self.output, "Enter a number (1-{}): ", choices.len())?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read selection")?;
            let answer = line.trim();
            if read == 0 || answer.is_empty() {
                return Ok(None);
            }

            if let Some(choice) = resolve_answer(answer, choices) {
                return Ok(Some(choice.clone()));
            }
            writeln!(self.output, "'{}' is not one of the choices.", answer)?;
        }
    }
}

/// Accepts a 1-based index or an exact choice name.
fn resolve_answer<'a>(answer: &str, choices: &'a [String]) -> Option<&'a String> {
    match answer.parse::<usize>() {
        Ok(n) if n >= 1 => choices.get(n - 1),
        Ok(_) => None,
        Err(_) => choices.iter().find(|c| c.as_str() == answer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn choices() -> Vec<String> {
        vec!["python".to_string(), "rust".to_string()]
    }

    fn pick_with(input: &str) -> (Option<String>, String) {
        let mut out = Vec::new();
        let picked = TerminalPicker::new(Cursor::new(input.as_bytes()), &mut out)
            .pick("Select the programming language of the repository", &choices())
            .unwrap();
        (picked, String::from_utf8(out).unwrap())
    }

    #[test]
    fn picks_by_number() {
        let (picked, shown) = pick_with("2\n");
        assert_eq!(picked.as_deref(), Some("rust"));
        assert!(shown.contains("1) python"));
        assert!(shown.contains("2) rust"));
    }

    #[test]
    fn picks_by_name() {
        let (picked, _) = pick_with("python\n");
        assert_eq!(picked.as_deref(), Some("python"));
    }

    #[test]
    fn reprompts_on_bad_answer() {
        let (picked, shown) = pick_with("7\ngo\n1\n");
        assert_eq!(picked.as_deref(), Some("python"));
        assert!(shown.contains("'7' is not one of the choices."));
        assert!(shown.contains("'go' is not one of the choices."));
    }

    #[test]
    fn empty_line_or_eof_cancels() {
        assert_eq!(pick_with("\n").0, None);
        assert_eq!(pick_with("").0, None);
        assert_eq!(pick_with("0\n").0, None);
    }
}
