//! Line-based terminal prompter.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use formulary_core::prompt::{Prompter, Validate};

/// Escape sequence that resets the terminal screen.
const CLEAR_SCREEN: &str = "\u{1b}c";

/// Prompter that reads answers line by line and writes prompts to an output.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one trimmed line.
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "? {} ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    fn complain(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, ">> {}", message)
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn clear(&mut self) -> io::Result<()> {
        write!(self.output, "{}", CLEAR_SCREEN)?;
        self.output.flush()
    }

    fn show(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn ask_text(&mut self, message: &str, validate: Validate<'_>) -> io::Result<String> {
        loop {
            let answer = self.ask(message)?;
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(rejection) => self.complain(&rejection.to_string())?,
            }
        }
    }

    fn ask_confirm(&mut self, message: &str) -> io::Result<bool> {
        loop {
            let question = format!("{} (Y/n)", message);
            match self.ask(&question)?.to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.complain("Please answer y or n.")?,
            }
        }
    }

    fn ask_select(&mut self, message: &str, choices: &[&str]) -> io::Result<usize> {
        writeln!(self.output, "? {}", message)?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, choice)?;
        }

        loop {
            let answer = self.ask("Choice:")?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
                _ => self.complain(&format!("Enter a number from 1 to {}.", choices.len()))?,
            }
        }
    }
}
