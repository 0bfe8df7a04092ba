//! The prompting seam between domain actions and whatever asks the user.

use std::io;

use crate::validation::Rejection;

/// Check applied to each answer before a prompt accepts it.
pub type Validate<'a> = &'a dyn Fn(&str) -> Result<(), Rejection>;

/// Something that can ask the user questions.
///
/// Implementations block until an answer is available.
pub trait Prompter {
    /// Clear the screen before an action starts.
    fn clear(&mut self) -> io::Result<()>;

    /// Display a block of text, such as a rendered table.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Ask for free text, re-asking with the rejection message until
    /// `validate` accepts. Returns the trimmed accepted answer.
    fn ask_text(&mut self, message: &str, validate: Validate<'_>) -> io::Result<String>;

    /// Ask a yes/no question.
    fn ask_confirm(&mut self, message: &str) -> io::Result<bool>;

    /// Ask the user to pick one of `choices`, returning its index.
    fn ask_select(&mut self, message: &str, choices: &[&str]) -> io::Result<usize>;
}
