//! Plain-text table rendering for terminal reports.
//!
//! Renderers are pure: they return the table as a `String` and never touch
//! the terminal.

mod formulary;
mod inventory;

pub use formulary::*;
pub use inventory::*;

/// Placeholder row content for an empty collection.
const EMPTY: &str = "(empty)";

/// Spaces around each cell's content.
const PADDING: usize = 2;

/// Width of a string as laid out in a fixed-width terminal.
fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// A `+----+----+` rule for the given column content widths.
fn rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + PADDING));
        line.push('+');
    }
    line
}
