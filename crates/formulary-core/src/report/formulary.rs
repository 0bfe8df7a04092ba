//! Formulary table.

use super::{display_width, rule, EMPTY, PADDING};

const HEADING: &str = "Formulary";

/// Render the formulary as a one-column table.
///
/// With `show_heading` false the `Formulary` header block is left out, which
/// is how pending additions are summarised before confirmation.
pub fn render_formulary(formulary: &[String], show_heading: bool) -> String {
    let width = formulary
        .iter()
        .map(|name| display_width(name))
        .fold(display_width(HEADING), usize::max)
        + PADDING;
    let content_width = width - PADDING;
    let line = rule(&[content_width]);

    let rows = if formulary.is_empty() {
        format!("| {:<w$} |", EMPTY, w = content_width)
    } else {
        formulary
            .iter()
            .map(|name| format!("| {:<w$} |", name, w = content_width))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut out = String::new();
    if show_heading {
        out.push_str(&format!(
            "\n{}\n| {:<w$} |",
            line,
            HEADING,
            w = content_width
        ));
    }
    out.push_str(&format!("\n{}\n{}\n{}\n", line, rows, line));
    out
}
