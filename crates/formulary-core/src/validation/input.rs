//! Rules for interactive answers.

use strsim::jaro_winkler;

use super::{capitalize, parse_positive_whole_number, PackField, Rejection};
use crate::models::formulary_contains;

/// Minimum similarity for a formulary entry to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// A validated answer to the formulary name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormularyInput {
    /// The user asked to go back
    Cancel,
    /// Normalized names, in entry order
    Names(Vec<String>),
}

/// Check whether an answer is the standalone `q`/`Q` go-back sentinel.
pub fn is_cancel(input: &str) -> bool {
    matches!(input.trim(), "q" | "Q")
}

/// Validate an answer to the formulary name prompt against the current formulary.
pub fn check_formulary_input(formulary: &[String], input: &str) -> Result<(), Rejection> {
    let input = input.trim();

    if is_cancel(input) {
        return Ok(());
    }
    if input.is_empty() {
        return Err(Rejection::EmptyName);
    }
    if input
        .chars()
        .any(|c| !(c.is_ascii_alphabetic() || c == ',' || c == ' '))
    {
        return Err(Rejection::FormularyCharacters);
    }
    // Commas and spaces alone do not name anything
    if !input.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(Rejection::EmptyName);
    }

    let dupes = find_duplicates(formulary, &split_names(input));
    if !dupes.is_empty() {
        return Err(Rejection::Duplicates(dupes));
    }

    Ok(())
}

/// Validate and split an answer to the formulary name prompt.
pub fn parse_formulary_input(
    formulary: &[String],
    input: &str,
) -> Result<FormularyInput, Rejection> {
    check_formulary_input(formulary, input)?;
    if is_cancel(input) {
        return Ok(FormularyInput::Cancel);
    }
    Ok(FormularyInput::Names(split_names(input)))
}

/// Split comma-separated names and normalize each one.
///
/// Empty tokens are dropped. Repeated names within the same input are kept.
pub fn split_names(input: &str) -> Vec<String> {
    input
        .trim()
        .split(',')
        .map(|token| capitalize(token.trim()))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Check whether a normalized name matches an entry once that entry is normalized too.
fn is_listed(formulary: &[String], name: &str) -> bool {
    formulary.iter().any(|entry| capitalize(entry) == name)
}

/// Names that already exist in the formulary, compared in normalized form.
pub fn find_duplicates(formulary: &[String], names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter(|name| is_listed(formulary, name))
        .cloned()
        .collect()
}

/// Names that are not yet in the formulary, compared in normalized form.
pub fn pending_additions(formulary: &[String], names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter(|name| !is_listed(formulary, name))
        .cloned()
        .collect()
}

/// Validate an answer to the inventory name prompt against the current formulary.
pub fn check_medication_name(formulary: &[String], input: &str) -> Result<(), Rejection> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Rejection::EmptyName);
    }
    if !input.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Rejection::MedicationCharacters);
    }
    if is_cancel(input) {
        return Ok(());
    }

    let name = capitalize(input);
    if !formulary_contains(formulary, &name) {
        return Err(Rejection::NotInFormulary {
            suggestion: closest_entry(formulary, &name),
        });
    }

    Ok(())
}

/// Validate an answer to one of the numeric pack prompts.
pub fn check_pack_number(field: PackField, input: &str) -> Result<(), Rejection> {
    parse_positive_whole_number(input)
        .map(|_| ())
        .ok_or(Rejection::NotPositiveWholeNumber { field })
}

/// Most similar formulary entry, if any is close enough to be a likely typo.
///
/// An entry that normalizes to `name` itself is never offered.
pub fn closest_entry(formulary: &[String], name: &str) -> Option<String> {
    let target = name.to_lowercase();
    formulary
        .iter()
        .filter(|entry| capitalize(entry) != name)
        .map(|entry| (entry, jaro_winkler(&entry.to_lowercase(), &target)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(entry, _)| entry.clone())
}
