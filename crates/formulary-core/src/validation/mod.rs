//! Validation rules that turn raw user text and raw JSON into trusted records.
//!
//! Every rule takes the collection snapshot it checks against as an explicit
//! argument, so the rules are pure and can be tested without any I/O.

mod input;
mod normalizer;
mod numeric;
mod shape;

pub use input::*;
pub use normalizer::*;
pub use numeric::*;
pub use shape::*;

use std::fmt;

use thiserror::Error;

/// A single user answer broke a domain rule.
///
/// The `Display` text is the message shown when the prompt is asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Medication name cannot be empty.")]
    EmptyName,

    #[error("Only letters, commas and spaces allowed.")]
    FormularyCharacters,

    #[error("Only letters allowed. E.g. Paracetamol")]
    MedicationCharacters,

    #[error("{}", not_in_formulary_message(.suggestion))]
    NotInFormulary { suggestion: Option<String> },

    #[error("Only 1 positive whole number greater than 0 for {field}. E.g. 100, 25, 1, 999 etc.")]
    NotPositiveWholeNumber { field: PackField },

    #[error("{}", duplicates_message(.0))]
    Duplicates(Vec<String>),

    #[error("Total packs of {name} would exceed {}.", u64::MAX)]
    PackCountOverflow { name: String },
}

/// Numeric fields of an inventory pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackField {
    Strength,
    PackSize,
    TotalPacks,
}

impl PackField {
    /// Prompt shown when asking for this field.
    pub fn prompt(&self) -> &'static str {
        match self {
            PackField::Strength => "Strength:",
            PackField::PackSize => "Pack size:",
            PackField::TotalPacks => "Number of packs:",
        }
    }
}

impl fmt::Display for PackField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackField::Strength => "strength",
            PackField::PackSize => "pack size",
            PackField::TotalPacks => "number of packs",
        };
        f.write_str(name)
    }
}

fn not_in_formulary_message(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(entry) => format!(
            "Only medication from formulary allowed. Did you mean \"{}\"?",
            entry
        ),
        None => "Only medication from formulary allowed.".to_string(),
    }
}

fn duplicates_message(dupes: &[String]) -> String {
    let plural = if dupes.len() > 1 { "s" } else { "" };
    let lines = dupes
        .iter()
        .map(|dupe| format!("   \"{}\"", dupe))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Found duplicate medication{}:\n{}", plural, lines)
}
