//! Formulary model.

/// Ordered list of approved medication names, stored in canonical form.
pub type Formulary = Vec<String>;

/// Check whether a name is present in the formulary exactly as given.
pub fn formulary_contains(formulary: &[String], name: &str) -> bool {
    formulary.iter().any(|entry| entry == name)
}
