//! Medication name normalizer.
//!
//! Names are compared and stored in a canonical "Title Case" form: the whole
//! name is lower-cased, then the first character after every ASCII space is
//! upper-cased. Runs of spaces are kept as they are.

/// Canonicalize a medication name.
pub fn capitalize(input: &str) -> String {
    input
        .to_lowercase()
        .split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
