//! User-driven operations that mutate or report the collections.
//!
//! Each operation validates through the prompt, asks for confirmation, and
//! only then mutates the in-memory collection and rewrites its file.

mod formulary;
mod inventory;
mod report;

pub use formulary::*;
pub use inventory::*;
pub use report::*;

use thiserror::Error;

use crate::store::StoreError;
use crate::validation::Rejection;

/// Errors that end an operation. Rejected answers are handled by re-prompting
/// and never show up here.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] std::io::Error),

    #[error("Prompt accepted an invalid answer: {0}")]
    Unvalidated(#[from] Rejection),
}

pub type ActionResult<T> = Result<T, ActionError>;

/// How one pass of an add operation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    /// Confirmed and persisted
    Committed(T),
    /// The user declined the confirmation; nothing changed
    Declined,
    /// The user entered the go-back sentinel; nothing changed
    Cancelled,
}

impl<T> Submission<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Submission::Cancelled)
    }
}
