//! Formulary Core Library
//!
//! Validated formulary and inventory records for a small pharmacy, persisted
//! as two JSON files.
//!
//! # Architecture
//!
//! ```text
//!   formulary.json        inventory.json
//!          │                     │
//!          └──── load + validate ┘
//!                     │
//!                  Session ◄──── Prompter (menu choice, answers)
//!                     │
//!             ┌───────┴────────┐
//!             ▼                ▼
//!     add to formulary   add pack to inventory
//!   (split, dedupe)     (formulary check, merge by key)
//!             │                │
//!             └── confirm ─────┘
//!                     │
//!          rewrite the affected file
//! ```
//!
//! # Core Principle
//!
//! **A file that exists but fails validation is never repaired.** Loading
//! stops with an error rather than dropping or coercing records.
//!
//! # Modules
//!
//! - [`models`]: Domain types (InventoryItem, Formulary, Inventory)
//! - [`validation`]: Numeric validator, name normalizer, input and file shape rules
//! - [`store`]: JSON file loading and writing
//! - [`actions`]: Add and report operations driven through a [`Prompter`]
//! - [`report`]: Table rendering
//! - [`session`]: Menu loop and session control

pub mod actions;
pub mod models;
pub mod prompt;
pub mod report;
pub mod session;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use actions::{ActionError, ActionResult, MergeOutcome, Submission};
pub use models::{Formulary, Inventory, InventoryItem};
pub use prompt::Prompter;
pub use session::{MenuAction, Session, SessionControl};
pub use store::{DataStore, StoreError, StoreResult};
pub use validation::{capitalize, is_positive_whole_number, Rejection};
