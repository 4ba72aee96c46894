//! Inventory domain module.
//!
//! Holds the record model, the ordered validation rules applied to new
//! records, the in-memory [`InventoryStore`], its CSV persistence and the
//! plain-text reports rendered from it.

pub mod persistence;
pub mod record;
pub mod report;
pub mod store;
pub mod validation;

pub use persistence::{DEFAULT_STORAGE_FILE, PersistenceError};
pub use record::{NewRecord, Record};
pub use store::{DeleteOutcome, InventoryStore};
pub use validation::{Check, RULES, Rule};
