//! `stockroom-core` — domain building blocks shared by the inventory crates.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation).

pub mod error;
pub mod field;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use field::Field;
pub use id::ItemId;
