//! `stockroom-desktop`
//!
//! **Responsibility:** the presentation shell around the inventory store.
//!
//! This crate provides:
//! - Configuration (defaults, environment, command line)
//! - One command handler per menu action, each returning an [`Outcome`]
//! - A line-oriented interactive session driving those handlers
//!
//! The shell is a **thin layer**: every rule lives in `stockroom-inventory`.

pub mod commands;
pub mod config;
pub mod session;
pub mod types;

pub use commands::AppState;
pub use config::{Cli, DesktopConfig};
pub use session::Session;
pub use types::{Level, Notification, Outcome};
