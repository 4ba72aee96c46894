//! Command handlers, one per menu action.
//!
//! Handlers never fail: every result, including rejected input and storage
//! errors, comes back as an [`Outcome`] for the session to display.

use std::path::{Path, PathBuf};

use stockroom_core::{DomainError, Field};
use stockroom_inventory::{DeleteOutcome, InventoryStore, NewRecord, report};

use crate::config::DesktopConfig;
use crate::types::{Notification, Outcome};

/// State shared by all command handlers.
#[derive(Debug)]
pub struct AppState {
    store: InventoryStore,
    storage_path: PathBuf,
}

impl AppState {
    /// Create an empty store bound to the configured storage file.
    pub fn new(config: &DesktopConfig) -> Self {
        Self::with_store(InventoryStore::new(), config.storage_path.clone())
    }

    pub fn with_store(store: InventoryStore, storage_path: PathBuf) -> Self {
        Self {
            store,
            storage_path,
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }
}

/// Validate and store a new item.
pub fn create_item(state: &mut AppState, candidate: NewRecord) -> Outcome {
    match state.store.add_record(candidate) {
        Ok(id) => {
            tracing::info!(item_id = %id, "item added");
            Notification::info(
                "Item Added",
                format!("Item {id} has been added successfully."),
            )
            .into()
        }
        Err(err) => {
            tracing::warn!(error = %err, "item rejected");
            rejection(&err).into()
        }
    }
}

/// Look up one item and render it.
pub fn find_item(state: &AppState, item_id: &str) -> Outcome {
    match state.store.find_record(item_id) {
        Ok(found) => Outcome::report(report::render_found(item_id, found)),
        Err(err) => {
            tracing::warn!(error = %err, "lookup rejected");
            rejection(&err).into()
        }
    }
}

/// Delete an item by id.
pub fn delete_item(state: &mut AppState, item_id: &str) -> Outcome {
    match state.store.delete_record(item_id) {
        DeleteOutcome::Deleted(id) => {
            tracing::info!(item_id = %id, "item deleted");
            Notification::info("Item Deleted", format!("Item {id} has been deleted.")).into()
        }
        DeleteOutcome::NotFound(id) => rejection(&DomainError::not_found(id)).into(),
    }
}

/// Render every stored item, oldest first.
pub fn show_items(state: &AppState) -> Outcome {
    Outcome::report(report::render_all(&state.store))
}

/// Render every stored item, newest first.
pub fn most_recent_items(state: &AppState) -> Outcome {
    Outcome::report(report::render_most_recent(&state.store))
}

/// Merge the storage file into the store.
pub fn load_session(state: &mut AppState) -> Outcome {
    let path = state.storage_path.clone();
    match state.store.load_from_path(&path) {
        Ok(count) => Notification::info(
            "Storage Notification",
            format!("Storage has been uploaded ({count} items read)."),
        )
        .into(),
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "load failed");
            Notification::error(
                "Storage Error",
                format!("Could not load {}: {err}", path.display()),
            )
            .into()
        }
    }
}

/// Write the store to the storage file.
pub fn save_session(state: &AppState) -> Outcome {
    let path = &state.storage_path;
    match state.store.save_to_path(path) {
        Ok(count) => Notification::info(
            "Storage Notification",
            format!("Storage has been updated ({count} items written)."),
        )
        .into(),
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "save failed");
            Notification::error(
                "Storage Error",
                format!("Could not save {}: {err}", path.display()),
            )
            .into()
        }
    }
}

/// Map a domain error to the notification shown to the user.
pub fn rejection(err: &DomainError) -> Notification {
    match err {
        DomainError::MissingField(field) => Notification::error(
            "Incomplete Information",
            format!("Please fill out the entire information ({field} is missing)."),
        ),
        DomainError::InvalidFormat { field, reason } => Notification::error(
            invalid_title(*field),
            format!("Please enter a valid {field}: {reason}."),
        ),
        DomainError::DuplicateId(id) => Notification::error(
            "Invalid ItemID",
            format!("ItemID {id} is already in use. Try again."),
        ),
        DomainError::NotFound(id) => {
            Notification::info("Item Not Found", format!("Item {id} is not in the system."))
        }
    }
}

fn invalid_title(field: Field) -> &'static str {
    match field {
        Field::ItemId => "Invalid ItemID",
        Field::Product => "Invalid Product Name",
        Field::Quantity => "Invalid Quantity",
        Field::FirstName => "Invalid First Name",
        Field::LastName => "Invalid Last Name",
        Field::PhoneNumber => "Invalid Phone Number",
        Field::Email => "Invalid Email Address",
    }
}
