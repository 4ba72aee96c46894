//! Plain-text views of the store, as shown in the shell's output panel.

use crate::record::Record;
use crate::store::InventoryStore;

/// Every record, oldest first.
pub fn render_all(store: &InventoryStore) -> String {
    render_list("Stored storage:", store.list_all())
}

/// Every record, newest first.
pub fn render_most_recent(store: &InventoryStore) -> String {
    render_list("Most Recent Stored Storage:", store.list_most_recent())
}

/// Result of a lookup by id.
pub fn render_found(item_id: &str, record: Option<&Record>) -> String {
    match record {
        Some(record) => format!("Item found:\n\n{}", render_record(record)),
        None => format!("Item not found for itemID: {item_id}\n"),
    }
}

/// One record as a block of `label: value` lines.
pub fn render_record(record: &Record) -> String {
    format!(
        "itemID: {}\nProduct: {}\nQuantity: {}\nFull Name: {}\nPhone Number: {}\nEmail Address: {}\n",
        record.item_id(),
        record.product(),
        record.quantity(),
        record.full_name(),
        record.phone_number(),
        record.email(),
    )
}

fn render_list<'a>(title: &str, records: impl Iterator<Item = &'a Record>) -> String {
    let mut out = format!("{title}\n");
    for record in records {
        out.push('\n');
        out.push_str(&render_record(record));
    }
    out
}
