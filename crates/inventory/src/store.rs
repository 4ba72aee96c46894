//! In-memory inventory store.

use std::collections::HashMap;

use serde::Serialize;

use stockroom_core::{DomainResult, ItemId};

use crate::record::{NewRecord, Record};
use crate::validation;

/// Result of a delete request. Both variants are normal outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "item_id", rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted(ItemId),
    NotFound(ItemId),
}

/// All stored records, keyed by item id, plus their insertion order.
///
/// `records` and `order` always hold the same set of ids; every public
/// method either updates both or neither.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    records: HashMap<ItemId, Record>,
    order: Vec<ItemId>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.records.contains_key(item_id)
    }

    /// Validate `candidate` and store it as the newest record.
    ///
    /// On error the store is left exactly as it was.
    pub fn add_record(&mut self, candidate: NewRecord) -> DomainResult<ItemId> {
        validation::validate(&candidate, |id| self.contains(id))?;

        let id = ItemId::parse(&candidate.item_id)?;
        let record = Record::from_validated(id.clone(), candidate);
        self.records.insert(id.clone(), record);
        self.order.push(id.clone());

        tracing::debug!(item_id = %id, "record added");
        Ok(id)
    }

    /// Remove the record stored under `item_id`, if any.
    pub fn delete_record(&mut self, item_id: &str) -> DeleteOutcome {
        match self.records.remove_entry(item_id) {
            Some((id, _)) => {
                self.order.retain(|stored| stored != &id);
                tracing::debug!(item_id = %id, "record deleted");
                DeleteOutcome::Deleted(id)
            }
            None => DeleteOutcome::NotFound(ItemId::from_trusted(item_id)),
        }
    }

    /// Look up a record by id.
    ///
    /// Input that is not a run of digits is rejected before the lookup;
    /// `Ok(None)` means the id is well formed but not stored.
    pub fn find_record(&self, item_id: &str) -> DomainResult<Option<&Record>> {
        let id = ItemId::parse(item_id)?;
        Ok(self.records.get(&id))
    }

    /// Records in insertion order, oldest first.
    pub fn list_all(&self) -> impl DoubleEndedIterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Records newest first. A view only; store order is not touched.
    pub fn list_most_recent(&self) -> impl Iterator<Item = &Record> + '_ {
        self.list_all().rev()
    }

    /// Insert records from a trusted source without validation.
    ///
    /// New ids are appended in the given order; ids already stored keep
    /// their position and take the incoming values.
    pub(crate) fn merge_trusted(&mut self, incoming: Vec<Record>) -> usize {
        let count = incoming.len();
        for record in incoming {
            let id = record.item_id().clone();
            if self.records.insert(id.clone(), record).is_none() {
                self.order.push(id);
            }
        }
        count
    }
}
