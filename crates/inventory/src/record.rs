use serde::{Deserialize, Serialize};

use stockroom_core::{Field, ItemId};

/// Raw field values for a record that has not been validated yet.
///
/// This is what a form submits: seven plain strings in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecord {
    pub item_id: String,
    pub product: String,
    pub quantity: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
}

impl NewRecord {
    /// Raw value submitted for `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ItemId => &self.item_id,
            Field::Product => &self.product,
            Field::Quantity => &self.quantity,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
        }
    }

    /// Mutable slot for `field` (used by forms filling values one by one).
    pub fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ItemId => &mut self.item_id,
            Field::Product => &mut self.product,
            Field::Quantity => &mut self.quantity,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
        }
    }
}

/// A stored inventory entry.
///
/// Records are never edited once stored; the serde names double as the
/// storage CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "itemID")]
    item_id: ItemId,
    #[serde(rename = "Product")]
    product: String,
    #[serde(rename = "Quantity")]
    quantity: String,
    #[serde(rename = "First Name")]
    first_name: String,
    #[serde(rename = "Last Name")]
    last_name: String,
    #[serde(rename = "Phonenumber")]
    phone_number: String,
    #[serde(rename = "Email")]
    email: String,
}

impl Record {
    /// Build a record from already validated input.
    pub(crate) fn from_validated(id: ItemId, candidate: NewRecord) -> Self {
        Self {
            item_id: id,
            product: candidate.product,
            quantity: candidate.quantity,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            phone_number: candidate.phone_number,
            email: candidate.email,
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    /// Quantity exactly as entered; it is never converted to a number.
    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
