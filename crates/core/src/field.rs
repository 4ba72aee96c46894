//! Names of the attributes carried by an inventory record.

use serde::{Deserialize, Serialize};

/// One attribute of an inventory record.
///
/// Variants are listed in form (and CSV column) order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ItemId,
    Product,
    Quantity,
    FirstName,
    LastName,
    PhoneNumber,
    Email,
}

impl Field {
    /// All fields in column order.
    pub const ALL: [Field; 7] = [
        Field::ItemId,
        Field::Product,
        Field::Quantity,
        Field::FirstName,
        Field::LastName,
        Field::PhoneNumber,
        Field::Email,
    ];

    /// Header used for this field in the storage CSV.
    pub fn column(&self) -> &'static str {
        match self {
            Field::ItemId => "itemID",
            Field::Product => "Product",
            Field::Quantity => "Quantity",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::PhoneNumber => "Phonenumber",
            Field::Email => "Email",
        }
    }

    /// Human-readable name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Field::ItemId => "itemID",
            Field::Product => "product name",
            Field::Quantity => "quantity",
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::PhoneNumber => "phone number",
            Field::Email => "email address",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
