//! Item identifiers.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::field::Field;

/// Identifier of an inventory item: a string of decimal digits.
///
/// The identifier is kept as text; leading zeros are significant
/// (`"007"` and `"7"` are different items).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Parse user input into an identifier, rejecting anything that is not
    /// a non-empty run of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if !Self::is_well_formed(s) {
            return Err(DomainError::invalid(
                Field::ItemId,
                "must contain only digits",
            ));
        }
        Ok(Self(s.to_string()))
    }

    /// Build an identifier from a trusted source (bulk load) without checks.
    pub fn from_trusted(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Whether `s` would be accepted by [`ItemId::parse`].
    pub fn is_well_formed(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
