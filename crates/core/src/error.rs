//! Domain error model.

use thiserror::Error;

use crate::field::Field;
use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the operation that produced it left the
/// store untouched. Persistence failures live with the persistence code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was left blank.
    #[error("missing value for {0}")]
    MissingField(Field),

    /// A field value did not have the expected shape.
    #[error("invalid {field}: {reason}")]
    InvalidFormat { field: Field, reason: String },

    /// An item with the same identifier is already stored.
    #[error("itemID {0} is already in use")]
    DuplicateId(ItemId),

    /// No item is stored under the identifier.
    #[error("item {0} not found")]
    NotFound(ItemId),
}

impl DomainError {
    pub fn missing(field: Field) -> Self {
        Self::MissingField(field)
    }

    pub fn invalid(field: Field, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }

    pub fn duplicate(id: ItemId) -> Self {
        Self::DuplicateId(id)
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    /// The field the error refers to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            DomainError::MissingField(field) => Some(*field),
            DomainError::InvalidFormat { field, .. } => Some(*field),
            DomainError::DuplicateId(_) => Some(Field::ItemId),
            DomainError::NotFound(_) => None,
        }
    }
}
