//! Ordered validation rules for new records.
//!
//! Rules run top to bottom and stop at the first failure, so the order of
//! [`RULES`] decides which error a user sees when several fields are wrong.

use std::sync::LazyLock;

use regex::Regex;

use stockroom_core::{DomainError, DomainResult, Field, ItemId};

use crate::record::NewRecord;

const EMAIL_FORMAT_HINT: &str = "use the format user@example.com";
const EMAIL_CHARSET_HINT: &str = "only letters, numbers, '@' and '.' are allowed";

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("phone pattern compiles")
});

/// What a rule checks.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// A property of the submitted values alone.
    Holds(fn(&NewRecord) -> bool),
    /// The item id is not used by a stored record yet.
    IdUnused,
}

/// One validation step: a check paired with the error reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub check: Check,
    pub reject: fn(&NewRecord) -> DomainError,
}

/// Validation sequence applied by [`crate::InventoryStore::add_record`].
pub static RULES: [Rule; 11] = [
    Rule {
        name: "all fields present",
        check: Check::Holds(all_present),
        reject: first_missing,
    },
    Rule {
        name: "item id is numeric",
        check: Check::Holds(|c| ItemId::is_well_formed(&c.item_id)),
        reject: |_| DomainError::invalid(Field::ItemId, "must contain only digits"),
    },
    Rule {
        name: "quantity is numeric",
        check: Check::Holds(|c| is_digits(&c.quantity)),
        reject: |_| DomainError::invalid(Field::Quantity, "must contain only digits"),
    },
    Rule {
        name: "first name is alphabetic",
        check: Check::Holds(|c| is_alphabetic(&c.first_name)),
        reject: |_| DomainError::invalid(Field::FirstName, "must contain only letters"),
    },
    Rule {
        name: "last name is alphabetic",
        check: Check::Holds(|c| is_alphabetic(&c.last_name)),
        reject: |_| DomainError::invalid(Field::LastName, "must contain only letters"),
    },
    Rule {
        name: "product is alphabetic",
        check: Check::Holds(|c| is_alphabetic(&c.product)),
        reject: |_| DomainError::invalid(Field::Product, "must contain only letters"),
    },
    Rule {
        name: "email has '@' and ends with .com",
        check: Check::Holds(|c| c.email.contains('@') && c.email.ends_with(".com")),
        reject: |_| DomainError::invalid(Field::Email, EMAIL_FORMAT_HINT),
    },
    Rule {
        name: "email has one '@' before one '.'",
        check: Check::Holds(|c| single_at_before_single_dot(&c.email)),
        reject: |_| DomainError::invalid(Field::Email, EMAIL_FORMAT_HINT),
    },
    Rule {
        name: "email uses allowed characters",
        check: Check::Holds(|c| email_charset_ok(&c.email)),
        reject: |_| DomainError::invalid(Field::Email, EMAIL_CHARSET_HINT),
    },
    Rule {
        name: "item id unused",
        check: Check::IdUnused,
        reject: |c| DomainError::duplicate(ItemId::from_trusted(c.item_id.clone())),
    },
    Rule {
        name: "phone number is xxx-xxx-xxxx",
        check: Check::Holds(|c| is_phone_number(&c.phone_number)),
        reject: |_| DomainError::invalid(Field::PhoneNumber, "use the format xxx-xxx-xxxx"),
    },
];

/// Run [`RULES`] against `candidate`.
///
/// `id_taken` answers whether an item id is already stored.
pub fn validate(candidate: &NewRecord, id_taken: impl Fn(&str) -> bool) -> DomainResult<()> {
    for rule in RULES.iter() {
        let passed = match rule.check {
            Check::Holds(predicate) => predicate(candidate),
            Check::IdUnused => !id_taken(&candidate.item_id),
        };
        if !passed {
            tracing::debug!(rule = rule.name, item_id = %candidate.item_id, "record rejected");
            return Err((rule.reject)(candidate));
        }
    }
    Ok(())
}

fn all_present(c: &NewRecord) -> bool {
    Field::ALL.iter().all(|f| !c.get(*f).is_empty())
}

fn first_missing(c: &NewRecord) -> DomainError {
    let field = Field::ALL
        .into_iter()
        .find(|f| c.get(*f).is_empty())
        .unwrap_or(Field::ItemId);
    DomainError::missing(field)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

fn single_at_before_single_dot(email: &str) -> bool {
    if email.matches('@').count() != 1 || email.matches('.').count() != 1 {
        return false;
    }
    match (email.find('@'), email.find('.')) {
        (Some(at), Some(dot)) => at < dot,
        _ => false,
    }
}

fn email_charset_ok(email: &str) -> bool {
    let allowed = |ch: char| ch.is_ascii_alphanumeric() || ch == '@' || ch == '.';
    match email.split_once('@') {
        Some((local, domain)) => local.chars().all(allowed) && domain.chars().all(allowed),
        None => false,
    }
}

fn is_phone_number(s: &str) -> bool {
    PHONE_PATTERN.is_match(s)
}
