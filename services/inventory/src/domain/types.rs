use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use stockroom_domain::item::Category;

/// Identity record owned by the identity subsystem. The application treats it
/// as opaque beyond login, group checks and the employee back-reference.
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Validated item fields, ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub category: Category,
    pub cost: Option<Decimal>,
    pub amount: i32,
}

/// Validated employee profile fields. The identity link is deliberately not
/// part of the draft; a profile can never be reassigned through a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProfileDraft {
    pub name: String,
    pub position: String,
}

/// Validated registration fields. The password stays plaintext until the
/// registration use case hashes it.
#[derive(Debug, Clone)]
pub struct RegistrationDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}
