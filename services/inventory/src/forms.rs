//! Form validators.
//!
//! Each form takes the raw string field values of a submitted form and
//! produces either a validated draft ready for persistence, or a per-field
//! error map for re-rendering. Validation never touches the datastore; the
//! one datastore-dependent rule (username uniqueness) lives in the
//! registration use case and is reported through the same error map.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_domain::item::{Category, Item};

use crate::domain::types::{EmployeeProfileDraft, ItemDraft, RegistrationDraft};

const REQUIRED: &str = "This field is required.";

/// Ordered field → messages map, serialized into re-rendered form contexts.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }
}

// ── Item form ────────────────────────────────────────────────────────────────

/// Raw item form fields as submitted. Doubles as the pre-fill values of a
/// re-rendered form context, so it serializes too.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub amount: String,
}

impl ItemForm {
    /// Pre-fill from an existing item for the update workflow.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.as_str().to_string(),
            cost: item.cost.map(|c| c.to_string()).unwrap_or_default(),
            amount: item.amount.to_string(),
        }
    }

    pub fn validate(&self) -> Result<ItemDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", REQUIRED);
        }

        let category = match self.category.trim() {
            "" => {
                errors.add("category", REQUIRED);
                None
            }
            value => match Category::parse(value) {
                Some(category) => Some(category),
                None => {
                    errors.add(
                        "category",
                        format!(
                            "Select a valid choice. {value} is not one of the available choices."
                        ),
                    );
                    None
                }
            },
        };

        // Blank cost means "not set", never zero.
        let cost = match self.cost.trim() {
            "" => None,
            value => match value.parse::<Decimal>() {
                Ok(cost) if cost.is_sign_negative() => {
                    errors.add("cost", "Ensure this value is greater than or equal to 0.");
                    None
                }
                Ok(cost) => Some(cost),
                Err(_) => {
                    errors.add("cost", "Enter a number.");
                    None
                }
            },
        };

        let amount = match self.amount.trim() {
            "" => {
                errors.add("amount", REQUIRED);
                None
            }
            value => match value.parse::<i32>() {
                Ok(amount) => Some(amount),
                Err(_) => {
                    errors.add("amount", "Enter a whole number.");
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ItemDraft {
            name: name.to_string(),
            category: category.expect("validated"),
            cost,
            amount: amount.expect("validated"),
        })
    }
}

// ── Employee form ────────────────────────────────────────────────────────────

/// Raw employee profile fields. The identity link is not an editable field,
/// so a caller can never reassign a profile to a different identity.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
}

impl EmployeeForm {
    pub fn validate(&self) -> Result<EmployeeProfileDraft, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", REQUIRED);
        }
        let position = self.position.trim();
        if position.is_empty() {
            errors.add("position", REQUIRED);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(EmployeeProfileDraft {
            name: name.to_string(),
            position: position.to_string(),
        })
    }
}

// ── Registration form ────────────────────────────────────────────────────────

/// Raw registration fields. Passwords are never echoed back; re-rendered
/// contexts carry only `username` and `email`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
}

fn valid_username(username: &str) -> bool {
    username.len() <= 150
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegistrationDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let username = self.username.trim();
        if username.is_empty() {
            errors.add("username", REQUIRED);
        } else if !valid_username(username) {
            errors.add(
                "username",
                "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
            );
        }

        let email = self.email.trim();
        if !email.is_empty() && !valid_email(email) {
            errors.add("email", "Enter a valid email address.");
        }

        if self.password1.is_empty() {
            errors.add("password1", REQUIRED);
        }
        if self.password2.is_empty() {
            errors.add("password2", REQUIRED);
        } else if !self.password1.is_empty() && self.password1 != self.password2 {
            errors.add("password2", "The two password fields didn't match.");
        }

        if !self.password1.is_empty() && self.password1 == self.password2 {
            for message in stockroom_auth::password::check_strength(username, &self.password1) {
                errors.add("password2", message);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegistrationDraft {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password1.clone(),
        })
    }
}

// ── Login form ───────────────────────────────────────────────────────────────

/// Raw login fields. Credential verification happens in the login use case;
/// this only rejects blank submissions.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(String, String), FieldErrors> {
        let mut errors = FieldErrors::default();
        let username = self.username.trim();
        if username.is_empty() {
            errors.add("username", REQUIRED);
        }
        if self.password.is_empty() {
            errors.add("password", REQUIRED);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok((username.to_string(), self.password.clone()))
    }
}
