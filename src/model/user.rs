use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Rendered in place of any name, email or company name the record does not carry.
pub const PLACEHOLDER: &str = "N/A";

/// Returns the field itself, or [`PLACEHOLDER`] when it is absent.
///
/// This is the only fallback rule used when rendering a record.
pub fn or_placeholder(field: Option<&str>) -> &str {
    field.unwrap_or(PLACEHOLDER)
}

/// Identifier assigned by the directory service. Never generated locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// The company a user is affiliated with.
///
/// Only `name` is shown by the dashboard; whatever else the service sends is kept in
/// `extra` and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A user record as listed by the directory service.
///
/// Every displayed field is optional: a partial record renders with placeholders
/// instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    /// Fields the dashboard does not use (username, phone, address, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Creates a fully populated record.
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            email: Some(email.into()),
            company: Some(Company {
                name: Some(company_name.into()),
                extra: Map::new(),
            }),
            extra: Map::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().and_then(|c| c.name.as_deref())
    }

    /// Sets the company name, creating the company entry if the record had none.
    pub fn set_company_name(&mut self, name: impl Into<String>) {
        self.company.get_or_insert_with(Company::default).name = Some(name.into());
    }
}
