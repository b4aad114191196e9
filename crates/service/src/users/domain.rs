use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Accepted on input, never written back out.
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub enabled: bool,
    /// `None` when the client sent `null` or omitted the field.
    #[serde(default)]
    pub roles: Option<Vec<Role>>,
}

/// A role owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    /// Username of the owning user. Navigation only, never on the wire.
    #[serde(skip)]
    pub user: Option<String>,
}

impl Role {
    pub fn named(name: impl Into<String>) -> Self { Self { id: None, name: name.into(), user: None } }
}
