use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{
    TypeConstraintError, normalize_email, optional_trimmed, require_non_empty,
};

/// A member of a tenant. Usernames and emails are unique per tenant, not
/// globally.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub user_id: Uuid,
    pub tenant_id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    /// Free-form role label, e.g. "admin", "manager", "member".
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub tenant_id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

impl NewUser {
    pub fn new(
        tenant_id: Uuid,
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            tenant_id,
            username: require_non_empty(username)?,
            email: normalize_email(email)?,
            password_hash: require_non_empty(password_hash)?,
            full_name: None,
            role: None,
            is_active: None,
        })
    }

    pub fn full_name(mut self, name: Option<String>) -> Self {
        self.full_name = optional_trimmed(name);
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
