use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::types::{TypeConstraintError, require_non_empty};

/// Isolation boundary for a customer organization using the system. All
/// other entities hang off a tenant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Tenant {
    pub tenant_id: Uuid,
    pub name: String,
    /// Hashed API key; unique among tenants that have one.
    pub api_key_hash: Option<String>,
    pub plan_details: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTenant {
    pub name: String,
    pub api_key_hash: Option<String>,
    pub plan_details: Option<Value>,
}

impl NewTenant {
    pub fn new(name: impl Into<String>) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: require_non_empty(name)?,
            api_key_hash: None,
            plan_details: None,
        })
    }

    pub fn api_key_hash(mut self, hash: impl Into<String>) -> Self {
        self.api_key_hash = Some(hash.into());
        self
    }

    pub fn plan_details(mut self, details: Value) -> Self {
        self.plan_details = Some(details);
        self
    }
}
