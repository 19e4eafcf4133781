use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::types::{
    TypeConstraintError, normalize_domain, optional_trimmed, require_non_empty,
};

/// Company directory entry, keyed by email domain and enriched with
/// externally sourced data.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    pub organization_id: Uuid,
    pub name: String,
    pub email_domain: String,
    pub external_id: Option<String>,
    pub external_source: Option<String>,
    pub website_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub estimated_num_employees: Option<i32>,
    pub website_summary_data: Option<Value>,
    pub website_raw_data: Option<Value>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub time_zone: Option<String>,
    pub source: Option<String>,
    pub formatted_organization_name: Option<String>,
    pub raw_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewOrganization {
    pub name: String,
    pub email_domain: String,
    pub external_id: Option<String>,
    pub external_source: Option<String>,
    pub website_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub estimated_num_employees: Option<i32>,
    pub website_summary_data: Option<Value>,
    pub website_raw_data: Option<Value>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub time_zone: Option<String>,
    pub source: Option<String>,
    pub formatted_organization_name: Option<String>,
    pub raw_address: Option<String>,
}

impl NewOrganization {
    pub fn new(
        name: impl Into<String>,
        email_domain: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: require_non_empty(name)?,
            email_domain: normalize_domain(email_domain)?,
            ..Self::default()
        })
    }

    pub fn website_url(mut self, url: Option<String>) -> Self {
        self.website_url = optional_trimmed(url);
        self
    }

    pub fn linkedin_url(mut self, url: Option<String>) -> Self {
        self.linkedin_url = optional_trimmed(url);
        self
    }

    pub fn estimated_num_employees(mut self, count: i32) -> Self {
        self.estimated_num_employees = Some(count);
        self
    }
}
