use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::tenant::{NewTenant as DomainNewTenant, Tenant as DomainTenant};

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = crate::schema::tenants)]
/// Diesel row for [`crate::domain::tenant::Tenant`].
pub struct Tenant {
    pub tenant_id: Uuid,
    pub name: String,
    pub api_key_hash: Option<String>,
    pub plan_details: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tenants)]
/// Insertable form of [`Tenant`]; id and timestamps come from the server.
pub struct NewTenant<'a> {
    pub name: &'a str,
    pub api_key_hash: Option<&'a str>,
    pub plan_details: Option<&'a Value>,
}

impl From<Tenant> for DomainTenant {
    fn from(row: Tenant) -> Self {
        Self {
            tenant_id: row.tenant_id,
            name: row.name,
            api_key_hash: row.api_key_hash,
            plan_details: row.plan_details,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewTenant> for NewTenant<'a> {
    fn from(tenant: &'a DomainNewTenant) -> Self {
        Self {
            name: tenant.name.as_str(),
            api_key_hash: tenant.api_key_hash.as_deref(),
            plan_details: tenant.plan_details.as_ref(),
        }
    }
}
