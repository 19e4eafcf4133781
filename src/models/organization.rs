use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::organization::{
    NewOrganization as DomainNewOrganization, Organization as DomainOrganization,
};

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = crate::schema::organizations)]
/// Diesel row for [`crate::domain::organization::Organization`].
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::organizations)]
/// Insertable form of [`Organization`].
pub struct NewOrganization<'a> {
    pub name: &'a str,
    pub email_domain: &'a str,
    pub external_id: Option<&'a str>,
    pub external_source: Option<&'a str>,
    pub website_url: Option<&'a str>,
    pub linkedin_url: Option<&'a str>,
    pub estimated_num_employees: Option<i32>,
    pub website_summary_data: Option<&'a Value>,
    pub website_raw_data: Option<&'a Value>,
    pub country: Option<&'a str>,
    pub language: Option<&'a str>,
    pub time_zone: Option<&'a str>,
    pub source: Option<&'a str>,
    pub formatted_organization_name: Option<&'a str>,
    pub raw_address: Option<&'a str>,
}

impl From<Organization> for DomainOrganization {
    fn from(row: Organization) -> Self {
        Self {
            organization_id: row.organization_id,
            name: row.name,
            email_domain: row.email_domain,
            external_id: row.external_id,
            external_source: row.external_source,
            website_url: row.website_url,
            linkedin_url: row.linkedin_url,
            estimated_num_employees: row.estimated_num_employees,
            website_summary_data: row.website_summary_data,
            website_raw_data: row.website_raw_data,
            country: row.country,
            language: row.language,
            time_zone: row.time_zone,
            source: row.source,
            formatted_organization_name: row.formatted_organization_name,
            raw_address: row.raw_address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewOrganization> for NewOrganization<'a> {
    fn from(org: &'a DomainNewOrganization) -> Self {
        Self {
            name: org.name.as_str(),
            email_domain: org.email_domain.as_str(),
            external_id: org.external_id.as_deref(),
            external_source: org.external_source.as_deref(),
            website_url: org.website_url.as_deref(),
            linkedin_url: org.linkedin_url.as_deref(),
            estimated_num_employees: org.estimated_num_employees,
            website_summary_data: org.website_summary_data.as_ref(),
            website_raw_data: org.website_raw_data.as_ref(),
            country: org.country.as_deref(),
            language: org.language.as_deref(),
            time_zone: org.time_zone.as_deref(),
            source: org.source.as_deref(),
            formatted_organization_name: org.formatted_organization_name.as_deref(),
            raw_address: org.raw_address.as_deref(),
        }
    }
}
