use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::lead::{Lead as DomainLead, NewLead as DomainNewLead};

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = crate::schema::leads)]
/// Diesel row for [`crate::domain::lead::Lead`]. Field order follows the
/// table definition, which in turn follows the migration history.
pub struct Lead {
    pub lead_id: Uuid,
    pub campaign_id: Uuid,
    pub company_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub external_id: Option<String>,
    pub title: Option<String>,
    pub headline: Option<String>,
    pub linkedin_url: Option<String>,
    pub email_verification_status: Option<String>,
    pub email_verification_message: Option<String>,
    pub email_icebreaker: Option<String>,
    pub status: String,
    pub language: Option<String>,
    pub source: Option<String>,
    pub email_sent_at: Option<DateTime<Utc>>,
    pub reply_received_at: Option<DateTime<Utc>>,
    pub last_contacted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub linkedin_data: Option<String>,
    pub tenant_id: Uuid,
    pub custom_fields: Option<Value>,
    pub is_validated: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leads)]
/// Insertable form of [`Lead`].
pub struct NewLead<'a> {
    pub tenant_id: Uuid,
    pub campaign_id: Uuid,
    pub company_id: Uuid,
    pub email: &'a str,
    pub status: &'a str,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub external_id: Option<&'a str>,
    pub title: Option<&'a str>,
    pub headline: Option<&'a str>,
    pub linkedin_url: Option<&'a str>,
    pub linkedin_data: Option<&'a str>,
    pub email_verification_status: Option<&'a str>,
    pub email_verification_message: Option<&'a str>,
    pub email_icebreaker: Option<&'a str>,
    pub language: Option<&'a str>,
    pub source: Option<&'a str>,
    pub custom_fields: Option<&'a Value>,
}

impl From<Lead> for DomainLead {
    fn from(row: Lead) -> Self {
        Self {
            lead_id: row.lead_id,
            tenant_id: row.tenant_id,
            campaign_id: row.campaign_id,
            company_id: row.company_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            external_id: row.external_id,
            title: row.title,
            headline: row.headline,
            linkedin_url: row.linkedin_url,
            linkedin_data: row.linkedin_data,
            email_verification_status: row.email_verification_status,
            email_verification_message: row.email_verification_message,
            email_icebreaker: row.email_icebreaker,
            status: row.status,
            language: row.language,
            source: row.source,
            custom_fields: row.custom_fields,
            is_validated: row.is_validated,
            email_sent_at: row.email_sent_at,
            reply_received_at: row.reply_received_at,
            last_contacted_at: row.last_contacted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewLead> for NewLead<'a> {
    fn from(lead: &'a DomainNewLead) -> Self {
        Self {
            tenant_id: lead.tenant_id,
            campaign_id: lead.campaign_id,
            company_id: lead.company_id,
            email: lead.email.as_str(),
            status: lead.status.as_str(),
            first_name: lead.first_name.as_deref(),
            last_name: lead.last_name.as_deref(),
            external_id: lead.external_id.as_deref(),
            title: lead.title.as_deref(),
            headline: lead.headline.as_deref(),
            linkedin_url: lead.linkedin_url.as_deref(),
            linkedin_data: lead.linkedin_data.as_deref(),
            email_verification_status: lead.email_verification_status.as_deref(),
            email_verification_message: lead.email_verification_message.as_deref(),
            email_icebreaker: lead.email_icebreaker.as_deref(),
            language: lead.language.as_deref(),
            source: lead.source.as_deref(),
            custom_fields: lead.custom_fields.as_ref(),
        }
    }
}
