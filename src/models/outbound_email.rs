use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::outbound_email::{
    NewOutboundEmail as DomainNewOutboundEmail, OutboundEmail as DomainOutboundEmail,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = crate::schema::outbound_emails)]
/// Diesel row for [`crate::domain::outbound_email::OutboundEmail`].
pub struct OutboundEmail {
    pub outbound_email_id: Uuid,
    pub tenant_id: Uuid,
    pub campaign_id: Uuid,
    pub lead_id: Uuid,
    pub parent_outbound_email_id: Option<Uuid>,
    pub subject_actual: String,
    pub body_actual: String,
    pub status: String,
    pub scheduled_send_time: Option<DateTime<Utc>>,
    pub actual_send_time: Option<DateTime<Utc>>,
    pub opened_at: Option<DateTime<Utc>>,
    pub clicked_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::outbound_emails)]
/// Insertable form of [`OutboundEmail`].
pub struct NewOutboundEmail<'a> {
    pub tenant_id: Uuid,
    pub campaign_id: Uuid,
    pub lead_id: Uuid,
    pub parent_outbound_email_id: Option<Uuid>,
    pub subject_actual: &'a str,
    pub body_actual: &'a str,
    pub status: &'a str,
    pub scheduled_send_time: Option<DateTime<Utc>>,
}

impl TryFrom<OutboundEmail> for DomainOutboundEmail {
    type Error = TypeConstraintError;

    fn try_from(row: OutboundEmail) -> Result<Self, Self::Error> {
        Ok(Self {
            outbound_email_id: row.outbound_email_id,
            tenant_id: row.tenant_id,
            campaign_id: row.campaign_id,
            lead_id: row.lead_id,
            parent_outbound_email_id: row.parent_outbound_email_id,
            subject_actual: row.subject_actual,
            body_actual: row.body_actual,
            status: row.status.parse()?,
            scheduled_send_time: row.scheduled_send_time,
            actual_send_time: row.actual_send_time,
            opened_at: row.opened_at,
            clicked_at: row.clicked_at,
            error_message: row.error_message,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewOutboundEmail> for NewOutboundEmail<'a> {
    fn from(email: &'a DomainNewOutboundEmail) -> Self {
        Self {
            tenant_id: email.tenant_id,
            campaign_id: email.campaign_id,
            lead_id: email.lead_id,
            parent_outbound_email_id: email.parent_outbound_email_id,
            subject_actual: email.subject_actual.as_str(),
            body_actual: email.body_actual.as_str(),
            status: email.status.as_str(),
            scheduled_send_time: email.scheduled_send_time,
        }
    }
}
