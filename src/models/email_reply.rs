use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::email_reply::{
    EmailReply as DomainEmailReply, NewEmailReply as DomainNewEmailReply,
};

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = crate::schema::email_replies)]
/// Diesel row for [`crate::domain::email_reply::EmailReply`].
pub struct EmailReply {
    pub reply_id: Uuid,
    pub tenant_id: Uuid,
    pub outbound_email_id: Uuid,
    pub lead_id: Uuid,
    pub reply_received_at: DateTime<Utc>,
    pub reply_subject: Option<String>,
    pub reply_body: Option<String>,
    pub ai_classification: Option<String>,
    pub classification_confidence: Option<f64>,
    pub classified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::email_replies)]
/// Insertable form of [`EmailReply`]; received/created timestamps default
/// server-side, classification fields start empty.
pub struct NewEmailReply<'a> {
    pub tenant_id: Uuid,
    pub outbound_email_id: Uuid,
    pub lead_id: Uuid,
    pub reply_subject: Option<&'a str>,
    pub reply_body: Option<&'a str>,
}

impl From<EmailReply> for DomainEmailReply {
    fn from(row: EmailReply) -> Self {
        Self {
            reply_id: row.reply_id,
            tenant_id: row.tenant_id,
            outbound_email_id: row.outbound_email_id,
            lead_id: row.lead_id,
            reply_received_at: row.reply_received_at,
            reply_subject: row.reply_subject,
            reply_body: row.reply_body,
            ai_classification: row.ai_classification,
            classification_confidence: row.classification_confidence,
            classified_at: row.classified_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewEmailReply> for NewEmailReply<'a> {
    fn from(reply: &'a DomainNewEmailReply) -> Self {
        Self {
            tenant_id: reply.tenant_id,
            outbound_email_id: reply.outbound_email_id,
            lead_id: reply.lead_id,
            reply_subject: reply.reply_subject.as_deref(),
            reply_body: reply.reply_body.as_deref(),
        }
    }
}
