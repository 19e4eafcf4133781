use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An inbound reply to an outbound email. The lead reference is
/// denormalized from the outbound email for cheaper lookups. AI
/// classification fields stay empty until a later system fills them in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
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

#[derive(Clone, Debug, Deserialize)]
pub struct NewEmailReply {
    pub tenant_id: Uuid,
    pub outbound_email_id: Uuid,
    pub lead_id: Uuid,
    pub reply_subject: Option<String>,
    pub reply_body: Option<String>,
}

impl NewEmailReply {
    pub fn new(tenant_id: Uuid, outbound_email_id: Uuid, lead_id: Uuid) -> Self {
        Self {
            tenant_id,
            outbound_email_id,
            lead_id,
            reply_subject: None,
            reply_body: None,
        }
    }

    pub fn content(mut self, subject: Option<String>, body: Option<String>) -> Self {
        self.reply_subject = subject;
        self.reply_body = body;
        self
    }
}
