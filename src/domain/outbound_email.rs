use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{TypeConstraintError, require_non_empty};

/// Delivery lifecycle of an outbound email. "scheduled" and "pending_send"
/// rows form the awaiting-send queue served by a partial index.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutboundEmailStatus {
    Scheduled,
    PendingSend,
    Sent,
    Delivered,
    Bounced,
    Failed,
    Opened,
    Clicked,
}

impl OutboundEmailStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            OutboundEmailStatus::Scheduled => "scheduled",
            OutboundEmailStatus::PendingSend => "pending_send",
            OutboundEmailStatus::Sent => "sent",
            OutboundEmailStatus::Delivered => "delivered",
            OutboundEmailStatus::Bounced => "bounced",
            OutboundEmailStatus::Failed => "failed",
            OutboundEmailStatus::Opened => "opened",
            OutboundEmailStatus::Clicked => "clicked",
        }
    }
}

impl Display for OutboundEmailStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutboundEmailStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(OutboundEmailStatus::Scheduled),
            "pending_send" => Ok(OutboundEmailStatus::PendingSend),
            "sent" => Ok(OutboundEmailStatus::Sent),
            "delivered" => Ok(OutboundEmailStatus::Delivered),
            "bounced" => Ok(OutboundEmailStatus::Bounced),
            "failed" => Ok(OutboundEmailStatus::Failed),
            "opened" => Ok(OutboundEmailStatus::Opened),
            "clicked" => Ok(OutboundEmailStatus::Clicked),
            other => Err(TypeConstraintError::UnknownStatus(other.to_string())),
        }
    }
}

/// A single email rendered for one lead. Follow-ups reference their parent
/// through `parent_outbound_email_id` and are traversed by query.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutboundEmail {
    pub outbound_email_id: Uuid,
    pub tenant_id: Uuid,
    pub campaign_id: Uuid,
    pub lead_id: Uuid,
    pub parent_outbound_email_id: Option<Uuid>,
    pub subject_actual: String,
    pub body_actual: String,
    pub status: OutboundEmailStatus,
    pub scheduled_send_time: Option<DateTime<Utc>>,
    pub actual_send_time: Option<DateTime<Utc>>,
    pub opened_at: Option<DateTime<Utc>>,
    pub clicked_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewOutboundEmail {
    pub tenant_id: Uuid,
    pub campaign_id: Uuid,
    pub lead_id: Uuid,
    pub parent_outbound_email_id: Option<Uuid>,
    pub subject_actual: String,
    pub body_actual: String,
    pub status: OutboundEmailStatus,
    pub scheduled_send_time: Option<DateTime<Utc>>,
}

impl NewOutboundEmail {
    pub fn new(
        tenant_id: Uuid,
        campaign_id: Uuid,
        lead_id: Uuid,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            tenant_id,
            campaign_id,
            lead_id,
            parent_outbound_email_id: None,
            subject_actual: require_non_empty(subject)?,
            body_actual: body.into(),
            status: OutboundEmailStatus::Scheduled,
            scheduled_send_time: None,
        })
    }

    /// Marks this email as a follow-up in an existing thread.
    pub fn follow_up_to(mut self, parent_id: Uuid) -> Self {
        self.parent_outbound_email_id = Some(parent_id);
        self
    }

    pub fn scheduled_at(mut self, when: DateTime<Utc>) -> Self {
        self.scheduled_send_time = Some(when);
        self
    }

    pub fn status(mut self, status: OutboundEmailStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            OutboundEmailStatus::Scheduled,
            OutboundEmailStatus::PendingSend,
            OutboundEmailStatus::Sent,
            OutboundEmailStatus::Delivered,
            OutboundEmailStatus::Bounced,
            OutboundEmailStatus::Failed,
            OutboundEmailStatus::Opened,
            OutboundEmailStatus::Clicked,
        ] {
            assert_eq!(status.as_str().parse::<OutboundEmailStatus>(), Ok(status));
        }
    }

    #[test]
    fn follow_up_builder_sets_parent() {
        let parent = Uuid::new_v4();
        let email = NewOutboundEmail::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Re: hello",
            "bump",
        )
        .expect("valid email")
        .follow_up_to(parent);
        assert_eq!(email.parent_outbound_email_id, Some(parent));
    }
}
