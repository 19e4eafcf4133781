use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::types::{TypeConstraintError, normalize_email, optional_trimmed, require_non_empty};

/// A prospective contact targeted by a campaign. Lead identity per tenant
/// and email is a convention, not a constraint; the table only carries an
/// index on email.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub lead_id: Uuid,
    pub tenant_id: Uuid,
    pub campaign_id: Uuid,
    /// Organization the lead works for.
    pub company_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub external_id: Option<String>,
    pub title: Option<String>,
    pub headline: Option<String>,
    pub linkedin_url: Option<String>,
    pub linkedin_data: Option<String>,
    pub email_verification_status: Option<String>,
    pub email_verification_message: Option<String>,
    pub email_icebreaker: Option<String>,
    /// Free-form pipeline status, e.g. "new", "contacted", "replied".
    pub status: String,
    pub language: Option<String>,
    pub source: Option<String>,
    pub custom_fields: Option<Value>,
    pub is_validated: bool,
    pub email_sent_at: Option<DateTime<Utc>>,
    pub reply_received_at: Option<DateTime<Utc>>,
    pub last_contacted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewLead {
    pub tenant_id: Uuid,
    pub campaign_id: Uuid,
    pub company_id: Uuid,
    pub email: String,
    pub status: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub external_id: Option<String>,
    pub title: Option<String>,
    pub headline: Option<String>,
    pub linkedin_url: Option<String>,
    pub linkedin_data: Option<String>,
    pub email_verification_status: Option<String>,
    pub email_verification_message: Option<String>,
    pub email_icebreaker: Option<String>,
    pub language: Option<String>,
    pub source: Option<String>,
    pub custom_fields: Option<Value>,
}

impl NewLead {
    pub fn new(
        tenant_id: Uuid,
        campaign_id: Uuid,
        company_id: Uuid,
        email: impl Into<String>,
        status: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            tenant_id,
            campaign_id,
            company_id,
            email: normalize_email(email)?,
            status: require_non_empty(status)?,
            first_name: None,
            last_name: None,
            external_id: None,
            title: None,
            headline: None,
            linkedin_url: None,
            linkedin_data: None,
            email_verification_status: None,
            email_verification_message: None,
            email_icebreaker: None,
            language: None,
            source: None,
            custom_fields: None,
        })
    }

    pub fn name(mut self, first: Option<String>, last: Option<String>) -> Self {
        self.first_name = optional_trimmed(first);
        self.last_name = optional_trimmed(last);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn custom_fields(mut self, fields: Value) -> Self {
        self.custom_fields = Some(fields);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lead_normalizes_email() {
        let lead = NewLead::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "John.Doe@Acme.COM",
            "new",
        )
        .expect("valid lead");
        assert_eq!(lead.email, "john.doe@acme.com");
    }

    #[test]
    fn new_lead_rejects_blank_status() {
        let result = NewLead::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "a@b.com",
            " ",
        );
        assert_eq!(result.unwrap_err(), TypeConstraintError::EmptyString);
    }
}
