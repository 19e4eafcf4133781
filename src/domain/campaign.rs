use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::types::{TypeConstraintError, optional_trimmed, require_non_empty};

/// Lifecycle of a campaign. The set is closed; unknown strings are rejected
/// rather than stored.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }
}

impl Display for CampaignStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(CampaignStatus::Draft),
            "active" => Ok(CampaignStatus::Active),
            "paused" => Ok(CampaignStatus::Paused),
            "completed" => Ok(CampaignStatus::Completed),
            other => Err(TypeConstraintError::UnknownStatus(other.to_string())),
        }
    }
}

/// A named outreach effort owned by a tenant and created by one of its
/// users.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub campaign_id: Uuid,
    pub tenant_id: Uuid,
    /// User who created the campaign.
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: CampaignStatus,
    /// AI parameters, schedule hints, and whatever else later systems need.
    pub settings: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCampaign {
    pub tenant_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: CampaignStatus,
    pub settings: Option<Value>,
}

impl NewCampaign {
    pub fn new(
        tenant_id: Uuid,
        user_id: Uuid,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            tenant_id,
            user_id,
            name: require_non_empty(name)?,
            description: optional_trimmed(description),
            status: CampaignStatus::Draft,
            settings: None,
        })
    }

    pub fn status(mut self, status: CampaignStatus) -> Self {
        self.status = status;
        self
    }

    pub fn settings(mut self, settings: Value) -> Self {
        self.settings = Some(settings);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            CampaignStatus::Draft,
            CampaignStatus::Active,
            CampaignStatus::Paused,
            CampaignStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<CampaignStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert_eq!(
            "archived".parse::<CampaignStatus>(),
            Err(TypeConstraintError::UnknownStatus("archived".to_string()))
        );
    }

    #[test]
    fn new_campaign_defaults_to_draft() {
        let campaign = NewCampaign::new(Uuid::new_v4(), Uuid::new_v4(), "Q1 Outreach", None)
            .expect("valid campaign");
        assert_eq!(campaign.status, CampaignStatus::Draft);
        assert_eq!(campaign.description, None);
    }

    #[test]
    fn new_campaign_rejects_blank_name() {
        assert!(NewCampaign::new(Uuid::new_v4(), Uuid::new_v4(), "  ", None).is_err());
    }
}
