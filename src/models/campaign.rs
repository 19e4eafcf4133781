use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::campaign::{Campaign as DomainCampaign, NewCampaign as DomainNewCampaign};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Queryable)]
#[diesel(table_name = crate::schema::campaigns)]
/// Diesel row for [`crate::domain::campaign::Campaign`].
pub struct Campaign {
    pub campaign_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tenant_id: Uuid,
    pub user_id: Uuid,
    pub settings: Option<Value>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::campaigns)]
/// Insertable form of [`Campaign`].
pub struct NewCampaign<'a> {
    pub tenant_id: Uuid,
    pub user_id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub status: &'a str,
    pub settings: Option<&'a Value>,
}

impl TryFrom<Campaign> for DomainCampaign {
    type Error = TypeConstraintError;

    fn try_from(row: Campaign) -> Result<Self, Self::Error> {
        Ok(Self {
            campaign_id: row.campaign_id,
            tenant_id: row.tenant_id,
            user_id: row.user_id,
            name: row.name,
            description: row.description,
            status: row.status.parse()?,
            settings: row.settings,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewCampaign> for NewCampaign<'a> {
    fn from(campaign: &'a DomainNewCampaign) -> Self {
        Self {
            tenant_id: campaign.tenant_id,
            user_id: campaign.user_id,
            name: campaign.name.as_str(),
            description: campaign.description.as_deref(),
            status: campaign.status.as_str(),
            settings: campaign.settings.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::campaign::CampaignStatus;

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewCampaign::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Q1 Outreach".to_string(),
            Some("First quarter".to_string()),
        )
        .expect("valid campaign");
        let new: NewCampaign = (&domain).into();
        assert_eq!(new.name, "Q1 Outreach");
        assert_eq!(new.description, Some("First quarter"));
        assert_eq!(new.status, "draft");
    }

    #[test]
    fn row_with_known_status_converts() {
        let now = Utc::now();
        let row = Campaign {
            campaign_id: Uuid::new_v4(),
            name: "n".to_string(),
            description: None,
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
            tenant_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            settings: None,
        };
        let domain = DomainCampaign::try_from(row).expect("known status");
        assert_eq!(domain.status, CampaignStatus::Active);
    }

    #[test]
    fn row_with_unknown_status_is_rejected() {
        let now = Utc::now();
        let row = Campaign {
            campaign_id: Uuid::new_v4(),
            name: "n".to_string(),
            description: None,
            status: "archived".to_string(),
            created_at: now,
            updated_at: now,
            tenant_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            settings: None,
        };
        assert!(DomainCampaign::try_from(row).is_err());
    }
}
