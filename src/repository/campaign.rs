//! Repository implementation for campaigns.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::campaign::{Campaign, CampaignStatus, NewCampaign};
use crate::models::campaign::{Campaign as DbCampaign, NewCampaign as DbNewCampaign};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CampaignReader, CampaignWriter, DieselRepository};

impl CampaignReader for DieselRepository {
    fn get_campaign_by_id(&self, id: Uuid) -> RepositoryResult<Option<Campaign>> {
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let campaign = campaigns::table
            .find(id)
            .first::<DbCampaign>(&mut conn)
            .optional()?;

        match campaign {
            Some(row) => Ok(Some(Campaign::try_from(row).map_err(RepositoryError::from)?)),
            None => Ok(None),
        }
    }

    fn list_campaigns_by_status(&self, status: CampaignStatus) -> RepositoryResult<Vec<Campaign>> {
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        campaigns::table
            .filter(campaigns::status.eq(status.as_str()))
            .order(campaigns::created_at.asc())
            .load::<DbCampaign>(&mut conn)?
            .into_iter()
            .map(|row| Campaign::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl CampaignWriter for DieselRepository {
    fn create_campaign(&self, new_campaign: &NewCampaign) -> RepositoryResult<Campaign> {
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let db_new_campaign: DbNewCampaign = new_campaign.into();

        let created = diesel::insert_into(campaigns::table)
            .values(&db_new_campaign)
            .get_result::<DbCampaign>(&mut conn)?;

        Campaign::try_from(created).map_err(RepositoryError::from)
    }

    fn update_campaign_status(
        &self,
        id: Uuid,
        status: CampaignStatus,
    ) -> RepositoryResult<Option<Campaign>> {
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let updated = diesel::update(campaigns::table.find(id))
            .set((
                campaigns::status.eq(status.as_str()),
                campaigns::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbCampaign>(&mut conn)
            .optional()?;

        match updated {
            Some(row) => Ok(Some(Campaign::try_from(row).map_err(RepositoryError::from)?)),
            None => Ok(None),
        }
    }

    fn delete_campaign(&self, id: Uuid) -> RepositoryResult<usize> {
        use crate::schema::campaigns;

        let mut conn = self.conn()?;
        let affected = diesel::delete(campaigns::table.find(id)).execute(&mut conn)?;

        Ok(affected)
    }
}
