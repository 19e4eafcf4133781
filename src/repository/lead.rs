//! Repository implementation for leads.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::lead::{Lead, NewLead};
use crate::models::lead::{Lead as DbLead, NewLead as DbNewLead};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, LeadReader, LeadWriter};

impl LeadReader for DieselRepository {
    fn get_lead_by_id(&self, id: Uuid) -> RepositoryResult<Option<Lead>> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let lead = leads::table.find(id).first::<DbLead>(&mut conn).optional()?;

        Ok(lead.map(Into::into))
    }

    fn list_leads_by_status(&self, status: &str) -> RepositoryResult<Vec<Lead>> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let items = leads::table
            .filter(leads::status.eq(status))
            .order(leads::created_at.asc())
            .load::<DbLead>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl LeadWriter for DieselRepository {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let db_new_lead: DbNewLead = new_lead.into();

        let created = diesel::insert_into(leads::table)
            .values(&db_new_lead)
            .get_result::<DbLead>(&mut conn)?;

        Ok(created.into())
    }

    fn update_lead_status(&self, id: Uuid, status: &str) -> RepositoryResult<Option<Lead>> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let updated = diesel::update(leads::table.find(id))
            .set((
                leads::status.eq(status),
                leads::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbLead>(&mut conn)
            .optional()?;

        Ok(updated.map(Into::into))
    }

    fn mark_lead_validated(&self, id: Uuid) -> RepositoryResult<Option<Lead>> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let updated = diesel::update(leads::table.find(id))
            .set((
                leads::is_validated.eq(true),
                leads::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbLead>(&mut conn)
            .optional()?;

        Ok(updated.map(Into::into))
    }
}
