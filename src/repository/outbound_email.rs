//! Repository implementation for outbound emails.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::outbound_email::{NewOutboundEmail, OutboundEmail, OutboundEmailStatus};
use crate::models::outbound_email::{
    NewOutboundEmail as DbNewOutboundEmail, OutboundEmail as DbOutboundEmail,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, OutboundEmailReader, OutboundEmailWriter};

impl OutboundEmailReader for DieselRepository {
    fn get_outbound_email_by_id(&self, id: Uuid) -> RepositoryResult<Option<OutboundEmail>> {
        use crate::schema::outbound_emails;

        let mut conn = self.conn()?;
        let email = outbound_emails::table
            .find(id)
            .first::<DbOutboundEmail>(&mut conn)
            .optional()?;

        match email {
            Some(row) => Ok(Some(
                OutboundEmail::try_from(row).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_emails_awaiting_send(&self, limit: i64) -> RepositoryResult<Vec<OutboundEmail>> {
        use crate::schema::outbound_emails;

        let mut conn = self.conn()?;
        outbound_emails::table
            .filter(outbound_emails::status.eq_any([
                OutboundEmailStatus::Scheduled.as_str(),
                OutboundEmailStatus::PendingSend.as_str(),
            ]))
            .order(outbound_emails::scheduled_send_time.asc())
            .limit(limit)
            .load::<DbOutboundEmail>(&mut conn)?
            .into_iter()
            .map(|row| OutboundEmail::try_from(row).map_err(RepositoryError::from))
            .collect()
    }

    fn list_follow_ups(&self, parent_id: Uuid) -> RepositoryResult<Vec<OutboundEmail>> {
        use crate::schema::outbound_emails;

        let mut conn = self.conn()?;
        outbound_emails::table
            .filter(outbound_emails::parent_outbound_email_id.eq(parent_id))
            .order(outbound_emails::created_at.asc())
            .load::<DbOutboundEmail>(&mut conn)?
            .into_iter()
            .map(|row| OutboundEmail::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl OutboundEmailWriter for DieselRepository {
    fn create_outbound_email(
        &self,
        new_email: &NewOutboundEmail,
    ) -> RepositoryResult<OutboundEmail> {
        use crate::schema::outbound_emails;

        let mut conn = self.conn()?;
        let db_new_email: DbNewOutboundEmail = new_email.into();

        let created = diesel::insert_into(outbound_emails::table)
            .values(&db_new_email)
            .get_result::<DbOutboundEmail>(&mut conn)?;

        OutboundEmail::try_from(created).map_err(RepositoryError::from)
    }

    fn update_outbound_email_status(
        &self,
        id: Uuid,
        status: OutboundEmailStatus,
    ) -> RepositoryResult<Option<OutboundEmail>> {
        use crate::schema::outbound_emails;

        let mut conn = self.conn()?;
        let updated = diesel::update(outbound_emails::table.find(id))
            .set((
                outbound_emails::status.eq(status.as_str()),
                outbound_emails::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbOutboundEmail>(&mut conn)
            .optional()?;

        match updated {
            Some(row) => Ok(Some(
                OutboundEmail::try_from(row).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }
}
