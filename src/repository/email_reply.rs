//! Repository implementation for inbound email replies.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::email_reply::{EmailReply, NewEmailReply};
use crate::models::email_reply::{EmailReply as DbEmailReply, NewEmailReply as DbNewEmailReply};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, EmailReplyReader, EmailReplyWriter};

impl EmailReplyReader for DieselRepository {
    fn get_email_reply_by_id(&self, id: Uuid) -> RepositoryResult<Option<EmailReply>> {
        use crate::schema::email_replies;

        let mut conn = self.conn()?;
        let reply = email_replies::table
            .find(id)
            .first::<DbEmailReply>(&mut conn)
            .optional()?;

        Ok(reply.map(Into::into))
    }

    fn list_replies_for_outbound_email(
        &self,
        outbound_email_id: Uuid,
    ) -> RepositoryResult<Vec<EmailReply>> {
        use crate::schema::email_replies;

        let mut conn = self.conn()?;
        let items = email_replies::table
            .filter(email_replies::outbound_email_id.eq(outbound_email_id))
            .order(email_replies::reply_received_at.asc())
            .load::<DbEmailReply>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl EmailReplyWriter for DieselRepository {
    fn create_email_reply(&self, new_reply: &NewEmailReply) -> RepositoryResult<EmailReply> {
        use crate::schema::email_replies;

        let mut conn = self.conn()?;
        let db_new_reply: DbNewEmailReply = new_reply.into();

        let created = diesel::insert_into(email_replies::table)
            .values(&db_new_reply)
            .get_result::<DbEmailReply>(&mut conn)?;

        Ok(created.into())
    }

    fn record_reply_classification(
        &self,
        id: Uuid,
        classification: &str,
        confidence: f64,
    ) -> RepositoryResult<Option<EmailReply>> {
        use crate::schema::email_replies;

        let mut conn = self.conn()?;
        let updated = diesel::update(email_replies::table.find(id))
            .set((
                email_replies::ai_classification.eq(classification),
                email_replies::classification_confidence.eq(confidence),
                email_replies::classified_at.eq(diesel::dsl::now),
                email_replies::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<DbEmailReply>(&mut conn)
            .optional()?;

        Ok(updated.map(Into::into))
    }
}
