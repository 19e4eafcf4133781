//! Revision 0007: additive `linkedin_data` column on leads, replicated into
//! both the primary and test namespaces.
//!
//! The predecessor "0006" is the second gap in the recorded history.

use diesel::pg::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use crate::migrations::SchemaMigration;

pub(super) struct LeadLinkedinData;

impl SchemaMigration for LeadLinkedinData {
    fn revision(&self) -> &'static str {
        "0007"
    }

    fn down_revision(&self) -> Option<&'static str> {
        Some("0006")
    }

    fn name(&self) -> &'static str {
        "add linkedin_data to leads"
    }

    fn upgrade(&self, conn: &mut PgConnection) -> QueryResult<()> {
        conn.batch_execute(
            "ALTER TABLE leads ADD COLUMN linkedin_data VARCHAR;
             ALTER TABLE test_schema.leads ADD COLUMN linkedin_data VARCHAR;",
        )
    }

    fn downgrade(&self, conn: &mut PgConnection) -> QueryResult<()> {
        conn.batch_execute(
            "ALTER TABLE leads DROP COLUMN linkedin_data;
             ALTER TABLE test_schema.leads DROP COLUMN linkedin_data;",
        )
    }
}
