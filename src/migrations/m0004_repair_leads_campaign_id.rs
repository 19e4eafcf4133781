//! Revision 0004: repair a corrupted `leads` table carrying a duplicated
//! `campaign_id` column, left behind by an earlier buggy migration.
//!
//! The live column metadata is inspected first; a healthy table is left
//! untouched. The repair drops the data along with the corruption, so the
//! downgrade is a documented no-op.

use diesel::pg::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use log::{info, warn};

use crate::migrations::{SchemaMigration, m0003_server_generated_ids};

#[derive(QueryableByName)]
struct ColumnCount {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

fn campaign_id_column_count(conn: &mut PgConnection) -> QueryResult<i64> {
    let row = diesel::sql_query(
        "SELECT COUNT(*) AS count
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND table_name = 'leads'
           AND column_name = 'campaign_id'",
    )
    .get_result::<ColumnCount>(conn)?;
    Ok(row.count)
}

pub(super) struct RepairLeadsCampaignId;

impl SchemaMigration for RepairLeadsCampaignId {
    fn revision(&self) -> &'static str {
        "0004"
    }

    fn down_revision(&self) -> Option<&'static str> {
        Some("0003")
    }

    fn name(&self) -> &'static str {
        "repair duplicated campaign_id in leads"
    }

    fn upgrade(&self, conn: &mut PgConnection) -> QueryResult<()> {
        if campaign_id_column_count(conn)? > 1 {
            warn!("leads carries a duplicated campaign_id column; rebuilding the table");
            conn.batch_execute("DROP TABLE leads")?;
            conn.batch_execute(&format!(
                "{};\n{};",
                m0003_server_generated_ids::create_leads("public"),
                m0003_server_generated_ids::create_leads_email_index("public"),
            ))?;
        } else {
            info!("leads column metadata is healthy; nothing to repair");
        }
        Ok(())
    }

    fn downgrade(&self, _conn: &mut PgConnection) -> QueryResult<()> {
        // The repair of a corrupted state cannot be undone.
        info!("revision 0004 is an irreversible repair; leaving the schema unchanged");
        Ok(())
    }
}
