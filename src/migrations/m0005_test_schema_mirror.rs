//! Revision 0005: duplicate the whole schema under the `test_schema`
//! namespace for isolated testing, with foreign keys scoped to that
//! namespace.

use diesel::pg::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use crate::migrations::{SchemaMigration, m0003_server_generated_ids};

pub(super) struct TestSchemaMirror;

impl SchemaMigration for TestSchemaMirror {
    fn revision(&self) -> &'static str {
        "0005"
    }

    fn down_revision(&self) -> Option<&'static str> {
        Some("0004")
    }

    fn name(&self) -> &'static str {
        "create test_schema mirror"
    }

    fn upgrade(&self, conn: &mut PgConnection) -> QueryResult<()> {
        conn.batch_execute("CREATE SCHEMA IF NOT EXISTS test_schema")?;
        conn.batch_execute(&format!(
            "{};\n{};\n{};\n{};",
            m0003_server_generated_ids::create_campaigns("test_schema"),
            m0003_server_generated_ids::create_organizations("test_schema"),
            m0003_server_generated_ids::create_leads("test_schema"),
            m0003_server_generated_ids::create_leads_email_index("test_schema"),
        ))
    }

    fn downgrade(&self, conn: &mut PgConnection) -> QueryResult<()> {
        conn.batch_execute(
            "DROP INDEX test_schema.ix_leads_email;
             DROP TABLE test_schema.leads;
             DROP TABLE test_schema.organizations;
             DROP TABLE test_schema.campaigns;
             DROP SCHEMA IF EXISTS test_schema;",
        )
    }
}
