//! Revision 0003: drop and recreate the core tables with server-generated
//! UUID defaults and explicit foreign keys.
//!
//! The predecessor "0002" is a gap in the recorded history; whatever it did
//! is compensated for here by rebuilding all three tables from scratch.

use diesel::pg::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use crate::migrations::{SchemaMigration, m0001_initial_schema};

/// Campaigns DDL in the rebuilt shape, parameterized by namespace so the
/// test-schema mirror can reuse it verbatim.
pub(super) fn create_campaigns(schema: &str) -> String {
    format!(
        "CREATE TABLE {schema}.campaigns (
            campaign_id UUID NOT NULL DEFAULT gen_random_uuid(),
            name VARCHAR NOT NULL,
            description TEXT,
            status VARCHAR NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            PRIMARY KEY (campaign_id)
        )"
    )
}

pub(super) fn create_organizations(schema: &str) -> String {
    format!(
        "CREATE TABLE {schema}.organizations (
            organization_id UUID NOT NULL DEFAULT gen_random_uuid(),
            name VARCHAR NOT NULL,
            email_domain VARCHAR NOT NULL,
            external_id VARCHAR,
            external_source VARCHAR,
            website_url VARCHAR,
            linkedin_url VARCHAR,
            estimated_num_employees INTEGER,
            website_summary_data JSONB,
            website_raw_data JSONB,
            country VARCHAR,
            language VARCHAR,
            time_zone VARCHAR,
            source VARCHAR,
            formatted_organization_name VARCHAR,
            raw_address VARCHAR,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            PRIMARY KEY (organization_id)
        )"
    )
}

pub(super) fn create_leads(schema: &str) -> String {
    format!(
        "CREATE TABLE {schema}.leads (
            lead_id UUID NOT NULL DEFAULT gen_random_uuid(),
            campaign_id UUID NOT NULL REFERENCES {schema}.campaigns (campaign_id),
            company_id UUID NOT NULL REFERENCES {schema}.organizations (organization_id),
            first_name VARCHAR,
            last_name VARCHAR,
            email VARCHAR NOT NULL,
            external_id VARCHAR,
            title VARCHAR,
            headline VARCHAR,
            linkedin_url VARCHAR,
            email_verification_status VARCHAR,
            email_verification_message VARCHAR,
            email_icebreaker VARCHAR,
            status VARCHAR NOT NULL,
            language VARCHAR,
            source VARCHAR,
            email_sent_at TIMESTAMPTZ,
            reply_received_at TIMESTAMPTZ,
            last_contacted_at TIMESTAMPTZ,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            PRIMARY KEY (lead_id)
        )"
    )
}

pub(super) fn create_leads_email_index(schema: &str) -> String {
    format!("CREATE INDEX ix_leads_email ON {schema}.leads (email)")
}

pub(super) struct ServerGeneratedIds;

impl SchemaMigration for ServerGeneratedIds {
    fn revision(&self) -> &'static str {
        "0003"
    }

    fn down_revision(&self) -> Option<&'static str> {
        Some("0002")
    }

    fn name(&self) -> &'static str {
        "rebuild core tables with server-generated ids"
    }

    fn upgrade(&self, conn: &mut PgConnection) -> QueryResult<()> {
        conn.batch_execute(
            "DROP TABLE leads;
             DROP TABLE organizations;
             DROP TABLE campaigns;",
        )?;
        conn.batch_execute(&format!(
            "{};\n{};\n{};\n{};",
            create_campaigns("public"),
            create_organizations("public"),
            create_leads("public"),
            create_leads_email_index("public"),
        ))
    }

    fn downgrade(&self, conn: &mut PgConnection) -> QueryResult<()> {
        // Restore the 0001 shape exactly so the downgrade chain round-trips.
        conn.batch_execute(
            "DROP INDEX ix_leads_email;
             DROP TABLE leads;
             DROP TABLE organizations;
             DROP TABLE campaigns;",
        )?;
        conn.batch_execute(m0001_initial_schema::CREATE_INITIAL_TABLES)
    }
}
