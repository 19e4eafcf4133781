//! Revision 0001: the three core outreach tables with client-supplied
//! primary keys.

use diesel::pg::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use crate::migrations::SchemaMigration;

// Also used by the 0003 downgrade to restore this exact shape.
pub(super) const CREATE_INITIAL_TABLES: &str = "
CREATE TABLE campaigns (
    campaign_id UUID PRIMARY KEY,
    name VARCHAR NOT NULL,
    description TEXT,
    status VARCHAR NOT NULL,
    created_at TIMESTAMPTZ DEFAULT now(),
    updated_at TIMESTAMPTZ DEFAULT now()
);

CREATE TABLE organizations (
    organization_id UUID PRIMARY KEY,
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
    created_at TIMESTAMPTZ DEFAULT now(),
    updated_at TIMESTAMPTZ DEFAULT now()
);

CREATE TABLE leads (
    lead_id UUID PRIMARY KEY,
    campaign_id UUID NOT NULL REFERENCES campaigns (campaign_id),
    company_id UUID NOT NULL REFERENCES organizations (organization_id),
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
    created_at TIMESTAMPTZ DEFAULT now(),
    updated_at TIMESTAMPTZ DEFAULT now()
);

CREATE INDEX ix_leads_email ON leads (email);
";

const DROP_INITIAL_TABLES: &str = "
DROP INDEX ix_leads_email;
DROP TABLE leads;
DROP TABLE organizations;
DROP TABLE campaigns;
";

pub(super) struct InitialOutreachSchema;

impl SchemaMigration for InitialOutreachSchema {
    fn revision(&self) -> &'static str {
        "0001"
    }

    fn down_revision(&self) -> Option<&'static str> {
        None
    }

    fn name(&self) -> &'static str {
        "initial outreach schema"
    }

    fn upgrade(&self, conn: &mut PgConnection) -> QueryResult<()> {
        conn.batch_execute(CREATE_INITIAL_TABLES)
    }

    fn downgrade(&self, conn: &mut PgConnection) -> QueryResult<()> {
        conn.batch_execute(DROP_INITIAL_TABLES)
    }
}
