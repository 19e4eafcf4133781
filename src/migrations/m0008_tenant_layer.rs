//! Revision 0008: the multi-tenant entity graph.
//!
//! Creates tenants and users, attaches campaigns and leads to a tenant,
//! upgrades the lead parent foreign keys to cascade, and adds the outbound
//! email and reply tables. Applied identically to the primary and test
//! namespaces. Rows that predate multi-tenancy are backfilled under a
//! well-known "legacy" tenant and user before the columns become NOT NULL.

use diesel::pg::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use crate::migrations::SchemaMigration;

const NAMESPACES: [&str; 2] = ["public", "test_schema"];

/// Nil UUID owning rows created before the tenant layer existed.
const LEGACY_ID: &str = "00000000-0000-0000-0000-000000000000";

fn tenant_layer_up(schema: &str) -> String {
    format!(
        "CREATE TABLE {schema}.tenants (
            tenant_id UUID NOT NULL DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            api_key_hash VARCHAR(255),
            plan_details JSONB,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            PRIMARY KEY (tenant_id)
        );
        CREATE UNIQUE INDEX idx_tenants_api_key_hash
            ON {schema}.tenants (api_key_hash) WHERE api_key_hash IS NOT NULL;

        CREATE TABLE {schema}.users (
            user_id UUID NOT NULL DEFAULT gen_random_uuid(),
            tenant_id UUID NOT NULL REFERENCES {schema}.tenants (tenant_id),
            username VARCHAR(100) NOT NULL,
            email VARCHAR(255) NOT NULL,
            password_hash VARCHAR(255) NOT NULL,
            full_name VARCHAR(255),
            role VARCHAR(50) NOT NULL DEFAULT 'member',
            is_active BOOLEAN NOT NULL DEFAULT true,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            PRIMARY KEY (user_id),
            CONSTRAINT uq_users_tenant_username UNIQUE (tenant_id, username),
            CONSTRAINT uq_users_tenant_email UNIQUE (tenant_id, email)
        );
        CREATE INDEX idx_users_tenant_id ON {schema}.users (tenant_id);
        CREATE INDEX idx_users_email ON {schema}.users (email);

        ALTER TABLE {schema}.campaigns
            ADD COLUMN tenant_id UUID REFERENCES {schema}.tenants (tenant_id);
        ALTER TABLE {schema}.campaigns
            ADD COLUMN user_id UUID REFERENCES {schema}.users (user_id);
        ALTER TABLE {schema}.campaigns ADD COLUMN settings JSONB;
        ALTER TABLE {schema}.campaigns ALTER COLUMN status SET DEFAULT 'draft';

        ALTER TABLE {schema}.leads
            ADD COLUMN tenant_id UUID REFERENCES {schema}.tenants (tenant_id);
        ALTER TABLE {schema}.leads ADD COLUMN custom_fields JSONB;
        ALTER TABLE {schema}.leads ADD COLUMN is_validated BOOLEAN NOT NULL DEFAULT false;

        INSERT INTO {schema}.tenants (tenant_id, name)
        SELECT '{LEGACY_ID}', 'legacy'
        WHERE EXISTS (SELECT 1 FROM {schema}.campaigns)
           OR EXISTS (SELECT 1 FROM {schema}.leads);
        INSERT INTO {schema}.users (user_id, tenant_id, username, email, password_hash, role)
        SELECT '{LEGACY_ID}', '{LEGACY_ID}', 'legacy', 'legacy@localhost', '!', 'admin'
        WHERE EXISTS (SELECT 1 FROM {schema}.tenants WHERE tenant_id = '{LEGACY_ID}');

        UPDATE {schema}.campaigns
            SET tenant_id = '{LEGACY_ID}', user_id = '{LEGACY_ID}'
            WHERE tenant_id IS NULL;
        UPDATE {schema}.leads SET tenant_id = '{LEGACY_ID}' WHERE tenant_id IS NULL;

        ALTER TABLE {schema}.campaigns ALTER COLUMN tenant_id SET NOT NULL;
        ALTER TABLE {schema}.campaigns ALTER COLUMN user_id SET NOT NULL;
        ALTER TABLE {schema}.leads ALTER COLUMN tenant_id SET NOT NULL;

        CREATE INDEX idx_campaigns_tenant_id ON {schema}.campaigns (tenant_id);
        CREATE INDEX idx_campaigns_user_id ON {schema}.campaigns (user_id);
        CREATE INDEX idx_campaigns_status ON {schema}.campaigns (status);
        CREATE INDEX idx_leads_tenant_id_campaign_id ON {schema}.leads (tenant_id, campaign_id);
        CREATE INDEX idx_leads_is_validated ON {schema}.leads (is_validated);

        ALTER TABLE {schema}.leads DROP CONSTRAINT leads_campaign_id_fkey;
        ALTER TABLE {schema}.leads ADD CONSTRAINT leads_campaign_id_fkey
            FOREIGN KEY (campaign_id)
            REFERENCES {schema}.campaigns (campaign_id) ON DELETE CASCADE;
        ALTER TABLE {schema}.leads DROP CONSTRAINT leads_company_id_fkey;
        ALTER TABLE {schema}.leads ADD CONSTRAINT leads_company_id_fkey
            FOREIGN KEY (company_id)
            REFERENCES {schema}.organizations (organization_id) ON DELETE CASCADE;

        CREATE TABLE {schema}.outbound_emails (
            outbound_email_id UUID NOT NULL DEFAULT gen_random_uuid(),
            tenant_id UUID NOT NULL REFERENCES {schema}.tenants (tenant_id),
            campaign_id UUID NOT NULL REFERENCES {schema}.campaigns (campaign_id),
            lead_id UUID NOT NULL REFERENCES {schema}.leads (lead_id),
            parent_outbound_email_id UUID
                REFERENCES {schema}.outbound_emails (outbound_email_id),
            subject_actual TEXT NOT NULL,
            body_actual TEXT NOT NULL,
            status VARCHAR(50) NOT NULL DEFAULT 'scheduled',
            scheduled_send_time TIMESTAMPTZ,
            actual_send_time TIMESTAMPTZ,
            opened_at TIMESTAMPTZ,
            clicked_at TIMESTAMPTZ,
            error_message TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            PRIMARY KEY (outbound_email_id)
        );
        CREATE INDEX idx_outbound_emails_tenant_id_campaign_id
            ON {schema}.outbound_emails (tenant_id, campaign_id);
        CREATE INDEX idx_outbound_emails_lead_id ON {schema}.outbound_emails (lead_id);
        CREATE INDEX idx_outbound_emails_status_scheduled_time
            ON {schema}.outbound_emails (status, scheduled_send_time)
            WHERE status IN ('scheduled', 'pending_send');
        CREATE INDEX idx_outbound_emails_parent_id
            ON {schema}.outbound_emails (parent_outbound_email_id);

        CREATE TABLE {schema}.email_replies (
            reply_id UUID NOT NULL DEFAULT gen_random_uuid(),
            tenant_id UUID NOT NULL REFERENCES {schema}.tenants (tenant_id),
            outbound_email_id UUID NOT NULL
                REFERENCES {schema}.outbound_emails (outbound_email_id),
            lead_id UUID NOT NULL REFERENCES {schema}.leads (lead_id),
            reply_received_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            reply_subject TEXT,
            reply_body TEXT,
            ai_classification VARCHAR(100),
            classification_confidence DOUBLE PRECISION,
            classified_at TIMESTAMPTZ,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            PRIMARY KEY (reply_id)
        );
        CREATE INDEX idx_email_replies_tenant_id_outbound_email_id
            ON {schema}.email_replies (tenant_id, outbound_email_id);
        CREATE INDEX idx_email_replies_lead_id ON {schema}.email_replies (lead_id);"
    )
}

fn tenant_layer_down(schema: &str) -> String {
    format!(
        "DROP TABLE {schema}.email_replies;
        DROP TABLE {schema}.outbound_emails;

        ALTER TABLE {schema}.leads DROP CONSTRAINT leads_campaign_id_fkey;
        ALTER TABLE {schema}.leads ADD CONSTRAINT leads_campaign_id_fkey
            FOREIGN KEY (campaign_id) REFERENCES {schema}.campaigns (campaign_id);
        ALTER TABLE {schema}.leads DROP CONSTRAINT leads_company_id_fkey;
        ALTER TABLE {schema}.leads ADD CONSTRAINT leads_company_id_fkey
            FOREIGN KEY (company_id) REFERENCES {schema}.organizations (organization_id);

        DROP INDEX {schema}.idx_leads_is_validated;
        DROP INDEX {schema}.idx_leads_tenant_id_campaign_id;
        ALTER TABLE {schema}.leads DROP COLUMN is_validated;
        ALTER TABLE {schema}.leads DROP COLUMN custom_fields;
        ALTER TABLE {schema}.leads DROP COLUMN tenant_id;

        DROP INDEX {schema}.idx_campaigns_status;
        DROP INDEX {schema}.idx_campaigns_user_id;
        DROP INDEX {schema}.idx_campaigns_tenant_id;
        ALTER TABLE {schema}.campaigns ALTER COLUMN status DROP DEFAULT;
        ALTER TABLE {schema}.campaigns DROP COLUMN settings;
        ALTER TABLE {schema}.campaigns DROP COLUMN user_id;
        ALTER TABLE {schema}.campaigns DROP COLUMN tenant_id;

        DROP TABLE {schema}.users;
        DROP TABLE {schema}.tenants;"
    )
}

pub(super) struct TenantLayer;

impl SchemaMigration for TenantLayer {
    fn revision(&self) -> &'static str {
        "0008"
    }

    fn down_revision(&self) -> Option<&'static str> {
        Some("0007")
    }

    fn name(&self) -> &'static str {
        "multi-tenant entity graph"
    }

    fn upgrade(&self, conn: &mut PgConnection) -> QueryResult<()> {
        for schema in NAMESPACES {
            conn.batch_execute(&tenant_layer_up(schema))?;
        }
        Ok(())
    }

    fn downgrade(&self, conn: &mut PgConnection) -> QueryResult<()> {
        for schema in NAMESPACES.into_iter().rev() {
            conn.batch_execute(&tenant_layer_down(schema))?;
        }
        Ok(())
    }
}
