use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text};
use uuid::Uuid;

use outreach_db::migrations::{self, MigrationError};
use outreach_db::repository::{DieselRepository, LeadReader};

mod common;

const CORE_TABLES: [&str; 7] = [
    "tenants",
    "users",
    "campaigns",
    "organizations",
    "leads",
    "outbound_emails",
    "email_replies",
];

#[derive(QueryableByName)]
struct CountRow {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

#[derive(QueryableByName)]
struct ColumnRow {
    #[diesel(sql_type = Text)]
    column_name: String,
}

fn table_exists(conn: &mut PgConnection, schema: &str, table: &str) -> bool {
    let row = diesel::sql_query(
        "SELECT COUNT(*) AS count FROM information_schema.tables
         WHERE table_schema = $1 AND table_name = $2",
    )
    .bind::<Text, _>(schema)
    .bind::<Text, _>(table)
    .get_result::<CountRow>(conn)
    .expect("metadata query");
    row.count > 0
}

fn schema_exists(conn: &mut PgConnection, schema: &str) -> bool {
    let row = diesel::sql_query(
        "SELECT COUNT(*) AS count FROM information_schema.schemata WHERE schema_name = $1",
    )
    .bind::<Text, _>(schema)
    .get_result::<CountRow>(conn)
    .expect("metadata query");
    row.count > 0
}

fn column_names(conn: &mut PgConnection, schema: &str, table: &str) -> Vec<String> {
    let mut names: Vec<String> = diesel::sql_query(
        "SELECT column_name FROM information_schema.columns
         WHERE table_schema = $1 AND table_name = $2",
    )
    .bind::<Text, _>(schema)
    .bind::<Text, _>(table)
    .load::<ColumnRow>(conn)
    .expect("metadata query")
    .into_iter()
    .map(|r| r.column_name)
    .collect();
    names.sort();
    names
}

fn row_count(conn: &mut PgConnection, table: &str) -> i64 {
    diesel::sql_query(format!("SELECT COUNT(*) AS count FROM {table}"))
        .get_result::<CountRow>(conn)
        .expect("count query")
        .count
}

#[test]
fn test_full_upgrade_then_full_downgrade_round_trips() {
    let Some(test_db) = common::TestDb::try_new_empty("outreach_test_migration_roundtrip") else {
        return;
    };
    let mut conn = test_db.conn();

    let applied = migrations::upgrade(&mut conn).expect("upgrade");
    assert_eq!(applied, ["0001", "0003", "0004", "0005", "0007", "0008"]);
    for table in CORE_TABLES {
        assert!(table_exists(&mut conn, "public", table), "{table} missing");
    }
    assert!(schema_exists(&mut conn, "test_schema"));

    let reverted = migrations::downgrade_to(&mut conn, None).expect("downgrade");
    assert_eq!(reverted, ["0008", "0007", "0005", "0004", "0003", "0001"]);
    for table in CORE_TABLES {
        assert!(
            !table_exists(&mut conn, "public", table),
            "{table} still present"
        );
    }
    assert!(!schema_exists(&mut conn, "test_schema"));
}

#[test]
fn test_second_upgrade_is_a_noop() {
    let Some(test_db) = common::TestDb::try_new("outreach_test_migration_idempotent") else {
        return;
    };
    let mut conn = test_db.conn();

    let applied = migrations::upgrade(&mut conn).expect("upgrade");
    assert!(applied.is_empty());

    let statuses = migrations::status(&mut conn).expect("status");
    assert!(statuses.iter().all(|s| s.applied));
}

#[test]
fn test_tenant_layer_backfills_preexisting_rows() {
    let Some(test_db) = common::TestDb::try_new_empty("outreach_test_migration_backfill") else {
        return;
    };
    let mut conn = test_db.conn();

    migrations::upgrade_to(&mut conn, "0007").expect("upgrade to 0007");

    // Rows created before multi-tenancy existed.
    diesel::sql_query(
        "INSERT INTO campaigns (campaign_id, name, status)
         VALUES ('11111111-1111-1111-1111-111111111111', 'Legacy Campaign', 'active')",
    )
    .execute(&mut conn)
    .expect("insert campaign");
    diesel::sql_query(
        "INSERT INTO organizations (organization_id, name, email_domain)
         VALUES ('22222222-2222-2222-2222-222222222222', 'Legacy Org', 'legacy.com')",
    )
    .execute(&mut conn)
    .expect("insert organization");
    diesel::sql_query(
        "INSERT INTO leads (lead_id, campaign_id, company_id, email, status)
         VALUES ('33333333-3333-3333-3333-333333333333',
                 '11111111-1111-1111-1111-111111111111',
                 '22222222-2222-2222-2222-222222222222',
                 'old@legacy.com', 'new')",
    )
    .execute(&mut conn)
    .expect("insert lead");

    migrations::upgrade(&mut conn).expect("upgrade to head");
    drop(conn);

    let repo = DieselRepository::new(test_db.pool());
    let lead_id: Uuid = "33333333-3333-3333-3333-333333333333".parse().unwrap();
    let lead = repo
        .get_lead_by_id(lead_id)
        .expect("get lead")
        .expect("lead survived");
    assert_eq!(lead.email, "old@legacy.com");
    assert!(lead.tenant_id.is_nil(), "backfilled under the legacy tenant");
    assert!(!lead.is_validated);
}

#[test]
fn test_repair_revision_leaves_healthy_leads_alone() {
    let Some(test_db) = common::TestDb::try_new_empty("outreach_test_migration_repair") else {
        return;
    };
    let mut conn = test_db.conn();

    migrations::upgrade_to(&mut conn, "0003").expect("upgrade to 0003");
    diesel::sql_query(
        "INSERT INTO campaigns (campaign_id, name, status)
         VALUES ('11111111-1111-1111-1111-111111111111', 'Camp', 'draft')",
    )
    .execute(&mut conn)
    .expect("insert campaign");
    diesel::sql_query(
        "INSERT INTO organizations (organization_id, name, email_domain)
         VALUES ('22222222-2222-2222-2222-222222222222', 'Org', 'org.com')",
    )
    .execute(&mut conn)
    .expect("insert organization");
    diesel::sql_query(
        "INSERT INTO leads (campaign_id, company_id, email, status)
         VALUES ('11111111-1111-1111-1111-111111111111',
                 '22222222-2222-2222-2222-222222222222',
                 'kept@org.com', 'new')",
    )
    .execute(&mut conn)
    .expect("insert lead");

    let applied = migrations::upgrade_to(&mut conn, "0004").expect("upgrade to 0004");
    assert_eq!(applied, ["0004"]);
    // The defensive probe found a single campaign_id column and left the
    // table (and its data) untouched.
    assert_eq!(row_count(&mut conn, "leads"), 1);
}

#[test]
fn test_mirror_matches_primary_columns() {
    let Some(test_db) = common::TestDb::try_new("outreach_test_migration_mirror") else {
        return;
    };
    let mut conn = test_db.conn();

    for table in CORE_TABLES {
        assert!(table_exists(&mut conn, "test_schema", table), "{table} not mirrored");
        assert_eq!(
            column_names(&mut conn, "public", table),
            column_names(&mut conn, "test_schema", table),
            "column mismatch for {table}"
        );
    }
}

#[test]
fn test_downgrade_to_target_and_reapply() {
    let Some(test_db) = common::TestDb::try_new("outreach_test_migration_target") else {
        return;
    };
    let mut conn = test_db.conn();

    let reverted = migrations::downgrade_to(&mut conn, Some("0005")).expect("downgrade");
    assert_eq!(reverted, ["0008", "0007"]);
    assert!(!table_exists(&mut conn, "public", "outbound_emails"));
    assert!(
        !column_names(&mut conn, "public", "leads").contains(&"linkedin_data".to_string())
    );
    assert!(table_exists(&mut conn, "test_schema", "leads"));

    let statuses = migrations::status(&mut conn).expect("status");
    for status in statuses {
        let expected = !matches!(status.revision, "0007" | "0008");
        assert_eq!(status.applied, expected, "revision {}", status.revision);
    }

    let reapplied = migrations::upgrade(&mut conn).expect("upgrade");
    assert_eq!(reapplied, ["0007", "0008"]);
}

#[test]
fn test_unknown_revision_targets_are_rejected() {
    let Some(test_db) = common::TestDb::try_new_empty("outreach_test_migration_unknown") else {
        return;
    };
    let mut conn = test_db.conn();

    assert!(matches!(
        migrations::upgrade_to(&mut conn, "9999"),
        Err(MigrationError::UnknownRevision(_))
    ));
    assert!(matches!(
        migrations::downgrade_to(&mut conn, Some("0042")),
        Err(MigrationError::UnknownRevision(_))
    ));
}
