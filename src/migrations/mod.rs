//! Schema migration engine.
//!
//! Each revision is a forward/backward pair over one schema delta,
//! identified by a short numeric id and a pointer to its predecessor. The
//! history is strictly linear; applied revisions are recorded in a
//! `schema_revisions` bookkeeping table and every revision runs inside its
//! own transaction.
//!
//! Two predecessor ids ("0002" and "0006") survive in the recorded history
//! without a matching revision. The runner treats a pointer to a revision
//! it has never heard of as a historical gap: it warns and continues. A
//! pointer to a revision it knows about but which is not applied aborts the
//! run instead.

use diesel::pg::PgConnection;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use log::{info, warn};
use std::collections::HashSet;
use thiserror::Error;

mod m0001_initial_schema;
mod m0003_server_generated_ids;
mod m0004_repair_leads_campaign_id;
mod m0005_test_schema_mirror;
mod m0007_lead_linkedin_data;
mod m0008_tenant_layer;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("unknown revision: {0}")]
    UnknownRevision(String),

    #[error("revision {revision} requires {missing} to be applied first")]
    BrokenChain { revision: String, missing: String },
}

pub type MigrationResult<T> = Result<T, MigrationError>;

/// One reversible schema delta.
pub trait SchemaMigration {
    /// Short numeric revision id, e.g. "0003".
    fn revision(&self) -> &'static str;
    /// Predecessor revision id; `None` for the first revision.
    fn down_revision(&self) -> Option<&'static str>;
    /// Human-readable summary shown in logs and `status` output.
    fn name(&self) -> &'static str;
    fn upgrade(&self, conn: &mut PgConnection) -> QueryResult<()>;
    fn downgrade(&self, conn: &mut PgConnection) -> QueryResult<()>;
}

/// The full linear history, in application order.
pub fn registry() -> Vec<Box<dyn SchemaMigration>> {
    vec![
        Box::new(m0001_initial_schema::InitialOutreachSchema),
        Box::new(m0003_server_generated_ids::ServerGeneratedIds),
        Box::new(m0004_repair_leads_campaign_id::RepairLeadsCampaignId),
        Box::new(m0005_test_schema_mirror::TestSchemaMirror),
        Box::new(m0007_lead_linkedin_data::LeadLinkedinData),
        Box::new(m0008_tenant_layer::TenantLayer),
    ]
}

/// Applied/pending state of one registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionStatus {
    pub revision: &'static str,
    pub name: &'static str,
    pub applied: bool,
}

#[derive(QueryableByName)]
struct RevisionRow {
    #[diesel(sql_type = Text)]
    revision: String,
}

fn ensure_revision_table(conn: &mut PgConnection) -> QueryResult<()> {
    conn.batch_execute(
        "CREATE TABLE IF NOT EXISTS schema_revisions (
            revision VARCHAR(32) PRIMARY KEY,
            applied_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
}

fn applied_revisions(conn: &mut PgConnection) -> QueryResult<HashSet<String>> {
    let rows = diesel::sql_query("SELECT revision FROM schema_revisions")
        .load::<RevisionRow>(conn)?;
    Ok(rows.into_iter().map(|r| r.revision).collect())
}

fn record_revision(conn: &mut PgConnection, revision: &str) -> QueryResult<()> {
    diesel::sql_query("INSERT INTO schema_revisions (revision) VALUES ($1)")
        .bind::<Text, _>(revision)
        .execute(conn)
        .map(|_| ())
}

fn forget_revision(conn: &mut PgConnection, revision: &str) -> QueryResult<()> {
    diesel::sql_query("DELETE FROM schema_revisions WHERE revision = $1")
        .bind::<Text, _>(revision)
        .execute(conn)
        .map(|_| ())
}

fn known_revision(revision: &str) -> bool {
    registry().iter().any(|m| m.revision() == revision)
}

/// Applies every pending revision in order. Returns the ids applied by this
/// call.
pub fn upgrade(conn: &mut PgConnection) -> MigrationResult<Vec<String>> {
    run_upgrades(conn, None)
}

/// Applies pending revisions up to and including `target`.
pub fn upgrade_to(conn: &mut PgConnection, target: &str) -> MigrationResult<Vec<String>> {
    if !known_revision(target) {
        return Err(MigrationError::UnknownRevision(target.to_string()));
    }
    run_upgrades(conn, Some(target))
}

fn run_upgrades(conn: &mut PgConnection, target: Option<&str>) -> MigrationResult<Vec<String>> {
    ensure_revision_table(conn)?;
    let mut applied = applied_revisions(conn)?;
    let mut newly_applied = Vec::new();

    for migration in registry() {
        let revision = migration.revision();
        if !applied.contains(revision) {
            if let Some(prev) = migration.down_revision() {
                if !applied.contains(prev) {
                    if known_revision(prev) {
                        return Err(MigrationError::BrokenChain {
                            revision: revision.to_string(),
                            missing: prev.to_string(),
                        });
                    }
                    warn!(
                        "revision {prev} precedes {revision} but is missing from the recorded \
                         history; continuing"
                    );
                }
            }

            conn.transaction(|conn| {
                migration.upgrade(conn)?;
                record_revision(conn, revision)
            })?;
            info!("applied revision {revision} ({})", migration.name());
            applied.insert(revision.to_string());
            newly_applied.push(revision.to_string());
        }

        if target == Some(revision) {
            break;
        }
    }

    Ok(newly_applied)
}

/// Reverts applied revisions in reverse order down to (but not including)
/// `target`; `None` reverts everything. Returns the ids reverted.
pub fn downgrade_to(
    conn: &mut PgConnection,
    target: Option<&str>,
) -> MigrationResult<Vec<String>> {
    if let Some(target) = target {
        if !known_revision(target) {
            return Err(MigrationError::UnknownRevision(target.to_string()));
        }
    }

    ensure_revision_table(conn)?;
    let applied = applied_revisions(conn)?;
    let mut reverted = Vec::new();

    for migration in registry().into_iter().rev() {
        let revision = migration.revision();
        if target == Some(revision) {
            break;
        }
        if !applied.contains(revision) {
            continue;
        }

        conn.transaction(|conn| {
            migration.downgrade(conn)?;
            forget_revision(conn, revision)
        })?;
        info!("reverted revision {revision} ({})", migration.name());
        reverted.push(revision.to_string());
    }

    Ok(reverted)
}

/// Applied/pending listing for every revision in the registry.
pub fn status(conn: &mut PgConnection) -> MigrationResult<Vec<RevisionStatus>> {
    ensure_revision_table(conn)?;
    let applied = applied_revisions(conn)?;

    Ok(registry()
        .iter()
        .map(|m| RevisionStatus {
            revision: m.revision(),
            name: m.name(),
            applied: applied.contains(m.revision()),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_strictly_ordered_and_unique() {
        let ids: Vec<u32> = registry()
            .iter()
            .map(|m| m.revision().parse().expect("numeric revision id"))
            .collect();
        assert!(!ids.is_empty());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn only_the_first_revision_lacks_a_predecessor() {
        let migrations = registry();
        assert_eq!(migrations[0].down_revision(), None);
        assert!(migrations[1..].iter().all(|m| m.down_revision().is_some()));
    }

    #[test]
    fn predecessors_point_strictly_backwards() {
        for migration in registry() {
            if let Some(prev) = migration.down_revision() {
                let prev: u32 = prev.parse().expect("numeric predecessor id");
                let own: u32 = migration.revision().parse().expect("numeric revision id");
                assert!(prev < own, "predecessor must precede its revision");
            }
        }
    }

    #[test]
    fn history_gaps_are_exactly_the_known_ones() {
        let gaps: Vec<&str> = registry()
            .iter()
            .filter_map(|m| m.down_revision())
            .filter(|prev| !known_revision(prev))
            .collect();
        assert_eq!(gaps, ["0002", "0006"]);
    }
}
