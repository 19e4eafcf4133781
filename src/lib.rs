//! Relational schema, migration sequence, and data-access layer for an
//! outreach CRM: tenants, users, campaigns, organizations, leads, outbound
//! emails, and replies persisted in PostgreSQL.
//!
//! The crate has three layers. [`migrations`] evolves the physical schema
//! through a linear revision history. [`schema`] and [`models`] map the
//! latest shape onto Diesel. [`repository`] exposes the single-row
//! create/read/update operations the rest of the product builds on.

pub mod db;
pub mod domain;
pub mod migrations;
pub mod models;
pub mod repository;
pub mod schema;
