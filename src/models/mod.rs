//! Diesel mappings between database rows and domain entities.

pub mod campaign;
pub mod config;
pub mod email_reply;
pub mod lead;
pub mod organization;
pub mod outbound_email;
pub mod tenant;
pub mod user;
