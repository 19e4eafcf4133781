//! Data-access layer: one Reader/Writer trait pair per entity, implemented
//! by [`DieselRepository`] over the shared connection pool.
//!
//! Every write commits immediately and returns the persisted row (via
//! `RETURNING`), so server-generated ids, defaults, and timestamps are
//! visible to the caller. A lookup or update against an unknown id is an
//! `Ok(None)`, never an error; referential-integrity failures propagate as
//! [`errors::RepositoryError::ConstraintViolation`].

use uuid::Uuid;

use crate::db::{DbConnection, DbPool};
use crate::domain::campaign::{Campaign, CampaignStatus, NewCampaign};
use crate::domain::email_reply::{EmailReply, NewEmailReply};
use crate::domain::lead::{Lead, NewLead};
use crate::domain::organization::{NewOrganization, Organization};
use crate::domain::outbound_email::{NewOutboundEmail, OutboundEmail, OutboundEmailStatus};
use crate::domain::tenant::{NewTenant, Tenant};
use crate::domain::user::{NewUser, User};
use crate::repository::errors::RepositoryResult;

pub mod campaign;
pub mod email_reply;
pub mod errors;
pub mod lead;
pub mod organization;
pub mod outbound_email;
pub mod tenant;
pub mod user;

/// Diesel-backed repository. Cheap to clone; each call checks out one
/// pooled connection, performs its statements, and releases it on return.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait TenantReader {
    fn get_tenant_by_id(&self, id: Uuid) -> RepositoryResult<Option<Tenant>>;
    fn get_tenant_by_api_key_hash(&self, hash: &str) -> RepositoryResult<Option<Tenant>>;
    /// First tenant with the given name; names are not unique.
    fn get_tenant_by_name(&self, name: &str) -> RepositoryResult<Option<Tenant>>;
}

pub trait TenantWriter {
    fn create_tenant(&self, new_tenant: &NewTenant) -> RepositoryResult<Tenant>;
}

pub trait UserReader {
    fn get_user_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;
    fn get_user_by_username(&self, tenant_id: Uuid, username: &str)
    -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}

pub trait CampaignReader {
    fn get_campaign_by_id(&self, id: Uuid) -> RepositoryResult<Option<Campaign>>;
    fn list_campaigns_by_status(&self, status: CampaignStatus) -> RepositoryResult<Vec<Campaign>>;
}

pub trait CampaignWriter {
    fn create_campaign(&self, new_campaign: &NewCampaign) -> RepositoryResult<Campaign>;
    /// Returns the updated campaign, or `None` when the id is unknown.
    fn update_campaign_status(
        &self,
        id: Uuid,
        status: CampaignStatus,
    ) -> RepositoryResult<Option<Campaign>>;
    /// Deletes the campaign; its leads go with it via the FK cascade.
    fn delete_campaign(&self, id: Uuid) -> RepositoryResult<usize>;
}

pub trait OrganizationReader {
    fn get_organization_by_id(&self, id: Uuid) -> RepositoryResult<Option<Organization>>;
    /// Exact-match lookup on the stored domain string.
    fn get_organization_by_domain(&self, domain: &str) -> RepositoryResult<Option<Organization>>;
}

pub trait OrganizationWriter {
    fn create_organization(&self, new_org: &NewOrganization) -> RepositoryResult<Organization>;
    /// Deletes the organization; its leads go with it via the FK cascade.
    fn delete_organization(&self, id: Uuid) -> RepositoryResult<usize>;
}

pub trait LeadReader {
    fn get_lead_by_id(&self, id: Uuid) -> RepositoryResult<Option<Lead>>;
    fn list_leads_by_status(&self, status: &str) -> RepositoryResult<Vec<Lead>>;
}

pub trait LeadWriter {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
    /// Returns the updated lead, or `None` when the id is unknown.
    fn update_lead_status(&self, id: Uuid, status: &str) -> RepositoryResult<Option<Lead>>;
    fn mark_lead_validated(&self, id: Uuid) -> RepositoryResult<Option<Lead>>;
}

pub trait OutboundEmailReader {
    fn get_outbound_email_by_id(&self, id: Uuid) -> RepositoryResult<Option<OutboundEmail>>;
    /// Emails still awaiting send (scheduled or pending), earliest
    /// scheduled first. Served by the partial status index.
    fn list_emails_awaiting_send(&self, limit: i64) -> RepositoryResult<Vec<OutboundEmail>>;
    /// Follow-ups of the given email, oldest first.
    fn list_follow_ups(&self, parent_id: Uuid) -> RepositoryResult<Vec<OutboundEmail>>;
}

pub trait OutboundEmailWriter {
    fn create_outbound_email(&self, new_email: &NewOutboundEmail)
    -> RepositoryResult<OutboundEmail>;
    /// Returns the updated email, or `None` when the id is unknown.
    fn update_outbound_email_status(
        &self,
        id: Uuid,
        status: OutboundEmailStatus,
    ) -> RepositoryResult<Option<OutboundEmail>>;
}

pub trait EmailReplyReader {
    fn get_email_reply_by_id(&self, id: Uuid) -> RepositoryResult<Option<EmailReply>>;
    fn list_replies_for_outbound_email(
        &self,
        outbound_email_id: Uuid,
    ) -> RepositoryResult<Vec<EmailReply>>;
}

pub trait EmailReplyWriter {
    fn create_email_reply(&self, new_reply: &NewEmailReply) -> RepositoryResult<EmailReply>;
    /// Stores the AI label and confidence, stamping `classified_at`.
    /// Returns `None` when the id is unknown.
    fn record_reply_classification(
        &self,
        id: Uuid,
        classification: &str,
        confidence: f64,
    ) -> RepositoryResult<Option<EmailReply>>;
}
