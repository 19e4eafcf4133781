use serde_json::json;
use uuid::Uuid;

use outreach_db::domain::campaign::{CampaignStatus, NewCampaign};
use outreach_db::domain::email_reply::NewEmailReply;
use outreach_db::domain::lead::NewLead;
use outreach_db::domain::organization::NewOrganization;
use outreach_db::domain::outbound_email::{NewOutboundEmail, OutboundEmailStatus};
use outreach_db::domain::tenant::NewTenant;
use outreach_db::domain::user::NewUser;
use outreach_db::repository::errors::RepositoryError;
use outreach_db::repository::{
    CampaignReader, CampaignWriter, DieselRepository, EmailReplyReader, EmailReplyWriter,
    LeadReader, LeadWriter, OrganizationReader, OrganizationWriter, OutboundEmailReader,
    OutboundEmailWriter, TenantReader, TenantWriter, UserReader, UserWriter,
};

mod common;

#[test]
fn test_tenant_and_user_crud() {
    let Some(test_db) = common::TestDb::try_new("outreach_test_tenant_user_crud") else {
        return;
    };
    let repo = DieselRepository::new(test_db.pool());

    let new_tenant = NewTenant::new("Acme Outreach")
        .expect("valid tenant")
        .api_key_hash("sha256:abcdef")
        .plan_details(json!({"plan": "trial"}));
    let tenant = repo.create_tenant(&new_tenant).expect("create tenant");
    assert!(!tenant.tenant_id.is_nil());
    assert_eq!(tenant.name, "Acme Outreach");
    assert_eq!(tenant.plan_details, Some(json!({"plan": "trial"})));

    let fetched = repo
        .get_tenant_by_id(tenant.tenant_id)
        .expect("get tenant")
        .expect("tenant exists");
    assert_eq!(fetched, tenant);

    let by_hash = repo
        .get_tenant_by_api_key_hash("sha256:abcdef")
        .expect("get tenant by hash")
        .expect("tenant exists");
    assert_eq!(by_hash.tenant_id, tenant.tenant_id);

    let user = repo
        .create_user(
            &NewUser::new(tenant.tenant_id, "alice", "Alice@Example.com", "hash")
                .expect("valid user")
                .full_name(Some("Alice Anderson".to_string())),
        )
        .expect("create user");
    assert!(!user.user_id.is_nil());
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, "member");
    assert!(user.is_active);

    let by_username = repo
        .get_user_by_username(tenant.tenant_id, "alice")
        .expect("get user")
        .expect("user exists");
    assert_eq!(by_username, user);

    let by_id = repo
        .get_user_by_id(user.user_id)
        .expect("get user")
        .expect("user exists");
    assert_eq!(by_id, user);

    // (tenant, username) is unique.
    let duplicate = repo.create_user(
        &NewUser::new(tenant.tenant_id, "alice", "other@example.com", "hash").expect("valid user"),
    );
    assert!(matches!(
        duplicate,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[test]
fn test_campaign_crud_and_status_transitions() {
    let Some(test_db) = common::TestDb::try_new("outreach_test_campaign_crud") else {
        return;
    };
    let repo = DieselRepository::new(test_db.pool());
    let (tenant, user) = common::tenant_fixture(&repo);

    let campaign = repo
        .create_campaign(
            &NewCampaign::new(
                tenant.tenant_id,
                user.user_id,
                "Camp",
                Some("Desc".to_string()),
            )
            .expect("valid campaign"),
        )
        .expect("create campaign");
    assert!(!campaign.campaign_id.is_nil());
    assert_eq!(campaign.status, CampaignStatus::Draft);
    assert_eq!(campaign.description.as_deref(), Some("Desc"));

    let fetched = repo
        .get_campaign_by_id(campaign.campaign_id)
        .expect("get campaign")
        .expect("campaign exists");
    assert_eq!(fetched, campaign);

    let activated = repo
        .update_campaign_status(campaign.campaign_id, CampaignStatus::Active)
        .expect("update status")
        .expect("campaign exists");
    assert_eq!(activated.status, CampaignStatus::Active);
    assert!(activated.updated_at >= campaign.updated_at);

    let active = repo
        .list_campaigns_by_status(CampaignStatus::Active)
        .expect("list campaigns");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].campaign_id, campaign.campaign_id);

    let missing = repo
        .update_campaign_status(Uuid::new_v4(), CampaignStatus::Paused)
        .expect("update unknown id");
    assert!(missing.is_none());
}

#[test]
fn test_organization_domain_lookup() {
    let Some(test_db) = common::TestDb::try_new("outreach_test_org_domain") else {
        return;
    };
    let repo = DieselRepository::new(test_db.pool());

    let org = repo
        .create_organization(
            &NewOrganization::new("Acme Corp", "acme.com")
                .expect("valid organization")
                .website_url(Some("https://acme.com".to_string()))
                .estimated_num_employees(42),
        )
        .expect("create organization");
    assert!(!org.organization_id.is_nil());

    let by_domain = repo
        .get_organization_by_domain("acme.com")
        .expect("get organization")
        .expect("organization exists");
    assert_eq!(by_domain, org);

    let unregistered = repo
        .get_organization_by_domain("initech.io")
        .expect("get organization");
    assert!(unregistered.is_none());

    let by_id = repo
        .get_organization_by_id(org.organization_id)
        .expect("get organization")
        .expect("organization exists");
    assert_eq!(by_id.email_domain, "acme.com");
}

#[test]
fn test_lead_lifecycle_end_to_end() {
    let Some(test_db) = common::TestDb::try_new("outreach_test_lead_lifecycle") else {
        return;
    };
    let repo = DieselRepository::new(test_db.pool());
    let (tenant, user) = common::tenant_fixture(&repo);

    let campaign = repo
        .create_campaign(
            &NewCampaign::new(
                tenant.tenant_id,
                user.user_id,
                "Camp",
                Some("Desc".to_string()),
            )
            .expect("valid campaign"),
        )
        .expect("create campaign");
    let org = repo
        .create_organization(&NewOrganization::new("Org", "org.com").expect("valid organization"))
        .expect("create organization");

    let lead = repo
        .create_lead(
            &NewLead::new(
                tenant.tenant_id,
                campaign.campaign_id,
                org.organization_id,
                "user@org.com",
                "new",
            )
            .expect("valid lead")
            .custom_fields(json!({"segment": "smb"})),
        )
        .expect("create lead");
    assert!(!lead.lead_id.is_nil());
    assert!(!lead.is_validated);

    let new_leads = repo.list_leads_by_status("new").expect("list leads");
    assert_eq!(new_leads.len(), 1);
    assert_eq!(new_leads[0].email, "user@org.com");

    let contacted = repo
        .update_lead_status(lead.lead_id, "contacted")
        .expect("update status")
        .expect("lead exists");
    assert_eq!(contacted.status, "contacted");

    let contacted_leads = repo.list_leads_by_status("contacted").expect("list leads");
    assert_eq!(contacted_leads.len(), 1);
    assert_eq!(contacted_leads[0].lead_id, lead.lead_id);
    assert!(repo.list_leads_by_status("new").expect("list leads").is_empty());

    let missing = repo
        .update_lead_status(Uuid::new_v4(), "contacted")
        .expect("update unknown id");
    assert!(missing.is_none());

    let validated = repo
        .mark_lead_validated(lead.lead_id)
        .expect("mark validated")
        .expect("lead exists");
    assert!(validated.is_validated);
}

#[test]
fn test_lead_foreign_keys_are_enforced() {
    let Some(test_db) = common::TestDb::try_new("outreach_test_lead_fk") else {
        return;
    };
    let repo = DieselRepository::new(test_db.pool());
    let (tenant, _user) = common::tenant_fixture(&repo);

    let orphan = repo.create_lead(
        &NewLead::new(
            tenant.tenant_id,
            Uuid::new_v4(),
            Uuid::new_v4(),
            "orphan@nowhere.com",
            "new",
        )
        .expect("valid lead"),
    );
    assert!(matches!(
        orphan,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[test]
fn test_campaign_delete_cascades_to_leads() {
    let Some(test_db) = common::TestDb::try_new("outreach_test_campaign_cascade") else {
        return;
    };
    let repo = DieselRepository::new(test_db.pool());
    let (tenant, user) = common::tenant_fixture(&repo);

    let campaign = repo
        .create_campaign(
            &NewCampaign::new(tenant.tenant_id, user.user_id, "Camp", None)
                .expect("valid campaign"),
        )
        .expect("create campaign");
    let org = repo
        .create_organization(&NewOrganization::new("Org", "org.com").expect("valid organization"))
        .expect("create organization");
    let lead = repo
        .create_lead(
            &NewLead::new(
                tenant.tenant_id,
                campaign.campaign_id,
                org.organization_id,
                "user@org.com",
                "new",
            )
            .expect("valid lead"),
        )
        .expect("create lead");

    let deleted = repo
        .delete_campaign(campaign.campaign_id)
        .expect("delete campaign");
    assert_eq!(deleted, 1);
    assert!(
        repo.get_lead_by_id(lead.lead_id)
            .expect("get lead")
            .is_none()
    );
    // The organization is untouched.
    assert!(
        repo.get_organization_by_id(org.organization_id)
            .expect("get organization")
            .is_some()
    );
}

#[test]
fn test_outbound_email_queue_and_replies() {
    let Some(test_db) = common::TestDb::try_new("outreach_test_email_queue") else {
        return;
    };
    let repo = DieselRepository::new(test_db.pool());
    let (tenant, user) = common::tenant_fixture(&repo);

    let campaign = repo
        .create_campaign(
            &NewCampaign::new(tenant.tenant_id, user.user_id, "Camp", None)
                .expect("valid campaign"),
        )
        .expect("create campaign");
    let org = repo
        .create_organization(&NewOrganization::new("Org", "org.com").expect("valid organization"))
        .expect("create organization");
    let lead = repo
        .create_lead(
            &NewLead::new(
                tenant.tenant_id,
                campaign.campaign_id,
                org.organization_id,
                "user@org.com",
                "new",
            )
            .expect("valid lead"),
        )
        .expect("create lead");

    let now = chrono::Utc::now();
    let first = repo
        .create_outbound_email(
            &NewOutboundEmail::new(
                tenant.tenant_id,
                campaign.campaign_id,
                lead.lead_id,
                "Hello",
                "First touch",
            )
            .expect("valid email")
            .scheduled_at(now + chrono::Duration::hours(1)),
        )
        .expect("create email");
    assert_eq!(first.status, OutboundEmailStatus::Scheduled);
    assert!(!first.outbound_email_id.is_nil());

    let fetched = repo
        .get_outbound_email_by_id(first.outbound_email_id)
        .expect("get email")
        .expect("email exists");
    assert_eq!(fetched, first);

    let follow_up = repo
        .create_outbound_email(
            &NewOutboundEmail::new(
                tenant.tenant_id,
                campaign.campaign_id,
                lead.lead_id,
                "Re: Hello",
                "Bump",
            )
            .expect("valid email")
            .follow_up_to(first.outbound_email_id)
            .status(OutboundEmailStatus::PendingSend)
            .scheduled_at(now + chrono::Duration::hours(2)),
        )
        .expect("create follow-up");

    // A sent email is out of the queue.
    let sent = repo
        .create_outbound_email(
            &NewOutboundEmail::new(
                tenant.tenant_id,
                campaign.campaign_id,
                lead.lead_id,
                "Old",
                "Already gone",
            )
            .expect("valid email")
            .status(OutboundEmailStatus::Sent),
        )
        .expect("create sent email");

    let queue = repo.list_emails_awaiting_send(10).expect("list queue");
    assert_eq!(queue.len(), 2);
    assert_eq!(queue[0].outbound_email_id, first.outbound_email_id);
    assert_eq!(queue[1].outbound_email_id, follow_up.outbound_email_id);

    let thread = repo
        .list_follow_ups(first.outbound_email_id)
        .expect("list follow-ups");
    assert_eq!(thread.len(), 1);
    assert_eq!(thread[0].outbound_email_id, follow_up.outbound_email_id);

    let updated = repo
        .update_outbound_email_status(first.outbound_email_id, OutboundEmailStatus::Sent)
        .expect("update status")
        .expect("email exists");
    assert_eq!(updated.status, OutboundEmailStatus::Sent);
    assert_eq!(repo.list_emails_awaiting_send(10).expect("list queue").len(), 1);

    let missing = repo
        .update_outbound_email_status(Uuid::new_v4(), OutboundEmailStatus::Failed)
        .expect("update unknown id");
    assert!(missing.is_none());

    let reply = repo
        .create_email_reply(
            &NewEmailReply::new(tenant.tenant_id, sent.outbound_email_id, lead.lead_id).content(
                Some("Re: Old".to_string()),
                Some("Interesting!".to_string()),
            ),
        )
        .expect("create reply");
    assert!(reply.ai_classification.is_none());
    assert!(reply.classified_at.is_none());
    assert_eq!(
        repo.get_email_reply_by_id(reply.reply_id)
            .expect("get reply")
            .expect("reply exists"),
        reply
    );

    let classified = repo
        .record_reply_classification(reply.reply_id, "interested", 0.87)
        .expect("record classification")
        .expect("reply exists");
    assert_eq!(classified.ai_classification.as_deref(), Some("interested"));
    assert_eq!(classified.classification_confidence, Some(0.87));
    assert!(classified.classified_at.is_some());

    let for_email = repo
        .list_replies_for_outbound_email(sent.outbound_email_id)
        .expect("list replies");
    assert_eq!(for_email.len(), 1);
    assert_eq!(for_email[0].reply_id, reply.reply_id);
}
