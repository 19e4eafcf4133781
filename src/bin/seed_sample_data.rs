//! Resets the schema and populates it with sample data.
//!
//! Destructive: the full downgrade runs first, so every existing row is
//! lost. Intended for demo and development databases only.

use chrono::{Duration, Utc};
use dotenvy::dotenv;
use serde_json::json;

use outreach_db::db::{establish_connection_pool, get_connection};
use outreach_db::domain::campaign::{CampaignStatus, NewCampaign};
use outreach_db::domain::email_reply::NewEmailReply;
use outreach_db::domain::lead::NewLead;
use outreach_db::domain::organization::NewOrganization;
use outreach_db::domain::outbound_email::{NewOutboundEmail, OutboundEmailStatus};
use outreach_db::domain::tenant::NewTenant;
use outreach_db::domain::user::NewUser;
use outreach_db::migrations;
use outreach_db::models::config::AppConfig;
use outreach_db::repository::errors::{RepositoryError, RepositoryResult};
use outreach_db::repository::{
    CampaignWriter, DieselRepository, EmailReplyWriter, LeadWriter, OrganizationWriter,
    OutboundEmailWriter, TenantWriter, UserWriter,
};

fn seed(repo: &DieselRepository) -> RepositoryResult<()> {
    log::info!("Creating sample tenant and user...");
    let tenant = repo.create_tenant(
        &NewTenant::new("Demo Tenant")
            .map_err(RepositoryError::from)?
            .plan_details(json!({"plan": "trial", "seats": 5})),
    )?;
    let user = repo.create_user(
        &NewUser::new(tenant.tenant_id, "demo", "demo@example.com", "!")
            .map_err(RepositoryError::from)?
            .role("admin"),
    )?;

    log::info!("Creating sample campaigns...");
    let q1 = repo.create_campaign(
        &NewCampaign::new(
            tenant.tenant_id,
            user.user_id,
            "Q1 Outreach",
            Some("First quarter outreach campaign".to_string()),
        )
        .map_err(RepositoryError::from)?,
    )?;
    let enterprise = repo.create_campaign(
        &NewCampaign::new(
            tenant.tenant_id,
            user.user_id,
            "Enterprise Focus",
            Some("Targeting enterprise companies".to_string()),
        )
        .map_err(RepositoryError::from)?
        .status(CampaignStatus::Active),
    )?;

    log::info!("Creating sample organizations...");
    let techcorp = repo.create_organization(
        &NewOrganization::new("TechCorp Inc", "techcorp.com")
            .map_err(RepositoryError::from)?
            .website_url(Some("https://techcorp.com".to_string()))
            .linkedin_url(Some("https://linkedin.com/company/techcorp".to_string()))
            .estimated_num_employees(250),
    )?;
    let dataflow = repo.create_organization(
        &NewOrganization::new("DataFlow Systems", "dataflow.com")
            .map_err(RepositoryError::from)?
            .website_url(Some("https://dataflow.com".to_string()))
            .linkedin_url(Some("https://linkedin.com/company/dataflow".to_string())),
    )?;

    log::info!("Creating sample leads...");
    let john = repo.create_lead(
        &NewLead::new(
            tenant.tenant_id,
            q1.campaign_id,
            techcorp.organization_id,
            "john.doe@techcorp.com",
            "new",
        )
        .map_err(RepositoryError::from)?
        .name(Some("John".to_string()), Some("Doe".to_string()))
        .title("CTO"),
    )?;
    repo.create_lead(
        &NewLead::new(
            tenant.tenant_id,
            q1.campaign_id,
            dataflow.organization_id,
            "jane.smith@dataflow.com",
            "contacted",
        )
        .map_err(RepositoryError::from)?
        .name(Some("Jane".to_string()), Some("Smith".to_string()))
        .title("VP of Engineering"),
    )?;
    repo.create_lead(
        &NewLead::new(
            tenant.tenant_id,
            enterprise.campaign_id,
            techcorp.organization_id,
            "bob.wilson@techcorp.com",
            "new",
        )
        .map_err(RepositoryError::from)?
        .name(Some("Bob".to_string()), Some("Wilson".to_string()))
        .title("CEO")
        .custom_fields(json!({"segment": "enterprise"})),
    )?;

    log::info!("Creating a sample email thread...");
    let first_touch = repo.create_outbound_email(
        &NewOutboundEmail::new(
            tenant.tenant_id,
            q1.campaign_id,
            john.lead_id,
            "Quick question about TechCorp",
            "Hi John, ...",
        )
        .map_err(RepositoryError::from)?
        .status(OutboundEmailStatus::Sent),
    )?;
    repo.create_outbound_email(
        &NewOutboundEmail::new(
            tenant.tenant_id,
            q1.campaign_id,
            john.lead_id,
            "Re: Quick question about TechCorp",
            "Hi John, just bumping this ...",
        )
        .map_err(RepositoryError::from)?
        .follow_up_to(first_touch.outbound_email_id)
        .scheduled_at(Utc::now() + Duration::days(3)),
    )?;

    let reply = repo.create_email_reply(
        &NewEmailReply::new(
            tenant.tenant_id,
            first_touch.outbound_email_id,
            john.lead_id,
        )
        .content(
            Some("Re: Quick question about TechCorp".to_string()),
            Some("Sounds interesting, tell me more.".to_string()),
        ),
    )?;
    repo.record_reply_classification(reply.reply_id, "interested", 0.92)?;

    Ok(())
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let app_config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&app_config.db_config()) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    {
        let mut conn = match get_connection(&pool) {
            Ok(conn) => conn,
            Err(e) => {
                log::error!("Failed to get a database connection: {e}");
                std::process::exit(1);
            }
        };

        log::info!("Resetting schema...");
        let reset = migrations::downgrade_to(&mut conn, None)
            .and_then(|_| migrations::upgrade(&mut conn));
        if let Err(e) = reset {
            log::error!("Error resetting schema: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    match seed(&repo) {
        Ok(()) => println!("Sample data created successfully"),
        Err(e) => {
            log::error!("Error creating sample data: {e}");
            std::process::exit(1);
        }
    }
}
