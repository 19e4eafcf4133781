//! Creates a new campaign and prints its id.
//!
//! Usage: create-campaign "Campaign Name" "Campaign Description"
//!
//! Campaigns belong to a tenant and a creating user; a bare invocation
//! get-or-creates a "default" tenant with an "admin" user so the command
//! works out of the box.

use std::env;

use dotenvy::dotenv;
use uuid::Uuid;

use outreach_db::db::establish_connection_pool;
use outreach_db::domain::campaign::NewCampaign;
use outreach_db::domain::tenant::NewTenant;
use outreach_db::domain::user::NewUser;
use outreach_db::models::config::AppConfig;
use outreach_db::repository::errors::{RepositoryError, RepositoryResult};
use outreach_db::repository::{
    CampaignWriter, DieselRepository, TenantReader, TenantWriter, UserReader, UserWriter,
};

const DEFAULT_TENANT: &str = "default";
const DEFAULT_USERNAME: &str = "admin";

fn default_context(repo: &DieselRepository) -> RepositoryResult<(Uuid, Uuid)> {
    let tenant = match repo.get_tenant_by_name(DEFAULT_TENANT)? {
        Some(tenant) => tenant,
        None => {
            let new_tenant = NewTenant::new(DEFAULT_TENANT).map_err(RepositoryError::from)?;
            repo.create_tenant(&new_tenant)?
        }
    };

    let user = match repo.get_user_by_username(tenant.tenant_id, DEFAULT_USERNAME)? {
        Some(user) => user,
        None => {
            let new_user = NewUser::new(
                tenant.tenant_id,
                DEFAULT_USERNAME,
                "admin@example.com",
                "!",
            )
            .map_err(RepositoryError::from)?
            .role("admin");
            repo.create_user(&new_user)?
        }
    };

    Ok((tenant.tenant_id, user.user_id))
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: create-campaign \"Campaign Name\" \"Campaign Description\"");
        std::process::exit(1);
    }
    let name = args[1].clone();
    let description = args[2].clone();

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

    let repo = DieselRepository::new(pool);

    let campaign = default_context(&repo)
        .and_then(|(tenant_id, user_id)| {
            let new_campaign = NewCampaign::new(tenant_id, user_id, name, Some(description))
                .map_err(RepositoryError::from)?;
            repo.create_campaign(&new_campaign)
        });

    match campaign {
        Ok(campaign) => {
            log::info!("Created campaign: {}", campaign.name);
            println!("Campaign created successfully!");
            println!("Campaign ID: {}", campaign.campaign_id);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
