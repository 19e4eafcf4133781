//! Verifies that the configured database is reachable.

use dotenvy::dotenv;

use outreach_db::db::{establish_connection_pool, get_connection, ping};
use outreach_db::models::config::AppConfig;

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
            eprintln!("Connection failed: {e}");
            std::process::exit(1);
        }
    };

    let mut conn = match get_connection(&pool) {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Connection failed: {e}");
            std::process::exit(1);
        }
    };

    match ping(&mut conn) {
        Ok(()) => println!("Connection successful"),
        Err(e) => {
            eprintln!("Connection failed: {e}");
            std::process::exit(1);
        }
    }
}
