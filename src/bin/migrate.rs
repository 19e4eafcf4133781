//! Applies, reverts, or lists schema revisions.
//!
//! Usage: migrate [up | down [TARGET] | status]

use std::env;

use dotenvy::dotenv;

use outreach_db::db::{establish_connection_pool, get_connection};
use outreach_db::migrations;
use outreach_db::models::config::AppConfig;

fn usage() -> ! {
    eprintln!("Usage: migrate [up | down [TARGET] | status]");
    std::process::exit(1);
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("up");

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

    let mut conn = match get_connection(&pool) {
        Ok(conn) => conn,
        Err(e) => {
            log::error!("Failed to get a database connection: {e}");
            std::process::exit(1);
        }
    };

    let outcome = match command {
        "up" => migrations::upgrade(&mut conn).map(|applied| {
            if applied.is_empty() {
                println!("Schema is up to date");
            } else {
                println!("Applied revisions: {}", applied.join(", "));
            }
        }),
        "down" => {
            let target = args.get(2).map(String::as_str);
            migrations::downgrade_to(&mut conn, target).map(|reverted| {
                if reverted.is_empty() {
                    println!("Nothing to revert");
                } else {
                    println!("Reverted revisions: {}", reverted.join(", "));
                }
            })
        }
        "status" => migrations::status(&mut conn).map(|statuses| {
            for status in statuses {
                let marker = if status.applied { "x" } else { " " };
                println!("[{marker}] {} {}", status.revision, status.name);
            }
        }),
        _ => usage(),
    };

    if let Err(e) = outcome {
        log::error!("Migration failed: {e}");
        std::process::exit(1);
    }
}
