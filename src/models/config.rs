//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::db::DbConfig;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by all binaries.
pub struct AppConfig {
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

impl AppConfig {
    /// Loads `config/default.yaml` (when present) and `OUTREACH_`-prefixed
    /// environment variables, the latter taking precedence.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("OUTREACH"))
            .build()?;
        settings.try_deserialize()
    }

    pub fn db_config(&self) -> DbConfig {
        let mut db = DbConfig::new(&self.database_url);
        db.max_connections = self.max_connections;
        db
    }
}
