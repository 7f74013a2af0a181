//! Process settings.
//!
//! Values come from an optional `settings.toml` next to the binary, merged
//! with `ANALYTICS_*` environment variables (e.g. `ANALYTICS_PORT`). Every
//! key has a default:
//!
//! - `bind` = `0.0.0.0`
//! - `port` = `8005`
//! - `environment` = `development`
//! - `level` = `info` (tracing filter level)
//! - `database_url` = `sqlite:fraud_analytics.db?mode=rwc`

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub bind: String,
    pub port: u16,
    pub environment: String,
    pub level: String,
    pub database_url: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind", "0.0.0.0")?
            .set_default("port", 8005_i64)?
            .set_default("environment", "development")?
            .set_default("level", "info")?
            .set_default("database_url", "sqlite:fraud_analytics.db?mode=rwc")?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("ANALYTICS"))
            .build()?
            .try_deserialize()
    }
}
