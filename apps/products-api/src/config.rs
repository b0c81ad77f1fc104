//! Configuration for Products API

use core_config::{env_parse, server::ServerConfig, FromEnv};
use database::postgres::PostgresConfig;
use std::time::Duration;

pub use core_config::Environment;

/// Cleanup budget used when `SHUTDOWN_TIMEOUT_SECS` is not set.
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`)
    pub run_migrations: bool,
    /// Upper bound for the cleanup phase after a shutdown signal
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let database = PostgresConfig::from_env()?;
        let run_migrations = env_parse("RUN_MIGRATIONS", "true")?;
        let shutdown_timeout_secs = env_parse(
            "SHUTDOWN_TIMEOUT_SECS",
            &DEFAULT_SHUTDOWN_TIMEOUT_SECS.to_string(),
        )?;

        Ok(Self {
            environment,
            server,
            database,
            run_migrations,
            shutdown_timeout: Duration::from_secs(shutdown_timeout_secs),
        })
    }
}
