//! Configuration for the Mobile Store API

use core_config::{app_info, env_is_set, server::ServerConfig, AppInfo, FromEnv};
use database::mongodb::MongoConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `None` when `DATABASE_URL` or `DATABASE_NAME` is missing
    pub mongodb: Option<MongoConfig>,
    pub database_url_set: bool,
    pub database_name_set: bool,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let mongodb = MongoConfig::from_env_optional()?.map(|config| {
            config.with_app_name(env!("CARGO_PKG_NAME"))
        });

        let cors_origins = std::env::var("CORS_ALLOWED_ORIGIN")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            mongodb,
            database_url_set: env_is_set("DATABASE_URL"),
            database_name_set: env_is_set("DATABASE_NAME"),
            cors_origins,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
