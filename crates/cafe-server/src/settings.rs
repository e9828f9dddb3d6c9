//! Server settings
//!
//! Defaults overridden by `CAFE_`-prefixed environment variables, e.g.
//! `CAFE_BIND_ADDRESS=0.0.0.0:8080`.

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
const DEFAULT_DATA_DIR: &str = "data";
const DATABASE_FILE: &str = "cafes.db";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub data_dir: PathBuf,
    /// Explicit database file, otherwise `<data_dir>/cafes.db`
    #[serde(default)]
    pub database_path: Option<String>,
    /// Keep cafes in process memory instead of SQLite
    pub in_memory: bool,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix("CAFE"))
    }

    fn from_env(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("data_dir", DEFAULT_DATA_DIR)?
            .set_default("in_memory", false)?
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn database_path(&self) -> String {
        self.database_path.clone().unwrap_or_else(|| {
            self.data_dir
                .join(DATABASE_FILE)
                .to_string_lossy()
                .to_string()
        })
    }
}
