use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::ai::dto::GateConfig;

pub const DEFAULT_DB_PATH: &str = "notescan_db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub db_path: String,
    pub completion_timeout: Option<Duration>,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let db_path = env::var("NOTESCAN_DB_PATH").unwrap_or(DEFAULT_DB_PATH.to_string());

        let completion_timeout = match env::var("NOTESCAN_COMPLETION_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout_secs(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            openai_api_key,
            db_path,
            completion_timeout,
        })
    }

    pub fn gate_config(&self) -> GateConfig {
        GateConfig {
            completion_timeout: self.completion_timeout,
        }
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("NOTESCAN_COMPLETION_TIMEOUT_SECS must be a whole number of seconds, got '{}'", raw))?;
    if secs == 0 {
        return Err(anyhow::anyhow!("NOTESCAN_COMPLETION_TIMEOUT_SECS must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
