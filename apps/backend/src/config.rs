//! Server configuration from environment variables.

use std::path::PathBuf;

use quizdrill_core::NewCardLimit;

use crate::error::{ApiError, Result};

/// Runtime configuration.
///
/// Read from the process environment after `.env` has been loaded:
/// - HOST / PORT: listen address (default 0.0.0.0:3000)
/// - QUESTIONS_PATH: question bank JSON (default data/questions.json)
/// - PROGRESS_PATH: progress file (default in the local data directory)
/// - MAX_NEW_CARDS: new cards per session, a number or "unlimited" (default)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub questions_path: PathBuf,
    pub progress_path: PathBuf,
    pub max_new_cards: NewCardLimit,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ApiError::Config(format!("PORT must be a port number, got {value:?}")))?,
            None => 3000,
        };

        let questions_path = lookup("QUESTIONS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/questions.json"));

        let progress_path = lookup("PROGRESS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_progress_path);

        let max_new_cards = match lookup("MAX_NEW_CARDS") {
            Some(value) => value.parse().map_err(|_| {
                ApiError::Config(format!(
                    "MAX_NEW_CARDS must be a number or \"unlimited\", got {value:?}"
                ))
            })?,
            None => NewCardLimit::Unlimited,
        };

        Ok(Self {
            host,
            port,
            questions_path,
            progress_path,
            max_new_cards,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_progress_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quizdrill")
        .join("progress.json")
}
