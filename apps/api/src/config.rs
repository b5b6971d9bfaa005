use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub database_max_connections: u32,
    /// Raw college rows fetched per request before scoring.
    pub college_fetch_limit: i64,
    /// Raw scholarship / job rows fetched per request before scoring.
    pub listing_fetch_limit: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            college_fetch_limit: parse_limit("COLLEGE_FETCH_LIMIT", 200)?,
            listing_fetch_limit: parse_limit("LISTING_FETCH_LIMIT", 100)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_limit(key: &str, default: i64) -> Result<i64> {
    match std::env::var(key) {
        Ok(raw) => {
            let limit = raw
                .parse::<i64>()
                .with_context(|| format!("{key} must be a positive integer"))?;
            anyhow::ensure!(limit > 0, "{key} must be a positive integer");
            Ok(limit)
        }
        Err(_) => Ok(default),
    }
}
