use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; the service boots with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Document title of the combined report page.
    pub report_title: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            report_title: std::env::var("REPORT_TITLE")
                .unwrap_or_else(|_| "Resume Feedback".to_string()),
        })
    }
}
