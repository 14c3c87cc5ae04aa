use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults match the demo deployment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// How many ranked listings `GET /api/recommendations` returns.
    pub recommendation_count: usize,
    /// Perturb returned match percentages by ±5 (floored at 60) after ranking.
    pub score_jitter: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            recommendation_count: 5,
            score_jitter: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: optional_env("PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(defaults.port),
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            recommendation_count: optional_env("RECOMMENDATION_COUNT")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("RECOMMENDATION_COUNT must be a non-negative integer")?
                .unwrap_or(defaults.recommendation_count),
            score_jitter: optional_env("SCORE_JITTER")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("SCORE_JITTER must be a boolean flag")?
                .unwrap_or(defaults.score_jitter),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognised flag value '{other}'"),
    }
}
