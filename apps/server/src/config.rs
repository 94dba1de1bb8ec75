use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;
use milkbook_ai::DEFAULT_MODEL;
use milkbook_core::constants::DEFAULT_DAILY_COST;
use rust_decimal::Decimal;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Base64 (or raw 32-char) HS256 signing key.
    pub secret_key: String,
    pub access_token_ttl: Duration,
    /// Used at registration when the account does not name its own cost.
    pub default_daily_cost: Decimal,
    pub groq_api_key: Option<String>,
    pub assistant_model: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("MB_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid MB_LISTEN_ADDR")?;
        let db_path = env_or("MB_DB_PATH", "./db/milkbook.db");
        let cors_allow = env_or("MB_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("MB_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .unwrap_or(30000);
        let secret_key =
            std::env::var("MB_SECRET_KEY").context("MB_SECRET_KEY must be set")?;
        let ttl_secs: u64 = env_or("MB_ACCESS_TOKEN_TTL_SECS", "3600")
            .parse()
            .context("Invalid MB_ACCESS_TOKEN_TTL_SECS")?;
        let default_daily_cost = match std::env::var("MB_DEFAULT_DAILY_COST") {
            Ok(raw) => Decimal::from_str(raw.trim()).context("Invalid MB_DEFAULT_DAILY_COST")?,
            Err(_) => DEFAULT_DAILY_COST,
        };
        if default_daily_cost.is_sign_negative() && !default_daily_cost.is_zero() {
            anyhow::bail!("MB_DEFAULT_DAILY_COST must not be negative");
        }
        let groq_api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let assistant_model = env_or("MB_ASSISTANT_MODEL", DEFAULT_MODEL);

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            secret_key,
            access_token_ttl: Duration::from_secs(ttl_secs),
            default_daily_cost,
            groq_api_key,
            assistant_model,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
