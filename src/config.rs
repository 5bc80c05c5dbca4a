use anyhow::{Context, Result, bail};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::contribution::MpfAccounting;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,
    pub log_dir: String,

    // Rate limiting
    pub rate_protected_per_min: u32,

    // Contribution memoization
    pub contribution_cache_capacity: u64,
    pub contribution_cache_ttl: Duration,

    /// Count the SSS MPF add-on twice in the scheme total, matching payslips
    /// issued by the previous calculator.
    pub sss_legacy_mpf: bool,
}

fn var_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let config = Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),

            rate_protected_per_min: var_or("RATE_PROTECTED_PER_MIN", 1000)?,

            contribution_cache_capacity: var_or("CONTRIBUTION_CACHE_CAPACITY", 10_000)?,
            contribution_cache_ttl: Duration::from_secs(var_or(
                "CONTRIBUTION_CACHE_TTL_SECS",
                3600,
            )?),

            sss_legacy_mpf: var_or("SSS_LEGACY_MPF", false)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.rate_protected_per_min == 0 || self.rate_protected_per_min > 60_000 {
            bail!(
                "RATE_PROTECTED_PER_MIN must be between 1 and 60000, got {}",
                self.rate_protected_per_min
            );
        }
        if !self.api_prefix.starts_with('/') {
            bail!("API_PREFIX must start with '/', got {:?}", self.api_prefix);
        }
        Ok(())
    }

    pub fn mpf_accounting(&self) -> MpfAccounting {
        if self.sss_legacy_mpf {
            MpfAccounting::Legacy
        } else {
            MpfAccounting::Corrected
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            api_prefix: "/api".to_string(),
            log_dir: "logs".to_string(),
            rate_protected_per_min: 1000,
            contribution_cache_capacity: 10_000,
            contribution_cache_ttl: Duration::from_secs(3600),
            sss_legacy_mpf: false,
        }
    }
}
