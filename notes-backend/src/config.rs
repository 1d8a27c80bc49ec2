use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const DB_POOL_SIZE: &str = "DB_POOL_SIZE";
    /// Per-request deadline for note operations. 0 disables it.
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Set to "false" or "0" to skip creating the notes table on boot.
    /// Default: true.
    pub const AUTO_MIGRATE: &str = "AUTO_MIGRATE";
    /// Allowed CORS origin. Unset means any origin.
    pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3000;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
    pub const DATABASE_URL: &str = "./.db/notes.db";
    pub const DB_POOL_SIZE: u32 = 8;
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub database_url: String,
    pub db_pool_size: u32,
    pub request_timeout: Option<Duration>,
    pub auto_migrate: bool,
    pub cors_allowed_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: defaults::PORT,
            bind_address: defaults::BIND_ADDRESS.to_string(),
            database_url: defaults::DATABASE_URL.to_string(),
            db_pool_size: defaults::DB_POOL_SIZE,
            request_timeout: Some(Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS)),
            auto_migrate: true,
            cors_allowed_origin: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = parse_or_default(
            &lookup,
            env_vars::REQUEST_TIMEOUT_SECS,
            defaults::REQUEST_TIMEOUT_SECS,
        );

        Self {
            port: parse_or_default(&lookup, env_vars::PORT, defaults::PORT),
            bind_address: lookup(env_vars::BIND_ADDRESS)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| defaults::BIND_ADDRESS.to_string()),
            database_url: lookup(env_vars::DATABASE_URL)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| defaults::DATABASE_URL.to_string()),
            db_pool_size: parse_or_default(&lookup, env_vars::DB_POOL_SIZE, defaults::DB_POOL_SIZE),
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            auto_migrate: lookup(env_vars::AUTO_MIGRATE)
                .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0"))
                .unwrap_or(true),
            cors_allowed_origin: lookup(env_vars::CORS_ALLOWED_ORIGIN)
                .filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Parse a numeric setting, warning and falling back to the default if invalid
fn parse_or_default<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} value {:?}, using default {}", key, raw, default);
            default
        }),
        None => default,
    }
}
