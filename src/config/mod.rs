// src/config/mod.rs
// All values load from the environment (or .env) with sensible defaults.

use std::str::FromStr;

/// Immutable runtime configuration, built once at startup and passed in to
/// whatever needs it. The API key is optional so the relay can boot without
/// one; chat turns then fail with a generic error until it is set.
#[derive(Debug, Clone)]
pub struct ElaraConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── Upstream gateway
    pub gateway_url: String,
    pub api_key: Option<String>,
    pub model: String,

    // ── Timeouts (in seconds)
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,

    // ── Logging
    pub log_level: String,
}

impl Default for ElaraConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8787,
            gateway_url: "https://openrouter.ai/api/v1".to_string(),
            api_key: None,
            model: "google/gemini-2.5-flash".to_string(),
            connect_timeout_secs: 10,
            read_timeout_secs: 60,
            log_level: "info".to_string(),
        }
    }
}

impl ElaraConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        if dotenvy::dotenv().is_err() {
            eprintln!("Config: no .env file found, using environment variables and defaults");
        }

        let defaults = Self::default();
        Self {
            host: env_var_or("ELARA_HOST", defaults.host),
            port: env_var_or("ELARA_PORT", defaults.port),
            gateway_url: env_var_or("ELARA_GATEWAY_URL", defaults.gateway_url),
            api_key: env_var("ELARA_API_KEY"),
            model: env_var_or("ELARA_MODEL", defaults.model),
            connect_timeout_secs: env_var_or("ELARA_CONNECT_TIMEOUT_SECS", defaults.connect_timeout_secs),
            read_timeout_secs: env_var_or("ELARA_READ_TIMEOUT_SECS", defaults.read_timeout_secs),
            log_level: env_var_or("ELARA_LOG", defaults.log_level),
        }
    }

    /// Server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read a secret-ish variable verbatim. Only trims whitespace; an unset or
/// empty value becomes `None`.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Read a variable and parse it, tolerating trailing `# comments` and extra
/// whitespace the way values often look when copied out of a .env file.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(raw) => match parse_env_value(&raw) {
            Some(parsed) => parsed,
            None => {
                eprintln!("Config: {key} = '{raw}' (parse failed, using default)");
                default
            }
        },
        // Not an error, just a missing variable.
        Err(_) => default,
    }
}

fn parse_env_value<T>(raw: &str) -> Option<T>
where
    T: FromStr,
{
    raw.split('#').next().unwrap_or("").trim().parse::<T>().ok()
}
