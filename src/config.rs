use std::str::FromStr;

const LOG_FILTER_VAR: &str = "STOCK_API_LOG";

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Interface to bind (e.g., "127.0.0.1" or "0.0.0.0")
    pub host: String,

    /// TCP port to listen on
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,

    /// Default tracing filter, used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `STOCK_API_HOST` | `127.0.0.1` |
    /// | `STOCK_API_PORT` | `3000` |
    /// | `STOCK_API_MAX_BODY_BYTES` | `16384` |
    /// | `STOCK_API_LOG` | `stock_update_api=debug` |
    ///
    /// Unparsable values fall back to their default with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Tracing filter alone, so logging can start before the rest of the
    /// configuration is read
    pub fn log_filter_from_env() -> String {
        log_filter_from(&env_lookup)
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("STOCK_API_HOST").unwrap_or_else(default_host),
            port: parse_var(&lookup, "STOCK_API_PORT").unwrap_or_else(default_port),
            max_body_bytes: parse_var(&lookup, "STOCK_API_MAX_BODY_BYTES")
                .unwrap_or_else(default_max_body_bytes),
            log_filter: log_filter_from(&lookup),
        }
    }

    /// Address string passed to the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn log_filter_from<F>(lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(LOG_FILTER_VAR).unwrap_or_else(default_log_filter)
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("⚠️  Ignoring invalid {}={:?}, using default", key, raw);
            None
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_body_bytes() -> usize {
    16 * 1024
}

fn default_log_filter() -> String {
    "stock_update_api=debug".to_string()
}
