//! Application configuration from environment variables.

use crate::error::ConfigError;

/// Runtime knobs for the fetch stage. Every field has a default, so a bare
/// environment runs with the original behavior (no inter-request delay).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub inter_request_delay_ms: u64,
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable has an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files, which is
/// useful for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable has an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function, so the
/// parsing logic can be tested against a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    Ok(AppConfig {
        request_timeout_secs: parse_u64("VIDTRENDS_REQUEST_TIMEOUT_SECS", "30")?,
        max_retries: parse_u32("VIDTRENDS_MAX_RETRIES", "3")?,
        retry_backoff_base_ms: parse_u64("VIDTRENDS_RETRY_BACKOFF_BASE_MS", "1000")?,
        inter_request_delay_ms: parse_u64("VIDTRENDS_INTER_REQUEST_DELAY_MS", "0")?,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(std::env::VarError::NotPresent)
        }
    }

    #[test]
    fn defaults_apply_with_empty_environment() {
        let env = HashMap::new();
        let config = build_app_config(lookup_from(&env)).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_backoff_base_ms, 1000);
        assert_eq!(config.inter_request_delay_ms, 0);
    }

    #[test]
    fn set_variables_override_defaults() {
        let env = HashMap::from([
            ("VIDTRENDS_MAX_RETRIES", "0"),
            ("VIDTRENDS_INTER_REQUEST_DELAY_MS", "250"),
        ]);
        let config = build_app_config(lookup_from(&env)).unwrap();
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.inter_request_delay_ms, 250);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn unparseable_value_is_an_error() {
        let env = HashMap::from([("VIDTRENDS_MAX_RETRIES", "many")]);
        let err = build_app_config(lookup_from(&env)).unwrap_err();
        assert!(err.to_string().contains("VIDTRENDS_MAX_RETRIES"));
    }
}
