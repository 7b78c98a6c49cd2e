use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_GEOCODER_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; blank values count as unset.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { optional(var).unwrap_or_else(|| default.to_string()) };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let google_maps_api_key = optional("GOOGLE_MAPS_API_KEY");
    let geocoder_url = or_default("FIND_STORE_GEOCODER_URL", DEFAULT_GEOCODER_URL);
    let request_timeout_secs = parse_u64("FIND_STORE_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FIND_STORE_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("FIND_STORE_USER_AGENT", "find-store/1.0");
    let data_path = optional("FIND_STORE_DATA_PATH").map(PathBuf::from);
    let log_level = or_default("FIND_STORE_LOG_LEVEL", "warn");

    Ok(AppConfig {
        google_maps_api_key,
        geocoder_url,
        request_timeout_secs,
        user_agent,
        data_path,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
