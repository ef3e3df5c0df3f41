use crate::app_config::AppConfig;
use crate::ConfigError;

/// Base URL of the US Census one-line-address geocoder. Free to use and
/// requires no API key.
const CENSUS_GEOCODER_URL: &str = "https://geocoding.geo.census.gov/geocoder/locations/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_url = require("JOBREACH_API_URL")?;
    let geocoder_url = or_default("JOBREACH_GEOCODER_URL", CENSUS_GEOCODER_URL);
    let page_size = parse_u32("JOBREACH_PAGE_SIZE", "10")?;
    let request_timeout_secs = parse_u64("JOBREACH_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("JOBREACH_USER_AGENT", "jobreach/0.1 (job-search)");
    let log_level = or_default("JOBREACH_LOG_LEVEL", "info");

    Ok(AppConfig {
        api_url,
        geocoder_url,
        page_size,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("JOBREACH_API_URL", "https://jobs.example.org/services/jobs");
        m
    }

    #[test]
    fn build_app_config_fails_without_api_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "JOBREACH_API_URL"),
            "expected MissingEnvVar(JOBREACH_API_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.api_url, "https://jobs.example.org/services/jobs");
        assert_eq!(cfg.geocoder_url, CENSUS_GEOCODER_URL);
        assert_eq!(cfg.page_size, 10);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "jobreach/0.1 (job-search)");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn page_size_override() {
        let mut map = full_env();
        map.insert("JOBREACH_PAGE_SIZE", "25");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.page_size, 25);
    }

    #[test]
    fn page_size_invalid() {
        let mut map = full_env();
        map.insert("JOBREACH_PAGE_SIZE", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBREACH_PAGE_SIZE"),
            "expected InvalidEnvVar(JOBREACH_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn request_timeout_override() {
        let mut map = full_env();
        map.insert("JOBREACH_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn request_timeout_invalid() {
        let mut map = full_env();
        map.insert("JOBREACH_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBREACH_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(JOBREACH_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn geocoder_url_override() {
        let mut map = full_env();
        map.insert("JOBREACH_GEOCODER_URL", "http://localhost:9001/geocoder/");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.geocoder_url, "http://localhost:9001/geocoder/");
    }

    #[test]
    fn user_agent_override() {
        let mut map = full_env();
        map.insert("JOBREACH_USER_AGENT", "custom-agent/2.0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
    }
}
