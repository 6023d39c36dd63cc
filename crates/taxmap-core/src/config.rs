use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_GEOCODER_BASE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";
pub const DEFAULT_SALESTAX_BASE_URL: &str = "https://api.api-ninjas.com/v1/salestax";

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
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
///
/// # Errors
///
/// Returns `ConfigError` if required vars are missing or values are invalid.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Both keys are validated here, before any client exists: a missing
    // credential can never reach the network.
    let geocoder_api_key = require("TAXMAP_GEOCODER_API_KEY")?;
    let salestax_api_key = require("TAXMAP_SALESTAX_API_KEY")?;

    let geocoder_base_url = or_default("TAXMAP_GEOCODER_BASE_URL", DEFAULT_GEOCODER_BASE_URL);
    let salestax_base_url = or_default("TAXMAP_SALESTAX_BASE_URL", DEFAULT_SALESTAX_BASE_URL);
    let request_timeout_secs = parse_u64("TAXMAP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TAXMAP_USER_AGENT", "taxmap/0.1 (sales-tax-lookup)");
    let log_level = or_default("TAXMAP_LOG_LEVEL", "info");

    Ok(AppConfig {
        geocoder_api_key,
        salestax_api_key,
        geocoder_base_url,
        salestax_base_url,
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

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("TAXMAP_GEOCODER_API_KEY", "geo-key");
        m.insert("TAXMAP_SALESTAX_API_KEY", "tax-key");
        m
    }

    #[test]
    fn build_app_config_fails_without_geocoder_key() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TAXMAP_SALESTAX_API_KEY", "tax-key");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TAXMAP_GEOCODER_API_KEY"),
            "expected MissingEnvVar(TAXMAP_GEOCODER_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_without_salestax_key() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TAXMAP_GEOCODER_API_KEY", "geo-key");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TAXMAP_SALESTAX_API_KEY"),
            "expected MissingEnvVar(TAXMAP_SALESTAX_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_all_required_vars() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.geocoder_api_key, "geo-key");
        assert_eq!(cfg.salestax_api_key, "tax-key");
        assert_eq!(cfg.geocoder_base_url, DEFAULT_GEOCODER_BASE_URL);
        assert_eq!(cfg.salestax_base_url, DEFAULT_SALESTAX_BASE_URL);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "taxmap/0.1 (sales-tax-lookup)");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn base_url_overrides_are_honoured() {
        let mut map = full_env();
        map.insert("TAXMAP_GEOCODER_BASE_URL", "http://127.0.0.1:9001");
        map.insert("TAXMAP_SALESTAX_BASE_URL", "http://127.0.0.1:9002");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.geocoder_base_url, "http://127.0.0.1:9001");
        assert_eq!(cfg.salestax_base_url, "http://127.0.0.1:9002");
    }

    #[test]
    fn request_timeout_override() {
        let mut map = full_env();
        map.insert("TAXMAP_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn request_timeout_invalid() {
        let mut map = full_env();
        map.insert("TAXMAP_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TAXMAP_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(TAXMAP_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_api_keys() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("geo-key"), "geocoder key leaked: {rendered}");
        assert!(!rendered.contains("tax-key"), "salestax key leaked: {rendered}");
    }
}
