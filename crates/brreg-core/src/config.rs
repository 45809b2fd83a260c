use std::path::PathBuf;

use crate::app_config::{AppConfig, Features, PresentationMode};
use crate::ConfigError;

/// Page size used when the host passes nothing usable.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size the registry is asked for.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Clamp a host-provided page size into `1..=MAX_PAGE_SIZE`.
///
/// Non-positive values fall back to [`DEFAULT_PAGE_SIZE`] rather than `1`,
/// matching what the host does when the property is left blank.
#[must_use]
pub fn clamp_page_size(raw: i64) -> u32 {
    if raw <= 0 {
        return DEFAULT_PAGE_SIZE;
    }
    u32::try_from(raw.min(i64::from(MAX_PAGE_SIZE))).unwrap_or(MAX_PAGE_SIZE)
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can use a plain
/// `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => parse_bool_value(&raw).ok_or_else(|| {
                invalid(var, format!("expected true/false/1/0/yes/no, got '{raw}'"))
            }),
        }
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let mode = or_default("BRREG_MODE", "button")
        .parse::<PresentationMode>()
        .map_err(|reason| invalid("BRREG_MODE", reason))?;

    let page_size = {
        let raw = or_default("BRREG_PAGE_SIZE", "10");
        let parsed = raw
            .trim()
            .parse::<i64>()
            .map_err(|e| invalid("BRREG_PAGE_SIZE", e.to_string()))?;
        clamp_page_size(parsed)
    };

    let features = Features {
        show_title: parse_bool("BRREG_SHOW_TITLE", true)?,
        view_json: parse_bool("BRREG_SHOW_VIEW_JSON", true)?,
        view_map: parse_bool("BRREG_SHOW_VIEW_MAP", true)?,
        export_excel: parse_bool("BRREG_SHOW_EXPORT_EXCEL", true)?,
        advanced_search: parse_bool("BRREG_ENABLE_ADVANCED_SEARCH", true)?,
        disabled: parse_bool("BRREG_DISABLED", false)?,
    };

    let country = or_default("BRREG_COUNTRY", "Norway");
    let registry_base_url = or_default(
        "BRREG_REGISTRY_BASE_URL",
        "https://data.brreg.no/enhetsregisteret/api/",
    );
    let geocoder_base_url = or_default(
        "BRREG_GEOCODER_BASE_URL",
        "https://nominatim.openstreetmap.org/",
    );
    let tile_url = or_default(
        "BRREG_TILE_URL",
        "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
    );
    let request_timeout_secs = parse_u64("BRREG_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("BRREG_USER_AGENT", "brreg-search/0.1 (company-lookup)");
    let export_dir = PathBuf::from(or_default("BRREG_EXPORT_DIR", "."));
    let log_level = or_default("BRREG_LOG_LEVEL", "warn");

    Ok(AppConfig {
        mode,
        page_size,
        features,
        country,
        registry_base_url,
        geocoder_base_url,
        tile_url,
        request_timeout_secs,
        user_agent,
        export_dir,
        log_level,
    })
}

fn parse_bool_value(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
