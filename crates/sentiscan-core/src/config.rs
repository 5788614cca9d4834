use crate::app_config::{AppConfig, Environment};
use crate::policy::{AnalysisVariant, ThresholdPolicy};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
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
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str| -> Result<Option<bool>, ConfigError> {
        match lookup(var) {
            Ok(raw) => parse_flag(&raw)
                .map(Some)
                .ok_or_else(|| invalid(var, format!("expected a boolean, got '{raw}'"))),
            Err(_) => Ok(None),
        }
    };

    let env = parse_environment(&or_default("SENTISCAN_ENV", "development"))?;

    let bind_addr = or_default("SENTISCAN_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("SENTISCAN_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("SENTISCAN_LOG_LEVEL", "info");

    let variant = or_default("SENTISCAN_VARIANT", "conservative")
        .parse::<AnalysisVariant>()
        .map_err(|e| invalid("SENTISCAN_VARIANT", e))?;

    let mut analysis = variant.config();
    if let Ok(raw) = lookup("SENTISCAN_THRESHOLD_POLICY") {
        analysis.policy = raw
            .parse::<ThresholdPolicy>()
            .map_err(|e| invalid("SENTISCAN_THRESHOLD_POLICY", e))?;
    }
    if let Some(remove) = parse_bool("SENTISCAN_REMOVE_STOPWORDS")? {
        analysis.clean.stopwords = remove;
    }
    if let Some(include) = parse_bool("SENTISCAN_INCLUDE_SUBJECTIVITY")? {
        analysis.include_subjectivity = include;
    }

    let text_column = or_default("SENTISCAN_TEXT_COLUMN", "text");
    if text_column.trim().is_empty() {
        return Err(invalid(
            "SENTISCAN_TEXT_COLUMN",
            "column name must not be empty".to_string(),
        ));
    }

    let preview_rows = parse_usize("SENTISCAN_PREVIEW_ROWS", "100")?;
    let max_upload_bytes = parse_usize("SENTISCAN_MAX_UPLOAD_BYTES", "10485760")?;
    if max_upload_bytes == 0 {
        return Err(invalid(
            "SENTISCAN_MAX_UPLOAD_BYTES",
            "must be greater than zero".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        variant,
        analysis,
        text_column,
        preview_rows,
        max_upload_bytes,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SENTISCAN_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
