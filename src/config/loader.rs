//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{validate_log_level, IngestConfig};
use crate::domain::errors::IngestError;
use crate::domain::result::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "halal-ingest.toml";

static ENV_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into IngestConfig
/// 4. Applies environment variable overrides (HALAL_INGEST_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, a referenced
/// environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use halal_ingest::config::loader::load_config;
///
/// let config = load_config("halal-ingest.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<IngestConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(IngestError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        IngestError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: IngestConfig = toml::from_str(&contents)
        .map_err(|e| IngestError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    tracing::debug!(path = %path.display(), "Configuration file loaded");
    finish(config)
}

/// Resolves the configuration for a run
///
/// An explicitly named file must exist. Without one, `halal-ingest.toml` in
/// the working directory is used when present, otherwise the built-in
/// defaults.
///
/// # Errors
///
/// See [`load_config`].
pub fn resolve_config(explicit: Option<&Path>) -> Result<IngestConfig> {
    match explicit {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => load_config(DEFAULT_CONFIG_FILE),
        None => finish(IngestConfig::default()),
    }
}

fn finish(mut config: IngestConfig) -> Result<IngestConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        IngestError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
pub fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in ENV_PLACEHOLDER.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(IngestError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the HALAL_INGEST_* prefix
fn apply_env_overrides(config: &mut IngestConfig) -> Result<()> {
    if let Ok(val) = std::env::var("HALAL_INGEST_LOG_LEVEL") {
        let val = val.trim().to_lowercase();
        validate_log_level(&val).map_err(IngestError::Configuration)?;
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("HALAL_INGEST_DATA_DIR") {
        config.paths.data_dir = val;
    }
    if let Ok(val) = std::env::var("HALAL_INGEST_REPORTS_DIR") {
        config.paths.reports_dir = val;
    }

    if let Ok(val) = std::env::var("HALAL_INGEST_FAIL_ON_MISSING") {
        config.apply.fail_on_missing = parse_flag(&val).ok_or_else(|| {
            IngestError::Configuration(format!(
                "HALAL_INGEST_FAIL_ON_MISSING must be true or false, got '{val}'"
            ))
        })?;
    }

    Ok(())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
