//! Write backend selection and credential resolution
//!
//! Each credential is taken from the first source that has it: command line,
//! then environment, then the config file. Blank values count as absent.

use super::schema::IngestConfig;
use super::secret::{secret_string, secret_string_opt, SecretString};
use crate::domain::{IngestError, Result};
use secrecy::ExposeSecret;

/// Environment variables checked for the database URL, in order
pub const DATABASE_URL_VARS: [&str; 3] = ["DATABASE_URL", "SUPABASE_DB_URL", "SUPABASE_DATABASE_URL"];

pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SUPABASE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Credentials given on the command line
#[derive(Debug, Clone, Default)]
pub struct CredentialArgs {
    pub db_url: Option<String>,
    pub use_rest: bool,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
}

/// Settings for the direct database backend
#[derive(Debug, Clone)]
pub struct PostgresSettings {
    pub connection_string: SecretString,
    pub connection_timeout_seconds: u64,
    pub statement_timeout_seconds: u64,
    pub ssl_mode: Option<String>,
}

/// Settings for the Supabase REST backend
#[derive(Debug, Clone)]
pub struct RestSettings {
    /// Project URL without a trailing slash
    pub base_url: String,
    pub api_key: SecretString,
    pub timeout_seconds: u64,
}

/// Which backend to write through, with its credentials
#[derive(Debug, Clone)]
pub enum StoreSettings {
    PostgreSQL(PostgresSettings),
    Rest(RestSettings),
}

/// Resolve store settings from the process environment
///
/// # Errors
///
/// Returns a configuration error when a required credential is missing.
pub fn resolve_store_settings(args: &CredentialArgs, config: &IngestConfig) -> Result<StoreSettings> {
    resolve_store_settings_with(args, config, |name| std::env::var(name).ok())
}

/// Resolve store settings with a custom environment lookup
pub fn resolve_store_settings_with<F>(
    args: &CredentialArgs,
    config: &IngestConfig,
    env: F,
) -> Result<StoreSettings>
where
    F: Fn(&str) -> Option<String>,
{
    if args.use_rest {
        let base_url = present(args.supabase_url.clone())
            .or_else(|| present(env(SUPABASE_URL_VAR)))
            .or_else(|| present(config.rest.base_url.clone()))
            .ok_or_else(|| {
                IngestError::Configuration(format!(
                    "Supabase URL missing: pass --supabase-url or set {SUPABASE_URL_VAR}"
                ))
            })?;

        let api_key = secret_string_opt(present(args.supabase_key.clone()))
            .or_else(|| secret_string_opt(present(env(SUPABASE_KEY_VAR))))
            .or_else(|| {
                config
                    .rest
                    .api_key
                    .clone()
                    .filter(|key| !key.expose_secret().is_empty())
            })
            .ok_or_else(|| {
                IngestError::Configuration(format!(
                    "Supabase key missing: pass --supabase-key or set {SUPABASE_KEY_VAR}"
                ))
            })?;

        return Ok(StoreSettings::Rest(RestSettings {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout_seconds: config.rest.timeout_seconds,
        }));
    }

    let connection_string = present(args.db_url.clone())
        .or_else(|| DATABASE_URL_VARS.iter().find_map(|var| present(env(var))))
        .map(secret_string)
        .or_else(|| {
            config
                .postgresql
                .connection_string
                .clone()
                .filter(|conn| !conn.expose_secret().is_empty())
        })
        .ok_or_else(|| {
            IngestError::Configuration(format!(
                "Database URL missing: pass --db-url, set one of {}, or use --use-rest",
                DATABASE_URL_VARS.join(", ")
            ))
        })?;

    Ok(StoreSettings::PostgreSQL(PostgresSettings {
        connection_string,
        connection_timeout_seconds: config.postgresql.connection_timeout_seconds,
        statement_timeout_seconds: config.postgresql.statement_timeout_seconds,
        ssl_mode: config.postgresql.ssl_mode.clone(),
    }))
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
