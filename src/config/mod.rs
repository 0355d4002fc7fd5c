//! Configuration management for halal-ingest.
//!
//! Configuration comes from three places, later ones winning:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file (`halal-ingest.toml`, or the file named by
//!    `--config` / `HALAL_INGEST_CONFIG`), with `${VAR_NAME}` substitution
//! 3. `HALAL_INGEST_*` environment overrides
//!
//! Backend credentials are resolved separately by [`resolve_store_settings`],
//! where command-line flags take precedence over the environment and the file.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [paths]
//! data_dir = "data"
//! reports_dir = "reports"
//!
//! [postgresql]
//! connection_string = "${DATABASE_URL}"
//! statement_timeout_seconds = 60
//!
//! [rest]
//! base_url = "https://abc.supabase.co"
//! api_key = "${SUPABASE_SERVICE_ROLE_KEY}"
//!
//! [apply]
//! fail_on_missing = false
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod credentials;
pub mod loader;
pub mod schema;
pub mod secret;

pub use credentials::{
    resolve_store_settings, resolve_store_settings_with, CredentialArgs, PostgresSettings,
    RestSettings, StoreSettings,
};
pub use loader::{load_config, resolve_config};
pub use schema::{
    ApplicationConfig, ApplyConfig, IngestConfig, LoggingConfig, PathsConfig, PostgreSQLConfig,
    RestConfig, MAX_STATEMENT_TIMEOUT_SECONDS,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
