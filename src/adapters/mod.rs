//! External system integrations for halal-ingest.
//!
//! This module provides adapters for everything outside the process:
//!
//! - [`loader`] - CSV and Excel input files
//! - [`store`] - Write backend abstraction (trait-based) and factory
//! - [`postgresql`] - Direct PostgreSQL backend (transactional)
//! - [`rest`] - Supabase REST backend (per-request, no rollback)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with in-memory implementations. The apply engine only sees
//! [`store::PlaceStore`]:
//!
//! ```rust,no_run
//! use halal_ingest::adapters::store::create_place_store;
//! use halal_ingest::config::{secret_string, RestSettings, StoreSettings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = StoreSettings::Rest(RestSettings {
//!     base_url: "https://abc.supabase.co".to_string(),
//!     api_key: secret_string("service-role-key".to_string()),
//!     timeout_seconds: 30,
//! });
//!
//! let mut store = create_place_store(&settings).await?;
//! let table = store.resolve_target_table().await?;
//! println!("Writing to {table}");
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod postgresql;
pub mod rest;
pub mod store;
