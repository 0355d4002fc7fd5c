//! Place store factory
//!
//! Builds the write backend named by the resolved [`StoreSettings`]. This is
//! the only place that knows which backend is in use.

use crate::adapters::postgresql::{PostgresClient, PostgresStore};
use crate::adapters::rest::{RestClient, RestStore};
use crate::adapters::store::PlaceStore;
use crate::config::StoreSettings;
use crate::domain::Result;

/// Create a place store based on the resolved settings
///
/// The PostgreSQL backend connects immediately so bad credentials fail
/// before any input is processed.
///
/// # Errors
///
/// Returns an error if the client cannot be created or the connection fails
pub async fn create_place_store(settings: &StoreSettings) -> Result<Box<dyn PlaceStore>> {
    match settings {
        StoreSettings::PostgreSQL(pg) => {
            tracing::info!("Creating PostgreSQL store");
            let client = PostgresClient::new(pg.clone())?;
            client.test_connection().await?;
            Ok(Box::new(PostgresStore::new(client)))
        }
        StoreSettings::Rest(rest) => {
            tracing::info!(base_url = %rest.base_url, "Creating REST store");
            let client = RestClient::new(rest.clone())?;
            Ok(Box::new(RestStore::new(client)))
        }
    }
}
