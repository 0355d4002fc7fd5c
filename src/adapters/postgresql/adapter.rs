//! PostgreSQL adapter implementing the write traits
//!
//! A write session is one transaction on the store's connection. Dropping a
//! session without committing rolls it back.

use crate::adapters::postgresql::client::PostgresClient;
use crate::adapters::postgresql::models::{
    preferred_table, prior_from_row, update_statement, TABLE_PROBE_SQL,
};
use crate::adapters::store::{PlaceStore, Rollback, WriteSession};
use crate::domain::{IngestError, PlaceUpdate, PriorPlace, Result, StoreError, TargetTable};
use async_trait::async_trait;
use deadpool_postgres::{Object, Transaction};
use tokio_postgres::error::SqlState;

/// PostgreSQL implementation of [`PlaceStore`]
pub struct PostgresStore {
    client: PostgresClient,

    /// Connection held for the lifetime of the store
    conn: Option<Object>,
}

impl PostgresStore {
    /// Create a new PostgreSQL store
    pub fn new(client: PostgresClient) -> Self {
        Self { client, conn: None }
    }

    async fn connection(&mut self) -> Result<&mut Object> {
        if self.conn.is_none() {
            let conn = self.client.get_connection().await?;
            self.conn = Some(conn);
        }
        self.conn.as_mut().ok_or_else(|| {
            StoreError::ConnectionFailed("No connection available".to_string()).into()
        })
    }
}

#[async_trait]
impl PlaceStore for PostgresStore {
    fn backend_name(&self) -> &'static str {
        "postgresql"
    }

    async fn resolve_target_table(&mut self) -> Result<TargetTable> {
        let candidates: Vec<&str> = TargetTable::CANDIDATES
            .iter()
            .map(TargetTable::as_str)
            .collect();

        let conn = self.connection().await?;
        let rows = conn
            .query(TABLE_PROBE_SQL, &[&candidates])
            .await
            .map_err(|e| probe_error(&e))?;

        let found: Vec<String> = rows
            .iter()
            .map(|row| row.try_get::<_, String>("table_name"))
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| StoreError::InvalidResponse(format!("Unreadable table probe: {}", e)))?;

        let table = preferred_table(&found).ok_or_else(|| {
            StoreError::TargetNotFound("information_schema has neither table".to_string())
        })?;

        tracing::info!(table = %table, "Resolved target table");
        Ok(table)
    }

    async fn begin<'a>(&'a mut self, table: TargetTable) -> Result<Box<dyn WriteSession + 'a>> {
        let timeout_ms = self.client.statement_timeout_ms();
        let conn = self.connection().await?;

        let transaction = conn.transaction().await.map_err(|e| {
            StoreError::TransactionFailed(format!("Failed to begin transaction: {}", e))
        })?;

        transaction
            .batch_execute(&format!("SET LOCAL statement_timeout = {timeout_ms}"))
            .await
            .map_err(|e| {
                StoreError::QueryFailed(format!("Failed to set statement timeout: {}", e))
            })?;

        tracing::debug!(table = %table, timeout_ms, "Transaction started");
        Ok(Box::new(PostgresSession {
            transaction,
            update_sql: update_statement(table),
        }))
    }
}

/// One open transaction
pub struct PostgresSession<'a> {
    transaction: Transaction<'a>,
    update_sql: String,
}

#[async_trait]
impl<'a> WriteSession for PostgresSession<'a> {
    async fn update_by_id(&mut self, id: &str, update: &PlaceUpdate) -> Result<Vec<PriorPlace>> {
        let status = update.cc_halal_status.as_str();
        let rows = self
            .transaction
            .query(
                &self.update_sql,
                &[
                    &status,
                    &update.cc_halal_likelihood,
                    &update.cc_halal_type,
                    &update.cc_halal_confidence,
                    &update.cc_note,
                    &update.cc_reasoning_raw,
                    &update.cc_is_zabiha,
                    &update.cc_certifier_org,
                    &id,
                ],
            )
            .await
            .map_err(|e| StoreError::QueryFailed(format!("Update of id {} failed: {}", id, e)))?;

        rows.iter().map(prior_from_row).collect()
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let PostgresSession { transaction, .. } = *self;
        transaction
            .commit()
            .await
            .map_err(|e| StoreError::TransactionFailed(format!("Commit failed: {}", e)))?;

        tracing::info!("Transaction committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<Rollback> {
        let PostgresSession { transaction, .. } = *self;
        transaction
            .rollback()
            .await
            .map_err(|e| StoreError::TransactionFailed(format!("Rollback failed: {}", e)))?;

        tracing::warn!("Transaction rolled back");
        Ok(Rollback::RolledBack)
    }
}

fn probe_error(err: &tokio_postgres::Error) -> IngestError {
    if err.code() == Some(&SqlState::INSUFFICIENT_PRIVILEGE) {
        StoreError::Unauthorized(format!("Table probe rejected: {}", err)).into()
    } else {
        StoreError::QueryFailed(format!("Table probe failed: {}", err)).into()
    }
}
