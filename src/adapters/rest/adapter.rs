//! REST adapter implementing the write traits
//!
//! PostgREST offers no transaction spanning several requests. Commit is a
//! no-op and rollback reports [`Rollback::Unsupported`]; writes made before a
//! failure stay applied.

use crate::adapters::rest::client::{RestClient, TableProbe};
use crate::adapters::store::{PlaceStore, Rollback, WriteSession};
use crate::domain::{PlaceUpdate, PriorPlace, Result, StoreError, TargetTable};
use async_trait::async_trait;

/// Supabase REST implementation of [`PlaceStore`]
pub struct RestStore {
    client: RestClient,
}

impl RestStore {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlaceStore for RestStore {
    fn backend_name(&self) -> &'static str {
        "rest"
    }

    async fn resolve_target_table(&mut self) -> Result<TargetTable> {
        for table in TargetTable::CANDIDATES {
            if self.client.probe_table(table.as_str()).await? == TableProbe::Found {
                tracing::info!(table = %table, base_url = %self.client.base_url(), "Resolved target table");
                return Ok(table);
            }
        }

        Err(StoreError::TargetNotFound(format!(
            "no candidate table exposed at {}",
            self.client.base_url()
        ))
        .into())
    }

    async fn begin<'a>(&'a mut self, table: TargetTable) -> Result<Box<dyn WriteSession + 'a>> {
        Ok(Box::new(RestSession {
            client: &self.client,
            table,
            requests: 0,
        }))
    }
}

/// Sequence of independent PATCH requests
pub struct RestSession<'a> {
    client: &'a RestClient,
    table: TargetTable,
    requests: usize,
}

#[async_trait]
impl<'a> WriteSession for RestSession<'a> {
    async fn update_by_id(&mut self, id: &str, update: &PlaceUpdate) -> Result<Vec<PriorPlace>> {
        self.requests += 1;
        self.client
            .patch_place(self.table.as_str(), id, update)
            .await
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        tracing::info!(requests = self.requests, "REST updates complete");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<Rollback> {
        tracing::warn!(
            requests = self.requests,
            "REST backend cannot roll back; updates already sent remain applied"
        );
        Ok(Rollback::Unsupported)
    }
}
