//! In-memory place store shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use halal_ingest::adapters::store::{PlaceStore, Rollback, WriteSession};
use halal_ingest::domain::{
    IngestError, PlaceUpdate, PriorPlace, Result, StoreError, TargetTable, ValidatedRow,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One stored place row
#[derive(Debug, Clone, Default)]
pub struct StoredPlace {
    pub id: String,
    pub name: Option<String>,
    pub halal_status: Option<String>,
    pub update: Option<PlaceUpdate>,
}

impl StoredPlace {
    pub fn new(id: &str, name: &str, halal_status: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: Some(name.to_string()),
            halal_status: halal_status.map(str::to_string),
            update: None,
        }
    }
}

/// Table contents, shared so tests can inspect them after the store is moved
pub type Table = Arc<Mutex<Vec<StoredPlace>>>;

/// Store backed by a vector of places
///
/// A transactional store stages updates until commit; a non-transactional
/// one writes immediately and cannot roll back.
pub struct MemoryStore {
    pub table: Table,
    pub transactional: bool,
    pub target: Option<TargetTable>,
    pub fail_on_id: Option<String>,
}

impl MemoryStore {
    pub fn new(places: Vec<StoredPlace>, transactional: bool) -> (Self, Table) {
        let table = Arc::new(Mutex::new(places));
        let store = Self {
            table: table.clone(),
            transactional,
            target: Some(TargetTable::Place),
            fail_on_id: None,
        };
        (store, table)
    }
}

#[async_trait]
impl PlaceStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        if self.transactional {
            "memory-tx"
        } else {
            "memory"
        }
    }

    async fn resolve_target_table(&mut self) -> Result<TargetTable> {
        self.target
            .ok_or_else(|| StoreError::TargetNotFound("memory".to_string()).into())
    }

    async fn begin<'a>(&'a mut self, _table: TargetTable) -> Result<Box<dyn WriteSession + 'a>> {
        Ok(Box::new(MemorySession {
            table: self.table.clone(),
            transactional: self.transactional,
            fail_on_id: self.fail_on_id.clone(),
            staged: HashMap::new(),
        }))
    }
}

struct MemorySession {
    table: Table,
    transactional: bool,
    fail_on_id: Option<String>,
    staged: HashMap<usize, PlaceUpdate>,
}

#[async_trait]
impl WriteSession for MemorySession {
    async fn update_by_id(&mut self, id: &str, update: &PlaceUpdate) -> Result<Vec<PriorPlace>> {
        if self.fail_on_id.as_deref() == Some(id) {
            return Err(IngestError::Store(StoreError::QueryFailed(format!(
                "forced failure for {id}"
            ))));
        }

        let mut table = self.table.lock().unwrap();
        let mut touched = Vec::new();
        for (idx, place) in table.iter_mut().enumerate() {
            if place.id != id {
                continue;
            }
            touched.push(PriorPlace {
                name: place.name.clone(),
                halal_status: place.halal_status.clone(),
            });
            if self.transactional {
                self.staged.insert(idx, update.clone());
            } else {
                place.update = Some(update.clone());
            }
        }
        Ok(touched)
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let MemorySession { table, staged, .. } = *self;
        let mut places = table.lock().unwrap();
        for (idx, update) in staged {
            places[idx].update = Some(update);
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<Rollback> {
        if self.transactional {
            Ok(Rollback::RolledBack)
        } else {
            Ok(Rollback::Unsupported)
        }
    }
}

pub fn validated(line: usize, id: &str, confidence: i32, reasoning: &str) -> ValidatedRow {
    ValidatedRow {
        source_line: line,
        id: id.to_string(),
        name: format!("Place {id}"),
        likelihood_raw: "LIKELY_HALAL".to_string(),
        type_raw: "FULLY_HALAL".to_string(),
        confidence,
        reasoning_raw: reasoning.to_string(),
    }
}

pub fn updated_ids(table: &Table) -> Vec<String> {
    table
        .lock()
        .unwrap()
        .iter()
        .filter(|place| place.update.is_some())
        .map(|place| place.id.clone())
        .collect()
}
