use super::RecordStore;
use super::filter::Predicate;
use super::record::Record;

use anyhow::Result;
use dashmap::DashMap;
use std::sync::Arc;

type Table = DashMap<String, Record>;

/// In-memory wide-column store.
///
/// Tables are independent `DashMap`s so readers on different tables (or rows)
/// never contend on a single lock. Row iteration follows the map's shard
/// layout, which is the "store-native" scan order: stable for an unchanged
/// table, but unrelated to key order or insertion order.
pub struct MemoryStore {
    tables: DashMap<String, Arc<Table>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            tables: DashMap::new(),
        })
    }

    /// Creates `name` if it does not exist yet. Existing rows are kept.
    pub fn create_table(&self, name: &str) {
        self.tables
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(DashMap::new()));
    }

    pub fn put(&self, table: &str, record: Record) -> Result<()> {
        let handle = self.table(table)?;
        handle.insert(record.key().to_string(), record);
        Ok(())
    }

    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    pub fn row_count(&self, table: &str) -> Option<usize> {
        self.tables.get(table).map(|handle| handle.len())
    }

    /// Acquires a handle on `name` for the duration of one operation.
    ///
    /// The handle is an `Arc` clone, released when the caller's scope ends on
    /// every exit path. A missing table is a store failure.
    fn table(&self, name: &str) -> Result<Arc<Table>> {
        self.tables
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| anyhow::anyhow!("Table not found: {}", name))
    }
}

impl RecordStore for MemoryStore {
    fn scan(&self, table: &str, predicate: &Predicate, limit: usize) -> Result<Vec<Record>> {
        let handle = self.table(table)?;
        let mut matches = Vec::new();
        let mut scanned = 0usize;

        if limit == 0 {
            return Ok(matches);
        }

        for entry in handle.iter() {
            scanned += 1;
            if predicate.matches(entry.value()) {
                matches.push(entry.value().clone());
                if matches.len() >= limit {
                    break;
                }
            }
        }

        tracing::debug!(
            "SCAN {}: {} rows scanned, {} matched (limit {})",
            table,
            scanned,
            matches.len(),
            limit
        );

        Ok(matches)
    }

    fn get(&self, table: &str, key: &str) -> Result<Option<Record>> {
        let handle = self.table(table)?;
        Ok(handle.get(key).map(|entry| entry.value().clone()))
    }
}
