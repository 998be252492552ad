//! Session cache of raw tables
//!
//! Tables are exported from the source at most once per cache and kept by
//! name. Loading is best effort: a table that cannot be exported is logged and
//! left out of the cache.

use crate::source::TableSource;
use crate::table::Table;
use std::collections::HashMap;
use tracing::{error, info, warn};

/// Lazily filled map of table name to parsed table
#[derive(Debug)]
pub struct TableCache<S: TableSource> {
    source: S,
    tables: HashMap<String, Table>,
}

impl<S: TableSource> TableCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            tables: HashMap::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Names of the tables the source can export; empty when listing fails
    pub fn list_tables(&self) -> Vec<String> {
        match self.source.list_tables() {
            Ok(names) => names,
            Err(e) => {
                error!("Error getting tables: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Export and parse a table without touching the cache
    fn read_table(&self, name: &str) -> Option<Table> {
        let text = match self.source.export_table(name) {
            Ok(text) => text,
            Err(e) => {
                warn!("Error reading table {}: {:#}", name, e);
                return None;
            }
        };

        match Table::from_csv(name, &text) {
            Ok(table) => {
                info!("Loaded table {} ({} rows)", name, table.len());
                Some(table)
            }
            Err(e) => {
                warn!("Error processing table {}: {:#}", name, e);
                None
            }
        }
    }

    /// Eagerly load the named tables, skipping ones already cached
    pub fn load_tables<N: AsRef<str>>(&mut self, names: &[N]) {
        for name in names {
            let name = name.as_ref();
            if self.tables.contains_key(name) {
                continue;
            }
            match self.read_table(name) {
                Some(table) => {
                    self.tables.insert(name.to_string(), table);
                }
                None => warn!("Failed to load table {}", name),
            }
        }
    }

    /// Get a table, exporting it on first request
    pub fn get_table(&mut self, name: &str) -> Option<&Table> {
        if !self.tables.contains_key(name) {
            let table = self.read_table(name)?;
            self.tables.insert(name.to_string(), table);
        }
        self.tables.get(name)
    }

    /// Get a table only if it is already cached
    pub fn cached(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Names of the cached tables, sorted
    pub fn loaded_tables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Drop a cached table so the next request exports it again
    pub fn evict(&mut self, name: &str) -> bool {
        self.tables.remove(name).is_some()
    }
}
