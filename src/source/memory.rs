//! In-memory table source for tests and pre-exported CSV dumps

use crate::error::LoaderError;
use crate::source::TableSource;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Table source backed by CSV strings held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    tables: BTreeMap<String, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a table
    pub fn with_table(mut self, name: &str, csv: &str) -> Self {
        self.insert(name, csv);
        self
    }

    pub fn insert(&mut self, name: &str, csv: &str) {
        self.tables.insert(name.to_string(), csv.to_string());
    }

    /// Load every `*.csv` file in a directory, named after the file stem
    pub fn from_dir(dir: &Path) -> crate::error::Result<Self> {
        let mut source = Self::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                let text = fs::read_to_string(&path)?;
                source.insert(stem, &text);
            }
        }
        Ok(source)
    }
}

impl TableSource for InMemorySource {
    fn list_tables(&self) -> crate::error::Result<Vec<String>> {
        Ok(self.tables.keys().cloned().collect())
    }

    fn export_table(&self, name: &str) -> crate::error::Result<String> {
        self.tables.get(name).cloned().ok_or_else(|| {
            LoaderError::TableExportFailed {
                table: name.to_string(),
                reason: "no such table".to_string(),
            }
            .into()
        })
    }
}
