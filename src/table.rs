//! Raw tables as exported from the archive
//!
//! A [`Table`] keeps the CSV text parsed into string records so the cache can
//! hold any table regardless of its columns. Typed views are produced on
//! demand with [`Table::records`].

use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::debug;

/// A table held in memory with its header row
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Parse CSV text (header row first) into a table
    pub fn from_csv(name: &str, text: &str) -> crate::error::Result<Self> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read header row of {}", name))?
            .clone();

        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to parse rows of {}", name))?;

        Ok(Self {
            name: name.to_string(),
            headers,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> Vec<&str> {
        self.headers.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of one column, or `None` when the column does not exist
    pub fn column(&self, column: &str) -> Option<Vec<&str>> {
        let idx = self.headers.iter().position(|h| h == column)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).unwrap_or(""))
                .collect(),
        )
    }

    /// Decode every row into `T`, matching fields by header name.
    /// Rows that cannot be decoded are skipped.
    pub fn records<T: DeserializeOwned>(&self) -> Vec<T> {
        let mut skipped = 0usize;
        let records: Vec<T> = self
            .rows
            .iter()
            .filter_map(|row| match row.deserialize(Some(&self.headers)) {
                Ok(record) => Some(record),
                Err(e) => {
                    skipped += 1;
                    debug!("Skipping undecodable row in {}: {}", self.name, e);
                    None
                }
            })
            .collect();

        if skipped > 0 {
            debug!("Skipped {} of {} rows in {}", skipped, self.rows.len(), self.name);
        }

        records
    }
}

/// Integer column that may be empty or exported with a fractional part ("3.00")
pub(crate) fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(Some(value));
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(Some(value as i64)),
        _ => Err(serde::de::Error::custom(format!("not an integer: {}", raw))),
    }
}
