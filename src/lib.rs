//! Tennis Games - cleaning and export of tennis match archives
//!
//! This crate reads the tables of a tennis results archive, joins them into
//! one canonical games table, and projects that table into the input formats
//! of several rating libraries (WHR, pairwise CSV, TrueSkill Through Time,
//! point-level games).

pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod lookups;
pub mod pipeline;
pub mod rating;
pub mod source;
pub mod table;
pub mod types;

// Re-export commonly used types and traits
pub use error::{LoaderError, Result};
pub use types::*;

// Re-export key components
pub use export::ExportOptions;
pub use loader::{TennisLoader, DEFAULT_TABLES};
pub use pipeline::CleanOptions;
pub use source::{InMemorySource, MdbToolsSource, TableSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
