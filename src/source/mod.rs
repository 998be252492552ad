//! Access to the raw tables of the archive
//!
//! The loader only needs two capabilities from its source: listing the table
//! names and exporting one table as CSV text. [`MdbToolsSource`] provides them
//! by shelling out to `mdbtools`; [`InMemorySource`] serves fixtures.

pub mod mdb;
pub mod memory;

pub use mdb::MdbToolsSource;
pub use memory::InMemorySource;

/// Trait for reading tables out of the archive
#[cfg_attr(test, mockall::automock)]
pub trait TableSource {
    /// Names of the tables available at the source
    fn list_tables(&self) -> crate::error::Result<Vec<String>>;

    /// Contents of one table as CSV with a header row
    fn export_table(&self, name: &str) -> crate::error::Result<String>;
}
