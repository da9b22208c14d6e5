//! Comparison history.
//!
//! Every comparison run can be recorded together with the document, the two
//! versions that were compared and the individual changes. The recorded
//! comparison id doubles as the run id reported to the user.
//!
//! [`SqliteStore`] keeps the history in a SQLite database with one table per
//! record type. Ids are assigned by SQLite and start at 1.

mod records;
mod sqlite;

pub use records::{
    ChangeItemRecord, ComparisonRecord, DocumentRecord, NewComparison, NewRun, NewVersion,
    VersionRecord,
};
pub use sqlite::{SqliteStore, SCHEMA_VERSION};

use crate::error::Result;
use std::path::Path;

/// Persistence for comparison runs.
pub trait ComparisonStore {
    /// Return the document with this name, creating it if it does not exist.
    fn get_or_create_document(&mut self, name: &str) -> Result<DocumentRecord>;

    /// Register an uploaded version of a document.
    fn add_version(
        &mut self,
        document_id: i64,
        label: &str,
        file_path: &Path,
    ) -> Result<VersionRecord>;

    /// Record one comparison with all its changes and return its id.
    fn record_comparison(&mut self, comparison: NewComparison<'_>) -> Result<i64>;

    /// Record a whole run (document, both versions, comparison and changes)
    /// all or nothing, and return the comparison id.
    fn record_run(&mut self, run: NewRun<'_>) -> Result<i64>;

    /// Look up a recorded comparison.
    fn comparison(&self, id: i64) -> Result<Option<ComparisonRecord>>;

    /// Changes recorded for a comparison, in their original order.
    fn changes_for(&self, comparison_id: i64) -> Result<Vec<ChangeItemRecord>>;

    /// All comparisons of a document, oldest first.
    fn comparisons_for(&self, document_id: i64) -> Result<Vec<ComparisonRecord>>;
}
