//! SQLite implementation of [`ComparisonStore`].

use super::records::{
    ChangeItemRecord, ComparisonRecord, DocumentRecord, NewComparison, NewRun, VersionRecord,
};
use super::ComparisonStore;
use crate::analysis::RiskLevel;
use crate::diff::ChangeKind;
use crate::error::{DocDiffError, ErrorContext, Result, StoreErrorKind};
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Schema version recorded in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

/// How long a writer waits for another process holding the database lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS documents (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    category    TEXT,
    created_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_documents_name ON documents(name);

CREATE TABLE IF NOT EXISTS document_versions (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    document_id    INTEGER NOT NULL REFERENCES documents(id),
    version_label  TEXT NOT NULL,
    file_path      TEXT NOT NULL,
    uploaded_by    TEXT,
    uploaded_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS comparisons (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    document_id         INTEGER NOT NULL REFERENCES documents(id),
    version_old_id      INTEGER NOT NULL REFERENCES document_versions(id),
    version_new_id      INTEGER NOT NULL REFERENCES document_versions(id),
    created_at          TEXT NOT NULL,
    overall_risk_level  TEXT NOT NULL,
    summary_text        TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_comparisons_document ON comparisons(document_id);

CREATE TABLE IF NOT EXISTS changes (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    comparison_id  INTEGER NOT NULL REFERENCES comparisons(id),
    change_type    TEXT NOT NULL,
    section_label  TEXT NOT NULL,
    old_text       TEXT,
    new_text       TEXT,
    risk_level     TEXT,
    ai_comment     TEXT
);
CREATE INDEX IF NOT EXISTS idx_changes_comparison ON changes(comparison_id);

PRAGMA user_version = 1;
";

/// Comparison store backed by a SQLite database.
///
/// Every mutation runs in its own `IMMEDIATE` transaction, and
/// [`ComparisonStore::record_run`] writes the document, both versions, the
/// comparison and its changes in a single one. Several processes can record
/// into the same file; writers wait up to five seconds for the lock.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open the database at `path`, creating the file and schema if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| DocDiffError::io(parent, e))?;
            }
        }

        let conn = Connection::open(&path).with_context(|| format!("opening {}", path.display()))?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        let store = Self::init(conn, Some(path))?;

        tracing::debug!(
            path = ?store.path,
            schema = SCHEMA_VERSION,
            "opened comparison store"
        );
        Ok(store)
    }

    /// A store that lives only as long as this value.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("opening in-memory store")?;
        Self::init(conn, None)
    }

    fn init(mut conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        // Has no effect inside a transaction, so it goes first.
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let version: i32 = tx.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version > SCHEMA_VERSION {
            return Err(DocDiffError::store(
                "checking schema",
                StoreErrorKind::Corrupt(format!(
                    "schema version {version} is newer than supported version {SCHEMA_VERSION}"
                )),
            ));
        }
        if version < SCHEMA_VERSION {
            tx.execute_batch(SCHEMA_SQL).context("applying schema")?;
        }
        tx.commit()?;

        Ok(Self { conn, path })
    }

    /// Backing file, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All documents, in id order
    pub fn documents(&self) -> Result<Vec<DocumentRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, category, created_at FROM documents ORDER BY id")?;
        let rows = stmt.query_map([], document_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// All versions, in id order
    pub fn versions(&self) -> Result<Vec<VersionRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, document_id, version_label, file_path, uploaded_by, uploaded_at
             FROM document_versions ORDER BY id",
        )?;
        let rows = stmt.query_map([], version_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Run `operation` in an `IMMEDIATE` transaction. Dropping the
    /// transaction on error rolls it back.
    fn in_transaction<T>(
        &mut self,
        operation: impl FnOnce(&Transaction<'_>) -> Result<T>,
    ) -> Result<T> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let value = operation(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}

impl ComparisonStore for SqliteStore {
    fn get_or_create_document(&mut self, name: &str) -> Result<DocumentRecord> {
        self.in_transaction(|tx| get_or_create_document(tx, name))
    }

    fn add_version(
        &mut self,
        document_id: i64,
        label: &str,
        file_path: &Path,
    ) -> Result<VersionRecord> {
        self.in_transaction(|tx| add_version(tx, document_id, label, file_path))
            .with_context(|| format!("adding version {label}"))
    }

    fn record_comparison(&mut self, comparison: NewComparison<'_>) -> Result<i64> {
        self.in_transaction(|tx| record_comparison(tx, &comparison))
    }

    fn record_run(&mut self, run: NewRun<'_>) -> Result<i64> {
        let run_id = self
            .in_transaction(|tx| {
                let document = get_or_create_document(tx, run.document_name)?;
                let old = add_version(tx, document.id, run.old.label, run.old.file_path)?;
                let new = add_version(tx, document.id, run.new.label, run.new.file_path)?;
                record_comparison(
                    tx,
                    &NewComparison {
                        document_id: document.id,
                        version_old_id: old.id,
                        version_new_id: new.id,
                        result: run.result,
                    },
                )
            })
            .with_context(|| format!("recording run for {}", run.document_name))?;

        tracing::debug!(
            run_id,
            changes = run.result.changes.len(),
            "recorded comparison"
        );
        Ok(run_id)
    }

    fn comparison(&self, id: i64) -> Result<Option<ComparisonRecord>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, document_id, version_old_id, version_new_id, created_at,
                        overall_risk_level, summary_text
                 FROM comparisons WHERE id = ?1",
                params![id],
                comparison_from_row,
            )
            .optional()?)
    }

    fn changes_for(&self, comparison_id: i64) -> Result<Vec<ChangeItemRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, comparison_id, change_type, section_label, old_text, new_text,
                    risk_level, ai_comment
             FROM changes WHERE comparison_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![comparison_id], change_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn comparisons_for(&self, document_id: i64) -> Result<Vec<ComparisonRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, document_id, version_old_id, version_new_id, created_at,
                    overall_risk_level, summary_text
             FROM comparisons WHERE document_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![document_id], comparison_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

// ============================================================================
// Statements shared by single operations and whole runs
// ============================================================================

fn get_or_create_document(conn: &Connection, name: &str) -> Result<DocumentRecord> {
    let existing = conn
        .query_row(
            "SELECT id, name, category, created_at FROM documents
             WHERE name = ?1 ORDER BY id LIMIT 1",
            params![name],
            document_from_row,
        )
        .optional()?;
    if let Some(document) = existing {
        return Ok(document);
    }

    let created_at = Utc::now();
    conn.execute(
        "INSERT INTO documents (name, created_at) VALUES (?1, ?2)",
        params![name, created_at.to_rfc3339()],
    )?;
    Ok(DocumentRecord {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        category: None,
        created_at,
    })
}

fn add_version(
    conn: &Connection,
    document_id: i64,
    label: &str,
    file_path: &Path,
) -> Result<VersionRecord> {
    require_document(conn, document_id)?;

    let uploaded_at = Utc::now();
    conn.execute(
        "INSERT INTO document_versions (document_id, version_label, file_path, uploaded_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            document_id,
            label,
            file_path.to_string_lossy().into_owned(),
            uploaded_at.to_rfc3339()
        ],
    )?;
    Ok(VersionRecord {
        id: conn.last_insert_rowid(),
        document_id,
        version_label: label.to_string(),
        file_path: file_path.to_path_buf(),
        uploaded_by: None,
        uploaded_at,
    })
}

fn record_comparison(conn: &Connection, comparison: &NewComparison<'_>) -> Result<i64> {
    require_document(conn, comparison.document_id)?;
    require_version(conn, comparison.version_old_id, comparison.document_id)?;
    require_version(conn, comparison.version_new_id, comparison.document_id)?;

    conn.execute(
        "INSERT INTO comparisons
         (document_id, version_old_id, version_new_id, created_at, overall_risk_level, summary_text)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            comparison.document_id,
            comparison.version_old_id,
            comparison.version_new_id,
            Utc::now().to_rfc3339(),
            comparison.result.risk_level.as_str(),
            comparison.result.summary_text,
        ],
    )?;
    let id = conn.last_insert_rowid();

    let mut insert = conn.prepare_cached(
        "INSERT INTO changes (comparison_id, change_type, section_label, old_text, new_text)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    for change in &comparison.result.changes {
        insert.execute(params![
            id,
            change.kind.as_str(),
            change.section_label,
            change.old_text,
            change.new_text,
        ])?;
    }
    Ok(id)
}

fn require_document(conn: &Connection, id: i64) -> Result<()> {
    let found = conn
        .query_row(
            "SELECT 1 FROM documents WHERE id = ?1",
            params![id],
            |_| Ok(()),
        )
        .optional()?;
    found.ok_or_else(|| unknown_id("documents", id))
}

fn require_version(conn: &Connection, id: i64, document_id: i64) -> Result<()> {
    let found = conn
        .query_row(
            "SELECT 1 FROM document_versions WHERE id = ?1 AND document_id = ?2",
            params![id, document_id],
            |_| Ok(()),
        )
        .optional()?;
    found.ok_or_else(|| unknown_id("document_versions", id))
}

fn unknown_id(table: &'static str, id: i64) -> DocDiffError {
    DocDiffError::store("recording comparison", StoreErrorKind::UnknownId { table, id })
}

// ============================================================================
// Row mapping
// ============================================================================

fn parse_text<T>(idx: usize, raw: &str, parse: impl FnOnce(&str) -> Option<T>) -> rusqlite::Result<T> {
    parse(raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("unexpected value {raw:?}").into(),
        )
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    parse_text(idx, &raw, parse_timestamp)
}

fn document_from_row(row: &Row<'_>) -> rusqlite::Result<DocumentRecord> {
    Ok(DocumentRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        created_at: timestamp_column(row, 3)?,
    })
}

fn version_from_row(row: &Row<'_>) -> rusqlite::Result<VersionRecord> {
    Ok(VersionRecord {
        id: row.get(0)?,
        document_id: row.get(1)?,
        version_label: row.get(2)?,
        file_path: PathBuf::from(row.get::<_, String>(3)?),
        uploaded_by: row.get(4)?,
        uploaded_at: timestamp_column(row, 5)?,
    })
}

fn comparison_from_row(row: &Row<'_>) -> rusqlite::Result<ComparisonRecord> {
    let risk: String = row.get(5)?;
    Ok(ComparisonRecord {
        id: row.get(0)?,
        document_id: row.get(1)?,
        version_old_id: row.get(2)?,
        version_new_id: row.get(3)?,
        created_at: timestamp_column(row, 4)?,
        overall_risk_level: parse_text(5, &risk, RiskLevel::parse)?,
        summary_text: row.get(6)?,
    })
}

fn change_from_row(row: &Row<'_>) -> rusqlite::Result<ChangeItemRecord> {
    let kind: String = row.get(2)?;
    let risk_level = row
        .get::<_, Option<String>>(6)?
        .map(|raw| parse_text(6, &raw, RiskLevel::parse))
        .transpose()?;
    Ok(ChangeItemRecord {
        id: row.get(0)?,
        comparison_id: row.get(1)?,
        change_type: parse_text(2, &kind, ChangeKind::parse)?,
        section_label: row.get(3)?,
        old_text: row.get(4)?,
        new_text: row.get(5)?,
        risk_level,
        ai_comment: row.get(7)?,
    })
}
