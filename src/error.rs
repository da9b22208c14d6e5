//! Unified error types for docdiff.
//!
//! The comparison core (alignment, classification, risk and summary) is pure
//! and never fails. Errors come from the collaborators around it: loading
//! page text, writing reports and persisting comparison runs.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for docdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DocDiffError {
    /// Errors while loading or segmenting a document version
    #[error("Failed to ingest document: {context}")]
    Ingest {
        context: String,
        #[source]
        source: IngestErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// Errors from the comparison store
    #[error("Comparison store failed: {context}")]
    Store {
        context: String,
        #[source]
        source: StoreErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific ingestion error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IngestErrorKind {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is not valid UTF-8 text: {0}")]
    NotText(String),

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),

    #[error("Rendering failed: {0}")]
    Render(String),
}

/// Specific store error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreErrorKind {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Stored row is corrupt: {0}")]
    Corrupt(String),

    #[error("Unknown {table} id {id}")]
    UnknownId { table: &'static str, id: i64 },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for docdiff operations
pub type Result<T> = std::result::Result<T, DocDiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl DocDiffError {
    /// Create an ingestion error with context
    pub fn ingest(context: impl Into<String>, source: IngestErrorKind) -> Self {
        Self::Ingest {
            context: context.into(),
            source,
        }
    }

    /// Create an ingestion error for a missing input file
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::ingest(
            format!("at {}", path.display()),
            IngestErrorKind::FileNotFound(path),
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create a store error
    pub fn store(context: impl Into<String>, source: StoreErrorKind) -> Self {
        Self::Store {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for DocDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<rusqlite::Error> for DocDiffError {
    fn from(err: rusqlite::Error) -> Self {
        Self::store("", StoreErrorKind::Database(err.to_string()))
    }
}

impl From<crate::reports::ReportError> for DocDiffError {
    fn from(err: crate::reports::ReportError) -> Self {
        use crate::reports::ReportError;
        match err {
            ReportError::IoError(source) => Self::from(source),
            ReportError::SerializationError(message) => Self::report(
                "generating report",
                ReportErrorKind::JsonSerializationError(message),
            ),
            ReportError::FormatError(e) => {
                Self::report("generating report", ReportErrorKind::Render(e.to_string()))
            }
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost first, so a failure deep inside the
/// loader reads like `loading old version: reading pages: at old.txt`.
///
/// ```ignore
/// use docdiff::error::ErrorContext;
///
/// let pages = load_pages(path).context("loading old version")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<DocDiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: DocDiffError, new_ctx: &str) -> DocDiffError {
    match err {
        DocDiffError::Ingest {
            context: existing,
            source,
        } => DocDiffError::Ingest {
            context: chain_context(new_ctx, &existing),
            source,
        },
        DocDiffError::Report {
            context: existing,
            source,
        } => DocDiffError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        DocDiffError::Store {
            context: existing,
            source,
        } => DocDiffError::Store {
            context: chain_context(new_ctx, &existing),
            source,
        },
        DocDiffError::Io {
            path,
            message,
            source,
        } => DocDiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        DocDiffError::Config(msg) => DocDiffError::Config(chain_context(new_ctx, &msg)),
        DocDiffError::Validation(msg) => DocDiffError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
