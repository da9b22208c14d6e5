//! **Paragraph-level comparison of two versions of a document.**
//!
//! `docdiff` takes two versions of the same document (contracts, policies,
//! procedures), lines up their paragraphs, and reports what was added,
//! removed or modified. The change set is rated LOW, MEDIUM or HIGH by
//! looking for risk keywords, and summarized in a few lines of text.
//!
//! ## Key Features
//!
//! - **Paragraph Alignment**: Pairs each old paragraph with its most similar
//!   new paragraph (greedy), or computes an order-preserving alignment.
//! - **Change Classification**: Near-identical pairs are dropped; everything
//!   else becomes an `ADDED`, `REMOVED` or `MODIFIED` change labeled with its
//!   page.
//! - **Risk Rating**: Configurable high- and medium-risk keyword lists, in any
//!   language, matched case-insensitively.
//! - **Reporting**: Terminal summary, JSON, HTML and Markdown reports, plus a
//!   JSON comparison history.
//!
//! ## Core Concepts & Modules
//!
//! - **[`ingest`]**: Turns plain-text page dumps into a [`DocumentVersion`].
//! - **[`matching`]**: Similarity metrics and the [`ParagraphAligner`]
//!   strategies.
//! - **[`diff`]**: The [`DiffEngine`] that runs alignment, classification and
//!   assessment and returns a [`ComparisonResult`].
//! - **[`analysis`]**: Risk rating and summary text.
//! - **[`reports`]**: Report generators and the artifact writer.
//! - **[`store`]**: Comparison history.
//! - **[`pipeline`]**: Stages shared by the command handlers.
//!
//! ## Comparing Two Versions
//!
//! ```no_run
//! use std::path::Path;
//! use docdiff::{ingest::load_document, DiffEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = load_document(Path::new("contract_v1.txt"), "v1")?;
//!     let new = load_document(Path::new("contract_v2.txt"), "v2")?;
//!
//!     let result = DiffEngine::new().compare(&old, &new);
//!
//!     println!("Risk: {}", result.risk_level);
//!     for change in &result.changes {
//!         println!("{} {}", change.kind, change.section_label);
//!     }
//!     println!("{}", result.summary_text);
//!     Ok(())
//! }
//! ```
//!
//! ### Working on Paragraphs Directly
//!
//! ```
//! use docdiff::{DiffEngine, Paragraph, RiskLevel};
//!
//! let old: Vec<Paragraph> = Vec::new();
//! let new = vec![Paragraph { page_number: 1, index: 0, text: "New clause.".into() }];
//!
//! let result = DiffEngine::new().compare_paragraphs(&old, &new);
//! assert_eq!(result.changes.len(), 1);
//! assert_eq!(result.risk_level, RiskLevel::Low);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `docdiff` binary wraps this library:
//! `docdiff compare "Service Agreement" v1.txt v2.txt`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Similarity scores are computed from bounded lengths
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod ingest;
pub mod matching;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod store;

// Re-export main types for convenience
pub use analysis::{RiskAssessor, RiskKeywords, RiskLevel, SummaryBuilder, SummaryLanguage};
pub use config::{AppConfig, AppConfigBuilder, CompareConfig, CompareConfigBuilder, ConfigPreset};
pub use config::{ConfigError, Validatable};
pub use diff::{Change, ChangeKind, ComparisonResult, DiffEngine};
pub use error::{DocDiffError, ErrorContext, Result};
pub use matching::{
    AlignmentPair, AlignmentStrategy, GreedyAligner, OrderedAligner, ParagraphAligner,
    SimilarityMetric,
};
pub use model::{DocumentVersion, PageText, Paragraph};
pub use reports::{ReportFormat, ReportGenerator};
pub use store::{ComparisonStore, SqliteStore};
