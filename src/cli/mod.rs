//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod compare;

pub use compare::{compare_documents, run_compare, CompareOutcome};

// Re-export config types used by handlers
pub use crate::config::CompareConfig;
