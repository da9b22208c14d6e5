//! Risk rating and summary generation over a change set.
//!
//! Both are pure functions of the change list. Keyword sets and summary
//! limits are passed in explicitly.

mod risk;
mod summary;

pub use risk::{RiskAssessment, RiskAssessor, RiskKeywords, RiskLevel};
pub use summary::{SummaryBuilder, SummaryLanguage, DEFAULT_EXCERPT_CHARS, DEFAULT_MAX_EXAMPLES};
