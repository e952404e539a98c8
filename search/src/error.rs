//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Negative search
//! results (`Failure`, `Cutoff`) are expressed via
//! [`crate::search::SearchOutcomeV1`] and are not errors; adapter
//! resource-access failures never reach the engine (see
//! [`crate::problem::Problem::actions`]).

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before any bounded pass runs. No
/// `SearchReportV1` is produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An enumeration policy that can never record a match was supplied.
    InvalidEnumeratePolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEnumeratePolicy { detail } => {
                write!(f, "invalid enumeration policy: {detail}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
