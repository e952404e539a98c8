//! Fathom Search: iterative-deepening depth-first search over tree-shaped
//! state spaces.
//!
//! This crate provides the engine layer for Fathom. It knows nothing about
//! concrete domains — those live in `fathom_worlds` and plug in through the
//! [`Problem`] trait.
//!
//! # Crate dependency graph
//!
//! ```text
//! fathom_search  ←  fathom_worlds
//! (engine)          (binary tree, fs tree, live fs scan)
//! ```
//!
//! # Key types
//!
//! - [`Problem`] — trait for domains that support search
//! - [`SearchNodeV1`] — immutable search-tree node with a shared ancestor chain
//! - [`SearchOutcomeV1`] — tagged result of a bounded pass (goal / failure / cutoff)
//! - [`EnumeratePolicyV1`] — match-depth and match-budget configuration
//! - [`SearchReportV1`] — per-pass audit artifact (normative observability surface)

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod problem;
pub mod report;
pub mod search;

pub use error::SearchError;
pub use node::{expand, SearchNodeV1};
pub use policy::EnumeratePolicyV1;
pub use problem::Problem;
pub use report::{PassRecordV1, SearchReportV1, TerminationReasonV1};
pub use search::{
    depth_limited_search, iterative_deepening_collect, iterative_deepening_search,
    EnumerationResult, SearchOutcomeV1, SearchResult,
};
