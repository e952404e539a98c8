//! Fathom Worlds: concrete search domains for the `fathom_search` engine.
//!
//! Each world is a thin adapter implementing [`fathom_search::Problem`] —
//! it supplies `actions`, `result`, and a goal test, and leaves all search
//! control to the engine.
//!
//! - [`binary_tree`] — identifier lookup over an in-memory binary tree
//! - [`fs_tree`] — file lookup with path reconstruction over a static tree
//! - [`live_fs`] — permission-filtered enumeration over a real directory tree

#![forbid(unsafe_code)]

pub mod binary_tree;
pub mod fs_tree;
#[cfg(unix)]
pub mod live_fs;
