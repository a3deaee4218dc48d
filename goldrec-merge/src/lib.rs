//! # goldrec-merge
//!
//! Reduces each resolved cluster to one golden record with deterministic
//! per-field rules: most-frequent value for identity fields (ties broken
//! by first encounter in ascending member order), earliest birthdate, and
//! bounded notes concatenation.

pub mod merger;

pub use merger::{merge_all, merge_cluster};
