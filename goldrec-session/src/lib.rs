//! # goldrec-session
//!
//! Session-scoped state and the staged matching pipeline. A
//! [`SessionContext`] owns one uploaded dataset plus everything derived
//! from it; the [`MatchEngine`] runs the pipeline stages against a context
//! with explicit prerequisite checks. The [`SessionManager`] keeps
//! contexts addressable from a concurrent front end — there is no
//! process-wide mutable state anywhere in the engine.

pub mod context;
pub mod engine;
pub mod manager;

pub use context::SessionContext;
pub use engine::MatchEngine;
pub use manager::SessionManager;
