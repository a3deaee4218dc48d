//! # goldrec-graph
//!
//! Builds the undirected match graph over all record ids and resolves its
//! connected components into clusters. Edge admission combines the model
//! probability with human feedback overrides; component discovery iterates
//! in ascending record-id order so cluster ids are reproducible.

pub mod admission;
pub mod builder;
pub mod components;

pub use admission::admit_edge;
pub use builder::{build_match_graph, MatchGraph};
pub use components::resolve_clusters;
