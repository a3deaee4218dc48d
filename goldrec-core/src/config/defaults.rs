//! Default values for all config sections.

/// Probability at or above which a model-only pair becomes a graph edge.
pub const DEFAULT_ADMISSION_THRESHOLD: f64 = 0.8;

/// Probability at or above which a pair counts as a duplicate in stats.
pub const DEFAULT_DUPLICATE_CUTOFF: f64 = 0.7;

/// Lower bound (inclusive) of the low-certainty probability band.
pub const DEFAULT_UNCERTAINTY_LOW: f64 = 0.4;

/// Upper bound (exclusive) of the low-certainty probability band.
pub const DEFAULT_UNCERTAINTY_HIGH: f64 = 0.7;
