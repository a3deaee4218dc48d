//! # goldrec-report
//!
//! Aggregate statistics over scored pairs, ROC-AUC model evaluation
//! against approximate ground truth, and assembly of the multi-sheet
//! report workbook.

pub mod auc;
pub mod stats;
pub mod workbook;

pub use auc::{ground_truth_samples, model_auc, roc_auc};
pub use stats::match_stats;
pub use workbook::assemble_workbook;
