//! Verification of generated datasets.
//!
//! Reads the CSV files of a dataset back into typed records and checks the
//! identifier, referential, temporal and monetary invariants.

pub mod engine;
pub mod errors;
pub mod model;
pub mod report;

pub use engine::EvaluationEngine;
pub use errors::EvalError;
pub use model::{EntityCount, EvaluateOptions, EvaluationResult, VerificationReport, Violation};
pub use report::render_report;
