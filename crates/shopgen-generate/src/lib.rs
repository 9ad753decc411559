//! Synthetic ecommerce dataset generation.
//!
//! Builds customers, products, orders and order items in memory from the
//! reference pools in `shopgen-core`, then writes one CSV file per entity.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use generators::{Dataset, generate_dataset};
pub use model::{FileReport, GenerateOptions, GenerationReport};
