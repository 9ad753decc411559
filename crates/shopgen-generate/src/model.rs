use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use shopgen_core::{MAX_CUSTOMERS, MAX_ORDERS, MAX_PRODUCTS};

use crate::errors::GenerationError;

pub const DEFAULT_CUSTOMER_COUNT: usize = 1000;
pub const DEFAULT_PRODUCT_COUNT: usize = 200;
pub const DEFAULT_ORDER_COUNT: usize = 5000;
pub const DEFAULT_OUT_DIR: &str = "data/raw";

/// Options for the generation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateOptions {
    /// Number of customers generated.
    pub customer_count: usize,
    /// Number of products generated.
    pub product_count: usize,
    /// Number of orders generated; items are derived per order.
    pub order_count: usize,
    /// Base directory for the CSV output.
    pub out_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            customer_count: DEFAULT_CUSTOMER_COUNT,
            product_count: DEFAULT_PRODUCT_COUNT,
            order_count: DEFAULT_ORDER_COUNT,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl GenerateOptions {
    /// Reject counts that cannot produce a consistent dataset.
    ///
    /// Zero counts are allowed and lead to skipped files, except that orders
    /// need at least one customer and one product to reference.
    pub fn validate(&self) -> Result<(), GenerationError> {
        check_limit("customer_count", self.customer_count, MAX_CUSTOMERS)?;
        check_limit("product_count", self.product_count, MAX_PRODUCTS)?;
        check_limit("order_count", self.order_count, MAX_ORDERS)?;

        if self.order_count > 0 {
            if self.customer_count == 0 {
                return Err(GenerationError::InvalidConfig(
                    "order_count > 0 requires customer_count >= 1".to_string(),
                ));
            }
            if self.product_count == 0 {
                return Err(GenerationError::InvalidConfig(
                    "order_count > 0 requires product_count >= 1".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn check_limit(name: &str, value: usize, max: usize) -> Result<(), GenerationError> {
    if value > max {
        return Err(GenerationError::InvalidConfig(format!(
            "{name} must be <= {max}, got {value}"
        )));
    }
    Ok(())
}

/// Summary of one entity file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub entity: String,
    /// Path relative to the output directory.
    pub relative_path: String,
    pub rows_written: u64,
    pub bytes_written: u64,
    /// Set when the collection was empty and no file was written.
    pub skipped: bool,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub generated_at: NaiveDateTime,
    pub files: Vec<FileReport>,
    pub rows_total: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, generated_at: NaiveDateTime) -> Self {
        Self {
            run_id,
            generated_at,
            files: Vec::new(),
            rows_total: 0,
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_file(&mut self, file: FileReport) {
        self.rows_total += file.rows_written;
        self.bytes_written += file.bytes_written;
        self.files.push(file);
    }

    pub fn file(&self, entity: &str) -> Option<&FileReport> {
        self.files.iter().find(|file| file.entity == entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let options = GenerateOptions::default();
        assert_eq!(options.customer_count, 1000);
        assert_eq!(options.product_count, 200);
        assert_eq!(options.order_count, 5000);
        assert_eq!(options.out_dir, PathBuf::from("data/raw"));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn orders_without_products_are_rejected() {
        let options = GenerateOptions {
            product_count: 0,
            ..GenerateOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(GenerationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn orders_without_customers_are_rejected() {
        let options = GenerateOptions {
            customer_count: 0,
            ..GenerateOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(GenerationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_pools_are_fine_without_orders() {
        let options = GenerateOptions {
            customer_count: 0,
            product_count: 0,
            order_count: 0,
            ..GenerateOptions::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn counts_beyond_id_width_are_rejected() {
        let options = GenerateOptions {
            customer_count: MAX_CUSTOMERS + 1,
            ..GenerateOptions::default()
        };
        let err = options.validate().expect_err("limit exceeded");
        assert!(err.to_string().contains("customer_count"));
    }
}
