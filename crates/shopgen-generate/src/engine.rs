use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{NaiveDateTime, SubsecRound};
use rand::RngCore;
use tracing::{info, warn};

use shopgen_core::Entity;

use crate::errors::GenerationError;
use crate::generators::{Dataset, generate_dataset};
use crate::model::{FileReport, GenerateOptions, GenerationReport};
use crate::output::write_entities;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating and writing a dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Generate every entity and write one CSV file per collection.
    ///
    /// `now` is the reference timestamp all dates are computed from; it is
    /// truncated to microseconds.
    pub fn run(
        &self,
        rng: &mut dyn RngCore,
        now: NaiveDateTime,
    ) -> Result<GenerationResult, GenerationError> {
        self.run_with_progress(rng, now, &mut |_| {})
    }

    /// Like [`GenerationEngine::run`], calling `on_file` right after each
    /// collection is written or skipped.
    pub fn run_with_progress(
        &self,
        rng: &mut dyn RngCore,
        now: NaiveDateTime,
        on_file: &mut dyn FnMut(&FileReport),
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        self.options.validate()?;

        let now = now.trunc_subsecs(6);
        let run_id = uuid::Uuid::new_v4().to_string();
        let out_dir = self.options.out_dir.clone();

        info!(
            run_id = %run_id,
            customers = self.options.customer_count,
            products = self.options.product_count,
            orders = self.options.order_count,
            out_dir = %out_dir.display(),
            "generation started"
        );

        let dataset = generate_dataset(&self.options, rng, now)?;
        info!(
            run_id = %run_id,
            order_items = dataset.order_items.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "records generated"
        );

        let mut report = GenerationReport::new(run_id.clone(), now);
        if let Err(err) = write_dataset(&out_dir, &dataset, &mut report, on_file) {
            warn!(run_id = %run_id, error = %err, "generation failed");
            return Err(err);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            files = report.files.iter().filter(|file| !file.skipped).count(),
            rows = report.rows_total,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult { out_dir, report })
    }
}

fn write_dataset(
    out_dir: &Path,
    dataset: &Dataset,
    report: &mut GenerationReport,
    on_file: &mut dyn FnMut(&FileReport),
) -> Result<(), GenerationError> {
    let mut record = |file: FileReport| {
        on_file(&file);
        report.record_file(file);
    };
    record(write_collection(out_dir, &dataset.customers)?);
    record(write_collection(out_dir, &dataset.products)?);
    record(write_collection(out_dir, &dataset.orders)?);
    record(write_collection(out_dir, &dataset.order_items)?);
    Ok(())
}

fn write_collection<T: Entity>(
    out_dir: &Path,
    records: &[T],
) -> Result<FileReport, GenerationError> {
    let report = match write_entities(out_dir, records)? {
        Some(written) => {
            info!(
                entity = T::NAME,
                rows = written.rows,
                bytes_written = written.bytes,
                path = %written.path.display(),
                "file written"
            );
            FileReport {
                entity: T::NAME.to_string(),
                relative_path: T::RELATIVE_PATH.to_string(),
                rows_written: written.rows,
                bytes_written: written.bytes,
                skipped: false,
            }
        }
        None => {
            info!(entity = T::NAME, "empty collection, file skipped");
            FileReport {
                entity: T::NAME.to_string(),
                relative_path: T::RELATIVE_PATH.to_string(),
                rows_written: 0,
                bytes_written: 0,
                skipped: true,
            }
        }
    };
    Ok(report)
}
