mod config;
mod logging;

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use config::{ConfigError, Overrides, resolve_options};
use logging::{LogFormat, init_logging};
use shopgen_eval::{EvalError, EvaluateOptions, EvaluationEngine, render_report};
use shopgen_generate::{FileReport, GenerationEngine, GenerationError, GenerationResult};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("verification error: {0}")]
    Verification(#[from] EvalError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "shopgen", version, about = "Synthetic ecommerce dataset generator")]
struct Cli {
    /// Log output format (level via RUST_LOG).
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate customers, products, orders and order items as CSV.
    Generate(GenerateArgs),
    /// Check a generated dataset for consistency.
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML file with customer_count, product_count, order_count, out_dir.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Number of customers.
    #[arg(long)]
    customers: Option<usize>,
    /// Number of products.
    #[arg(long)]
    products: Option<usize>,
    /// Number of orders.
    #[arg(long)]
    orders: Option<usize>,
    /// Base output directory.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Print the generation report as JSON instead of progress lines.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Dataset base directory.
    #[arg(long, default_value = "data/raw")]
    dataset: PathBuf,
    /// Generation timestamp (YYYY-MM-DDTHH:MM:SS) enabling date window checks.
    #[arg(long, value_name = "TIMESTAMP")]
    as_of: Option<NaiveDateTime>,
    /// Maximum number of example violations to keep.
    #[arg(long, default_value_t = 20)]
    max_examples: usize,
    /// Report violations without failing.
    #[arg(long, default_value_t = false)]
    no_strict: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format).map_err(CliError::Logging)?;

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Verify(args) => run_verify(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let GenerateArgs {
        config,
        customers,
        products,
        orders,
        out,
        json,
    } = args;

    let overrides = Overrides {
        customer_count: customers,
        product_count: products,
        order_count: orders,
        out_dir: out,
    };
    let options = resolve_options(config.as_deref(), overrides)?;
    tracing::debug!(?options, "options resolved");

    if !json {
        println!("Generating sample ecommerce data...");
        println!();
    }

    let now = Local::now().naive_local();
    let mut rng = rand::rng();
    let engine = GenerationEngine::new(options);
    let result = if json {
        engine.run(&mut rng, now)?
    } else {
        engine.run_with_progress(&mut rng, now, &mut print_progress)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result.report)?);
    } else {
        print_summary(&result);
    }

    Ok(())
}

fn print_progress(file: &FileReport) {
    if !file.skipped {
        println!(
            "✓ Generated {} records in {}",
            file.rows_written, file.relative_path
        );
    }
}

fn print_summary(result: &GenerationResult) {
    let out_dir = std::path::absolute(&result.out_dir).unwrap_or_else(|_| result.out_dir.clone());
    println!();
    println!("✓ Data generation complete!");
    println!("  Output directory: {}", out_dir.display());
    println!(
        "  Generated at: {}",
        result.report.generated_at.format("%Y-%m-%dT%H:%M:%S%.f")
    );
}

fn run_verify(args: VerifyArgs) -> Result<(), CliError> {
    let options = EvaluateOptions {
        strict: !args.no_strict,
        max_examples: args.max_examples,
        as_of: args.as_of,
    };

    let result = EvaluationEngine::new(options).run(&args.dataset)?;
    println!("{}", render_report(&result.report));

    Ok(())
}
