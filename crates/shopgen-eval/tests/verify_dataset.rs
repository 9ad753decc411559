use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shopgen_eval::{EvalError, EvaluateOptions, EvaluationEngine};
use shopgen_generate::{GenerateOptions, GenerationEngine};

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, 4)
        .and_then(|date| date.and_hms_opt(16, 20, 5))
        .expect("valid timestamp")
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("shopgen_eval_{label}_{}", uuid::Uuid::new_v4()));
    dir
}

fn generate(label: &str, customers: usize, products: usize, orders: usize) -> PathBuf {
    let out_dir = temp_out_dir(label);
    let options = GenerateOptions {
        customer_count: customers,
        product_count: products,
        order_count: orders,
        out_dir: out_dir.clone(),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    GenerationEngine::new(options)
        .run(&mut rng, fixed_now())
        .expect("run generation");
    out_dir
}

fn lenient() -> EvaluateOptions {
    EvaluateOptions {
        strict: false,
        max_examples: 50,
        as_of: Some(fixed_now()),
    }
}

fn replace_in_file(path: &Path, from: &str, to: &str) {
    let contents = fs::read_to_string(path).expect("read csv");
    assert!(contents.contains(from), "pattern '{from}' not in file");
    fs::write(path, contents.replacen(from, to, 1)).expect("write csv");
}

#[test]
fn generated_dataset_passes_strict_verification() {
    let out_dir = generate("clean", 60, 15, 120);
    let options = EvaluateOptions {
        as_of: Some(fixed_now()),
        ..EvaluateOptions::default()
    };

    let result = EvaluationEngine::new(options)
        .run(&out_dir)
        .expect("verification passes");

    assert!(result.report.is_clean());
    assert_eq!(result.report.rows("customers"), Some(60));
    assert_eq!(result.report.rows("products"), Some(15));
    assert_eq!(result.report.rows("orders"), Some(120));
    assert!(result.report.checks_run > 0);
}

#[test]
fn missing_files_count_as_empty() {
    let out_dir = generate("partial", 5, 0, 0);

    let result = EvaluationEngine::new(lenient())
        .run(&out_dir)
        .expect("verification runs");

    assert!(result.report.is_clean());
    let products = result
        .report
        .entities
        .iter()
        .find(|count| count.entity == "products")
        .expect("products entry");
    assert!(!products.present);
}

#[test]
fn unknown_customer_is_reported() {
    let out_dir = generate("fk", 1, 2, 3);
    replace_in_file(
        &out_dir.join("customers/customers.csv"),
        "CUST000001,",
        "CUST000777,",
    );

    let result = EvaluationEngine::new(lenient())
        .run(&out_dir)
        .expect("verification runs");

    assert_eq!(
        result.report.violations_by_code.get("unknown_customer"),
        Some(&3)
    );
}

#[test]
fn tampered_item_total_fails_strict_mode() {
    let out_dir = generate("total", 3, 2, 1);
    let path = out_dir.join("order_items/order_items.csv");
    let contents = fs::read_to_string(&path).expect("read order_items.csv");
    let mut lines: Vec<String> = contents.lines().map(str::to_string).collect();
    let mut fields: Vec<String> = lines[1].split(',').map(str::to_string).collect();
    fields[5] = "0.01".to_string();
    lines[1] = fields.join(",");
    fs::write(&path, lines.join("\n") + "\n").expect("write order_items.csv");

    let options = EvaluateOptions {
        as_of: Some(fixed_now()),
        ..EvaluateOptions::default()
    };
    let result = EvaluationEngine::new(options).run(&out_dir);

    assert!(matches!(result, Err(EvalError::Violations(n)) if n >= 1));
}

#[test]
fn dates_after_as_of_are_reported() {
    let out_dir = generate("as_of", 20, 2, 10);
    let earlier = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid timestamp");
    let options = EvaluateOptions {
        strict: false,
        max_examples: 5,
        as_of: Some(earlier),
    };

    let result = EvaluationEngine::new(options)
        .run(&out_dir)
        .expect("verification runs");

    assert!(result.report.violations_by_code.contains_key("order_date_out_of_range"));
    assert!(result.report.examples.len() <= 5);
}

#[test]
fn missing_directory_is_invalid() {
    let result = EvaluationEngine::new(lenient()).run(&temp_out_dir("absent"));
    assert!(matches!(result, Err(EvalError::InvalidDataset(_))));
}
