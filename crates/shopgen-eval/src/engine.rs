use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::time::Instant;

use chrono::{Duration, NaiveDateTime};
use regex::Regex;
use tracing::{info, warn};

use shopgen_core::reference::{
    MAX_PRICE, MAX_QUANTITY, MIN_PRICE, ORDER_MAX_DAYS_AGO, SIGNUP_MAX_DAYS_AGO, UPDATE_MAX_HOURS,
};
use shopgen_core::{
    Customer, Entity, MAX_ITEMS_PER_ORDER, Order, OrderItem, Product, order_item_id,
    round_currency,
};

use crate::errors::EvalError;
use crate::model::{EntityCount, EvaluateOptions, EvaluationResult, VerificationReport, Violation};

/// Verify a generated dataset directory.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    options: EvaluateOptions,
}

impl EvaluationEngine {
    pub fn new(options: EvaluateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, dataset_dir: &Path) -> Result<EvaluationResult, EvalError> {
        let start = Instant::now();
        if !dataset_dir.is_dir() {
            return Err(EvalError::InvalidDataset(format!(
                "dataset directory '{}' not found",
                dataset_dir.display()
            )));
        }

        let mut entities = Vec::new();
        let customers: Vec<Customer> = load_entities(dataset_dir, &mut entities)?;
        let products: Vec<Product> = load_entities(dataset_dir, &mut entities)?;
        let orders: Vec<Order> = load_entities(dataset_dir, &mut entities)?;
        let order_items: Vec<OrderItem> = load_entities(dataset_dir, &mut entities)?;

        info!(
            dataset_dir = %dataset_dir.display(),
            customers = customers.len(),
            products = products.len(),
            orders = orders.len(),
            order_items = order_items.len(),
            "dataset loaded"
        );

        let patterns = IdPatterns::new()?;
        let mut collector = ViolationCollector::new(self.options.max_examples);

        check_customers(&customers, &patterns, self.options.as_of, &mut collector);
        check_products(&products, &patterns, &mut collector);
        check_orders(
            &orders,
            &customers,
            &patterns,
            self.options.as_of,
            &mut collector,
        );
        check_order_items(&order_items, &orders, &products, &patterns, &mut collector);

        let report = collector.into_report(entities);
        info!(
            checks = report.checks_run,
            violations = report.violations_total,
            duration_ms = start.elapsed().as_millis() as u64,
            "verification finished"
        );

        if self.options.strict && !report.is_clean() {
            for example in &report.examples {
                warn!(
                    code = %example.code,
                    entity = %example.entity,
                    record_id = example.record_id.as_deref().unwrap_or("-"),
                    "{}",
                    example.message
                );
            }
            return Err(EvalError::Violations(report.violations_total));
        }

        Ok(EvaluationResult {
            dataset_dir: dataset_dir.to_path_buf(),
            report,
        })
    }
}

/// Read one entity file; a missing file counts as an empty collection.
fn load_entities<T: Entity>(
    dataset_dir: &Path,
    counts: &mut Vec<EntityCount>,
) -> Result<Vec<T>, EvalError> {
    let path = dataset_dir.join(T::RELATIVE_PATH);
    if !path.exists() {
        counts.push(EntityCount {
            entity: T::NAME.to_string(),
            relative_path: T::RELATIVE_PATH.to_string(),
            present: false,
            rows: 0,
        });
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(&path)?;
    let records = reader.deserialize().collect::<Result<Vec<T>, _>>()?;
    counts.push(EntityCount {
        entity: T::NAME.to_string(),
        relative_path: T::RELATIVE_PATH.to_string(),
        present: true,
        rows: records.len() as u64,
    });
    Ok(records)
}

struct IdPatterns {
    customer: Regex,
    product: Regex,
    order: Regex,
}

impl IdPatterns {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            customer: Regex::new(r"^CUST\d{6}$")?,
            product: Regex::new(r"^PROD\d{6}$")?,
            order: Regex::new(r"^ORD\d{8}$")?,
        })
    }
}

struct ViolationCollector {
    max_examples: usize,
    checks_run: u64,
    total: u64,
    by_code: BTreeMap<String, u64>,
    examples: Vec<Violation>,
}

impl ViolationCollector {
    fn new(max_examples: usize) -> Self {
        Self {
            max_examples,
            checks_run: 0,
            total: 0,
            by_code: BTreeMap::new(),
            examples: Vec::new(),
        }
    }

    /// Count a check and record a violation when `ok` is false.
    fn check(
        &mut self,
        ok: bool,
        code: &str,
        entity: &str,
        row_index: Option<usize>,
        record_id: &str,
        message: impl FnOnce() -> String,
    ) {
        self.checks_run += 1;
        if ok {
            return;
        }

        self.total += 1;
        *self.by_code.entry(code.to_string()).or_insert(0) += 1;
        if self.examples.len() < self.max_examples {
            self.examples.push(Violation {
                code: code.to_string(),
                entity: entity.to_string(),
                message: message(),
                row_index: row_index.map(|idx| idx as u64),
                record_id: Some(record_id.to_string()),
            });
        }
    }

    fn into_report(self, entities: Vec<EntityCount>) -> VerificationReport {
        VerificationReport {
            entities,
            checks_run: self.checks_run,
            violations_total: self.total,
            violations_by_code: self.by_code,
            examples: self.examples,
        }
    }
}

fn check_unique_ids<'a>(
    entity: &str,
    ids: impl Iterator<Item = &'a str>,
    pattern: &Regex,
    collector: &mut ViolationCollector,
) {
    let mut seen = HashSet::new();
    for (idx, id) in ids.enumerate() {
        collector.check(pattern.is_match(id), "invalid_id_format", entity, Some(idx), id, || {
            format!("id '{id}' does not match {}", pattern.as_str())
        });
        collector.check(seen.insert(id), "duplicate_id", entity, Some(idx), id, || {
            format!("id '{id}' appears more than once")
        });
    }
}

fn check_customers(
    customers: &[Customer],
    patterns: &IdPatterns,
    as_of: Option<NaiveDateTime>,
    collector: &mut ViolationCollector,
) {
    let entity = Customer::NAME;
    check_unique_ids(
        entity,
        customers.iter().map(|c| c.customer_id.as_str()),
        &patterns.customer,
        collector,
    );

    let Some(as_of) = as_of else {
        return;
    };
    let latest = as_of.date();
    let earliest = (as_of - Duration::days(SIGNUP_MAX_DAYS_AGO)).date();
    for (idx, customer) in customers.iter().enumerate() {
        let date = customer.signup_date;
        collector.check(
            date >= earliest && date <= latest,
            "signup_date_out_of_range",
            entity,
            Some(idx),
            &customer.customer_id,
            || format!("signup_date {date} outside [{earliest}, {latest}]"),
        );
    }
}

fn check_products(
    products: &[Product],
    patterns: &IdPatterns,
    collector: &mut ViolationCollector,
) {
    let entity = Product::NAME;
    check_unique_ids(
        entity,
        products.iter().map(|p| p.product_id.as_str()),
        &patterns.product,
        collector,
    );

    for (idx, product) in products.iter().enumerate() {
        let price = product.current_price;
        collector.check(
            (MIN_PRICE..MAX_PRICE).contains(&price),
            "price_out_of_range",
            entity,
            Some(idx),
            &product.product_id,
            || format!("current_price {price} outside [{MIN_PRICE}, {MAX_PRICE})"),
        );
        collector.check(
            round_currency(price) == price,
            "price_precision",
            entity,
            Some(idx),
            &product.product_id,
            || format!("current_price {price} has more than 2 fractional digits"),
        );
    }
}

fn check_orders(
    orders: &[Order],
    customers: &[Customer],
    patterns: &IdPatterns,
    as_of: Option<NaiveDateTime>,
    collector: &mut ViolationCollector,
) {
    let entity = Order::NAME;
    check_unique_ids(
        entity,
        orders.iter().map(|o| o.order_id.as_str()),
        &patterns.order,
        collector,
    );

    let customer_ids: HashSet<&str> = customers.iter().map(|c| c.customer_id.as_str()).collect();
    let min_gap = Duration::hours(1);
    let max_gap = Duration::hours(UPDATE_MAX_HOURS);

    for (idx, order) in orders.iter().enumerate() {
        let id = order.order_id.as_str();
        collector.check(
            customer_ids.contains(order.customer_id.as_str()),
            "unknown_customer",
            entity,
            Some(idx),
            id,
            || format!("customer_id '{}' not found", order.customer_id),
        );

        let gap = order.updated_at - order.created_at;
        collector.check(
            gap >= min_gap && gap <= max_gap,
            "update_gap_out_of_range",
            entity,
            Some(idx),
            id,
            || format!("updated_at - created_at is {} minutes", gap.num_minutes()),
        );

        collector.check(
            order.order_date == order.created_at.date(),
            "order_date_mismatch",
            entity,
            Some(idx),
            id,
            || {
                format!(
                    "order_date {} differs from created_at {}",
                    order.order_date, order.created_at
                )
            },
        );

        if let Some(as_of) = as_of {
            let earliest = (as_of - Duration::days(ORDER_MAX_DAYS_AGO)).date();
            collector.check(
                order.created_at <= as_of && order.order_date >= earliest,
                "order_date_out_of_range",
                entity,
                Some(idx),
                id,
                || format!("created_at {} outside [{earliest}, {as_of}]", order.created_at),
            );
        }
    }
}

fn check_order_items(
    items: &[OrderItem],
    orders: &[Order],
    products: &[Product],
    patterns: &IdPatterns,
    collector: &mut ViolationCollector,
) {
    let entity = OrderItem::NAME;
    let prices: HashMap<&str, f64> = products
        .iter()
        .map(|p| (p.product_id.as_str(), p.current_price))
        .collect();
    let mut items_per_order: HashMap<&str, usize> =
        orders.iter().map(|o| (o.order_id.as_str(), 0)).collect();
    let mut seen = HashSet::new();

    for (idx, item) in items.iter().enumerate() {
        let id = item.order_item_id.as_str();

        collector.check(seen.insert(id), "duplicate_id", entity, Some(idx), id, || {
            format!("id '{id}' appears more than once")
        });

        let order_known = match items_per_order.get_mut(item.order_id.as_str()) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        };
        collector.check(order_known, "unknown_order", entity, Some(idx), id, || {
            format!("order_id '{}' not found", item.order_id)
        });

        collector.check(
            has_item_suffix(id, &item.order_id) && patterns.order.is_match(&item.order_id),
            "item_id_mismatch",
            entity,
            Some(idx),
            id,
            || format!("item id '{id}' is not '{}-NN'", item.order_id),
        );

        let product_price = prices.get(item.product_id.as_str()).copied();
        collector.check(
            product_price.is_some(),
            "unknown_product",
            entity,
            Some(idx),
            id,
            || format!("product_id '{}' not found", item.product_id),
        );
        if let Some(price) = product_price {
            collector.check(
                price == item.unit_price,
                "unit_price_mismatch",
                entity,
                Some(idx),
                id,
                || format!("unit_price {} differs from product price {price}", item.unit_price),
            );
        }

        collector.check(
            (1..=MAX_QUANTITY).contains(&item.quantity),
            "quantity_out_of_range",
            entity,
            Some(idx),
            id,
            || format!("quantity {} outside [1, {MAX_QUANTITY}]", item.quantity),
        );

        let expected = round_currency(f64::from(item.quantity) * item.unit_price);
        collector.check(
            expected == item.item_total_amount,
            "item_total_mismatch",
            entity,
            Some(idx),
            id,
            || {
                format!(
                    "item_total_amount {} != round({} * {}, 2) = {expected}",
                    item.item_total_amount, item.quantity, item.unit_price
                )
            },
        );
    }

    for order in orders {
        let id = order.order_id.as_str();
        let count = items_per_order.get(id).copied().unwrap_or(0);
        collector.check(
            (1..=MAX_ITEMS_PER_ORDER).contains(&count),
            "item_count_out_of_range",
            Order::NAME,
            None,
            id,
            || format!("order has {count} item(s), expected 1-{MAX_ITEMS_PER_ORDER}"),
        );
    }
}

/// `item_id` must be `order_id` followed by `-` and a 2-digit 1-based index.
fn has_item_suffix(item_id: &str, order_id: &str) -> bool {
    let Some(suffix) = item_id
        .strip_prefix(order_id)
        .and_then(|rest| rest.strip_prefix('-'))
    else {
        return false;
    };
    match suffix.parse::<usize>() {
        Ok(seq) if suffix.len() == 2 => order_item_id(order_id, seq) == item_id && seq >= 1,
        _ => false,
    }
}
