//! Record generators for each entity.
//!
//! Every generator takes its random source and the reference "now"
//! explicitly, so a seeded RNG and a fixed timestamp make runs reproducible.

use chrono::NaiveDateTime;
use rand::{Rng, RngCore};

use shopgen_core::{Customer, Order, OrderItem, Product};

use crate::errors::GenerationError;
use crate::model::GenerateOptions;

pub mod customers;
pub mod orders;
pub mod products;

pub use customers::generate_customers;
pub use orders::generate_orders;
pub use products::generate_products;

/// All records of one generation run.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
}

/// Generate every entity collection for the given options.
pub fn generate_dataset(
    options: &GenerateOptions,
    rng: &mut dyn RngCore,
    now: NaiveDateTime,
) -> Result<Dataset, GenerationError> {
    let customers = generate_customers(options.customer_count, rng, now);
    let products = generate_products(options.product_count, rng);
    let (orders, order_items) =
        generate_orders(options.order_count, &customers, &products, rng, now)?;

    Ok(Dataset {
        customers,
        products,
        orders,
        order_items,
    })
}

/// Uniform pick with replacement. `values` must not be empty.
pub(crate) fn pick<'a, T>(values: &'a [T], rng: &mut dyn RngCore) -> &'a T {
    let idx = rng.random_range(0..values.len());
    &values[idx]
}
