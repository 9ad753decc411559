use chrono::{Duration, NaiveDateTime};
use rand::{Rng, RngCore};

use shopgen_core::reference::{MAX_QUANTITY, ORDER_MAX_DAYS_AGO, UPDATE_MAX_HOURS};
use shopgen_core::{
    Customer, MAX_ITEMS_PER_ORDER, Order, OrderItem, OrderStatus, PaymentMethod, Product,
    ShipmentStatus, order_id, order_item_id, round_currency,
};

use crate::errors::GenerationError;

use super::pick;

/// Generate `count` orders and their 1-5 items each.
///
/// Customers and products are picked uniformly with replacement. Both pools
/// must be non-empty whenever `count > 0`.
pub fn generate_orders(
    count: usize,
    customers: &[Customer],
    products: &[Product],
    rng: &mut dyn RngCore,
    now: NaiveDateTime,
) -> Result<(Vec<Order>, Vec<OrderItem>), GenerationError> {
    if count == 0 {
        return Ok((Vec::new(), Vec::new()));
    }
    if customers.is_empty() {
        return Err(GenerationError::InvalidConfig(
            "cannot generate orders without customers".to_string(),
        ));
    }
    if products.is_empty() {
        return Err(GenerationError::InvalidConfig(
            "cannot generate orders without products".to_string(),
        ));
    }

    let mut orders = Vec::with_capacity(count);
    let mut order_items = Vec::with_capacity(count * 3);

    for seq in 1..=count {
        let days_ago = rng.random_range(0..=ORDER_MAX_DAYS_AGO);
        let created_at = now - Duration::days(days_ago);
        let customer = pick(customers, rng);
        let order_status = *pick(&OrderStatus::ALL, rng);
        let payment_method = *pick(&PaymentMethod::ALL, rng);
        let shipment_status = *pick(&ShipmentStatus::ALL, rng);
        let updated_at = created_at + Duration::hours(rng.random_range(1..=UPDATE_MAX_HOURS));

        let order = Order {
            order_id: order_id(seq),
            customer_id: customer.customer_id.clone(),
            order_date: created_at.date(),
            order_status,
            payment_method,
            shipment_status,
            created_at,
            updated_at,
        };

        let item_count = rng.random_range(1..=MAX_ITEMS_PER_ORDER);
        for item_seq in 1..=item_count {
            order_items.push(generate_item(&order.order_id, item_seq, products, rng));
        }
        orders.push(order);
    }

    Ok((orders, order_items))
}

fn generate_item(
    order_id: &str,
    item_seq: usize,
    products: &[Product],
    rng: &mut dyn RngCore,
) -> OrderItem {
    let product = pick(products, rng);
    let quantity = rng.random_range(1..=MAX_QUANTITY);
    let unit_price = product.current_price;

    OrderItem {
        order_item_id: order_item_id(order_id, item_seq),
        order_id: order_id.to_string(),
        product_id: product.product_id.clone(),
        quantity,
        unit_price,
        item_total_amount: round_currency(f64::from(quantity) * unit_price),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::generators::{generate_customers, generate_products};

    use super::*;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .and_then(|date| date.and_hms_opt(8, 0, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn empty_product_pool_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let customers = generate_customers(2, &mut rng, fixed_now());

        let result = generate_orders(1, &customers, &[], &mut rng, fixed_now());
        assert!(matches!(result, Err(GenerationError::InvalidConfig(_))));
    }

    #[test]
    fn empty_customer_pool_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let products = generate_products(2, &mut rng);

        let result = generate_orders(1, &[], &products, &mut rng, fixed_now());
        assert!(matches!(result, Err(GenerationError::InvalidConfig(_))));
    }

    #[test]
    fn zero_orders_ignore_empty_pools() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (orders, items) =
            generate_orders(0, &[], &[], &mut rng, fixed_now()).expect("no orders requested");
        assert!(orders.is_empty());
        assert!(items.is_empty());
    }

    #[test]
    fn items_copy_current_product_price() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let customers = generate_customers(4, &mut rng, fixed_now());
        let products = generate_products(3, &mut rng);

        let (_, items) =
            generate_orders(20, &customers, &products, &mut rng, fixed_now()).expect("orders");
        for item in &items {
            let product = products
                .iter()
                .find(|p| p.product_id == item.product_id)
                .expect("known product");
            assert_eq!(item.unit_price, product.current_price);
        }
    }
}
