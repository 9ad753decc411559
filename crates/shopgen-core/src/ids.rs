//! Identifier and derived-field formatting.

/// Largest sequence that fits the 6-digit customer id.
pub const MAX_CUSTOMERS: usize = 999_999;
/// Largest sequence that fits the 6-digit product id.
pub const MAX_PRODUCTS: usize = 999_999;
/// Largest sequence that fits the 8-digit order id.
pub const MAX_ORDERS: usize = 99_999_999;
/// Items per order are capped well under the 2-digit item suffix.
pub const MAX_ITEMS_PER_ORDER: usize = 5;

pub fn customer_id(seq: usize) -> String {
    format!("CUST{seq:06}")
}

pub fn product_id(seq: usize) -> String {
    format!("PROD{seq:06}")
}

pub fn order_id(seq: usize) -> String {
    format!("ORD{seq:08}")
}

/// Item ids are only unique within an order; the order id prefix makes them
/// globally unique.
pub fn order_item_id(order_id: &str, item_seq: usize) -> String {
    format!("{order_id}-{item_seq:02}")
}

pub fn customer_email(seq: usize) -> String {
    format!("customer{seq}@example.com")
}

pub fn product_name(category: &str, seq: usize) -> String {
    format!("{category} Item {seq}")
}

pub fn brand_name(number: u32) -> String {
    format!("Brand {number}")
}

/// Round to cents, halves away from zero.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_zero_padded() {
        assert_eq!(customer_id(1), "CUST000001");
        assert_eq!(product_id(42), "PROD000042");
        assert_eq!(order_id(7), "ORD00000007");
        assert_eq!(order_id(MAX_ORDERS), "ORD99999999");
    }

    #[test]
    fn item_id_appends_two_digit_suffix() {
        assert_eq!(order_item_id("ORD00000012", 3), "ORD00000012-03");
    }

    #[test]
    fn derived_names() {
        assert_eq!(customer_email(15), "customer15@example.com");
        assert_eq!(product_name("Home & Garden", 9), "Home & Garden Item 9");
        assert_eq!(brand_name(20), "Brand 20");
    }

    #[test]
    fn round_currency_keeps_two_digits() {
        assert_eq!(round_currency(12.344), 12.34);
        assert_eq!(round_currency(12.346), 12.35);
        assert_eq!(round_currency(3.0 * 19.99), 59.97);
        assert_eq!(round_currency(10.0), 10.0);
    }
}
