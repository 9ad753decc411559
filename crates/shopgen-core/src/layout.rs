//! Relative paths of the CSV files making up a dataset.

pub const CUSTOMERS_CSV: &str = "customers/customers.csv";
pub const PRODUCTS_CSV: &str = "products/products.csv";
pub const ORDERS_CSV: &str = "orders/orders.csv";
pub const ORDER_ITEMS_CSV: &str = "order_items/order_items.csv";
