//! Core contracts shared across shopgen crates.
//!
//! Defines the entity record types, the fixed reference pools used as
//! sampling sources, identifier formatting, and the on-disk dataset layout.

pub mod entities;
pub mod ids;
pub mod layout;
pub mod reference;

pub use entities::{
    Customer, CustomerStatus, Entity, Order, OrderItem, OrderStatus, PaymentMethod, Product,
    ShipmentStatus,
};
pub use ids::{
    MAX_CUSTOMERS, MAX_ITEMS_PER_ORDER, MAX_ORDERS, MAX_PRODUCTS, brand_name, customer_email,
    customer_id, order_id, order_item_id, product_id, product_name, round_currency,
};
pub use layout::{CUSTOMERS_CSV, ORDER_ITEMS_CSV, ORDERS_CSV, PRODUCTS_CSV};
