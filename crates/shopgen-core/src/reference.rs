//! Fixed sample pools used as uniform sampling sources.

pub const FIRST_NAMES: [&str; 8] = [
    "John", "Jane", "Michael", "Sarah", "David", "Emily", "Robert", "Lisa",
];

pub const LAST_NAMES: [&str; 8] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
];

pub const COUNTRIES: [&str; 8] = [
    "USA",
    "Canada",
    "UK",
    "Germany",
    "France",
    "Spain",
    "Italy",
    "Australia",
];

pub const CATEGORIES: [&str; 6] = [
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Sports",
    "Books",
    "Toys",
];

/// Synthetic brands are numbered `1..=BRAND_COUNT`.
pub const BRAND_COUNT: u32 = 20;

/// Product prices are drawn from `[MIN_PRICE, MAX_PRICE)`.
pub const MIN_PRICE: f64 = 10.0;
pub const MAX_PRICE: f64 = 500.0;

pub const SIGNUP_MAX_DAYS_AGO: i64 = 730;
pub const ORDER_MAX_DAYS_AGO: i64 = 365;
pub const UPDATE_MAX_HOURS: i64 = 48;
pub const MAX_QUANTITY: u32 = 3;
