use chrono::{Duration, NaiveDateTime};
use rand::{Rng, RngCore};

use shopgen_core::reference::{COUNTRIES, FIRST_NAMES, LAST_NAMES, SIGNUP_MAX_DAYS_AGO};
use shopgen_core::{Customer, CustomerStatus, customer_email, customer_id};

use super::pick;

/// Generate `count` customers with ids `CUST000001..`.
///
/// Sign-up dates fall 1 to 730 days before `now`.
pub fn generate_customers(
    count: usize,
    rng: &mut dyn RngCore,
    now: NaiveDateTime,
) -> Vec<Customer> {
    (1..=count)
        .map(|seq| {
            let first_name = pick(&FIRST_NAMES, rng).to_string();
            let last_name = pick(&LAST_NAMES, rng).to_string();
            let country = pick(&COUNTRIES, rng).to_string();
            let days_ago = rng.random_range(1..=SIGNUP_MAX_DAYS_AGO);
            let signup_date = (now - Duration::days(days_ago)).date();
            let customer_status = *pick(&CustomerStatus::ALL, rng);

            Customer {
                customer_id: customer_id(seq),
                first_name,
                last_name,
                email: customer_email(seq),
                country,
                signup_date,
                customer_status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .and_then(|date| date.and_hms_opt(12, 30, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let customers = generate_customers(3, &mut rng, fixed_now());

        let ids: Vec<&str> = customers.iter().map(|c| c.customer_id.as_str()).collect();
        assert_eq!(ids, ["CUST000001", "CUST000002", "CUST000003"]);
        assert_eq!(customers[1].email, "customer2@example.com");
    }

    #[test]
    fn zero_count_yields_empty_collection() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(generate_customers(0, &mut rng, fixed_now()).is_empty());
    }
}
