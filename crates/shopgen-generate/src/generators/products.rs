use rand::{Rng, RngCore};

use shopgen_core::reference::{BRAND_COUNT, CATEGORIES, MAX_PRICE, MIN_PRICE};
use shopgen_core::{Product, brand_name, product_id, product_name, round_currency};

use super::pick;

/// Generate `count` products with ids `PROD000001..`.
///
/// The name is derived from the category and the sequence, not drawn
/// independently.
pub fn generate_products(count: usize, rng: &mut dyn RngCore) -> Vec<Product> {
    (1..=count)
        .map(|seq| {
            let category = *pick(&CATEGORIES, rng);
            let brand = brand_name(rng.random_range(1..=BRAND_COUNT));

            Product {
                product_id: product_id(seq),
                product_name: product_name(category, seq),
                category: category.to_string(),
                brand,
                current_price: random_price(rng),
            }
        })
        .collect()
}

fn random_price(rng: &mut dyn RngCore) -> f64 {
    let price = round_currency(rng.random_range(MIN_PRICE..MAX_PRICE));
    // rounding can reach the exclusive upper bound
    if price >= MAX_PRICE {
        round_currency(MAX_PRICE - 0.01)
    } else {
        price
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn name_is_derived_from_category() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for product in generate_products(25, &mut rng) {
            let seq: usize = product.product_id["PROD".len()..]
                .parse()
                .expect("numeric suffix");
            assert_eq!(
                product.product_name,
                format!("{} Item {}", product.category, seq)
            );
        }
    }

    #[test]
    fn brands_stay_within_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for product in generate_products(200, &mut rng) {
            let number: u32 = product.brand["Brand ".len()..]
                .parse()
                .expect("brand number");
            assert!((1..=BRAND_COUNT).contains(&number));
        }
    }
}
