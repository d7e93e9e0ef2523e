//! Sort step applied to the filtered set.

use std::cmp::Ordering;

use crate::criteria::SortMode;
use crate::product::Product;

/// Compare two optional prices; products without a numeric price go last.
fn cmp_price(a: Option<f64>, b: Option<f64>, mode: SortMode) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match mode {
            SortMode::PriceAsc => a.total_cmp(&b),
            SortMode::PriceDesc => b.total_cmp(&a),
            SortMode::Default => Ordering::Equal,
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order `products` by `mode` without touching the input.
///
/// The sort is stable: equal prices keep their filtered order, and
/// `SortMode::Default` returns the input order unchanged.
pub fn sort<'a>(products: &[&'a Product], mode: SortMode) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    if mode != SortMode::Default {
        sorted.sort_by(|a, b| cmp_price(a.price.amount(), b.price.amount(), mode));
    }
    sorted
}
