//! Pure catalog computation: `(catalog, criteria, page) -> (page items, total pages)`.

use crate::criteria::Criteria;
use crate::filter::filter;
use crate::pagination::{PageSlice, slice};
use crate::product::Product;
use crate::sort::sort;
use crate::store::Catalog;

/// Filtered and sorted view of the catalog.
pub fn compute<'a>(catalog: &'a Catalog, criteria: &Criteria) -> Vec<&'a Product> {
    let filtered = filter(catalog, criteria);
    sort(&filtered, criteria.sort)
}

/// One page of the computed view.
pub fn query<'a>(
    catalog: &'a Catalog,
    criteria: &Criteria,
    page: usize,
    per_page: usize,
) -> PageSlice<&'a Product> {
    slice(&compute(catalog, criteria), page, per_page)
}
