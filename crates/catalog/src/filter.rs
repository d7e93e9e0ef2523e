//! Filter predicates over catalog records.
//!
//! Every rule is an AND of active constraints; inside a rule the requested
//! tokens are OR-ed. Text comparisons use a bidirectional, case-sensitive
//! substring test so that tokens coarser or finer than the stored value
//! still match.

use crate::criteria::{Criteria, VolumeRange};
use crate::product::Product;

/// Unit marker stripped from volume text before parsing.
const VOLUME_UNIT: &str = "л";

/// `a` contains `b` or `b` contains `a`.
///
/// An empty operand is contained in everything, so an empty field value or
/// an empty token always matches.
pub fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Split a `;`-separated field into trimmed segments. Empty segments are
/// kept: `"мед;"` yields `"мед"` and `""`.
pub fn segments(value: &str) -> impl Iterator<Item = &str> {
    value.split(';').map(str::trim)
}

/// Parse a textual volume such as `"5 л"`, `"0,5"` or `"1.5л"`.
///
/// Reads the leading decimal number after mapping the first decimal comma
/// to a point; trailing text (the unit marker) is ignored. Returns `None`
/// when no number can be read.
pub fn parse_volume(text: &str) -> Option<f64> {
    let normalized = text.trim().replacen(',', ".", 1);
    let normalized = normalized.strip_suffix(VOLUME_UNIT).unwrap_or(&normalized).trim_end();
    leading_number(normalized)
}

fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn matches_type(product: &Product, criteria: &Criteria) -> bool {
    criteria.types.is_empty() || criteria.types.contains(&product.product_type)
}

fn matches_neck_token(product: &Product, token: &str) -> bool {
    let combined = format!("{} {}", product.neck, product.standard);
    if contains_either(combined.trim(), token) {
        return true;
    }

    let neck = product.neck.as_str();
    if !neck.is_empty() && (neck == token || neck.contains(token)) {
        return true;
    }

    neck.contains(';') && segments(neck).any(|segment| contains_either(segment, token))
}

fn matches_neck(product: &Product, criteria: &Criteria) -> bool {
    criteria.necks.is_empty()
        || criteria
            .necks
            .iter()
            .any(|token| matches_neck_token(product, token))
}

fn matches_purpose(product: &Product, criteria: &Criteria) -> bool {
    criteria.purposes.is_empty()
        || criteria.purposes.iter().any(|token| {
            segments(&product.purpose).any(|segment| contains_either(segment, token))
        })
}

fn matches_volume(product: &Product, criteria: &Criteria) -> bool {
    // Volume-less items (caps, preforms) only fail when range tokens are
    // selected; the from/to bounds apply to products that have a volume.
    let Some(text) = product.volume() else {
        return criteria.volumes.is_empty();
    };

    if !criteria.has_volume_filter() {
        return true;
    }

    let Some(volume) = parse_volume(text) else {
        return false;
    };

    if !criteria.volumes.is_empty()
        && !criteria
            .volumes
            .iter()
            .filter_map(|token| VolumeRange::parse(token))
            .any(|range| range.contains(volume))
    {
        return false;
    }

    criteria.volume_from.is_none_or(|from| volume >= from)
        && criteria.volume_to.is_none_or(|to| volume <= to)
}

/// Whether `product` satisfies every active constraint in `criteria`.
pub fn matches(product: &Product, criteria: &Criteria) -> bool {
    matches_type(product, criteria)
        && matches_neck(product, criteria)
        && matches_purpose(product, criteria)
        && matches_volume(product, criteria)
}

/// Stable filter: the matching products in their original relative order.
pub fn filter<'a, I>(products: I, criteria: &Criteria) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|product| matches(product, criteria))
        .collect()
}
