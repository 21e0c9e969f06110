//! Grouped-sum strategies.
//!
//! Two strategies exist and are kept apart on purpose because they produce
//! different values for the same input:
//! - [`sum_sales_by_field`] keys by a field's raw value and rounds the running
//!   sum to two decimals after every record.
//! - [`sum_sales_by_product`] keys by product id, labels buckets with the
//!   product name, and never rounds.
//!
//! Both emit buckets sorted by name with [`crate::collation::locale_cmp`].

use indexmap::IndexMap;

use crate::collation::sort_by_locale_key;
use crate::constants::aggregate::BUCKET_DECIMAL_PLACES;
use crate::data::{GroupField, NamedBucket, TransactionRecord};
use crate::rounding::round_to_places;
use crate::types::{BucketName, ProductId};

/// Sum `sales` per distinct `field` value with incremental two-decimal rounding.
pub fn sum_sales_by_field<'a, I>(records: I, field: GroupField) -> Vec<NamedBucket>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut sums: IndexMap<&'a str, f64> = IndexMap::new();
    for record in records {
        let running = sums.entry(field.value_of(record)).or_insert(0.0);
        *running = round_to_places(*running + record.sales, BUCKET_DECIMAL_PLACES);
    }
    let mut buckets: Vec<NamedBucket> = sums
        .into_iter()
        .map(|(name, value)| NamedBucket::new(name, value))
        .collect();
    sort_by_locale_key(&mut buckets, |bucket| bucket.name.as_str());
    buckets
}

/// Sum unrounded `sales` per product id, labelled with the product name.
///
/// Buckets are sorted by display name; products sharing a name keep first-seen order.
pub fn sum_sales_by_product<'a, I>(records: I) -> Vec<NamedBucket>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut sums: IndexMap<&'a ProductId, (&'a BucketName, f64)> = IndexMap::new();
    for record in records {
        let entry = sums
            .entry(&record.product_id)
            .or_insert((&record.product_name, 0.0));
        entry.1 += record.sales;
    }
    let mut buckets: Vec<NamedBucket> = sums
        .into_values()
        .map(|(name, value)| NamedBucket::new(name.as_str(), value))
        .collect();
    sort_by_locale_key(&mut buckets, |bucket| bucket.name.as_str());
    buckets
}
