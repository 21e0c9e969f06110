//! Aggregation engine over a [`RecordStore`].
//!
//! Every operation is a pure linear scan of the borrowed store. Nothing here
//! keeps state between calls, so one store can serve any number of concurrent
//! queries.

use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::collation::sort_by_locale_key;
use crate::data::{
    DashboardQuery, DashboardReport, DateRange, GroupField, SalesTotals, TransactionRecord,
};
use crate::errors::EngineError;
use crate::store::RecordStore;
use crate::types::RegionId;

/// Grouped-sum strategies used by the dashboard.
pub mod grouping;

pub use grouping::{sum_sales_by_field, sum_sales_by_product};

/// Distinct values of `field` across the store, in locale order.
pub fn distinct_values(store: &RecordStore, field: GroupField) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for record in store {
        seen.insert(field.value_of(record));
    }
    let mut values: Vec<String> = seen.into_iter().map(str::to_string).collect();
    sort_by_locale_key(&mut values, |value| value.as_str());
    values
}

/// Every region present in the store, in locale order.
pub fn list_regions(store: &RecordStore) -> Vec<RegionId> {
    distinct_values(store, GroupField::State)
}

/// Earliest and latest order date among records for `region`.
///
/// A region without records is [`EngineError::RegionNotFound`].
pub fn region_date_range(store: &RecordStore, region: &str) -> Result<DateRange, EngineError> {
    let mut dates = store
        .iter()
        .filter(|record| record.state == region)
        .map(|record| record.order_date);
    let Some(first) = dates.next() else {
        warn!(region, "date range requested for region without records");
        return Err(EngineError::RegionNotFound {
            region: region.to_string(),
        });
    };
    let (min_date, max_date) = dates.fold((first, first), |(min, max), date| {
        (min.min(date), max.max(date))
    });
    Ok(DateRange { min_date, max_date })
}

/// Records matching the customer, region, and inclusive date window of `query`.
pub fn filter_records<'a>(
    store: &'a RecordStore,
    query: &DashboardQuery,
) -> Vec<&'a TransactionRecord> {
    store.iter().filter(|record| query.matches(record)).collect()
}

/// Build the dashboard for one customer, region, and window.
///
/// The customer name comes from the whole store; everything else from the
/// filtered subset. An empty subset is a normal result.
pub fn dashboard(store: &RecordStore, query: &DashboardQuery) -> DashboardReport {
    let subset = filter_records(store, query);
    debug!(
        customer_id = %query.customer_id,
        state = %query.state,
        start = %query.start_date,
        end = %query.end_date,
        matched = subset.len(),
        "dashboard query"
    );
    let customer_name = store
        .find_customer_name(&query.customer_id)
        .unwrap_or_default()
        .to_string();
    let by_field = |field| sum_sales_by_field(subset.iter().copied(), field);
    DashboardReport {
        customer_name,
        totals: SalesTotals::from_records(subset.iter().copied()),
        total_sales_by_city: by_field(GroupField::City),
        total_sales_by_product_name: sum_sales_by_product(subset.iter().copied()),
        total_sales_by_sub_category: by_field(GroupField::SubCategory),
        total_sales_by_category: by_field(GroupField::Category),
        total_sales_by_segment: by_field(GroupField::Segment),
    }
}

/// Query handle that owns a shared store snapshot.
#[derive(Clone, Debug, Default)]
pub struct SalesEngine {
    store: RecordStore,
}

impl SalesEngine {
    /// Wrap a loaded store.
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// See [`list_regions`].
    pub fn list_regions(&self) -> Vec<RegionId> {
        list_regions(&self.store)
    }

    /// See [`region_date_range`].
    pub fn region_date_range(&self, region: &str) -> Result<DateRange, EngineError> {
        region_date_range(&self.store, region)
    }

    /// See [`dashboard`].
    pub fn dashboard(&self, query: &DashboardQuery) -> DashboardReport {
        dashboard(&self.store, query)
    }
}
