use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::types::{BucketName, CustomerId, ProductId, RegionId};

/// One historical sale, as loaded from the dataset.
///
/// Records are never mutated after load. Column names follow the dataset file;
/// extra columns are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Customer key (`Customer ID`).
    #[serde(rename = "Customer ID")]
    pub customer_id: CustomerId,
    /// Customer display name.
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    /// Region key.
    #[serde(rename = "State")]
    pub state: RegionId,
    /// City the order shipped to.
    #[serde(rename = "City")]
    pub city: String,
    /// Identity of the product; always maps to the same `product_name`.
    #[serde(rename = "Product ID")]
    pub product_id: ProductId,
    /// Product display name; not unique across ids.
    #[serde(rename = "Product Name")]
    pub product_name: String,
    /// Top-level product category.
    #[serde(rename = "Category")]
    pub category: String,
    /// Product sub-category.
    #[serde(rename = "Sub-Category")]
    pub sub_category: String,
    /// Customer segment.
    #[serde(rename = "Segment")]
    pub segment: String,
    /// Calendar date of the order, no time component.
    #[serde(rename = "Order Date")]
    pub order_date: NaiveDate,
    /// Sale amount.
    #[serde(rename = "Sales")]
    pub sales: f64,
    /// Units sold; may be fractional.
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    /// Discount applied to the sale.
    #[serde(rename = "Discount")]
    pub discount: f64,
    /// Profit on the sale; negative for a loss.
    #[serde(rename = "Profit")]
    pub profit: f64,
}

/// String field selector used by distinct extraction and generic grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupField {
    /// Region (`State`).
    State,
    /// `City`.
    City,
    /// `Category`.
    Category,
    /// `Sub-Category`.
    SubCategory,
    /// `Segment`.
    Segment,
    /// `Customer ID`.
    CustomerId,
}

impl GroupField {
    /// Borrow the selected value from a record.
    pub fn value_of(self, record: &TransactionRecord) -> &str {
        match self {
            Self::State => &record.state,
            Self::City => &record.city,
            Self::Category => &record.category,
            Self::SubCategory => &record.sub_category,
            Self::Segment => &record.segment,
            Self::CustomerId => &record.customer_id,
        }
    }
}

/// One group's aggregate sum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedBucket {
    /// Group key as it appears in the records.
    pub name: BucketName,
    /// Summed sales for the group.
    pub value: f64,
}

impl NamedBucket {
    /// Create a bucket from a name and value.
    pub fn new(name: impl Into<BucketName>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Unrounded scalar sums over a record subset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotals {
    /// Sum of `sales`.
    pub total_sales: f64,
    /// Sum of `quantity`.
    pub total_quantity: f64,
    /// Sum of `discount`.
    pub total_discount: f64,
    /// Sum of `profit`.
    pub total_profit: f64,
}

impl SalesTotals {
    /// Sum the four measures over `records`; an empty subset yields all zeros.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a TransactionRecord>) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |mut totals, record| {
                totals.total_sales += record.sales;
                totals.total_quantity += record.quantity;
                totals.total_discount += record.discount;
                totals.total_profit += record.profit;
                totals
            })
    }
}

/// Earliest and latest order date for a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// Earliest order date.
    pub min_date: NaiveDate,
    /// Latest order date.
    pub max_date: NaiveDate,
}

/// Validated dashboard query. Bounds are inclusive; `start_date > end_date` is legal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardQuery {
    /// Customer to report on.
    pub customer_id: CustomerId,
    /// Region the records must belong to.
    pub state: RegionId,
    /// First included order date.
    pub start_date: NaiveDate,
    /// Last included order date.
    pub end_date: NaiveDate,
}

impl DashboardQuery {
    /// Build a query from already-valid parts.
    pub fn new(
        customer_id: impl Into<CustomerId>,
        state: impl Into<RegionId>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            state: state.into(),
            start_date,
            end_date,
        }
    }

    /// True when `record` belongs to this customer and region and falls inside the window.
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        record.customer_id == self.customer_id
            && record.state == self.state
            && self.start_date <= record.order_date
            && record.order_date <= self.end_date
    }
}

/// Composite dashboard result for one customer, region, and window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// Name of the customer anywhere in the store; empty when unknown.
    pub customer_name: String,
    /// Scalar totals over the filtered subset.
    #[serde(rename = "filteredSales")]
    pub totals: SalesTotals,
    /// Sales per city, rounded incrementally.
    pub total_sales_by_city: Vec<NamedBucket>,
    /// Keyed by product id, labelled by product name.
    pub total_sales_by_product_name: Vec<NamedBucket>,
    /// Sales per sub-category, rounded incrementally.
    pub total_sales_by_sub_category: Vec<NamedBucket>,
    /// Sales per category, rounded incrementally.
    pub total_sales_by_category: Vec<NamedBucket>,
    /// Sales per segment, rounded incrementally.
    pub total_sales_by_segment: Vec<NamedBucket>,
}

impl DashboardReport {
    /// True when the filtered subset contained no records.
    pub fn is_empty(&self) -> bool {
        self.total_sales_by_city.is_empty() && self.total_sales_by_product_name.is_empty()
    }
}
