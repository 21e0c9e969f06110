use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::{Value, json};
use tempfile::tempdir;

use salesdash::cli::run_salesdash;
use salesdash::{DashboardQuery, EngineError, NamedBucket, RecordStore, SalesEngine};

fn dataset_rows() -> Value {
    json!([
        {
            "Row ID": 1,
            "Order ID": "CA-2016-152156",
            "Customer ID": "CG-12520",
            "Customer Name": "Claire Gute",
            "State": "Kentucky",
            "City": "Henderson",
            "Product ID": "FUR-BO-10001798",
            "Product Name": "Bush Somerset Collection Bookcase",
            "Category": "Furniture",
            "Sub-Category": "Bookcases",
            "Segment": "Consumer",
            "Order Date": "2016-11-08",
            "Sales": 261.96,
            "Quantity": 2,
            "Discount": 0,
            "Profit": 41.9136
        },
        {
            "Row ID": 2,
            "Order ID": "CA-2016-152156",
            "Customer ID": "CG-12520",
            "Customer Name": "Claire Gute",
            "State": "Kentucky",
            "City": "Henderson",
            "Product ID": "FUR-CH-10000454",
            "Product Name": "Hon Deluxe Fabric Upholstered Stacking Chairs, Rounded Back",
            "Category": "Furniture",
            "Sub-Category": "Chairs",
            "Segment": "Consumer",
            "Order Date": "2016-11-08",
            "Sales": 731.94,
            "Quantity": 3,
            "Discount": 0,
            "Profit": 219.582
        },
        {
            "Row ID": 3,
            "Order ID": "CA-2016-138688",
            "Customer ID": "DV-13045",
            "Customer Name": "Darrin Van Huff",
            "State": "California",
            "City": "Los Angeles",
            "Product ID": "OFF-LA-10000240",
            "Product Name": "Self-Adhesive Address Labels for Typewriters by Universal",
            "Category": "Office Supplies",
            "Sub-Category": "Labels",
            "Segment": "Corporate",
            "Order Date": "2016-06-12",
            "Sales": 14.62,
            "Quantity": 2,
            "Discount": 0,
            "Profit": 6.8714
        }
    ])
}

fn write_dataset(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("sales.json");
    fs::write(&path, serde_json::to_vec(&dataset_rows()).unwrap()).unwrap();
    path
}

fn run(args: &[&str]) -> (u16, Value) {
    let mut out = Vec::new();
    let status = run_salesdash(args.iter().map(|arg| arg.to_string()), &mut out).unwrap();
    let value: Value = serde_json::from_slice(&out).unwrap();
    (status, value)
}

#[test]
fn loads_dataset_file() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path());
    let store = RecordStore::load(&path).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.find_customer_name("DV-13045"), Some("Darrin Van Huff"));

    let engine = SalesEngine::new(store);
    assert_eq!(engine.list_regions(), vec!["California", "Kentucky"]);
}

#[test]
fn seventeen_digit_sales_load_without_drift() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("precise.json");
    fs::write(
        &path,
        r#"[{
            "Customer ID": "C1", "Customer Name": "Ada", "State": "Ohio",
            "City": "Akron", "Product ID": "P-1", "Product Name": "Lamp",
            "Category": "Furniture", "Sub-Category": "Furnishings",
            "Segment": "Consumer", "Order Date": "2017-03-01",
            "Sales": 118.41499999999999, "Quantity": 1, "Discount": 0,
            "Profit": 1.5
        }]"#,
    )
    .unwrap();

    let store = RecordStore::load(&path).unwrap();
    assert_eq!(store.records()[0].sales, 118.41499999999999);
    assert_ne!(store.records()[0].sales, 118.415);

    let query = DashboardQuery::new(
        "C1",
        "Ohio",
        NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2017, 12, 31).unwrap(),
    );
    let report = SalesEngine::new(store).dashboard(&query);
    assert_eq!(report.total_sales_by_city, vec![NamedBucket::new("Akron", 118.41)]);
    assert_eq!(report.total_sales_by_product_name[0].value, 118.41499999999999);
}

#[test]
fn malformed_order_date_is_a_dataset_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    let mut rows = dataset_rows();
    rows[0]["Order Date"] = json!("11/8/2016");
    fs::write(&path, serde_json::to_vec(&rows).unwrap()).unwrap();

    let err = RecordStore::load(&path).unwrap_err();
    assert!(matches!(err, EngineError::Dataset { .. }), "{err:?}");
    assert_eq!(err.status_code(), 500);
}

#[test]
fn missing_dataset_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = RecordStore::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));
}

#[test]
fn cli_prints_regions_envelope() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path());
    let dataset = path.to_string_lossy().to_string();

    let (status, value) = run(&["--dataset", &dataset, "regions"]);
    assert_eq!(status, 200);
    assert_eq!(value, json!({"status": 200, "data": ["California", "Kentucky"]}));
}

#[test]
fn cli_reports_date_range_and_not_found() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path());
    let dataset = path.to_string_lossy().to_string();

    let (status, value) = run(&["dates", "Kentucky", "--dataset", &dataset]);
    assert_eq!(status, 200);
    assert_eq!(value["data"]["minDate"], "2016-11-08");
    assert_eq!(value["data"]["maxDate"], "2016-11-08");

    let (status, value) = run(&["dates", "Oregon", "--dataset", &dataset]);
    assert_eq!(status, 404);
    assert_eq!(value["data"]["message"], "no records for region 'Oregon'");
}

#[test]
fn cli_dashboard_rounds_city_buckets() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path());
    let dataset = path.to_string_lossy().to_string();

    let (status, value) = run(&[
        "--dataset",
        &dataset,
        "dashboard",
        "--customer-id",
        "CG-12520",
        "--state",
        "Kentucky",
        "--start-date",
        "2016-01-01",
        "--end-date",
        "2016-12-31",
    ]);
    assert_eq!(status, 200);
    let data = &value["data"];
    assert_eq!(data["customerName"], "Claire Gute");
    assert_eq!(data["totalSalesByCity"], json!([{"name": "Henderson", "value": 993.9}]));
    assert_eq!(data["filteredSales"]["totalQuantity"], 5.0);
    assert_eq!(
        data["totalSalesBySubCategory"],
        json!([
            {"name": "Bookcases", "value": 261.96},
            {"name": "Chairs", "value": 731.94}
        ])
    );
}

#[test]
fn cli_dashboard_rejects_bad_dates() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path());
    let dataset = path.to_string_lossy().to_string();

    let (status, value) = run(&[
        "--dataset",
        &dataset,
        "dashboard",
        "--customer-id",
        "CG-12520",
        "--state",
        "Kentucky",
        "--start-date",
        "2016-1-1",
        "--end-date",
        "2016-12-31",
    ]);
    assert_eq!(status, 400);
    assert_eq!(
        value["data"]["message"],
        "Invalid date format. Please use YYYY-MM-DD format."
    );
}

#[test]
fn cli_reports_unresolvable_dataset() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.json").to_string_lossy().to_string();
    let (status, value) = run(&["--dataset", &missing, "regions"]);
    assert_eq!(status, 500);
    assert!(
        value["data"]["message"]
            .as_str()
            .unwrap()
            .starts_with("configuration error")
    );
}
