//! Scripted end-to-end sessions against the shell.

use chrono::NaiveDate;
use freshmart_core::FixedClock;
use freshmart_desktop::{DesktopConfig, OutputFormat, Shell};
use freshmart_inventory::InventoryStore;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn run_session(
    script: &str,
    config: DesktopConfig,
) -> (String, InventoryStore<FixedClock>) {
    let store = InventoryStore::seeded(FixedClock::new(today()));
    let mut shell = Shell::new(script.as_bytes(), Vec::new(), store, config);
    shell.run().expect("session should not hit I/O errors");

    let store = shell.store().clone();
    let out = String::from_utf8(shell.into_output()).expect("utf-8 output");
    (out, store)
}

#[test]
fn clerk_adds_restocks_and_reviews_reports() {
    let script = "\
add
Yogurt
Dairy
2026-10-20
4
ABC Dairy
update
milk
5
low-stock
expiring
quit
";
    let (out, store) = run_session(script, DesktopConfig::default());

    assert!(out.contains("[Success] Product added successfully!"));
    assert!(out.contains("[Success] Stock quantity updated successfully!"));

    let names: Vec<&str> = store.find_low_stock(15).iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Milk", "Chicken", "Yogurt"]);

    let expiring: Vec<&str> = store.find_expiring(7).iter().map(|p| p.name()).collect();
    assert_eq!(expiring, ["Milk", "Bread", "Chicken", "Yogurt"]);

    let report = out
        .rsplit("PRODUCTS EXPIRING SOON (within 7 days)")
        .next()
        .unwrap();
    assert!(report.contains("Yogurt"));
    assert!(!report.contains("Apples"));
}

#[test]
fn rejected_input_leaves_store_untouched() {
    let script = "\
add
Butter
Dairy
not-a-date
3
ABC Dairy
add
Butter

2026-11-01
3
ABC Dairy
update
Nonexistent
5
update
Milk
-2
update
Milk
many
";
    let (out, store) = run_session(script, DesktopConfig::default());

    assert!(out.contains("[Error] Invalid expiry date:"));
    assert!(out.contains("[Warning] Please fill in all fields"));
    assert!(out.contains("[Error] Product not found"));
    assert!(out.contains("[Error] Invalid quantity: Quantity cannot be negative"));
    assert!(out.contains("[Error] Invalid quantity: 'many' is not a whole number"));

    assert_eq!(store.len(), 5);
    assert_eq!(store.list_all()[0].stock_quantity().units(), 15);
}

#[test]
fn search_filters_by_category() {
    let (out, _) = run_session("search produce\nquit\n", DesktopConfig::default());
    let results = out.rsplit("ALL PRODUCTS").next().unwrap();
    assert!(results.contains("Apples"));
    assert!(!results.contains("Milk"));
}

#[test]
fn json_output_emits_parseable_documents() {
    let config = DesktopConfig {
        output: OutputFormat::Json,
        ..DesktopConfig::default()
    };
    let (out, _) = run_session("low-stock\nquit\n", config);

    let documents = serde_json::Deserializer::from_str(&out)
        .into_iter::<serde_json::Value>()
        .collect::<Result<Vec<_>, _>>()
        .expect("stdout is a stream of JSON documents");
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["view"], "dashboard");

    let doc = &documents[1];
    assert_eq!(doc["view"], "table");
    assert_eq!(doc["title"], "LOW STOCK PRODUCTS (<15 items)");
    assert_eq!(doc["rows"].as_array().map(Vec::len), Some(1));
    assert_eq!(doc["rows"][0]["name"], "Chicken");
}
