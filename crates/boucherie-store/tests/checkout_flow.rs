//! End-to-end checkout flow: login → cart → payment → ledger → dashboard,
//! against both storage backends.

use std::fs;
use std::path::PathBuf;

use boucherie_core::{report, Catalog, EmployeeDirectory, Money, Quantity};
use boucherie_store::{JsonFileStorage, MemoryStorage, Receipt, SalesStorage, Terminal};

fn temp_ledger_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "boucherie-checkout-{}-{}.json",
        std::process::id(),
        name
    ))
}

fn open_terminal(storage: Box<dyn SalesStorage>) -> Terminal {
    Terminal::new(
        Catalog::butcher_shop(),
        EmployeeDirectory::default_staff(),
        storage,
    )
}

#[test]
fn full_day_at_the_counter() {
    let path = temp_ledger_path("full-day");
    let _ = fs::remove_file(&path);

    // ---- morning: first session ----
    {
        let mut terminal = open_terminal(Box::new(JsonFileStorage::new(&path)));
        assert!(terminal.sales_history().is_empty());

        terminal.login(1, "1234").unwrap();

        // 2.0 kg beef + a whole chicken
        terminal.add_to_cart(1, Quantity::try_from_f64(2.0).unwrap()).unwrap();
        terminal.add_to_cart(8, Quantity::from_units(1)).unwrap();
        assert_eq!(terminal.cart_total(), Money::from_francs(6500));

        let sale = terminal.checkout(Money::from_francs(10_000)).unwrap();
        assert_eq!(sale.change, Money::from_francs(3500));
        assert!(terminal.cart().is_empty());

        // a second ticket by another operator
        terminal.logout();
        terminal.login(2, "2580").unwrap();
        terminal.add_to_cart(14, Quantity::try_from_f64(1.5).unwrap()).unwrap();
        let sale = terminal.checkout(Money::from_francs(2000)).unwrap();
        assert_eq!(sale.total, Money::from_francs(1800));
        assert_eq!(sale.employee_name, "Moussa");
    }

    // ---- afternoon: the app restarts, the ledger survives ----
    {
        let mut terminal = open_terminal(Box::new(JsonFileStorage::new(&path)));
        assert_eq!(terminal.sales_history().len(), 2);
        assert!(terminal.cart().is_empty()); // carts never survive a reload

        // newest first
        assert_eq!(terminal.sales_history()[0].employee_name, "Moussa");
        assert_eq!(terminal.today_total(), Money::from_francs(8300));

        // the dashboard recomputes from the ledger alone
        let today = terminal.today_sales();
        let summary = report::day_summary(&today);
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.total, Money::from_francs(8300));
        assert_eq!(summary.average_basket, Money::from_francs(4150));

        let ranking = report::product_ranking(&today);
        assert_eq!(ranking[0].name, "Poulet entier");
        assert_eq!(ranking[0].revenue, Money::from_francs(3500));

        let hourly = report::hourly_totals(&today, report::business_hours());
        let bucketed: Money = hourly.iter().map(|b| b.total).sum();
        // both sales happened "now"; if now is within business hours the
        // buckets carry the full figure, otherwise they are all zero
        assert!(bucketed == Money::from_francs(8300) || bucketed == Money::zero());

        // a receipt can be rebuilt from any historical sale
        let receipt = Receipt::from_sale(&terminal.sales_history()[1]);
        assert_eq!(receipt.cashier, "Aïcha");
        assert_eq!(receipt.total, Money::from_francs(6500));

        // ledger still queryable by explicit date key
        let key = terminal.sales_history()[0].date_key();
        assert_eq!(terminal.sales_by_date(&key).len(), 2);
        terminal.logout();
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn corrupt_ledger_file_starts_empty_and_recovers() {
    let path = temp_ledger_path("corrupt");
    fs::write(&path, b"definitely not a ledger").unwrap();

    let mut terminal = open_terminal(Box::new(JsonFileStorage::new(&path)));
    assert!(terminal.sales_history().is_empty());

    // the session keeps working, and the next save repairs the file
    terminal.login(1, "1234").unwrap();
    terminal.add_to_cart(9, Quantity::from_units(1)).unwrap();
    terminal.checkout(Money::from_francs(500)).unwrap();

    let reopened = open_terminal(Box::new(JsonFileStorage::new(&path)));
    assert_eq!(reopened.sales_history().len(), 1);

    fs::remove_file(&path).unwrap();
}

#[test]
fn memory_backend_behaves_like_the_file() {
    let mut terminal = open_terminal(Box::new(MemoryStorage::new()));
    terminal.login(3, "1111").unwrap();

    terminal.add_to_cart(12, Quantity::try_from_f64(0.75).unwrap()).unwrap();
    let sale = terminal.checkout(Money::from_francs(1500)).unwrap();

    // 2000 × 0.75 = 1500
    assert_eq!(sale.total, Money::from_francs(1500));
    assert_eq!(sale.change, Money::zero());
    assert_eq!(terminal.today_total(), Money::from_francs(1500));
}

#[test]
fn persisted_layout_round_trips_the_documented_fields() {
    let mut terminal = open_terminal(Box::new(MemoryStorage::new()));
    terminal.login(1, "1234").unwrap();
    terminal.add_to_cart(1, Quantity::try_from_f64(1.5).unwrap()).unwrap();
    let sale = terminal.checkout(Money::from_francs(3000)).unwrap();

    let json = serde_json::to_value(&sale).unwrap();
    for field in [
        "id",
        "items",
        "total",
        "amountReceived",
        "change",
        "employeeId",
        "employeeName",
        "date",
        "timestamp",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(json["total"], serde_json::json!(2250));
    assert_eq!(json["items"][0]["quantity"], serde_json::json!(1.5));
    assert_eq!(json["items"][0]["product"]["name"], serde_json::json!("Viande de bœuf"));
}
