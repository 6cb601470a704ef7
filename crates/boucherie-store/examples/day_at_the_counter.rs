//! Drives one short day at the counter from the command line: login, ring
//! up two tickets, print the receipts and the dashboard figures.
//!
//! ```sh
//! cargo run --example day_at_the_counter
//! RUST_LOG=debug cargo run --example day_at_the_counter
//! ```
//!
//! Uses a throwaway ledger file in the temp directory so repeated runs
//! don't touch the real app-data ledger.

use boucherie_core::{report, Catalog, EmployeeDirectory, Money, Quantity};
use boucherie_store::{JsonFileStorage, Receipt, Terminal, TerminalError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TerminalError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let ledger_path = std::env::temp_dir().join("boucherie-demo-sales.json");
    let _ = std::fs::remove_file(&ledger_path);

    let mut terminal = Terminal::new(
        Catalog::butcher_shop(),
        EmployeeDirectory::default_staff(),
        Box::new(JsonFileStorage::new(&ledger_path)),
    );

    // ---- first ticket: Aïcha sells 2 kg of beef and a chicken ----
    terminal.login(1, "1234")?;
    terminal.add_to_cart(1, Quantity::try_from_f64(2.0).unwrap())?;
    terminal.add_to_cart(8, Quantity::from_units(1))?;
    println!("Total à payer : {}\n", terminal.cart_total());

    let sale = terminal.checkout(Money::from_francs(10_000))?;
    println!("{}\n", Receipt::from_sale(&sale));

    // ---- second ticket: Moussa takes over ----
    terminal.logout();
    terminal.login(2, "2580")?;
    terminal.add_to_cart(15, Quantity::try_from_f64(1.25).unwrap())?;
    terminal.add_to_cart(9, Quantity::from_units(4))?;

    let sale = terminal.checkout(Money::from_francs(4000))?;
    println!("{}\n", Receipt::from_sale(&sale));

    // ---- the dashboard, recomputed from the ledger alone ----
    let today = terminal.today_sales();
    let summary = report::day_summary(&today);
    println!("Ventes du jour   : {}", summary.total);
    println!("Nb transactions  : {}", summary.transaction_count);
    println!("Panier moyen     : {}", summary.average_basket);

    println!("\nProduits les plus vendus :");
    for (rank, row) in report::top_products(&today, 6).iter().enumerate() {
        println!("  #{} {:<20} {}", rank + 1, row.name, row.revenue);
    }

    println!("\nVentes par catégorie :");
    for row in report::category_totals(&today) {
        println!("  {:<8} {}", row.category.to_string(), row.revenue);
    }

    Ok(())
}
