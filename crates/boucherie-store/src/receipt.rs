//! # Receipt Module
//!
//! The receipt-preview data for a finalized sale: everything the ticket
//! dialog shows, minus the rendering. The frontend consumes the DTO; the
//! `Display` impl produces the plain-text ticket used in logs and tests.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use boucherie_core::{Money, Quantity, Sale, Unit};

/// Shop name printed at the top of every ticket.
pub const STORE_NAME: &str = "Boucherie Royale";

/// Shop subtitle / locality line.
pub const STORE_LOCALITY: &str = "de Saaba";

/// One receipt line: `quantity × unit price = line total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: Quantity,
    pub unit: Unit,
    pub unit_price: Money,
    /// Rounded per line for display; the ticket total below remains the
    /// authoritative figure (it rounds once over the exact sum).
    pub line_total: Money,
}

/// The printable view of one finalized sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Short human-readable ticket number: first 8 chars of the sale id,
    /// uppercased.
    pub ticket_number: String,
    pub store_name: String,
    pub locality: String,
    /// Local date/time, `DD/MM/YYYY HH:MM`.
    pub date: String,
    pub cashier: String,
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
    pub amount_received: Money,
    pub change: Money,
}

impl Receipt {
    /// Builds the receipt view of a sale.
    pub fn from_sale(sale: &Sale) -> Self {
        Receipt {
            ticket_number: sale.id.chars().take(8).collect::<String>().to_uppercase(),
            store_name: STORE_NAME.to_string(),
            locality: STORE_LOCALITY.to_string(),
            date: sale.date.format("%d/%m/%Y %H:%M").to_string(),
            cashier: sale.employee_name.clone(),
            lines: sale
                .items
                .iter()
                .map(|line| ReceiptLine {
                    name: line.product.name.clone(),
                    quantity: line.quantity,
                    unit: line.product.unit,
                    unit_price: line.product.price,
                    line_total: line.line_total(),
                })
                .collect(),
            total: sale.total,
            amount_received: sale.amount_received,
            change: sale.change,
        }
    }
}

impl From<&Sale> for Receipt {
    fn from(sale: &Sale) -> Self {
        Receipt::from_sale(sale)
    }
}

/// Plain-text ticket, 32 columns like the thermal paper it imitates.
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 32;
        let rule = "-".repeat(WIDTH);

        writeln!(f, "{:^width$}", self.store_name.to_uppercase(), width = WIDTH)?;
        writeln!(f, "{:^width$}", self.locality, width = WIDTH)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Date    {:>24}", self.date)?;
        writeln!(f, "Ticket  {:>24}", self.ticket_number)?;
        writeln!(f, "Vendeur {:>24}", self.cashier)?;
        writeln!(f, "{}", rule)?;

        for line in &self.lines {
            writeln!(f, "{}", line.name)?;
            let detail = format!("{} {} x {}", line.quantity, line.unit, line.unit_price);
            let pad = WIDTH.saturating_sub(detail.len() + 2);
            writeln!(f, "  {}{:>width$}", detail, line.line_total, width = pad)?;
        }

        writeln!(f, "{}", rule)?;
        writeln!(f, "TOTAL  {:>25}", self.total.to_string())?;
        writeln!(f, "Espèces{:>25}", self.amount_received.to_string())?;
        writeln!(f, "Rendu  {:>25}", self.change.to_string())?;
        writeln!(f)?;
        write!(f, "{:^width$}", "Merci de votre visite !", width = WIDTH)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use boucherie_core::{Cart, Catalog};

    fn sample_sale() -> Sale {
        let catalog = Catalog::butcher_shop();
        let mut cart = Cart::new();
        cart.add(catalog.get(1).unwrap(), Quantity::try_from_f64(2.0).unwrap()).unwrap();
        cart.add(catalog.get(8).unwrap(), Quantity::from_units(1)).unwrap();
        Sale::finalize(&cart, Money::from_francs(7000), 1, "Aïcha").unwrap()
    }

    #[test]
    fn test_receipt_mirrors_sale() {
        let sale = sample_sale();
        let receipt = Receipt::from_sale(&sale);

        assert_eq!(receipt.total, sale.total);
        assert_eq!(receipt.amount_received, Money::from_francs(7000));
        assert_eq!(receipt.change, sale.change);
        assert_eq!(receipt.cashier, "Aïcha");
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].line_total, Money::from_francs(3000));
    }

    #[test]
    fn test_ticket_number_is_short_and_upper() {
        let sale = sample_sale();
        let receipt = Receipt::from_sale(&sale);

        assert_eq!(receipt.ticket_number.len(), 8);
        assert_eq!(receipt.ticket_number, receipt.ticket_number.to_uppercase());
        assert!(sale.id.to_uppercase().starts_with(&receipt.ticket_number));
    }

    #[test]
    fn test_plain_text_ticket_contains_the_figures() {
        let receipt = Receipt::from_sale(&sample_sale());
        let text = receipt.to_string();

        assert!(text.contains("BOUCHERIE ROYALE"));
        assert!(text.contains("Vendeur"));
        assert!(text.contains("Aïcha"));
        assert!(text.contains("6 500 FCFA")); // total: 3000 + 3500
        assert!(text.contains("Merci de votre visite !"));
    }
}
