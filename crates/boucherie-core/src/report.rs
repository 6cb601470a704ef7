//! # Reporting Module
//!
//! Pure read-side aggregations over a slice of sales, consumed by the
//! dashboard.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Reporting Data Flow                                │
//! │                                                                         │
//! │  Ledger ──► today_sales() ──► product_ranking()  ──► "Produits les     │
//! │                          │                            plus vendus"      │
//! │                          ├──► category_totals()  ──► category pie       │
//! │                          ├──► hourly_totals()    ──► "Ventes par heure" │
//! │                          └──► day_summary()      ──► stat cards         │
//! │                                                                         │
//! │  Every function here is side-effect-free and recomputable from the      │
//! │  ledger alone; nothing is cached.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Revenue figures re-derive `price × quantity` from the frozen line
//! snapshots; sale-level figures (`total`) are trusted as stored and never
//! recomputed from current catalog prices.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, Quantity};
use crate::types::{Category, Sale};

// =============================================================================
// Business Hours
// =============================================================================

/// First hour shown on the hourly chart.
pub const OPENING_HOUR: u32 = 8;

/// Last hour shown on the hourly chart (inclusive).
pub const CLOSING_HOUR: u32 = 20;

/// The shop's display range for hourly reporting.
pub fn business_hours() -> RangeInclusive<u32> {
    OPENING_HOUR..=CLOSING_HOUR
}

// =============================================================================
// Aggregation Rows
// =============================================================================

/// Per-product aggregation row, keyed by product name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub name: String,
    pub category: Category,
    /// Units sold (kg and pieces accumulate in their own product rows).
    pub quantity: Quantity,
    pub revenue: Money,
}

/// Per-category revenue row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: Category,
    pub revenue: Money,
}

/// One hour-of-day bucket. Hours with no sales report zero, not absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HourlySales {
    pub hour: u32,
    pub total: Money,
}

/// The dashboard stat cards for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub total: Money,
    pub transaction_count: usize,
    /// `round(total / transaction_count)`; zero when there are no sales.
    pub average_basket: Money,
}

// =============================================================================
// Aggregations
// =============================================================================

/// Groups all lines of the given sales by product name, summing quantity
/// and revenue, ranked by revenue descending (name ascending on ties, so
/// the ranking is stable across recomputation).
pub fn product_ranking(sales: &[Sale]) -> Vec<ProductSales> {
    let mut by_name: HashMap<String, (Category, Quantity, i128)> = HashMap::new();

    for sale in sales {
        for line in &sale.items {
            let entry = by_name
                .entry(line.product.name.clone())
                .or_insert((line.product.category, Quantity::default(), 0));
            entry.1 += line.quantity;
            entry.2 += line.subtotal_hundredths();
        }
    }

    let mut rows: Vec<ProductSales> = by_name
        .into_iter()
        .map(|(name, (category, quantity, hundredths))| ProductSales {
            name,
            category,
            quantity,
            revenue: Money::round_hundredths(hundredths),
        })
        .collect();

    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue).then_with(|| a.name.cmp(&b.name)));
    rows
}

/// The `n` best-selling products by revenue.
pub fn top_products(sales: &[Sale], n: usize) -> Vec<ProductSales> {
    let mut rows = product_ranking(sales);
    rows.truncate(n);
    rows
}

/// Revenue per category, descending. Categories with no sales are omitted.
pub fn category_totals(sales: &[Sale]) -> Vec<CategorySales> {
    let mut by_category: HashMap<Category, i128> = HashMap::new();

    for sale in sales {
        for line in &sale.items {
            *by_category.entry(line.product.category).or_insert(0) +=
                line.subtotal_hundredths();
        }
    }

    // iterate the fixed category order so equal-revenue rows sort stably
    let mut rows: Vec<CategorySales> = Category::ALL
        .iter()
        .filter_map(|&category| {
            by_category.get(&category).map(|&hundredths| CategorySales {
                category,
                revenue: Money::round_hundredths(hundredths),
            })
        })
        .collect();

    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    rows
}

/// Buckets sale totals by local hour-of-day over the given inclusive
/// range. Sales outside the range are dropped; in-range hours with no
/// sales yield a zero bucket.
pub fn hourly_totals(sales: &[Sale], hours: RangeInclusive<u32>) -> Vec<HourlySales> {
    let mut buckets: Vec<HourlySales> = hours
        .map(|hour| HourlySales {
            hour,
            total: Money::zero(),
        })
        .collect();

    for sale in sales {
        let hour = sale.hour();
        if let Some(bucket) = buckets.iter_mut().find(|b| b.hour == hour) {
            bucket.total += sale.total;
        }
    }

    buckets
}

/// The stat-card summary for a day's sales (pass a date-filtered slice).
pub fn day_summary(sales: &[Sale]) -> DaySummary {
    let total: Money = sales.iter().map(|s| s.total).sum();
    let count = sales.len();

    let average_basket = if count == 0 {
        Money::zero()
    } else {
        // round half up on the integer division
        let total = total.francs() as i128;
        let count = count as i128;
        Money::from_francs(((2 * total + count) / (2 * count)) as i64)
    };

    DaySummary {
        total,
        transaction_count: count,
        average_basket,
    }
}

/// All-history revenue, summed from the stored sale totals.
pub fn lifetime_total(sales: &[Sale]) -> Money {
    sales.iter().map(|s| s.total).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
