//! # Cost Aggregation
//!
//! Pure multiply-and-sum over derived quantities. Currency is never rounded
//! here and negative prices pass through untouched; both are display concerns.
//!
//! ```rust
//! use estimate_core::cost::CostBreakdown;
//!
//! let cost = CostBreakdown::new()
//!     .with_item("Cement bags", 9.0, 8.50)
//!     .with_item("Sand (m³)", 0.44, 30.0);
//! assert!((cost.total - 89.7).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::derivation::safe_div;

/// `quantity × unit_price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub amount: f64,
}

impl LineItem {
    pub fn new(label: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        LineItem {
            label: label.into(),
            quantity,
            unit_price,
            amount: quantity * unit_price,
        }
    }
}

/// Line items and their sum
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub line_items: Vec<LineItem>,
    pub total: f64,
}

impl CostBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line item and update the total
    pub fn with_item(mut self, label: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        self.push(LineItem::new(label, quantity, unit_price));
        self
    }

    pub fn push(&mut self, item: LineItem) {
        self.total += item.amount;
        self.line_items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Price each `(label, quantity, unit_price)` and sum them.
pub fn compute_cost<'a, I>(items: I) -> CostBreakdown
where
    I: IntoIterator<Item = (&'a str, f64, f64)>,
{
    let cost = items
        .into_iter()
        .fold(CostBreakdown::new(), |acc, (label, quantity, price)| {
            acc.with_item(label, quantity, price)
        });
    tracing::trace!(items = cost.line_items.len(), total = cost.total, "aggregated cost");
    cost
}

/// `total / divisor`, or 0 when there is nothing to divide by.
pub fn cost_per(total: f64, divisor: f64) -> f64 {
    safe_div(total, divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_line_items() {
        let cost = compute_cost([("Blocks", 375.0, 2.5), ("Mortar bags", 12.0, 9.75)]);
        assert_eq!(cost.line_items.len(), 2);
        assert_eq!(cost.line_items[0].amount, 937.5);
        assert_eq!(cost.line_items[1].amount, 117.0);
        assert_eq!(cost.total, 1054.5);
    }

    #[test]
    fn test_no_rounding_and_negative_prices_allowed() {
        let cost = compute_cost([("Credit", 1.0, -10.0), ("Sand", 0.333, 1.0)]);
        assert!((cost.total - (-9.667)).abs() < 1e-12);
    }

    #[test]
    fn test_empty() {
        let cost = compute_cost(std::iter::empty());
        assert!(cost.is_empty());
        assert_eq!(cost.total, 0.0);
    }

    #[test]
    fn test_cost_per() {
        assert_eq!(cost_per(100.0, 4.0), 25.0);
        assert_eq!(cost_per(100.0, 0.0), 0.0);
        assert_eq!(cost_per(100.0, -2.0), 0.0);
    }
}
