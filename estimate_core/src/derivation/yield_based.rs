//! Yield-based derivation: bags from the number of units each bag lays.

use serde::{Deserialize, Serialize};

use super::ceil_count;
use crate::errors::{require_positive, CalcResult};
use crate::materials::MaterialYield;

/// Bag counts for laying a number of masonry units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldEstimate {
    /// units / average yield
    pub raw_bags: f64,
    /// ceil(raw_bags)
    pub required_bags: u64,
    pub buffer_percent: f64,
    /// ceil(required_bags × (1 + buffer/100))
    pub bags_with_buffer: u64,
    /// bags_with_buffer - required_bags
    pub buffer_bags: u64,
}

/// Bags needed to lay `units`, with an optional buffer on top.
///
/// The buffer applies to the already-rounded required count, so a 10% buffer
/// on 23.5 raw bags gives `ceil(24 × 1.1) = 27`.
pub fn bags_for_units(units: f64, yield_per_bag: &MaterialYield, buffer_percent: f64) -> CalcResult<YieldEstimate> {
    let average = require_positive("yield_average", yield_per_bag.average)?;

    let raw_bags = units / average;
    let required_bags = ceil_count(raw_bags);
    let bags_with_buffer = if buffer_percent > 0.0 {
        ceil_count(required_bags as f64 * (1.0 + buffer_percent / 100.0))
    } else {
        required_bags
    };

    Ok(YieldEstimate {
        raw_bags,
        required_bags,
        buffer_percent,
        bags_with_buffer,
        buffer_bags: bags_with_buffer.saturating_sub(required_bags),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{MasonryUnit, MortarBag};
    use rstest::rstest;

    #[test]
    fn test_modular_bricks_80lb() {
        let y = MasonryUnit::ModularBricks.mortar_yield(MortarBag::Lb80);
        let est = bags_for_units(1000.0, &y, 10.0).unwrap();
        assert!((est.raw_bags - 23.5294).abs() < 1e-4);
        assert_eq!(est.required_bags, 24);
        assert_eq!(est.bags_with_buffer, 27);
        assert_eq!(est.buffer_bags, 3);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-5.0)]
    fn test_no_buffer(#[case] buffer: f64) {
        let y = MaterialYield::from_range(10.0, 12.0);
        let est = bags_for_units(100.0, &y, buffer).unwrap();
        assert_eq!(est.required_bags, 10);
        assert_eq!(est.bags_with_buffer, 10);
        assert_eq!(est.buffer_bags, 0);
    }

    #[test]
    fn test_nothing_to_lay() {
        let y = MaterialYield::from_range(10.0, 12.0);
        let est = bags_for_units(0.0, &y, 10.0).unwrap();
        assert_eq!(est.required_bags, 0);
        assert_eq!(est.bags_with_buffer, 0);
    }

    #[test]
    fn test_zero_yield_rejected() {
        let y = MaterialYield { min: 0.0, max: 0.0, average: 0.0 };
        assert!(bags_for_units(100.0, &y, 0.0).is_err());
    }
}
