//! # Mortar Calculation
//!
//! Mortar bags for laying a number of bricks or blocks, from published
//! yield-per-bag ranges. The average of the range is the divisor:
//!
//! ```text
//! raw bags         = units / average yield
//! required bags    = ceil(raw bags)
//! bags with buffer = ceil(required bags × (1 + buffer/100))
//! ```
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculators::mortar::{calculate, MortarInput};
//! use estimate_core::config::EstimateSettings;
//! use estimate_core::materials::{MasonryUnit, MortarBag};
//!
//! let input = MortarInput {
//!     label: "Garden wall".to_string(),
//!     number_of_units: 1000.0,
//!     masonry_unit: MasonryUnit::ModularBricks,
//!     bag: MortarBag::Lb80,
//!     include_buffer: true,
//!     buffer_percent: Some(10.0),
//!     yield_override: None,
//!     price_per_bag: 8.5,
//! };
//! let result = calculate(&input, &EstimateSettings::default()).unwrap();
//! assert_eq!(result.required_bags, 24);
//! assert_eq!(result.bags_with_buffer, 27);
//! ```

use serde::{Deserialize, Serialize};

use super::non_negative;
use crate::config::EstimateSettings;
use crate::cost::CostBreakdown;
use crate::derivation::bags_for_units;
use crate::errors::CalcResult;
use crate::materials::{MasonryUnit, MaterialYield, MortarBag};
use crate::units::UnitSystem;

/// Buffer applied when none is given
pub const DEFAULT_BUFFER_PERCENT: f64 = 10.0;

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Garden wall",
///   "number_of_units": 1000,
///   "masonry_unit": "modular-bricks",
///   "bag": "80lb",
///   "include_buffer": true,
///   "buffer_percent": 10.0,
///   "price_per_bag": 8.5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortarInput {
    #[serde(default)]
    pub label: String,
    /// Bricks or blocks to lay
    pub number_of_units: f64,
    #[serde(default)]
    pub masonry_unit: MasonryUnit,
    #[serde(default)]
    pub bag: MortarBag,
    #[serde(default = "default_include_buffer")]
    pub include_buffer: bool,
    /// Defaults to [`DEFAULT_BUFFER_PERCENT`]
    #[serde(default)]
    pub buffer_percent: Option<f64>,
    /// Replaces the table yield for this unit and bag
    #[serde(default)]
    pub yield_override: Option<MaterialYield>,
    #[serde(default)]
    pub price_per_bag: f64,
}

fn default_include_buffer() -> bool {
    true
}

impl MortarInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("number_of_units", self.number_of_units)?;
        if let Some(buffer) = self.buffer_percent {
            non_negative("buffer_percent", buffer)?;
        }
        Ok(())
    }

    /// Yield used for this estimate
    pub fn mortar_yield(&self) -> MaterialYield {
        self.yield_override
            .unwrap_or_else(|| self.masonry_unit.mortar_yield(self.bag))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortarResult {
    pub yield_per_bag: f64,
    /// "min - max"
    pub yield_range: String,
    pub raw_bags: f64,
    pub required_bags: u64,
    pub bags_with_buffer: u64,
    pub buffer_bags: u64,
    /// Weight of the bags bought, in lb (imperial) or kg (metric)
    pub total_weight: f64,
    pub weight_unit: String,
    pub cost: CostBreakdown,
}

pub fn calculate(input: &MortarInput, settings: &EstimateSettings) -> CalcResult<MortarResult> {
    input.validate()?;

    let mortar_yield = input.mortar_yield();
    let buffer = if input.include_buffer {
        input.buffer_percent.unwrap_or(DEFAULT_BUFFER_PERCENT)
    } else {
        0.0
    };

    let estimate = bags_for_units(input.number_of_units, &mortar_yield, buffer)?;
    tracing::debug!(
        label = %input.label,
        unit = %input.masonry_unit,
        raw_bags = estimate.raw_bags,
        bags = estimate.bags_with_buffer,
        "mortar estimate"
    );

    let system = settings.unit_system;
    let bag_weight = match system {
        UnitSystem::Imperial => input.bag.weight_lb(),
        UnitSystem::Metric => input.bag.weight_kg(),
    };
    let cost = CostBreakdown::new().with_item(
        input.bag.display_name(),
        estimate.bags_with_buffer as f64,
        input.price_per_bag,
    );

    Ok(MortarResult {
        yield_per_bag: mortar_yield.average,
        yield_range: mortar_yield.range_label(),
        raw_bags: estimate.raw_bags,
        required_bags: estimate.required_bags,
        bags_with_buffer: estimate.bags_with_buffer,
        buffer_bags: estimate.buffer_bags,
        total_weight: estimate.bags_with_buffer as f64 * bag_weight,
        weight_unit: system.mass().symbol().to_string(),
        cost,
    })
}
