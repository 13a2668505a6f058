//! # Concrete Block Wall Calculation
//!
//! Block count for a wall face, block cost, and a rule-of-thumb mortar
//! estimate of one bag per 33.3 blocks.
//!
//! Wall dimensions are in m or ft, block dimensions in m or inches.

use serde::{Deserialize, Serialize};

use super::non_negative;
use crate::config::EstimateSettings;
use crate::conversion::{Family, Quantity};
use crate::cost::CostBreakdown;
use crate::derivation::bags_for_units;
use crate::errors::CalcResult;
use crate::geometry::units_for_wall;
use crate::materials::MaterialYield;
use crate::units::UnitLabels;

/// Blocks laid per bag of mortar
pub const BLOCKS_PER_MORTAR_BAG: f64 = 33.3;

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Garage wall",
///   "wall_height": 3.0,
///   "wall_width": 10.0,
///   "block_height": 0.2,
///   "block_width": 0.4,
///   "price_per_block": 2.5,
///   "include_mortar": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteBlockWallInput {
    #[serde(default)]
    pub label: String,
    pub wall_height: f64,
    pub wall_width: f64,
    pub block_height: f64,
    pub block_width: f64,
    #[serde(default)]
    pub price_per_block: f64,
    #[serde(default = "default_include_mortar")]
    pub include_mortar: bool,
}

fn default_include_mortar() -> bool {
    true
}

impl ConcreteBlockWallInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("wall_height", self.wall_height)?;
        non_negative("wall_width", self.wall_width)?;
        non_negative("block_height", self.block_height)?;
        non_negative("block_width", self.block_width)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteBlockWallResult {
    /// In m² or ft²
    pub wall_area: f64,
    pub number_of_blocks: u64,
    /// Zero when the mortar estimate is switched off
    pub mortar_bags: u64,
    pub cost: CostBreakdown,
    pub units: UnitLabels,
}

pub fn calculate(input: &ConcreteBlockWallInput, settings: &EstimateSettings) -> CalcResult<ConcreteBlockWallResult> {
    input.validate()?;
    let system = settings.unit_system;

    let wall_m = |v: f64| system.length().to_meters(v);
    let block_m = |v: f64| system.small_length().to_meters(v);

    let (wall_height, wall_width) = (wall_m(input.wall_height), wall_m(input.wall_width));
    let number_of_blocks = units_for_wall(
        wall_height,
        wall_width,
        block_m(input.block_height),
        block_m(input.block_width),
    )?;

    let mortar_bags = if input.include_mortar {
        let per_bag = MaterialYield::from_range(BLOCKS_PER_MORTAR_BAG, BLOCKS_PER_MORTAR_BAG);
        bags_for_units(number_of_blocks as f64, &per_bag, 0.0)?.required_bags
    } else {
        0
    };
    tracing::debug!(label = %input.label, number_of_blocks, mortar_bags, "block wall");

    let wall_area = Quantity::canonical(wall_height * wall_width, Family::Area)
        .convert_to(system.length().squared())?
        .value;
    let cost = CostBreakdown::new().with_item("Blocks", number_of_blocks as f64, input.price_per_block);

    Ok(ConcreteBlockWallResult {
        wall_area,
        number_of_blocks,
        mortar_bags,
        cost,
        units: system.labels(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitSystem;

    fn garage_wall() -> ConcreteBlockWallInput {
        ConcreteBlockWallInput {
            label: "Garage wall".to_string(),
            wall_height: 3.0,
            wall_width: 10.0,
            block_height: 0.2,
            block_width: 0.4,
            price_per_block: 2.5,
            include_mortar: true,
        }
    }

    #[test]
    fn test_three_by_ten_meter_wall() {
        let r = calculate(&garage_wall(), &EstimateSettings::default()).unwrap();
        assert_eq!(r.wall_area, 30.0);
        assert_eq!(r.number_of_blocks, 375);
        // 375 / 33.3 = 11.26
        assert_eq!(r.mortar_bags, 12);
        assert_eq!(r.cost.total, 937.5);
    }

    #[test]
    fn test_mortar_estimate_optional() {
        let input = ConcreteBlockWallInput {
            include_mortar: false,
            ..garage_wall()
        };
        let r = calculate(&input, &EstimateSettings::default()).unwrap();
        assert_eq!(r.mortar_bags, 0);
    }

    #[test]
    fn test_imperial_wall_feet_blocks_inches() {
        let input = ConcreteBlockWallInput {
            wall_height: 8.0,
            wall_width: 20.0,
            block_height: 8.0,
            block_width: 16.0,
            ..garage_wall()
        };
        let settings = EstimateSettings::default().with_unit_system(UnitSystem::Imperial);
        let r = calculate(&input, &settings).unwrap();
        // 160 ft² / (8 in × 16 in = 0.8889 ft²) = 180
        assert_eq!(r.number_of_blocks, 180);
        assert!((r.wall_area - 160.0).abs() < 1e-9);
        assert_eq!(r.units.area, "ft²");
    }

    #[test]
    fn test_zero_block_face_rejected() {
        let input = ConcreteBlockWallInput {
            block_width: 0.0,
            ..garage_wall()
        };
        let err = calculate(&input, &EstimateSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MATERIAL_CONSTANT");
    }
}
