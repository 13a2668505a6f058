//! # Brick Wall Calculation
//!
//! Bricks for a wall face with the mortar joint added to each brick's face
//! dimensions, plus a mortar allowance.
//!
//! - bricks = ceil(wall area / ((l + joint) × (h + joint)))
//! - with wastage = ceil(bricks × (1 + w/100))
//! - mortar volume = wall area × joint × 1.2
//! - mortar bags = ceil(mortar volume × 60), volume in m³
//!
//! Wall dimensions in m or ft; brick and joint in m or inches.

use serde::{Deserialize, Serialize};

use super::{non_negative, wastage_percent};
use crate::config::EstimateSettings;
use crate::conversion::{Family, Quantity};
use crate::cost::CostBreakdown;
use crate::derivation::{bags_for_volume, ceil_count};
use crate::errors::CalcResult;
use crate::geometry::units_to_cover;
use crate::units::UnitLabels;

/// Mortar volume allowance over wall area × joint thickness
pub const MORTAR_VOLUME_FACTOR: f64 = 1.2;

/// Premixed mortar bags per m³
pub const MORTAR_BAGS_PER_M3: f64 = 60.0;

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Front elevation",
///   "wall_length": 10.0,
///   "wall_height": 3.0,
///   "brick_length": 0.19,
///   "brick_height": 0.057,
///   "mortar_thickness": 0.01,
///   "wastage_percent": 10.0,
///   "brick_cost_per_1000": 500.0,
///   "mortar_cost_per_bag": 15.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickInput {
    #[serde(default)]
    pub label: String,
    pub wall_length: f64,
    pub wall_height: f64,
    pub brick_length: f64,
    pub brick_height: f64,
    pub mortar_thickness: f64,
    #[serde(default)]
    pub wastage_percent: Option<f64>,
    #[serde(default)]
    pub brick_cost_per_1000: f64,
    #[serde(default)]
    pub mortar_cost_per_bag: f64,
}

impl BrickInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("wall_length", self.wall_length)?;
        non_negative("wall_height", self.wall_height)?;
        non_negative("brick_length", self.brick_length)?;
        non_negative("brick_height", self.brick_height)?;
        non_negative("mortar_thickness", self.mortar_thickness)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickResult {
    pub wall_area: f64,
    pub bricks_needed: u64,
    pub bricks_with_wastage: u64,
    /// Always m³
    pub mortar_volume_m3: f64,
    pub mortar_bags: u64,
    pub cost: CostBreakdown,
    pub units: UnitLabels,
}

pub fn calculate(input: &BrickInput, settings: &EstimateSettings) -> CalcResult<BrickResult> {
    input.validate()?;
    let wastage = wastage_percent(input.wastage_percent, settings)?;
    let system = settings.unit_system;

    let wall_m = |v: f64| system.length().to_meters(v);
    let brick_m = |v: f64| system.small_length().to_meters(v);

    let wall_area_m2 = wall_m(input.wall_length) * wall_m(input.wall_height);
    let joint_m = brick_m(input.mortar_thickness);
    let face_m2 = (brick_m(input.brick_length) + joint_m) * (brick_m(input.brick_height) + joint_m);

    let bricks_needed = units_to_cover(wall_area_m2, face_m2)?;
    let bricks_with_wastage = ceil_count(bricks_needed as f64 * (1.0 + wastage / 100.0));

    let mortar_volume_m3 = wall_area_m2 * joint_m * MORTAR_VOLUME_FACTOR;
    let mortar_bags = bags_for_volume(mortar_volume_m3, 1.0 / MORTAR_BAGS_PER_M3)?.required;
    tracing::debug!(label = %input.label, bricks_needed, bricks_with_wastage, mortar_bags, "brick wall");

    let cost = CostBreakdown::new()
        .with_item("Bricks (per 1000)", bricks_with_wastage as f64 / 1000.0, input.brick_cost_per_1000)
        .with_item("Mortar bags", mortar_bags as f64, input.mortar_cost_per_bag);

    Ok(BrickResult {
        wall_area: Quantity::canonical(wall_area_m2, Family::Area)
            .convert_to(system.length().squared())?
            .value,
        bricks_needed,
        bricks_with_wastage,
        mortar_volume_m3,
        mortar_bags,
        cost,
        units: system.labels(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitSystem;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    fn front_elevation() -> BrickInput {
        BrickInput {
            label: "Front elevation".to_string(),
            wall_length: 10.0,
            wall_height: 3.0,
            brick_length: 0.19,
            brick_height: 0.057,
            mortar_thickness: 0.01,
            wastage_percent: Some(10.0),
            brick_cost_per_1000: 500.0,
            mortar_cost_per_bag: 15.0,
        }
    }

    #[test]
    fn test_metric_wall() {
        let r = calculate(&front_elevation(), &EstimateSettings::default()).unwrap();
        // 30 m² / (0.2 × 0.067) = 2238.8
        assert_eq!(r.bricks_needed, 2239);
        assert_eq!(r.bricks_with_wastage, 2463);
        assert!(approx_eq(r.mortar_volume_m3, 0.36, 1e-12));
        assert_eq!(r.mortar_bags, 22);
        assert!(approx_eq(r.cost.total, 1231.5 + 330.0, 1e-9));
    }

    #[test]
    fn test_joint_enlarges_brick_face() {
        let without_joint = BrickInput {
            mortar_thickness: 0.0,
            ..front_elevation()
        };
        let r = calculate(&without_joint, &EstimateSettings::default()).unwrap();
        assert!(r.bricks_needed > 2239);
        assert_eq!(r.mortar_bags, 0);
    }

    #[test]
    fn test_imperial_area_in_square_feet() {
        let input = BrickInput {
            wall_length: 30.0,
            wall_height: 10.0,
            brick_length: 7.625,
            brick_height: 2.25,
            mortar_thickness: 0.375,
            ..front_elevation()
        };
        let settings = EstimateSettings::default().with_unit_system(UnitSystem::Imperial);
        let r = calculate(&input, &settings).unwrap();
        assert!(approx_eq(r.wall_area, 300.0, 1e-9));
        // 300 ft² / (8 in × 2.625 in / 144) = 2057.1
        assert_eq!(r.bricks_needed, 2058);
    }
}
