//! # Concrete Tube Calculation
//!
//! Concrete to fill hollow cylindrical forms (sonotubes poured around a
//! core, pipe sleeves). Dimensions are in m or ft per the active unit
//! system; an inner diameter at or above the outer one gives zero volume.

use serde::{Deserialize, Serialize};

use super::{non_negative, wastage_percent};
use crate::config::EstimateSettings;
use crate::conversion::{mass_from_volume, Quantity};
use crate::cost::CostBreakdown;
use crate::derivation::{apply_wastage, bags_for_mass, PurchaseCount};
use crate::errors::CalcResult;
use crate::geometry::{compute_volume, CircleSize, ShapeParameters};
use crate::units::UnitLabels;

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Pier sleeves",
///   "outer_diameter": 1.6,
///   "inner_diameter": 1.3,
///   "height": 8.0,
///   "number_of_tubes": 5,
///   "wastage_percent": 5.0,
///   "density": 150.0,
///   "bag_weight": 80.0,
///   "cost_per_bag": 6.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteTubeInput {
    #[serde(default)]
    pub label: String,
    pub outer_diameter: f64,
    pub inner_diameter: f64,
    pub height: f64,
    pub number_of_tubes: f64,
    #[serde(default)]
    pub wastage_percent: Option<f64>,
    pub density: f64,
    pub bag_weight: f64,
    #[serde(default)]
    pub cost_per_bag: f64,
}

impl ConcreteTubeInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("outer_diameter", self.outer_diameter)?;
        non_negative("inner_diameter", self.inner_diameter)?;
        non_negative("height", self.height)?;
        non_negative("number_of_tubes", self.number_of_tubes)?;
        non_negative("density", self.density)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteTubeResult {
    pub volume_per_tube: f64,
    pub total_volume: f64,
    pub volume_with_waste: f64,
    pub total_weight: f64,
    pub bags: PurchaseCount,
    pub cost: CostBreakdown,
    pub units: UnitLabels,
}

pub fn calculate(input: &ConcreteTubeInput, settings: &EstimateSettings) -> CalcResult<ConcreteTubeResult> {
    input.validate()?;
    let wastage = wastage_percent(input.wastage_percent, settings)?;
    let system = settings.unit_system;

    let tube = ShapeParameters::HollowCylinder {
        outer: CircleSize::Diameter(input.outer_diameter),
        inner: CircleSize::Diameter(input.inner_diameter),
        height: input.height,
    };
    let per_tube = compute_volume(&tube, system.length());
    let total = per_tube.scale(input.number_of_tubes);
    let with_waste = total.scale(apply_wastage(1.0, wastage));

    let density = Quantity::new(input.density, system.density());
    let weight = mass_from_volume(&with_waste, &density)?.convert_to(system.mass())?;
    let bags = bags_for_mass(weight.value, input.bag_weight, 0.0)?;
    tracing::debug!(
        label = %input.label,
        volume = with_waste.value,
        weight = weight.value,
        bags = bags.required,
        "tube estimate"
    );

    let cost = CostBreakdown::new().with_item("Concrete bags", bags.required as f64, input.cost_per_bag);

    Ok(ConcreteTubeResult {
        volume_per_tube: per_tube.value,
        total_volume: total.value,
        volume_with_waste: with_waste.value,
        total_weight: weight.value,
        bags,
        cost,
        units: system.labels(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitSystem;
    use std::f64::consts::PI;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    fn imperial() -> EstimateSettings {
        EstimateSettings::default().with_unit_system(UnitSystem::Imperial)
    }

    fn sleeves() -> ConcreteTubeInput {
        ConcreteTubeInput {
            label: "Pier sleeves".to_string(),
            outer_diameter: 1.6,
            inner_diameter: 1.3,
            height: 8.0,
            number_of_tubes: 5.0,
            wastage_percent: Some(0.0),
            density: 150.0,
            bag_weight: 80.0,
            cost_per_bag: 6.0,
        }
    }

    #[test]
    fn test_five_tubes() {
        let r = calculate(&sleeves(), &imperial()).unwrap();
        let per_tube = PI * 8.0 * (0.64 - 0.4225);
        assert!(approx_eq(r.volume_per_tube, per_tube, 1e-12));
        assert!(approx_eq(r.volume_per_tube, 5.4664, 1e-4));
        assert!(approx_eq(r.total_volume, 27.33, 1e-3));
        assert_eq!(r.units.volume, "ft³");
    }

    #[test]
    fn test_weight_and_bags() {
        let input = ConcreteTubeInput {
            wastage_percent: Some(10.0),
            ..sleeves()
        };
        let r = calculate(&input, &imperial()).unwrap();
        let expected_weight = PI * 8.0 * 0.2175 * 5.0 * 1.1 * 150.0;
        assert!(approx_eq(r.total_weight, expected_weight, 1e-9));
        // 4509.3 lb / 80 lb
        assert_eq!(r.bags.required, 57);
        assert!(approx_eq(r.cost.total, 342.0, 1e-12));
    }

    #[test]
    fn test_inverted_diameters_clamp() {
        let input = ConcreteTubeInput {
            outer_diameter: 1.0,
            inner_diameter: 2.0,
            ..sleeves()
        };
        let r = calculate(&input, &imperial()).unwrap();
        assert_eq!(r.total_volume, 0.0);
        assert_eq!(r.bags.required, 0);
    }
}
