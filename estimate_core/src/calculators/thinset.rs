//! # Thinset Mortar Calculation
//!
//! Thinset for setting tile over a rectangular area. The bed thickness comes
//! from the tile size (larger tiles take a deeper trowel notch) or is given
//! directly; it is in mm for metric and inches for imperial.

use serde::{Deserialize, Serialize};

use super::{non_negative, wastage_percent};
use crate::config::EstimateSettings;
use crate::conversion::{mass_from_volume, LengthUnit, Quantity};
use crate::cost::CostBreakdown;
use crate::derivation::{apply_wastage, bags_for_mass, PurchaseCount};
use crate::errors::{require_positive, CalcResult};
use crate::materials::{TileSize, DRY_MATERIAL_PERCENT, THINSET_DENSITY_KG_M3, THINSET_DENSITY_LB_FT3};
use crate::units::{UnitLabels, UnitSystem};

/// ## JSON Example
///
/// ```json
/// { "label": "Kitchen", "area_length": 5, "area_width": 4, "tile_size": "12x12", "wastage_percent": 10, "bag_weight": 25, "cost_per_bag": 18 }
/// ```
///
/// A custom bed thickness is written `"tile_size": { "custom": 6.0 }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThinsetInput {
    #[serde(default)]
    pub label: String,
    pub area_length: f64,
    pub area_width: f64,
    #[serde(default)]
    pub tile_size: TileSize,
    #[serde(default)]
    pub wastage_percent: Option<f64>,
    /// kg/m³ or lb/ft³
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default = "default_dry_percent")]
    pub dry_material_percent: f64,
    /// kg or lb
    #[serde(default = "default_bag_weight")]
    pub bag_weight: f64,
    #[serde(default)]
    pub cost_per_bag: f64,
}

fn default_dry_percent() -> f64 {
    DRY_MATERIAL_PERCENT
}

fn default_bag_weight() -> f64 {
    50.0
}

impl ThinsetInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("area_length", self.area_length)?;
        non_negative("area_width", self.area_width)?;
        if let TileSize::Custom(thickness) = self.tile_size {
            non_negative("tile_size", thickness)?;
        }
        if let Some(density) = self.density {
            non_negative("density", density)?;
        }
        non_negative("dry_material_percent", self.dry_material_percent)?;
        require_positive("bag_weight", self.bag_weight)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThinsetResult {
    pub area: f64,
    /// mm or inches
    pub thickness: f64,
    /// Volume including wastage
    pub volume: f64,
    pub weight: f64,
    pub dry_weight: f64,
    pub bags: PurchaseCount,
    pub cost: CostBreakdown,
    pub units: UnitLabels,
}

pub fn calculate(input: &ThinsetInput, settings: &EstimateSettings) -> CalcResult<ThinsetResult> {
    input.validate()?;
    let wastage = wastage_percent(input.wastage_percent, settings)?;
    let system = settings.unit_system;

    let (thickness_unit, default_density) = match system {
        UnitSystem::Metric => (LengthUnit::Millimeter, THINSET_DENSITY_KG_M3),
        UnitSystem::Imperial => (LengthUnit::Inch, THINSET_DENSITY_LB_FT3),
    };
    let thickness = input.tile_size.thickness(system);
    let bed = system.length().from_meters(thickness_unit.to_meters(thickness));

    let area = input.area_length * input.area_width;
    let volume = Quantity::new(apply_wastage(area * bed, wastage), system.volume());
    tracing::debug!(label = %input.label, area, thickness, volume = %volume, "thinset bed");

    let density = Quantity::new(input.density.unwrap_or(default_density), system.density());
    let weight = mass_from_volume(&volume, &density)?.convert_to(system.mass())?;
    let dry_weight = weight.value * input.dry_material_percent / 100.0;
    let bags = bags_for_mass(dry_weight, input.bag_weight, 0.0)?;
    tracing::debug!(dry_weight, bags = bags.required, "thinset bags");

    Ok(ThinsetResult {
        area,
        thickness,
        volume: volume.value,
        weight: weight.value,
        dry_weight,
        bags,
        cost: CostBreakdown::new().with_item("Thinset bags", bags.required as f64, input.cost_per_bag),
        units: system.labels(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    fn kitchen() -> ThinsetInput {
        ThinsetInput {
            label: "Kitchen".to_string(),
            area_length: 5.0,
            area_width: 4.0,
            tile_size: TileSize::Tile12x12,
            wastage_percent: Some(10.0),
            density: None,
            dry_material_percent: 50.0,
            bag_weight: 25.0,
            cost_per_bag: 18.0,
        }
    }

    #[test]
    fn test_metric_kitchen() {
        let r = calculate(&kitchen(), &EstimateSettings::default()).unwrap();
        assert_eq!(r.thickness, 5.0);
        assert!(approx_eq(r.volume, 0.11, 1e-12));
        assert!(approx_eq(r.weight, 176.0, 1e-9));
        assert!(approx_eq(r.dry_weight, 88.0, 1e-9));
        // 3.52 bags
        assert_eq!(r.bags.required, 4);
        assert!(approx_eq(r.cost.total, 72.0, 1e-12));
    }

    #[test]
    fn test_imperial_custom_thickness() {
        let settings = EstimateSettings::default().with_unit_system(UnitSystem::Imperial);
        let input = ThinsetInput {
            area_length: 10.0,
            area_width: 12.0,
            tile_size: TileSize::Custom(0.25),
            wastage_percent: Some(0.0),
            bag_weight: 50.0,
            ..kitchen()
        };
        let r = calculate(&input, &settings).unwrap();
        // 120 ft² × 0.25/12 ft = 2.5 ft³ at 100 lb/ft³
        assert!(approx_eq(r.volume, 2.5, 1e-9));
        assert!(approx_eq(r.weight, 250.0, 1e-6));
        assert_eq!(r.bags.required, 3);
        assert_eq!(r.units.mass, "lb");
    }

    #[test]
    fn test_larger_tiles_need_more() {
        let settings = EstimateSettings::default();
        let small = calculate(&ThinsetInput { tile_size: TileSize::Tile4x4, ..kitchen() }, &settings).unwrap();
        let large = calculate(&ThinsetInput { tile_size: TileSize::Large, ..kitchen() }, &settings).unwrap();
        assert!(large.bags.required > small.bags.required);
    }
}
