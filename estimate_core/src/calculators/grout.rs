//! # Tile Grout Calculation
//!
//! Grout fills the joints around every tile. With tile sides `l`, `w` and
//! joint width `g`, each tile plus its joint covers `(l+g)(w+g)`, so the
//! fraction of the floor that is joint is `1 - lw/((l+g)(w+g))`:
//!
//! ```text
//! R           = (l + g)(w + g) / (l w)
//! grout area  = A - A / R
//! volume      = grout area × joint depth
//! bags        = ceil(volume × density / (bag size × dry% / 100))
//! ```
//!
//! Field dimensions are in m or ft; tile, joint width and depth in cm or
//! inches. A tile with a zero side gives zero grout.

use serde::{Deserialize, Serialize};

use super::non_negative;
use crate::config::EstimateSettings;
use crate::conversion::{mass_from_volume, LengthUnit, Quantity, VolumeUnit};
use crate::cost::CostBreakdown;
use crate::derivation::{bags_for_mass, PurchaseCount};
use crate::errors::{require_positive, CalcResult};
use crate::materials::{DRY_MATERIAL_PERCENT, GROUT_DENSITY_KG_M3, GROUT_DENSITY_LB_FT3};
use crate::units::{UnitLabels, UnitSystem};

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Bathroom floor",
///   "area_length": 10, "area_width": 10,
///   "tile_length": 12, "tile_width": 12,
///   "gap_width": 0.125, "gap_depth": 0.375,
///   "bag_size": 10
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroutInput {
    #[serde(default)]
    pub label: String,
    pub area_length: f64,
    pub area_width: f64,
    pub tile_length: f64,
    pub tile_width: f64,
    pub gap_width: f64,
    pub gap_depth: f64,
    /// kg/m³ or lb/ft³; the grout table value when absent
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default = "default_dry_percent")]
    pub dry_material_percent: f64,
    /// kg or lb
    #[serde(default = "default_bag_size")]
    pub bag_size: f64,
    #[serde(default)]
    pub cost_per_bag: f64,
}

fn default_dry_percent() -> f64 {
    DRY_MATERIAL_PERCENT
}

fn default_bag_size() -> f64 {
    10.0
}

impl GroutInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("area_length", self.area_length)?;
        non_negative("area_width", self.area_width)?;
        non_negative("tile_length", self.tile_length)?;
        non_negative("tile_width", self.tile_width)?;
        non_negative("gap_width", self.gap_width)?;
        non_negative("gap_depth", self.gap_depth)?;
        if let Some(density) = self.density {
            non_negative("density", density)?;
        }
        require_positive("dry_material_percent", self.dry_material_percent)?;
        require_positive("bag_size", self.bag_size)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroutResult {
    pub surface_area: f64,
    pub grout_area: f64,
    /// m³ or ft³
    pub grout_volume: f64,
    pub grout_volume_liters: f64,
    pub grout_weight: f64,
    pub bags: PurchaseCount,
    pub cost: CostBreakdown,
    pub units: UnitLabels,
}

/// Share of a tiled surface taken by joints
pub fn joint_fraction(tile_length: f64, tile_width: f64, gap: f64) -> f64 {
    let tile = tile_length * tile_width;
    if tile <= 0.0 {
        return 0.0;
    }
    let ratio = (tile_length + gap) * (tile_width + gap) / tile;
    1.0 - 1.0 / ratio
}

pub fn calculate(input: &GroutInput, settings: &EstimateSettings) -> CalcResult<GroutResult> {
    input.validate()?;
    let system = settings.unit_system;
    let (field_unit, joint_unit) = match system {
        UnitSystem::Metric => (LengthUnit::Meter, LengthUnit::Centimeter),
        UnitSystem::Imperial => (LengthUnit::Foot, LengthUnit::Inch),
    };
    let in_field = |v: f64| field_unit.from_meters(joint_unit.to_meters(v));

    let surface_area = input.area_length * input.area_width;
    let fraction = joint_fraction(in_field(input.tile_length), in_field(input.tile_width), in_field(input.gap_width));
    let grout_area = surface_area * fraction;
    let grout_volume = Quantity::new(grout_area * in_field(input.gap_depth), field_unit.cubed());
    tracing::debug!(label = %input.label, surface_area, grout_area, volume = %grout_volume, "grout joints");

    let default_density = match system {
        UnitSystem::Metric => GROUT_DENSITY_KG_M3,
        UnitSystem::Imperial => GROUT_DENSITY_LB_FT3,
    };
    let density = Quantity::new(input.density.unwrap_or(default_density), system.density());
    let weight = mass_from_volume(&grout_volume, &density)?.convert_to(system.mass())?;
    let bags = bags_for_mass(weight.value, input.bag_size * input.dry_material_percent / 100.0, 0.0)?;
    tracing::debug!(weight = weight.value, bags = bags.required, "grout bags");

    Ok(GroutResult {
        surface_area,
        grout_area,
        grout_volume: grout_volume.value,
        grout_volume_liters: grout_volume.convert_to(VolumeUnit::Liter)?.value,
        grout_weight: weight.value,
        bags,
        cost: CostBreakdown::new().with_item("Grout bags", bags.required as f64, input.cost_per_bag),
        units: system.labels(),
    })
}
