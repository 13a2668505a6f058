//! # Concrete Slab Calculation
//!
//! Volume, weight and bag count for one or more identical rectangular slabs,
//! with cost per slab, per square foot and per cubic yard.
//!
//! The pipeline runs in feet and pounds regardless of the input units:
//! dimensions are converted to ft, density to lb/ft³ and bag size to lb.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculators::slab::{calculate, ConcreteSlabInput};
//! use estimate_core::config::EstimateSettings;
//! use estimate_core::conversion::{DensityUnit, LengthUnit, MassUnit};
//!
//! let input = ConcreteSlabInput {
//!     label: "Patio".to_string(),
//!     length: 10.0,
//!     width: 10.0,
//!     height: 0.5,
//!     length_unit: LengthUnit::Foot,
//!     quantity: 1.0,
//!     density: 150.0,
//!     density_unit: DensityUnit::LbPerCubicFoot,
//!     bag_size: 80.0,
//!     bag_unit: MassUnit::Pound,
//!     wastage_percent: Some(5.0),
//!     cost_per_bag: 5.0,
//! };
//!
//! let result = calculate(&input, &EstimateSettings::default()).unwrap();
//! assert_eq!(result.bags.required, 99);
//! ```

use serde::{Deserialize, Serialize};

use super::{non_negative, wastage_percent};
use crate::config::EstimateSettings;
use crate::conversion::{mass_from_volume, DensityUnit, LengthUnit, MassUnit, Quantity, VolumeUnit};
use crate::cost::{cost_per, CostBreakdown};
use crate::derivation::{bags_for_mass, PurchaseCount};
use crate::errors::CalcResult;
use crate::geometry::{compute_volume, ShapeParameters};

/// Input parameters for a slab pour.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Driveway",
///   "length": 20.0,
///   "width": 12.0,
///   "height": 4.0,
///   "length_unit": "in",
///   "quantity": 1,
///   "density": 2400.0,
///   "density_unit": "kg/m3",
///   "bag_size": 40.0,
///   "bag_unit": "kg",
///   "wastage_percent": 10.0,
///   "cost_per_bag": 6.5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteSlabInput {
    #[serde(default)]
    pub label: String,
    pub length: f64,
    pub width: f64,
    /// Slab thickness
    pub height: f64,
    /// Unit of length, width and height
    #[serde(default = "default_length_unit")]
    pub length_unit: LengthUnit,
    /// Number of identical slabs
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    pub density: f64,
    #[serde(default = "default_density_unit")]
    pub density_unit: DensityUnit,
    pub bag_size: f64,
    #[serde(default = "default_bag_unit")]
    pub bag_unit: MassUnit,
    /// Falls back to the settings default when absent
    #[serde(default)]
    pub wastage_percent: Option<f64>,
    #[serde(default)]
    pub cost_per_bag: f64,
}

fn default_length_unit() -> LengthUnit {
    LengthUnit::Foot
}

fn default_quantity() -> f64 {
    1.0
}

fn default_density_unit() -> DensityUnit {
    DensityUnit::LbPerCubicFoot
}

fn default_bag_unit() -> MassUnit {
    MassUnit::Pound
}

impl ConcreteSlabInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("length", self.length)?;
        non_negative("width", self.width)?;
        non_negative("height", self.height)?;
        non_negative("quantity", self.quantity)?;
        non_negative("density", self.density)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteSlabResult {
    pub volume_per_slab_ft3: f64,
    pub total_volume_ft3: f64,
    pub total_volume_yd3: f64,
    pub total_volume_m3: f64,
    pub area_per_slab_ft2: f64,
    pub total_area_ft2: f64,
    pub total_weight_lb: f64,
    pub total_weight_kg: f64,
    /// Raw bags are before wastage; required bags include it
    pub bags: PurchaseCount,
    pub cost: CostBreakdown,
    pub cost_per_slab: f64,
    pub cost_per_ft2: f64,
    pub cost_per_yd3: f64,
}

pub fn calculate(input: &ConcreteSlabInput, settings: &EstimateSettings) -> CalcResult<ConcreteSlabResult> {
    input.validate()?;
    let wastage = wastage_percent(input.wastage_percent, settings)?;

    let to_ft = |v: f64| LengthUnit::Foot.from_meters(input.length_unit.to_meters(v));
    let (length_ft, width_ft, height_ft) = (to_ft(input.length), to_ft(input.width), to_ft(input.height));

    let slab = ShapeParameters::Slab {
        length: length_ft,
        width: width_ft,
        height: height_ft,
    };
    let per_slab = compute_volume(&slab, LengthUnit::Foot);
    let total = per_slab.scale(input.quantity);
    tracing::debug!(label = %input.label, total_ft3 = total.value, "slab volume");

    let density = Quantity::new(input.density, input.density_unit);
    let weight_lb = mass_from_volume(&total, &density)?.convert_to(MassUnit::Pound)?;
    let bag_lb = Quantity::new(input.bag_size, input.bag_unit).convert_to(MassUnit::Pound)?;

    let unbuffered = bags_for_mass(weight_lb.value, bag_lb.value, 0.0)?;
    let buffered = bags_for_mass(weight_lb.value, bag_lb.value, wastage)?;
    let bags = PurchaseCount {
        raw: unbuffered.raw,
        required: buffered.required,
    };
    tracing::debug!(weight_lb = weight_lb.value, raw_bags = bags.raw, bags = bags.required, "slab bags");

    let cost = CostBreakdown::new().with_item("Concrete bags", bags.required as f64, input.cost_per_bag);

    let area_per_slab_ft2 = length_ft * width_ft;
    let total_area_ft2 = area_per_slab_ft2 * input.quantity;
    let total_volume_yd3 = total.convert_to(VolumeUnit::CubicYard)?.value;

    Ok(ConcreteSlabResult {
        volume_per_slab_ft3: per_slab.value,
        total_volume_ft3: total.value,
        total_volume_yd3,
        total_volume_m3: total.canonical_value(),
        area_per_slab_ft2,
        total_area_ft2,
        total_weight_lb: weight_lb.value,
        total_weight_kg: weight_lb.canonical_value(),
        bags,
        cost_per_slab: cost_per(cost.total, input.quantity),
        cost_per_ft2: cost_per(cost.total, total_area_ft2),
        cost_per_yd3: cost_per(cost.total, total_volume_yd3),
        cost,
    })
}
