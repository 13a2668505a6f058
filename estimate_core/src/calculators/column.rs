//! # Concrete Column Calculation
//!
//! Concrete for round or rectangular columns, split into cement, sand and
//! aggregate by wet volume (no dry multiplier), with a bag count by weight.
//!
//! Units follow [`EstimateSettings::unit_system`]:
//!
//! | Field          | Metric | Imperial |
//! |----------------|--------|----------|
//! | Section dims   | m      | in       |
//! | Height         | m      | ft       |
//! | Density        | kg/m³  | lb/ft³   |
//! | Bag weight     | kg     | lb       |

use serde::{Deserialize, Serialize};

use super::{non_negative, wastage_percent};
use crate::config::EstimateSettings;
use crate::conversion::{mass_from_volume, LengthUnit, Quantity};
use crate::cost::CostBreakdown;
use crate::derivation::{bags_for_mass, PurchaseCount};
use crate::errors::{require_positive, CalcResult};
use crate::geometry::{compute_volume, CircleSize, ShapeParameters};
use crate::units::UnitLabels;

/// Column cross-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum ColumnSection {
    Circular { diameter: f64 },
    Rectangular { width: f64, depth: f64 },
}

/// Volumetric proportions of cement : sand : aggregate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixParts {
    pub cement: f64,
    pub sand: f64,
    pub aggregate: f64,
}

impl Default for MixParts {
    fn default() -> Self {
        MixParts {
            cement: 1.0,
            sand: 2.0,
            aggregate: 4.0,
        }
    }
}

impl MixParts {
    pub fn total(&self) -> CalcResult<f64> {
        require_positive("mix_total_parts", self.cement + self.sand + self.aggregate)
    }
}

/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "section": { "section": "circular", "diameter": 0.4 },
///   "height": 3.0,
///   "quantity": 4,
///   "density": 2400.0,
///   "bag_weight": 50.0,
///   "wastage_percent": 5.0,
///   "cost_per_bag": 8.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteColumnInput {
    #[serde(default)]
    pub label: String,
    pub section: ColumnSection,
    pub height: f64,
    pub quantity: f64,
    pub density: f64,
    #[serde(default)]
    pub mix: MixParts,
    pub bag_weight: f64,
    #[serde(default)]
    pub wastage_percent: Option<f64>,
    #[serde(default)]
    pub cost_per_bag: f64,
}

impl ConcreteColumnInput {
    pub fn validate(&self) -> CalcResult<()> {
        match self.section {
            ColumnSection::Circular { diameter } => {
                non_negative("diameter", diameter)?;
            }
            ColumnSection::Rectangular { width, depth } => {
                non_negative("width", width)?;
                non_negative("depth", depth)?;
            }
        }
        non_negative("height", self.height)?;
        non_negative("quantity", self.quantity)?;
        non_negative("density", self.density)?;
        non_negative("mix.cement", self.mix.cement)?;
        non_negative("mix.sand", self.mix.sand)?;
        non_negative("mix.aggregate", self.mix.aggregate)?;
        Ok(())
    }
}

/// Volumes and weights in the active unit system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteColumnResult {
    pub volume_per_column: f64,
    pub total_volume: f64,
    pub total_weight: f64,
    pub cement_volume: f64,
    pub sand_volume: f64,
    pub aggregate_volume: f64,
    pub bags: PurchaseCount,
    pub cost: CostBreakdown,
    pub units: UnitLabels,
}

pub fn calculate(input: &ConcreteColumnInput, settings: &EstimateSettings) -> CalcResult<ConcreteColumnResult> {
    input.validate()?;
    let wastage = wastage_percent(input.wastage_percent, settings)?;
    let system = settings.unit_system;

    let section_m = |v: f64| system.small_length().to_meters(v);
    let height_m = system.length().to_meters(input.height);

    let shape = match input.section {
        ColumnSection::Circular { diameter } => ShapeParameters::Cylinder {
            size: CircleSize::Diameter(section_m(diameter)),
            height: height_m,
        },
        ColumnSection::Rectangular { width, depth } => ShapeParameters::Slab {
            length: section_m(width),
            width: section_m(depth),
            height: height_m,
        },
    };
    let per_column = compute_volume(&shape, LengthUnit::Meter);
    let total = per_column.scale(input.quantity);

    let density = Quantity::new(input.density, system.density());
    let weight = mass_from_volume(&total, &density)?;
    tracing::debug!(label = %input.label, total_m3 = total.value, weight_kg = weight.value, "column volume");

    let parts_total = input.mix.total()?;
    let share = |part: f64| total.value * part / parts_total;

    let bag_kg = system.mass().to_kilograms(input.bag_weight);
    let buffered = bags_for_mass(weight.value, bag_kg, wastage)?;
    let bags = PurchaseCount {
        raw: weight.value / bag_kg,
        required: buffered.required,
    };

    let cost = CostBreakdown::new().with_item("Concrete bags", bags.required as f64, input.cost_per_bag);

    let volume_out = |m3: f64| system.volume().from_cubic_meters(m3);
    Ok(ConcreteColumnResult {
        volume_per_column: volume_out(per_column.value),
        total_volume: volume_out(total.value),
        total_weight: system.mass().from_kilograms(weight.value),
        cement_volume: volume_out(share(input.mix.cement)),
        sand_volume: volume_out(share(input.mix.sand)),
        aggregate_volume: volume_out(share(input.mix.aggregate)),
        bags,
        cost,
        units: system.labels(),
    })
}
