//! # Shape Volume Calculation
//!
//! Volume of any supported solid, or a volume typed in directly, reported in
//! the unit the material is sold by (yd³ for ready-mix, m³, ft³ ...) and
//! priced per that unit.

use serde::{Deserialize, Serialize};

use super::non_negative;
use crate::config::EstimateSettings;
use crate::conversion::{Quantity, VolumeUnit};
use crate::cost::CostBreakdown;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::Shape;

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Pier",
///   "shape": { "unit": "ft", "shape": "cylinder", "size": { "diameter": 2.0 }, "height": 10.0 },
///   "output_unit": "yd3",
///   "price_per_unit": 145.0
/// }
/// ```
///
/// Give either `shape` or `custom_volume`; a custom volume is read in
/// `output_unit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeVolumeInput {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub shape: Option<Shape>,
    #[serde(default)]
    pub custom_volume: Option<f64>,
    #[serde(default = "default_output_unit")]
    pub output_unit: VolumeUnit,
    #[serde(default)]
    pub price_per_unit: f64,
}

fn default_output_unit() -> VolumeUnit {
    VolumeUnit::CubicYard
}

impl ShapeVolumeInput {
    pub fn validate(&self) -> CalcResult<()> {
        match (&self.shape, self.custom_volume) {
            (Some(_), Some(_)) => {
                return Err(CalcError::invalid_input(
                    "custom_volume",
                    "both",
                    "Give either a shape or a custom volume, not both",
                ))
            }
            (None, None) => {
                return Err(CalcError::invalid_input(
                    "shape",
                    "none",
                    "A shape or a custom volume is required",
                ))
            }
            (Some(shape), None) => {
                let raw = shape.params.raw_volume();
                if !raw.is_finite() {
                    return Err(CalcError::invalid_input("shape", raw.to_string(), "Shape volume is not finite"));
                }
            }
            (None, Some(volume)) => {
                non_negative("custom_volume", volume)?;
            }
        }
        non_negative("price_per_unit", self.price_per_unit)?;
        Ok(())
    }

    fn source_volume(&self) -> Quantity {
        match (&self.shape, self.custom_volume) {
            (Some(shape), _) => shape.volume(),
            (None, volume) => Quantity::new(volume.unwrap_or_default(), self.output_unit),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeVolumeResult {
    pub shape_kind: String,
    /// Volume in the requested unit
    pub volume: Quantity,
    pub cubic_yards: f64,
    pub cubic_feet: f64,
    pub cubic_meters: f64,
    pub cost: CostBreakdown,
}

pub fn calculate(input: &ShapeVolumeInput, _settings: &EstimateSettings) -> CalcResult<ShapeVolumeResult> {
    input.validate()?;

    let source = input.source_volume();
    let volume = source.convert_to(input.output_unit)?;
    let shape_kind = input
        .shape
        .as_ref()
        .map(|s| s.params.kind())
        .unwrap_or("Custom");
    tracing::debug!(label = %input.label, shape = shape_kind, volume = %volume, "shape volume");

    let cost = CostBreakdown::new().with_item(
        format!("Material ({})", input.output_unit.symbol()),
        volume.value,
        input.price_per_unit,
    );

    Ok(ShapeVolumeResult {
        shape_kind: shape_kind.to_string(),
        volume,
        cubic_yards: source.convert_to(VolumeUnit::CubicYard)?.value,
        cubic_feet: source.convert_to(VolumeUnit::CubicFoot)?.value,
        cubic_meters: source.canonical_value(),
        cost,
    })
}
