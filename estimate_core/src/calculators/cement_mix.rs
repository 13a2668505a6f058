//! # Cement Mix Calculation
//!
//! Cement, sand, aggregate and water for a nominal-mix concrete pour, from
//! either a direct volume or a slab area and thickness.
//!
//! The wet volume goes through [`crate::derivation::proportion`]: wastage is
//! applied, then the dry volume multiplier, then the volume is split by the
//! grade's parts. Cement is priced by the purchasable (rounded up) bag count.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::calculators::cement_mix::{calculate, CementMixInput, MixQuantity};
//! use estimate_core::config::EstimateSettings;
//! use estimate_core::materials::MixGrade;
//!
//! let input = CementMixInput {
//!     label: "Footing".to_string(),
//!     grade: MixGrade::M20,
//!     quantity: MixQuantity::Volume { volume: 1.0 },
//!     wastage_percent: Some(5.0),
//!     dry_volume_multiplier: None,
//!     water_cement_ratio: None,
//!     cement_cost_per_bag: 8.0,
//!     sand_cost_per_unit: 50.0,
//!     aggregate_cost_per_unit: 60.0,
//! };
//!
//! let result = calculate(&input, &EstimateSettings::default()).unwrap();
//! assert!((result.cement_bags.raw - 8.4672).abs() < 1e-4);
//! assert_eq!(result.cement_bags.required, 9);
//! ```

use serde::{Deserialize, Serialize};

use super::{non_negative, wastage_percent};
use crate::config::EstimateSettings;
use crate::conversion::{AreaUnit, LengthUnit, Quantity, VolumeUnit};
use crate::cost::CostBreakdown;
use crate::derivation::{proportion, PurchaseCount};
use crate::errors::{require_positive, CalcResult};
use crate::materials::MixGrade;
use crate::units::{UnitLabels, UnitSystem};

/// How the wet volume is given
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MixQuantity {
    /// m³ or ft³
    Volume { volume: f64 },
    /// Metric: all in m. Imperial: length and width in ft, thickness in inches.
    Area { length: f64, width: f64, thickness: f64 },
}

impl MixQuantity {
    /// Wet volume in the given unit system
    pub fn wet_volume(&self, system: UnitSystem) -> Quantity {
        match (*self, system) {
            (MixQuantity::Volume { volume }, _) => Quantity::new(volume, system.volume()),
            (MixQuantity::Area { length, width, thickness }, UnitSystem::Metric) => {
                Quantity::new(length * width * thickness, VolumeUnit::CubicMeter)
            }
            (MixQuantity::Area { length, width, thickness }, UnitSystem::Imperial) => {
                let area_m2 = AreaUnit::SquareFoot.factor() * length * width;
                let thickness_m = LengthUnit::Inch.to_meters(thickness);
                Quantity::new(area_m2 * thickness_m, VolumeUnit::CubicMeter)
            }
        }
    }
}

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Ground slab",
///   "grade": "M15",
///   "quantity": { "mode": "area", "length": 10.0, "width": 10.0, "thickness": 0.15 },
///   "wastage_percent": 5.0,
///   "cement_cost_per_bag": 8.0,
///   "sand_cost_per_unit": 50.0,
///   "aggregate_cost_per_unit": 60.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CementMixInput {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub grade: MixGrade,
    pub quantity: MixQuantity,
    #[serde(default)]
    pub wastage_percent: Option<f64>,
    /// Overrides the settings value
    #[serde(default)]
    pub dry_volume_multiplier: Option<f64>,
    /// Overrides the grade's ratio
    #[serde(default)]
    pub water_cement_ratio: Option<f64>,
    #[serde(default)]
    pub cement_cost_per_bag: f64,
    /// Per m³ or ft³
    #[serde(default)]
    pub sand_cost_per_unit: f64,
    /// Per m³ or ft³
    #[serde(default)]
    pub aggregate_cost_per_unit: f64,
}

impl CementMixInput {
    pub fn validate(&self) -> CalcResult<()> {
        match self.quantity {
            MixQuantity::Volume { volume } => {
                non_negative("volume", volume)?;
            }
            MixQuantity::Area { length, width, thickness } => {
                non_negative("length", length)?;
                non_negative("width", width)?;
                non_negative("thickness", thickness)?;
            }
        }
        if let Some(k) = self.dry_volume_multiplier {
            require_positive("dry_volume_multiplier", k)?;
        }
        if let Some(wc) = self.water_cement_ratio {
            non_negative("water_cement_ratio", wc)?;
        }
        Ok(())
    }
}

/// Volumes in m³ or ft³
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CementMixResult {
    pub grade: MixGrade,
    pub ratio: String,
    pub wet_volume: f64,
    pub dry_volume: f64,
    pub cement_volume: f64,
    pub sand_volume: f64,
    pub aggregate_volume: f64,
    pub cement_kg: f64,
    pub cement_bags: PurchaseCount,
    pub water_liters: f64,
    pub cost: CostBreakdown,
    pub units: UnitLabels,
}

pub fn calculate(input: &CementMixInput, settings: &EstimateSettings) -> CalcResult<CementMixResult> {
    input.validate()?;
    let wastage = wastage_percent(input.wastage_percent, settings)?;
    let system = settings.unit_system;

    let mut mix = input.grade.spec();
    if let Some(wc) = input.water_cement_ratio {
        mix = mix.with_water_cement_ratio(wc);
    }
    let mut constants = settings.mix_constants();
    if let Some(k) = input.dry_volume_multiplier {
        constants.dry_volume_multiplier = k;
    }

    let wet = input.quantity.wet_volume(system);
    tracing::debug!(label = %input.label, grade = %input.grade, wet = %wet, "cement mix volume");
    let q = proportion(&wet, &mix, wastage, &constants)?;
    tracing::debug!(cement_kg = q.cement_mass.value, bags = q.cement_bags.required, "cement mix derived");

    let volume_unit = system.volume();
    let out = |v: &Quantity| -> CalcResult<f64> { Ok(v.convert_to(volume_unit)?.value) };
    let sand_volume = out(&q.sand_volume)?;
    let aggregate_volume = out(&q.aggregate_volume)?;

    let cost = CostBreakdown::new()
        .with_item("Cement bags", q.cement_bags.required as f64, input.cement_cost_per_bag)
        .with_item(format!("Sand ({})", volume_unit.symbol()), sand_volume, input.sand_cost_per_unit)
        .with_item(
            format!("Aggregate ({})", volume_unit.symbol()),
            aggregate_volume,
            input.aggregate_cost_per_unit,
        );

    Ok(CementMixResult {
        grade: input.grade,
        ratio: input.grade.ratio_label(),
        wet_volume: out(&q.wet_volume)?,
        dry_volume: out(&q.dry_volume)?,
        cement_volume: out(&q.cement_volume)?,
        sand_volume,
        aggregate_volume,
        cement_kg: q.cement_mass.value,
        cement_bags: q.cement_bags,
        water_liters: q.water_mass.value,
        cost,
        units: system.labels(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    fn footing() -> CementMixInput {
        CementMixInput {
            label: "Footing".to_string(),
            grade: MixGrade::M20,
            quantity: MixQuantity::Volume { volume: 1.0 },
            wastage_percent: Some(5.0),
            dry_volume_multiplier: None,
            water_cement_ratio: None,
            cement_cost_per_bag: 8.0,
            sand_cost_per_unit: 50.0,
            aggregate_cost_per_unit: 60.0,
        }
    }

    #[test]
    fn test_m20_one_cubic_meter() {
        let r = calculate(&footing(), &EstimateSettings::default()).unwrap();
        assert!(approx_eq(r.dry_volume, 1.617, 1e-12));
        assert!(approx_eq(r.cement_volume, 0.294, 1e-12));
        assert!(approx_eq(r.cement_kg, 423.36, 1e-9));
        assert!(approx_eq(r.cement_bags.raw, 8.4672, 1e-9));
        assert_eq!(r.cement_bags.required, 9);
        assert!(approx_eq(r.water_liters, 211.68, 1e-9));
        // 9 × 8 + 0.441 × 50 + 0.882 × 60
        assert!(approx_eq(r.cost.total, 72.0 + 22.05 + 52.92, 1e-9));
        assert_eq!(r.ratio, "1 : 1.5 : 3");
    }

    #[test]
    fn test_area_mode_metric() {
        let input = CementMixInput {
            quantity: MixQuantity::Area { length: 10.0, width: 10.0, thickness: 0.15 },
            wastage_percent: Some(0.0),
            ..footing()
        };
        let r = calculate(&input, &EstimateSettings::default()).unwrap();
        assert!(approx_eq(r.wet_volume, 15.0, 1e-12));
        assert!(approx_eq(r.dry_volume, 15.0 * 1.54, 1e-12));
    }

    #[test]
    fn test_area_mode_imperial() {
        let input = CementMixInput {
            quantity: MixQuantity::Area { length: 10.0, width: 10.0, thickness: 6.0 },
            wastage_percent: Some(0.0),
            ..footing()
        };
        let settings = EstimateSettings::default().with_unit_system(UnitSystem::Imperial);
        let r = calculate(&input, &settings).unwrap();
        // 100 ft² × 0.5 ft
        assert!(approx_eq(r.wet_volume, 50.0, 1e-5));
        assert_eq!(r.units.volume, "ft³");
    }

    #[test]
    fn test_overrides() {
        let input = CementMixInput {
            dry_volume_multiplier: Some(1.0),
            water_cement_ratio: Some(0.4),
            wastage_percent: Some(0.0),
            ..footing()
        };
        let r = calculate(&input, &EstimateSettings::default()).unwrap();
        assert!(approx_eq(r.dry_volume, 1.0, 1e-12));
        assert!(approx_eq(r.water_liters, r.cement_kg * 0.4, 1e-12));
    }

    #[test]
    fn test_zero_dry_multiplier_rejected() {
        let input = CementMixInput {
            dry_volume_multiplier: Some(0.0),
            ..footing()
        };
        let err = calculate(&input, &EstimateSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MATERIAL_CONSTANT");
    }
}
