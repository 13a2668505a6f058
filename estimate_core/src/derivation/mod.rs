//! # Material Quantity Derivation
//!
//! Turns a computed volume (or a count of laid units) into purchasable
//! discrete units: cement bags, mortar bags, blocks.
//!
//! Every purchase count goes through [`ceil_count`], which never rounds down.
//! Wastage is applied to the raw figure first, so rounding happens once, on
//! the buffered value. The unrounded figure stays available next to the count
//! in [`PurchaseCount`].
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::conversion::{Quantity, VolumeUnit};
//! use estimate_core::derivation::{derive_materials, MaterialSpec, MixConstants, Requirement};
//! use estimate_core::materials::MixSpec;
//!
//! let spec = MaterialSpec::Proportional {
//!     mix: MixSpec::by_grade("M20").unwrap(),
//!     constants: MixConstants::default(),
//! };
//! let volume = Requirement::Volume(Quantity::new(1.0, VolumeUnit::CubicMeter));
//! let breakdown = derive_materials(&volume, &spec, 5.0).unwrap();
//!
//! let bags = breakdown.count("cement_bags").unwrap();
//! assert!((bags.raw - 8.4672).abs() < 1e-4);
//! assert_eq!(bags.required, 9);
//! ```

pub mod mass_based;
pub mod proportional;
pub mod yield_based;

pub use mass_based::{bags_for_mass, bags_for_volume};
pub use proportional::{proportion, MixConstants, MixQuantities};
pub use yield_based::{bags_for_units, YieldEstimate};

use serde::{Deserialize, Serialize};

use crate::conversion::Quantity;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{MaterialYield, MixSpec};

/// Absolute distance from an integer below which a raw count is treated as
/// that integer. Absorbs float noise such as `30.0 / 0.08 = 375.00000000000006`
/// without ever rounding a real fraction down, whatever the magnitude.
const SNAP_TOLERANCE: f64 = 1e-9;

/// Smallest whole number of units covering `raw`.
///
/// Zero, negative and non-finite requirements buy nothing.
pub fn ceil_count(raw: f64) -> u64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    let nearest = raw.round();
    if (raw - nearest).abs() <= SNAP_TOLERANCE {
        return nearest as u64;
    }
    raw.ceil() as u64
}

/// `numerator / denominator`, or 0 when the denominator is not positive.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// `value × (1 + percent / 100)`
pub fn apply_wastage(value: f64, percent: f64) -> f64 {
    value * (1.0 + percent / 100.0)
}

/// A raw requirement and the whole-unit count that covers it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurchaseCount {
    /// Unrounded requirement, for display
    pub raw: f64,
    /// Units to buy, `ceil(raw)`
    pub required: u64,
}

impl PurchaseCount {
    pub fn from_raw(raw: f64) -> Self {
        PurchaseCount {
            raw,
            required: ceil_count(raw),
        }
    }
}

/// How a volume or unit count maps onto purchasable material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaterialSpec {
    /// Nominal concrete mix by volume parts
    Proportional { mix: MixSpec, constants: MixConstants },
    /// Mortar-style bags, each laying `yield_per_bag.average` units
    Yield { yield_per_bag: MaterialYield },
}

/// What is being supplied for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Wet compacted volume
    Volume(Quantity),
    /// Number of masonry units to lay
    Units(f64),
}

/// A derived material amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialComponent {
    pub name: String,
    pub quantity: Quantity,
}

/// A derived purchase count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCount {
    pub name: String,
    pub count: PurchaseCount,
}

/// Output of [`derive_materials`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialBreakdown {
    pub components: Vec<MaterialComponent>,
    pub counts: Vec<MaterialCount>,
}

impl MaterialBreakdown {
    fn component(&mut self, name: &str, quantity: Quantity) {
        self.components.push(MaterialComponent {
            name: name.to_string(),
            quantity,
        });
    }

    fn purchase(&mut self, name: &str, count: PurchaseCount) {
        self.counts.push(MaterialCount {
            name: name.to_string(),
            count,
        });
    }

    /// Look up a count by name
    pub fn count(&self, name: &str) -> Option<PurchaseCount> {
        self.counts.iter().find(|c| c.name == name).map(|c| c.count)
    }

    /// Look up a component by name
    pub fn quantity(&self, name: &str) -> Option<Quantity> {
        self.components.iter().find(|c| c.name == name).map(|c| c.quantity)
    }
}

/// Derive components and purchase counts for `requirement` under `spec`.
///
/// Proportional mixes take a volume and apply `wastage_percent` to it before
/// the dry multiplier. Yield specs take a unit count and treat
/// `wastage_percent` as the bag buffer.
pub fn derive_materials(
    requirement: &Requirement,
    spec: &MaterialSpec,
    wastage_percent: f64,
) -> CalcResult<MaterialBreakdown> {
    let mut breakdown = MaterialBreakdown::default();

    match (spec, requirement) {
        (MaterialSpec::Proportional { mix, constants }, Requirement::Volume(volume)) => {
            let q = proportion(volume, mix, wastage_percent, constants)?;
            breakdown.component("dry_volume", q.dry_volume);
            breakdown.component("cement_volume", q.cement_volume);
            breakdown.component("sand_volume", q.sand_volume);
            breakdown.component("aggregate_volume", q.aggregate_volume);
            breakdown.component("cement_mass", q.cement_mass);
            breakdown.component("water_mass", q.water_mass);
            breakdown.purchase("cement_bags", q.cement_bags);
        }
        (MaterialSpec::Yield { yield_per_bag }, Requirement::Units(units)) => {
            let estimate = bags_for_units(*units, yield_per_bag, wastage_percent)?;
            breakdown.purchase("bags", PurchaseCount {
                raw: estimate.raw_bags,
                required: estimate.required_bags,
            });
            breakdown.purchase("bags_with_buffer", PurchaseCount {
                raw: estimate.required_bags as f64 * (1.0 + wastage_percent / 100.0),
                required: estimate.bags_with_buffer,
            });
        }
        (MaterialSpec::Proportional { .. }, Requirement::Units(_)) => {
            return Err(CalcError::invalid_input(
                "requirement",
                "units",
                "Proportional mixes are derived from a volume",
            ));
        }
        (MaterialSpec::Yield { .. }, Requirement::Volume(_)) => {
            return Err(CalcError::invalid_input(
                "requirement",
                "volume",
                "Yield-based materials are derived from a unit count",
            ));
        }
    }

    tracing::debug!(
        components = breakdown.components.len(),
        counts = breakdown.counts.len(),
        wastage_percent,
        "derived materials"
    );
    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::VolumeUnit;
    use crate::materials::{MasonryUnit, MortarBag};

    #[test]
    fn test_ceil_count_invariant() {
        let samples = [0.001, 0.5, 1.0, 1.0000001, 8.4681, 23.5294, 26.4, 374.2, 1e6 + 0.3];
        for raw in samples {
            let n = ceil_count(raw) as f64;
            assert!(n >= raw, "{raw} -> {n}");
            assert!(n < raw + 1.0, "{raw} -> {n}");
        }
    }

    #[test]
    fn test_ceil_count_large_fractions_round_up() {
        let samples = [1.0e10 + 0.005, 5.0e11 + 0.25, 2.0e12 + 0.4];
        for raw in samples {
            let n = ceil_count(raw);
            assert!(n as f64 >= raw, "{raw} -> {n}");
            assert_eq!(n, raw.ceil() as u64);
        }
    }

    #[test]
    fn test_ceil_count_absorbs_float_noise() {
        assert_eq!(ceil_count(30.0 / 0.08), 375);
        assert_eq!(ceil_count(24.0 * 1.1), 27);
        assert_eq!(ceil_count(3.0000001), 4);
    }

    #[test]
    fn test_ceil_count_nothing_to_buy() {
        assert_eq!(ceil_count(0.0), 0);
        assert_eq!(ceil_count(-4.2), 0);
        assert_eq!(ceil_count(f64::NAN), 0);
        assert_eq!(ceil_count(f64::INFINITY), 0);
    }

    #[test]
    fn test_safe_div() {
        assert_eq!(safe_div(3.0, 1.5), 2.0);
        assert_eq!(safe_div(3.0, 0.0), 0.0);
        assert_eq!(safe_div(3.0, -1.0), 0.0);
    }

    #[test]
    fn test_apply_wastage() {
        assert_eq!(apply_wastage(100.0, 0.0), 100.0);
        assert!((apply_wastage(100.0, 5.0) - 105.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_wastage_is_noop() {
        let spec = MaterialSpec::Proportional {
            mix: MixSpec::by_grade("M15").unwrap(),
            constants: MixConstants::default(),
        };
        let volume = Requirement::Volume(Quantity::new(2.5, VolumeUnit::CubicMeter));
        let unbuffered = derive_materials(&volume, &spec, 0.0).unwrap();
        // 2.5 m³ × 1.54 × 1/7 × 1440 kg/m³ / 50 kg
        let expected = 2.5 * 1.54 / 7.0 * 1440.0 / 50.0;
        let bags = unbuffered.count("cement_bags").unwrap();
        assert!((bags.raw - expected).abs() < 1e-9);
        assert_eq!(bags.required, ceil_count(expected));

        let yield_spec = MaterialSpec::Yield {
            yield_per_bag: MasonryUnit::ModularBricks.mortar_yield(MortarBag::Lb80),
        };
        let units = Requirement::Units(1000.0);
        let c = derive_materials(&units, &yield_spec, 0.0).unwrap();
        assert_eq!(
            c.count("bags").unwrap().required,
            c.count("bags_with_buffer").unwrap().required
        );
    }

    #[test]
    fn test_mortar_bags_with_buffer() {
        let spec = MaterialSpec::Yield {
            yield_per_bag: MasonryUnit::ModularBricks.mortar_yield(MortarBag::Lb80),
        };
        let breakdown = derive_materials(&Requirement::Units(1000.0), &spec, 10.0).unwrap();
        let bags = breakdown.count("bags").unwrap();
        assert!((bags.raw - 23.5294).abs() < 1e-4);
        assert_eq!(bags.required, 24);
        assert_eq!(breakdown.count("bags_with_buffer").unwrap().required, 27);
    }

    #[test]
    fn test_mismatched_requirement_rejected() {
        let spec = MaterialSpec::Proportional {
            mix: MixSpec::by_grade("M20").unwrap(),
            constants: MixConstants::default(),
        };
        let err = derive_materials(&Requirement::Units(10.0), &spec, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_zero_constants_rejected() {
        let spec = MaterialSpec::Proportional {
            mix: MixSpec::by_grade("M20").unwrap(),
            constants: MixConstants {
                cement_bag_kg: 0.0,
                ..MixConstants::default()
            },
        };
        let volume = Requirement::Volume(Quantity::new(1.0, VolumeUnit::CubicMeter));
        let err = derive_materials(&volume, &spec, 5.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MATERIAL_CONSTANT");

        let spec = MaterialSpec::Yield {
            yield_per_bag: MaterialYield { min: 0.0, max: 0.0, average: 0.0 },
        };
        let err = derive_materials(&Requirement::Units(10.0), &spec, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MATERIAL_CONSTANT");
    }
}
