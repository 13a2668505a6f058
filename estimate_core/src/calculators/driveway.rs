//! # Concrete Driveway Calculation
//!
//! Concrete and gravel base volumes for a rectangular driveway, with an
//! optional reinforcement takeoff (rebar grid and edge formwork).
//!
//! Plan dimensions are in the system length unit (m or ft); depths and rebar
//! spacing are in cm or in. Prices are per system volume unit for concrete
//! and gravel, and per system length unit for rebar and formwork.
//!
//! The rebar grid runs bars both ways at `spacing`, each bar taken as long as
//! the longer side: `(l / s + w / s) × 2 × max(l, w)`.

use serde::{Deserialize, Serialize};

use super::non_negative;
use crate::config::EstimateSettings;
use crate::conversion::LengthUnit;
use crate::cost::CostBreakdown;
use crate::derivation::PurchaseCount;
use crate::errors::{require_positive, CalcResult};
use crate::geometry::{compute_volume, units_to_cover, ShapeParameters};
use crate::units::{UnitLabels, UnitSystem};

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Front drive",
///   "length": 6, "width": 3,
///   "concrete_depth": 10, "gravel_depth": 10,
///   "concrete_price": 150, "gravel_price": 50,
///   "reinforcement": { "rebar_spacing": 30, "rebar_price": 5, "formwork_price": 10 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteDrivewayInput {
    #[serde(default)]
    pub label: String,
    pub length: f64,
    pub width: f64,
    /// Slab depth (cm or in)
    pub concrete_depth: f64,
    /// Compacted gravel base depth (cm or in)
    #[serde(default)]
    pub gravel_depth: f64,
    #[serde(default)]
    pub concrete_price: f64,
    #[serde(default)]
    pub gravel_price: f64,
    /// Rebar and formwork takeoff; volumes only when absent
    #[serde(default)]
    pub reinforcement: Option<DrivewayReinforcement>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrivewayReinforcement {
    /// Grid spacing (cm or in), 30 cm / 12 in when absent
    #[serde(default)]
    pub rebar_spacing: Option<f64>,
    /// Stock bar length (m or ft), 6 m / 20 ft when absent
    #[serde(default)]
    pub bar_length: Option<f64>,
    #[serde(default)]
    pub rebar_price: f64,
    #[serde(default)]
    pub formwork_price: f64,
}

impl DrivewayReinforcement {
    fn spacing(&self, system: UnitSystem) -> f64 {
        self.rebar_spacing.unwrap_or(match system {
            UnitSystem::Metric => 30.0,
            UnitSystem::Imperial => 12.0,
        })
    }

    fn bar_length(&self, system: UnitSystem) -> f64 {
        self.bar_length.unwrap_or(match system {
            UnitSystem::Metric => 6.0,
            UnitSystem::Imperial => 20.0,
        })
    }
}

impl ConcreteDrivewayInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("length", self.length)?;
        non_negative("width", self.width)?;
        non_negative("concrete_depth", self.concrete_depth)?;
        non_negative("gravel_depth", self.gravel_depth)?;
        non_negative("concrete_price", self.concrete_price)?;
        non_negative("gravel_price", self.gravel_price)?;
        if let Some(r) = &self.reinforcement {
            non_negative("rebar_price", r.rebar_price)?;
            non_negative("formwork_price", r.formwork_price)?;
        }
        Ok(())
    }
}

/// Rebar grid and formwork quantities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrivewayReinforcementResult {
    pub rebar_total_length: f64,
    /// Stock bars to buy
    pub rebar_pieces: PurchaseCount,
    /// Perimeter, `2 × (l + w)`
    pub formwork_length: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteDrivewayResult {
    pub area: f64,
    pub concrete_volume: f64,
    pub gravel_volume: f64,
    pub reinforcement: Option<DrivewayReinforcementResult>,
    pub cost: CostBreakdown,
    pub units: UnitLabels,
}

/// Depths and spacing arrive in cm (metric) or in (imperial).
fn depth_unit(system: UnitSystem) -> LengthUnit {
    match system {
        UnitSystem::Metric => LengthUnit::Centimeter,
        UnitSystem::Imperial => LengthUnit::Inch,
    }
}

pub fn calculate(input: &ConcreteDrivewayInput, settings: &EstimateSettings) -> CalcResult<ConcreteDrivewayResult> {
    input.validate()?;
    let system = settings.unit_system;
    let length_unit = system.length();
    let to_length = |v: f64| length_unit.from_meters(depth_unit(system).to_meters(v));

    let (l, w) = (input.length, input.width);
    let layer = |depth: f64| {
        let slab = ShapeParameters::Slab {
            length: l,
            width: w,
            height: to_length(depth),
        };
        compute_volume(&slab, length_unit).value
    };
    let concrete_volume = layer(input.concrete_depth);
    let gravel_volume = layer(input.gravel_depth);
    tracing::debug!(label = %input.label, concrete_volume, gravel_volume, "driveway volumes");

    let mut cost = CostBreakdown::new()
        .with_item("Concrete", concrete_volume, input.concrete_price)
        .with_item("Gravel base", gravel_volume, input.gravel_price);

    let reinforcement = match &input.reinforcement {
        Some(r) => {
            let spacing = require_positive("rebar_spacing", to_length(r.spacing(system)))?;
            let bar_length = require_positive("bar_length", r.bar_length(system))?;
            let rebar_total_length = (l / spacing + w / spacing) * 2.0 * l.max(w);
            let rebar_pieces = PurchaseCount {
                raw: rebar_total_length / bar_length,
                required: units_to_cover(rebar_total_length, bar_length)?,
            };
            let formwork_length = 2.0 * (l + w);
            tracing::debug!(rebar_total_length, pieces = rebar_pieces.required, formwork_length, "driveway reinforcement");

            cost = cost
                .with_item("Rebar", rebar_total_length, r.rebar_price)
                .with_item("Formwork", formwork_length, r.formwork_price);
            Some(DrivewayReinforcementResult {
                rebar_total_length,
                rebar_pieces,
                formwork_length,
            })
        }
        None => None,
    };

    Ok(ConcreteDrivewayResult {
        area: l * w,
        concrete_volume,
        gravel_volume,
        reinforcement,
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

    fn drive() -> ConcreteDrivewayInput {
        ConcreteDrivewayInput {
            label: "Front drive".to_string(),
            length: 6.0,
            width: 3.0,
            concrete_depth: 10.0,
            gravel_depth: 10.0,
            concrete_price: 150.0,
            gravel_price: 50.0,
            reinforcement: None,
        }
    }

    fn with_rebar() -> ConcreteDrivewayInput {
        ConcreteDrivewayInput {
            reinforcement: Some(DrivewayReinforcement {
                rebar_price: 5.0,
                formwork_price: 10.0,
                ..Default::default()
            }),
            ..drive()
        }
    }

    #[test]
    fn test_volumes_only() {
        let r = calculate(&drive(), &EstimateSettings::default()).unwrap();
        assert!(approx_eq(r.area, 18.0, 1e-12));
        assert!(approx_eq(r.concrete_volume, 1.8, 1e-12));
        assert!(approx_eq(r.gravel_volume, 1.8, 1e-12));
        assert!(r.reinforcement.is_none());
        assert_eq!(r.cost.line_items.len(), 2);
        assert!(approx_eq(r.cost.total, 360.0, 1e-9));
        assert_eq!(r.units.volume, "m³");
    }

    #[test]
    fn test_metric_reinforcement_defaults() {
        let r = calculate(&with_rebar(), &EstimateSettings::default()).unwrap();
        let rebar = r.reinforcement.unwrap();
        // (6/0.3 + 3/0.3) × 2 × 6
        assert!(approx_eq(rebar.rebar_total_length, 360.0, 1e-9));
        assert!(approx_eq(rebar.rebar_pieces.raw, 60.0, 1e-9));
        assert_eq!(rebar.rebar_pieces.required, 60);
        assert!(approx_eq(rebar.formwork_length, 18.0, 1e-12));
        assert_eq!(r.cost.line_items.len(), 4);
        assert!(approx_eq(r.cost.total, 270.0 + 90.0 + 1800.0 + 180.0, 1e-9));
    }

    #[test]
    fn test_partial_bar_rounds_up() {
        let input = ConcreteDrivewayInput {
            reinforcement: Some(DrivewayReinforcement {
                bar_length: Some(7.0),
                ..Default::default()
            }),
            ..drive()
        };
        let r = calculate(&input, &EstimateSettings::default()).unwrap();
        let rebar = r.reinforcement.unwrap();
        assert!(approx_eq(rebar.rebar_pieces.raw, 360.0 / 7.0, 1e-9));
        assert_eq!(rebar.rebar_pieces.required, 52);
    }

    #[test]
    fn test_imperial_feet_and_inches() {
        let settings = EstimateSettings::default().with_unit_system(UnitSystem::Imperial);
        let input = ConcreteDrivewayInput {
            length: 20.0,
            width: 10.0,
            concrete_depth: 4.0,
            gravel_depth: 6.0,
            ..with_rebar()
        };
        let r = calculate(&input, &settings).unwrap();
        assert!(approx_eq(r.concrete_volume, 200.0 / 3.0, 1e-9));
        assert!(approx_eq(r.gravel_volume, 100.0, 1e-9));
        assert_eq!(r.units.volume, "ft³");

        // 12 in spacing, 20 ft bars
        let rebar = r.reinforcement.unwrap();
        assert!(approx_eq(rebar.rebar_total_length, 1200.0, 1e-9));
        assert_eq!(rebar.rebar_pieces.required, 60);
        assert!(approx_eq(rebar.formwork_length, 60.0, 1e-12));
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let input = ConcreteDrivewayInput {
            reinforcement: Some(DrivewayReinforcement {
                rebar_spacing: Some(0.0),
                ..Default::default()
            }),
            ..drive()
        };
        let err = calculate(&input, &EstimateSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MATERIAL_CONSTANT");
    }

    #[test]
    fn test_negative_depth_rejected() {
        let input = ConcreteDrivewayInput {
            gravel_depth: -2.0,
            ..drive()
        };
        let err = calculate(&input, &EstimateSettings::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
