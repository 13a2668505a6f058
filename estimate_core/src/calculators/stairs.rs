//! # Concrete Stairs Calculation
//!
//! Cast-in-place stair flight volume from step and carriage geometry. Inputs
//! are in m (metric) or inches (imperial); results are reported in m/m²/m³
//! or ft/ft²/ft³.

use serde::{Deserialize, Serialize};

use super::{non_negative, wastage_percent};
use crate::config::EstimateSettings;
use crate::conversion::{Family, LengthUnit, Quantity};
use crate::cost::CostBreakdown;
use crate::derivation::apply_wastage;
use crate::errors::CalcResult;
use crate::geometry::{compute_volume, ShapeParameters, StairFlight};
use crate::units::UnitLabels;

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Basement stair",
///   "num_steps": 12,
///   "riser_height": 0.18,
///   "tread_run": 0.25,
///   "nosing_overhang": 0.03,
///   "throat_thickness": 0.15,
///   "stair_width": 1.2,
///   "riser_style": "regular",
///   "wastage_percent": 10.0,
///   "cost_per_unit": 100.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteStairsInput {
    #[serde(default)]
    pub label: String,
    #[serde(flatten)]
    pub flight: StairFlight,
    #[serde(default)]
    pub wastage_percent: Option<f64>,
    /// Price per m³ or ft³ of concrete
    #[serde(default)]
    pub cost_per_unit: f64,
}

impl ConcreteStairsInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("riser_height", self.flight.riser_height)?;
        non_negative("tread_run", self.flight.tread_run)?;
        non_negative("nosing_overhang", self.flight.nosing_overhang)?;
        non_negative("throat_thickness", self.flight.throat_thickness)?;
        non_negative("stair_width", self.flight.stair_width)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteStairsResult {
    pub step_area: f64,
    pub carriage_area_per_step: f64,
    pub raw_volume: f64,
    pub final_volume: f64,
    pub total_rise: f64,
    pub total_run: f64,
    pub cost: CostBreakdown,
    pub units: UnitLabels,
}

pub fn calculate(input: &ConcreteStairsInput, settings: &EstimateSettings) -> CalcResult<ConcreteStairsResult> {
    input.validate()?;
    let wastage = wastage_percent(input.wastage_percent, settings)?;
    let system = settings.unit_system;

    let flight = input.flight.scaled(system.small_length().factor());
    let raw = compute_volume(&ShapeParameters::StairFlight(flight), LengthUnit::Meter);

    let volume_unit = system.volume();
    let raw_volume = raw.convert_to(volume_unit)?.value;
    let final_volume = apply_wastage(raw_volume, wastage);
    tracing::debug!(label = %input.label, steps = flight.num_steps, raw_volume, final_volume, "stair volume");

    let area_out = |m2: f64| -> CalcResult<f64> {
        Ok(Quantity::canonical(m2, Family::Area)
            .convert_to(system.length().squared())?
            .value)
    };
    let length_out = |m: f64| system.length().from_meters(m);

    let cost = CostBreakdown::new().with_item(
        format!("Concrete ({})", volume_unit.symbol()),
        final_volume,
        input.cost_per_unit,
    );

    Ok(ConcreteStairsResult {
        step_area: area_out(flight.step_area())?,
        carriage_area_per_step: area_out(flight.carriage_area_per_step())?,
        raw_volume,
        final_volume,
        total_rise: length_out(flight.total_rise()),
        total_run: length_out(flight.total_run()),
        cost,
        units: system.labels(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RiserStyle;
    use crate::units::UnitSystem;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    fn basement_stair() -> ConcreteStairsInput {
        ConcreteStairsInput {
            label: "Basement stair".to_string(),
            flight: StairFlight {
                num_steps: 12,
                riser_height: 0.18,
                tread_run: 0.25,
                nosing_overhang: 0.03,
                throat_thickness: 0.15,
                stair_width: 1.2,
                riser_style: RiserStyle::Regular,
            },
            wastage_percent: Some(10.0),
            cost_per_unit: 100.0,
        }
    }

    #[test]
    fn test_metric_flight() {
        let r = calculate(&basement_stair(), &EstimateSettings::default()).unwrap();
        let step = 0.5 * 0.25 * 0.18;
        let carriage = (0.25f64 * 0.25 + 0.18 * 0.18).sqrt() * 0.15;
        let raw = 12.0 * (step + carriage) * 1.2;
        assert!(approx_eq(r.step_area, step, 1e-12));
        assert!(approx_eq(r.carriage_area_per_step, carriage, 1e-12));
        assert!(approx_eq(r.raw_volume, raw, 1e-12));
        assert!(approx_eq(r.final_volume, raw * 1.1, 1e-12));
        assert!(approx_eq(r.total_rise, 2.16, 1e-12));
        assert!(approx_eq(r.total_run, 2.75, 1e-12));
        assert!(approx_eq(r.cost.total, raw * 1.1 * 100.0, 1e-12));
    }

    #[test]
    fn test_angled_risers_add_nosing() {
        let mut input = basement_stair();
        input.flight.riser_style = RiserStyle::Angled;
        let angled = calculate(&input, &EstimateSettings::default()).unwrap();
        let regular = calculate(&basement_stair(), &EstimateSettings::default()).unwrap();
        assert!(angled.raw_volume > regular.raw_volume);
        assert!(approx_eq(angled.step_area, 0.5 * 0.28 * 0.18, 1e-12));
    }

    #[test]
    fn test_imperial_inputs_in_inches() {
        let input = ConcreteStairsInput {
            flight: StairFlight {
                num_steps: 3,
                riser_height: 7.0,
                tread_run: 11.0,
                nosing_overhang: 0.0,
                throat_thickness: 4.0,
                stair_width: 36.0,
                riser_style: RiserStyle::Regular,
            },
            wastage_percent: Some(0.0),
            ..basement_stair()
        };
        let settings = EstimateSettings::default().with_unit_system(UnitSystem::Imperial);
        let r = calculate(&input, &settings).unwrap();
        // Same flight computed in inches, then in³ → ft³
        let in3 = input.flight.volume();
        assert!(approx_eq(r.raw_volume, in3 / 1728.0, 1e-5));
        assert!(approx_eq(r.total_rise, 21.0 / 12.0, 1e-9));
        assert!(approx_eq(r.total_run, 22.0 / 12.0, 1e-9));
        assert_eq!(r.units.volume, "ft³");
    }

    #[test]
    fn test_single_step_has_no_run() {
        let mut input = basement_stair();
        input.flight.num_steps = 1;
        let r = calculate(&input, &EstimateSettings::default()).unwrap();
        assert_eq!(r.total_run, 0.0);
    }
}
