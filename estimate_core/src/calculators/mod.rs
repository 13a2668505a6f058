//! # Quantity Calculators
//!
//! Every calculator follows the same pattern:
//!
//! - `*Input` - parameters as entered (JSON-serializable)
//! - `*Result` - quantities, purchase counts and cost (JSON-serializable)
//! - `calculate(&input, &settings) -> CalcResult<*Result>` - pure function
//!
//! Dimensions are read in the units of [`EstimateSettings::unit_system`]
//! unless the input names its units explicitly (slab, shape volume,
//! gallons, concrete weight). Results carry [`crate::units::UnitLabels`]
//! so a front end can print them without knowing the system.
//!
//! ## Running from JSON
//!
//! [`CalculationItem`] wraps every input behind a `"type"` tag:
//!
//! ```rust
//! use estimate_core::calculators::{CalculationItem, CalculationOutput};
//! use estimate_core::config::EstimateSettings;
//!
//! let json = r#"{
//!     "type": "Mortar",
//!     "label": "Garden wall",
//!     "number_of_units": 1000,
//!     "masonry_unit": "modular-bricks"
//! }"#;
//! let item: CalculationItem = serde_json::from_str(json).unwrap();
//! assert_eq!(item.calc_type(), "Mortar");
//!
//! match item.run(&EstimateSettings::default()).unwrap() {
//!     CalculationOutput::Mortar(result) => assert_eq!(result.bags_with_buffer, 27),
//!     other => panic!("unexpected output {other:?}"),
//! }
//! ```
//!
//! ## Available Calculators
//!
//! - [`slab`] - concrete slabs, bags by weight
//! - [`driveway`] - driveway concrete, gravel base, rebar and formwork
//! - [`cement_mix`] - nominal mix cement, sand, aggregate and water
//! - [`column`] - round or rectangular columns
//! - [`tube`] - hollow cylindrical forms
//! - [`stairs`] - cast-in-place stair flights
//! - [`block_wall`] - concrete block count and mortar
//! - [`block_fill`] - grout fill for hollow block cores
//! - [`brick`] - bricks and mortar for a wall
//! - [`mortar`] - mortar bags from yield tables
//! - [`board_foot`] - lumber board feet
//! - [`cubic_yard`] - volume of any shape in a sales unit
//! - [`gallons`] - gallons per square foot
//! - [`grout`] - tile joint grout
//! - [`thinset`] - tile thinset bed
//! - [`concrete_weight`] - concrete weight by type

pub mod block_fill;
pub mod block_wall;
pub mod board_foot;
pub mod brick;
pub mod cement_mix;
pub mod column;
pub mod concrete_weight;
pub mod cubic_yard;
pub mod driveway;
pub mod gallons;
pub mod grout;
pub mod mortar;
pub mod slab;
pub mod stairs;
pub mod thinset;
pub mod tube;

use serde::{Deserialize, Serialize};

use crate::config::EstimateSettings;
use crate::errors::{CalcError, CalcResult};

pub use block_fill::{BlockFillInput, BlockFillResult};
pub use block_wall::{ConcreteBlockWallInput, ConcreteBlockWallResult};
pub use board_foot::{BoardFootInput, BoardFootResult};
pub use brick::{BrickInput, BrickResult};
pub use cement_mix::{CementMixInput, CementMixResult, MixQuantity};
pub use column::{ColumnSection, ConcreteColumnInput, ConcreteColumnResult, MixParts};
pub use concrete_weight::{ConcreteWeightInput, ConcreteWeightResult};
pub use cubic_yard::{ShapeVolumeInput, ShapeVolumeResult};
pub use driveway::{ConcreteDrivewayInput, ConcreteDrivewayResult, DrivewayReinforcement};
pub use gallons::{CoverageMode, GallonsInput, GallonsResult};
pub use grout::{GroutInput, GroutResult};
pub use mortar::{MortarInput, MortarResult};
pub use slab::{ConcreteSlabInput, ConcreteSlabResult};
pub use stairs::{ConcreteStairsInput, ConcreteStairsResult};
pub use thinset::{ThinsetInput, ThinsetResult};
pub use tube::{ConcreteTubeInput, ConcreteTubeResult};

/// Reject a negative or non-finite dimension, count or price. Zero passes.
pub(crate) fn non_negative(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a non-negative number",
        ))
    }
}

/// The input's wastage, or the settings default when none was given.
pub(crate) fn wastage_percent(value: Option<f64>, settings: &EstimateSettings) -> CalcResult<f64> {
    non_negative("wastage_percent", value.unwrap_or(settings.default_wastage_percent))
}

/// Enum wrapper for all calculator inputs.
///
/// Lets heterogeneous calculations live in one collection (or one JSON
/// document) while keeping each input strongly typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    ConcreteSlab(ConcreteSlabInput),
    ConcreteDriveway(ConcreteDrivewayInput),
    CementMix(CementMixInput),
    ConcreteColumn(ConcreteColumnInput),
    ConcreteTube(ConcreteTubeInput),
    ConcreteStairs(ConcreteStairsInput),
    ConcreteBlockWall(ConcreteBlockWallInput),
    BlockFill(BlockFillInput),
    Brick(BrickInput),
    Mortar(MortarInput),
    BoardFoot(BoardFootInput),
    /// Volume of a shape in yd³ or another sales unit
    CubicYard(ShapeVolumeInput),
    GallonsPerSquareFoot(GallonsInput),
    Grout(GroutInput),
    Thinset(ThinsetInput),
    ConcreteTypeWeight(ConcreteWeightInput),
}

/// Result of [`CalculationItem::run`], tagged like the input it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    ConcreteSlab(ConcreteSlabResult),
    ConcreteDriveway(ConcreteDrivewayResult),
    CementMix(CementMixResult),
    ConcreteColumn(ConcreteColumnResult),
    ConcreteTube(ConcreteTubeResult),
    ConcreteStairs(ConcreteStairsResult),
    ConcreteBlockWall(ConcreteBlockWallResult),
    BlockFill(BlockFillResult),
    Brick(BrickResult),
    Mortar(MortarResult),
    BoardFoot(BoardFootResult),
    CubicYard(ShapeVolumeResult),
    GallonsPerSquareFoot(GallonsResult),
    Grout(GroutResult),
    Thinset(ThinsetResult),
    ConcreteTypeWeight(ConcreteWeightResult),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::ConcreteSlab(i) => &i.label,
            CalculationItem::ConcreteDriveway(i) => &i.label,
            CalculationItem::CementMix(i) => &i.label,
            CalculationItem::ConcreteColumn(i) => &i.label,
            CalculationItem::ConcreteTube(i) => &i.label,
            CalculationItem::ConcreteStairs(i) => &i.label,
            CalculationItem::ConcreteBlockWall(i) => &i.label,
            CalculationItem::BlockFill(i) => &i.label,
            CalculationItem::Brick(i) => &i.label,
            CalculationItem::Mortar(i) => &i.label,
            CalculationItem::BoardFoot(i) => &i.label,
            CalculationItem::CubicYard(i) => &i.label,
            CalculationItem::GallonsPerSquareFoot(i) => &i.label,
            CalculationItem::Grout(i) => &i.label,
            CalculationItem::Thinset(i) => &i.label,
            CalculationItem::ConcreteTypeWeight(i) => &i.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::ConcreteSlab(_) => "ConcreteSlab",
            CalculationItem::ConcreteDriveway(_) => "ConcreteDriveway",
            CalculationItem::CementMix(_) => "CementMix",
            CalculationItem::ConcreteColumn(_) => "ConcreteColumn",
            CalculationItem::ConcreteTube(_) => "ConcreteTube",
            CalculationItem::ConcreteStairs(_) => "ConcreteStairs",
            CalculationItem::ConcreteBlockWall(_) => "ConcreteBlockWall",
            CalculationItem::BlockFill(_) => "BlockFill",
            CalculationItem::Brick(_) => "Brick",
            CalculationItem::Mortar(_) => "Mortar",
            CalculationItem::BoardFoot(_) => "BoardFoot",
            CalculationItem::CubicYard(_) => "CubicYard",
            CalculationItem::GallonsPerSquareFoot(_) => "GallonsPerSquareFoot",
            CalculationItem::Grout(_) => "Grout",
            CalculationItem::Thinset(_) => "Thinset",
            CalculationItem::ConcreteTypeWeight(_) => "ConcreteTypeWeight",
        }
    }

    /// Validate the settings, then run the wrapped calculator.
    pub fn run(&self, settings: &EstimateSettings) -> CalcResult<CalculationOutput> {
        settings.validate()?;
        tracing::debug!(calc_type = self.calc_type(), label = self.label(), "running calculation");
        let output = match self {
            CalculationItem::ConcreteSlab(i) => CalculationOutput::ConcreteSlab(slab::calculate(i, settings)?),
            CalculationItem::ConcreteDriveway(i) => {
                CalculationOutput::ConcreteDriveway(driveway::calculate(i, settings)?)
            }
            CalculationItem::CementMix(i) => CalculationOutput::CementMix(cement_mix::calculate(i, settings)?),
            CalculationItem::ConcreteColumn(i) => CalculationOutput::ConcreteColumn(column::calculate(i, settings)?),
            CalculationItem::ConcreteTube(i) => CalculationOutput::ConcreteTube(tube::calculate(i, settings)?),
            CalculationItem::ConcreteStairs(i) => CalculationOutput::ConcreteStairs(stairs::calculate(i, settings)?),
            CalculationItem::ConcreteBlockWall(i) => {
                CalculationOutput::ConcreteBlockWall(block_wall::calculate(i, settings)?)
            }
            CalculationItem::BlockFill(i) => CalculationOutput::BlockFill(block_fill::calculate(i, settings)?),
            CalculationItem::Brick(i) => CalculationOutput::Brick(brick::calculate(i, settings)?),
            CalculationItem::Mortar(i) => CalculationOutput::Mortar(mortar::calculate(i, settings)?),
            CalculationItem::BoardFoot(i) => CalculationOutput::BoardFoot(board_foot::calculate(i, settings)?),
            CalculationItem::CubicYard(i) => CalculationOutput::CubicYard(cubic_yard::calculate(i, settings)?),
            CalculationItem::GallonsPerSquareFoot(i) => {
                CalculationOutput::GallonsPerSquareFoot(gallons::calculate(i, settings)?)
            }
            CalculationItem::Grout(i) => CalculationOutput::Grout(grout::calculate(i, settings)?),
            CalculationItem::Thinset(i) => CalculationOutput::Thinset(thinset::calculate(i, settings)?),
            CalculationItem::ConcreteTypeWeight(i) => {
                CalculationOutput::ConcreteTypeWeight(concrete_weight::calculate(i, settings)?)
            }
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitSystem;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, true)]
    #[case(12.5, true)]
    #[case(-0.1, false)]
    #[case(f64::NAN, false)]
    #[case(f64::INFINITY, false)]
    fn test_non_negative(#[case] value: f64, #[case] ok: bool) {
        assert_eq!(non_negative("length", value).is_ok(), ok);
    }

    #[test]
    fn test_wastage_falls_back_to_settings() {
        let settings = EstimateSettings::default();
        assert_eq!(wastage_percent(None, &settings).unwrap(), settings.default_wastage_percent);
        assert_eq!(wastage_percent(Some(0.0), &settings).unwrap(), 0.0);
        let err = wastage_percent(Some(-5.0), &settings).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_item_round_trip_and_run() {
        let json = r#"{
            "type": "ConcreteBlockWall",
            "label": "Retaining wall",
            "wall_height": 10.0,
            "wall_width": 20.0,
            "block_height": 8.0,
            "block_width": 16.0,
            "price_per_block": 2.0
        }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.label(), "Retaining wall");
        assert_eq!(item.calc_type(), "ConcreteBlockWall");

        let settings = EstimateSettings::default().with_unit_system(UnitSystem::Imperial);
        let output = item.run(&settings).unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["type"], "ConcreteBlockWall");
        assert_eq!(json["number_of_blocks"], 225);
    }

    #[test]
    fn test_driveway_item_runs() {
        let json = r#"{
            "type": "ConcreteDriveway",
            "label": "Front drive",
            "length": 6, "width": 3,
            "concrete_depth": 10, "gravel_depth": 10,
            "reinforcement": {}
        }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.calc_type(), "ConcreteDriveway");
        match item.run(&EstimateSettings::default()).unwrap() {
            CalculationOutput::ConcreteDriveway(r) => {
                assert_eq!(r.reinforcement.map(|x| x.rebar_pieces.required), Some(60));
            }
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        let json = r#"{ "type": "Rebar", "label": "x" }"#;
        assert!(serde_json::from_str::<CalculationItem>(json).is_err());
    }

    #[test]
    fn test_invalid_settings_rejected_before_running() {
        let item = CalculationItem::BoardFoot(BoardFootInput {
            label: String::new(),
            thickness: 2.0,
            width: 4.0,
            length: 8.0,
            quantity: 1.0,
            wastage_percent: None,
            price_per_board_foot: 0.0,
        });
        let settings = EstimateSettings {
            cement_bag_kg: 0.0,
            ..EstimateSettings::default()
        };
        assert!(item.run(&settings).is_err());
    }
}
