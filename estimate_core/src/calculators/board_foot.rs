//! # Board Foot Calculation
//!
//! Lumber volume in board feet (144 in³). Imperial pieces are measured as
//! thickness and width in inches with length in feet; metric pieces as
//! thickness and width in millimeters with length in meters.

use serde::{Deserialize, Serialize};

use super::{non_negative, wastage_percent};
use crate::config::EstimateSettings;
use crate::conversion::{LengthUnit, Quantity, VolumeUnit};
use crate::cost::CostBreakdown;
use crate::derivation::apply_wastage;
use crate::errors::CalcResult;
use crate::units::UnitSystem;

/// ## JSON Example
///
/// ```json
/// { "label": "Deck joists", "thickness": 2, "width": 8, "length": 12, "quantity": 20, "price_per_board_foot": 4.5 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardFootInput {
    #[serde(default)]
    pub label: String,
    pub thickness: f64,
    pub width: f64,
    pub length: f64,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default)]
    pub wastage_percent: Option<f64>,
    #[serde(default)]
    pub price_per_board_foot: f64,
}

fn default_quantity() -> f64 {
    1.0
}

impl BoardFootInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("thickness", self.thickness)?;
        non_negative("width", self.width)?;
        non_negative("length", self.length)?;
        non_negative("quantity", self.quantity)?;
        non_negative("price_per_board_foot", self.price_per_board_foot)?;
        Ok(())
    }

    /// Volume of one piece
    pub fn piece_volume(&self, system: UnitSystem) -> Quantity {
        let (section, length) = match system {
            UnitSystem::Imperial => (LengthUnit::Inch, LengthUnit::Foot),
            UnitSystem::Metric => (LengthUnit::Millimeter, LengthUnit::Meter),
        };
        let m3 = section.to_meters(self.thickness) * section.to_meters(self.width) * length.to_meters(self.length);
        Quantity::new(m3, VolumeUnit::CubicMeter)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardFootResult {
    pub board_feet_per_piece: f64,
    pub total_board_feet: f64,
    pub board_feet_with_wastage: f64,
    pub total_volume_m3: f64,
    pub cost: CostBreakdown,
}

pub fn calculate(input: &BoardFootInput, settings: &EstimateSettings) -> CalcResult<BoardFootResult> {
    input.validate()?;
    let wastage = wastage_percent(input.wastage_percent, settings)?;

    let piece = input.piece_volume(settings.unit_system);
    let per_piece = piece.convert_to(VolumeUnit::BoardFoot)?.value;
    let total = per_piece * input.quantity;
    let with_wastage = apply_wastage(total, wastage);
    tracing::debug!(label = %input.label, per_piece, with_wastage, "board feet");

    Ok(BoardFootResult {
        board_feet_per_piece: per_piece,
        total_board_feet: total,
        board_feet_with_wastage: with_wastage,
        total_volume_m3: piece.value * input.quantity,
        cost: CostBreakdown::new().with_item("Lumber (board ft)", with_wastage, input.price_per_board_foot),
    })
}
