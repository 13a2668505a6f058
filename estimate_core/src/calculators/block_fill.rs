//! # Concrete Block Fill Calculation
//!
//! Grout or concrete needed to fill the cores of a hollow-block wall.
//! Block count is `ceil(wall area / block face)`; each block's core is its
//! cavity (outer size less two shells) minus the cross webs.

use serde::{Deserialize, Serialize};

use super::{non_negative, wastage_percent};
use crate::config::EstimateSettings;
use crate::conversion::{Family, LengthUnit, Quantity};
use crate::derivation::apply_wastage;
use crate::errors::CalcResult;
use crate::geometry::{compute_volume, units_to_cover, HollowBlock, ShapeParameters};
use crate::units::UnitLabels;

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Retaining wall",
///   "wall_height": 2.0,
///   "wall_width": 8.0,
///   "block": {
///     "height": 0.19,
///     "width": 0.39,
///     "thickness": 0.19,
///     "shell_thickness": 0.032,
///     "web_thickness": 0.025,
///     "number_of_webs": 1
///   },
///   "wastage_percent": 10.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockFillInput {
    #[serde(default)]
    pub label: String,
    /// m or ft
    pub wall_height: f64,
    /// m or ft
    pub wall_width: f64,
    /// m or inches
    pub block: HollowBlock,
    #[serde(default)]
    pub wastage_percent: Option<f64>,
}

impl BlockFillInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("wall_height", self.wall_height)?;
        non_negative("wall_width", self.wall_width)?;
        non_negative("block.height", self.block.height)?;
        non_negative("block.width", self.block.width)?;
        non_negative("block.thickness", self.block.thickness)?;
        non_negative("block.shell_thickness", self.block.shell_thickness)?;
        non_negative("block.web_thickness", self.block.web_thickness)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockFillResult {
    pub wall_area: f64,
    pub number_of_blocks: u64,
    pub core_volume_per_block: f64,
    pub fill_volume_before_waste: f64,
    pub final_fill_volume: f64,
    pub units: UnitLabels,
}

pub fn calculate(input: &BlockFillInput, settings: &EstimateSettings) -> CalcResult<BlockFillResult> {
    input.validate()?;
    let wastage = wastage_percent(input.wastage_percent, settings)?;
    let system = settings.unit_system;

    let wall_area_m2 = system.length().to_meters(input.wall_height) * system.length().to_meters(input.wall_width);
    let block = input.block.scaled(system.small_length().factor());

    let number_of_blocks = units_to_cover(wall_area_m2, block.face_area())?;
    let core = compute_volume(&ShapeParameters::HollowBlockCore(block), LengthUnit::Meter);
    let fill = core.scale(number_of_blocks as f64);
    tracing::debug!(label = %input.label, number_of_blocks, core_m3 = core.value, "block fill");

    let volume_unit = system.volume();
    let core_volume_per_block = core.convert_to(volume_unit)?.value;
    let fill_volume_before_waste = fill.convert_to(volume_unit)?.value;

    Ok(BlockFillResult {
        wall_area: Quantity::canonical(wall_area_m2, Family::Area)
            .convert_to(system.length().squared())?
            .value,
        number_of_blocks,
        core_volume_per_block,
        fill_volume_before_waste,
        final_fill_volume: apply_wastage(fill_volume_before_waste, wastage),
        units: system.labels(),
    })
}
