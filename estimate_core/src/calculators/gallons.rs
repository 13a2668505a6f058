//! # Gallons per Square Foot
//!
//! Relates a footprint area, a liquid depth and a volume. Either the area and
//! depth are known and the volume is wanted, or the volume and depth are
//! known and the area it will cover is wanted. A zero area or depth gives
//! zero coverage rather than an error.

use serde::{Deserialize, Serialize};

use super::non_negative;
use crate::config::EstimateSettings;
use crate::conversion::{AreaUnit, LengthUnit, Quantity, VolumeUnit};
use crate::derivation::safe_div;
use crate::errors::CalcResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CoverageMode {
    AreaToVolume { area: f64, area_unit: AreaUnit },
    VolumeToArea { volume: f64 },
}

/// ## JSON Example
///
/// ```json
/// {
///   "label": "Pond",
///   "coverage": { "mode": "area_to_volume", "area": 100, "area_unit": "ft2" },
///   "height": 6, "height_unit": "in",
///   "volume_unit": "us_gal"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GallonsInput {
    #[serde(default)]
    pub label: String,
    pub coverage: CoverageMode,
    pub height: f64,
    pub height_unit: LengthUnit,
    #[serde(default = "default_volume_unit")]
    pub volume_unit: VolumeUnit,
}

fn default_volume_unit() -> VolumeUnit {
    VolumeUnit::UsGallon
}

impl GallonsInput {
    pub fn validate(&self) -> CalcResult<()> {
        non_negative("height", self.height)?;
        match self.coverage {
            CoverageMode::AreaToVolume { area, .. } => non_negative("area", area)?,
            CoverageMode::VolumeToArea { volume } => non_negative("volume", volume)?,
        };
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GallonsResult {
    pub volume: Quantity,
    pub area_ft2: f64,
    pub area_m2: f64,
    pub height_ft: f64,
    /// Volume (in the requested unit) per square foot of footprint
    pub per_square_foot: f64,
    pub per_square_meter: f64,
}

pub fn calculate(input: &GallonsInput, _settings: &EstimateSettings) -> CalcResult<GallonsResult> {
    input.validate()?;
    let height_m = input.height_unit.to_meters(input.height);

    let (volume_m3, area_m2) = match input.coverage {
        CoverageMode::AreaToVolume { area, area_unit } => {
            let area_m2 = area * area_unit.factor();
            (area_m2 * height_m, area_m2)
        }
        CoverageMode::VolumeToArea { volume } => {
            let volume_m3 = input.volume_unit.to_cubic_meters(volume);
            (volume_m3, safe_div(volume_m3, height_m))
        }
    };
    let volume = Quantity::new(input.volume_unit.from_cubic_meters(volume_m3), input.volume_unit);
    let area_ft2 = area_m2 / AreaUnit::SquareFoot.factor();
    tracing::debug!(label = %input.label, volume = %volume, area_m2, height_m, "coverage");

    Ok(GallonsResult {
        volume,
        area_ft2,
        area_m2,
        height_ft: LengthUnit::Foot.from_meters(height_m),
        per_square_foot: safe_div(volume.value, area_ft2),
        per_square_meter: safe_div(volume.value, area_m2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn test_one_foot_deep_is_7_48_gallons_per_square_foot() {
        let input = GallonsInput {
            label: String::new(),
            coverage: CoverageMode::AreaToVolume { area: 100.0, area_unit: AreaUnit::SquareFoot },
            height: 1.0,
            height_unit: LengthUnit::Foot,
            volume_unit: VolumeUnit::UsGallon,
        };
        let r = calculate(&input, &EstimateSettings::default()).unwrap();
        assert!(approx_eq(r.volume.value, 748.052, 1e-5));
        assert!(approx_eq(r.per_square_foot, 7.48052, 1e-5));
    }

    #[test]
    fn test_volume_to_area() {
        let input = GallonsInput {
            label: String::new(),
            coverage: CoverageMode::VolumeToArea { volume: 1000.0 },
            height: 0.5,
            height_unit: LengthUnit::Meter,
            volume_unit: VolumeUnit::Liter,
        };
        let r = calculate(&input, &EstimateSettings::default()).unwrap();
        assert!(approx_eq(r.area_m2, 2.0, 1e-12));
        assert!(approx_eq(r.per_square_meter, 500.0, 1e-9));
    }

    #[test]
    fn test_zero_height_covers_nothing() {
        let input = GallonsInput {
            label: String::new(),
            coverage: CoverageMode::VolumeToArea { volume: 50.0 },
            height: 0.0,
            height_unit: LengthUnit::Inch,
            volume_unit: VolumeUnit::UsGallon,
        };
        let r = calculate(&input, &EstimateSettings::default()).unwrap();
        assert_eq!(r.area_ft2, 0.0);
        assert_eq!(r.per_square_foot, 0.0);
    }
}
