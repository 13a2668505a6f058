//! Tile Setting Materials
//!
//! Recommended thinset bed thickness by tile size, and default densities for
//! thinset and grout.

use serde::{Deserialize, Serialize};

use crate::units::UnitSystem;

/// Thinset mortar density (kg/m³)
pub const THINSET_DENSITY_KG_M3: f64 = 1600.0;
/// Thinset mortar density (lb/ft³)
pub const THINSET_DENSITY_LB_FT3: f64 = 100.0;
/// Sanded grout density (kg/m³)
pub const GROUT_DENSITY_KG_M3: f64 = 1600.0;
/// Sanded grout density (lb/ft³)
pub const GROUT_DENSITY_LB_FT3: f64 = 100.0;
/// Share of a mixed batch's mass that comes from the dry bag (%)
pub const DRY_MATERIAL_PERCENT: f64 = 50.0;

/// Tile size presets for thinset bed thickness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TileSize {
    #[serde(rename = "2x2")]
    Tile2x2,
    #[serde(rename = "4x4")]
    Tile4x4,
    #[serde(rename = "6x6")]
    Tile6x6,
    #[serde(rename = "8x8")]
    Tile8x8,
    #[default]
    #[serde(rename = "12x12")]
    Tile12x12,
    #[serde(rename = "16x16")]
    Tile16x16,
    /// Larger than 12" x 12"
    Large,
    /// Caller supplies the thickness (mm metric, inches imperial)
    Custom(f64),
}

impl TileSize {
    /// Bed thickness in millimeters (metric) or inches (imperial)
    pub fn thickness(&self, system: UnitSystem) -> f64 {
        let (mm, inches) = match self {
            TileSize::Tile2x2 => (2.0, 0.079),
            TileSize::Tile4x4 => (2.4, 0.094),
            TileSize::Tile6x6 => (3.0, 0.118),
            TileSize::Tile8x8 => (3.5, 0.138),
            TileSize::Tile12x12 => (5.0, 0.197),
            TileSize::Tile16x16 => (6.0, 0.236),
            TileSize::Large => (7.0, 0.276),
            TileSize::Custom(t) => (*t, *t),
        };
        match system {
            UnitSystem::Metric => mm,
            UnitSystem::Imperial => inches,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TileSize::Tile2x2 => "2\" x 2\" (5 x 5 cm)",
            TileSize::Tile4x4 => "4\" x 4\" (10 x 10 cm)",
            TileSize::Tile6x6 => "6\" x 6\" (15 x 15 cm)",
            TileSize::Tile8x8 => "8\" x 8\" (20 x 20 cm)",
            TileSize::Tile12x12 => "12\" x 12\" (30 x 30 cm)",
            TileSize::Tile16x16 => "16\" x 16\" (40 x 40 cm)",
            TileSize::Large => "Larger than 12\" x 12\"",
            TileSize::Custom(_) => "Custom Thickness",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_thickness() {
        assert_eq!(TileSize::Tile12x12.thickness(UnitSystem::Metric), 5.0);
        assert_eq!(TileSize::Tile12x12.thickness(UnitSystem::Imperial), 0.197);
        assert_eq!(TileSize::Custom(9.5).thickness(UnitSystem::Metric), 9.5);
    }

    #[test]
    fn test_larger_tiles_need_thicker_beds() {
        let presets = [
            TileSize::Tile2x2,
            TileSize::Tile4x4,
            TileSize::Tile6x6,
            TileSize::Tile8x8,
            TileSize::Tile12x12,
            TileSize::Tile16x16,
            TileSize::Large,
        ];
        for pair in presets.windows(2) {
            assert!(pair[1].thickness(UnitSystem::Metric) > pair[0].thickness(UnitSystem::Metric));
            assert!(pair[1].thickness(UnitSystem::Imperial) > pair[0].thickness(UnitSystem::Imperial));
        }
    }

    #[test]
    fn test_tile_size_json() {
        let t: TileSize = serde_json::from_str("\"8x8\"").unwrap();
        assert_eq!(t, TileSize::Tile8x8);
        let custom: TileSize = serde_json::from_str("{\"custom\": 4.0}").unwrap();
        assert_eq!(custom, TileSize::Custom(4.0));
    }
}
