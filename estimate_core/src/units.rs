//! # Unit Systems
//!
//! [`UnitSystem`] decides which set of units a calculator reads its inputs in
//! and reports its results in. Calculators take it from
//! [`crate::config::EstimateSettings`]; nothing in the library holds a global
//! toggle.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::units::UnitSystem;
//!
//! let labels = UnitSystem::Imperial.labels();
//! assert_eq!(labels.volume, "ft³");
//! assert_eq!(UnitSystem::Metric.length().symbol(), "m");
//! ```

use serde::{Deserialize, Serialize};

use crate::conversion::{DensityUnit, LengthUnit, MassUnit, VolumeUnit};

// ============================================================================
// Unit System
// ============================================================================

/// Metric or imperial input/output convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Length unit for large dimensions (walls, spans, heights)
    pub fn length(&self) -> LengthUnit {
        match self {
            UnitSystem::Metric => LengthUnit::Meter,
            UnitSystem::Imperial => LengthUnit::Foot,
        }
    }

    /// Length unit for small dimensions (block faces, joints, treads)
    pub fn small_length(&self) -> LengthUnit {
        match self {
            UnitSystem::Metric => LengthUnit::Meter,
            UnitSystem::Imperial => LengthUnit::Inch,
        }
    }

    pub fn volume(&self) -> VolumeUnit {
        match self {
            UnitSystem::Metric => VolumeUnit::CubicMeter,
            UnitSystem::Imperial => VolumeUnit::CubicFoot,
        }
    }

    pub fn mass(&self) -> MassUnit {
        match self {
            UnitSystem::Metric => MassUnit::Kilogram,
            UnitSystem::Imperial => MassUnit::Pound,
        }
    }

    pub fn density(&self) -> DensityUnit {
        match self {
            UnitSystem::Metric => DensityUnit::KgPerCubicMeter,
            UnitSystem::Imperial => DensityUnit::LbPerCubicFoot,
        }
    }

    /// Display labels for results in this system
    pub fn labels(&self) -> UnitLabels {
        UnitLabels {
            length: self.length().symbol().to_string(),
            area: self.length().squared().symbol().to_string(),
            volume: self.volume().symbol().to_string(),
            mass: self.mass().symbol().to_string(),
            density: self.density().symbol().to_string(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric",
            UnitSystem::Imperial => "Imperial",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = crate::errors::CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" | "customary" => Ok(UnitSystem::Imperial),
            _ => Err(crate::errors::CalcError::invalid_input(
                "unit_system",
                s,
                "Expected 'metric' or 'imperial'",
            )),
        }
    }
}

/// Unit suffixes a front end shows next to results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLabels {
    pub length: String,
    pub area: String,
    pub volume: String,
    pub mass: String,
    pub density: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_system_labels() {
        let metric = UnitSystem::Metric.labels();
        assert_eq!(metric.volume, "m³");
        assert_eq!(metric.mass, "kg");

        let imperial = UnitSystem::Imperial.labels();
        assert_eq!(imperial.volume, "ft³");
        assert_eq!(imperial.area, "ft²");
        assert_eq!(imperial.density, "lb/ft³");
    }

    #[test]
    fn test_unit_system_parse() {
        assert_eq!("Imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert!("nautical".parse::<UnitSystem>().is_err());
        assert_eq!(serde_json::to_string(&UnitSystem::Metric).unwrap(), "\"metric\"");
    }
}
