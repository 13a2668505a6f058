//! # Estimate Settings
//!
//! The unit system and shared material constants, passed explicitly as
//! `&EstimateSettings` into every calculator. Nothing here is global.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "unit_system": "imperial",
//!   "dry_volume_multiplier": 1.54,
//!   "cement_bulk_density_kg_m3": 1440.0,
//!   "cement_bag_kg": 50.0,
//!   "default_wastage_percent": 5.0,
//!   "parse_policy": "lenient"
//! }
//! ```
//!
//! Any omitted field takes its default.

use serde::{Deserialize, Serialize};

use crate::derivation::MixConstants;
use crate::errors::{CalcError, CalcResult};
use crate::input::parse_or;
use crate::materials::{CEMENT_BAG_KG, CEMENT_BULK_DENSITY_KG_M3, DRY_VOLUME_MULTIPLIER};
use crate::units::UnitSystem;

/// How text fields that do not read as numbers are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Read the leading numeric prefix; anything else is 0
    #[default]
    Lenient,
    /// Reject anything that is not a finite number
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateSettings {
    pub unit_system: UnitSystem,
    pub dry_volume_multiplier: f64,
    pub cement_bulk_density_kg_m3: f64,
    pub cement_bag_kg: f64,
    /// Used when a calculator input leaves wastage unset
    pub default_wastage_percent: f64,
    pub parse_policy: ParsePolicy,
}

impl Default for EstimateSettings {
    fn default() -> Self {
        EstimateSettings {
            unit_system: UnitSystem::Metric,
            dry_volume_multiplier: DRY_VOLUME_MULTIPLIER,
            cement_bulk_density_kg_m3: CEMENT_BULK_DENSITY_KG_M3,
            cement_bag_kg: CEMENT_BAG_KG,
            default_wastage_percent: 5.0,
            parse_policy: ParsePolicy::Lenient,
        }
    }
}

impl EstimateSettings {
    pub fn with_unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = unit_system;
        self
    }

    /// Default wastage from typed text; blank, unreadable or `0` keeps the current value.
    pub fn with_wastage_text(mut self, text: &str) -> Self {
        self.default_wastage_percent = parse_or(text, self.default_wastage_percent);
        self
    }

    /// Mix constants for proportional derivation
    pub fn mix_constants(&self) -> MixConstants {
        MixConstants {
            dry_volume_multiplier: self.dry_volume_multiplier,
            cement_bulk_density_kg_m3: self.cement_bulk_density_kg_m3,
            cement_bag_kg: self.cement_bag_kg,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        self.mix_constants().validate()?;
        if !self.default_wastage_percent.is_finite() || self.default_wastage_percent < 0.0 {
            return Err(CalcError::invalid_input(
                "default_wastage_percent",
                self.default_wastage_percent.to_string(),
                "Wastage must be a non-negative percentage",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = EstimateSettings::default();
        assert_eq!(s.unit_system, UnitSystem::Metric);
        assert_eq!(s.dry_volume_multiplier, 1.54);
        assert_eq!(s.cement_bulk_density_kg_m3, 1440.0);
        assert_eq!(s.cement_bag_kg, 50.0);
        assert_eq!(s.parse_policy, ParsePolicy::Lenient);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: EstimateSettings = serde_json::from_str(r#"{ "unit_system": "imperial" }"#).unwrap();
        assert_eq!(s.unit_system, UnitSystem::Imperial);
        assert_eq!(s.cement_bag_kg, 50.0);
    }

    #[test]
    fn test_wastage_text_falls_back_to_current_default() {
        let s = EstimateSettings::default().with_wastage_text("12.5%");
        assert_eq!(s.default_wastage_percent, 12.5);
        for text in ["", "n/a", "0"] {
            let s = EstimateSettings::default().with_wastage_text(text);
            assert_eq!(s.default_wastage_percent, 5.0, "{text:?}");
        }
    }

    #[test]
    fn test_validate_rejects_bad_constants() {
        let s = EstimateSettings {
            cement_bag_kg: 0.0,
            ..Default::default()
        };
        assert_eq!(s.validate().unwrap_err().error_code(), "INVALID_MATERIAL_CONSTANT");

        let s = EstimateSettings {
            default_wastage_percent: -1.0,
            ..Default::default()
        };
        assert_eq!(s.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }
}
