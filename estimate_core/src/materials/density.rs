//! Bulk Densities and Packaging Constants
//!
//! Densities for the concrete types the weight calculator offers, and the
//! standard cement constants used by mix derivation.

use serde::{Deserialize, Serialize};

use crate::conversion::Quantity;
use crate::conversion::DensityUnit;
use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

/// Loose bulk density of Portland cement (kg/m³)
pub const CEMENT_BULK_DENSITY_KG_M3: f64 = 1440.0;

/// Standard cement bag mass (kg)
pub const CEMENT_BAG_KG: f64 = 50.0;

/// Wet-to-dry volume multiplier for nominal concrete mixes
pub const DRY_VOLUME_MULTIPLIER: f64 = 1.54;

/// Concrete and paving types with tabulated densities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConcreteType {
    Asphalt,
    Gravel,
    #[default]
    Portland,
    PortlandLimestone,
    /// Reinforced cement concrete (RCC)
    Reinforced,
}

impl ConcreteType {
    pub const ALL: [ConcreteType; 5] = [
        ConcreteType::Asphalt,
        ConcreteType::Gravel,
        ConcreteType::Portland,
        ConcreteType::PortlandLimestone,
        ConcreteType::Reinforced,
    ];

    /// Density in kg/m³
    pub fn density_metric(&self) -> f64 {
        match self {
            ConcreteType::Asphalt => 2243.0,
            ConcreteType::Gravel => 2404.0,
            ConcreteType::Portland => 2300.0,
            ConcreteType::PortlandLimestone => 2371.0,
            ConcreteType::Reinforced => 2500.0,
        }
    }

    /// Density in lb/ft³, as published (not derived from the metric value)
    pub fn density_imperial(&self) -> f64 {
        match self {
            ConcreteType::Asphalt => 140.03,
            ConcreteType::Gravel => 150.01,
            ConcreteType::Portland => 143.58,
            ConcreteType::PortlandLimestone => 148.02,
            ConcreteType::Reinforced => 156.07,
        }
    }

    /// Tabulated density in the given unit system's density unit
    pub fn density(&self, system: UnitSystem) -> Quantity {
        match system {
            UnitSystem::Metric => Quantity::new(self.density_metric(), DensityUnit::KgPerCubicMeter),
            UnitSystem::Imperial => Quantity::new(self.density_imperial(), DensityUnit::LbPerCubicFoot),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ConcreteType::Asphalt => "Asphalt",
            ConcreteType::Gravel => "Gravel",
            ConcreteType::Portland => "Portland",
            ConcreteType::PortlandLimestone => "Portland-Limestone",
            ConcreteType::Reinforced => "Reinforced (RCC)",
        }
    }

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "asphalt" => Ok(ConcreteType::Asphalt),
            "gravel" => Ok(ConcreteType::Gravel),
            "portland" => Ok(ConcreteType::Portland),
            "portland-limestone" => Ok(ConcreteType::PortlandLimestone),
            "reinforced" | "rcc" => Ok(ConcreteType::Reinforced),
            _ => Err(CalcError::material_not_found(s)),
        }
    }
}

impl std::fmt::Display for ConcreteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabulated_densities_agree_across_systems() {
        for t in ConcreteType::ALL {
            let metric = t.density(UnitSystem::Metric).canonical_value();
            let imperial = t.density(UnitSystem::Imperial).canonical_value();
            assert!((metric - imperial).abs() / metric < 1e-3, "{t}");
        }
    }

    #[test]
    fn test_parse_concrete_type() {
        assert_eq!(ConcreteType::from_str_flexible("RCC").unwrap(), ConcreteType::Reinforced);
        assert_eq!(
            ConcreteType::from_str_flexible("portland limestone").unwrap(),
            ConcreteType::PortlandLimestone
        );
        assert!(ConcreteType::from_str_flexible("styrofoam").is_err());
        assert_eq!(
            serde_json::to_string(&ConcreteType::PortlandLimestone).unwrap(),
            "\"portland-limestone\""
        );
    }
}
