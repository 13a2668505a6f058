//! Nominal Concrete Mixes
//!
//! Volumetric cement : sand : aggregate proportions for the nominal mix
//! grades M5 through M30, with the default water-cement ratio for each.
//!
//! Proportions are by loose dry volume, not by mass.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Nominal concrete mix grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MixGrade {
    #[serde(rename = "M5")]
    M5,
    #[serde(rename = "M7.5")]
    M7_5,
    #[serde(rename = "M10")]
    M10,
    #[serde(rename = "M15")]
    M15,
    #[default]
    #[serde(rename = "M20")]
    M20,
    #[serde(rename = "M25")]
    M25,
    #[serde(rename = "M30")]
    M30,
}

impl MixGrade {
    /// All grades, weakest first
    pub const ALL: [MixGrade; 7] = [
        MixGrade::M5,
        MixGrade::M7_5,
        MixGrade::M10,
        MixGrade::M15,
        MixGrade::M20,
        MixGrade::M25,
        MixGrade::M30,
    ];

    /// Grade name as printed on drawings (e.g., "M7.5")
    pub fn code(&self) -> &'static str {
        match self {
            MixGrade::M5 => "M5",
            MixGrade::M7_5 => "M7.5",
            MixGrade::M10 => "M10",
            MixGrade::M15 => "M15",
            MixGrade::M20 => "M20",
            MixGrade::M25 => "M25",
            MixGrade::M30 => "M30",
        }
    }

    /// Parse from common string representations ("m20", "M 7.5", "M7_5")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = lookup_key(s);
        MixGrade::ALL
            .iter()
            .copied()
            .find(|grade| grade.code() == normalized)
            .ok_or_else(|| CalcError::material_not_found(s))
    }

    /// Proportions and water-cement ratio for this grade
    pub fn spec(&self) -> MixSpec {
        match self {
            MixGrade::M5 => MixSpec::nominal(1.0, 5.0, 10.0, 0.60),
            MixGrade::M7_5 => MixSpec::nominal(1.0, 4.0, 8.0, 0.60),
            MixGrade::M10 => MixSpec::nominal(1.0, 3.0, 6.0, 0.55),
            MixGrade::M15 => MixSpec::nominal(1.0, 2.0, 4.0, 0.55),
            MixGrade::M20 => MixSpec::nominal(1.0, 1.5, 3.0, 0.50),
            MixGrade::M25 => MixSpec::nominal(1.0, 1.0, 2.0, 0.50),
            MixGrade::M30 => MixSpec::nominal(1.0, 1.0, 1.5, 0.45),
        }
    }

    /// Ratio as commonly written, e.g. "1 : 1.5 : 3"
    pub fn ratio_label(&self) -> String {
        let spec = self.spec();
        format!("{} : {} : {}", spec.cement, spec.sand, spec.aggregate)
    }
}

impl std::fmt::Display for MixGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Grade code or ratio ("M20", "1:1.5:3") → mix, built once on first lookup
static MIX_TABLE: Lazy<HashMap<String, MixSpec>> = Lazy::new(|| {
    MixGrade::ALL
        .iter()
        .flat_map(|grade| {
            [
                (lookup_key(grade.code()), grade.spec()),
                (lookup_key(&grade.ratio_label()), grade.spec()),
            ]
        })
        .collect()
});

fn lookup_key(s: &str) -> String {
    s.trim().to_uppercase().replace([' ', '-'], "").replace('_', ".")
}

/// Volumetric mix proportions plus water-cement ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixSpec {
    /// Cement parts
    pub cement: f64,
    /// Sand (fine aggregate) parts
    pub sand: f64,
    /// Coarse aggregate parts
    pub aggregate: f64,
    /// Mass of water / mass of cement
    pub water_cement_ratio: f64,
}

impl MixSpec {
    const fn nominal(cement: f64, sand: f64, aggregate: f64, water_cement_ratio: f64) -> Self {
        MixSpec {
            cement,
            sand,
            aggregate,
            water_cement_ratio,
        }
    }

    /// Custom proportions. Every part must be positive.
    pub fn custom(cement: f64, sand: f64, aggregate: f64, water_cement_ratio: f64) -> CalcResult<Self> {
        let spec = MixSpec::nominal(cement, sand, aggregate, water_cement_ratio);
        spec.validate()?;
        Ok(spec)
    }

    /// Look up a nominal mix by grade name or by its ratio ("1:2:4")
    pub fn by_grade(name: &str) -> CalcResult<Self> {
        MIX_TABLE
            .get(&lookup_key(name))
            .copied()
            .ok_or_else(|| CalcError::material_not_found(name))
    }

    /// Replace the water-cement ratio, keeping the proportions
    pub fn with_water_cement_ratio(self, water_cement_ratio: f64) -> Self {
        MixSpec {
            water_cement_ratio,
            ..self
        }
    }

    /// cement + sand + aggregate
    pub fn total_parts(&self) -> f64 {
        self.cement + self.sand + self.aggregate
    }

    /// Parts must be positive so the shares are well defined
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("cement_parts", self.cement)?;
        require_positive("sand_parts", self.sand)?;
        require_positive("aggregate_parts", self.aggregate)?;
        Ok(())
    }
}
