//! Masonry Units and Mortar Yields
//!
//! How many bricks or blocks one bag of pre-mixed mortar lays, for the common
//! unit sizes and the two packaged bag sizes. Yields are published as a range;
//! estimates use the midpoint.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Brick and block sizes with published mortar yields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MasonryUnit {
    #[default]
    ModularBricks,
    QueenBricks,
    KingBricks,
    UtilityBricks,
    #[serde(rename = "4-inch-blocks")]
    FourInchBlocks,
    #[serde(rename = "6-inch-blocks")]
    SixInchBlocks,
    #[serde(rename = "8-inch-blocks")]
    EightInchBlocks,
    #[serde(rename = "10-inch-blocks")]
    TenInchBlocks,
    #[serde(rename = "12-inch-blocks")]
    TwelveInchBlocks,
}

impl MasonryUnit {
    pub const ALL: [MasonryUnit; 9] = [
        MasonryUnit::ModularBricks,
        MasonryUnit::QueenBricks,
        MasonryUnit::KingBricks,
        MasonryUnit::UtilityBricks,
        MasonryUnit::FourInchBlocks,
        MasonryUnit::SixInchBlocks,
        MasonryUnit::EightInchBlocks,
        MasonryUnit::TenInchBlocks,
        MasonryUnit::TwelveInchBlocks,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MasonryUnit::ModularBricks => "Modular Bricks",
            MasonryUnit::QueenBricks => "Queen Size Bricks",
            MasonryUnit::KingBricks => "King Size Bricks",
            MasonryUnit::UtilityBricks => "Utility Bricks",
            MasonryUnit::FourInchBlocks => "4-inch Blocks",
            MasonryUnit::SixInchBlocks => "6-inch Blocks",
            MasonryUnit::EightInchBlocks => "8-inch Blocks",
            MasonryUnit::TenInchBlocks => "10-inch Blocks",
            MasonryUnit::TwelveInchBlocks => "12-inch Blocks",
        }
    }

    /// Kebab-case code used in JSON (e.g., "8-inch-blocks")
    pub fn code(&self) -> &'static str {
        match self {
            MasonryUnit::ModularBricks => "modular-bricks",
            MasonryUnit::QueenBricks => "queen-bricks",
            MasonryUnit::KingBricks => "king-bricks",
            MasonryUnit::UtilityBricks => "utility-bricks",
            MasonryUnit::FourInchBlocks => "4-inch-blocks",
            MasonryUnit::SixInchBlocks => "6-inch-blocks",
            MasonryUnit::EightInchBlocks => "8-inch-blocks",
            MasonryUnit::TenInchBlocks => "10-inch-blocks",
            MasonryUnit::TwelveInchBlocks => "12-inch-blocks",
        }
    }

    /// Parse from the kebab-case code or the display name
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        MasonryUnit::ALL
            .iter()
            .copied()
            .find(|unit| {
                unit.code() == normalized
                    || unit.display_name().to_lowercase().replace(' ', "-") == normalized
            })
            .ok_or_else(|| CalcError::material_not_found(s))
    }

    /// Units laid per bag: (min, max) for this unit and bag size
    fn yield_range(&self, bag: MortarBag) -> (f64, f64) {
        match (self, bag) {
            (MasonryUnit::ModularBricks, MortarBag::Lb80) => (40.0, 45.0),
            (MasonryUnit::ModularBricks, MortarBag::Lb3000) => (1500.0, 1675.0),
            (MasonryUnit::QueenBricks, MortarBag::Lb80) => (34.0, 39.0),
            (MasonryUnit::QueenBricks, MortarBag::Lb3000) => (1275.0, 1450.0),
            (MasonryUnit::KingBricks, MortarBag::Lb80) => (28.0, 33.0),
            (MasonryUnit::KingBricks, MortarBag::Lb3000) => (1050.0, 1225.0),
            (MasonryUnit::UtilityBricks, MortarBag::Lb80) => (23.0, 28.0),
            (MasonryUnit::UtilityBricks, MortarBag::Lb3000) => (850.0, 1050.0),
            (MasonryUnit::FourInchBlocks, MortarBag::Lb80) => (15.0, 17.0),
            (MasonryUnit::FourInchBlocks, MortarBag::Lb3000) => (575.0, 650.0),
            (MasonryUnit::SixInchBlocks, MortarBag::Lb80) => (12.0, 14.0),
            (MasonryUnit::SixInchBlocks, MortarBag::Lb3000) => (475.0, 525.0),
            (MasonryUnit::EightInchBlocks | MasonryUnit::TenInchBlocks, MortarBag::Lb80) => (11.0, 13.0),
            (MasonryUnit::EightInchBlocks | MasonryUnit::TenInchBlocks, MortarBag::Lb3000) => (450.0, 500.0),
            (MasonryUnit::TwelveInchBlocks, MortarBag::Lb80) => (10.0, 12.0),
            (MasonryUnit::TwelveInchBlocks, MortarBag::Lb3000) => (375.0, 425.0),
        }
    }

    /// Published mortar yield for this unit laid from `bag`
    pub fn mortar_yield(&self, bag: MortarBag) -> MaterialYield {
        let (min, max) = self.yield_range(bag);
        MaterialYield::from_range(min, max)
    }
}

impl std::fmt::Display for MasonryUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Packaged mortar bag sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MortarBag {
    /// 80 lb bag
    #[default]
    #[serde(rename = "80lb")]
    Lb80,
    /// 3,000 lb bulk bag
    #[serde(rename = "3000lb")]
    Lb3000,
}

impl MortarBag {
    pub const ALL: [MortarBag; 2] = [MortarBag::Lb80, MortarBag::Lb3000];

    pub fn weight_lb(&self) -> f64 {
        match self {
            MortarBag::Lb80 => 80.0,
            MortarBag::Lb3000 => 3000.0,
        }
    }

    /// Bag weight as labelled on metric packaging
    pub fn weight_kg(&self) -> f64 {
        match self {
            MortarBag::Lb80 => 36.29,
            MortarBag::Lb3000 => 1360.78,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MortarBag::Lb80 => "80 lb Bag",
            MortarBag::Lb3000 => "3,000 lb Bulk",
        }
    }
}

/// How many end units one source unit (bag) covers, as a published range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialYield {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl MaterialYield {
    /// Range with the midpoint as the average
    pub fn from_range(min: f64, max: f64) -> Self {
        MaterialYield {
            min,
            max,
            average: (min + max) / 2.0,
        }
    }

    /// Custom yield; the average is the divisor and must be positive
    pub fn custom(min: f64, max: f64, average: f64) -> CalcResult<Self> {
        require_positive("yield_average", average)?;
        Ok(MaterialYield { min, max, average })
    }

    /// "min - max" for display
    pub fn range_label(&self) -> String {
        format!("{} - {}", self.min, self.max)
    }
}
