//! Unit tags.
//!
//! Each family has its own enum so that a length can never be handed to a
//! function expecting a volume. [`Unit`] wraps all of them for places that
//! accept "any unit" (text input, JSON, the CLI converter) and must discover
//! the family at runtime.
//!
//! Tags parse from the spellings calculators actually receive: `"ft"`,
//! `"feet"`, `"m3"`, `"m³"`, `"US gal"`, `"lb/ft3"`, and so on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tables::*;
use crate::errors::{CalcError, CalcResult};

/// Unit family. A quantity's unit belongs to exactly one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Length,
    Area,
    Volume,
    Mass,
    Density,
}

impl Family {
    /// Symbol of the canonical base unit for this family
    pub fn canonical_symbol(&self) -> &'static str {
        match self {
            Family::Length => "m",
            Family::Area => "m²",
            Family::Volume => "m³",
            Family::Mass => "kg",
            Family::Density => "kg/m³",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Family::Length => "length",
            Family::Area => "area",
            Family::Volume => "volume",
            Family::Mass => "mass",
            Family::Density => "density",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Normalize a unit spelling for lookup: trim, lowercase, superscripts to digits,
/// drop spaces, dots and underscores.
fn normalize(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '_'))
        .map(|c| match c {
            '²' => '2',
            '³' => '3',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

// ============================================================================
// Length
// ============================================================================

/// Length units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "yd")]
    Yard,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 6] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
    ];

    /// Meters in one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            LengthUnit::Millimeter => M_PER_MM,
            LengthUnit::Centimeter => M_PER_CM,
            LengthUnit::Meter => 1.0,
            LengthUnit::Inch => M_PER_IN,
            LengthUnit::Foot => M_PER_FT,
            LengthUnit::Yard => M_PER_YD,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
        }
    }

    /// Convert a value in this unit to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Convert a value in meters to this unit
    pub fn from_meters(&self, meters: f64) -> f64 {
        meters / self.factor()
    }

    /// The area unit of a square with sides in this unit
    pub fn squared(&self) -> AreaUnit {
        match self {
            LengthUnit::Millimeter => AreaUnit::SquareMillimeter,
            LengthUnit::Centimeter => AreaUnit::SquareCentimeter,
            LengthUnit::Meter => AreaUnit::SquareMeter,
            LengthUnit::Inch => AreaUnit::SquareInch,
            LengthUnit::Foot => AreaUnit::SquareFoot,
            LengthUnit::Yard => AreaUnit::SquareYard,
        }
    }

    /// The volume unit of a cube with sides in this unit
    pub fn cubed(&self) -> VolumeUnit {
        match self {
            LengthUnit::Millimeter => VolumeUnit::CubicMillimeter,
            LengthUnit::Centimeter => VolumeUnit::CubicCentimeter,
            LengthUnit::Meter => VolumeUnit::CubicMeter,
            LengthUnit::Inch => VolumeUnit::CubicInch,
            LengthUnit::Foot => VolumeUnit::CubicFoot,
            LengthUnit::Yard => VolumeUnit::CubicYard,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match normalize(s).as_str() {
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => Ok(LengthUnit::Millimeter),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Ok(LengthUnit::Centimeter),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meter),
            "in" | "inch" | "inches" | "\"" => Ok(LengthUnit::Inch),
            "ft" | "foot" | "feet" | "'" => Ok(LengthUnit::Foot),
            "yd" | "yard" | "yards" => Ok(LengthUnit::Yard),
            _ => Err(CalcError::unrecognized_unit(s, Family::Length.name())),
        }
    }
}

// ============================================================================
// Area
// ============================================================================

/// Area units (each the square of a length unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaUnit {
    #[serde(rename = "mm2")]
    SquareMillimeter,
    #[serde(rename = "cm2")]
    SquareCentimeter,
    #[serde(rename = "m2")]
    SquareMeter,
    #[serde(rename = "in2")]
    SquareInch,
    #[serde(rename = "ft2")]
    SquareFoot,
    #[serde(rename = "yd2")]
    SquareYard,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 6] = [
        AreaUnit::SquareMillimeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareMeter,
        AreaUnit::SquareInch,
        AreaUnit::SquareFoot,
        AreaUnit::SquareYard,
    ];

    /// The length unit this area unit is the square of
    pub fn side(&self) -> LengthUnit {
        match self {
            AreaUnit::SquareMillimeter => LengthUnit::Millimeter,
            AreaUnit::SquareCentimeter => LengthUnit::Centimeter,
            AreaUnit::SquareMeter => LengthUnit::Meter,
            AreaUnit::SquareInch => LengthUnit::Inch,
            AreaUnit::SquareFoot => LengthUnit::Foot,
            AreaUnit::SquareYard => LengthUnit::Yard,
        }
    }

    /// Square meters in one of this unit
    pub fn factor(&self) -> f64 {
        let side = self.side().factor();
        side * side
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AreaUnit::SquareMillimeter => "mm²",
            AreaUnit::SquareCentimeter => "cm²",
            AreaUnit::SquareMeter => "m²",
            AreaUnit::SquareInch => "in²",
            AreaUnit::SquareFoot => "ft²",
            AreaUnit::SquareYard => "yd²",
        }
    }
}

impl FromStr for AreaUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match normalize(s).as_str() {
            "mm2" | "sqmm" => Ok(AreaUnit::SquareMillimeter),
            "cm2" | "sqcm" => Ok(AreaUnit::SquareCentimeter),
            "m2" | "sqm" | "squaremeter" | "squaremeters" => Ok(AreaUnit::SquareMeter),
            "in2" | "sqin" | "squareinch" | "squareinches" => Ok(AreaUnit::SquareInch),
            "ft2" | "sqft" | "squarefoot" | "squarefeet" => Ok(AreaUnit::SquareFoot),
            "yd2" | "sqyd" | "squareyard" | "squareyards" => Ok(AreaUnit::SquareYard),
            _ => Err(CalcError::unrecognized_unit(s, Family::Area.name())),
        }
    }
}

// ============================================================================
// Volume
// ============================================================================

/// Volume units: cubes of length units plus named liquid/lumber units.
///
/// Imperial cubes are defined from the published cubic-foot factor
/// (1 ft³ = 0.0283168 m³), not from 0.3048³.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[serde(rename = "mm3")]
    CubicMillimeter,
    #[serde(rename = "cm3")]
    CubicCentimeter,
    #[serde(rename = "m3")]
    CubicMeter,
    #[serde(rename = "in3")]
    CubicInch,
    #[serde(rename = "ft3")]
    CubicFoot,
    #[serde(rename = "yd3")]
    CubicYard,
    #[serde(rename = "L")]
    Liter,
    #[serde(rename = "us_gal")]
    UsGallon,
    #[serde(rename = "uk_gal")]
    UkGallon,
    #[serde(rename = "board_ft")]
    BoardFoot,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 10] = [
        VolumeUnit::CubicMillimeter,
        VolumeUnit::CubicCentimeter,
        VolumeUnit::CubicMeter,
        VolumeUnit::CubicInch,
        VolumeUnit::CubicFoot,
        VolumeUnit::CubicYard,
        VolumeUnit::Liter,
        VolumeUnit::UsGallon,
        VolumeUnit::UkGallon,
        VolumeUnit::BoardFoot,
    ];

    /// Cubic meters in one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            VolumeUnit::CubicMillimeter => 1e-9,
            VolumeUnit::CubicCentimeter => 1e-6,
            VolumeUnit::CubicMeter => 1.0,
            VolumeUnit::CubicInch => M3_PER_FT3 / IN3_PER_FT3,
            VolumeUnit::CubicFoot => M3_PER_FT3,
            VolumeUnit::CubicYard => M3_PER_FT3 * FT3_PER_YD3,
            VolumeUnit::Liter => M3_PER_L,
            VolumeUnit::UsGallon => L_PER_US_GAL * M3_PER_L,
            VolumeUnit::UkGallon => FT3_PER_UK_GAL * M3_PER_FT3,
            VolumeUnit::BoardFoot => 1.0 / BOARD_FT_PER_M3,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::CubicMillimeter => "mm³",
            VolumeUnit::CubicCentimeter => "cm³",
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::CubicInch => "in³",
            VolumeUnit::CubicFoot => "ft³",
            VolumeUnit::CubicYard => "yd³",
            VolumeUnit::Liter => "L",
            VolumeUnit::UsGallon => "US gal",
            VolumeUnit::UkGallon => "UK gal",
            VolumeUnit::BoardFoot => "board ft",
        }
    }

    /// Convert a value in this unit to cubic meters
    pub fn to_cubic_meters(&self, value: f64) -> f64 {
        value * self.factor()
    }

    /// Convert a value in cubic meters to this unit
    pub fn from_cubic_meters(&self, cubic_meters: f64) -> f64 {
        cubic_meters / self.factor()
    }
}

impl FromStr for VolumeUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match normalize(s).as_str() {
            "mm3" | "cumm" => Ok(VolumeUnit::CubicMillimeter),
            "cm3" | "cc" | "cucm" => Ok(VolumeUnit::CubicCentimeter),
            "m3" | "cum" | "cubicmeter" | "cubicmeters" => Ok(VolumeUnit::CubicMeter),
            "in3" | "cuin" | "cubicinch" | "cubicinches" => Ok(VolumeUnit::CubicInch),
            "ft3" | "cuft" | "cubicfoot" | "cubicfeet" => Ok(VolumeUnit::CubicFoot),
            "yd3" | "cuyd" | "cubicyard" | "cubicyards" => Ok(VolumeUnit::CubicYard),
            "l" | "liter" | "liters" | "litre" | "litres" => Ok(VolumeUnit::Liter),
            "usgal" | "gal" | "gallon" | "gallons" | "usgallon" | "usgallons" => Ok(VolumeUnit::UsGallon),
            "ukgal" | "ukgallon" | "ukgallons" | "impgal" => Ok(VolumeUnit::UkGallon),
            "boardft" | "bdft" | "fbm" | "boardfoot" | "boardfeet" => Ok(VolumeUnit::BoardFoot),
            _ => Err(CalcError::unrecognized_unit(s, Family::Volume.name())),
        }
    }
}

// ============================================================================
// Mass
// ============================================================================

/// Mass units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "t")]
    Tonne,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "short_ton")]
    ShortTon,
}

impl MassUnit {
    pub const ALL: [MassUnit; 5] = [
        MassUnit::Gram,
        MassUnit::Kilogram,
        MassUnit::Tonne,
        MassUnit::Pound,
        MassUnit::ShortTon,
    ];

    /// Kilograms in one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            MassUnit::Gram => KG_PER_G,
            MassUnit::Kilogram => 1.0,
            MassUnit::Tonne => KG_PER_TONNE,
            MassUnit::Pound => KG_PER_LB,
            MassUnit::ShortTon => KG_PER_LB * LB_PER_SHORT_TON,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
            MassUnit::Tonne => "t",
            MassUnit::Pound => "lb",
            MassUnit::ShortTon => "short ton",
        }
    }

    pub fn to_kilograms(&self, value: f64) -> f64 {
        value * self.factor()
    }

    pub fn from_kilograms(&self, kilograms: f64) -> f64 {
        kilograms / self.factor()
    }
}

impl FromStr for MassUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match normalize(s).as_str() {
            "g" | "gram" | "grams" => Ok(MassUnit::Gram),
            "kg" | "kilogram" | "kilograms" => Ok(MassUnit::Kilogram),
            "t" | "tonne" | "tonnes" | "metricton" => Ok(MassUnit::Tonne),
            "lb" | "lbs" | "pound" | "pounds" => Ok(MassUnit::Pound),
            "shortton" | "ton" | "tons" | "uston" => Ok(MassUnit::ShortTon),
            _ => Err(CalcError::unrecognized_unit(s, Family::Mass.name())),
        }
    }
}

// ============================================================================
// Density
// ============================================================================

/// Density units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityUnit {
    #[serde(rename = "kg/m3")]
    KgPerCubicMeter,
    #[serde(rename = "lb/ft3")]
    LbPerCubicFoot,
    #[serde(rename = "g/cm3")]
    GPerCubicCentimeter,
}

impl DensityUnit {
    pub const ALL: [DensityUnit; 3] = [
        DensityUnit::KgPerCubicMeter,
        DensityUnit::LbPerCubicFoot,
        DensityUnit::GPerCubicCentimeter,
    ];

    /// kg/m³ in one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            DensityUnit::KgPerCubicMeter => 1.0,
            DensityUnit::LbPerCubicFoot => KG_M3_PER_LB_FT3,
            DensityUnit::GPerCubicCentimeter => KG_M3_PER_G_CM3,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DensityUnit::KgPerCubicMeter => "kg/m³",
            DensityUnit::LbPerCubicFoot => "lb/ft³",
            DensityUnit::GPerCubicCentimeter => "g/cm³",
        }
    }
}

impl FromStr for DensityUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match normalize(s).as_str() {
            "kg/m3" | "kgm3" | "kgperm3" => Ok(DensityUnit::KgPerCubicMeter),
            "lb/ft3" | "lbft3" | "pcf" | "lbperft3" => Ok(DensityUnit::LbPerCubicFoot),
            "g/cm3" | "gcm3" | "g/cc" | "gpercm3" => Ok(DensityUnit::GPerCubicCentimeter),
            _ => Err(CalcError::unrecognized_unit(s, Family::Density.name())),
        }
    }
}

// ============================================================================
// Any unit
// ============================================================================

/// A unit tag from any family.
///
/// Serializes as its plain symbol string, e.g. `"ft"` or `"kg/m3"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    Length(LengthUnit),
    Area(AreaUnit),
    Volume(VolumeUnit),
    Mass(MassUnit),
    Density(DensityUnit),
}

impl Unit {
    pub fn family(&self) -> Family {
        match self {
            Unit::Length(_) => Family::Length,
            Unit::Area(_) => Family::Area,
            Unit::Volume(_) => Family::Volume,
            Unit::Mass(_) => Family::Mass,
            Unit::Density(_) => Family::Density,
        }
    }

    /// Canonical base units in one of this unit
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Length(u) => u.factor(),
            Unit::Area(u) => u.factor(),
            Unit::Volume(u) => u.factor(),
            Unit::Mass(u) => u.factor(),
            Unit::Density(u) => u.factor(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Length(u) => u.symbol(),
            Unit::Area(u) => u.symbol(),
            Unit::Volume(u) => u.symbol(),
            Unit::Mass(u) => u.symbol(),
            Unit::Density(u) => u.symbol(),
        }
    }

    /// Parse a unit tag that must belong to `family`.
    pub fn parse_in(text: &str, family: Family) -> CalcResult<Unit> {
        match family {
            Family::Length => text.parse().map(Unit::Length),
            Family::Area => text.parse().map(Unit::Area),
            Family::Volume => text.parse().map(Unit::Volume),
            Family::Mass => text.parse().map(Unit::Mass),
            Family::Density => text.parse().map(Unit::Density),
        }
    }
}

impl FromStr for Unit {
    type Err = CalcError;

    /// Tries each family in turn; no spelling is shared between families.
    fn from_str(s: &str) -> CalcResult<Self> {
        const FAMILIES: [Family; 5] = [
            Family::Length,
            Family::Area,
            Family::Volume,
            Family::Mass,
            Family::Density,
        ];
        FAMILIES
            .iter()
            .find_map(|family| Unit::parse_in(s, *family).ok())
            .ok_or_else(|| CalcError::unrecognized_unit(s, "any"))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<String> for Unit {
    type Error = CalcError;

    fn try_from(value: String) -> CalcResult<Self> {
        value.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

impl From<LengthUnit> for Unit {
    fn from(u: LengthUnit) -> Self {
        Unit::Length(u)
    }
}

impl From<AreaUnit> for Unit {
    fn from(u: AreaUnit) -> Self {
        Unit::Area(u)
    }
}

impl From<VolumeUnit> for Unit {
    fn from(u: VolumeUnit) -> Self {
        Unit::Volume(u)
    }
}

impl From<MassUnit> for Unit {
    fn from(u: MassUnit) -> Self {
        Unit::Mass(u)
    }
}

impl From<DensityUnit> for Unit {
    fn from(u: DensityUnit) -> Self {
        Unit::Density(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ft", Unit::Length(LengthUnit::Foot))]
    #[case(" Feet ", Unit::Length(LengthUnit::Foot))]
    #[case("m³", Unit::Volume(VolumeUnit::CubicMeter))]
    #[case("m3", Unit::Volume(VolumeUnit::CubicMeter))]
    #[case("US gal", Unit::Volume(VolumeUnit::UsGallon))]
    #[case("sq ft", Unit::Area(AreaUnit::SquareFoot))]
    #[case("lb/ft³", Unit::Density(DensityUnit::LbPerCubicFoot))]
    #[case("lbs", Unit::Mass(MassUnit::Pound))]
    #[case("board ft", Unit::Volume(VolumeUnit::BoardFoot))]
    fn test_parse_any_unit(#[case] text: &str, #[case] expected: Unit) {
        assert_eq!(text.parse::<Unit>().unwrap(), expected);
    }

    #[test]
    fn test_unrecognized_unit() {
        let err = "furlong".parse::<LengthUnit>().unwrap_err();
        assert_eq!(err.error_code(), "UNRECOGNIZED_UNIT");
        assert!(Unit::parse_in("kg", Family::Length).is_err());
    }

    #[test]
    fn test_every_symbol_parses_back() {
        for u in LengthUnit::ALL {
            assert_eq!(Unit::parse_in(u.symbol(), Family::Length).unwrap(), Unit::Length(u));
        }
        for u in AreaUnit::ALL {
            assert_eq!(Unit::parse_in(u.symbol(), Family::Area).unwrap(), Unit::Area(u));
        }
        for u in VolumeUnit::ALL {
            assert_eq!(Unit::parse_in(u.symbol(), Family::Volume).unwrap(), Unit::Volume(u));
        }
        for u in MassUnit::ALL {
            assert_eq!(Unit::parse_in(u.symbol(), Family::Mass).unwrap(), Unit::Mass(u));
        }
        for u in DensityUnit::ALL {
            assert_eq!(Unit::parse_in(u.symbol(), Family::Density).unwrap(), Unit::Density(u));
        }
    }

    #[test]
    fn test_unit_serialization() {
        let json = serde_json::to_string(&Unit::Volume(VolumeUnit::CubicFoot)).unwrap();
        assert_eq!(json, "\"ft³\"");
        let parsed: Unit = serde_json::from_str("\"yd3\"").unwrap();
        assert_eq!(parsed, Unit::Volume(VolumeUnit::CubicYard));
        assert!(serde_json::from_str::<Unit>("\"parsec\"").is_err());
    }

    #[test]
    fn test_squared_and_cubed() {
        assert_eq!(LengthUnit::Foot.squared(), AreaUnit::SquareFoot);
        assert_eq!(LengthUnit::Inch.cubed(), VolumeUnit::CubicInch);
        assert_eq!(AreaUnit::SquareYard.side(), LengthUnit::Yard);
    }
}
