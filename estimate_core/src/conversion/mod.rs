//! # Unit Conversion
//!
//! Linear conversions between a unit and the canonical base unit of its family:
//!
//! | Family  | Canonical |
//! |---------|-----------|
//! | Length  | m         |
//! | Area    | m²        |
//! | Volume  | m³        |
//! | Mass    | kg        |
//! | Density | kg/m³     |
//!
//! Values are never validated here: zero and negative numbers convert like any
//! other. Only the unit tag is checked.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::conversion::{to_canonical, from_canonical, Family};
//!
//! let meters = to_canonical(10.0, "ft", Family::Length).unwrap();
//! assert!((meters - 3.048).abs() < 1e-12);
//!
//! let back = from_canonical(meters, "ft", Family::Length).unwrap();
//! assert!((back - 10.0).abs() < 1e-9);
//!
//! assert!(to_canonical(1.0, "furlong", Family::Length).is_err());
//! ```

pub mod tables;
pub mod tags;

pub use tags::{AreaUnit, DensityUnit, Family, LengthUnit, MassUnit, Unit, VolumeUnit};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};

/// Convert `value` expressed in `unit` to the canonical base unit of `family`.
///
/// Fails with [`CalcError::UnrecognizedUnit`] when `unit` is not a member of `family`.
pub fn to_canonical(value: f64, unit: &str, family: Family) -> CalcResult<f64> {
    let unit = Unit::parse_in(unit, family)?;
    Ok(value * unit.factor())
}

/// Convert a canonical `value` back into `unit`. Inverse of [`to_canonical`].
pub fn from_canonical(value: f64, unit: &str, family: Family) -> CalcResult<f64> {
    let unit = Unit::parse_in(unit, family)?;
    Ok(value / unit.factor())
}

/// Convert `value` between two units of the same family.
///
/// Both tags are parsed on their own; a known `to` outside `from`'s family
/// fails with [`CalcError::UnitFamilyMismatch`].
pub fn convert(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;
    Ok(Quantity::new(value, from).convert_to(to)?.value)
}

/// A numeric value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<Unit>) -> Self {
        Quantity {
            value,
            unit: unit.into(),
        }
    }

    /// Quantity in the canonical base unit of `family`
    pub fn canonical(value: f64, family: Family) -> Self {
        let unit = match family {
            Family::Length => Unit::Length(LengthUnit::Meter),
            Family::Area => Unit::Area(AreaUnit::SquareMeter),
            Family::Volume => Unit::Volume(VolumeUnit::CubicMeter),
            Family::Mass => Unit::Mass(MassUnit::Kilogram),
            Family::Density => Unit::Density(DensityUnit::KgPerCubicMeter),
        };
        Quantity { value, unit }
    }

    pub fn family(&self) -> Family {
        self.unit.family()
    }

    /// Value in the canonical base unit of this quantity's family
    pub fn canonical_value(&self) -> f64 {
        self.value * self.unit.factor()
    }

    /// Re-express this quantity in another unit of the same family.
    pub fn convert_to(&self, unit: impl Into<Unit>) -> CalcResult<Quantity> {
        let unit = unit.into();
        self.expect_family(unit.family())?;
        Ok(Quantity {
            value: self.canonical_value() / unit.factor(),
            unit,
        })
    }

    /// Add two quantities of the same family; the result keeps `self`'s unit.
    pub fn checked_add(&self, other: &Quantity) -> CalcResult<Quantity> {
        let other = other.convert_to(self.unit)?;
        Ok(Quantity {
            value: self.value + other.value,
            unit: self.unit,
        })
    }

    /// Scale by a dimensionless factor
    pub fn scale(&self, factor: f64) -> Quantity {
        Quantity {
            value: self.value * factor,
            unit: self.unit,
        }
    }

    /// Fail with [`CalcError::UnitFamilyMismatch`] unless this quantity is in `family`.
    pub fn expect_family(&self, family: Family) -> CalcResult<()> {
        if self.family() == family {
            Ok(())
        } else {
            Err(CalcError::family_mismatch(family.name(), self.family().name()))
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Mass of a volume of material. The only sanctioned Volume → Mass bridge.
///
/// Returns kilograms.
pub fn mass_from_volume(volume: &Quantity, density: &Quantity) -> CalcResult<Quantity> {
    volume.expect_family(Family::Volume)?;
    density.expect_family(Family::Density)?;
    Ok(Quantity::canonical(
        volume.canonical_value() * density.canonical_value(),
        Family::Mass,
    ))
}

/// Volume occupied by a mass of material. Density must be positive.
///
/// Returns cubic meters.
pub fn volume_from_mass(mass: &Quantity, density: &Quantity) -> CalcResult<Quantity> {
    mass.expect_family(Family::Mass)?;
    density.expect_family(Family::Density)?;
    let density = require_positive("density", density.canonical_value())?;
    Ok(Quantity::canonical(
        mass.canonical_value() / density,
        Family::Volume,
    ))
}
