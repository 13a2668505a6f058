//! Bags from a mass or volume of material.

use super::{apply_wastage, PurchaseCount};
use crate::errors::{require_positive, CalcResult};

/// Bags of `bag_mass` needed for `mass`, wastage applied before rounding.
///
/// `mass` and `bag_mass` must be in the same mass unit.
pub fn bags_for_mass(mass: f64, bag_mass: f64, wastage_percent: f64) -> CalcResult<PurchaseCount> {
    let bag_mass = require_positive("bag_mass", bag_mass)?;
    Ok(PurchaseCount::from_raw(apply_wastage(mass / bag_mass, wastage_percent)))
}

/// Bags for a volume when one bag mixes `volume_per_bag`.
pub fn bags_for_volume(volume: f64, volume_per_bag: f64) -> CalcResult<PurchaseCount> {
    let volume_per_bag = require_positive("volume_per_bag", volume_per_bag)?;
    Ok(PurchaseCount::from_raw(volume / volume_per_bag))
}
