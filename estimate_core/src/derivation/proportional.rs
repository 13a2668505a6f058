//! Proportional (nominal mix) derivation for concrete.

use serde::{Deserialize, Serialize};

use super::{apply_wastage, PurchaseCount};
use crate::conversion::{Family, Quantity};
use crate::errors::{require_positive, CalcResult};
use crate::materials::{MixSpec, CEMENT_BAG_KG, CEMENT_BULK_DENSITY_KG_M3, DRY_VOLUME_MULTIPLIER};

/// Constants that turn a wet volume into dry materials and cement bags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixConstants {
    /// Dry loose volume / wet compacted volume
    pub dry_volume_multiplier: f64,
    /// Loose bulk density of cement (kg/m³)
    pub cement_bulk_density_kg_m3: f64,
    /// Mass of one cement bag (kg)
    pub cement_bag_kg: f64,
}

impl Default for MixConstants {
    fn default() -> Self {
        MixConstants {
            dry_volume_multiplier: DRY_VOLUME_MULTIPLIER,
            cement_bulk_density_kg_m3: CEMENT_BULK_DENSITY_KG_M3,
            cement_bag_kg: CEMENT_BAG_KG,
        }
    }
}

impl MixConstants {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("dry_volume_multiplier", self.dry_volume_multiplier)?;
        require_positive("cement_bulk_density_kg_m3", self.cement_bulk_density_kg_m3)?;
        require_positive("cement_bag_kg", self.cement_bag_kg)?;
        Ok(())
    }
}

/// Materials for one nominal mix pour. Volumes in m³, masses in kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixQuantities {
    pub wet_volume: Quantity,
    pub dry_volume: Quantity,
    pub cement_volume: Quantity,
    pub sand_volume: Quantity,
    pub aggregate_volume: Quantity,
    pub cement_mass: Quantity,
    pub cement_bags: PurchaseCount,
    /// Water by mass; numerically equal to litres
    pub water_mass: Quantity,
}

/// Split a wet concrete volume into dry constituents.
///
/// ```text
/// dry       = wet × (1 + wastage/100) × k
/// component = dry × part / (cement + sand + aggregate)
/// cement kg = cement volume × bulk density
/// bags      = cement kg / bag kg
/// water kg  = cement kg × w/c
/// ```
pub fn proportion(
    wet_volume: &Quantity,
    mix: &MixSpec,
    wastage_percent: f64,
    constants: &MixConstants,
) -> CalcResult<MixQuantities> {
    wet_volume.expect_family(Family::Volume)?;
    mix.validate()?;
    constants.validate()?;

    let wet_m3 = wet_volume.canonical_value();
    let dry_m3 = apply_wastage(wet_m3, wastage_percent) * constants.dry_volume_multiplier;
    let total = mix.total_parts();
    let share = |part: f64| dry_m3 * part / total;

    let cement_m3 = share(mix.cement);
    let cement_kg = cement_m3 * constants.cement_bulk_density_kg_m3;
    let raw_bags = cement_kg / constants.cement_bag_kg;

    tracing::trace!(wet_m3, dry_m3, cement_kg, raw_bags, "proportioned mix");

    let m3 = |v: f64| Quantity::canonical(v, Family::Volume);
    let kg = |m: f64| Quantity::canonical(m, Family::Mass);
    Ok(MixQuantities {
        wet_volume: m3(wet_m3),
        dry_volume: m3(dry_m3),
        cement_volume: m3(cement_m3),
        sand_volume: m3(share(mix.sand)),
        aggregate_volume: m3(share(mix.aggregate)),
        cement_mass: kg(cement_kg),
        cement_bags: PurchaseCount::from_raw(raw_bags),
        water_mass: kg(cement_kg * mix.water_cement_ratio),
    })
}
