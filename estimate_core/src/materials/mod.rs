//! # Materials Reference Data
//!
//! Immutable lookup tables used by quantity derivation:
//!
//! - [`mix`]: nominal concrete mix grades (M5 - M30)
//! - [`masonry`]: brick/block types and mortar bag yields
//! - [`density`]: concrete densities and cement packaging constants
//! - [`tile`]: thinset bed thickness presets, grout/thinset densities
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::materials::{MixSpec, MasonryUnit, MortarBag};
//!
//! let m20 = MixSpec::by_grade("M20").unwrap();
//! assert_eq!(m20.total_parts(), 5.5);
//!
//! let yield_80lb = MasonryUnit::ModularBricks.mortar_yield(MortarBag::Lb80);
//! assert_eq!(yield_80lb.average, 42.5);
//! ```

pub mod density;
pub mod masonry;
pub mod mix;
pub mod tile;

pub use density::{
    ConcreteType, CEMENT_BAG_KG, CEMENT_BULK_DENSITY_KG_M3, DRY_VOLUME_MULTIPLIER,
};
pub use masonry::{MasonryUnit, MaterialYield, MortarBag};
pub use mix::{MixGrade, MixSpec};
pub use tile::{
    TileSize, DRY_MATERIAL_PERCENT, GROUT_DENSITY_KG_M3, GROUT_DENSITY_LB_FT3, THINSET_DENSITY_KG_M3,
    THINSET_DENSITY_LB_FT3,
};
