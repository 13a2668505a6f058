//! # Shape and Volume Formulas
//!
//! [`ShapeParameters`] is a tagged union over every solid the calculators
//! know how to measure. Dimensions inside one `ShapeParameters` value are plain
//! numbers that must all be in the same length unit; [`compute_volume`] takes
//! that unit and returns the volume in the matching cubic unit, so a shape
//! measured in feet yields cubic feet with no rounding through meters.
//!
//! Converting inputs that arrive in mixed units (feet for the wall, inches for
//! the block) is the caller's job, done before the shape is built.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::conversion::{LengthUnit, VolumeUnit};
//! use estimate_core::geometry::{compute_volume, CircleSize, ShapeParameters};
//!
//! let post = ShapeParameters::Cylinder {
//!     size: CircleSize::Radius(1.0),
//!     height: 10.0,
//! };
//! let volume = compute_volume(&post, LengthUnit::Foot);
//! assert!((volume.value - 31.4159).abs() < 1e-4);
//!
//! let yd3 = volume.convert_to(VolumeUnit::CubicYard).unwrap();
//! assert!((yd3.value - 1.16355).abs() < 1e-4);
//! ```

pub mod masonry;
pub mod solids;
pub mod stairs;

pub use masonry::{units_for_wall, units_to_cover, HollowBlock};
pub use solids::*;
pub use stairs::{RiserStyle, StairFlight};

use serde::{Deserialize, Serialize};

use crate::conversion::{LengthUnit, Quantity};

/// Dimensions of a solid, tagged by shape kind.
///
/// ## JSON Example
///
/// ```json
/// { "shape": "hollow_cylinder", "outer": { "diameter": 1.6 }, "inner": { "diameter": 1.3 }, "height": 8.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeParameters {
    /// Rectangular slab / cuboid
    Slab { length: f64, width: f64, height: f64 },
    Cube { side: f64 },
    Cylinder { size: CircleSize, height: f64 },
    /// Pipe or tube
    HollowCylinder { outer: CircleSize, inner: CircleSize, height: f64 },
    HollowCuboid {
        outer_length: f64,
        outer_width: f64,
        outer_height: f64,
        inner_length: f64,
        inner_width: f64,
        inner_height: f64,
    },
    Hemisphere { radius: f64 },
    Cone { radius: f64, height: f64 },
    /// Rectangular-based pyramid
    Pyramid { base_length: f64, base_width: f64, height: f64 },
    StairFlight(StairFlight),
    /// Fillable core of one hollow masonry block
    HollowBlockCore(HollowBlock),
}

impl ShapeParameters {
    /// Volume in the cube of whatever length unit the dimensions are in.
    pub fn raw_volume(&self) -> f64 {
        match self {
            ShapeParameters::Slab { length, width, height } => slab_volume(*length, *width, *height),
            ShapeParameters::Cube { side } => cube_volume(*side),
            ShapeParameters::Cylinder { size, height } => cylinder_volume(size.radius(), *height),
            ShapeParameters::HollowCylinder { outer, inner, height } => {
                hollow_cylinder_volume(outer.radius(), inner.radius(), *height)
            }
            ShapeParameters::HollowCuboid {
                outer_length,
                outer_width,
                outer_height,
                inner_length,
                inner_width,
                inner_height,
            } => hollow_cuboid_volume(
                [*outer_length, *outer_width, *outer_height],
                [*inner_length, *inner_width, *inner_height],
            ),
            ShapeParameters::Hemisphere { radius } => hemisphere_volume(*radius),
            ShapeParameters::Cone { radius, height } => cone_volume(*radius, *height),
            ShapeParameters::Pyramid { base_length, base_width, height } => {
                pyramid_volume(base_length * base_width, *height)
            }
            ShapeParameters::StairFlight(flight) => flight.volume(),
            ShapeParameters::HollowBlockCore(block) => block.core_volume(),
        }
    }

    /// Shape kind as a display string
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeParameters::Slab { .. } => "Slab",
            ShapeParameters::Cube { .. } => "Cube",
            ShapeParameters::Cylinder { .. } => "Cylinder",
            ShapeParameters::HollowCylinder { .. } => "Hollow Cylinder",
            ShapeParameters::HollowCuboid { .. } => "Hollow Cuboid",
            ShapeParameters::Hemisphere { .. } => "Hemisphere",
            ShapeParameters::Cone { .. } => "Cone",
            ShapeParameters::Pyramid { .. } => "Pyramid",
            ShapeParameters::StairFlight(_) => "Stair Flight",
            ShapeParameters::HollowBlockCore(_) => "Hollow Block Core",
        }
    }

    /// True for shapes whose volume is clamped at zero
    pub fn is_hollow(&self) -> bool {
        matches!(
            self,
            ShapeParameters::HollowCylinder { .. }
                | ShapeParameters::HollowCuboid { .. }
                | ShapeParameters::HollowBlockCore(_)
        )
    }
}

/// Volume of `params` whose dimensions are all in `unit`.
///
/// The result is expressed in `unit` cubed (ft → ft³, m → m³); convert it with
/// [`Quantity::convert_to`] for any other volume unit.
pub fn compute_volume(params: &ShapeParameters, unit: LengthUnit) -> Quantity {
    let volume = Quantity::new(params.raw_volume(), unit.cubed());
    tracing::trace!(shape = params.kind(), unit = unit.symbol(), volume = volume.value, "computed volume");
    volume
}

/// A shape together with the length unit its dimensions are measured in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub unit: LengthUnit,
    #[serde(flatten)]
    pub params: ShapeParameters,
}

impl Shape {
    pub fn new(params: ShapeParameters, unit: LengthUnit) -> Self {
        Shape { unit, params }
    }

    /// Volume in the cube of this shape's length unit
    pub fn volume(&self) -> Quantity {
        compute_volume(&self.params, self.unit)
    }
}
