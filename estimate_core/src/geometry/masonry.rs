//! Masonry geometry: wall coverage counts and hollow block cores.

use serde::{Deserialize, Serialize};

use crate::derivation::ceil_count;
use crate::errors::{require_positive, CalcResult};

/// Units needed to cover a wall face: `ceil(wall area / unit face area)`.
///
/// Always rounds up; a partial block still has to be bought. Fails when the
/// unit face area is not positive.
pub fn units_to_cover(wall_area: f64, unit_face_area: f64) -> CalcResult<u64> {
    let face = require_positive("unit_face_area", unit_face_area)?;
    Ok(ceil_count(wall_area / face))
}

/// [`units_to_cover`] from the four edge lengths.
pub fn units_for_wall(wall_height: f64, wall_width: f64, unit_height: f64, unit_width: f64) -> CalcResult<u64> {
    units_to_cover(wall_height * wall_width, unit_height * unit_width)
}

/// Hollow concrete masonry unit, all dimensions in one length unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HollowBlock {
    /// Face height of the block
    pub height: f64,
    /// Face width (length along the wall)
    pub width: f64,
    /// Thickness through the wall
    pub thickness: f64,
    /// Outer wall (face shell) thickness
    pub shell_thickness: f64,
    /// Thickness of one internal cross web
    pub web_thickness: f64,
    /// Number of internal cross webs
    pub number_of_webs: u32,
}

impl HollowBlock {
    /// Same block with every length multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> HollowBlock {
        HollowBlock {
            height: self.height * factor,
            width: self.width * factor,
            thickness: self.thickness * factor,
            shell_thickness: self.shell_thickness * factor,
            web_thickness: self.web_thickness * factor,
            number_of_webs: self.number_of_webs,
        }
    }

    /// Cavity width after removing both end shells
    pub fn internal_width(&self) -> f64 {
        self.width - 2.0 * self.shell_thickness
    }

    /// Cavity thickness after removing both face shells
    pub fn internal_thickness(&self) -> f64 {
        self.thickness - 2.0 * self.shell_thickness
    }

    /// Fillable core volume of one block, clamped to zero.
    ///
    /// (internal width × internal thickness × height)
    /// − (webs × web thickness × internal thickness × height)
    pub fn core_volume(&self) -> f64 {
        let internal_width = self.internal_width();
        let internal_thickness = self.internal_thickness();
        if internal_width <= 0.0 || internal_thickness <= 0.0 {
            return 0.0;
        }
        let cavity = internal_width * internal_thickness * self.height;
        let webs = self.number_of_webs as f64 * self.web_thickness * internal_thickness * self.height;
        (cavity - webs).max(0.0)
    }

    /// Face area presented to the wall
    pub fn face_area(&self) -> f64 {
        self.height * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    fn standard_block() -> HollowBlock {
        HollowBlock {
            height: 0.2,
            width: 0.4,
            thickness: 0.2,
            shell_thickness: 0.03,
            web_thickness: 0.025,
            number_of_webs: 1,
        }
    }

    #[test]
    fn test_wall_of_blocks() {
        // 3 m × 10 m wall of 0.2 m × 0.4 m blocks
        assert_eq!(units_for_wall(3.0, 10.0, 0.2, 0.4).unwrap(), 375);
    }

    #[test]
    fn test_partial_block_rounds_up() {
        assert_eq!(units_to_cover(1.0, 0.3).unwrap(), 4);
        assert_eq!(units_to_cover(0.0, 0.3).unwrap(), 0);
    }

    #[test]
    fn test_zero_face_area_rejected() {
        let err = units_to_cover(30.0, 0.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MATERIAL_CONSTANT");
        assert!(units_for_wall(3.0, 10.0, -0.2, 0.4).is_err());
    }

    #[test]
    fn test_core_volume() {
        let block = standard_block();
        let iw = 0.4 - 0.06;
        let it = 0.2 - 0.06;
        let expected = iw * it * 0.2 - 1.0 * 0.025 * it * 0.2;
        assert!(approx_eq(block.core_volume(), expected, 1e-12));
    }

    #[test]
    fn test_core_volume_clamps() {
        let solid = HollowBlock { shell_thickness: 0.1, ..standard_block() };
        assert_eq!(solid.core_volume(), 0.0);

        let all_webs = HollowBlock { number_of_webs: 40, ..standard_block() };
        assert_eq!(all_webs.core_volume(), 0.0);
    }

    #[test]
    fn test_core_volume_grows_with_each_outer_dimension() {
        let block = standard_block();
        let base = block.core_volume();
        let bump = 1.1;
        let taller = HollowBlock { height: block.height * bump, ..block };
        let wider = HollowBlock { width: block.width * bump, ..block };
        let thicker = HollowBlock { thickness: block.thickness * bump, ..block };
        assert!(taller.core_volume() > base);
        assert!(wider.core_volume() > base);
        assert!(thicker.core_volume() > base);
    }
}
