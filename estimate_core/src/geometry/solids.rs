//! Closed-form volumes of primitive and hollow solids.
//!
//! Every function is unit-agnostic: pass all dimensions in one length unit and
//! the result is in that unit cubed. Hollow solids clamp to zero when the
//! cavity is as large as, or larger than, the outer body.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// A circle given either by radius or by diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleSize {
    Radius(f64),
    Diameter(f64),
}

impl CircleSize {
    pub fn radius(&self) -> f64 {
        match *self {
            CircleSize::Radius(r) => r,
            CircleSize::Diameter(d) => d / 2.0,
        }
    }

    pub fn area(&self) -> f64 {
        circle_area(self.radius())
    }
}

pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// V = L × W × H
pub fn slab_volume(length: f64, width: f64, height: f64) -> f64 {
    length * width * height
}

/// V = S³
pub fn cube_volume(side: f64) -> f64 {
    side.powi(3)
}

/// V = π r² h
pub fn cylinder_volume(radius: f64, height: f64) -> f64 {
    PI * radius.powi(2) * height
}

/// V = π h (R² − r²), zero when r ≥ R
pub fn hollow_cylinder_volume(outer_radius: f64, inner_radius: f64, height: f64) -> f64 {
    if inner_radius >= outer_radius {
        return 0.0;
    }
    (PI * height * (outer_radius.powi(2) - inner_radius.powi(2))).max(0.0)
}

/// V = outer box − inner box, zero when the inner box is not smaller
pub fn hollow_cuboid_volume(outer: [f64; 3], inner: [f64; 3]) -> f64 {
    let outer_volume = outer[0] * outer[1] * outer[2];
    let inner_volume = inner[0] * inner[1] * inner[2];
    (outer_volume - inner_volume).max(0.0)
}

/// V = ⅔ π r³
pub fn hemisphere_volume(radius: f64) -> f64 {
    (2.0 / 3.0) * PI * radius.powi(3)
}

/// V = ⅓ π r² h
pub fn cone_volume(radius: f64, height: f64) -> f64 {
    (1.0 / 3.0) * PI * radius.powi(2) * height
}

/// V = ⅓ × base area × h
pub fn pyramid_volume(base_area: f64, height: f64) -> f64 {
    (1.0 / 3.0) * base_area * height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn test_cylinder_one_foot_radius() {
        let v = cylinder_volume(1.0, 10.0);
        assert!(approx_eq(v, 31.4159, 1e-5));
    }

    #[test]
    fn test_circle_size() {
        assert_eq!(CircleSize::Diameter(1.6).radius(), 0.8);
        assert_eq!(CircleSize::Radius(0.65).radius(), 0.65);
    }

    #[test]
    fn test_tube_volume() {
        let outer = CircleSize::Diameter(1.6).radius();
        let inner = CircleSize::Diameter(1.3).radius();
        let v = hollow_cylinder_volume(outer, inner, 8.0);
        assert!(approx_eq(v, PI * 8.0 * (0.64 - 0.4225), 1e-12));
        assert!(approx_eq(v, 5.468, 1e-3));
        assert!(approx_eq(v * 5.0, 27.34, 1e-3));
    }

    #[test]
    fn test_hollow_cylinder_clamps() {
        assert_eq!(hollow_cylinder_volume(1.0, 1.0, 5.0), 0.0);
        assert_eq!(hollow_cylinder_volume(1.0, 2.0, 5.0), 0.0);
        assert_eq!(hollow_cylinder_volume(2.0, 1.0, -5.0), 0.0);
    }

    #[test]
    fn test_hollow_cuboid() {
        let v = hollow_cuboid_volume([4.0, 3.0, 2.0], [2.0, 1.0, 1.0]);
        assert_eq!(v, 22.0);
        assert_eq!(hollow_cuboid_volume([1.0, 1.0, 1.0], [2.0, 2.0, 2.0]), 0.0);
    }

    #[test]
    fn test_round_solids() {
        assert!(approx_eq(hemisphere_volume(3.0), 18.0 * PI, 1e-12));
        assert!(approx_eq(cone_volume(3.0, 4.0), 12.0 * PI, 1e-12));
        assert!(approx_eq(pyramid_volume(9.0, 4.0), 12.0, 1e-12));
        assert_eq!(cube_volume(3.0), 27.0);
        assert_eq!(slab_volume(2.0, 3.0, 4.0), 24.0);
    }

    #[test]
    fn test_monotonic_in_each_dimension() {
        let bump = 1.1;
        assert!(slab_volume(2.0 * bump, 3.0, 4.0) > slab_volume(2.0, 3.0, 4.0));
        assert!(slab_volume(2.0, 3.0 * bump, 4.0) > slab_volume(2.0, 3.0, 4.0));
        assert!(slab_volume(2.0, 3.0, 4.0 * bump) > slab_volume(2.0, 3.0, 4.0));
        assert!(cube_volume(2.0 * bump) > cube_volume(2.0));
        assert!(cylinder_volume(2.0 * bump, 3.0) > cylinder_volume(2.0, 3.0));
        assert!(cylinder_volume(2.0, 3.0 * bump) > cylinder_volume(2.0, 3.0));
        assert!(hollow_cylinder_volume(2.0 * bump, 1.0, 3.0) > hollow_cylinder_volume(2.0, 1.0, 3.0));
        assert!(hollow_cylinder_volume(2.0, 1.0, 3.0 * bump) > hollow_cylinder_volume(2.0, 1.0, 3.0));
        assert!(hemisphere_volume(2.0 * bump) > hemisphere_volume(2.0));
        assert!(cone_volume(2.0 * bump, 3.0) > cone_volume(2.0, 3.0));
        assert!(cone_volume(2.0, 3.0 * bump) > cone_volume(2.0, 3.0));
        assert!(pyramid_volume(2.0 * bump, 3.0) > pyramid_volume(2.0, 3.0));
        assert!(pyramid_volume(2.0, 3.0 * bump) > pyramid_volume(2.0, 3.0));

        let outer = [4.0, 3.0, 2.0];
        let inner = [2.0, 1.0, 1.0];
        let base = hollow_cuboid_volume(outer, inner);
        for i in 0..3 {
            let mut grown = outer;
            grown[i] *= bump;
            assert!(hollow_cuboid_volume(grown, inner) > base, "outer[{i}]");
        }
    }
}
