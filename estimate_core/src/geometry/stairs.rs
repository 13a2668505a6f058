//! Concrete stair flight geometry.
//!
//! A flight is modelled in side elevation: each step contributes a triangle
//! (tread × riser / 2, widened by the nosing for angled risers) plus a strip of
//! the sloped carriage slab underneath it (diagonal × throat thickness). The
//! summed end area is then extruded across the stair width.
//!
//! ```text
//!        ┌──┐
//!     ┌──┘  │  ← steps (triangles)
//!  ┌──┘    /
//!  │     /     ← carriage / throat
//!  └───/
//! ```

use serde::{Deserialize, Serialize};

/// Riser profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiserStyle {
    /// Vertical risers
    #[default]
    Regular,
    /// Raked risers; the nosing overhang adds to the step triangle
    Angled,
}

/// Stair flight dimensions, all in one length unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StairFlight {
    /// Number of steps (risers)
    pub num_steps: u32,
    /// Rise of one step
    pub riser_height: f64,
    /// Effective tread run (going) of one step
    pub tread_run: f64,
    /// Nosing overhang, only used with angled risers
    #[serde(default)]
    pub nosing_overhang: f64,
    /// Thickness of the carriage slab measured perpendicular to its soffit
    pub throat_thickness: f64,
    /// Width of the flight
    pub stair_width: f64,
    #[serde(default)]
    pub riser_style: RiserStyle,
}

impl StairFlight {
    /// Same flight with every length multiplied by `factor` (unit change)
    pub fn scaled(&self, factor: f64) -> StairFlight {
        StairFlight {
            riser_height: self.riser_height * factor,
            tread_run: self.tread_run * factor,
            nosing_overhang: self.nosing_overhang * factor,
            throat_thickness: self.throat_thickness * factor,
            stair_width: self.stair_width * factor,
            ..*self
        }
    }

    /// Side-elevation area of one step triangle
    pub fn step_area(&self) -> f64 {
        match self.riser_style {
            RiserStyle::Regular => 0.5 * self.tread_run * self.riser_height,
            RiserStyle::Angled => 0.5 * (self.tread_run + self.nosing_overhang) * self.riser_height,
        }
    }

    /// Length of the carriage soffit under one step
    pub fn diagonal_length(&self) -> f64 {
        self.tread_run.hypot(self.riser_height)
    }

    /// Side-elevation area of the carriage strip under one step
    pub fn carriage_area_per_step(&self) -> f64 {
        self.diagonal_length() * self.throat_thickness
    }

    /// Total side-elevation area of the flight
    pub fn end_area(&self) -> f64 {
        self.num_steps as f64 * (self.step_area() + self.carriage_area_per_step())
    }

    /// V = steps × (step area + carriage area) × width
    pub fn volume(&self) -> f64 {
        self.end_area() * self.stair_width
    }

    /// Overall rise of the flight
    pub fn total_rise(&self) -> f64 {
        self.riser_height * self.num_steps as f64
    }

    /// Overall run of the flight; there is one tread fewer than risers
    pub fn total_run(&self) -> f64 {
        self.tread_run * self.num_steps.saturating_sub(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    fn flight(style: RiserStyle) -> StairFlight {
        StairFlight {
            num_steps: 10,
            riser_height: 0.18,
            tread_run: 0.28,
            nosing_overhang: 0.025,
            throat_thickness: 0.15,
            stair_width: 1.2,
            riser_style: style,
        }
    }

    #[test]
    fn test_regular_riser_step_area() {
        let f = flight(RiserStyle::Regular);
        assert!(approx_eq(f.step_area(), 0.5 * 0.28 * 0.18, 1e-12));
    }

    #[test]
    fn test_angled_riser_includes_nosing() {
        let f = flight(RiserStyle::Angled);
        assert!(approx_eq(f.step_area(), 0.5 * (0.28 + 0.025) * 0.18, 1e-12));
        assert!(f.volume() > flight(RiserStyle::Regular).volume());
    }

    #[test]
    fn test_flight_volume() {
        let f = flight(RiserStyle::Regular);
        let carriage = (0.28f64 * 0.28 + 0.18 * 0.18).sqrt() * 0.15;
        let expected = 10.0 * (0.0252 + carriage) * 1.2;
        assert!(approx_eq(f.carriage_area_per_step(), carriage, 1e-12));
        assert!(approx_eq(f.volume(), expected, 1e-12));
    }

    #[test]
    fn test_totals() {
        let f = flight(RiserStyle::Regular);
        assert!(approx_eq(f.total_rise(), 1.8, 1e-12));
        assert!(approx_eq(f.total_run(), 2.52, 1e-12));

        let empty = StairFlight { num_steps: 0, ..f };
        assert_eq!(empty.total_run(), 0.0);
        assert_eq!(empty.volume(), 0.0);
    }

    #[test]
    fn test_monotonic() {
        let base = flight(RiserStyle::Regular);
        let v = base.volume();
        assert!(StairFlight { num_steps: 11, ..base }.volume() > v);
        assert!(StairFlight { riser_height: 0.2, ..base }.volume() > v);
        assert!(StairFlight { tread_run: 0.3, ..base }.volume() > v);
        assert!(StairFlight { throat_thickness: 0.2, ..base }.volume() > v);
        assert!(StairFlight { stair_width: 1.5, ..base }.volume() > v);
    }
}
