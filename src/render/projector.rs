//! Polar → canvas projection
//!
//! Degree 0 sits directly above the center and degrees increase clockwise
//! on a y-down canvas: the mathematical angle is rotated by -90° and the
//! downward y axis flips the apparent sweep.

use std::f64::consts::PI;

use glam::{DVec2, dvec2};

use crate::types::{Degrees, Point};

/// Project an ecliptic degree at `radius` around `center`.
///
/// `θ = (degree − 90) · π / 180`, `x = cx + r·cos θ`, `y = cy + r·sin θ`.
/// Aspect lines and planet glyphs both go through here, so the exact
/// operation order matters for bit-identical results.
pub fn project(degree: Degrees, radius: f64, center: Point) -> Point {
    let theta = (degree.raw() - 90.0) * PI / 180.0;
    let center = DVec2::from(center);
    let unit = dvec2(theta.cos(), theta.sin());
    Point::from(center + unit * radius)
}
