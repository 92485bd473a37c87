//! Strongly-typed numeric primitives for chart geometry.
//!
//! - Degrees are validated once (finite) and normalized into `[0, 360)`
//! - Canvas points are only produced by projection, never by callers

use std::fmt;

use glam::DVec2;
use serde::Serialize;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN and infinities.
#[inline]
pub fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Reject NaN, infinities, zero and negative values.
#[inline]
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// An ecliptic angle in degrees, always inside `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Degrees {
    /// Normalize a raw degree value (mod 360), rejecting NaN/infinite input.
    pub fn try_new(val: f64) -> Result<Degrees, NumericError> {
        let val = check_finite(val)?;
        Ok(Degrees(Self::wrap(val)))
    }

    /// Sign sector midpoints and other constants known to be finite.
    #[inline]
    pub(crate) fn normalized(val: f64) -> Degrees {
        Degrees(Self::wrap(val))
    }

    fn wrap(val: f64) -> f64 {
        let wrapped = val.rem_euclid(360.0);
        // rem_euclid rounds tiny negative inputs up to exactly 360.0
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// A Cartesian coordinate on the output canvas (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub(crate) fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        DVec2::from(self).distance(DVec2::from(other))
    }

    /// Check if both coordinates are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}
