//! Ring layout: canvas size, center and the concentric radii

use crate::errors::LayoutError;
use crate::types::{Point, check_positive};

use super::defaults;

/// Which ring a primitive is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingName {
    Zodiac,
    House,
    Planet,
}

/// Immutable geometry configuration for one chart wheel.
///
/// Invariant: `outer >= zodiac > house > planet > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct RingLayout {
    size: f64,
    outer_radius: f64,
    zodiac_radius: f64,
    house_radius: f64,
    planet_radius: f64,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            size: defaults::SIZE,
            outer_radius: defaults::OUTER_RADIUS,
            zodiac_radius: defaults::ZODIAC_RADIUS,
            house_radius: defaults::HOUSE_RADIUS,
            planet_radius: defaults::PLANET_RADIUS,
        }
    }
}

impl RingLayout {
    /// Create a layout; the outer boundary keeps the reference ratio to the
    /// zodiac ring (280 / 270) unless overridden with
    /// [`RingLayout::with_outer_radius`].
    pub fn new(size: f64, zodiac: f64, house: f64, planet: f64) -> Result<Self, LayoutError> {
        let outer = zodiac * (defaults::OUTER_RADIUS / defaults::ZODIAC_RADIUS);
        Self::validated(size, outer, zodiac, house, planet)
    }

    /// The reference layout scaled proportionally to a canvas of `size`.
    pub fn scaled_to(size: f64) -> Result<Self, LayoutError> {
        let size = check_positive(size).map_err(|reason| LayoutError::InvalidValue {
            what: "canvas size",
            reason,
        })?;
        let k = size / defaults::SIZE;
        Self::validated(
            size,
            defaults::OUTER_RADIUS * k,
            defaults::ZODIAC_RADIUS * k,
            defaults::HOUSE_RADIUS * k,
            defaults::PLANET_RADIUS * k,
        )
    }

    /// Replace the outer boundary radius (must be at least the zodiac radius).
    pub fn with_outer_radius(self, outer: f64) -> Result<Self, LayoutError> {
        Self::validated(
            self.size,
            outer,
            self.zodiac_radius,
            self.house_radius,
            self.planet_radius,
        )
    }

    fn validated(
        size: f64,
        outer: f64,
        zodiac: f64,
        house: f64,
        planet: f64,
    ) -> Result<Self, LayoutError> {
        let check = |what: &'static str, val: f64| {
            check_positive(val).map_err(|reason| LayoutError::InvalidValue { what, reason })
        };
        // outer may be derived from zodiac, so report zodiac first
        check("canvas size", size)?;
        check("zodiac radius", zodiac)?;
        check("house radius", house)?;
        check("planet radius", planet)?;
        check("outer radius", outer)?;

        if !(zodiac > house && house > planet) {
            return Err(LayoutError::RadiiOutOfOrder {
                zodiac,
                house,
                planet,
            });
        }
        if outer < zodiac {
            return Err(LayoutError::OuterInsideZodiac { outer, zodiac });
        }

        Ok(Self {
            size,
            outer_radius: outer,
            zodiac_radius: zodiac,
            house_radius: house,
            planet_radius: planet,
        })
    }

    /// Canvas width and height
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Canvas center (`size / 2` on both axes)
    pub fn center(&self) -> Point {
        let half = self.size / 2.0;
        Point::new(half, half)
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn radius(&self, ring: RingName) -> f64 {
        match ring {
            RingName::Zodiac => self.zodiac_radius,
            RingName::House => self.house_radius,
            RingName::Planet => self.planet_radius,
        }
    }
}
