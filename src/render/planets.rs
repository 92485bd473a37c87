//! Planet glyph placement
//!
//! Produces the glyph primitives and the resolved point per planet. Aspect
//! lines read the same point map, so a planet's glyph and the ends of its
//! aspect lines are the same `f64` values.

use std::collections::{BTreeSet, HashMap};

use crate::chart::{Planet, PlanetId};
use crate::types::{Degrees, Point};

use super::glyphs::GlyphCatalog;
use super::layout::{RingLayout, RingName};
use super::projector::project;
use super::scene::{Primitive, Text};
use super::theme::Theme;

/// Glyph primitives plus the projected point of every drawn planet
#[derive(Debug, Clone, Default)]
pub struct PlanetPlacement {
    glyphs: Vec<Primitive>,
    points: HashMap<PlanetId, Point>,
}

impl PlanetPlacement {
    /// Projected point of a drawn planet
    pub fn point(&self, id: &PlanetId) -> Option<Point> {
        self.points.get(id).copied()
    }

    pub fn glyphs(&self) -> &[Primitive] {
        &self.glyphs
    }

    pub(crate) fn into_glyphs(self) -> Vec<Primitive> {
        self.glyphs
    }
}

/// Place one glyph per visible planet on the planet ring.
///
/// `degrees` is index-aligned with `planets`. Unknown ids draw the fallback
/// glyph; ids in `hidden` are neither drawn nor resolvable.
pub fn place(
    planets: &[Planet],
    degrees: &[Degrees],
    layout: &RingLayout,
    glyphs: &GlyphCatalog,
    theme: Theme,
    hidden: &BTreeSet<PlanetId>,
) -> PlanetPlacement {
    let center = layout.center();
    let radius = layout.radius(RingName::Planet);
    let mut placement = PlanetPlacement::default();

    for (planet, &degree) in planets.iter().zip(degrees) {
        if hidden.contains(&planet.id) {
            crate::log::debug!(planet = %planet.id, "planet hidden by display settings");
            continue;
        }

        let at = project(degree, radius, center);
        let symbol = match glyphs.lookup(&planet.id) {
            Some(symbol) => symbol,
            None => {
                crate::log::debug!(planet = %planet.id, "no glyph registered, using fallback");
                glyphs.fallback()
            }
        };

        placement.glyphs.push(Text::new(at, symbol, theme.planet_glyph()).into());
        // ids are unique per chart; if not, the first occurrence anchors aspects
        placement.points.entry(planet.id.clone()).or_insert(at);
    }

    placement
}
