//! Zodiac ring: the outer boundary and the twelve sign labels.
//!
//! Depends only on configuration, so it is identical for every chart.

use crate::types::Degrees;

use super::defaults::SIGN_SPAN;
use super::glyphs::GlyphCatalog;
use super::layout::{RingLayout, RingName};
use super::projector::project;
use super::scene::{Circle, Primitive, Text};
use super::theme::Theme;

/// Midpoint of sign sector `index` (0 = Aries)
pub fn sign_midpoint(index: usize) -> Degrees {
    Degrees::normalized(index as f64 * SIGN_SPAN + SIGN_SPAN / 2.0)
}

/// Outer boundary circle of the whole diagram
pub fn boundary(layout: &RingLayout, theme: Theme) -> Primitive {
    Circle::new(layout.center(), layout.outer_radius(), theme.boundary()).into()
}

/// Exactly 12 sign labels, Aries..Pisces, centered in their sectors
pub fn sign_labels(layout: &RingLayout, glyphs: &GlyphCatalog, theme: Theme) -> Vec<Primitive> {
    let center = layout.center();
    let radius = layout.radius(RingName::Zodiac);
    (0..12)
        .map(|i| {
            let at = project(sign_midpoint(i), radius, center);
            Text::new(at, glyphs.sign(i), theme.sign_label()).into()
        })
        .collect()
}
