//! House cusp lines
//!
//! Cusps are data-driven: unequal house systems produce uneven spacing, and
//! the input order and values are drawn as given.

use crate::types::Degrees;

use super::layout::{RingLayout, RingName};
use super::projector::project;
use super::scene::{Line, Primitive};
use super::theme::Theme;

/// One radial line per cusp, from the center out to the house ring.
pub fn cusp_lines(cusps: &[Degrees], layout: &RingLayout, theme: Theme) -> Vec<Primitive> {
    let center = layout.center();
    let radius = layout.radius(RingName::House);
    cusps
        .iter()
        .map(|&cusp| Line::new(center, project(cusp, radius, center), theme.house_cusp()).into())
        .collect()
}
