//! Aspect lines between placed planets

use crate::chart::Aspect;

use super::planets::PlanetPlacement;
use super::scene::{Line, Primitive};
use super::theme::{AspectStyling, Theme};

/// One line per aspect whose endpoints were both placed.
///
/// Aspects naming a planet that is absent (or hidden) are skipped: upstream
/// data routinely lists aspects to bodies a chart does not display.
pub fn links(
    aspects: &[Aspect],
    placement: &PlanetPlacement,
    theme: Theme,
    styling: AspectStyling,
) -> Vec<Primitive> {
    aspects
        .iter()
        .filter_map(|aspect| {
            let (Some(a), Some(b)) = (
                placement.point(&aspect.planet_a),
                placement.point(&aspect.planet_b),
            ) else {
                crate::log::debug!(
                    planet_a = %aspect.planet_a,
                    planet_b = %aspect.planet_b,
                    kind = %aspect.kind,
                    "skipping aspect with dangling planet reference"
                );
                return None;
            };
            Some(Line::new(a, b, theme.aspect_line(&aspect.kind, styling)).into())
        })
        .collect()
}
