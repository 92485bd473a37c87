//! Geometry and rendering engine for astrological chart wheels.
//!
//! Given a [`ChartData`] (house cusps, planet positions and aspects as
//! delivered by an external calculation service) the engine computes where
//! every zodiac sign, house cusp, planet glyph and aspect line sits on a
//! square canvas and returns an ordered [`SceneGraph`] of circles, lines and
//! text. Turning that scene into pixels is up to a drawing surface; an SVG
//! one is included.
//!
//! ```
//! use mandala::{ChartData, ChartRenderer, RingLayout};
//!
//! let json = r#"{
//!     "houses": [
//!         {"id": 1, "absolutePosition": 0},   {"id": 2, "absolutePosition": 30},
//!         {"id": 3, "absolutePosition": 60},  {"id": 4, "absolutePosition": 90},
//!         {"id": 5, "absolutePosition": 120}, {"id": 6, "absolutePosition": 150},
//!         {"id": 7, "absolutePosition": 180}, {"id": 8, "absolutePosition": 210},
//!         {"id": 9, "absolutePosition": 240}, {"id": 10, "absolutePosition": 270},
//!         {"id": 11, "absolutePosition": 300}, {"id": 12, "absolutePosition": 330}
//!     ],
//!     "planets": [{"id": "sun", "absolutePosition": 100}],
//!     "aspects": []
//! }"#;
//!
//! let chart = ChartData::from_json(json)?;
//! let scene = ChartRenderer::new(RingLayout::default()).render(&chart)?;
//! assert_eq!(scene.len(), 1 + 12 + 12 + 1);
//! # Ok::<(), miette::Report>(())
//! ```

pub mod chart;
pub mod errors;
pub mod log;
pub mod render;
pub mod types;

pub use chart::{Aspect, AspectKind, ChartData, House, HouseId, Planet, PlanetId};
pub use errors::{ChartParseError, LayoutError, RenderError};
pub use render::{
    AspectStyling, ChartRenderer, GlyphCatalog, Primitive, PrimitiveKind, RenderOptions,
    RingLayout, RingName, SceneGraph, Theme, render_chart,
};
pub use types::{Degrees, Point};

/// Render chart JSON to an SVG document with the reference layout.
///
/// Returns the SVG string on success, or an error with diagnostics.
pub fn render_svg(json: &str) -> Result<String, miette::Report> {
    render_svg_with(json, &ChartRenderer::default())
}

/// Render chart JSON to an SVG document with a configured renderer.
pub fn render_svg_with(json: &str, renderer: &ChartRenderer) -> Result<String, miette::Report> {
    let chart = ChartData::from_json(json)?;
    Ok(renderer.render_svg(&chart)?)
}
