//! Chart wheel rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Reference sizes and settings
//! - `projector`: Degree/radius → canvas point
//! - `layout`: RingLayout (canvas size, center, ring radii)
//! - `glyphs`: Planet and sign symbols
//! - `theme`: Palettes and aspect styling
//! - `zodiac`, `houses`, `planets`, `aspects`: one builder per layer
//! - `scene`: SceneGraph and its primitives
//! - `svg`: SVG generation

pub mod aspects;
pub mod defaults;
pub mod glyphs;
pub mod houses;
pub mod layout;
pub mod planets;
pub mod projector;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod zodiac;

// Re-export commonly used items
pub use glyphs::GlyphCatalog;
pub use layout::{RingLayout, RingName};
pub use projector::project;
pub use scene::{Circle, Draw, Line, Primitive, PrimitiveKind, SceneGraph, Style, Text};
pub use theme::{AspectStyling, Theme};

use std::collections::BTreeSet;

use crate::chart::{ChartData, PlanetId};
use crate::errors::RenderError;

/// Presentation choices that do not affect geometry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    pub aspect_styling: AspectStyling,
    /// Bodies left off the wheel; aspects to them are skipped
    pub hidden_bodies: BTreeSet<PlanetId>,
}

impl RenderOptions {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_aspect_styling(mut self, styling: AspectStyling) -> Self {
        self.aspect_styling = styling;
        self
    }

    pub fn hide(mut self, id: impl Into<PlanetId>) -> Self {
        self.hidden_bodies.insert(id.into());
        self
    }
}

/// Turns chart data into a scene graph.
///
/// Holds only immutable configuration, so one renderer can serve any number
/// of charts, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    layout: RingLayout,
    glyphs: GlyphCatalog,
    options: RenderOptions,
}

impl ChartRenderer {
    pub fn new(layout: RingLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn with_glyphs(mut self, glyphs: GlyphCatalog) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn layout(&self) -> &RingLayout {
        &self.layout
    }

    pub fn glyphs(&self) -> &GlyphCatalog {
        &self.glyphs
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render one chart.
    ///
    /// Draw order (later on top): boundary circle, house cusps, sign labels,
    /// planet glyphs, aspect lines. Fails without producing any scene when
    /// the house set is not exactly 12 entries or a degree is not finite.
    pub fn render(&self, chart: &ChartData) -> Result<SceneGraph, RenderError> {
        let degrees = chart.validate()?;
        let theme = self.options.theme;

        let boundary = vec![zodiac::boundary(&self.layout, theme)];
        let cusps = houses::cusp_lines(&degrees.houses, &self.layout, theme);
        let signs = zodiac::sign_labels(&self.layout, &self.glyphs, theme);
        let placement = planets::place(
            &chart.planets,
            &degrees.planets,
            &self.layout,
            &self.glyphs,
            theme,
            &self.options.hidden_bodies,
        );
        let links = aspects::links(
            &chart.aspects,
            &placement,
            theme,
            self.options.aspect_styling,
        );

        crate::log::debug!(
            houses = cusps.len(),
            planets = placement.glyphs().len(),
            aspects = links.len(),
            skipped_aspects = chart.aspects.len() - links.len(),
            "rendered chart"
        );

        let scene =
            SceneGraph::from_layers([boundary, cusps, signs, placement.into_glyphs(), links]);
        debug_assert!(scene.iter().all(|p| p.is_finite()));
        Ok(scene)
    }

    /// Render one chart straight to an SVG document
    pub fn render_svg(&self, chart: &ChartData) -> Result<String, RenderError> {
        let scene = self.render(chart)?;
        Ok(svg::to_svg(&scene, self.layout.size()))
    }
}

/// Render with the reference glyphs and default options
pub fn render_chart(chart: &ChartData, layout: &RingLayout) -> Result<SceneGraph, RenderError> {
    ChartRenderer::new(layout.clone()).render(chart)
}
