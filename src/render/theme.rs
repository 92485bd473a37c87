//! Color themes and aspect styling

use crate::chart::AspectKind;

use super::defaults;
use super::scene::Style;

/// Overall palette of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Violet boundary and light glyphs, meant for a dark page
    #[default]
    Dark,
    /// Dark ink on a white disc
    Light,
}

/// How aspect lines are stroked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectStyling {
    /// One faint stroke for every aspect
    #[default]
    Uniform,
    /// Stroke color picked from the aspect kind
    ByKind,
}

/// Broad family an aspect belongs to, for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectFamily {
    Conjunction,
    Harmonious,
    Tense,
    Minor,
}

impl AspectFamily {
    pub fn of(kind: &AspectKind) -> Self {
        match kind {
            AspectKind::Conjunction => AspectFamily::Conjunction,
            AspectKind::Trine | AspectKind::Sextile => AspectFamily::Harmonious,
            AspectKind::Opposition | AspectKind::Square => AspectFamily::Tense,
            AspectKind::Quincunx
            | AspectKind::SemiSextile
            | AspectKind::SemiSquare
            | AspectKind::Sesquiquadrate
            | AspectKind::Quintile
            | AspectKind::Other(_) => AspectFamily::Minor,
        }
    }
}

struct Palette {
    boundary_stroke: &'static str,
    boundary_fill: &'static str,
    house_stroke: &'static str,
    sign_fill: &'static str,
    planet_fill: Option<&'static str>,
    aspect_stroke: &'static str,
}

const DARK: Palette = Palette {
    boundary_stroke: "#7b3fe4",
    boundary_fill: "none",
    house_stroke: "#2b3555",
    sign_fill: "#caa8ff",
    planet_fill: None,
    aspect_stroke: "rgba(255,255,255,0.15)",
};

const LIGHT: Palette = Palette {
    boundary_stroke: "#999",
    boundary_fill: "#fff",
    house_stroke: "#bbb",
    sign_fill: "#5b2bb5",
    planet_fill: Some("#111"),
    aspect_stroke: "rgba(0,0,0,0.2)",
};

fn centered_text(fill: Option<&str>) -> Style {
    Style {
        fill: fill.map(str::to_string),
        font_size: Some(defaults::FONT_SIZE),
        text_anchor: Some("middle".to_string()),
        dominant_baseline: Some("middle".to_string()),
        ..Style::default()
    }
}

impl Theme {
    fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn boundary(self) -> Style {
        let p = self.palette();
        Style {
            stroke: Some(p.boundary_stroke.to_string()),
            stroke_width: Some(defaults::BOUNDARY_STROKE_WIDTH),
            fill: Some(p.boundary_fill.to_string()),
            ..Style::default()
        }
        .with_class("boundary")
    }

    pub fn house_cusp(self) -> Style {
        Style {
            stroke: Some(self.palette().house_stroke.to_string()),
            ..Style::default()
        }
        .with_class("house")
    }

    pub fn sign_label(self) -> Style {
        centered_text(Some(self.palette().sign_fill)).with_class("sign")
    }

    pub fn planet_glyph(self) -> Style {
        centered_text(self.palette().planet_fill).with_class("planet")
    }

    pub fn aspect_line(self, kind: &AspectKind, styling: AspectStyling) -> Style {
        let stroke = match styling {
            AspectStyling::Uniform => self.palette().aspect_stroke,
            AspectStyling::ByKind => match AspectFamily::of(kind) {
                AspectFamily::Conjunction => "rgba(230,190,60,0.6)",
                AspectFamily::Harmonious => "rgba(70,130,230,0.5)",
                AspectFamily::Tense => "rgba(220,60,60,0.5)",
                AspectFamily::Minor => "rgba(140,140,140,0.35)",
            },
        };
        let class = if kind.name().is_empty() {
            "aspect".to_string()
        } else {
            format!("aspect {}", kind.name())
        };
        Style {
            stroke: Some(stroke.to_string()),
            ..Style::default()
        }
        .with_class(class)
    }
}
