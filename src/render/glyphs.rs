//! Glyph catalog: planet and sign symbols with a total lookup

use std::collections::HashMap;

use crate::chart::PlanetId;

use super::defaults;

/// Zodiac sign glyphs, Aries through Pisces
pub const SIGN_GLYPHS: [&str; 12] = [
    "♈", "♉", "♊", "♋", "♌", "♍", "♎", "♏", "♐", "♑", "♒", "♓",
];

const PLANET_GLYPHS: [(&str, &str); 14] = [
    ("sun", "☉"),
    ("moon", "☽"),
    ("mercury", "☿"),
    ("venus", "♀"),
    ("mars", "♂"),
    ("jupiter", "♃"),
    ("saturn", "♄"),
    ("uranus", "♅"),
    ("neptune", "♆"),
    ("pluto", "♇"),
    ("north_node", "☊"),
    ("south_node", "☋"),
    ("lilith", "⚸"),
    ("chiron", "⚷"),
];

/// Maps planet ids and sign indices to display symbols.
///
/// Planet lookup never fails: ids without a registered symbol resolve to
/// the fallback glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphCatalog {
    planets: HashMap<PlanetId, String>,
    signs: [String; 12],
    fallback: String,
}

impl Default for GlyphCatalog {
    fn default() -> Self {
        Self {
            planets: PLANET_GLYPHS
                .iter()
                .map(|(id, glyph)| (PlanetId::from(*id), glyph.to_string()))
                .collect(),
            signs: SIGN_GLYPHS.map(str::to_string),
            fallback: defaults::FALLBACK_GLYPH.to_string(),
        }
    }
}

impl GlyphCatalog {
    /// An empty catalog: every planet resolves to the fallback glyph.
    pub fn empty() -> Self {
        Self {
            planets: HashMap::new(),
            ..Self::default()
        }
    }

    /// Register or override a planet glyph
    pub fn with_planet(mut self, id: impl Into<PlanetId>, glyph: impl Into<String>) -> Self {
        self.planets.insert(id.into(), glyph.into());
        self
    }

    /// Replace the glyph used for unknown planet ids
    pub fn with_fallback(mut self, glyph: impl Into<String>) -> Self {
        self.fallback = glyph.into();
        self
    }

    /// Registered glyph for `id`, if any
    pub fn lookup(&self, id: &PlanetId) -> Option<&str> {
        self.planets.get(id).map(String::as_str)
    }

    /// Glyph for `id`, falling back to the unknown-body symbol
    pub fn planet(&self, id: &PlanetId) -> &str {
        self.lookup(id).unwrap_or(&self.fallback)
    }

    /// Glyph for sign `index` (taken mod 12)
    pub fn sign(&self, index: usize) -> &str {
        &self.signs[index % 12]
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_planets_resolve() {
        let glyphs = GlyphCatalog::default();
        assert_eq!(glyphs.planet(&"sun".into()), "☉");
        assert_eq!(glyphs.planet(&"north_node".into()), "☊");
        assert_eq!(glyphs.planet(&"chiron".into()), "⚷");
    }

    #[test]
    fn unknown_planet_uses_fallback() {
        let glyphs = GlyphCatalog::default();
        assert_eq!(glyphs.lookup(&"unknown_body".into()), None);
        assert_eq!(glyphs.planet(&"unknown_body".into()), "•");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let glyphs = GlyphCatalog::default();
        assert_eq!(glyphs.planet(&"Sun".into()), "•");
    }

    #[test]
    fn overrides_and_custom_fallback() {
        let glyphs = GlyphCatalog::empty()
            .with_planet("ceres", "⚳")
            .with_fallback("?");
        assert_eq!(glyphs.planet(&"ceres".into()), "⚳");
        assert_eq!(glyphs.planet(&"sun".into()), "?");
    }

    #[test]
    fn sign_sequence_is_conventional() {
        let glyphs = GlyphCatalog::default();
        assert_eq!(glyphs.sign(0), "♈");
        assert_eq!(glyphs.sign(6), "♎");
        assert_eq!(glyphs.sign(11), "♓");
        assert_eq!(glyphs.sign(12), "♈");
    }
}
