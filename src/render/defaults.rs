//! Default sizes and settings (canvas units of the 600-wide reference wheel)

pub const SIZE: f64 = 600.0;
pub const OUTER_RADIUS: f64 = 280.0;
pub const ZODIAC_RADIUS: f64 = 270.0;
pub const HOUSE_RADIUS: f64 = 220.0;
pub const PLANET_RADIUS: f64 = 180.0;

/// Sign sector width in degrees
pub const SIGN_SPAN: f64 = 30.0;
pub const FONT_SIZE: f64 = 18.0;
pub const BOUNDARY_STROKE_WIDTH: f64 = 3.0;
pub const FALLBACK_GLYPH: &str = "•";
