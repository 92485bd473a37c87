//! SVG generation
//!
//! The engine never touches a rendering API while computing geometry; this
//! module is one drawing surface that turns a finished scene into markup.

use svg::Document;

use super::scene::{Draw, SceneGraph};

/// Serialize a scene into a standalone SVG document of `size` × `size`.
///
/// Primitives are emitted in scene order, so z-order is preserved.
pub fn to_svg(scene: &SceneGraph, size: f64) -> String {
    let size_str = fmt_num(size);
    let mut document = Document::new()
        .set("width", size_str.clone())
        .set("height", size_str.clone())
        .set("viewBox", format!("0 0 {} {}", size_str, size_str));

    for primitive in scene {
        document = document.add(primitive.to_svg_node());
    }

    crate::log::debug!(primitives = scene.len(), size, "generated svg");
    document.to_string()
}

/// Format a number like C's `%g` with 6 significant figures, trailing zeros
/// trimmed. Values within 1e-9 of zero print as `0`.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value.abs() < 1e-9 {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::scene::{Circle, Line, Style, Text};
    use crate::types::Point;

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(300.0), "300");
        assert_eq!(fmt_num(280.5), "280.5");
        assert_eq!(fmt_num(80.00000000000003), "80");
        assert_eq!(fmt_num(477.26539554219), "477.265");
        assert_eq!(fmt_num(-12.25), "-12.25");
        assert_eq!(fmt_num(1.2e-14), "0");
        assert_eq!(fmt_num(1234.5), "1234.5");
    }

    fn scene() -> SceneGraph {
        let style = Style {
            stroke: Some("#7b3fe4".into()),
            stroke_width: Some(3.0),
            fill: Some("none".into()),
            ..Style::default()
        };
        SceneGraph::from_layers([
            vec![Circle::new(Point::new(300.0, 300.0), 280.0, style).into()],
            vec![Line::new(Point::new(300.0, 300.0), Point::new(300.0, 80.0), Style::default()).into()],
            vec![Text::new(Point::new(10.0, 20.0), "☉", Style::default()).into()],
        ])
    }

    #[test]
    fn document_header_uses_size() {
        let svg = to_svg(&scene(), 600.0);
        assert!(svg.contains("<svg"), "{svg}");
        assert!(svg.contains(r#"viewBox="0 0 600 600""#), "{svg}");
        assert!(svg.contains(r#"width="600""#), "{svg}");
    }

    #[test]
    fn primitives_emitted_in_order() {
        let svg = to_svg(&scene(), 600.0);
        let circle = svg.find("<circle").unwrap();
        let line = svg.find("<line").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(circle < line && line < text);
        assert!(svg.contains(r##"stroke="#7b3fe4""##), "{svg}");
        assert!(svg.contains(r#"stroke-width="3""#), "{svg}");
        assert!(svg.contains(r#"y2="80""#), "{svg}");
    }

    #[test]
    fn glyph_content_survives() {
        let svg = to_svg(&scene(), 600.0);
        assert!(svg.contains("☉"), "{svg}");
    }
}
