//! Scene graph: the ordered, fully resolved output of a render
//!
//! Each primitive is its own type that knows how to:
//! - Report its kind and anchor point
//! - Render itself to an SVG node
//!
//! Serialization follows the drawing-surface contract:
//! `{"type": "circle", "cx", "cy", "r", "style"}`,
//! `{"type": "line", "x1", "y1", "x2", "y2", "style"}`,
//! `{"type": "text", "x", "y", "content", "style"}`.

use enum_dispatch::enum_dispatch;
use serde::Serialize;
use svg::Node;
use svg::node::element::{Circle as SvgCircle, Line as SvgLine, Text as SvgText};

use crate::types::Point;

use super::svg::fmt_num;

/// Presentation attributes carried by every primitive.
///
/// Styling never affects geometry; a drawing surface is free to ignore it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_baseline: Option<String>,
}

impl Style {
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Copy the set attributes onto an SVG node
    fn apply<T: Node>(&self, mut node: T) -> T {
        if let Some(ref class) = self.class {
            node.assign("class", class.clone());
        }
        if let Some(ref stroke) = self.stroke {
            node.assign("stroke", stroke.clone());
        }
        if let Some(width) = self.stroke_width {
            node.assign("stroke-width", fmt_num(width));
        }
        if let Some(ref fill) = self.fill {
            node.assign("fill", fill.clone());
        }
        if let Some(size) = self.font_size {
            node.assign("font-size", fmt_num(size));
        }
        if let Some(ref anchor) = self.text_anchor {
            node.assign("text-anchor", anchor.clone());
        }
        if let Some(ref baseline) = self.dominant_baseline {
            node.assign("dominant-baseline", baseline.clone());
        }
        node
    }
}

/// The three primitive kinds a scene may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Circle,
    Line,
    Text,
}

/// Common behavior for all primitives
#[enum_dispatch]
pub trait Draw {
    fn kind(&self) -> PrimitiveKind;

    /// Reference point: circle center, line start, text anchor
    fn anchor(&self) -> Point;

    /// Whether every coordinate is a finite number
    fn is_finite(&self) -> bool;

    fn style(&self) -> &Style;

    /// Render this primitive to an SVG node
    fn to_svg_node(&self) -> Box<dyn Node>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub style: Style,
}

impl Circle {
    pub fn new(center: Point, r: f64, style: Style) -> Self {
        Self {
            cx: center.x,
            cy: center.y,
            r,
            style,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}

impl Draw for Circle {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Circle
    }

    fn anchor(&self) -> Point {
        self.center()
    }

    fn is_finite(&self) -> bool {
        self.center().is_finite() && self.r.is_finite()
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn to_svg_node(&self) -> Box<dyn Node> {
        let node = SvgCircle::new()
            .set("cx", fmt_num(self.cx))
            .set("cy", fmt_num(self.cy))
            .set("r", fmt_num(self.r));
        Box::new(self.style.apply(node))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub style: Style,
}

impl Line {
    pub fn new(from: Point, to: Point, style: Style) -> Self {
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            style,
        }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}

impl Draw for Line {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Line
    }

    fn anchor(&self) -> Point {
        self.start()
    }

    fn is_finite(&self) -> bool {
        self.start().is_finite() && self.end().is_finite()
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn to_svg_node(&self) -> Box<dyn Node> {
        let node = SvgLine::new()
            .set("x1", fmt_num(self.x1))
            .set("y1", fmt_num(self.y1))
            .set("x2", fmt_num(self.x2))
            .set("y2", fmt_num(self.y2));
        Box::new(self.style.apply(node))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub style: Style,
}

impl Text {
    pub fn new(at: Point, content: impl Into<String>, style: Style) -> Self {
        Self {
            x: at.x,
            y: at.y,
            content: content.into(),
            style,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Draw for Text {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Text
    }

    fn anchor(&self) -> Point {
        self.position()
    }

    fn is_finite(&self) -> bool {
        self.position().is_finite()
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn to_svg_node(&self) -> Box<dyn Node> {
        let node = SvgText::new(self.content.clone())
            .set("x", fmt_num(self.x))
            .set("y", fmt_num(self.y));
        Box::new(self.style.apply(node))
    }
}

/// One drawable primitive
#[enum_dispatch(Draw)]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    Circle(Circle),
    Line(Line),
    Text(Text),
}

/// Ordered primitives; later entries draw on top of earlier ones.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct SceneGraph {
    primitives: Vec<Primitive>,
}

impl SceneGraph {
    pub(crate) fn from_layers(layers: impl IntoIterator<Item = Vec<Primitive>>) -> Self {
        Self {
            primitives: layers.into_iter().flatten().collect(),
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Primitive> {
        self.primitives.iter()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Number of primitives of one kind
    pub fn count(&self, kind: PrimitiveKind) -> usize {
        self.primitives.iter().filter(|p| p.kind() == kind).count()
    }

    /// Serialize to the drawing-surface JSON contract
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<'a> IntoIterator for &'a SceneGraph {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SceneGraph {
        SceneGraph::from_layers([
            vec![Circle::new(Point::new(300.0, 300.0), 280.0, Style::default()).into()],
            vec![
                Line::new(Point::new(300.0, 300.0), Point::new(300.0, 80.0), Style::default())
                    .into(),
            ],
            vec![Text::new(Point::new(1.0, 2.0), "☉", Style::default()).into()],
        ])
    }

    #[test]
    fn layers_keep_order() {
        let scene = sample();
        let kinds: Vec<_> = scene.iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            [PrimitiveKind::Circle, PrimitiveKind::Line, PrimitiveKind::Text]
        );
        assert_eq!(scene.count(PrimitiveKind::Line), 1);
    }

    #[test]
    fn json_contract_shape() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["type"], "circle");
        assert_eq!(value[0]["cx"], 300.0);
        assert_eq!(value[0]["r"], 280.0);
        assert_eq!(value[1]["type"], "line");
        assert_eq!(value[1]["y2"], 80.0);
        assert_eq!(value[2]["type"], "text");
        assert_eq!(value[2]["content"], "☉");
        assert!(value[2]["style"].as_object().unwrap().is_empty());
    }

    #[test]
    fn style_serializes_camel_case() {
        let style = Style {
            stroke_width: Some(3.0),
            text_anchor: Some("middle".into()),
            ..Style::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"strokeWidth":3.0,"textAnchor":"middle"}"#);
    }

    #[test]
    fn line_length() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0), Style::default());
        assert!((line.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_detection() {
        let text: Primitive = Text::new(Point::new(f64::NAN, 0.0), "x", Style::default()).into();
        assert!(!text.is_finite());
        let circle: Primitive = Circle::new(Point::new(0.0, 0.0), 1.0, Style::default()).into();
        assert!(circle.is_finite());
    }
}
