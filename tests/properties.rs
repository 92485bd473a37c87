use std::f64::consts::PI;

use mandala::render::{Draw, Primitive, project};
use mandala::{
    Aspect, AspectKind, ChartData, ChartRenderer, Degrees, House, HouseId, Planet, Point,
    PrimitiveKind, RenderError, RingLayout, SceneGraph, render_chart,
};

fn equal_houses() -> Vec<House> {
    (0..12)
        .map(|i| House {
            id: HouseId::Number(i + 1),
            absolute_position: f64::from(i) * 30.0,
        })
        .collect()
}

fn planet(id: &str, at: f64) -> Planet {
    Planet {
        id: id.into(),
        absolute_position: at,
    }
}

fn aspect(a: &str, b: &str, kind: AspectKind) -> Aspect {
    Aspect {
        planet_a: a.into(),
        planet_b: b.into(),
        kind,
    }
}

fn reference_layout() -> RingLayout {
    RingLayout::new(600.0, 270.0, 220.0, 180.0).unwrap()
}

/// `circle line*12 text*12 ...`: run-length summary of primitive kinds
fn kind_summary(scene: &SceneGraph) -> String {
    let mut runs: Vec<(PrimitiveKind, usize)> = Vec::new();
    for prim in scene {
        match runs.last_mut() {
            Some((kind, n)) if *kind == prim.kind() => *n += 1,
            _ => runs.push((prim.kind(), 1)),
        }
    }
    runs.iter()
        .map(|(kind, n)| {
            let name = format!("{kind:?}").to_lowercase();
            if *n == 1 { name } else { format!("{name}*{n}") }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn sun_at_100_degrees_end_to_end() {
    let chart = ChartData {
        houses: equal_houses(),
        planets: vec![planet("sun", 100.0)],
        aspects: vec![],
    };
    let scene = render_chart(&chart, &reference_layout()).unwrap();

    let Some(Primitive::Text(sun)) = scene.primitives().last() else {
        panic!("last primitive should be the sun glyph");
    };
    assert_eq!(sun.content, "☉");
    assert_eq!(sun.x, 300.0 + 180.0 * ((100.0_f64 - 90.0) * PI / 180.0).cos());
    assert_eq!(sun.y, 300.0 + 180.0 * ((100.0_f64 - 90.0) * PI / 180.0).sin());

    let center = Point { x: 300.0, y: 300.0 };
    let house_lines: Vec<_> = scene.primitives()[1..13].to_vec();
    for prim in house_lines {
        let Primitive::Line(line) = prim else {
            panic!("expected house line");
        };
        assert_eq!(line.start(), center);
        assert!((line.length() - 220.0).abs() < 1e-9);
    }

    insta::assert_snapshot!(kind_summary(&scene), @"circle line*12 text*13");
}

#[test]
fn projection_orientation() {
    let c = Point { x: 50.0, y: 50.0 };
    let north = project(Degrees::try_new(0.0).unwrap(), 10.0, c);
    assert!((north.x - 50.0).abs() < 1e-12);
    assert!(north.y < c.y);
    let east = project(Degrees::try_new(90.0).unwrap(), 10.0, c);
    assert!(east.x > c.x);
    assert!((east.y - 50.0).abs() < 1e-12);
}

#[test]
fn rendering_twice_is_bit_identical() {
    let chart = ChartData {
        houses: equal_houses(),
        planets: vec![planet("sun", 10.0), planet("moon", 190.25), planet("pluto", 301.7)],
        aspects: vec![
            aspect("sun", "moon", AspectKind::Opposition),
            aspect("moon", "pluto", AspectKind::Other("novile".into())),
        ],
    };
    let renderer = ChartRenderer::new(reference_layout());
    let first = renderer.render(&chart).unwrap();
    let second = renderer.render(&chart).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn zodiac_ring_is_independent_of_chart_content() {
    let sparse = ChartData {
        houses: equal_houses(),
        ..Default::default()
    };
    let busy = ChartData {
        houses: equal_houses(),
        planets: (0..20).map(|i| planet(&format!("body{i}"), f64::from(i) * 17.0)).collect(),
        aspects: vec![aspect("body1", "body2", AspectKind::Trine)],
    };
    let layout = reference_layout();
    let a = render_chart(&sparse, &layout).unwrap();
    let b = render_chart(&busy, &layout).unwrap();
    assert_eq!(a.primitives()[13..25], b.primitives()[13..25]);
    assert_eq!(a.count(PrimitiveKind::Text), 12);
}

#[test]
fn eleven_or_thirteen_houses_are_rejected() {
    for count in [11usize, 13] {
        let mut houses = equal_houses();
        houses.resize(
            count,
            House {
                id: HouseId::Number(13),
                absolute_position: 15.0,
            },
        );
        let chart = ChartData {
            houses,
            planets: vec![planet("sun", 1.0)],
            aspects: vec![],
        };
        assert_eq!(
            render_chart(&chart, &reference_layout()),
            Err(RenderError::MalformedHouseSet { count })
        );
    }
}

#[test]
fn non_finite_degree_is_rejected() {
    let chart = ChartData {
        houses: equal_houses(),
        planets: vec![planet("sun", f64::NAN)],
        aspects: vec![],
    };
    let err = render_chart(&chart, &reference_layout()).unwrap_err();
    assert!(matches!(err, RenderError::NonFiniteDegree { .. }), "{err:?}");
}

#[test]
fn aspect_to_absent_body_is_omitted() {
    let chart = ChartData {
        houses: equal_houses(),
        planets: vec![planet("pluto", 250.0), planet("sun", 20.0), planet("moon", 80.0)],
        aspects: vec![
            aspect("pluto", "ceres", AspectKind::Square),
            aspect("sun", "moon", AspectKind::Sextile),
            aspect("pluto", "sun", AspectKind::Trine),
        ],
    };
    let scene = render_chart(&chart, &reference_layout()).unwrap();
    // boundary + houses + signs + 3 glyphs + 2 aspect lines
    assert_eq!(scene.len(), 1 + 12 + 12 + 3 + 2);
    assert_eq!(scene.count(PrimitiveKind::Line), 12 + 2);
}

#[test]
fn unknown_body_keeps_its_place() {
    let layout = reference_layout();
    let chart = ChartData {
        houses: equal_houses(),
        planets: vec![planet("unknown_body", 42.0)],
        aspects: vec![],
    };
    let scene = render_chart(&chart, &layout).unwrap();
    let glyphs: Vec<_> = scene.primitives()[25..].to_vec();
    assert_eq!(glyphs.len(), 1);
    let Primitive::Text(glyph) = &glyphs[0] else {
        panic!("expected text");
    };
    assert_eq!(glyph.content, "•");
    let expected = project(Degrees::try_new(42.0).unwrap(), 180.0, layout.center());
    assert_eq!(glyph.position(), expected);
}

#[test]
fn renders_run_in_parallel() {
    let renderer = ChartRenderer::new(reference_layout());
    let charts: Vec<ChartData> = (0..8)
        .map(|i| ChartData {
            houses: equal_houses(),
            planets: vec![planet("sun", f64::from(i) * 45.0), planet("moon", 3.0)],
            aspects: vec![aspect("sun", "moon", AspectKind::Conjunction)],
        })
        .collect();

    let sequential: Vec<_> = charts.iter().map(|c| renderer.render(c).unwrap()).collect();
    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = charts
            .iter()
            .map(|c| s.spawn(|| renderer.render(c).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, parallel);
}
