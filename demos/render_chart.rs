//! Render a chart JSON file to SVG on stdout.
//!
//! ```text
//! cargo run --example render_chart --features tracing -- chart.json [--light] [--scene]
//! ```
//!
//! `--scene` prints the scene graph as JSON instead of SVG. Set `RUST_LOG=mandala=debug`
//! to see per-layer decisions.

use mandala::{ChartData, ChartRenderer, RenderOptions, Theme};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(path) = args.iter().find(|a| !a.starts_with("--")) else {
        eprintln!("Usage: render_chart <chart.json> [--light] [--scene]");
        std::process::exit(1);
    };
    let light = args.iter().any(|a| a == "--light");
    let scene_only = args.iter().any(|a| a == "--scene");

    let source = std::fs::read_to_string(path)
        .map_err(|e| miette::miette!("failed to read {path}: {e}"))?;
    let chart = ChartData::from_json_named(path, &source)?;

    let theme = if light { Theme::Light } else { Theme::Dark };
    let renderer = ChartRenderer::default().with_options(RenderOptions::default().with_theme(theme));
    let scene = renderer.render(&chart)?;

    tracing::info!(primitives = scene.len(), "rendered {path}");
    if scene_only {
        let json = scene
            .to_json()
            .map_err(|e| miette::miette!("failed to serialize scene: {e}"))?;
        println!("{json}");
    } else {
        println!("{}", mandala::render::svg::to_svg(&scene, renderer.layout().size()));
    }
    Ok(())
}
