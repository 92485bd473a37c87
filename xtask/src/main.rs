use camino::{Utf8Path, Utf8PathBuf};
use mandala::ChartRenderer;
use rayon::prelude::*;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery    Render every valid test chart into an HTML gallery");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

struct Rendered {
    name: String,
    source: String,
    output: Result<String, String>,
}

fn gallery() {
    let root = Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives inside the workspace")
        .to_owned();
    let charts_dir = root.join("tests/charts/valid");
    let out_dir = root.join("target/gallery");
    fs::create_dir_all(&out_dir).expect("Failed to create gallery directory");

    let mut paths: Vec<Utf8PathBuf> = fs::read_dir(&charts_dir)
        .expect("Failed to read charts directory")
        .filter_map(|e| e.ok())
        .filter_map(|e| Utf8PathBuf::from_path_buf(e.path()).ok())
        .filter(|p| p.extension() == Some("json"))
        .collect();
    paths.sort();

    let renderer = ChartRenderer::default();
    let results: Vec<Rendered> = paths
        .par_iter()
        .map(|path| {
            let name = path.file_stem().unwrap_or("chart").to_string();
            let source = fs::read_to_string(path).unwrap_or_default();
            let output =
                mandala::render_svg_with(&source, &renderer).map_err(|e| format!("{e:?}"));
            if let Ok(svg) = &output {
                fs::write(out_dir.join(format!("{name}.svg")), svg)
                    .expect("Failed to write SVG");
            }
            Rendered {
                name,
                source,
                output,
            }
        })
        .collect();

    let rendered = results.iter().filter(|r| r.output.is_ok()).count();
    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Chart gallery</title>
    <style>
        body {{ font-family: system-ui, sans-serif; background: #0b0f1a; color: #ddd; margin: 24px; }}
        .card {{ display: inline-block; vertical-align: top; margin: 8px; padding: 12px; background: #141a2b; border-radius: 8px; }}
        .card svg {{ width: 360px; height: 360px; }}
        .error {{ color: #f88; font-family: monospace; white-space: pre-wrap; max-width: 360px; }}
        details pre {{ max-width: 360px; max-height: 200px; overflow: auto; font-size: 11px; }}
    </style>
</head>
<body>
<h1>Chart gallery ({} / {} rendered)</h1>
"#,
        rendered,
        results.len()
    ));

    for r in &results {
        let body = match &r.output {
            Ok(svg) => svg.clone(),
            Err(e) => format!(r#"<div class="error">{}</div>"#, html_escape(e)),
        };
        html.push_str(&format!(
            r#"<div class="card" id="{0}">
    <h3>{0}</h3>
    {1}
    <details><summary>Source</summary><pre>{2}</pre></details>
</div>
"#,
            r.name,
            body,
            html_escape(&r.source)
        ));
    }
    html.push_str("</body></html>\n");

    let index = out_dir.join("index.html");
    fs::write(&index, html).expect("Failed to write HTML");
    println!("Generated gallery at: {index}");
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
