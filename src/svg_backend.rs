// src/svg_backend.rs

use svg::node::element::{Circle, Line, Path, Text, Title};
use svg::Document;

use graph_diagram::geometry::ArcSpec;
use graph_diagram::render::DrawablePrimitive;

const EDGE_COLOR: &str = "blue";
const LOOP_COLOR: &str = "magenta";
const VERTEX_FILL: &str = "lightgray";
const STROKE_WIDTH: i32 = 2;

/// Maps each primitive onto an SVG element, in sequence order.
pub fn document(primitives: &[DrawablePrimitive], width: i32, height: i32, title: &str) -> Document {
    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height))
        .add(Title::new(title));

    for primitive in primitives {
        document = match primitive {
            DrawablePrimitive::Line { from, to } => document.add(
                Line::new()
                    .set("x1", from.x)
                    .set("y1", from.y)
                    .set("x2", to.x)
                    .set("y2", to.y)
                    .set("stroke", EDGE_COLOR)
                    .set("stroke-width", STROKE_WIDTH),
            ),
            DrawablePrimitive::ArrowBarb { tip, tail } => document.add(
                Line::new()
                    .set("x1", tip.x)
                    .set("y1", tip.y)
                    .set("x2", tail.x)
                    .set("y2", tail.y)
                    .set("stroke", EDGE_COLOR)
                    .set("stroke-width", STROKE_WIDTH),
            ),
            DrawablePrimitive::Arc(arc) => document.add(
                Path::new()
                    .set("d", arc_path(arc))
                    .set("fill", "none")
                    .set("stroke", LOOP_COLOR)
                    .set("stroke-width", STROKE_WIDTH),
            ),
            DrawablePrimitive::Circle { center, radius } => document.add(
                Circle::new()
                    .set("cx", center.x)
                    .set("cy", center.y)
                    .set("r", *radius)
                    .set("fill", VERTEX_FILL)
                    .set("stroke", "black")
                    .set("stroke-width", STROKE_WIDTH),
            ),
            DrawablePrimitive::Label { text, position } => document.add(
                Text::new(text.clone())
                    .set("x", position.x)
                    .set("y", position.y)
                    .set("font-family", "Arial")
                    .set("font-weight", "bold")
                    .set("font-size", 12),
            ),
        };
    }
    document
}

// Arc bounds plus angular span to an SVG elliptical-arc path. Arc angles
// run counter-clockwise on screen, so the sweep flag is 0; spans past 180
// degrees need the large-arc flag.
fn arc_path(arc: &ArcSpec) -> String {
    let rx = arc.bounds.width / 2.0;
    let ry = arc.bounds.height / 2.0;
    let cx = arc.bounds.x + rx;
    let cy = arc.bounds.y + ry;
    let point_at = |deg: f32| {
        let rad = deg.to_radians();
        (cx + rx * rad.cos(), cy - ry * rad.sin())
    };
    let (sx, sy) = point_at(arc.start_angle);
    let (ex, ey) = point_at(arc.start_angle + arc.sweep_angle);
    let large_arc = i32::from(arc.sweep_angle.abs() > 180.0);

    format!(
        "M {} {} A {} {} 0 {} 0 {} {}",
        sx, sy, rx, ry, large_arc, ex, ey
    )
}
