// src/render.rs

use crate::error::GraphError;
use crate::geometry::{
    self, ArcSpec, Point2, BARB_HALF_ANGLE_DEG, BARB_LENGTH, VERTEX_RADIUS,
};
use crate::graph::Graph;

// Label anchor relative to the vertex center, above-left of the circle.
const LABEL_OFFSET_X: f32 = -10.0;
const LABEL_OFFSET_Y: f32 = -20.0;

/// One drawing call for the backend to map onto its host API.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawablePrimitive {
    Circle { center: Point2, radius: f32 },
    Label { text: String, position: Point2 },
    Line { from: Point2, to: Point2 },
    ArrowBarb { tip: Point2, tail: Point2 },
    Arc(ArcSpec),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    SelfLoop,
    Forward,
    Skip,
}

impl EdgeKind {
    /// Dispatch for a 1-cell at (i, j). Undirected matrices are symmetric,
    /// so lower-triangle cells repeat edges already emitted from the upper
    /// triangle and are skipped.
    pub fn classify(i: usize, j: usize, directed: bool) -> Self {
        if i == j {
            EdgeKind::SelfLoop
        } else if !directed && j < i {
            EdgeKind::Skip
        } else {
            EdgeKind::Forward
        }
    }
}

/// Single pass over the matrix in row-major order: self-loop arcs and
/// trimmed edge lines first (barbs follow their line when directed), then
/// every vertex circle and label, so markers layer on top of edges.
pub fn render(graph: &Graph) -> Result<Vec<DrawablePrimitive>, GraphError> {
    let n = graph.vertex_count();
    let positions = graph.positions();
    let mut primitives = Vec::new();

    for i in 0..n {
        for j in 0..n {
            if graph.matrix().get(i, j) != 1 {
                continue;
            }
            match EdgeKind::classify(i, j, graph.directed()) {
                EdgeKind::SelfLoop => {
                    primitives.push(DrawablePrimitive::Arc(geometry::self_loop_arc(
                        positions[i],
                        VERTEX_RADIUS,
                    )));
                }
                EdgeKind::Skip => {}
                EdgeKind::Forward => {
                    let (start, end) =
                        geometry::trimmed_segment(positions[i], positions[j], VERTEX_RADIUS)?;
                    primitives.push(DrawablePrimitive::Line {
                        from: start,
                        to: end,
                    });
                    if graph.directed() {
                        let (barb_a, barb_b) =
                            geometry::arrow_head_barbs(start, end, BARB_LENGTH, BARB_HALF_ANGLE_DEG);
                        primitives.push(DrawablePrimitive::ArrowBarb {
                            tip: end,
                            tail: barb_a,
                        });
                        primitives.push(DrawablePrimitive::ArrowBarb {
                            tip: end,
                            tail: barb_b,
                        });
                    }
                }
            }
        }
    }

    for (i, p) in positions.iter().enumerate() {
        primitives.push(DrawablePrimitive::Circle {
            center: *p,
            radius: VERTEX_RADIUS,
        });
        primitives.push(DrawablePrimitive::Label {
            text: format!("V{}", i),
            position: Point2::new(p.x + LABEL_OFFSET_X, p.y + LABEL_OFFSET_Y),
        });
    }

    Ok(primitives)
}
