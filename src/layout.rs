// src/layout.rs

use crate::error::GraphError;
use crate::geometry::Point2;

pub const MARGIN: i32 = 80;
pub const TEMPLATE_SIZE: usize = 11;

/// Fixed positions inside a margin-inset rectangle. Only the 11-vertex
/// template exists; any other count is an explicit error rather than an
/// out-of-range template index.
pub fn grid_positions(width: i32, height: i32, count: usize) -> Result<Vec<Point2>, GraphError> {
    if count != TEMPLATE_SIZE {
        return Err(GraphError::UnsupportedLayoutSize(count));
    }

    let left = MARGIN;
    let right = width - MARGIN;
    let top = MARGIN;
    let bottom = height - MARGIN;

    Ok((0..count)
        .map(|index| template_point(index, left, right, top, bottom))
        .collect())
}

// Anchor formula keyed by index: 0..=2 across the top edge, 3..=5 down the
// right edge, 6 bottom-center, 7..=9 back up the left edge, 10 the center.
// Interior thirds use integer division.
fn template_point(index: usize, left: i32, right: i32, top: i32, bottom: i32) -> Point2 {
    let (x, y) = match index {
        0 => (left, top),
        1 => ((left + right) / 2, top),
        2 => (right, top),
        3 => (right, (top + bottom) / 3),
        4 => (right, (top + bottom) * 2 / 3),
        5 => (right, bottom),
        6 => ((left + right) / 2, bottom),
        7 => (left, bottom),
        8 => (left, (top + bottom) * 2 / 3),
        9 => (left, (top + bottom) / 3),
        _ => ((left + right) / 2, (top + bottom) / 2),
    };
    Point2::new(x as f32, y as f32)
}
