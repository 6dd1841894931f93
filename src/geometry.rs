// src/geometry.rs

use bytemuck::{Pod, Zeroable};

use crate::error::GraphError;

pub const VERTEX_RADIUS: f32 = 15.0;
pub const BARB_LENGTH: f32 = 12.0;
pub const BARB_HALF_ANGLE_DEG: f32 = 30.0;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Angles in degrees, 0 at three o'clock, positive counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub bounds: Rect,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

/// Shortens the segment between two vertex centers by `radius` at both ends
/// so the drawn line meets the circle boundaries instead of the centers.
/// Coincident endpoints have no direction to trim along and are rejected.
pub fn trimmed_segment(
    from: Point2,
    to: Point2,
    radius: f32,
) -> Result<(Point2, Point2), GraphError> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist == 0.0 {
        return Err(GraphError::DegenerateEdge {
            x: from.x,
            y: from.y,
        });
    }
    let unit_x = dx / dist;
    let unit_y = dy / dist;

    let start = Point2::new(from.x + unit_x * radius, from.y + unit_y * radius);
    let end = Point2::new(to.x - unit_x * radius, to.y - unit_y * radius);
    Ok((start, end))
}

/// Endpoints of the two barb lines forming a V-shaped arrowhead at
/// `shaft_tip`, each `barb_length` back from the tip at `half_angle_deg`
/// on either side of the shaft direction.
pub fn arrow_head_barbs(
    shaft_start: Point2,
    shaft_tip: Point2,
    barb_length: f32,
    half_angle_deg: f32,
) -> (Point2, Point2) {
    let phi = half_angle_deg.to_radians();
    let theta = (shaft_tip.y - shaft_start.y).atan2(shaft_tip.x - shaft_start.x);

    let barb_end = |rho: f32| {
        Point2::new(
            shaft_tip.x - barb_length * rho.cos(),
            shaft_tip.y - barb_length * rho.sin(),
        )
    };
    (barb_end(theta + phi), barb_end(theta - phi))
}

/// Arc looping above a vertex: a square bounding box of side `2 * radius`
/// centered on the vertex x and sitting on top of the circle, swept 270
/// degrees from the three o'clock position.
pub fn self_loop_arc(center: Point2, radius: f32) -> ArcSpec {
    ArcSpec {
        bounds: Rect {
            x: center.x - radius,
            y: center.y - 2.0 * radius,
            width: 2.0 * radius,
            height: 2.0 * radius,
        },
        start_angle: 0.0,
        sweep_angle: 270.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn trimmed_segment_insets_both_ends_on_axis() {
        let (start, end) =
            trimmed_segment(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), 3.0).unwrap();
        assert_eq!(start, Point2::new(3.0, 0.0));
        assert_eq!(end, Point2::new(7.0, 0.0));
    }

    #[test]
    fn trimmed_segment_endpoints_sit_at_radius_distance() {
        let from = Point2::new(100.0, 80.0);
        let to = Point2::new(520.0, 420.0);
        let r = 15.0;
        let (start, end) = trimmed_segment(from, to, r).unwrap();

        assert!((from.distance(&start) - r).abs() < EPS);
        assert!((to.distance(&end) - r).abs() < EPS);
        // Both trimmed points lie on the original segment direction.
        let full = from.distance(&to);
        assert!((from.distance(&end) - (full - r)).abs() < EPS);
    }

    #[test]
    fn trimmed_segment_rejects_coincident_endpoints() {
        let p = Point2::new(42.0, 7.0);
        let err = trimmed_segment(p, p, 15.0).unwrap_err();
        assert_eq!(err, GraphError::DegenerateEdge { x: 42.0, y: 7.0 });
    }

    #[test]
    fn barbs_sit_at_barb_length_from_tip() {
        let start = Point2::new(0.0, 0.0);
        let tip = Point2::new(10.0, 0.0);
        let (a, b) = arrow_head_barbs(start, tip, 12.0, 30.0);

        assert!((tip.distance(&a) - 12.0).abs() < EPS);
        assert!((tip.distance(&b) - 12.0).abs() < EPS);
        // Symmetric about the horizontal shaft.
        assert!((a.x - b.x).abs() < EPS);
        assert!((a.y + b.y).abs() < EPS);
    }

    #[test]
    fn barbs_open_at_half_angle_off_the_shaft() {
        let start = Point2::new(3.0, -2.0);
        let tip = Point2::new(-7.0, 11.0);
        let (a, b) = arrow_head_barbs(start, tip, 12.0, 30.0);

        let shaft = (tip.y - start.y).atan2(tip.x - start.x);
        for barb in [a, b] {
            let back = (tip.y - barb.y).atan2(tip.x - barb.x);
            let mut offset = (back - shaft).abs();
            if offset > std::f32::consts::PI {
                offset = 2.0 * std::f32::consts::PI - offset;
            }
            assert!((offset - 30.0_f32.to_radians()).abs() < EPS);
        }
    }

    #[test]
    fn self_loop_arc_sits_above_the_vertex() {
        let arc = self_loop_arc(Point2::new(300.0, 250.0), 15.0);
        assert_eq!(
            arc.bounds,
            Rect {
                x: 285.0,
                y: 220.0,
                width: 30.0,
                height: 30.0,
            }
        );
        assert_eq!(arc.start_angle, 0.0);
        assert_eq!(arc.sweep_angle, 270.0);
    }
}
