//! 2D arc sampling and corner-fillet math.
//!
//! Used for the circular-arc transition at junction corners, where a sharp
//! reflex corner between two wall segments is replaced by a tangent arc.
use super::{Point2, Vector2, TOLERANCE};

/// Samples `count + 1` points along a circular arc.
///
/// The arc starts at `start_angle` and sweeps by `sweep` radians
/// (positive = counter-clockwise). Both endpoints are included.
#[must_use]
pub fn sample_arc(
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    count: u32,
) -> Vec<Point2> {
    let count = count.max(1);
    let mut points = Vec::with_capacity(count as usize + 1);
    for i in 0..=count {
        let t = f64::from(i) / f64::from(count);
        let angle = start_angle + sweep * t;
        points.push(Point2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    points
}

/// Replaces a polyline corner with a tangent circular arc.
///
/// `d_in` is the unit direction entering the corner, `d_out` the unit
/// direction leaving it. The returned points run from the tangent point on
/// the incoming edge to the tangent point on the outgoing edge, in
/// traversal order. A collinear corner needs no fillet and yields just the
/// corner point.
///
/// The tangent points sit `radius * tan(turn/2)` before and after the
/// corner; callers must keep the radius small enough that both stay on
/// their walls.
#[must_use]
pub fn fillet_corner(
    corner: Point2,
    d_in: Vector2,
    d_out: Vector2,
    radius: f64,
    samples: u32,
) -> Vec<Point2> {
    let cross = d_in.x * d_out.y - d_in.y * d_out.x;
    if cross.abs() < TOLERANCE || radius < TOLERANCE {
        return vec![corner];
    }

    let turn = d_in.dot(&d_out).clamp(-1.0, 1.0).acos();
    let tangent_len = radius * (turn / 2.0).tan();
    let tangent_in = corner - d_in * tangent_len;

    // The fillet center sits on the side the boundary turns toward.
    let side = cross.signum();
    let normal_in = Vector2::new(-d_in.y, d_in.x) * side;
    let center = tangent_in + normal_in * radius;

    let start_angle = (tangent_in.y - center.y).atan2(tangent_in.x - center.x);
    sample_arc(center, radius, start_angle, side * turn, samples)
}
