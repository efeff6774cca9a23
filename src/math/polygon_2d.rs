use super::intersect_2d::{collinear_segments_overlap, segment_segment_intersect_2d};
use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Reports whether a closed polygon is traversed counter-clockwise.
#[must_use]
pub fn is_counter_clockwise(points: &[Point2]) -> bool {
    signed_area_2d(points) > TOLERANCE
}

/// Total length of an open polyline.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    points
        .windows(2)
        .map(|w| (w[1] - w[0]).norm())
        .sum()
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(d / len)
}

/// Checks that a closed polygon is simple: no duplicate consecutive
/// vertices and no two non-adjacent edges intersecting or overlapping.
///
/// The polygon is treated as implicitly closed (last vertex connects back
/// to the first). Collinear consecutive vertices are allowed.
#[must_use]
pub fn is_simple_polygon(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    for i in 0..n {
        if (points[(i + 1) % n] - points[i]).norm() < TOLERANCE {
            return false;
        }
    }

    // A consecutive edge pair that doubles back on itself overlaps without
    // ever crossing; the pairwise check below skips adjacent edges.
    for i in 0..n {
        let d0 = points[(i + 1) % n] - points[i];
        let d1 = points[(i + 2) % n] - points[(i + 1) % n];
        if (d0.x * d1.y - d0.y * d1.x).abs() < TOLERANCE && d0.dot(&d1) < 0.0 {
            return false;
        }
    }

    for i in 0..n {
        let a0 = points[i];
        let a1 = points[(i + 1) % n];
        for j in (i + 1)..n {
            // Adjacent edges share a vertex by construction.
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let b0 = points[j];
            let b1 = points[(j + 1) % n];
            if segment_segment_intersect_2d(&a0, &a1, &b0, &b1).is_some() {
                return false;
            }
            if collinear_segments_overlap(&a0, &a1, &b0, &b1) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area_2d(&pts) - 1.0).abs() < TOLERANCE);
        assert!(is_counter_clockwise(&pts));
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
        assert!(!is_counter_clockwise(&pts));
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn polyline_length_l_shape() {
        let pts = vec![p(0.0, 0.0), p(3.0, 0.0), p(3.0, 4.0)];
        assert!((polyline_length(&pts) - 7.0).abs() < TOLERANCE);
    }

    #[test]
    fn polyline_length_single_point() {
        assert!(polyline_length(&[p(1.0, 1.0)]).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_basic() {
        let dir = segment_direction(&p(0.0, 0.0), &p(3.0, 4.0)).unwrap();
        assert!((dir.x - 0.6).abs() < TOLERANCE);
        assert!((dir.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length() {
        assert!(segment_direction(&p(1.0, 1.0), &p(1.0, 1.0)).is_err());
    }

    #[test]
    fn simple_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!(is_simple_polygon(&pts));
    }

    #[test]
    fn bowtie_not_simple() {
        let pts = vec![p(0.0, 0.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 1.0)];
        assert!(!is_simple_polygon(&pts));
    }

    #[test]
    fn duplicate_consecutive_vertex_not_simple() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        assert!(!is_simple_polygon(&pts));
    }

    #[test]
    fn collinear_seam_vertices_still_simple() {
        // A rectangle with extra vertices along the bottom edge.
        let pts = vec![
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(3.0, 0.0),
            p(3.0, 1.0),
            p(0.0, 1.0),
        ];
        assert!(is_simple_polygon(&pts));
    }

    #[test]
    fn overlapping_spike_not_simple() {
        // The third edge retraces part of the second one.
        let pts = vec![
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 2.0),
            p(2.0, 1.0),
            p(0.0, 1.0),
        ];
        assert!(!is_simple_polygon(&pts));
    }

    #[test]
    fn too_few_vertices_not_simple() {
        assert!(!is_simple_polygon(&[p(0.0, 0.0), p(1.0, 0.0)]));
    }
}
