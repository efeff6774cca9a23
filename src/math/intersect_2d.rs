use super::{Point2, Vector2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = Vector2::new(a1.x - a0.x, a1.y - a0.y);
    let db = Vector2::new(b1.x - b0.x, b1.y - b0.y);

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        let pt = Point2::new(a0.x + da.x * t_clamped, a0.y + da.y * t_clamped);
        Some((pt, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Reports whether two collinear segments overlap over more than a point.
///
/// Parallel intersection is invisible to [`segment_segment_intersect_2d`]
/// (zero cross product), so self-intersection checks need this separately.
#[must_use]
pub fn collinear_segments_overlap(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let da = Vector2::new(a1.x - a0.x, a1.y - a0.y);
    let len_sq = da.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return false;
    }

    // Not parallel, or parallel but offset: no collinear overlap.
    let db = Vector2::new(b1.x - b0.x, b1.y - b0.y);
    if (da.x * db.y - da.y * db.x).abs() > TOLERANCE {
        return false;
    }
    let off = Vector2::new(b0.x - a0.x, b0.y - a0.y);
    if (da.x * off.y - da.y * off.x).abs() > TOLERANCE {
        return false;
    }

    // Project b's endpoints onto a and measure the parameter overlap.
    let t0 = off.dot(&da) / len_sq;
    let t1 = Vector2::new(b1.x - a0.x, b1.y - a0.y).dot(&da) / len_sq;
    let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
    hi.min(1.0) - lo.max(0.0) > TOLERANCE
}
