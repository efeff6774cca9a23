use serde::Serialize;
use tracing::debug;

use crate::boundary::{BoundarySegment, BoundaryType};
use crate::math::Point2;
use crate::units::Unit;

use super::domain::FlowDomain;
use super::Shape;

/// A T-shaped junction: a horizontal main channel on the x-axis with a
/// vertical branch leaving it at a right angle.
///
/// ```text
///           | OUTLET2
///           |
///   --------+-------- OUTLET1
///   INLET
/// ```
///
/// The main channel runs from `x = 0` to `x = l_main` with its centerline
/// on `y = 0`; the branch rises from `x = junction_x` up to
/// `y = l_branch`. Main and branch share the same width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TJunction {
    /// Total main-channel length.
    pub l_main: f64,
    /// Branch length, measured from the main centerline.
    pub l_branch: f64,
    /// Channel width (identical for main and branch).
    pub width: f64,
    /// Bifurcation x-position; defaults to the main-channel midpoint.
    pub junction_x: Option<f64>,
    /// Declared working unit of all dimensions.
    pub unit: Unit,
}

impl TJunction {
    /// Creates a T-junction with the branch at the main-channel midpoint,
    /// dimensions in millimeters.
    #[must_use]
    pub fn new(l_main: f64, l_branch: f64, width: f64) -> Self {
        Self {
            l_main,
            l_branch,
            width,
            junction_x: None,
            unit: Unit::Millimeters,
        }
    }

    /// Places the bifurcation at an explicit x-position.
    ///
    /// The branch notch must fit inside the main channel: positions with
    /// `junction_x - width/2 < 0` or `junction_x + width/2 > l_main`
    /// produce a self-intersecting polygon. This is not checked.
    #[must_use]
    pub fn with_junction_x(mut self, junction_x: f64) -> Self {
        self.junction_x = Some(junction_x);
        self
    }

    /// Sets the declared working unit.
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// The bifurcation x-position actually used by `generate`.
    #[must_use]
    pub fn resolved_junction_x(&self) -> f64 {
        self.junction_x.unwrap_or(self.l_main / 2.0)
    }

    /// Generates the T-shaped outline and its eight boundary segments.
    ///
    /// The outer boundary walks counter-clockwise around the union of the
    /// three channel rectangles (left main segment, right main segment,
    /// branch), keeping the two seam vertices where the branch rectangle
    /// meets the bottom wall: ten vertices in total.
    #[must_use]
    pub fn generate(&self) -> FlowDomain {
        let hw = self.width / 2.0;
        let jx = self.resolved_junction_x();
        debug!(
            l_main = self.l_main,
            l_branch = self.l_branch,
            width = self.width,
            junction_x = jx,
            "generating T-junction"
        );

        let inlet_bottom = Point2::new(0.0, -hw);
        let seam_left = Point2::new(jx - hw, -hw);
        let seam_right = Point2::new(jx + hw, -hw);
        let outlet_bottom = Point2::new(self.l_main, -hw);
        let outlet_top = Point2::new(self.l_main, hw);
        let branch_base_right = Point2::new(jx + hw, hw);
        let branch_top_right = Point2::new(jx + hw, self.l_branch);
        let branch_top_left = Point2::new(jx - hw, self.l_branch);
        let branch_base_left = Point2::new(jx - hw, hw);
        let inlet_top = Point2::new(0.0, hw);

        let outer_polygon = vec![
            inlet_bottom,
            seam_left,
            seam_right,
            outlet_bottom,
            outlet_top,
            branch_base_right,
            branch_top_right,
            branch_top_left,
            branch_base_left,
            inlet_top,
        ];

        // Ports first, then the five walls tracing the remaining
        // perimeter. Segment directions follow the polygon traversal.
        let boundaries = vec![
            BoundarySegment::new(vec![inlet_top, inlet_bottom], BoundaryType::Inlet, "INLET"),
            BoundarySegment::new(
                vec![outlet_bottom, outlet_top],
                BoundaryType::Outlet1,
                "OUTLET1",
            ),
            BoundarySegment::new(
                vec![branch_top_right, branch_top_left],
                BoundaryType::Outlet2,
                "OUTLET2",
            ),
            BoundarySegment::new(
                vec![inlet_bottom, seam_left, seam_right, outlet_bottom],
                BoundaryType::Wall,
                "WALL-bottom",
            ),
            BoundarySegment::new(
                vec![branch_base_left, inlet_top],
                BoundaryType::Wall,
                "WALL-top-left",
            ),
            BoundarySegment::new(
                vec![branch_top_left, branch_base_left],
                BoundaryType::Wall,
                "WALL-branch-left",
            ),
            BoundarySegment::new(
                vec![branch_base_right, branch_top_right],
                BoundaryType::Wall,
                "WALL-branch-right",
            ),
            BoundarySegment::new(
                vec![outlet_top, branch_base_right],
                BoundaryType::Wall,
                "WALL-top-right",
            ),
        ];

        FlowDomain::new(
            "t_junction",
            self.unit,
            Shape::TJunction(self.clone()),
            outer_polygon,
            boundaries,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::polygon_2d::{is_counter_clockwise, is_simple_polygon};

    #[test]
    fn standard_tjunction() {
        let domain = TJunction::new(10.0, 5.0, 0.2).generate();

        assert_eq!(domain.outer_polygon().len(), 10);

        let (ok, errors) = domain.validate_boundaries();
        assert!(ok, "{errors:?}");

        // The branch top is the second outlet, exactly one channel width wide.
        let outlet2 = domain.boundaries_by_type(BoundaryType::Outlet2);
        assert_eq!(outlet2.len(), 1);
        assert_relative_eq!(outlet2[0].length(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn five_walls_trace_the_perimeter() {
        let domain = TJunction::new(10.0, 5.0, 0.2).generate();
        let walls = domain.boundaries_by_type(BoundaryType::Wall);
        assert_eq!(walls.len(), 5);

        // The bottom wall runs the whole main channel through the seam points.
        let bottom = walls[0];
        assert_eq!(bottom.label(), "WALL-bottom");
        assert_eq!(bottom.points().len(), 4);
        assert_relative_eq!(bottom.length(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn polygon_is_simple_and_ccw() {
        let domain = TJunction::new(10.0, 5.0, 0.2).generate();
        assert!(is_simple_polygon(domain.outer_polygon()));
        assert!(is_counter_clockwise(domain.outer_polygon()));

        // Union area: main rectangle plus the branch above it.
        let expected = 10.0 * 0.2 + 0.2 * (5.0 - 0.1);
        assert_relative_eq!(domain.signed_area(), expected, epsilon = 1e-12);
    }

    #[test]
    fn default_junction_at_midpoint() {
        let junction = TJunction::new(10.0, 5.0, 0.2);
        assert_relative_eq!(junction.resolved_junction_x(), 5.0, epsilon = 1e-12);

        let off_center = junction.clone().with_junction_x(2.5);
        assert_relative_eq!(off_center.resolved_junction_x(), 2.5, epsilon = 1e-12);
        let domain = off_center.generate();
        assert!(is_simple_polygon(domain.outer_polygon()));
        assert!(domain.validate_boundaries().0);
    }

    #[test]
    fn parameter_sweep_stays_simple() {
        for width in [0.05, 0.1, 0.2, 0.3, 0.5] {
            for l_branch in [1.0, 2.0, 5.0, 8.0] {
                for junction_x in [1.0, 2.5, 5.0, 9.0] {
                    let domain = TJunction::new(10.0, l_branch, width)
                        .with_junction_x(junction_x)
                        .generate();
                    assert!(
                        is_simple_polygon(domain.outer_polygon()),
                        "w={width} lb={l_branch} jx={junction_x}"
                    );
                    assert!(is_counter_clockwise(domain.outer_polygon()));
                    assert!(domain.validate_boundaries().0);
                }
            }
        }
    }

    #[test]
    fn inlet_and_outlet_faces_are_vertical() {
        let domain = TJunction::new(10.0, 5.0, 0.2).generate();
        let inlet = domain.boundaries_by_type(BoundaryType::Inlet)[0];
        let dir = inlet.direction().unwrap();
        assert_relative_eq!(dir.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(dir.y, -1.0, epsilon = 1e-12);

        let outlet1 = domain.boundaries_by_type(BoundaryType::Outlet1)[0];
        let dir = outlet1.direction().unwrap();
        assert_relative_eq!(dir.y, 1.0, epsilon = 1e-12);
    }
}
