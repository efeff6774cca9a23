use std::fmt::Write as _;

use crate::boundary::{BoundarySegment, BoundaryType};
use crate::math::{polygon_2d, Point2};
use crate::units::Unit;

use super::Shape;

/// A generated flow domain: the closed, counter-clockwise outer-boundary
/// polygon and the boundary segments partitioning its edges into roles.
///
/// Values are immutable snapshots. Each boundary segment's consecutive
/// point pairs appear as consecutive polygon vertices in the same
/// traversal order, so a solver can map segments back onto polygon edges.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowDomain {
    label: String,
    unit: Unit,
    shape: Shape,
    outer_polygon: Vec<Point2>,
    boundaries: Vec<BoundarySegment>,
}

impl FlowDomain {
    pub(crate) fn new(
        label: impl Into<String>,
        unit: Unit,
        shape: Shape,
        outer_polygon: Vec<Point2>,
        boundaries: Vec<BoundarySegment>,
    ) -> Self {
        Self {
            label: label.into(),
            unit,
            shape,
            outer_polygon,
            boundaries,
        }
    }

    /// Label of the domain polygon, used in reports and export records.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Declared working unit of all coordinates.
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The parameter record this domain was generated from.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Outer-boundary vertices in counter-clockwise order. The polygon is
    /// closed by convention; the first vertex is not repeated at the end.
    #[must_use]
    pub fn outer_polygon(&self) -> &[Point2] {
        &self.outer_polygon
    }

    /// All boundary segments, in emission order.
    #[must_use]
    pub fn boundaries(&self) -> &[BoundarySegment] {
        &self.boundaries
    }

    /// All segments with the given role, preserving emission order.
    #[must_use]
    pub fn boundaries_by_type(&self, kind: BoundaryType) -> Vec<&BoundarySegment> {
        self.boundaries
            .iter()
            .filter(|segment| segment.kind() == kind)
            .collect()
    }

    /// Signed area of the outer polygon (positive = counter-clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        polygon_2d::signed_area_2d(&self.outer_polygon)
    }

    /// Checks boundary completeness: exactly one inlet, at least one
    /// outlet (role 1 or 2), at least one wall.
    ///
    /// Failures are returned as human-readable strings, never raised, so
    /// sweeps over many parameter sets can filter invalid ones without
    /// interruption. Geometric self-consistency between the segments and
    /// the outer polygon is deliberately not checked here; callers are
    /// expected to sanity-check the polygon before handing it downstream.
    #[must_use]
    pub fn validate_boundaries(&self) -> (bool, Vec<String>) {
        let mut errors = Vec::new();

        let inlets = self.boundaries_by_type(BoundaryType::Inlet).len();
        if inlets != 1 {
            errors.push(format!(
                "expected exactly 1 inlet boundary, found {inlets}"
            ));
        }

        let outlets = self
            .boundaries
            .iter()
            .filter(|segment| segment.kind().is_outlet())
            .count();
        if outlets < 1 {
            errors.push(format!(
                "expected at least 1 outlet boundary, found {outlets}"
            ));
        }

        if self.boundaries_by_type(BoundaryType::Wall).is_empty() {
            errors.push("no wall boundaries defined".to_string());
        }

        (errors.is_empty(), errors)
    }

    /// Renders a per-role report: label, vertex count, and length in the
    /// declared unit, followed by the validation verdict.
    #[must_use]
    pub fn boundary_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "boundary summary for '{}'", self.label);

        for kind in BoundaryType::ALL {
            let segments = self.boundaries_by_type(kind);
            if segments.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{}:", kind.as_str().to_uppercase());
            for (i, segment) in segments.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "  {}. {}: {} vertices, length {:.4} {}",
                    i + 1,
                    segment.label(),
                    segment.points().len(),
                    segment.length(),
                    self.unit
                );
            }
        }

        let (ok, errors) = self.validate_boundaries();
        if ok {
            let _ = writeln!(out, "validation: OK");
        } else {
            let _ = writeln!(out, "validation: FAILED");
            for error in errors {
                let _ = writeln!(out, "  - {error}");
            }
        }
        out
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::StraightChannel;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn sample_domain(boundaries: Vec<BoundarySegment>) -> FlowDomain {
        FlowDomain::new(
            "sample",
            Unit::Millimeters,
            Shape::Straight(StraightChannel::new(1.0, 1.0)),
            vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)],
            boundaries,
        )
    }

    fn segment(kind: BoundaryType, label: &str) -> BoundarySegment {
        BoundarySegment::new(vec![p(0.0, 0.0), p(1.0, 0.0)], kind, label)
    }

    #[test]
    fn missing_inlet_reported() {
        let domain = sample_domain(vec![
            segment(BoundaryType::Outlet1, "OUTLET1"),
            segment(BoundaryType::Wall, "WALL"),
        ]);
        let (ok, errors) = domain.validate_boundaries();
        assert!(!ok);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("inlet"));
    }

    #[test]
    fn duplicate_inlet_reported() {
        let domain = sample_domain(vec![
            segment(BoundaryType::Inlet, "INLET-a"),
            segment(BoundaryType::Inlet, "INLET-b"),
            segment(BoundaryType::Outlet1, "OUTLET1"),
            segment(BoundaryType::Wall, "WALL"),
        ]);
        let (ok, errors) = domain.validate_boundaries();
        assert!(!ok);
        assert!(errors[0].contains("found 2"));
    }

    #[test]
    fn missing_outlet_and_wall_reported() {
        let domain = sample_domain(vec![segment(BoundaryType::Inlet, "INLET")]);
        let (ok, errors) = domain.validate_boundaries();
        assert!(!ok);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn either_outlet_role_satisfies() {
        let domain = sample_domain(vec![
            segment(BoundaryType::Inlet, "INLET"),
            segment(BoundaryType::Outlet2, "OUTLET2"),
            segment(BoundaryType::Wall, "WALL"),
        ]);
        let (ok, errors) = domain.validate_boundaries();
        assert!(ok, "{errors:?}");
    }

    #[test]
    fn boundaries_by_type_preserves_order() {
        let domain = sample_domain(vec![
            segment(BoundaryType::Wall, "WALL-first"),
            segment(BoundaryType::Inlet, "INLET"),
            segment(BoundaryType::Wall, "WALL-second"),
        ]);
        let walls = domain.boundaries_by_type(BoundaryType::Wall);
        assert_eq!(walls.len(), 2);
        assert_eq!(walls[0].label(), "WALL-first");
        assert_eq!(walls[1].label(), "WALL-second");
        assert!(domain.boundaries_by_type(BoundaryType::Outlet2).is_empty());
    }

    #[test]
    fn summary_lists_roles_and_verdict() {
        let domain = sample_domain(vec![
            segment(BoundaryType::Inlet, "INLET"),
            segment(BoundaryType::Outlet1, "OUTLET1"),
            segment(BoundaryType::Wall, "WALL-bottom"),
        ]);
        let summary = domain.boundary_summary();
        assert!(summary.contains("INLET"));
        assert!(summary.contains("OUTLET1"));
        assert!(summary.contains("WALL-bottom"));
        assert!(summary.contains("length 1.0000 mm"));
        assert!(summary.contains("validation: OK"));
    }

    #[test]
    fn summary_reports_failures() {
        let domain = sample_domain(vec![segment(BoundaryType::Wall, "WALL")]);
        let summary = domain.boundary_summary();
        assert!(summary.contains("validation: FAILED"));
        assert!(summary.contains("inlet"));
    }
}
