use std::fmt;

use serde::Serialize;

use crate::error::{GeometryError, Result};
use crate::math::{polygon_2d, Point2, Vector2};

/// Semantic role of a domain edge, deciding which boundary condition the
/// downstream solver attaches to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryType {
    /// Prescribed-velocity inflow face.
    Inlet,
    /// Pressure outlet at the end of the main channel.
    Outlet1,
    /// Pressure outlet at the end of a branch.
    Outlet2,
    /// No-slip wall.
    Wall,
}

impl BoundaryType {
    /// All roles, in report order.
    pub const ALL: [Self; 4] = [Self::Inlet, Self::Outlet1, Self::Outlet2, Self::Wall];

    /// Wire name of this role, as consumed by the solver-authoring layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inlet => "inlet",
            Self::Outlet1 => "outlet1",
            Self::Outlet2 => "outlet2",
            Self::Wall => "wall",
        }
    }

    /// Whether this role carries flow out of the domain.
    #[must_use]
    pub fn is_outlet(self) -> bool {
        matches!(self, Self::Outlet1 | Self::Outlet2)
    }
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered run of boundary vertices tagged with a role and a label.
///
/// Points are in the owning geometry's declared unit and follow the
/// outer-polygon traversal direction, so the implied direction of the
/// segment is meaningful (angled branch ports use it for their outward
/// normal). Segments are immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySegment {
    points: Vec<Point2>,
    kind: BoundaryType,
    label: String,
}

impl BoundarySegment {
    /// Creates a segment from its vertices.
    ///
    /// Geometric consistency with the outer polygon is the generator's
    /// responsibility; no validation happens here.
    #[must_use]
    pub fn new(points: Vec<Point2>, kind: BoundaryType, label: impl Into<String>) -> Self {
        Self {
            points,
            kind,
            label: label.into(),
        }
    }

    /// The segment's vertices, in traversal order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The boundary role of this segment.
    #[must_use]
    pub fn kind(&self) -> BoundaryType {
        self.kind
    }

    /// Human-readable label for diagnostics.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Total polyline length in the declared unit.
    #[must_use]
    pub fn length(&self) -> f64 {
        polygon_2d::polyline_length(&self.points)
    }

    /// Unit direction from the first vertex to the last.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` for segments with fewer than two
    /// points and `GeometryError::ZeroVector` when the endpoints coincide.
    pub fn direction(&self) -> Result<Vector2> {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() >= 2 => (first, last),
            _ => {
                return Err(GeometryError::Degenerate(format!(
                    "boundary segment '{}' needs at least 2 points",
                    self.label
                ))
                .into())
            }
        };
        polygon_2d::segment_direction(first, last)
    }
}
