use serde::Serialize;
use tracing::debug;

use crate::boundary::{BoundarySegment, BoundaryType};
use crate::math::Point2;
use crate::units::Unit;

use super::domain::FlowDomain;
use super::Shape;

/// An axis-aligned rectangular channel, centered on the x-axis.
///
/// The trivial base case the junction shapes specialize: inlet on the left
/// face, outlet on the right face, walls along the top and bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StraightChannel {
    /// Channel length along the x-axis.
    pub length: f64,
    /// Channel width.
    pub width: f64,
    /// Declared working unit of all dimensions.
    pub unit: Unit,
}

impl StraightChannel {
    /// Creates a straight channel with dimensions in millimeters.
    #[must_use]
    pub fn new(length: f64, width: f64) -> Self {
        Self {
            length,
            width,
            unit: Unit::Millimeters,
        }
    }

    /// Sets the declared working unit.
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Generates the rectangle and its four boundary segments.
    #[must_use]
    pub fn generate(&self) -> FlowDomain {
        debug!(
            length = self.length,
            width = self.width,
            "generating straight channel"
        );
        let hw = self.width / 2.0;

        // Counter-clockwise walk starting at the inlet's bottom corner.
        let inlet_bottom = Point2::new(0.0, -hw);
        let outlet_bottom = Point2::new(self.length, -hw);
        let outlet_top = Point2::new(self.length, hw);
        let inlet_top = Point2::new(0.0, hw);

        let outer_polygon = vec![inlet_bottom, outlet_bottom, outlet_top, inlet_top];

        // Segment directions follow the polygon traversal.
        let boundaries = vec![
            BoundarySegment::new(vec![inlet_top, inlet_bottom], BoundaryType::Inlet, "INLET"),
            BoundarySegment::new(
                vec![outlet_bottom, outlet_top],
                BoundaryType::Outlet1,
                "OUTLET1",
            ),
            BoundarySegment::new(
                vec![inlet_bottom, outlet_bottom],
                BoundaryType::Wall,
                "WALL-bottom",
            ),
            BoundarySegment::new(vec![outlet_top, inlet_top], BoundaryType::Wall, "WALL-top"),
        ];

        FlowDomain::new(
            "straight_channel",
            self.unit,
            Shape::Straight(self.clone()),
            outer_polygon,
            boundaries,
        )
    }
}
