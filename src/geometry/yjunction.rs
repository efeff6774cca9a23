use serde::Serialize;
use tracing::debug;

use crate::boundary::{BoundarySegment, BoundaryType};
use crate::math::arc_2d::fillet_corner;
use crate::math::{Point2, Vector2};
use crate::units::Unit;

use super::domain::FlowDomain;
use super::Shape;

/// Points sampled per fillet arc when a transition radius is set.
const ARC_SAMPLES: u32 = 16;

/// A symmetric Y-shaped bifurcation: a main channel splitting into two
/// branches that leave the axis at `±branch_angle_deg`.
///
/// Each branch is half as wide as the main channel
/// (`w_branch = w_main / 2`), so the inlet cross-section equals the sum of
/// the two outlet cross-sections and mass-conserving boundary conditions
/// stay geometrically consistent at the split.
///
/// The outer boundary is assembled from nine named vertices in one fixed
/// counter-clockwise cycle starting at the inlet's bottom corner:
/// inlet-bottom, main-end-bottom, lower-port-outer, lower-port-inner,
/// bifurcation-point, upper-port-inner, upper-port-outer, main-end-top,
/// inlet-top. Permuting this cycle produces a self-intersecting shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YJunction {
    /// Main-channel length, inlet face to bifurcation point.
    pub l_main: f64,
    /// Branch length along its centerline.
    pub l_branch: f64,
    /// Main-channel width.
    pub w_main: f64,
    /// Branch angle from the main-channel axis, in degrees, applied
    /// symmetrically to both branches.
    pub branch_angle_deg: f64,
    /// Optional circular-arc transition radius at the two outer junction
    /// corners.
    pub fillet_radius: Option<f64>,
    /// Declared working unit of all dimensions.
    pub unit: Unit,
}

impl YJunction {
    /// Creates a symmetric Y-junction with dimensions in millimeters.
    #[must_use]
    pub fn new(l_main: f64, l_branch: f64, w_main: f64, branch_angle_deg: f64) -> Self {
        Self {
            l_main,
            l_branch,
            w_main,
            branch_angle_deg,
            fillet_radius: None,
            unit: Unit::Millimeters,
        }
    }

    /// Rounds the two outer junction corners with a tangent arc of the
    /// given radius.
    ///
    /// The radius must be small enough that both arc tangent points stay
    /// on their walls; oversized radii degrade into a self-intersecting
    /// outline. This is not checked.
    #[must_use]
    pub fn with_fillet(mut self, radius: f64) -> Self {
        self.fillet_radius = Some(radius);
        self
    }

    /// Sets the declared working unit.
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Branch width derived from the flow-area conservation constraint
    /// `A_inlet = A_outlet1 + A_outlet2`.
    #[must_use]
    pub fn w_branch(&self) -> f64 {
        self.w_main / 2.0
    }

    /// Generates the Y-shaped outline and its nine boundary segments.
    ///
    /// Angle/length combinations with `l_branch * sin(angle) < w_branch / 2`
    /// make the branches overlap near the junction; the generator does not
    /// special-case this and the caller must keep parameters in range.
    #[must_use]
    pub fn generate(&self) -> FlowDomain {
        debug!(
            l_main = self.l_main,
            l_branch = self.l_branch,
            w_main = self.w_main,
            branch_angle_deg = self.branch_angle_deg,
            fillet_radius = self.fillet_radius,
            "generating Y-junction"
        );

        let hwm = self.w_main / 2.0;
        let hwb = self.w_branch() / 2.0;
        let (sin_t, cos_t) = self.branch_angle_deg.to_radians().sin_cos();

        let upper_dir = Vector2::new(cos_t, sin_t);
        let lower_dir = Vector2::new(cos_t, -sin_t);
        // Outward port normals: the branch direction rotated a quarter
        // turn, mirrored below the axis.
        let upper_normal = Vector2::new(-sin_t, cos_t);
        let lower_normal = Vector2::new(-sin_t, -cos_t);

        let bifurcation = Point2::new(self.l_main, 0.0);
        let upper_port_center = bifurcation + upper_dir * self.l_branch;
        let lower_port_center = bifurcation + lower_dir * self.l_branch;

        let inlet_bottom = Point2::new(0.0, -hwm);
        let inlet_top = Point2::new(0.0, hwm);
        let main_end_bottom = Point2::new(self.l_main, -hwm);
        let main_end_top = Point2::new(self.l_main, hwm);

        let upper_port_outer = upper_port_center + upper_normal * hwb;
        let upper_port_inner = upper_port_center - upper_normal * hwb;
        let lower_port_outer = lower_port_center + lower_normal * hwb;
        let lower_port_inner = lower_port_center - lower_normal * hwb;

        // Outer walls, optionally rounded at the two reflex corners where
        // the main channel meets the branches.
        let lower_wall = match self.fillet_radius {
            Some(radius) => {
                let d_out = (lower_port_outer - main_end_bottom).normalize();
                fillet_corner(main_end_bottom, Vector2::x(), d_out, radius, ARC_SAMPLES)
            }
            None => vec![main_end_bottom],
        };
        let upper_wall = match self.fillet_radius {
            Some(radius) => {
                let d_in = (main_end_top - upper_port_outer).normalize();
                fillet_corner(main_end_top, d_in, -Vector2::x(), radius, ARC_SAMPLES)
            }
            None => vec![main_end_top],
        };
        let lower_wall_start = *lower_wall.first().unwrap_or(&main_end_bottom);
        let upper_wall_end = *upper_wall.last().unwrap_or(&main_end_top);

        let mut outer_polygon = vec![inlet_bottom];
        outer_polygon.extend_from_slice(&lower_wall);
        outer_polygon.extend_from_slice(&[
            lower_port_outer,
            lower_port_inner,
            bifurcation,
            upper_port_inner,
            upper_port_outer,
        ]);
        outer_polygon.extend_from_slice(&upper_wall);
        outer_polygon.push(inlet_top);

        let mut lower_outer_points = lower_wall.clone();
        lower_outer_points.push(lower_port_outer);
        let mut upper_outer_points = vec![upper_port_outer];
        upper_outer_points.extend_from_slice(&upper_wall);

        // Segment directions follow the polygon traversal; the inlet is
        // the closing edge, top to bottom.
        let boundaries = vec![
            BoundarySegment::new(vec![inlet_top, inlet_bottom], BoundaryType::Inlet, "INLET"),
            BoundarySegment::new(
                vec![inlet_bottom, lower_wall_start],
                BoundaryType::Wall,
                "WALL-main-bottom",
            ),
            BoundarySegment::new(lower_outer_points, BoundaryType::Wall, "WALL-lower-outer"),
            BoundarySegment::new(
                vec![lower_port_outer, lower_port_inner],
                BoundaryType::Outlet2,
                "OUTLET2",
            ),
            BoundarySegment::new(
                vec![lower_port_inner, bifurcation],
                BoundaryType::Wall,
                "WALL-lower-inner",
            ),
            BoundarySegment::new(
                vec![bifurcation, upper_port_inner],
                BoundaryType::Wall,
                "WALL-upper-inner",
            ),
            BoundarySegment::new(
                vec![upper_port_inner, upper_port_outer],
                BoundaryType::Outlet1,
                "OUTLET1",
            ),
            BoundarySegment::new(upper_outer_points, BoundaryType::Wall, "WALL-upper-outer"),
            BoundarySegment::new(
                vec![upper_wall_end, inlet_top],
                BoundaryType::Wall,
                "WALL-main-top",
            ),
        ];

        FlowDomain::new(
            "y_junction",
            self.unit,
            Shape::YJunction(self.clone()),
            outer_polygon,
            boundaries,
        )
    }
}
