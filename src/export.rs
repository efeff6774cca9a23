//! Export adapter for the solver-authoring layer.
//!
//! Converts a generated [`FlowDomain`] into the flat record the external
//! solver consumes: one polygon per domain plus one entry per boundary
//! segment, every coordinate pre-scaled to meters regardless of the
//! declared working unit.

use serde::Serialize;
use tracing::debug;

use crate::boundary::BoundaryType;
use crate::geometry::{FlowDomain, Shape};
use crate::math::Point2;

/// A polygon as flat parallel coordinate arrays, in meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComsolPolygon {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// A boundary segment as flat parallel coordinate arrays, in meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComsolBoundary {
    #[serde(rename = "type")]
    pub kind: BoundaryType,
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// The complete solver-facing record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComsolModel {
    /// Always `"m"`; the solver works in SI units.
    pub unit: &'static str,
    pub polygons: Vec<ComsolPolygon>,
    pub boundaries: Vec<ComsolBoundary>,
    /// The parameter record the geometry was generated from, in the
    /// declared (unscaled) unit.
    pub params: Shape,
}

impl ComsolModel {
    /// Flattens a generated domain, rescaling every coordinate by the
    /// declared unit's meter factor.
    #[must_use]
    pub fn from_domain(domain: &FlowDomain) -> Self {
        let scale = domain.unit().scale_to_meters();
        debug!(unit = %domain.unit(), scale, "exporting flow domain");

        let (x, y) = split_xy(domain.outer_polygon(), scale);
        let polygons = vec![ComsolPolygon {
            label: domain.label().to_string(),
            x,
            y,
        }];

        let boundaries = domain
            .boundaries()
            .iter()
            .map(|segment| {
                let (x, y) = split_xy(segment.points(), scale);
                ComsolBoundary {
                    kind: segment.kind(),
                    label: segment.label().to_string(),
                    x,
                    y,
                }
            })
            .collect();

        Self {
            unit: "m",
            polygons,
            boundaries,
            params: domain.shape().clone(),
        }
    }
}

fn split_xy(points: &[Point2], scale: f64) -> (Vec<f64>, Vec<f64>) {
    let x = points.iter().map(|p| p.x * scale).collect();
    let y = points.iter().map(|p| p.y * scale).collect();
    (x, y)
}

impl FlowDomain {
    /// Rescales this domain to meters and flattens it into the solver
    /// record.
    #[must_use]
    pub fn to_comsol(&self) -> ComsolModel {
        ComsolModel::from_domain(self)
    }
}

impl Shape {
    /// Generates and exports in one step. This is the sole interface the
    /// external solver-authoring layer consumes.
    #[must_use]
    pub fn export_for_comsol(&self) -> ComsolModel {
        self.generate().to_comsol()
    }
}
