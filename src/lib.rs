pub mod boundary;
pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod units;

pub use boundary::{BoundarySegment, BoundaryType};
pub use error::{ChipgeomError, Result};
pub use export::{ComsolBoundary, ComsolModel, ComsolPolygon};
pub use geometry::{FlowDomain, Shape, StraightChannel, TJunction, YJunction};
pub use units::Unit;
