pub mod domain;
pub mod straight;
pub mod tjunction;
pub mod yjunction;

pub use domain::FlowDomain;
pub use straight::StraightChannel;
pub use tjunction::TJunction;
pub use yjunction::YJunction;

use serde::Serialize;

use crate::units::Unit;

/// The supported channel shapes, each carrying its own parameter record.
///
/// One contract, many shapes: a closed sum type dispatches `generate`
/// without trait objects, and doubles as the parameter record attached to
/// generated domains and export records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Straight(StraightChannel),
    TJunction(TJunction),
    YJunction(YJunction),
}

impl Shape {
    /// Generates the outer-boundary polygon and tagged boundary segments.
    ///
    /// Generation is a pure function of the parameters: calling it twice
    /// yields identical domains. Parameter combinations outside the
    /// documented ranges propagate as degenerate geometry rather than
    /// errors; callers are expected to validate and sanity-check the
    /// polygon before handing it downstream.
    #[must_use]
    pub fn generate(&self) -> FlowDomain {
        match self {
            Self::Straight(params) => params.generate(),
            Self::TJunction(params) => params.generate(),
            Self::YJunction(params) => params.generate(),
        }
    }

    /// Declared working unit of the parameter record.
    #[must_use]
    pub fn unit(&self) -> Unit {
        match self {
            Self::Straight(params) => params.unit,
            Self::TJunction(params) => params.unit,
            Self::YJunction(params) => params.unit,
        }
    }
}

impl From<StraightChannel> for Shape {
    fn from(params: StraightChannel) -> Self {
        Self::Straight(params)
    }
}

impl From<TJunction> for Shape {
    fn from(params: TJunction) -> Self {
        Self::TJunction(params)
    }
}

impl From<YJunction> for Shape {
    fn from(params: YJunction) -> Self {
        Self::YJunction(params)
    }
}
