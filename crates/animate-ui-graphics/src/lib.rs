//! Pure math/data for drawing & units.
//!
//! Geometry primitives, colors and density-independent lengths shared by the
//! animation layer, the demos and the renderers.

mod color;
mod geometry;
mod unit;

pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::Dp;
}
