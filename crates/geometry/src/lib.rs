//! Geometry shared by the physics world and the query layer: points, integral
//! rectangles, and the truncating rotation used for display-space positions.
mod angle;
mod rect;
mod rotate;
mod sign;
mod v2;

pub use angle::*;
pub use rect::*;
pub use rotate::*;
pub use sign::*;
pub use v2::*;
