//! The physics world the query layer runs against: bodies with attached fixtures, a spatial hash broad phase, and
//! a callback-driven ray cast.
mod aabb;
mod body;
mod circle;
mod edge;
mod errors;
mod polygon;
mod ray;
mod raycasting;
mod shape;
mod spatial_hash;
mod units;
mod world;

pub use aabb::*;
pub use body::*;
pub use circle::*;
pub use edge::*;
pub use errors::*;
pub use polygon::*;
pub use ray::*;
pub use raycasting::*;
pub use shape::*;
pub use spatial_hash::*;
pub use units::*;
pub use world::*;

pub use sightline_geometry::V2;
