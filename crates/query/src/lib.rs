//! Filtered ray casts against a physics world, and display-space positions of the shapes in it.
//!
//! Everything a caller passes in or gets back is in display units; conversion to and from the world's simulation
//! units happens inside.
mod camera;
mod config;
mod errors;
mod exclusion;
mod history;
mod ray_query;
mod screen;
mod shape_transform;

pub use camera::*;
pub use config::*;
pub use errors::*;
pub use exclusion::*;
pub use history::*;
pub use ray_query::*;
pub use screen::*;
pub use shape_transform::*;
