//! The camera side of screen-space conversion.
use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

use sightline_geometry::V2;

/// Anything that can describe how the world is drawn.
pub trait ViewTransform {
    /// The full view transform: translation, rotation and zoom.
    fn view_matrix(&self) -> DAffine2;

    /// Only the zoom part of [ViewTransform::view_matrix].
    fn view_matrix_zoom_only(&self) -> DAffine2;
}

/// A 2d camera looking at `position`, which ends up drawn at `origin` (usually the middle of the viewport).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera2d {
    pub position: V2,
    /// Radians.
    pub rotation: f64,
    pub zoom: f64,
    pub origin: V2,
}

impl Camera2d {
    pub fn new(position: V2, rotation: f64, zoom: f64, origin: V2) -> Camera2d {
        Camera2d {
            position,
            rotation,
            zoom,
            origin,
        }
    }
}

impl Default for Camera2d {
    fn default() -> Camera2d {
        Camera2d::new(V2::ZERO, 0.0, 1.0, V2::ZERO)
    }
}

impl ViewTransform for Camera2d {
    fn view_matrix(&self) -> DAffine2 {
        DAffine2::from_translation(self.origin.into())
            * self.view_matrix_zoom_only()
            * DAffine2::from_angle(self.rotation)
            * DAffine2::from_translation(-DVec2::from(self.position))
    }

    fn view_matrix_zoom_only(&self) -> DAffine2 {
        DAffine2::from_scale(DVec2::splat(self.zoom))
    }
}
