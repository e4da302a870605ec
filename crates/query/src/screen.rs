//! Moving points between world space and screen space.
use glam::DAffine2;

use sightline_geometry::V2;

use crate::*;

fn apply_inverse(transform: DAffine2, point: V2) -> Result<V2> {
    let det = transform.matrix2.determinant();
    if det == 0.0 || !det.is_finite() {
        return Err(Error::NonInvertibleView);
    }
    Ok(transform.inverse().transform_point2(point.into()).into())
}

/// Apply the inverse of the camera's full view transform to `point`.
pub fn world_to_screen<C: ViewTransform + ?Sized>(camera: &C, point: V2) -> Result<V2> {
    apply_inverse(camera.view_matrix(), point)
}

/// Apply the inverse of the camera's zoom-only view transform to `point`.
///
/// For things drawn without the camera's translation and rotation, such as a HUD that still scales.
pub fn world_to_screen_zoom_only<C: ViewTransform + ?Sized>(camera: &C, point: V2) -> Result<V2> {
    apply_inverse(camera.view_matrix_zoom_only(), point)
}
