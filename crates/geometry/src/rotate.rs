use crate::*;

/// Rotate `point` about `origin` by `angle_degrees`.
///
/// Both coordinates of the result are truncated toward zero, so the result is always integral. Callers that need
/// sub-pixel precision should use [V2::rotated] instead.
pub fn rotate(point: V2, origin: V2, angle_degrees: f64) -> V2 {
    let (sin, cos) = to_radians(angle_degrees).sin_cos();
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    V2 {
        x: (cos * dx - sin * dy + origin.x).trunc(),
        y: (sin * dx + cos * dy + origin.y).trunc(),
    }
}
