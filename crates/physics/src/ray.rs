use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Ray {
    pub(crate) origin: V2,
    pub(crate) direction: V2,
    pub(crate) length: f64,
}

impl Ray {
    pub fn new(origin: V2, direction: V2, length: f64) -> Ray {
        Ray {
            origin,
            direction,
            length,
        }
    }

    /// Build a ray from a source point and a destination point.
    ///
    /// Returns `None` if the points are the same, since there is no direction.
    pub fn from_points(source: V2, target: V2) -> Option<Ray> {
        let length = source.distance(&target);
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        let direction = (target - source) / length;
        Some(Ray::new(source, direction, length))
    }

    pub fn get_origin(&self) -> V2 {
        self.origin
    }

    pub fn get_direction(&self) -> V2 {
        self.direction
    }

    pub fn get_length(&self) -> f64 {
        self.length
    }

    /// Evaluate the ray at a given `t`.
    pub fn evaluate(&self, t: f64) -> V2 {
        V2::new(
            self.origin.x + self.direction.x * t,
            self.origin.y + self.direction.y * t,
        )
    }

    /// Convert a distance along the ray to a fraction of its length.
    pub fn fraction_of(&self, t: f64) -> f64 {
        t / self.length
    }
}
