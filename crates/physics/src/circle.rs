//! A simple circle.
use crate::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: V2,
    radius: f64,
}

impl Circle {
    pub fn new(center: V2, radius: f64) -> Result<Circle> {
        if radius.is_nan() || radius < 0.0 {
            return Err(Error::NegativeRadius);
        }
        Ok(Circle { center, radius })
    }

    /// The center; body-local for a fixture's shape, world-space once transformed.
    pub fn get_center(&self) -> &V2 {
        &self.center
    }

    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    pub fn get_bounding_box(&self) -> Aabb {
        Aabb::enclosing([self.center], self.radius)
            .expect("This internal logic should never fail")
    }

    #[must_use = "This doesn't mutate the Circle in-place"]
    pub fn transform(&self, position: &V2, rotation: f64) -> Circle {
        Circle {
            center: *position + self.center.rotated(rotation),
            radius: self.radius,
        }
    }
}
