//! A 2-dimensional vector/point.
use glam::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct V2 {
    pub x: f64,
    pub y: f64,
}

impl V2 {
    pub const ZERO: V2 = V2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> V2 {
        V2 { x, y }
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[must_use = "This function doesn't modify the vector in place"]
    pub fn normalize(self) -> V2 {
        let l = self.length();
        V2 {
            x: self.x / l,
            y: self.y / l,
        }
    }

    pub fn dot(&self, other: &V2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3d cross product of the two vectors extended with z = 0.
    pub fn cross(&self, other: &V2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance_squared(&self, other: &V2) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    pub fn distance(&self, other: &V2) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Rotate about the origin by `theta` radians, without any rounding.
    ///
    /// This is the rotation the physics side uses; display-space callers want [crate::rotate].
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn rotated(self, theta: f64) -> V2 {
        let (sin, cos) = theta.sin_cos();
        V2 {
            x: cos * self.x - sin * self.y,
            y: sin * self.x + cos * self.y,
        }
    }

    /// Rotate 90 degrees counterclockwise.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn perp(self) -> V2 {
        V2::new(-self.y, self.x)
    }
}

impl num::Zero for V2 {
    fn zero() -> V2 {
        V2::ZERO
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<DVec2> for V2 {
    fn from(other: DVec2) -> V2 {
        V2::new(other.x, other.y)
    }
}

impl From<V2> for DVec2 {
    fn from(other: V2) -> DVec2 {
        DVec2::new(other.x, other.y)
    }
}

impl std::ops::Add for V2 {
    type Output = V2;

    fn add(self, rhs: V2) -> V2 {
        V2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::AddAssign for V2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Mul<f64> for V2 {
    type Output = V2;

    fn mul(self, rhs: f64) -> Self::Output {
        V2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl std::ops::Div<f64> for V2 {
    type Output = V2;

    fn div(self, rhs: f64) -> Self::Output {
        V2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl std::ops::Neg for V2 {
    type Output = V2;

    fn neg(self) -> Self::Output {
        V2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl std::ops::Sub for V2 {
    type Output = V2;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl std::ops::SubAssign for V2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::iter::Sum for V2 {
    fn sum<I: Iterator<Item = V2>>(iter: I) -> V2 {
        iter.fold(V2::ZERO, |acc, x| acc + x)
    }
}
