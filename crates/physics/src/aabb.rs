//! An axis-aligned bounding box.
use crate::errors::*;
use crate::*;

/// Smallest padding [Aabb::enclosing] applies, as a fraction of the largest coordinate.
const MIN_RELATIVE_PADDING: f64 = 1e-9;

/// An axis-aligned bounding box is specified by the lower left point and a width/height vector.
///
/// Boxes can never be a single point or line.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Aabb {
    p1: V2,
    /// width-height
    wh: V2,
}

impl Aabb {
    pub fn from_points(p1: V2, p2: V2) -> Result<Aabb, AabbError> {
        if p1.x >= p2.x || p1.y >= p2.y {
            return Err(AabbError::AabbInvalidDims);
        }

        Ok(Aabb { p1, wh: p2 - p1 })
    }

    /// Get the smallest box containing all of `points`, grown by `padding` on every side.
    ///
    /// The padding is never less than a small amount relative to the magnitude of the coordinates, so a single
    /// point or a run of collinear points still gets a valid box. This is how rays and edges get boxes.
    pub fn enclosing(points: impl IntoIterator<Item = V2>, padding: f64) -> Result<Aabb, AabbError> {
        let mut min = V2::new(f64::INFINITY, f64::INFINITY);
        let mut max = V2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        let magnitude = [min.x, min.y, max.x, max.y]
            .iter()
            .fold(1.0f64, |acc, c| acc.max(c.abs()));
        let padding = padding.max(magnitude * MIN_RELATIVE_PADDING);
        let pad = V2::new(padding, padding);
        Aabb::from_points(min - pad, max + pad)
    }

    pub fn get_p1(&self) -> V2 {
        self.p1
    }

    pub fn get_p2(&self) -> V2 {
        self.p1 + self.wh
    }

    pub fn get_width(&self) -> f64 {
        self.wh.x
    }

    pub fn get_height(&self) -> f64 {
        self.wh.y
    }

    pub fn get_center(&self) -> V2 {
        self.p1 + self.wh / 2.0
    }

    /// Scale the box about its center.
    #[must_use = "This doesn't mutate the Aabb in place"]
    pub fn dilate(&self, factor: f64) -> Aabb {
        let wh = self.wh * factor;
        Aabb {
            p1: self.get_center() - wh / 2.0,
            wh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::*;

    #[test]
    fn test_basic() -> crate::Result<()> {
        let b = Aabb::from_points(V2::new(1.0, 1.0), V2::new(3.0, 5.0))?;
        assert_relative_eq!(b.get_width(), 2.0);
        assert_relative_eq!(b.get_height(), 4.0);
        assert_eq!(b.get_center(), V2::new(2.0, 3.0));
        Ok(())
    }

    #[test]
    fn test_rejects_lines() {
        assert!(Aabb::from_points(V2::new(0.0, 0.0), V2::new(5.0, 0.0)).is_err());
    }

    #[test]
    fn test_enclosing_line() {
        let b = Aabb::enclosing([V2::new(0.0, 1.0), V2::new(4.0, 1.0)], 0.5).unwrap();
        assert_relative_eq!(b.get_p1().x, -0.5);
        assert_relative_eq!(b.get_p1().y, 0.5);
        assert_relative_eq!(b.get_p2().x, 4.5);
        assert_relative_eq!(b.get_p2().y, 1.5);
    }

    #[test]
    fn test_dilate_keeps_center() {
        let b = Aabb::from_points(V2::new(0.0, 0.0), V2::new(2.0, 4.0)).unwrap();
        let d = b.dilate(2.0);
        assert_relative_eq!(d.get_width(), 4.0);
        assert_relative_eq!(d.get_height(), 8.0);
        assert_eq!(d.get_center(), b.get_center());
    }
}
