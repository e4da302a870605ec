//! A polygon given by an ordered list of vertices.
use smallvec::SmallVec;

use crate::*;

/// Most polygons in practice are boxes or other small convex hulls.
pub type Vertices = SmallVec<[V2; 8]>;

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vertices,
}

impl Polygon {
    pub fn new(vertices: impl IntoIterator<Item = V2>) -> Result<Polygon> {
        let vertices: Vertices = vertices.into_iter().collect();
        let distinct = vertices
            .iter()
            .enumerate()
            .filter(|&(i, v)| !vertices[..i].contains(v))
            .count();
        if distinct < 3 {
            return Err(Error::DegeneratePolygon {
                vertices: vertices.len(),
            });
        }
        Ok(Polygon { vertices })
    }

    /// Build an axis-aligned box centered on `center`.
    pub fn new_box(center: V2, width: f64, height: f64) -> Result<Polygon> {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Polygon::new([
            center + V2::new(-hw, -hh),
            center + V2::new(hw, -hh),
            center + V2::new(hw, hh),
            center + V2::new(-hw, hh),
        ])
    }

    pub fn get_vertices(&self) -> &[V2] {
        &self.vertices[..]
    }

    /// Iterate over the edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (V2, V2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn get_bounding_box(&self) -> Aabb {
        Aabb::enclosing(self.vertices.iter().copied(), 0.0)
            .expect("This internal logic should never fail")
    }

    /// Even-odd point containment. Points exactly on an edge may go either way.
    pub fn contains_point(&self, point: &V2) -> bool {
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    #[must_use = "This doesn't mutate the Polygon in-place"]
    pub fn transform(&self, position: &V2, rotation: f64) -> Polygon {
        Polygon {
            vertices: self
                .vertices
                .iter()
                .map(|v| *position + v.rotated(rotation))
                .collect(),
        }
    }
}
