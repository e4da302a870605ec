//! A line segment shape with no interior.
use crate::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    v1: V2,
    v2: V2,
}

impl Edge {
    pub fn new(v1: V2, v2: V2) -> Result<Edge> {
        if v1 == v2 {
            return Err(Error::DegenerateEdge);
        }
        Ok(Edge { v1, v2 })
    }

    pub fn get_v1(&self) -> V2 {
        self.v1
    }

    pub fn get_v2(&self) -> V2 {
        self.v2
    }

    pub fn get_bounding_box(&self) -> Aabb {
        Aabb::enclosing([self.v1, self.v2], 0.0)
            .expect("This internal logic should never fail")
    }

    #[must_use = "This doesn't mutate the Edge in-place"]
    pub fn transform(&self, position: &V2, rotation: f64) -> Edge {
        Edge {
            v1: *position + self.v1.rotated(rotation),
            v2: *position + self.v2.rotated(rotation),
        }
    }
}
