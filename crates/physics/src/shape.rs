//! A shape is one of the concrete shape types behind an enum for collision
//! detection.
use crate::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
    Edge(Edge),
}

/// The kind of a [Shape], without its data.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, derive_more::Display)]
pub enum ShapeKind {
    Circle,
    Polygon,
    Edge,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Edge(_) => ShapeKind::Edge,
        }
    }

    pub fn get_bounding_box(&self) -> Aabb {
        match self {
            Shape::Circle(ref c) => c.get_bounding_box(),
            Shape::Polygon(ref p) => p.get_bounding_box(),
            Shape::Edge(ref e) => e.get_bounding_box(),
        }
    }

    pub fn raycast(&self, ray: &Ray) -> Option<RaycastingResult> {
        match self {
            Shape::Circle(ref c) => crate::raycasting::ray_circle_test(ray, c),
            Shape::Polygon(ref p) => crate::raycasting::ray_polygon_test(ray, p),
            Shape::Edge(ref e) => crate::raycasting::ray_edge_test(ray, e),
        }
    }

    /// Move a body-local shape into world space for a body at `position` rotated by `rotation` radians.
    #[must_use = "This doesn't mutate the Shape in place"]
    pub fn transform(&self, position: &V2, rotation: f64) -> Shape {
        match *self {
            Shape::Circle(ref c) => Shape::Circle(c.transform(position, rotation)),
            Shape::Polygon(ref p) => Shape::Polygon(p.transform(position, rotation)),
            Shape::Edge(ref e) => Shape::Edge(e.transform(position, rotation)),
        }
    }
}

impl From<Circle> for Shape {
    fn from(other: Circle) -> Shape {
        Shape::Circle(other)
    }
}

impl From<Polygon> for Shape {
    fn from(other: Polygon) -> Shape {
        Shape::Polygon(other)
    }
}

impl From<Edge> for Shape {
    fn from(other: Edge) -> Shape {
        Shape::Edge(other)
    }
}
