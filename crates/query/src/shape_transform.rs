//! Display-space positions of the shapes attached to bodies.
use sightline_geometry::{rotate, to_degrees, V2};
use sightline_physics::{Body, Fixture, PhysicsWorld, Shape, UnitConverter};

use crate::*;

/// Works out where a fixture currently is, in display units.
///
/// Circles and polygons use different rules, which callers may depend on:
///
/// - A circle's center is rotated about the body's position, and the whole result is truncated to whole display
///   units.
/// - A polygon's vertex average is rotated about the world origin and then offset by the body's position, so only
///   the rotated part is truncated.
///
/// Other shape kinds have no position.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ShapeTransform {
    units: UnitConverter,
}

impl ShapeTransform {
    pub fn new(units: UnitConverter) -> ShapeTransform {
        ShapeTransform { units }
    }

    pub fn get_units(&self) -> &UnitConverter {
        &self.units
    }

    pub fn position_of_shape(&self, body: &Body, fixture: &Fixture) -> Result<V2> {
        let angle = to_degrees(body.get_rotation());
        let body_position = self.units.to_display_units(body.get_position());

        match fixture.get_shape() {
            Shape::Circle(c) => {
                let center = self
                    .units
                    .to_display_units(*c.get_center() + body.get_position());
                Ok(rotate(center, body_position, angle))
            }
            Shape::Polygon(p) => {
                let vertices = p.get_vertices();
                let total: V2 = vertices
                    .iter()
                    .map(|v| self.units.to_display_units(*v))
                    .sum();
                let centroid = total / vertices.len() as f64;
                Ok(body_position + rotate(centroid, V2::ZERO, angle))
            }
            other => Err(Error::UnsupportedShapeKind { kind: other.kind() }),
        }
    }

    /// Get the position of the `index`th fixture attached to `body`.
    pub fn position_of_shape_at<W: PhysicsWorld>(
        &self,
        world: &W,
        body: &Body,
        index: usize,
    ) -> Result<V2> {
        let fixtures = body.get_fixtures();
        let handle = *fixtures.get(index).ok_or(Error::IndexOutOfRange {
            index,
            count: fixtures.len(),
        })?;
        let fixture = world
            .get_fixture(handle)
            .ok_or(Error::UnknownFixture(handle))?;
        self.position_of_shape(body, fixture)
    }

    /// Get the position of the `index`th fixture attached to `object`'s body.
    pub fn position_of_object_shape<W, O>(&self, world: &W, object: &O, index: usize) -> Result<V2>
    where
        W: PhysicsWorld,
        O: GameObject + ?Sized,
    {
        let handle = object.get_body();
        let body = world.get_body(handle).ok_or(Error::UnknownBody(handle))?;
        self.position_of_shape_at(world, body, index)
    }

    /// See [crate::world_to_screen].
    pub fn world_to_screen<C: ViewTransform + ?Sized>(&self, camera: &C, point: V2) -> Result<V2> {
        crate::world_to_screen(camera, point)
    }

    /// See [crate::world_to_screen_zoom_only].
    pub fn world_to_screen_zoom_only<C: ViewTransform + ?Sized>(
        &self,
        camera: &C,
        point: V2,
    ) -> Result<V2> {
        crate::world_to_screen_zoom_only(camera, point)
    }
}
