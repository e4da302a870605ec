//! The `World` is the main entrypoint to the library.
use std::collections::HashSet;

use log::*;
use serde::{Deserialize, Serialize};
use slab::Slab;

use crate::*;

/// How much dilation to apply to the boxes? Prevents floating point rounding
/// from being a problem.
const DILATION_FACTOR: f64 = 1.01;

/// One shape the ray passes through, as offered to a ray cast callback.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayCastCandidate {
    pub fixture: FixtureHandle,
    /// Where the ray enters the shape, in simulation units.
    pub point: V2,
    /// The outward surface normal at `point`.
    pub normal: V2,
    /// How far along the segment `point` is, from 0 at the start to 1 at the end.
    pub fraction: f64,
}

/// What a ray cast callback wants the query to do next.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RayCastControl {
    /// Stop the query, accepting this candidate.
    Stop,
    /// Skip this candidate and keep visiting the rest.
    Continue,
}

/// The interface the query layer needs from a physics world.
pub trait PhysicsWorld {
    fn get_body(&self, handle: BodyHandle) -> Option<&Body>;

    fn get_fixture(&self, handle: FixtureHandle) -> Option<&Fixture>;

    /// Cast the segment from `point1` to `point2` (simulation units), calling `callback` once per shape the segment
    /// enters until it returns [RayCastControl::Stop] or the shapes run out.
    ///
    /// Shapes are visited in broad phase order, which isn't sorted by fraction.  Shapes containing `point1` are not
    /// visited.
    fn ray_cast<F>(&self, point1: V2, point2: V2, callback: F)
    where
        F: FnMut(&RayCastCandidate) -> RayCastControl;
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width of a broad phase cell, in simulation units.
    pub cell_width: f64,
    /// Height of a broad phase cell, in simulation units.
    pub cell_height: f64,
}

impl Default for WorldConfig {
    fn default() -> WorldConfig {
        WorldConfig {
            cell_width: 4.0,
            cell_height: 4.0,
        }
    }
}

/// A world is a collection of bodies that represent an environment.
///
/// The world only stores bodies and answers queries about them; nothing ever moves unless told to.
pub struct World {
    bodies: Slab<Body>,
    fixtures: Slab<Fixture>,
    broad_phase: SpatialHash<FixtureHandle>,
}

impl World {
    pub fn new(config: WorldConfig) -> World {
        World {
            bodies: Slab::new(),
            fixtures: Slab::new(),
            broad_phase: SpatialHash::new(config.cell_width, config.cell_height),
        }
    }

    pub fn insert_body(&mut self, position: V2, rotation: f64, user_data: ObjectId) -> BodyHandle {
        let handle = BodyHandle(self.bodies.insert(Body::new(position, rotation, user_data)));
        debug!("Inserted {} for object {} at {:?}", handle, user_data, position);
        handle
    }

    /// Attach a shape, given in body-local simulation units, to a body.
    pub fn attach_fixture(
        &mut self,
        body: BodyHandle,
        shape: impl Into<Shape>,
    ) -> Result<FixtureHandle> {
        let b = self.bodies.get(body.0).ok_or(Error::UnknownBody(body))?;
        let shape = shape.into();
        let proxy = broad_phase_box(b, &shape);

        let handle = FixtureHandle(self.fixtures.insert(Fixture { body, shape, proxy }));
        self.bodies[body.0].fixtures.push(handle);
        self.broad_phase.insert(&proxy, handle);
        Ok(handle)
    }

    /// Teleport a body.  This doesn't check for collisions.
    ///
    /// Only the body's own fixtures are re-hashed, so the cost is proportional to how many fixtures it has and how
    /// many broad phase cells they cover, not to the size of the world.
    pub fn set_body_transform(
        &mut self,
        body: BodyHandle,
        position: V2,
        rotation: f64,
    ) -> Result<()> {
        let b = self
            .bodies
            .get_mut(body.0)
            .ok_or(Error::UnknownBody(body))?;
        b.position = position;
        b.rotation = rotation;

        let b = &self.bodies[body.0];
        for &handle in b.fixtures.iter() {
            let fixture = &mut self.fixtures[handle.0];
            let proxy = broad_phase_box(b, &fixture.shape);
            self.broad_phase.remove(&fixture.proxy, &handle);
            self.broad_phase.insert(&proxy, handle);
            fixture.proxy = proxy;
        }
        Ok(())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Get a fixture's shape in world space.
    pub fn get_world_shape(&self, handle: FixtureHandle) -> Option<Shape> {
        let fixture = self.fixtures.get(handle.0)?;
        let body = self.bodies.get(fixture.body.0)?;
        Some(fixture.shape.transform(&body.position, body.rotation))
    }

    /// The fixtures a segment might pass through, each once.
    ///
    /// A long segment crosses more cells than there are fixtures in a sparse world, and then it is cheaper to try
    /// every fixture than to walk the cells.
    fn fixtures_near_segment(&self, point1: V2, point2: V2) -> Vec<FixtureHandle> {
        let cells = self.broad_phase.count_cells_along_segment(point1, point2);
        if cells > self.fixtures.len() as u64 {
            trace!("Ray crosses {} cells, scanning all {} fixtures", cells, self.fixtures.len());
            return self.fixtures.iter().map(|(key, _)| FixtureHandle(key)).collect();
        }

        // Large fixtures are in many cells, so skip the ones we have already found.
        let mut seen = HashSet::new();
        self.broad_phase
            .get_items_along_segment(point1, point2)
            .copied()
            .filter(|h| seen.insert(*h))
            .collect()
    }
}

/// The dilated world-space box a fixture is hashed under.
fn broad_phase_box(body: &Body, shape: &Shape) -> Aabb {
    shape
        .transform(&body.position, body.rotation)
        .get_bounding_box()
        .dilate(DILATION_FACTOR)
}

impl Default for World {
    fn default() -> World {
        World::new(Default::default())
    }
}

impl PhysicsWorld for World {
    fn get_body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0)
    }

    fn get_fixture(&self, handle: FixtureHandle) -> Option<&Fixture> {
        self.fixtures.get(handle.0)
    }

    fn ray_cast<F>(&self, point1: V2, point2: V2, mut callback: F)
    where
        F: FnMut(&RayCastCandidate) -> RayCastControl,
    {
        let ray = match Ray::from_points(point1, point2) {
            Some(r) => r,
            None => {
                trace!("Zero-length ray cast at {:?}", point1);
                return;
            }
        };

        for handle in self.fixtures_near_segment(point1, point2) {
            let Some(shape) = self.get_world_shape(handle) else {
                continue;
            };
            let Some(hit) = shape.raycast(&ray) else {
                continue;
            };
            let normal = match hit.normal {
                Some(n) if !hit.inside && n.x.is_finite() && n.y.is_finite() => n,
                _ => continue,
            };

            let candidate = RayCastCandidate {
                fixture: handle,
                point: hit.point,
                normal,
                fraction: ray.fraction_of(hit.t),
            };
            trace!("Ray cast candidate {:?}", candidate);
            if callback(&candidate) == RayCastControl::Stop {
                return;
            }
        }
    }
}
