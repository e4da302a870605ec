use sightline_physics::*;

/// Wraps a [World], but hands candidates to the callback in a fixed order instead of broad phase order.
///
/// Candidates whose fixture isn't in `order` are dropped.
pub struct ScriptedWorld {
    pub inner: World,
    pub order: Vec<FixtureHandle>,
}

impl PhysicsWorld for ScriptedWorld {
    fn get_body(&self, handle: BodyHandle) -> Option<&Body> {
        self.inner.get_body(handle)
    }

    fn get_fixture(&self, handle: FixtureHandle) -> Option<&Fixture> {
        self.inner.get_fixture(handle)
    }

    fn ray_cast<F>(&self, point1: V2, point2: V2, mut callback: F)
    where
        F: FnMut(&RayCastCandidate) -> RayCastControl,
    {
        let mut found = vec![];
        self.inner.ray_cast(point1, point2, |c| {
            found.push(*c);
            RayCastControl::Continue
        });

        for handle in self.order.iter() {
            let Some(c) = found.iter().find(|c| c.fixture == *handle) else {
                continue;
            };
            log::trace!("Scripted candidate {}", c.fixture);
            if callback(c) == RayCastControl::Stop {
                return;
            }
        }
    }
}

/// Two circles of radius 0.05 on the positive x axis, at 0.3 and 0.6 simulation units.
///
/// Returns the world and the near and far bodies.
pub fn two_circles() -> (World, BodyHandle, BodyHandle) {
    let mut world = World::default();
    let near = world.insert_body(V2::new(0.3, 0.0), 0.0, ObjectId(1));
    let far = world.insert_body(V2::new(0.6, 0.0), 0.0, ObjectId(2));
    for b in [near, far] {
        world
            .attach_fixture(b, Circle::new(V2::ZERO, 0.05).expect("Radius is positive"))
            .expect("Body was just inserted");
    }
    (world, near, far)
}

pub fn first_fixture(world: &World, body: BodyHandle) -> FixtureHandle {
    world
        .get_body(body)
        .expect("Body should exist")
        .get_fixtures()[0]
}
