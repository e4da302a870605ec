use std::collections::HashSet;

use log::*;

use sightline_physics::{BodyHandle, FixtureHandle, PhysicsWorld};

/// A game-level object that owns a body in the physics world.
pub trait GameObject {
    fn get_body(&self) -> BodyHandle;
}

impl GameObject for BodyHandle {
    fn get_body(&self) -> BodyHandle {
        *self
    }
}

impl<T: GameObject + ?Sized> GameObject for &T {
    fn get_body(&self) -> BodyHandle {
        (**self).get_body()
    }
}

/// Fixtures a ray cast should pass straight through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    fixtures: HashSet<FixtureHandle>,
}

impl ExclusionSet {
    pub fn new() -> ExclusionSet {
        Default::default()
    }

    /// Exclude every fixture attached to `object`'s body.
    pub fn from_object<W: PhysicsWorld, O: GameObject + ?Sized>(world: &W, object: &O) -> ExclusionSet {
        let mut set = ExclusionSet::new();
        set.add_object(world, object);
        set
    }

    /// Exclude every fixture attached to the bodies of all of `objects`.
    pub fn from_objects<W: PhysicsWorld, O: GameObject>(world: &W, objects: &[O]) -> ExclusionSet {
        let mut set = ExclusionSet::new();
        for o in objects {
            set.add_object(world, o);
        }
        set
    }

    /// Add all of an object's fixtures.  Objects whose body isn't in the world have nothing to exclude.
    pub fn add_object<W: PhysicsWorld, O: GameObject + ?Sized>(&mut self, world: &W, object: &O) {
        let handle = object.get_body();
        match world.get_body(handle) {
            Some(body) => self.fixtures.extend(body.get_fixtures().iter().copied()),
            None => warn!("Not excluding {}: it isn't in the world", handle),
        }
    }

    pub fn insert(&mut self, fixture: FixtureHandle) -> bool {
        self.fixtures.insert(fixture)
    }

    pub fn contains(&self, fixture: FixtureHandle) -> bool {
        self.fixtures.contains(&fixture)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

impl FromIterator<FixtureHandle> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = FixtureHandle>>(iter: I) -> ExclusionSet {
        ExclusionSet {
            fixtures: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sightline_physics::*;

    #[test]
    fn test_from_objects() -> sightline_physics::Result<()> {
        let mut world = World::default();
        let a = world.insert_body(V2::ZERO, 0.0, ObjectId(1));
        let b = world.insert_body(V2::new(5.0, 0.0), 0.0, ObjectId(2));
        let c = world.insert_body(V2::new(9.0, 0.0), 0.0, ObjectId(3));
        let a1 = world.attach_fixture(a, Circle::new(V2::ZERO, 1.0)?)?;
        let a2 = world.attach_fixture(a, Circle::new(V2::new(1.0, 0.0), 1.0)?)?;
        let b1 = world.attach_fixture(b, Circle::new(V2::ZERO, 1.0)?)?;
        let c1 = world.attach_fixture(c, Circle::new(V2::ZERO, 1.0)?)?;

        let single = ExclusionSet::from_object(&world, &a);
        assert_eq!(single.len(), 2);
        assert!(single.contains(a1) && single.contains(a2));
        assert!(!single.contains(b1));

        let many = ExclusionSet::from_objects(&world, &[a, b]);
        assert_eq!(many, [a1, a2, b1].into_iter().collect::<ExclusionSet>());
        assert!(!many.contains(c1));

        assert!(ExclusionSet::from_objects::<_, BodyHandle>(&world, &[]).is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_body_excludes_nothing() {
        let mut world = World::default();
        let body = world.insert_body(V2::ZERO, 0.0, ObjectId(1));
        let other = World::default();
        assert!(ExclusionSet::from_object(&other, &body).is_empty());
    }
}
