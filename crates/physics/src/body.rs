use smallvec::SmallVec;

use crate::*;

/// A key for a body in a [World].
///
/// Handles are plain indices: they never keep the body alive, and comparing two handles is only meaningful if they
/// came from the same world.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, derive_more::Display)]
#[display(fmt = "body#{}", _0)]
pub struct BodyHandle(pub(crate) usize);

/// A key for a fixture in a [World].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, derive_more::Display)]
#[display(fmt = "fixture#{}", _0)]
pub struct FixtureHandle(pub(crate) usize);

/// Identifies the game-level object a body belongs to.
///
/// The world never interprets this; it is carried in the body's user data slot so that query results can say which
/// object was hit.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    derive_more::Display,
    derive_more::From,
    derive_more::Into,
)]
pub struct ObjectId(pub u64);

/// A rigid body: a position, a rotation, and the fixtures attached to it.
///
/// Positions are in simulation units and rotations in radians.
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) position: V2,
    pub(crate) rotation: f64,
    pub(crate) fixtures: SmallVec<[FixtureHandle; 4]>,
    pub(crate) user_data: ObjectId,
}

impl Body {
    pub(crate) fn new(position: V2, rotation: f64, user_data: ObjectId) -> Body {
        Body {
            position,
            rotation,
            fixtures: Default::default(),
            user_data,
        }
    }

    pub fn get_position(&self) -> V2 {
        self.position
    }

    pub fn get_rotation(&self) -> f64 {
        self.rotation
    }

    /// The fixtures attached to this body, in the order they were attached.
    pub fn get_fixtures(&self) -> &[FixtureHandle] {
        &self.fixtures[..]
    }

    pub fn get_user_data(&self) -> ObjectId {
        self.user_data
    }
}

/// A shape attached to a body.  The shape is stored in body-local simulation units.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub(crate) body: BodyHandle,
    pub(crate) shape: Shape,
    /// The box this fixture is filed under in the broad phase.
    pub(crate) proxy: Aabb,
}

impl Fixture {
    pub fn get_body(&self) -> BodyHandle {
        self.body
    }

    pub fn get_shape(&self) -> &Shape {
        &self.shape
    }
}
