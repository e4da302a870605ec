use sightline_physics::{BodyHandle, FixtureHandle, ShapeKind};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("There is no rule for the position of a {kind} shape")]
    UnsupportedShapeKind { kind: ShapeKind },

    #[error("Shape index {index} is out of range for a body with {count} shapes")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("No body is registered for handle {0}")]
    UnknownBody(BodyHandle),

    #[error("No fixture is registered for handle {0}")]
    UnknownFixture(FixtureHandle),

    #[error("The camera's view transform can't be inverted")]
    NonInvertibleView,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
