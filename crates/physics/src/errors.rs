use crate::BodyHandle;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AabbError {
    #[error("Attempted to create an AABB which would have an invalid width or height")]
    AabbInvalidDims,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("AAbb error: {}", _0)]
    Aabb(#[from] AabbError),

    #[error("Radius must not be negative")]
    NegativeRadius,

    #[error("A polygon needs at least 3 distinct vertices, but got {vertices}")]
    DegeneratePolygon { vertices: usize },

    #[error("An edge must have two distinct endpoints")]
    DegenerateEdge,

    #[error("No body is registered for handle {0}")]
    UnknownBody(BodyHandle),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
