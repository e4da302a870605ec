use serde::{Deserialize, Serialize};

use sightline_physics::UnitConverter;

/// How a cast picks its result out of the shapes the segment passes through.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastMode {
    /// Look at every shape and report the non-excluded one closest to the start.
    #[default]
    Nearest,

    /// Stop at the first non-excluded shape the world offers.
    ///
    /// The world offers shapes in broad phase order, so this is not necessarily the closest one.  Kept for callers
    /// relying on the older behavior.
    FirstAccepted,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub units: UnitConverter,
    pub mode: CastMode,
    /// How many results the cast history keeps before dropping the oldest.  0 disables the history.
    pub history_capacity: usize,
}

impl Default for QueryConfig {
    fn default() -> QueryConfig {
        QueryConfig {
            units: Default::default(),
            mode: Default::default(),
            history_capacity: 256,
        }
    }
}
