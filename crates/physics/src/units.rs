//! Conversion between the world's simulation units and the game's display units.
use serde::{Deserialize, Serialize};

use crate::*;

/// Converts points and lengths between simulation units (what the world stores) and display units (pixels).
///
/// Simulation works best with objects roughly a unit across, so display-space sizes get scaled down on the way in.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitConverter {
    pub display_units_per_sim_unit: f64,
}

impl UnitConverter {
    pub const fn new(display_units_per_sim_unit: f64) -> UnitConverter {
        UnitConverter {
            display_units_per_sim_unit,
        }
    }

    pub fn to_sim_units(&self, point: V2) -> V2 {
        point / self.display_units_per_sim_unit
    }

    pub fn to_display_units(&self, point: V2) -> V2 {
        point * self.display_units_per_sim_unit
    }

    pub fn length_to_sim_units(&self, length: f64) -> f64 {
        length / self.display_units_per_sim_unit
    }

    pub fn length_to_display_units(&self, length: f64) -> f64 {
        length * self.display_units_per_sim_unit
    }
}

impl Default for UnitConverter {
    fn default() -> UnitConverter {
        UnitConverter::new(100.0)
    }
}
