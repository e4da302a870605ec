//! A simple HashMap-backed spatial hash.
use std::collections::HashMap;

use smallvec::SmallVec;

use crate::*;

/// A `SpatialHash` can tell us what items are near a segment.
///
/// The hash divides the world into cells of a given width and height, then
/// adds items to all the cells they might be within.  Cells should generally
/// be larger than the objects the hash contains, while not being so large that
/// they contain large chunks of the world.
///
/// Items are keyed by the box they were inserted with, so removing one needs
/// that same box.
#[derive(Debug)]
pub struct SpatialHash<T: Clone> {
    entries: HashMap<(i64, i64), SmallVec<[T; 16]>>,
    cell_width: f64,
    cell_height: f64,
}

/// Represents a range in the hash that the box covers: `lx..=hx` and `ly..=hy`.
/// The ranges are inclusive on both ends.
struct RoundedAabb {
    lx: i64,
    ly: i64,
    hx: i64,
    hy: i64,
}

impl<T: Clone> SpatialHash<T> {
    pub fn new(cell_width: f64, cell_height: f64) -> SpatialHash<T> {
        SpatialHash {
            cell_width,
            cell_height,
            entries: Default::default(),
        }
    }

    fn cell_of(&self, point: V2) -> (i64, i64) {
        (
            (point.x / self.cell_width).floor() as i64,
            (point.y / self.cell_height).floor() as i64,
        )
    }

    fn round_aabb(&self, aabb: &Aabb) -> RoundedAabb {
        let (lx, ly) = self.cell_of(aabb.get_p1());
        let (hx, hy) = self.cell_of(aabb.get_p2());
        RoundedAabb { lx, ly, hx, hy }
    }

    pub fn insert(&mut self, aabb: &Aabb, val: T) {
        let RoundedAabb { lx, ly, hx, hy } = self.round_aabb(aabb);
        for x in lx..=hx {
            for y in ly..=hy {
                self.entries.entry((x, y)).or_default().push(val.clone());
            }
        }
    }

    /// Remove `val` from every cell `aabb` covers.  `aabb` must be the box `val` was inserted with.
    pub fn remove(&mut self, aabb: &Aabb, val: &T)
    where
        T: PartialEq,
    {
        let RoundedAabb { lx, ly, hx, hy } = self.round_aabb(aabb);
        for x in lx..=hx {
            for y in ly..=hy {
                let empty = match self.entries.get_mut(&(x, y)) {
                    Some(cell) => {
                        if let Some(i) = cell.iter().position(|v| v == val) {
                            cell.remove(i);
                        }
                        cell.is_empty()
                    }
                    None => continue,
                };
                if empty {
                    self.entries.remove(&(x, y));
                }
            }
        }
    }

    /// How many cells [SpatialHash::get_items_along_segment] would look at.
    pub fn count_cells_along_segment(&self, p1: V2, p2: V2) -> u64 {
        let (ax, ay) = self.cell_of(p1);
        let (bx, by) = self.cell_of(p2);
        ax.abs_diff(bx).saturating_add(ay.abs_diff(by)).saturating_add(1)
    }

    /// get an iterator over all possible objects near the segment from `p1` to `p2`. Note that this iterator can
    /// and usually does return duplicates.
    ///
    /// Only the cells the segment passes through are visited, in order from `p1`, and items within a cell in
    /// insertion order.
    pub fn get_items_along_segment(&self, p1: V2, p2: V2) -> impl Iterator<Item = &T> {
        SegmentCells::new(self, p1, p2)
            .filter_map(move |coord| self.entries.get(&coord))
            .flat_map(|e| e.iter())
    }
}

/// Walks the cells a segment crosses, one cell at a time (Amanatides and Woo's grid traversal).
struct SegmentCells {
    cell: (i64, i64),
    end: (i64, i64),
    step: (i64, i64),
    /// The fraction along the segment at which it crosses the next vertical and horizontal cell boundary.
    t_max: (f64, f64),
    /// The fraction along the segment it takes to cross a whole cell on each axis.
    t_delta: (f64, f64),
    remaining: u64,
}

/// Set up the walk along one axis: the step direction, the first boundary crossing, and the crossing interval.
fn axis_walk(start: f64, delta: f64, size: f64, cell: i64) -> (i64, f64, f64) {
    if delta > 0.0 {
        (1, ((cell + 1) as f64 * size - start) / delta, size / delta)
    } else if delta < 0.0 {
        (-1, (cell as f64 * size - start) / delta, -size / delta)
    } else {
        (0, f64::INFINITY, f64::INFINITY)
    }
}

impl SegmentCells {
    fn new<T: Clone>(hash: &SpatialHash<T>, p1: V2, p2: V2) -> SegmentCells {
        let cell = hash.cell_of(p1);
        let end = hash.cell_of(p2);
        let d = p2 - p1;
        let (sx, tx, dx) = axis_walk(p1.x, d.x, hash.cell_width, cell.0);
        let (sy, ty, dy) = axis_walk(p1.y, d.y, hash.cell_height, cell.1);

        SegmentCells {
            cell,
            end,
            step: (sx, sy),
            t_max: (tx, ty),
            t_delta: (dx, dy),
            remaining: hash.count_cells_along_segment(p1, p2),
        }
    }
}

impl Iterator for SegmentCells {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.cell;

        if self.remaining > 0 {
            // Once an axis has reached the end cell, only the other one may move; this keeps rounding from walking
            // past the end.
            let step_x = if self.cell.0 == self.end.0 {
                false
            } else if self.cell.1 == self.end.1 {
                true
            } else {
                self.t_max.0 < self.t_max.1
            };

            if step_x {
                self.cell.0 += self.step.0;
                self.t_max.0 += self.t_delta.0;
            } else {
                self.cell.1 += self.step.1;
                self.t_max.1 += self.t_delta.1;
            }
        }

        Some(current)
    }
}
