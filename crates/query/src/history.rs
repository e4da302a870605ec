//! A bounded record of recent casts, for debugging and visualization.
use std::collections::VecDeque;

use crate::RayCastResult;

#[derive(Debug, Clone)]
pub struct RayCastHistory {
    entries: VecDeque<RayCastResult>,
    capacity: usize,
}

impl RayCastHistory {
    pub fn new(capacity: usize) -> RayCastHistory {
        RayCastHistory {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a result, dropping the oldest one if the history is full.
    pub fn push(&mut self, result: RayCastResult) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(result);
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &RayCastResult> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&RayCastResult> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sightline_geometry::V2;

    fn miss(x: f64) -> RayCastResult {
        RayCastResult::miss(V2::new(x, 0.0), V2::new(x, 1.0))
    }

    #[test]
    fn test_evicts_oldest() {
        let mut history = RayCastHistory::new(3);
        for i in 0..5 {
            history.push(miss(i as f64));
        }
        assert_eq!(history.len(), 3);
        let starts = history
            .iter()
            .map(|r| r.get_start_point().x)
            .collect::<Vec<_>>();
        assert_eq!(starts, vec![2.0, 3.0, 4.0]);
        assert_eq!(history.latest().map(|r| r.get_start_point().x), Some(4.0));
    }

    #[test]
    fn test_zero_capacity_records_nothing() {
        let mut history = RayCastHistory::new(0);
        history.push(miss(1.0));
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_clear() {
        let mut history = RayCastHistory::new(2);
        history.push(miss(1.0));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.get_capacity(), 2);
    }
}
