//! Round-robin priority dispenser.
//!
//! Holds a max-heap snapshot of the catalog. Each call pops the highest
//! priority activity; once the round is used up the heap is rebuilt from
//! whatever the catalog contains at that moment.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::models::Activity;

/// Heap entry: priority first, then earlier insertion wins among ties
#[derive(Debug)]
struct Ranked {
    order: usize,
    activity: Activity,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.activity
            .priority
            .cmp(&other.activity.priority)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

#[derive(Debug, Default)]
pub struct PriorityDispenser {
    heap: BinaryHeap<Ranked>,
}

impl PriorityDispenser {
    pub fn new(source: &[Activity]) -> Self {
        let mut dispenser = Self::default();
        dispenser.refill(source);
        dispenser
    }

    /// Discard the current round and start a fresh one from `source`
    pub fn refill(&mut self, source: &[Activity]) {
        self.heap = source
            .iter()
            .cloned()
            .enumerate()
            .map(|(order, activity)| Ranked { order, activity })
            .collect();
        tracing::debug!(size = self.heap.len(), "priority round refilled");
    }

    /// Pop the next activity, refilling from `source` when the round is empty.
    /// Returns `None` only when `source` itself is empty.
    pub fn next(&mut self, source: &[Activity]) -> Option<Activity> {
        if self.heap.is_empty() {
            self.refill(source);
        }
        self.heap.pop().map(|ranked| ranked.activity)
    }

    /// Activities left in the current round
    pub fn remaining(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Activity> {
        vec![
            Activity::new("low", "x", 1, 10, 1),
            Activity::new("high", "x", 1, 10, 5),
            Activity::new("mid", "x", 1, 10, 3),
        ]
    }

    #[test]
    fn test_pops_in_priority_order() {
        let source = sample();
        let mut dispenser = PriorityDispenser::new(&source);
        let names: Vec<String> = (0..3)
            .filter_map(|_| dispenser.next(&source))
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
        assert_eq!(dispenser.remaining(), 0);
    }

    #[test]
    fn test_refills_when_exhausted() {
        let source = sample();
        let mut dispenser = PriorityDispenser::new(&source);
        for _ in 0..3 {
            dispenser.next(&source);
        }
        assert_eq!(dispenser.next(&source).map(|a| a.name), Some("high".to_string()));
        assert_eq!(dispenser.remaining(), 2);
    }

    #[test]
    fn test_empty_source_yields_none() {
        let mut dispenser = PriorityDispenser::new(&[]);
        assert_eq!(dispenser.next(&[]), None);
    }

    #[test]
    fn test_negative_priorities_sort_last() {
        let source = vec![Activity::new("neg", "x", 1, 1, -3), Activity::new("zero", "x", 1, 1, 0)];
        let mut dispenser = PriorityDispenser::new(&source);
        assert_eq!(dispenser.next(&source).map(|a| a.name), Some("zero".to_string()));
        assert_eq!(dispenser.next(&source).map(|a| a.name), Some("neg".to_string()));
    }
}
