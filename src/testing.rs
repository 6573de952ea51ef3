//! Virtual event loop for timing tests.
//!
//! Mirrors the browser model: timers fire in deadline order, each callback
//! runs to completion, and ties fire in scheduling order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub struct Timeline<E> {
    now: u64,
    seq: u64,
    queue: BinaryHeap<Reverse<(u64, u64, usize)>>,
    timers: Vec<Timer<E>>,
}

struct Timer<E> {
    event: E,
    period: Option<u64>,
}

impl<E: Clone> Timeline<E> {
    pub fn new() -> Self {
        Self { now: 0, seq: 0, queue: BinaryHeap::new(), timers: Vec::new() }
    }

    /// One-shot timer `delay` ms from now.
    pub fn after(&mut self, delay: u64, event: E) {
        self.push(delay, None, event);
    }

    /// Repeating timer, first firing one period from now.
    pub fn every(&mut self, period: u64, event: E) {
        assert!(period > 0);
        self.push(period, Some(period), event);
    }

    /// Next event due at or before `limit`. Leaves `now` at `limit` once drained.
    pub fn next_until(&mut self, limit: u64) -> Option<(u64, E)> {
        let due = self.queue.peek().copied().filter(|Reverse((at, _, _))| *at <= limit);
        let Some(Reverse((at, _, idx))) = due else {
            self.now = self.now.max(limit);
            return None;
        };
        self.queue.pop();
        self.now = at;
        if let Some(period) = self.timers[idx].period {
            self.seq += 1;
            self.queue.push(Reverse((at + period, self.seq, idx)));
        }
        Some((at, self.timers[idx].event.clone()))
    }

    fn push(&mut self, delay: u64, period: Option<u64>, event: E) {
        let idx = self.timers.len();
        self.timers.push(Timer { event, period });
        self.seq += 1;
        self.queue.push(Reverse((self.now + delay, self.seq, idx)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut timeline = Timeline::new();
        timeline.every(100, "tick");
        timeline.after(200, "once");
        let fired: Vec<_> = std::iter::from_fn(|| timeline.next_until(300)).collect();
        assert_eq!(fired, vec![(100, "tick"), (200, "once"), (200, "tick"), (300, "tick")]);
        assert!(timeline.next_until(399).is_none());
    }
}
