//! A small stable min-priority queue.

use std::collections::VecDeque;

/// Min-priority queue over `(element, priority)` pairs, kept sorted by
/// ascending priority.
///
/// Elements with equal priority are served in insertion order, which
/// makes the searches that use it deterministic. Every operation is a
/// linear scan: `enqueue`, `contains` and `set_priority` are O(n),
/// `dequeue` is O(1). Callers must not rely on heap complexity.
///
/// Membership is decided by `PartialEq` on the element, so for grid
/// searches the element is the node's position.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    items: VecDeque<(T, f64)>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Insert `element` after every entry whose priority is `<= priority`.
    ///
    /// Priorities must not be NaN.
    pub fn enqueue(&mut self, element: T, priority: f64) {
        debug_assert!(!priority.is_nan(), "NaN priority");
        let at = self.items.partition_point(|(_, p)| *p <= priority);
        self.items.insert(at, (element, priority));
    }

    /// Remove and return the element with the lowest priority, or `None`
    /// when the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front().map(|(e, _)| e)
    }

    /// The lowest-priority element and its priority, without removing it.
    pub fn peek(&self) -> Option<(&T, f64)> {
        self.items.front().map(|(e, p)| (e, *p))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: PartialEq> PriorityQueue<T> {
    /// Whether `element` is queued.
    pub fn contains(&self, element: &T) -> bool {
        self.items.iter().any(|(e, _)| e == element)
    }

    /// The queued priority of `element`.
    pub fn priority(&self, element: &T) -> Option<f64> {
        self.items
            .iter()
            .find(|(e, _)| e == element)
            .map(|(_, p)| *p)
    }

    /// Move `element` to `priority`. Returns `false`, leaving the queue
    /// untouched, if the element is not queued.
    pub fn set_priority(&mut self, element: &T, priority: f64) -> bool {
        let Some(i) = self.items.iter().position(|(e, _)| e == element) else {
            return false;
        };
        if let Some((e, _)) = self.items.remove(i) {
            self.enqueue(e, priority);
        }
        true
    }
}
