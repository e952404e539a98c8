//! LIFO frontier over undiscovered search nodes.
//!
//! A plain stack: iterative deepening orders traversal purely by push/pop
//! discipline, so there is no heap, no ordering key, and no visited set
//! (the engine assumes the space explored within one bounded pass is a tree).

use std::rc::Rc;

use crate::node::SearchNodeV1;

/// LIFO frontier manager.
///
/// Using an explicit stack instead of recursion bounds machine-stack depth
/// to the frontier size rather than the search depth, and makes traversal
/// order an auditable contract of the pop sequence.
pub struct LifoFrontier<S, A> {
    stack: Vec<Rc<SearchNodeV1<S, A>>>,
    high_water: u64,
}

impl<S, A> LifoFrontier<S, A> {
    /// Create a frontier seeded with a single root node.
    #[must_use]
    pub fn seeded(root: Rc<SearchNodeV1<S, A>>) -> Self {
        Self {
            stack: vec![root],
            high_water: 1,
        }
    }

    /// Push a node onto the frontier.
    pub fn push(&mut self, node: Rc<SearchNodeV1<S, A>>) {
        self.stack.push(node);
        let size = self.stack.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the most recently pushed node.
    #[must_use]
    pub fn pop(&mut self) -> Option<Rc<SearchNodeV1<S, A>>> {
        self.stack.pop()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(state: u32) -> Rc<SearchNodeV1<u32, u32>> {
        SearchNodeV1::root(state)
    }

    #[test]
    fn pop_returns_most_recently_pushed() {
        let mut frontier = LifoFrontier::seeded(leaf(0));
        frontier.push(leaf(1));
        frontier.push(leaf(2));
        assert_eq!(frontier.pop().unwrap().state, 2);
        assert_eq!(frontier.pop().unwrap().state, 1);
        assert_eq!(frontier.pop().unwrap().state, 0);
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn high_water_tracks_peak_size() {
        let mut frontier = LifoFrontier::seeded(leaf(0));
        frontier.push(leaf(1));
        frontier.push(leaf(2));
        let _ = frontier.pop();
        let _ = frontier.pop();
        frontier.push(leaf(3));
        assert_eq!(frontier.high_water(), 3);
        assert_eq!(frontier.len(), 2);
        assert!(!frontier.is_empty());
    }
}
