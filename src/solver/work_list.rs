use std::collections::{HashSet, VecDeque};

use crate::solver::value::VariableKey;

/// FIFO queue of directed arcs `(Xi, Xj)` awaiting revision.
///
/// An arc that is already pending is not enqueued a second time; revising it
/// once covers every pending request.
pub struct WorkList<V: VariableKey> {
    queue: VecDeque<(V, V)>,
    queue_members: HashSet<(V, V)>,
}

impl<V: VariableKey> WorkList<V> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, from: V, to: V) {
        let arc = (from, to);
        if !self.queue_members.contains(&arc) {
            self.queue_members.insert(arc.clone());
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<(V, V)> {
        if let Some(arc) = self.queue.pop_front() {
            self.queue_members.remove(&arc);
            Some(arc)
        } else {
            None
        }
    }
}

impl<V: VariableKey> Default for WorkList<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::WorkList;

    #[test]
    fn pending_arcs_are_not_duplicated() {
        let mut worklist = WorkList::new();
        worklist.push_back("a", "b");
        worklist.push_back("a", "b");
        worklist.push_back("b", "a");

        assert_eq!(worklist.pop_front(), Some(("a", "b")));
        assert_eq!(worklist.pop_front(), Some(("b", "a")));
        assert_eq!(worklist.pop_front(), None);
    }

    #[test]
    fn popped_arcs_may_be_requeued() {
        let mut worklist = WorkList::new();
        worklist.push_back(1, 2);
        assert_eq!(worklist.pop_front(), Some((1, 2)));
        worklist.push_back(1, 2);
        assert_eq!(worklist.pop_front(), Some((1, 2)));
    }
}
