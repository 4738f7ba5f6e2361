use std::collections::VecDeque;

use super::node::NodeId;

/// Breadth-first queue of nodes that can still take a child
///
/// The front is the next parent to receive an insertion; the back is the most
/// recently inserted node. A node leaves the queue as soon as its second
/// child is attached.
#[derive(Debug, Clone, Default)]
pub struct InsertionCursor {
    /// Open parents in level order
    queue: VecDeque<NodeId>,
}

impl InsertionCursor {
    /// Creates an empty cursor
    pub fn new() -> Self {
        InsertionCursor {
            queue: VecDeque::new(),
        }
    }

    /// Creates an empty cursor with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        InsertionCursor {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns true if the cursor holds no nodes
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of open parents
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Next parent to receive a child
    pub fn front(&self) -> Option<NodeId> {
        self.queue.front().copied()
    }

    /// Most recently inserted node
    pub fn back(&self) -> Option<NodeId> {
        self.queue.back().copied()
    }

    /// Appends a freshly inserted node
    pub fn push_back(&mut self, id: NodeId) {
        self.queue.push_back(id);
    }

    /// Drops the front parent once it is full
    pub fn pop_front(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    /// Removes the most recently inserted node
    pub fn pop_back(&mut self) -> Option<NodeId> {
        self.queue.pop_back()
    }

    /// Reopens a parent that just lost its right child
    pub fn push_front(&mut self, id: NodeId) {
        self.queue.push_front(id);
    }

    /// Iterates over the open parents front to back
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.queue.iter().copied()
    }

    /// Forgets every entry
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_and_back_ends() {
        let mut cursor = InsertionCursor::new();
        assert!(cursor.is_empty());
        assert_eq!(cursor.front(), None);

        cursor.push_back(0);
        cursor.push_back(1);
        cursor.push_back(2);
        assert_eq!(cursor.front(), Some(0));
        assert_eq!(cursor.back(), Some(2));

        assert_eq!(cursor.pop_front(), Some(0));
        assert_eq!(cursor.pop_back(), Some(2));
        cursor.push_front(7);
        assert_eq!(cursor.iter().collect::<Vec<_>>(), vec![7, 1]);
        assert_eq!(cursor.len(), 2);

        cursor.clear();
        assert!(cursor.is_empty());
    }
}
