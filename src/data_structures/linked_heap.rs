use std::collections::VecDeque;

use super::cursor::InsertionCursor;
use super::node::{Node, NodeArena, NodeId};
use crate::{Error, Result};

/// Min-heap kept as a linked complete binary tree
///
/// Every node links to its children and its parent by arena index. Values
/// move between nodes during sifting; node positions never change once a
/// node is attached, so the insertion cursor stays valid across swaps.
#[derive(Debug, Clone)]
pub struct LinkedMinHeap<T> {
    /// Node storage
    nodes: NodeArena<T>,

    /// Root of the tree, `None` when the heap is empty
    root: Option<NodeId>,

    /// Parents with a free child slot, in level order
    cursor: InsertionCursor,
}

impl<T> LinkedMinHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        LinkedMinHeap {
            nodes: NodeArena::new(),
            root: None,
            cursor: InsertionCursor::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedMinHeap {
            nodes: NodeArena::with_capacity(capacity),
            root: None,
            // Leaves make up roughly half of a complete tree
            cursor: InsertionCursor::with_capacity(capacity / 2 + 1),
        }
    }

    /// Returns true if the heap holds no values
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of values in the heap
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of tree levels, 0 for an empty heap
    pub fn height(&self) -> usize {
        (usize::BITS - self.len().leading_zeros()) as usize
    }

    /// Returns the smallest value without removing it
    pub fn peek(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].value)
    }

    /// Returns the smallest value, or [`Error::EmptyHeap`]
    pub fn min(&self) -> Result<&T> {
        self.peek().ok_or(Error::EmptyHeap)
    }

    /// Iterates over the values in level order, root first
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            heap: self,
            queue: self.root.into_iter().collect(),
        }
    }

    /// Releases every node with a post-order walk from the root
    pub fn clear(&mut self) {
        let mut released = 0;
        if let Some(root) = self.root.take() {
            let mut stack = vec![(root, false)];
            while let Some((id, children_done)) = stack.pop() {
                if children_done {
                    self.nodes.remove(id);
                    released += 1;
                    continue;
                }
                stack.push((id, true));
                let node = &self.nodes[id];
                if let Some(right) = node.right {
                    stack.push((right, false));
                }
                if let Some(left) = node.left {
                    stack.push((left, false));
                }
            }
        }
        self.nodes.clear();
        self.cursor.clear();
        log::debug!("released {} nodes", released);
    }

    pub(crate) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id)
    }

    pub(crate) fn cursor(&self) -> &InsertionCursor {
        &self.cursor
    }
}

impl<T: Ord> LinkedMinHeap<T> {
    /// Adds `value` as a new leaf and restores heap order
    ///
    /// The leaf is attached under the cursor front, left slot first. A parent
    /// whose right slot gets filled leaves the cursor, and the new leaf joins
    /// the back as a future parent.
    pub fn insert(&mut self, value: T) {
        let id = self.nodes.alloc(Node::new(value));

        let parent = match self.cursor.front() {
            Some(parent) => parent,
            None => {
                self.root = Some(id);
                self.cursor.push_back(id);
                return;
            }
        };

        self.nodes[id].parent = Some(parent);
        let slot = &mut self.nodes[parent];
        if slot.left.is_none() {
            slot.left = Some(id);
        } else {
            slot.right = Some(id);
            self.cursor.pop_front();
        }
        self.cursor.push_back(id);
        log::trace!("attached node {} under {}", id, parent);

        self.sift_up(id);
    }

    /// Same as [`LinkedMinHeap::insert`]
    pub fn push(&mut self, value: T) {
        self.insert(value);
    }

    /// Removes and returns the smallest value
    ///
    /// The most recently inserted leaf is unlinked and its value replaces the
    /// root's, which is then sifted down. Fails with [`Error::EmptyHeap`]
    /// without touching the heap when there is nothing to extract.
    pub fn extract_min(&mut self) -> Result<T> {
        let root = self.root.ok_or(Error::EmptyHeap)?;
        let last = self.cursor.pop_back().ok_or(Error::EmptyHeap)?;

        if last == root {
            self.root = None;
            return Ok(self.nodes.remove(root).value);
        }

        let last_node = self.nodes.remove(last);
        if let Some(parent) = last_node.parent {
            let slot = &mut self.nodes[parent];
            if slot.right == Some(last) {
                slot.right = None;
                // Parent has room again and precedes every other open parent
                self.cursor.push_front(parent);
            } else {
                slot.left = None;
            }
        }

        let min = std::mem::replace(&mut self.nodes[root].value, last_node.value);
        self.sift_down(root);
        Ok(min)
    }

    /// Removes and returns the smallest value, `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        self.extract_min().ok()
    }

    /// Drains the heap into a vector in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Moves the value at `id` up while it is smaller than its parent's
    fn sift_up(&mut self, mut id: NodeId) {
        while let Some(parent) = self.nodes[id].parent {
            if self.nodes[id].value < self.nodes[parent].value {
                self.nodes.swap_values(id, parent);
                id = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the value at `id` down while a child holds a smaller one
    ///
    /// Ties keep the value in place; between equal children the left wins.
    fn sift_down(&mut self, mut id: NodeId) {
        loop {
            let (left, right) = (self.nodes[id].left, self.nodes[id].right);
            let mut smallest = id;

            if let Some(left) = left {
                if self.nodes[left].value < self.nodes[smallest].value {
                    smallest = left;
                }
            }
            if let Some(right) = right {
                if self.nodes[right].value < self.nodes[smallest].value {
                    smallest = right;
                }
            }

            if smallest == id {
                break;
            }
            self.nodes.swap_values(id, smallest);
            id = smallest;
        }
    }
}

impl<T> Default for LinkedMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for LinkedMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = LinkedMinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord> Extend<T> for LinkedMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Level-order iterator over the values of a [`LinkedMinHeap`]
pub struct Iter<'a, T> {
    heap: &'a LinkedMinHeap<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.queue.pop_front()?;
        let heap = self.heap;
        let node = &heap.nodes[id];
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedMinHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
