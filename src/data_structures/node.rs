use std::fmt::Debug;

/// Index of a node slot inside a [`NodeArena`]
pub type NodeId = usize;

/// A tree node: one value plus its links
///
/// `left` and `right` are the children this node owns in the tree. `parent`
/// is only a back-reference for walking upwards; releasing a node never goes
/// through it.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Stored value
    pub value: T,

    /// Left child, if any
    pub left: Option<NodeId>,

    /// Right child, if any
    pub right: Option<NodeId>,

    /// Parent, `None` for the root
    pub parent: Option<NodeId>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `value`
    pub fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
            parent: None,
        }
    }

    /// Returns true if both child slots are taken
    pub fn is_full(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Slot storage for tree nodes
///
/// Vacated slots are kept on a free list and handed out again by
/// [`NodeArena::alloc`], so the backing vector never grows past the peak
/// number of live nodes.
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    /// Node slots, `None` when vacant
    slots: Vec<Option<Node<T>>>,

    /// Vacant slot indices, reused last-in first-out
    free: Vec<NodeId>,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena
    pub fn new() -> Self {
        NodeArena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Creates an empty arena with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Returns true if no node is live
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots ever allocated (live or vacant)
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Stores `node` and returns its id, reusing a vacant slot when one exists
    pub fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                log::trace!("reusing node slot {}", id);
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Removes the node at `id` and returns it, marking the slot vacant
    pub fn release(&mut self, id: NodeId) -> Option<Node<T>> {
        let node = self.slots.get_mut(id)?.take()?;
        self.free.push(id);
        Some(node)
    }

    /// Removes the node at `id`, panicking if the slot is vacant
    pub fn remove(&mut self, id: NodeId) -> Node<T> {
        match self.release(id) {
            Some(node) => node,
            None => panic!("node slot {} is vacant", id),
        }
    }

    /// Returns the node at `id` if the slot is live
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Returns the node at `id` mutably if the slot is live
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    /// Swaps the values of two live nodes, leaving their links untouched
    pub fn swap_values(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi);
        if let (Some(x), Some(y)) = (head[lo].as_mut(), tail[0].as_mut()) {
            std::mem::swap(&mut x.value, &mut y.value);
        }
    }

    /// Drops every node and forgets all slots
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Index<NodeId> for NodeArena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node slot {} is vacant", id),
        }
    }
}

impl<T> std::ops::IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("node slot {} is vacant", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_release_reuses_slots() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Node::new(10));
        let b = arena.alloc(Node::new(20));
        assert_eq!(arena.len(), 2);

        let released = arena.release(a).unwrap();
        assert_eq!(released.value, 10);
        assert_eq!(arena.len(), 1);
        assert!(arena.get(a).is_none());

        // Vacant slot handed out again
        let c = arena.alloc(Node::new(30));
        assert_eq!(c, a);
        assert_eq!(arena.slot_count(), 2);
        assert_eq!(arena[c].value, 30);
        assert_eq!(arena[b].value, 20);
    }

    #[test]
    fn test_release_vacant_slot_is_none() {
        let mut arena: NodeArena<i32> = NodeArena::new();
        assert!(arena.release(0).is_none());
        let a = arena.alloc(Node::new(1));
        assert!(arena.release(a).is_some());
        assert!(arena.release(a).is_none());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn test_swap_values_keeps_links() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(Node::new(1));
        let b = arena.alloc(Node::new(2));
        arena[b].parent = Some(a);
        arena[a].left = Some(b);

        arena.swap_values(b, a);
        assert_eq!(arena[a].value, 2);
        assert_eq!(arena[b].value, 1);
        assert_eq!(arena[a].left, Some(b));
        assert_eq!(arena[b].parent, Some(a));

        arena.swap_values(a, a);
        assert_eq!(arena[a].value, 2);
    }

    #[test]
    fn test_node_shape_helpers() {
        let mut node = Node::new(5);
        assert!(node.is_leaf());
        node.left = Some(1);
        assert!(!node.is_leaf());
        assert!(!node.is_full());
        node.right = Some(2);
        assert!(node.is_full());
    }
}
