use std::collections::VecDeque;

use super::linked_heap::LinkedMinHeap;
use super::node::NodeId;
use crate::{Error, Result};

/// Summary of a successful structural check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapReport {
    /// Nodes reachable from the root
    pub len: usize,

    /// Number of levels
    pub height: usize,

    /// Entries in the insertion cursor
    pub cursor_len: usize,
}

impl<T: Ord> LinkedMinHeap<T> {
    /// Walks the whole tree and checks every structural invariant
    ///
    /// Checks, in level order: parent back-links, heap order, completeness
    /// (no node after the first missing child slot), the reachable count
    /// against [`LinkedMinHeap::len`], and that the insertion cursor lists
    /// exactly the nodes with a free child slot.
    pub fn validate(&self) -> Result<HeapReport> {
        let mut order: Vec<NodeId> = Vec::with_capacity(self.len());
        let mut queue = VecDeque::new();

        if let Some(root) = self.root_id() {
            let node = self.node(root).ok_or(Error::DanglingLink(root))?;
            if node.parent.is_some() {
                return Err(Error::BrokenParentLink(root));
            }
            queue.push_back(root);
        }

        let mut seen_gap = false;
        while let Some(id) = queue.pop_front() {
            order.push(id);
            if order.len() > self.len() {
                return Err(Error::CountMismatch {
                    expected: self.len(),
                    found: order.len(),
                });
            }

            let node = self.node(id).ok_or(Error::DanglingLink(id))?;
            for child in [node.left, node.right] {
                let child = match child {
                    Some(child) => child,
                    None => {
                        seen_gap = true;
                        continue;
                    }
                };
                if seen_gap {
                    return Err(Error::IncompleteShape(child));
                }
                let child_node = self.node(child).ok_or(Error::DanglingLink(child))?;
                if child_node.parent != Some(id) {
                    return Err(Error::BrokenParentLink(child));
                }
                if child_node.value < node.value {
                    return Err(Error::HeapOrderViolation(child));
                }
                queue.push_back(child);
            }
        }

        if order.len() != self.len() {
            return Err(Error::CountMismatch {
                expected: self.len(),
                found: order.len(),
            });
        }

        let open = order
            .iter()
            .copied()
            .filter(|&id| self.node(id).map_or(false, |node| !node.is_full()));
        if !open.eq(self.cursor().iter()) {
            return Err(Error::CursorMismatch);
        }

        let report = HeapReport {
            len: order.len(),
            height: self.height(),
            cursor_len: self.cursor().len(),
        };
        log::debug!("heap structure valid: {:?}", report);
        Ok(report)
    }
}
