use std::fmt::{self, Display};
use std::io::{self, Write};

use serde::Serialize;

use super::linked_heap::LinkedMinHeap;
use super::node::NodeId;

/// Indentation per tree level in the rotated rendering
const INDENT: &str = "    ";

/// Level-by-level copy of a heap's values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeapSnapshot<T> {
    /// Number of values
    pub len: usize,

    /// Number of levels
    pub height: usize,

    /// Values per level, root level first, each level left to right
    pub levels: Vec<Vec<T>>,
}

impl<T: Clone> LinkedMinHeap<T> {
    /// Copies the values out level by level
    pub fn snapshot(&self) -> HeapSnapshot<T> {
        let mut levels = Vec::with_capacity(self.height());
        let mut values = self.iter().cloned();
        let mut width = 1;
        loop {
            let level: Vec<T> = values.by_ref().take(width).collect();
            if level.is_empty() {
                break;
            }
            levels.push(level);
            width *= 2;
        }

        HeapSnapshot {
            len: self.len(),
            height: self.height(),
            levels,
        }
    }
}

impl<T: Display> LinkedMinHeap<T> {
    /// Writes the tree rotated a quarter turn: right subtree above, left below
    pub fn write_tree<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Returns the rotated rendering as a string
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Prints the rotated rendering to stdout
    pub fn print(&self) {
        print!("{}", self);
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let node = match self.node(id) {
            Some(node) => node,
            None => return Ok(()),
        };

        if let Some(right) = node.right {
            self.fmt_subtree(f, right, depth + 1)?;
        }
        for _ in 0..depth {
            f.write_str(INDENT)?;
        }
        writeln!(f, "{}", node.value)?;
        if let Some(left) = node.left {
            self.fmt_subtree(f, left, depth + 1)?;
        }
        Ok(())
    }
}

impl<T: Display> Display for LinkedMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root_id() {
            Some(root) => self.fmt_subtree(f, root, 0),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rotated_layout() {
        let heap: LinkedMinHeap<i32> = (1..=5).collect();
        let expected = "    3\n1\n        5\n    2\n        4\n";
        assert_eq!(heap.render(), expected);
    }

    #[test]
    fn test_render_empty_heap() {
        let heap: LinkedMinHeap<i32> = LinkedMinHeap::new();
        assert_eq!(heap.render(), "");
        let mut buf = Vec::new();
        heap.write_tree(&mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_tree_matches_display() {
        let heap: LinkedMinHeap<i32> = vec![4, 2, 9].into_iter().collect();
        let mut buf = Vec::new();
        heap.write_tree(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{}", heap));
    }

    #[test]
    fn test_snapshot_levels() {
        let heap: LinkedMinHeap<i32> = (1..=6).collect();
        let snapshot = heap.snapshot();
        assert_eq!(snapshot.len, 6);
        assert_eq!(snapshot.height, 3);
        assert_eq!(snapshot.levels, vec![vec![1], vec![2, 3], vec![4, 5, 6]]);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["levels"][2][1], 5);
    }
}
