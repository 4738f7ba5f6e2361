pub mod cursor;
pub mod linked_heap;
pub mod node;
pub mod render;
pub mod validate;

pub use cursor::InsertionCursor;
pub use linked_heap::{Iter, LinkedMinHeap};
pub use node::{Node, NodeArena, NodeId};
pub use render::HeapSnapshot;
pub use validate::HeapReport;
