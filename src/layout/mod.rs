//! Layout engine — heap store in, positioned nodes and edges out.

pub mod spatial;
pub mod traversal;
pub mod types;

pub use spatial::{Cell, SpatialIndex};
pub use traversal::LayoutTraversal;
pub use types::{ChildSide, Edge, LayoutNode, LayoutResult, Point};

use crate::config::LayoutConfig;
use crate::heap::HeapStore;

/// Lay out an already heap-ordered store.
pub fn layout_heap<K>(heap: &HeapStore<K>, config: &LayoutConfig) -> LayoutResult {
    LayoutTraversal::new(heap, config).run()
}
