//! Layout types: Point, ChildSide, LayoutNode, Edge, LayoutResult.

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── ChildSide ───────────────────────────────────────────────────────────────

/// Which side of its parent a slot hangs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildSide {
    Root,
    Left,
    Right,
}

impl ChildSide {
    /// Side of slot `index` in a binary heap (odd slots are left children).
    pub fn of(index: usize) -> Self {
        match index {
            0 => ChildSide::Root,
            i if i % 2 == 1 => ChildSide::Left,
            _ => ChildSide::Right,
        }
    }
}

// ─── LayoutNode ──────────────────────────────────────────────────────────────

/// A heap slot with its depth, horizontal offset and resolved coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    /// Slot in the heap store.
    pub index: usize,
    pub depth: usize,
    /// Signed step count from the root column.
    pub x_offset: i64,
    pub x: f64,
    pub y: f64,
}

impl LayoutNode {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

/// Parent → child relation by heap slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

// ─── LayoutResult ────────────────────────────────────────────────────────────

/// Output of one layout run.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// One node per heap slot, indexed by slot.
    pub nodes: Vec<LayoutNode>,
    /// Edges in discovery order (right edge before left edge for each parent).
    pub edges: Vec<Edge>,
    /// Slots in the order the traversal finalized them.
    pub visit_order: Vec<usize>,
}

impl LayoutResult {
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            visit_order: Vec::new(),
        }
    }

    pub fn node(&self, index: usize) -> &LayoutNode {
        &self.nodes[index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
