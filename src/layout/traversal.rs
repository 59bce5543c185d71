//! Depth-first placement of heap slots.
//!
//! The walk uses an explicit stack of value frames. For each popped slot:
//!   1. Candidate coordinate from depth and offset
//!   2. Collision probe against the spatial index
//!   3. Record node, index its point
//!   4. Center the parent once its right child is placed (first free point
//!      at or right of the midpoint)
//!   5. Push right child, then left child (so left pops first)

use tracing::{debug, trace};

use super::spatial::SpatialIndex;
use super::types::{ChildSide, Edge, LayoutNode, LayoutResult, Point};
use crate::config::LayoutConfig;
use crate::heap::{self, HeapStore};

/// One pending slot on the traversal stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    index: usize,
    depth: usize,
    x_offset: i64,
    side: ChildSide,
}

/// Lays out every slot of a heap store. Single use: `run` consumes it.
pub struct LayoutTraversal<'a, K> {
    heap: &'a HeapStore<K>,
    config: &'a LayoutConfig,
    index: SpatialIndex<usize>,
    nodes: Vec<Option<LayoutNode>>,
    edges: Vec<Edge>,
    visit_order: Vec<usize>,
}

impl<'a, K> LayoutTraversal<'a, K> {
    /// Panics if `config` fails [`LayoutConfig::validate`].
    pub fn new(heap: &'a HeapStore<K>, config: &'a LayoutConfig) -> Self {
        if let Err(e) = config.validate() {
            panic!("{e}");
        }
        Self {
            heap,
            config,
            index: SpatialIndex::new(config.spacing),
            nodes: vec![None; heap.len()],
            edges: Vec::with_capacity(heap.len().saturating_sub(1)),
            visit_order: Vec::with_capacity(heap.len()),
        }
    }

    pub fn run(mut self) -> LayoutResult {
        let n = self.heap.len();
        debug!(nodes = n, "laying out heap");
        if n == 0 {
            return LayoutResult::empty();
        }

        let mut stack = vec![Frame {
            index: 0,
            depth: 0,
            x_offset: 0,
            side: ChildSide::Root,
        }];

        while let Some(frame) = stack.pop() {
            self.place(frame);

            if frame.side == ChildSide::Right {
                self.center_ancestors(frame.index);
            }

            if let Some(right) = self.heap.right_of(frame.index) {
                stack.push(Frame {
                    index: right,
                    depth: frame.depth + 1,
                    x_offset: frame.x_offset + 1,
                    side: ChildSide::Right,
                });
                self.edges.push(Edge::new(frame.index, right));
            }
            if let Some(left) = self.heap.left_of(frame.index) {
                stack.push(Frame {
                    index: left,
                    depth: frame.depth + 1,
                    x_offset: frame.x_offset - 1,
                    side: ChildSide::Left,
                });
                self.edges.push(Edge::new(frame.index, left));
            }
        }

        let nodes: Vec<LayoutNode> = self.nodes.into_iter().flatten().collect();
        debug_assert_eq!(nodes.len(), n, "every slot is placed exactly once");
        debug!(
            nodes = nodes.len(),
            edges = self.edges.len(),
            cells = self.index.cell_count(),
            "layout complete"
        );

        LayoutResult {
            nodes,
            edges: self.edges,
            visit_order: self.visit_order,
        }
    }

    fn candidate(&self, frame: Frame) -> Point {
        Point::new(
            frame.x_offset as f64 * self.config.step_x + self.config.origin_x,
            frame.depth as f64 * self.config.step_y + self.config.origin_y,
        )
    }

    fn place(&mut self, frame: Frame) {
        let point = self.resolve(self.candidate(frame));
        self.index.insert(point, frame.index);
        self.nodes[frame.index] = Some(LayoutNode {
            index: frame.index,
            depth: frame.depth,
            x_offset: frame.x_offset,
            x: point.x,
            y: point.y,
        });
        self.visit_order.push(frame.index);
    }

    /// Shift right until the point is free. With a probe limit, drop one row
    /// and restart from the candidate column after `limit` shifts.
    fn resolve(&self, candidate: Point) -> Point {
        let step = self.config.probe_step;
        let mut p = candidate;
        let mut shifts = 0usize;
        while self.index.is_occupied(p) {
            if self.config.probe_limit.is_some_and(|limit| shifts >= limit) {
                p = Point::new(candidate.x, advance(p.y, step));
                shifts = 0;
                trace!(x = p.x, y = p.y, "probe limit reached, dropping a row");
                continue;
            }
            p.x = advance(p.x, step);
            shifts += 1;
        }
        if p != candidate {
            trace!(
                from_x = candidate.x,
                from_y = candidate.y,
                to_x = p.x,
                to_y = p.y,
                "collision resolved"
            );
        }
        p
    }

    /// Center the parent of a freshly placed right child. A parent that moves
    /// and is itself a right child shifts its own parent's midpoint, so the
    /// correction walks up until it reaches a left child or the root.
    fn center_ancestors(&mut self, right: usize) {
        let mut child = right;
        while ChildSide::of(child) == ChildSide::Right {
            let Some(parent) = heap::parent(child) else {
                break;
            };
            self.center(parent);
            child = parent;
        }
    }

    /// Move `parent` to the midpoint of its two children. If another node
    /// holds the midpoint, the parent takes the first free point right of it,
    /// probing in `probe_step` increments on its own row.
    fn center(&mut self, parent: usize) {
        let left = heap::left_child(parent);
        let right = heap::right_child(parent);
        let (Some(l), Some(r)) = (&self.nodes[left], &self.nodes[right]) else {
            return;
        };
        let mid = (l.x + r.x) / 2.0;
        let Some(current) = self.nodes[parent].as_ref().map(LayoutNode::point) else {
            return;
        };

        let mut target = Point::new(mid, current.y);
        while self.index.at(target).any(|&slot| slot != parent) {
            target.x = advance(target.x, self.config.probe_step);
        }
        if target.x != mid {
            debug!(parent, mid, x = target.x, y = target.y, "midpoint taken, shifted right");
        }
        if target == current {
            return;
        }

        self.index.remove(current, &parent);
        self.index.insert(target, parent);
        if let Some(node) = self.nodes[parent].as_mut() {
            trace!(parent, from_x = node.x, to_x = target.x, "centered over children");
            node.x = target.x;
        }
    }
}

/// One probe step from `from`. Panics once `f64` can no longer move the point,
/// since the probe would otherwise spin on the same occupied coordinate.
fn advance(from: f64, step: f64) -> f64 {
    let next = from + step;
    assert!(
        next.is_finite() && next > from,
        "probe step {step} cannot move a point past {from}"
    );
    next
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_traversal.rs"]
mod tests;
