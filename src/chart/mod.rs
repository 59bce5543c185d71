//! Chart graph — positioned heap slots mapped onto chart nodes and links.
//!
//! This is the collection handed to an external graph renderer. Each node
//! carries its value, a text label, a color derived from the value, a fixed
//! symbol size and its coordinate. Links reference nodes by heap slot.

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::heap::HeapStore;
use crate::layout::types::LayoutResult;

// ─── Chart types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartNode {
    /// Display label.
    pub name: String,
    pub value: i64,
    pub symbol_size: u32,
    pub item_style: ItemStyle,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartLink {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartGraph {
    pub nodes: Vec<ChartNode>,
    pub links: Vec<ChartLink>,
}

// ─── Value → display attributes ──────────────────────────────────────────────

/// Decimal text of the value.
pub fn label_for(value: i64) -> String {
    value.to_string()
}

/// Lowercase hex digits of the value with no prefix; negatives keep a sign.
///
/// `86` → `"56"`, `-255` → `"-ff"`.
pub fn color_for(value: i64) -> String {
    if value < 0 {
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{:x}", value)
    }
}

// ─── Materialization ─────────────────────────────────────────────────────────

/// Build the chart collection from a heap and its layout.
///
/// Panics if the layout was computed for a heap of a different length.
pub fn materialize(heap: &HeapStore<i64>, layout: &LayoutResult, config: &LayoutConfig) -> ChartGraph {
    assert_eq!(
        heap.len(),
        layout.len(),
        "layout does not belong to this heap"
    );

    let nodes = layout
        .nodes
        .iter()
        .map(|ln| {
            let value = heap[ln.index];
            ChartNode {
                name: label_for(value),
                value,
                symbol_size: config.symbol_size,
                item_style: ItemStyle {
                    color: color_for(value),
                },
                x: ln.x,
                y: ln.y,
            }
        })
        .collect();

    let links = layout
        .edges
        .iter()
        .map(|e| ChartLink {
            source: e.source,
            target: e.target,
        })
        .collect();

    ChartGraph { nodes, links }
}

impl ChartGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// The collection as a petgraph directed graph. Node indices equal heap slots.
    pub fn to_digraph(&self) -> DiGraph<ChartNode, ()> {
        let mut g = DiGraph::with_capacity(self.nodes.len(), self.links.len());
        for node in &self.nodes {
            g.add_node(node.clone());
        }
        for link in &self.links {
            g.add_edge(NodeIndex::new(link.source), NodeIndex::new(link.target), ());
        }
        g
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_chart.rs"]
mod tests;
