//! heap-layout — lay out a binary min-heap as a 2-D tree for graph charts.
//!
//! Pipeline: values → `HeapStore` (heap order) → `LayoutTraversal`
//! (depth/offset, collision probe, sibling centering) → `ChartGraph`
//! (value, label, color, size, coordinate; parent → child links).
//!
//! Public API: `layout_values()`, `materialize_values()`, `render_values()`.

pub mod chart;
pub mod config;
pub mod error;
pub mod heap;
pub mod layout;
pub mod parsers;
pub mod renderers;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::chart::{ChartGraph, ChartLink, ChartNode};
pub use crate::config::{ChartOptions, LayoutConfig};
pub use crate::error::{Error, Result};
pub use crate::heap::HeapStore;
pub use crate::layout::{Edge, LayoutNode, LayoutResult, Point};

use crate::chart::materialize;
use crate::layout::layout_heap;
use crate::parsers::parse_values;
use crate::renderers::{ChartJsonRenderer, Renderer};

/// Sequence rendered by the `--demo` flag.
pub const DEMO_VALUES: [i64; 11] = [9, 86, 1, 2, 10, 50, 37, 900, 43, 513, 367];

/// Heapify `values` and lay the heap out. Panics on geometry that fails
/// [`LayoutConfig::validate`]. Returns the heap alongside the layout
/// so callers can read the value held by each slot.
pub fn layout_values(values: Vec<i64>, config: &LayoutConfig) -> (HeapStore<i64>, LayoutResult) {
    let heap = HeapStore::new(values);
    let layout = layout_heap(&heap, config);
    (heap, layout)
}

/// Heapify, lay out and convert to the chart node/link collection.
pub fn materialize_values(values: Vec<i64>, config: &LayoutConfig) -> ChartGraph {
    let (heap, layout) = layout_values(values, config);
    materialize(&heap, &layout, config)
}

/// Parse a value list, lay it out and render the chart JSON document.
///
/// Geometry is checked up front, so a bad `config` is an `Error::Geometry`
/// here rather than a panic inside the layout.
pub fn render_values(
    src: &str,
    config: &LayoutConfig,
    options: &ChartOptions,
    pretty: bool,
) -> Result<String> {
    config.validate()?;
    let values = parse_values(src)?;
    let chart = materialize_values(values, config);
    ChartJsonRenderer::new(options.clone(), pretty).render(&chart)
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
