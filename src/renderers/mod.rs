//! Renderer trait and chart document renderers.

pub mod json;

pub use json::ChartJsonRenderer;

use crate::chart::ChartGraph;
use crate::error::Result;

/// Turns a chart graph into a document for a downstream consumer.
pub trait Renderer {
    fn render(&self, chart: &ChartGraph) -> Result<String>;
}
