//! JSON chart document in the shape of an ECharts-style graph series.
//!
//! ```json
//! { "title": "heap graph",
//!   "series": [{ "type": "graph", "name": "graph", "layout": "force",
//!                "roam": true, "force": { "repulsion": 100.0 },
//!                "data": [...], "links": [...] }] }
//! ```

use serde::Serialize;

use super::Renderer;
use crate::chart::{ChartGraph, ChartLink, ChartNode};
use crate::config::ChartOptions;
use crate::error::Result;

#[derive(Serialize)]
struct Document<'a> {
    title: &'a str,
    series: [Series<'a>; 1],
}

#[derive(Serialize)]
struct Series<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'static str,
    layout: &'a str,
    roam: bool,
    force: Force,
    data: &'a [ChartNode],
    links: &'a [ChartLink],
}

#[derive(Serialize)]
struct Force {
    repulsion: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ChartJsonRenderer {
    pub options: ChartOptions,
    /// Indent the output.
    pub pretty: bool,
}

impl ChartJsonRenderer {
    pub fn new(options: ChartOptions, pretty: bool) -> Self {
        Self { options, pretty }
    }
}

impl Renderer for ChartJsonRenderer {
    fn render(&self, chart: &ChartGraph) -> Result<String> {
        let doc = Document {
            title: &self.options.title,
            series: [Series {
                kind: "graph",
                name: "graph",
                layout: &self.options.layout,
                roam: self.options.roam,
                force: Force {
                    repulsion: self.options.repulsion,
                },
                data: &chart.nodes,
                links: &chart.links,
            }],
        };
        let out = if self.pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_json.rs"]
mod tests;
