//! WASM bindings for heap-layout.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::{ChartOptions, LayoutConfig};

/// Lay out a value list with default settings and return the chart JSON.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    crate::render_values(src, &LayoutConfig::default(), &ChartOptions::default(), false)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out a value list with explicit geometry.
///
/// - `step`: horizontal and vertical distance between offsets/depths
/// - `title`: chart title, empty string for the default
/// - `pretty`: indent the JSON
///
/// A non-finite `step` fails geometry validation and comes back as a `JsError`.
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(
    src: &str,
    step: f64,
    title: &str,
    pretty: bool,
) -> Result<String, JsError> {
    let config = LayoutConfig {
        step_x: step,
        step_y: step,
        ..LayoutConfig::default()
    };
    let mut options = ChartOptions::default();
    if !title.is_empty() {
        options.title = title.to_string();
    }
    crate::render_values(src, &config, &options, pretty).map_err(|e| JsError::new(&e.to_string()))
}
