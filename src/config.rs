//! Configuration for the layout and chart pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Geometry knobs for a single layout run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal distance between adjacent offsets.
    pub step_x: f64,
    /// Vertical distance between depths.
    pub step_y: f64,
    /// X coordinate of offset 0.
    pub origin_x: f64,
    /// Y coordinate of depth 0.
    pub origin_y: f64,
    /// Cell size of the spatial index.
    pub spacing: f64,
    /// How far a colliding candidate moves per probe.
    pub probe_step: f64,
    /// Horizontal shifts allowed before the probe drops one row. None = unbounded.
    pub probe_limit: Option<usize>,
    /// Symbol size attached to every chart node.
    pub symbol_size: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            step_x: 10.0,
            step_y: 10.0,
            origin_x: 200.0,
            origin_y: 200.0,
            spacing: 1.0,
            probe_step: 10.0,
            probe_limit: None,
            symbol_size: 20,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the geometry can be laid out.
    ///
    /// Steps and origins must be finite, `spacing` and `probe_step` positive,
    /// and `probe_step` large enough to move a point away from either origin.
    /// A probe that cannot move would never find a free point.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("step_x", self.step_x),
            ("step_y", self.step_y),
            ("origin_x", self.origin_x),
            ("origin_y", self.origin_y),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(geometry(field, value, "must be finite"));
            }
        }

        for (field, value) in [("spacing", self.spacing), ("probe_step", self.probe_step)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(geometry(field, value, "must be positive and finite"));
            }
        }

        for (field, value) in [("origin_x", self.origin_x), ("origin_y", self.origin_y)] {
            if value + self.probe_step == value {
                return Err(geometry(field, value, "too large for probe_step to move a point"));
            }
        }
        Ok(())
    }
}

fn geometry(field: &'static str, value: f64, reason: &'static str) -> Error {
    Error::Geometry {
        field,
        value,
        reason,
    }
}

/// Display settings passed through to the chart consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: String,
    /// Layout mode understood by the chart ("force", "none", "circular").
    pub layout: String,
    /// Allow pan/zoom.
    pub roam: bool,
    pub repulsion: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "heap graph".to_string(),
            layout: "force".to_string(),
            roam: true,
            repulsion: 100.0,
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
