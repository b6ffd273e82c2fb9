// Chart configuration and axis layout for RTT plots

pub(crate) mod renderer;

pub use renderer::{RttPlotter, render_chart};

use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::RttPlotError;
use crate::perf_log::RttSeries;

/// Text, size and scaling of the rendered chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    /// Legend entry for the RTT series
    pub series_label: String,
    /// Image dimensions (width, height) in pixels
    pub size: (u32, u32),
    /// Added on top of the largest RTT to get the y-axis upper bound
    pub y_headroom_ms: f64,
    /// Radius of the point markers in pixels
    pub marker_size: u32,
    pub line_width: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Round-Trip Time for 100 Message Burst".to_string(),
            x_desc: "Message Index".to_string(),
            y_desc: "RTT (ms)".to_string(),
            series_label: "RTT (ms)".to_string(),
            size: (1000, 500),
            y_headroom_ms: 2.0,
            marker_size: 3,
            line_width: 2,
        }
    }
}

/// Image encodings the renderer can write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// Picks the encoding from the file extension, PNG unless it says svg
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

/// Coordinates and axis ranges of a chart, computed before anything is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub points: Vec<(f64, f64)>,
}

impl ChartLayout {
    /// Lays out `series` with the y-axis pinned to 0 at the bottom and
    /// `max + y_headroom_ms` at the top. A single sample still gets a
    /// one-unit wide x-axis.
    pub fn for_series(
        series: &RttSeries,
        config: &PlotConfig,
        event_type: &str,
    ) -> Result<Self, RttPlotError> {
        let max = series.max_rtt().ok_or_else(|| RttPlotError::NoDataToPlot {
            event_type: event_type.to_string(),
        })?;

        let upper = max + config.y_headroom_ms;
        if upper <= 0.0 {
            return Err(RttPlotError::InvalidAxisRange { upper });
        }

        let last_index = series.len().saturating_sub(1).max(1);
        Ok(Self {
            x_range: 0.0..last_index as f64,
            y_range: 0.0..upper,
            points: series.points().collect(),
        })
    }
}
