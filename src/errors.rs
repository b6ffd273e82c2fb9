// Error types for rttplot

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum RttPlotError {
    // Errors while reading the perf log
    #[snafu(display("Perf log not found: {path}"))]
    LogFileNotFound { path: String },
    #[snafu(display("Error reading perf log"))]
    LogReadError { source: io::Error },
    #[snafu(display("Tracked record on line {line_no} has no rttMs value"))]
    MissingRttValue { line_no: usize },

    // Errors for the sample export
    #[snafu(display("Error writing sample export file"))]
    ExportError { source: io::Error },

    // Chart rendering errors
    #[snafu(display("No data to plot: no '{event_type}' records with an rttMs value were found"))]
    NoDataToPlot { event_type: String },
    #[snafu(display("Invalid y-axis range: upper bound {upper} is not above 0"))]
    InvalidAxisRange { upper: f64 },
    #[snafu(display("Output directory does not exist: {path}"))]
    OutputDirectoryMissing { path: String },
    #[snafu(display("Plot rendering failed: {reason}"))]
    PlotRenderError { reason: String },

    // Config management errors
    #[snafu(display("Error reading config file {path}"))]
    ConfigIOError { path: String, source: io::Error },
    #[snafu(display("Error parsing config file {path}"))]
    ConfigParseError {
        path: String,
        source: serde_json::Error,
    },
}
