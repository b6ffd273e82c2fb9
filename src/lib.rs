// Library interface for rttplot
// This allows integration tests and benches to access internal modules

pub mod config;
pub mod errors;
pub mod perf_log;
pub mod pipeline;
pub mod plot;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::RttPlotError;
pub use perf_log::{ExtractOptions, ExtractionReport, MissingRttPolicy, RttSample, RttSeries};
pub use pipeline::{RunConfig, RunSummary, run};
pub use plot::{ChartLayout, PlotConfig, RttPlotter};
