// Read, extract, export and render in one pass

use std::fmt;
use std::path::{Path, PathBuf};

use log::info;

use crate::RttPlotError;
use crate::config::AppConfig;
use crate::perf_log::{
    ExtractOptions, ExtractionReport, RttSeries, extract_rtt_series, read_log_lines,
    write_samples_jsonl,
};
use crate::plot::RttPlotter;

pub const DEFAULT_INPUT_FILE: &str = "perf_client_cli.log";
pub const DEFAULT_OUTPUT_FILE: &str = "rtt_plot.png";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Optional JSON lines dump of the extracted samples
    pub export: Option<PathBuf>,
    pub app: AppConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            export: None,
            app: AppConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub samples: usize,
    pub report: ExtractionReport,
}

// the confirmation line printed after a successful save
impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Saved plot as {}", self.output.display())
    }
}

/// Reads the log at `input` and extracts the RTT series from it
pub fn load_series(
    input: &Path,
    options: &ExtractOptions,
) -> Result<(RttSeries, ExtractionReport), RttPlotError> {
    let lines = read_log_lines(input)?;
    extract_rtt_series(&lines, options)
}

/// Runs the whole pipeline. Nothing is written when the log holds no samples
/// of the tracked event type.
pub fn run(config: &RunConfig) -> Result<RunSummary, RttPlotError> {
    let options = &config.app.extract;
    let (series, report) = load_series(&config.input, options)?;

    if series.is_empty() {
        return Err(RttPlotError::NoDataToPlot {
            event_type: options.event_type.clone(),
        });
    }

    if let Some(export) = &config.export {
        write_samples_jsonl(&series, export)?;
    }

    RttPlotter::new(config.app.plot.clone())
        .with_event_type(options.event_type.clone())
        .render_to_file(&series, &config.output)?;

    info!(
        "Plotted {} samples from {:?}",
        series.len(),
        config.input
    );
    Ok(RunSummary {
        output: config.output.clone(),
        samples: series.len(),
        report,
    })
}
