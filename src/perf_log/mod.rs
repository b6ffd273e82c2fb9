pub(crate) mod export;
pub(crate) mod extractor;
pub(crate) mod reader;

pub use export::write_samples_jsonl;
pub use extractor::extract_rtt_series;
pub use reader::read_log_lines;

use serde::{Deserialize, Serialize};

/// Event type the perf runner uses for relayed message round trips
pub const RELAY_EVENT_TYPE: &str = "relay";

/// One line of the client perf log. Every field the extractor looks at is
/// optional, anything else on the line is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PerfRecord {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    /// Round trip time in milliseconds, as measured by the sending client
    #[serde(rename = "rttMs")]
    pub rtt_ms: Option<f64>,
    /// Message id. The runner writes UUID strings but the value is kept as-is.
    pub id: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RttSample {
    /// Position in the series, also the x coordinate on the chart
    pub index: usize,
    /// 1-based line number in the source log
    pub line_no: usize,
    pub rtt_ms: f64,
    pub id: Option<serde_json::Value>,
}

/// RTT measurements in the order they appear in the log
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RttSeries {
    samples: Vec<RttSample>,
}

impl RttSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from bare values, numbering lines from 1
    pub fn from_values(values: &[f64]) -> Self {
        let mut series = Self::new();
        for (i, value) in values.iter().enumerate() {
            series.push(*value, i + 1, None);
        }
        series
    }

    pub fn push(&mut self, rtt_ms: f64, line_no: usize, id: Option<serde_json::Value>) {
        self.samples.push(RttSample {
            index: self.samples.len(),
            line_no,
            rtt_ms,
            id,
        });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[RttSample] {
        &self.samples
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.rtt_ms)
    }

    /// Chart coordinates: (index, rtt_ms)
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().map(|s| (s.index as f64, s.rtt_ms))
    }

    /// Largest RTT, `None` for an empty series
    pub fn max_rtt(&self) -> Option<f64> {
        self.values().max_by(|a, b| a.total_cmp(b))
    }
}

/// What to do with a tracked record that carries no `rttMs` value
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MissingRttPolicy {
    /// Log a warning and leave the record out of the series
    #[default]
    Skip,
    /// Abort the extraction
    Fail,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractOptions {
    pub event_type: String,
    pub missing_rtt: MissingRttPolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            event_type: RELAY_EVENT_TYPE.to_string(),
            missing_rtt: MissingRttPolicy::Skip,
        }
    }
}

/// Line accounting for a single extraction run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub total_lines: usize,
    pub blank_lines: usize,
    pub malformed_lines: usize,
    pub ignored_records: usize,
    pub missing_rtt: usize,
    pub extracted: usize,
}
