use std::path::Path;

use log::info;

use super::RttSeries;
use crate::RttPlotError;

/// Writes the extracted samples as JSON lines, one object per sample
pub fn write_samples_jsonl(series: &RttSeries, file: &Path) -> Result<(), RttPlotError> {
    serde_jsonlines::write_json_lines(file, series.samples())
        .map_err(|e| RttPlotError::ExportError { source: e })?;
    info!("Exported {} samples to {:?}", series.len(), file);
    Ok(())
}
