use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::RttPlotError;

/// Reads the whole perf log into memory, one entry per line
pub fn read_log_lines(source_file: &Path) -> Result<Vec<String>, RttPlotError> {
    if !source_file.exists() {
        return Err(RttPlotError::LogFileNotFound {
            path: source_file.display().to_string(),
        });
    }

    let file = File::open(source_file).map_err(|e| RttPlotError::LogReadError { source: e })?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<String>, std::io::Error>>()
        .map_err(|e| RttPlotError::LogReadError { source: e })?;

    debug!("Read {} lines from {:?}", lines.len(), source_file);
    Ok(lines)
}
