use log::{debug, info, warn};

use super::{ExtractOptions, ExtractionReport, MissingRttPolicy, PerfRecord, RttSeries};
use crate::RttPlotError;

/// Decodes a single log line. Anything that is not a JSON object with the
/// expected field types comes back as an error and is left to the caller.
pub fn parse_record(line: &str) -> Result<PerfRecord, serde_json::Error> {
    serde_json::from_str(line)
}

/// Builds the RTT series from raw log lines.
///
/// Lines that do not decode are skipped, as are records of any other event
/// type. Tracked records without an `rttMs` value are handled according to
/// `options.missing_rtt`. The series keeps the order of the source lines.
pub fn extract_rtt_series<I, S>(
    lines: I,
    options: &ExtractOptions,
) -> Result<(RttSeries, ExtractionReport), RttPlotError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut series = RttSeries::new();
    let mut report = ExtractionReport::default();

    for (i, line) in lines.into_iter().enumerate() {
        let line_no = i + 1;
        let line = line.as_ref();
        report.total_lines += 1;

        if line.trim().is_empty() {
            report.blank_lines += 1;
            continue;
        }

        let record = match parse_record(line) {
            Ok(record) => record,
            Err(e) => {
                debug!("Skipping line {}: {}", line_no, e);
                report.malformed_lines += 1;
                continue;
            }
        };

        if record.event_type.as_deref() != Some(options.event_type.as_str()) {
            report.ignored_records += 1;
            continue;
        }

        match (record.rtt_ms, options.missing_rtt) {
            (Some(rtt_ms), _) => series.push(rtt_ms, line_no, record.id),
            (None, MissingRttPolicy::Skip) => {
                warn!(
                    "'{}' record on line {} has no rttMs value, skipping",
                    options.event_type, line_no
                );
                report.missing_rtt += 1;
            }
            (None, MissingRttPolicy::Fail) => {
                return Err(RttPlotError::MissingRttValue { line_no });
            }
        }
    }

    report.extracted = series.len();
    info!(
        "Extracted {} '{}' samples from {} lines ({} malformed, {} other events, {} without rttMs)",
        report.extracted,
        options.event_type,
        report.total_lines,
        report.malformed_lines,
        report.ignored_records,
        report.missing_rtt
    );
    Ok((series, report))
}
