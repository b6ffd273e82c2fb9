// Integration tests for the log-to-chart pipeline
//
// These go through the public API with real files on disk. The renderer unit
// tests cover what gets drawn; the tests here check what lands in the files.

use std::io::Write;
use std::path::Path;

use rttplot::pipeline::load_series;
use rttplot::{
    AppConfig, ChartLayout, ExtractOptions, MissingRttPolicy, PlotConfig, RttPlotError,
    RttPlotter, RttSeries, RunConfig, RunSummary, run,
};
use tempfile::TempDir;

fn write_log(dir: &Path, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.join("perf_client_cli.log");
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}

#[test]
fn test_mixed_log_extracts_relay_samples() {
    let dir = TempDir::new().unwrap();
    let log = write_log(
        dir.path(),
        &[
            r#"{"type":"relay","rttMs":10}"#,
            r#"{"type":"other","rttMs":5}"#,
            "not json",
            r#"{"type":"relay","rttMs":20}"#,
        ],
    );

    let (series, report) = load_series(&log, &ExtractOptions::default()).unwrap();
    assert_eq!(series.values().collect::<Vec<_>>(), vec![10.0, 20.0]);
    assert_eq!(report.malformed_lines, 1);
    assert_eq!(report.ignored_records, 1);

    let layout = ChartLayout::for_series(&series, &PlotConfig::default(), "relay").unwrap();
    assert_eq!(layout.y_range, 0.0..22.0);
}

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

const SCENARIO_LOG: [&str; 4] = [
    r#"{"type":"relay","rttMs":10}"#,
    r#"{"type":"other","rttMs":5}"#,
    "not json",
    r#"{"type":"relay","rttMs":20}"#,
];

#[test]
fn test_scenario_log_renders_png() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig {
        input: write_log(dir.path(), &SCENARIO_LOG),
        output: dir.path().join("rtt_plot.png"),
        export: Some(dir.path().join("samples.jsonl")),
        ..Default::default()
    };

    let summary = run(&config).unwrap();
    assert!(matches!(summary, RunSummary { samples: 2, .. }));
    assert_eq!(summary.report.malformed_lines, 1);
    assert_eq!(summary.report.ignored_records, 1);
    assert_eq!(
        summary.to_string(),
        format!("Saved plot as {}", config.output.display())
    );

    let first = std::fs::read(&config.output).unwrap();
    assert!(first.starts_with(&PNG_SIGNATURE));

    let exported = std::fs::read_to_string(dir.path().join("samples.jsonl")).unwrap();
    assert_eq!(exported.lines().count(), 2);

    // the second run overwrites the chart with the same image
    let second_summary = run(&config).unwrap();
    assert_eq!(second_summary, summary);
    let second = std::fs::read(&config.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_existing_output_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("rtt_plot.png");
    std::fs::write(&output, b"stale chart").unwrap();

    let config = RunConfig {
        input: write_log(dir.path(), &SCENARIO_LOG),
        output: output.clone(),
        ..Default::default()
    };
    run(&config).unwrap();

    assert!(std::fs::read(&output).unwrap().starts_with(&PNG_SIGNATURE));
}

#[test]
fn test_svg_extension_renders_svg() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.svg");
    let config = PlotConfig {
        title: "Relay burst RTT".to_string(),
        ..Default::default()
    };

    RttPlotter::new(config)
        .render_to_file(&RttSeries::from_values(&[10.0, 20.0]), &output)
        .unwrap();

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Relay burst RTT"));
}

#[test]
fn test_loading_twice_gives_the_same_series() {
    let dir = TempDir::new().unwrap();
    let log = write_log(
        dir.path(),
        &[
            r#"{"type":"relay","rttMs":31,"id":"a"}"#,
            r#"{"type":"relay","rttMs":12,"id":"b"}"#,
            r#"{"type":"relay","rttMs":18,"id":"c"}"#,
        ],
    );

    let first = load_series(&log, &ExtractOptions::default()).unwrap();
    let second = load_series(&log, &ExtractOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_log_file() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig {
        input: dir.path().join("perf_client_cli.log"),
        output: dir.path().join("rtt_plot.png"),
        ..Default::default()
    };

    assert!(matches!(
        run(&config),
        Err(RttPlotError::LogFileNotFound { .. })
    ));
    assert!(!config.output.exists());
}

#[test]
fn test_empty_log_reports_no_data_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig {
        input: write_log(dir.path(), &[]),
        output: dir.path().join("rtt_plot.png"),
        export: Some(dir.path().join("samples.jsonl")),
        ..Default::default()
    };

    match run(&config) {
        Err(RttPlotError::NoDataToPlot { event_type }) => assert_eq!(event_type, "relay"),
        other => panic!("Expected NoDataToPlot, got {:?}", other),
    }
    assert!(!config.output.exists());
    assert!(!dir.path().join("samples.jsonl").exists());
}

#[test]
fn test_log_without_relay_records_reports_no_data() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig {
        input: write_log(
            dir.path(),
            &[
                r#"{"type":"connect","rttMs":3}"#,
                r#"{"type":"ack","rttMs":4}"#,
            ],
        ),
        output: dir.path().join("rtt_plot.png"),
        ..Default::default()
    };

    assert!(matches!(
        run(&config),
        Err(RttPlotError::NoDataToPlot { .. })
    ));
}

#[test]
fn test_strict_mode_fails_on_missing_rtt() {
    let dir = TempDir::new().unwrap();
    let mut app = AppConfig::default();
    app.extract.missing_rtt = MissingRttPolicy::Fail;

    let config = RunConfig {
        input: write_log(
            dir.path(),
            &[r#"{"type":"relay","rttMs":10}"#, r#"{"type":"relay","id":"lost"}"#],
        ),
        output: dir.path().join("rtt_plot.png"),
        export: None,
        app,
    };

    match run(&config) {
        Err(RttPlotError::MissingRttValue { line_no }) => assert_eq!(line_no, 2),
        other => panic!("Expected MissingRttValue, got {:?}", other),
    }
    assert!(!config.output.exists());
}

#[test]
fn test_missing_output_directory_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig {
        input: write_log(dir.path(), &[r#"{"type":"relay","rttMs":10}"#]),
        output: dir.path().join("charts").join("rtt_plot.png"),
        ..Default::default()
    };

    assert!(matches!(
        run(&config),
        Err(RttPlotError::OutputDirectoryMissing { .. })
    ));
}
