use std::path::PathBuf;

use clap::Parser;
use log::error;
use rttplot::pipeline::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use rttplot::{AppConfig, MissingRttPolicy, RttPlotError, RunConfig, RunSummary};
use snafu::Report;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Newline-delimited JSON perf log written by the client perf runner
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Chart image to write, .svg renders SVG and anything else PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// JSON config file with chart and extraction settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write the extracted samples as JSON lines
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Event type to extract round trip times from
    #[arg(long)]
    event_type: Option<String>,

    /// Fail when a tracked record has no rttMs value instead of skipping it
    #[arg(long)]
    strict: bool,
}

fn plot(args: Args) -> Result<RunSummary, RttPlotError> {
    let mut app = AppConfig::load(args.config.as_deref())?;
    if let Some(event_type) = args.event_type {
        app.extract.event_type = event_type;
    }
    if args.strict {
        app.extract.missing_rtt = MissingRttPolicy::Fail;
    }

    rttplot::run(&RunConfig {
        input: args.input,
        output: args.output,
        export: args.export,
        app,
    })
}

fn main() {
    colog::init();

    let args = Args::parse();
    match plot(args) {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            error!("{}", Report::from_error(e));
            std::process::exit(1);
        }
    }
}
