use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, IsTerminal};

use disk_sched::input::parse_track;
use disk_sched::logging::clamp_verbosity;
use disk_sched::report::report_all;
use disk_sched::{
    parse_requests, DiskScheduler, JsonReporter, Policy, Reporter, TextReporter, Workload,
};

#[derive(Parser, Debug)]
#[command(
    name = "disk-scheduling-policies",
    about = "Disk-arm visit order and seek distance under classic scheduling policies",
    long_about = "Disk-arm visit order and seek distance under classic scheduling policies.\n\n\
                  Run without arguments to use the built-in example, or pass all three of \
                  <REQUESTS> <START> <TRACK_COUNT>.",
    version,
    allow_negative_numbers = true
)]
struct Cli {
    /// Requested tracks, whitespace-separated (e.g. "55 58 39 18")
    #[arg(requires = "start")]
    requests: Option<String>,
    /// Track the arm starts on
    #[arg(requires = "track_count")]
    start: Option<String>,
    /// Number of tracks on the disk
    track_count: Option<String>,

    /// Only run the given policies (repeatable; default: all)
    #[arg(short, long = "policy", value_name = "POLICY")]
    policies: Vec<Policy>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// ANSI highlighting of text output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
    /// Diagnostic output on stderr (-v moves, -vv checks, -vvv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl Cli {
    /// The workload given on the command line, or `None` when no positional
    /// arguments were passed.
    fn workload(&self) -> anyhow::Result<Option<Workload>> {
        let (Some(requests), Some(start), Some(track_count)) =
            (&self.requests, &self.start, &self.track_count)
        else {
            return Ok(None);
        };
        Ok(Some(Workload {
            requests: parse_requests(requests).context("invalid requests")?,
            start: parse_track(start).context("invalid starting location")?,
            track_count: parse_track(track_count).context("invalid number of tracks")?,
        }))
    }

    fn policies(&self) -> Vec<Policy> {
        if self.policies.is_empty() {
            Policy::ALL.to_vec()
        } else {
            self.policies.clone()
        }
    }

    fn use_color(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => io::stdout().is_terminal(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let verbosity = clamp_verbosity(cli.verbose);

    let workload = match cli.workload()? {
        Some(workload) => workload,
        None => {
            let notice = "No arguments passed, using default values.";
            match cli.format {
                OutputFormat::Text => println!("{notice}"),
                OutputFormat::Json => eprintln!("{notice}"),
            }
            Workload::default()
        }
    };

    let scheduler = DiskScheduler::new(workload.config(verbosity));
    let schedules = scheduler
        .schedule_policies(&cli.policies(), workload.start, &workload.requests)
        .context("failed to compute schedules")?;

    let stdout = io::stdout().lock();
    let mut reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Text => Box::new(TextReporter::new(stdout, cli.use_color())),
        OutputFormat::Json => Box::new(JsonReporter::new(stdout)),
    };
    report_all(reporter.as_mut(), &workload, &schedules).context("failed to write report")?;

    Ok(())
}
