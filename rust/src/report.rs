//! Presentation of computed schedules.
//!
//! The scheduler only returns [`Schedule`] values; everything about how they
//! are shown (text layout, ANSI highlighting, JSON) lives behind [`Reporter`].

use serde::Serialize;
use std::io::{self, Write};

use crate::config::Workload;
use crate::input::format_requests;
use crate::models::Schedule;

const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Sink for scheduling results.
pub trait Reporter {
    /// Called once, before any schedule.
    fn workload(&mut self, workload: &Workload) -> io::Result<()>;

    /// Called once per computed schedule, in policy order.
    fn schedule(&mut self, schedule: &Schedule) -> io::Result<()>;

    /// Called after the last schedule.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Feed a workload and its schedules through `reporter`.
pub fn report_all(
    reporter: &mut dyn Reporter,
    workload: &Workload,
    schedules: &[Schedule],
) -> io::Result<()> {
    reporter.workload(workload)?;
    for schedule in schedules {
        reporter.schedule(schedule)?;
    }
    reporter.finish()
}

/// Human-readable report, one block per policy.
pub struct TextReporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, style: &str, text: impl std::fmt::Display) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn workload(&mut self, workload: &Workload) -> io::Result<()> {
        writeln!(
            self.out,
            "Locations requested: {}",
            format_requests(&workload.requests)
        )?;
        writeln!(self.out, "Starting location: {}", workload.start)?;
        writeln!(self.out, "Number of tracks: {}", workload.track_count)?;
        writeln!(self.out)
    }

    fn schedule(&mut self, schedule: &Schedule) -> io::Result<()> {
        let name = self.paint(&format!("{BOLD}{CYAN}"), schedule.policy);
        let total = self.paint(BOLD, schedule.total_distance);
        writeln!(self.out, "{} order: {:?}", name, schedule.order)?;
        writeln!(self.out, "Sum of distances: {}", total)?;
        writeln!(
            self.out,
            "Average tracks traversed per request: {:.6}",
            schedule.average_distance
        )?;
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    workload: Option<&'a Workload>,
    schedules: &'a [Schedule],
}

/// Machine-readable report written as one JSON document on `finish`.
pub struct JsonReporter<W: Write> {
    out: W,
    workload: Option<Workload>,
    schedules: Vec<Schedule>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            workload: None,
            schedules: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn workload(&mut self, workload: &Workload) -> io::Result<()> {
        self.workload = Some(workload.clone());
        Ok(())
    }

    fn schedule(&mut self, schedule: &Schedule) -> io::Result<()> {
        self.schedules.push(schedule.clone());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        let report = JsonReport {
            workload: self.workload.as_ref(),
            schedules: &self.schedules,
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SchedulingConfig, Workload};
    use crate::models::Policy;
    use crate::scheduler::DiskScheduler;

    fn default_schedules(workload: &Workload, policies: &[Policy]) -> Vec<Schedule> {
        DiskScheduler::new(workload.config(0))
            .schedule_policies(policies, workload.start, &workload.requests)
            .unwrap()
    }

    #[test]
    fn test_text_report_layout() {
        let workload = Workload::default();
        let schedules = default_schedules(&workload, &[Policy::Fifo]);

        let mut reporter = TextReporter::new(Vec::new(), false);
        report_all(&mut reporter, &workload, &schedules).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        let expected = "\
Locations requested: 55 58 39 18 90 160 150 38 184
Starting location: 100
Number of tracks: 200

FIFO order: [100, 55, 58, 39, 18, 90, 160, 150, 38, 184]
Sum of distances: 498
Average tracks traversed per request: 55.333333

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_report_color_wraps_policy_name() {
        let workload = Workload::default();
        let schedules = default_schedules(&workload, &[Policy::CScan]);

        let mut reporter = TextReporter::new(Vec::new(), true);
        report_all(&mut reporter, &workload, &schedules).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(text.contains("\x1b[1m\x1b[36mC-SCAN\x1b[0m order: [100, 150"));
        assert!(text.contains("Sum of distances: \x1b[1m388\x1b[0m"));
    }

    #[test]
    fn test_text_report_zero_requests() {
        let workload = Workload {
            requests: vec![],
            start: 5,
            track_count: 10,
        };
        let config = SchedulingConfig::default().with_track_count(10);
        let schedules = DiskScheduler::new(config)
            .schedule_policies(&[Policy::Look], 5, &[])
            .unwrap();

        let mut reporter = TextReporter::new(Vec::new(), false);
        report_all(&mut reporter, &workload, &schedules).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(text.starts_with("Locations requested: \n"));
        assert!(text.contains("LOOK order: [5]\n"));
        assert!(text.contains("Average tracks traversed per request: 0.000000\n"));
    }

    #[test]
    fn test_json_report() {
        let workload = Workload::default();
        let schedules = default_schedules(&workload, &Policy::ALL);

        let mut reporter = JsonReporter::new(Vec::new());
        report_all(&mut reporter, &workload, &schedules).unwrap();
        let bytes = reporter.into_inner();

        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["workload"]["start"], 100);
        assert_eq!(value["workload"]["track_count"], 200);
        let reported = value["schedules"].as_array().unwrap();
        assert_eq!(reported.len(), 6);
        assert_eq!(reported[0]["policy"], "FIFO");
        assert_eq!(reported[0]["total_distance"], 498);
        assert_eq!(reported[3]["policy"], "C-SCAN");
        assert_eq!(reported[3]["order"][4], 199);
        assert_eq!(reported[5]["requested_count"], 9);
    }
}
