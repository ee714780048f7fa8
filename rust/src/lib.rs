//! Disk-arm scheduling policies.
//!
//! Given a starting arm position and a list of requested tracks, computes the
//! order in which the arm visits tracks under FIFO, SSTF, SCAN, C-SCAN, LOOK
//! and C-LOOK, along with the total and average seek distance.
//!
//! ```
//! use disk_sched::{DiskScheduler, Policy, SchedulingConfig};
//!
//! let scheduler = DiskScheduler::new(SchedulingConfig::default().with_track_count(200));
//! let schedule = scheduler
//!     .schedule(Policy::Look, 100, &[55, 58, 39, 18, 90, 160, 150, 38, 184])
//!     .unwrap();
//! assert_eq!(schedule.order, vec![100, 150, 160, 184, 90, 58, 55, 39, 38, 18]);
//! assert_eq!(schedule.total_distance, 250);
//! ```

// Allow clippy warning triggered by PyO3 macro expansion
#![cfg_attr(feature = "python", allow(clippy::useless_conversion))]

pub mod config;
pub mod distance;
pub mod input;
pub mod logging;
mod models;
pub mod report;
pub mod scheduler;

#[cfg(feature = "python")]
mod python;

pub use config::{SchedulingConfig, Workload};
pub use distance::{average_distance, total_distance};
pub use input::{parse_requests, parse_track, InputError};
pub use models::{Policy, Schedule, Track};
pub use report::{JsonReporter, Reporter, TextReporter};
pub use scheduler::{schedule, DiskScheduler, ScheduleError};
