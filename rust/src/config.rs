//! Configuration types for the disk scheduler.

use serde::Serialize;

use crate::logging::{clamp_verbosity, VERBOSITY_SILENT};
use crate::models::Track;

/// Requests served when the program is run without arguments.
pub const DEFAULT_REQUESTS: [Track; 9] = [55, 58, 39, 18, 90, 160, 150, 38, 184];
/// Arm position used when the program is run without arguments.
pub const DEFAULT_START: Track = 100;
/// Number of tracks used when the program is run without arguments.
pub const DEFAULT_TRACK_COUNT: Track = 200;

/// Settings shared by every policy computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchedulingConfig {
    /// Number of tracks on the disk; valid tracks are `0..track_count`.
    /// Required by SCAN and C-SCAN, validated for every policy when present.
    pub track_count: Option<Track>,
    /// Verbosity level: 0=silent, 1=moves, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            track_count: None,
            verbosity: VERBOSITY_SILENT,
        }
    }
}

impl SchedulingConfig {
    pub fn with_track_count(mut self, track_count: Track) -> Self {
        self.track_count = Some(track_count);
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = clamp_verbosity(verbosity);
        self
    }
}

/// One set of inputs: what was requested, where the arm starts, and the disk size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Workload {
    pub requests: Vec<Track>,
    pub start: Track,
    pub track_count: Track,
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            requests: DEFAULT_REQUESTS.to_vec(),
            start: DEFAULT_START,
            track_count: DEFAULT_TRACK_COUNT,
        }
    }
}

impl Workload {
    /// Scheduling configuration bound to this workload's disk size.
    pub fn config(&self, verbosity: u8) -> SchedulingConfig {
        SchedulingConfig::default()
            .with_track_count(self.track_count)
            .with_verbosity(verbosity)
    }
}
