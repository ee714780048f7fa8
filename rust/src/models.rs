//! Core data types for disk scheduling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::input::InputError;

/// A track index on the disk.
pub type Track = u32;

/// Disk-scheduling policy selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First In First Out
    #[serde(rename = "FIFO")]
    Fifo,
    /// Shortest Seek Time First
    #[serde(rename = "SSTF")]
    Sstf,
    /// Sweep up to the last track, then down to track 0
    #[serde(rename = "SCAN")]
    Scan,
    /// Sweep up to the last track, then wrap to track 0 and sweep up again
    #[serde(rename = "C-SCAN")]
    CScan,
    /// SCAN reversing at the last pending request
    #[serde(rename = "LOOK")]
    Look,
    /// C-SCAN wrapping from the highest to the lowest pending request
    #[serde(rename = "C-LOOK")]
    CLook,
}

impl Policy {
    /// Every policy, in reporting order.
    pub const ALL: [Policy; 6] = [
        Policy::Fifo,
        Policy::Sstf,
        Policy::Scan,
        Policy::CScan,
        Policy::Look,
        Policy::CLook,
    ];

    /// Display name, e.g. `"C-SCAN"`.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Sstf => "SSTF",
            Policy::Scan => "SCAN",
            Policy::CScan => "C-SCAN",
            Policy::Look => "LOOK",
            Policy::CLook => "C-LOOK",
        }
    }

    /// Whether the policy sweeps across the disk and therefore cannot run
    /// without a track count.
    pub fn requires_track_count(self) -> bool {
        matches!(
            self,
            Policy::Scan | Policy::CScan | Policy::Look | Policy::CLook
        )
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match normalized.as_str() {
            "FIFO" => Ok(Policy::Fifo),
            "SSTF" => Ok(Policy::Sstf),
            "SCAN" => Ok(Policy::Scan),
            "CSCAN" => Ok(Policy::CScan),
            "LOOK" => Ok(Policy::Look),
            "CLOOK" => Ok(Policy::CLook),
            _ => Err(InputError::UnknownPolicy(s.to_string())),
        }
    }
}

/// The outcome of running one policy over one workload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Schedule {
    pub policy: Policy,
    /// Arm position before the first request is served
    pub start: Track,
    /// Visited tracks, beginning with `start`, including any forced boundary visits
    pub order: Vec<Track>,
    /// Number of originally requested tracks (excludes `start` and boundary visits)
    pub requested_count: usize,
    /// Sum of seek distances along `order`
    pub total_distance: u64,
    /// `total_distance / requested_count`, or 0 when nothing was requested
    pub average_distance: f64,
}

impl Schedule {
    /// Tracks visited after the starting location.
    pub fn visits(&self) -> &[Track] {
        self.order.get(1..).unwrap_or(&[])
    }
}
