//! Core disk scheduler: input validation and policy dispatch.

use thiserror::Error;

use crate::config::SchedulingConfig;
use crate::distance::{average_distance, total_distance};
use crate::log_moves;
use crate::models::{Policy, Schedule, Track};

use super::seek::{fifo_order, sstf_order};
use super::sweep::{clook_order, cscan_order, look_order, scan_order};

/// Errors that can occur during scheduling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("{policy} requires the number of tracks")]
    MissingTrackCount { policy: Policy },
    #[error("Number of tracks must be positive")]
    InvalidTrackCount,
    #[error("Track {track} is outside a disk of {track_count} tracks")]
    TrackOutOfRange { track: Track, track_count: Track },
    #[error("At least one location (the starting location) is required")]
    EmptyLocations,
}

/// Validate the inputs shared by every policy and return the starting location.
///
/// `locations[0]` is the starting location, the rest are the requests.
pub(crate) fn check_locations(
    policy: Policy,
    locations: &[Track],
    config: &SchedulingConfig,
) -> Result<Track, ScheduleError> {
    let (&start, _) = locations
        .split_first()
        .ok_or(ScheduleError::EmptyLocations)?;

    match config.track_count {
        None if policy.requires_track_count() => {
            Err(ScheduleError::MissingTrackCount { policy })
        }
        None => Ok(start),
        Some(0) => Err(ScheduleError::InvalidTrackCount),
        Some(track_count) => {
            let highest = locations.iter().copied().max().unwrap_or(start);
            if highest >= track_count {
                return Err(ScheduleError::TrackOutOfRange {
                    track: highest,
                    track_count,
                });
            }
            Ok(start)
        }
    }
}

/// Visit order for `policy` over `locations` (starting location first).
pub fn policy_order(
    policy: Policy,
    locations: &[Track],
    config: &SchedulingConfig,
) -> Result<Vec<Track>, ScheduleError> {
    match policy {
        Policy::Fifo => fifo_order(locations, config),
        Policy::Sstf => sstf_order(locations, config),
        Policy::Scan => scan_order(locations, config),
        Policy::CScan => cscan_order(locations, config),
        Policy::Look => look_order(locations, config),
        Policy::CLook => clook_order(locations, config),
    }
}

/// Disk-arm scheduler over a fixed configuration.
///
/// Stateless apart from its configuration: every call is an independent,
/// deterministic computation.
#[derive(Clone, Debug, Default)]
pub struct DiskScheduler {
    config: SchedulingConfig,
}

impl DiskScheduler {
    pub fn new(config: SchedulingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }

    /// Run one policy with the arm at `start` and return the visit order
    /// together with its distances.
    pub fn schedule(
        &self,
        policy: Policy,
        start: Track,
        requests: &[Track],
    ) -> Result<Schedule, ScheduleError> {
        let mut locations = Vec::with_capacity(requests.len() + 1);
        locations.push(start);
        locations.extend_from_slice(requests);

        let order = policy_order(policy, &locations, &self.config)?;
        let total = total_distance(&order);
        let average = average_distance(total, requests.len());

        log_moves!(
            self.config.verbosity,
            "[{}] {} visits, total distance {}, average {:.6}",
            policy,
            order.len(),
            total,
            average
        );

        Ok(Schedule {
            policy,
            start,
            order,
            requested_count: requests.len(),
            total_distance: total,
            average_distance: average,
        })
    }

    /// Run each of `policies` in turn. Fails on the first policy that fails.
    pub fn schedule_policies(
        &self,
        policies: &[Policy],
        start: Track,
        requests: &[Track],
    ) -> Result<Vec<Schedule>, ScheduleError> {
        policies
            .iter()
            .map(|&policy| self.schedule(policy, start, requests))
            .collect()
    }

    /// Run every policy, in `Policy::ALL` order.
    pub fn schedule_all(
        &self,
        start: Track,
        requests: &[Track],
    ) -> Result<Vec<Schedule>, ScheduleError> {
        self.schedule_policies(&Policy::ALL, start, requests)
    }
}

/// One-shot scheduling without building a [`DiskScheduler`].
pub fn schedule(
    policy: Policy,
    start: Track,
    requests: &[Track],
    track_count: Option<Track>,
) -> Result<Schedule, ScheduleError> {
    let config = SchedulingConfig {
        track_count,
        ..SchedulingConfig::default()
    };
    DiskScheduler::new(config).schedule(policy, start, requests)
}
