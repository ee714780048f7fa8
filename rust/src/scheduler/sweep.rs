//! Sweeping policies: SCAN, LOOK, C-SCAN and C-LOOK.
//!
//! All four start by moving the arm upward from the starting location. They
//! differ in whether the arm travels to the physical ends of the disk and in
//! how it gets back to the requests below the start:
//!
//! | policy | goes to last track | return path                    |
//! |--------|--------------------|--------------------------------|
//! | SCAN   | yes                | sweep down to track 0          |
//! | LOOK   | no                 | sweep down to lowest request   |
//! | C-SCAN | yes                | jump to track 0, sweep up      |
//! | C-LOOK | no                 | jump to lowest request, sweep up |

use crate::config::SchedulingConfig;
use crate::log_checks;
use crate::log_debug;
use crate::models::{Policy, Track};

use super::core::{check_locations, ScheduleError};
use super::rank::{sorted, Rank};

/// Requests split around the starting location.
struct Split {
    start: Track,
    /// Requests above the start, ascending
    above: Vec<Track>,
    /// Requests below the start, ascending
    below: Vec<Track>,
}

impl Split {
    fn new(
        policy: Policy,
        locations: &[Track],
        config: &SchedulingConfig,
    ) -> Result<Self, ScheduleError> {
        let start = check_locations(policy, locations, config)?;
        let requests = sorted(&locations[1..]);
        let rank = Rank::locate(&requests, start);
        log_debug!(
            config.verbosity,
            "[{}] sorted={:?} start={} rank={:?}",
            policy,
            requests,
            start,
            rank
        );
        if rank.duplicates() > 0 {
            log_checks!(
                config.verbosity,
                "[{}] {} request(s) at start {} served in place",
                policy,
                rank.duplicates(),
                start
            );
        }

        let split = Self {
            start,
            above: requests[rank.upper..].to_vec(),
            below: requests[..rank.lower].to_vec(),
        };
        log_checks!(
            config.verbosity,
            "[{}] above={:?} below={:?}",
            policy,
            split.above,
            split.below
        );
        Ok(split)
    }

    /// Starting location followed by the upward pass.
    fn upward(&self) -> Vec<Track> {
        let mut order = Vec::with_capacity(self.above.len() + self.below.len() + 3);
        order.push(self.start);
        order.extend_from_slice(&self.above);
        order
    }
}

/// Append a forced visit to a disk end unless the arm already stands on it.
fn push_boundary(order: &mut Vec<Track>, track: Track, policy: Policy, verbosity: u8) {
    if order.last() != Some(&track) {
        log_checks!(verbosity, "[{}] boundary visit to track {}", policy, track);
        order.push(track);
    }
}

fn last_track(policy: Policy, config: &SchedulingConfig) -> Result<Track, ScheduleError> {
    config
        .track_count
        .map(|count| count - 1)
        .ok_or(ScheduleError::MissingTrackCount { policy })
}

/// SCAN: up to the last track, then down to track 0.
///
/// Both ends are always visited, even when nothing was requested there.
pub fn scan_order(
    locations: &[Track],
    config: &SchedulingConfig,
) -> Result<Vec<Track>, ScheduleError> {
    let policy = Policy::Scan;
    let split = Split::new(policy, locations, config)?;
    let end = last_track(policy, config)?;

    let mut order = split.upward();
    push_boundary(&mut order, end, policy, config.verbosity);
    order.extend(split.below.iter().rev());
    push_boundary(&mut order, 0, policy, config.verbosity);
    Ok(order)
}

/// LOOK: like SCAN, but reverse at the last pending request.
pub fn look_order(
    locations: &[Track],
    config: &SchedulingConfig,
) -> Result<Vec<Track>, ScheduleError> {
    let split = Split::new(Policy::Look, locations, config)?;

    let mut order = split.upward();
    order.extend(split.below.iter().rev());
    Ok(order)
}

/// C-SCAN: up to the last track, jump to track 0, then up through the rest.
///
/// The jump from the last track to track 0 is a real arm movement and is part
/// of the visit order.
pub fn cscan_order(
    locations: &[Track],
    config: &SchedulingConfig,
) -> Result<Vec<Track>, ScheduleError> {
    let policy = Policy::CScan;
    let split = Split::new(policy, locations, config)?;
    let end = last_track(policy, config)?;

    let mut order = split.upward();
    push_boundary(&mut order, end, policy, config.verbosity);
    // A request for track 0 doubles as the wrap target.
    if split.below.first() != Some(&0) {
        push_boundary(&mut order, 0, policy, config.verbosity);
    }
    order.extend_from_slice(&split.below);
    Ok(order)
}

/// C-LOOK: up through the requests above the start, then jump to the lowest
/// pending request and continue upward.
pub fn clook_order(
    locations: &[Track],
    config: &SchedulingConfig,
) -> Result<Vec<Track>, ScheduleError> {
    let split = Split::new(Policy::CLook, locations, config)?;

    let mut order = split.upward();
    order.extend_from_slice(&split.below);
    Ok(order)
}
