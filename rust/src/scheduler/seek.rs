//! Policies that serve requests without sweeping: FIFO and SSTF.

use crate::config::SchedulingConfig;
use crate::distance::seek_distance;
use crate::models::{Policy, Track};
use crate::{log_checks, log_debug};

use super::core::{check_locations, ScheduleError};
use super::rank::{sorted, Rank};

/// First In First Out: requests are served in arrival order.
///
/// `locations[0]` is the starting location.
pub fn fifo_order(
    locations: &[Track],
    config: &SchedulingConfig,
) -> Result<Vec<Track>, ScheduleError> {
    check_locations(Policy::Fifo, locations, config)?;
    Ok(locations.to_vec())
}

/// Shortest Seek Time First.
///
/// Walks two cursors outward from the starting location's rank in the sorted
/// locations, always taking whichever neighbor is closer to the arm. When the
/// nearest lower and nearest higher tracks are equally far, the lower one wins.
pub fn sstf_order(
    locations: &[Track],
    config: &SchedulingConfig,
) -> Result<Vec<Track>, ScheduleError> {
    let start = check_locations(Policy::Sstf, locations, config)?;
    let verbosity = config.verbosity;

    let sorted = sorted(locations);
    // The start is part of `sorted`; its first occurrence is the arm.
    let rank = Rank::locate(&sorted, start);
    log_debug!(
        verbosity,
        "[SSTF] sorted={:?} start={} rank={}",
        sorted,
        start,
        rank.lower
    );

    let mut order = Vec::with_capacity(sorted.len());
    order.push(start);

    let mut current = start;
    // Unvisited candidates are sorted[..low] and sorted[high..]
    let mut low = rank.lower;
    let mut high = rank.lower + 1;

    while low > 0 || high < sorted.len() {
        let low_distance = (low > 0).then(|| seek_distance(current, sorted[low - 1]));
        let high_distance = sorted.get(high).map(|&t| seek_distance(current, t));

        let take_low = match (low_distance, high_distance) {
            (Some(l), Some(h)) => l <= h,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if take_low {
            low -= 1;
            current = sorted[low];
        } else {
            current = sorted[high];
            high += 1;
        }
        log_checks!(
            verbosity,
            "[SSTF] low={:?} high={:?} -> {}",
            low_distance,
            high_distance,
            current
        );
        order.push(current);
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn locations(start: Track, requests: &[Track]) -> Vec<Track> {
        let mut locations = vec![start];
        locations.extend_from_slice(requests);
        locations
    }

    #[test]
    fn test_fifo_keeps_input_order() {
        let locs = locations(100, &[55, 58, 39, 18, 90, 160, 150, 38, 184]);
        let order = fifo_order(&locs, &SchedulingConfig::default()).unwrap();
        assert_eq!(order, locs);
    }

    #[test]
    fn test_fifo_rejects_empty_locations() {
        let err = fifo_order(&[], &SchedulingConfig::default()).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyLocations));
    }

    #[test]
    fn test_sstf_default_workload() {
        let locs = locations(100, &[55, 58, 39, 18, 90, 160, 150, 38, 184]);
        let order = sstf_order(&locs, &SchedulingConfig::default()).unwrap();
        assert_eq!(order, vec![100, 90, 58, 55, 39, 38, 18, 150, 160, 184]);
    }

    #[test]
    fn test_sstf_tie_prefers_lower_track() {
        let locs = locations(50, &[60, 40]);
        let order = sstf_order(&locs, &SchedulingConfig::default()).unwrap();
        assert_eq!(order, vec![50, 40, 60]);
    }

    #[test]
    fn test_sstf_serves_request_at_start_with_zero_seek() {
        let locs = locations(20, &[30, 20, 5]);
        let order = sstf_order(&locs, &SchedulingConfig::default()).unwrap();
        assert_eq!(order, vec![20, 20, 30, 5]);
    }

    #[test]
    fn test_sstf_keeps_duplicate_requests() {
        let locs = locations(10, &[12, 12, 3]);
        let order = sstf_order(&locs, &SchedulingConfig::default()).unwrap();
        assert_eq!(order, vec![10, 12, 12, 3]);
    }

    #[test]
    fn test_sstf_no_requests() {
        let order = sstf_order(&[7], &SchedulingConfig::default()).unwrap();
        assert_eq!(order, vec![7]);
    }

    #[test]
    fn test_sstf_respects_track_count_when_given() {
        let config = SchedulingConfig::default().with_track_count(50);
        let err = sstf_order(&locations(10, &[60]), &config).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::TrackOutOfRange {
                track: 60,
                track_count: 50
            }
        ));
    }

    proptest! {
        #[test]
        fn test_sstf_is_greedy_permutation(
            start in 0u32..500,
            requests in prop::collection::vec(0u32..500, 0..40)
        ) {
            let locs = locations(start, &requests);
            let order = sstf_order(&locs, &SchedulingConfig::default()).unwrap();

            prop_assert_eq!(order[0], start);

            let mut served = order[1..].to_vec();
            served.sort_unstable();
            let mut expected = requests.clone();
            expected.sort_unstable();
            prop_assert_eq!(&served, &expected);

            // Each step picks a closest pending request.
            let mut pending = requests.clone();
            for pair in order.windows(2) {
                let (from, to) = (pair[0], pair[1]);
                let best = pending.iter().map(|&t| seek_distance(from, t)).min().unwrap();
                prop_assert_eq!(seek_distance(from, to), best);
                let idx = pending.iter().position(|&t| t == to).unwrap();
                pending.swap_remove(idx);
            }
        }
    }
}
