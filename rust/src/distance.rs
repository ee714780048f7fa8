//! Seek distance accounting over a visit order.

use crate::models::Track;

/// Absolute distance between two tracks.
#[inline]
pub fn seek_distance(from: Track, to: Track) -> u64 {
    u64::from(from.abs_diff(to))
}

/// Sum of seek distances between consecutive visits.
///
/// Empty and single-element orders have zero total distance.
pub fn total_distance(order: &[Track]) -> u64 {
    order
        .windows(2)
        .map(|pair| seek_distance(pair[0], pair[1]))
        .sum()
}

/// Average distance per originally requested track.
///
/// `requested_count` excludes the starting location and any boundary visits a
/// policy adds on its own. Returns 0 when nothing was requested.
pub fn average_distance(total: u64, requested_count: usize) -> f64 {
    if requested_count == 0 {
        return 0.0;
    }
    total as f64 / requested_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_distance_is_symmetric() {
        assert_eq!(seek_distance(100, 55), 45);
        assert_eq!(seek_distance(55, 100), 45);
        assert_eq!(seek_distance(7, 7), 0);
    }

    #[test]
    fn test_total_distance_fifo_default() {
        let order = [100, 55, 58, 39, 18, 90, 160, 150, 38, 184];
        assert_eq!(total_distance(&order), 498);
    }

    #[test]
    fn test_total_distance_trivial_orders() {
        assert_eq!(total_distance(&[]), 0);
        assert_eq!(total_distance(&[42]), 0);
    }

    #[test]
    fn test_total_distance_does_not_overflow_u32() {
        let order = [0, u32::MAX, 0, u32::MAX];
        assert_eq!(total_distance(&order), 3 * u64::from(u32::MAX));
    }

    #[test]
    fn test_average_distance() {
        assert!((average_distance(498, 9) - 55.333_333).abs() < 1e-5);
        assert_eq!(average_distance(0, 0), 0.0);
        assert_eq!(average_distance(120, 0), 0.0);
    }
}
