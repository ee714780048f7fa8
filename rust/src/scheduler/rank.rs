//! Rank of the starting location within sorted requests.

use crate::models::Track;

/// Where the starting location falls inside a sorted slice.
///
/// Requests in `lower..upper` are equal to the start. Sweeps treat them as
/// already served by the arm standing there, so the start is listed once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rank {
    /// First index whose value is `>= start`
    pub lower: usize,
    /// First index whose value is `> start`
    pub upper: usize,
}

impl Rank {
    /// Locate `start` in `sorted`, which must be in ascending order.
    pub fn locate(sorted: &[Track], start: Track) -> Self {
        let lower = sorted.partition_point(|&t| t < start);
        let upper = lower + sorted[lower..].partition_point(|&t| t == start);
        Self { lower, upper }
    }

    /// Number of entries equal to the start.
    pub fn duplicates(&self) -> usize {
        self.upper - self.lower
    }
}

/// Sorted copy of `tracks`.
pub fn sorted(tracks: &[Track]) -> Vec<Track> {
    let mut sorted = tracks.to_vec();
    sorted.sort_unstable();
    sorted
}
