//! Disk-arm scheduling policies.
//!
//! Every policy takes the starting location followed by the requested tracks
//! and returns the order in which the arm visits them. FIFO and SSTF only ever
//! visit requested tracks; the sweeping policies may add visits to the ends
//! of the disk.

mod core;
mod rank;
mod seek;
mod sweep;

pub use core::{policy_order, schedule, DiskScheduler, ScheduleError};
pub use rank::Rank;
pub use seek::{fifo_order, sstf_order};
pub use sweep::{clook_order, cscan_order, look_order, scan_order};
