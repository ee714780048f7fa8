//! Python bindings, built with `--features extension-module` through maturin.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::SchedulingConfig;
use crate::models::{Policy, Schedule, Track};
use crate::scheduler::DiskScheduler;

/// Result of one policy run (PyO3 wrapper).
#[pyclass(name = "Schedule", frozen)]
#[derive(Clone, Debug)]
pub struct PySchedule {
    #[pyo3(get)]
    pub policy: String,
    #[pyo3(get)]
    pub start: Track,
    #[pyo3(get)]
    pub order: Vec<Track>,
    #[pyo3(get)]
    pub requested_count: usize,
    #[pyo3(get)]
    pub total_distance: u64,
    #[pyo3(get)]
    pub average_distance: f64,
}

#[pymethods]
impl PySchedule {
    fn __repr__(&self) -> String {
        format!(
            "Schedule(policy={:?}, total_distance={}, average_distance={:.6})",
            self.policy, self.total_distance, self.average_distance
        )
    }
}

impl From<Schedule> for PySchedule {
    fn from(schedule: Schedule) -> Self {
        Self {
            policy: schedule.policy.to_string(),
            start: schedule.start,
            order: schedule.order,
            requested_count: schedule.requested_count,
            total_distance: schedule.total_distance,
            average_distance: schedule.average_distance,
        }
    }
}

fn scheduler(track_count: Option<Track>) -> DiskScheduler {
    DiskScheduler::new(SchedulingConfig {
        track_count,
        ..SchedulingConfig::default()
    })
}

/// Compute the visit order and distances for one policy.
///
/// # Arguments
/// * `requests` - Requested track numbers, in arrival order
/// * `start` - Track the arm starts on
/// * `policy` - One of "FIFO", "SSTF", "SCAN", "C-SCAN", "LOOK", "C-LOOK"
/// * `track_count` - Number of tracks (required for SCAN, C-SCAN, LOOK and C-LOOK)
///
/// # Raises
/// * ValueError if the policy is unknown, the track count is missing, or a
///   track lies outside the disk
#[pyfunction]
#[pyo3(signature = (requests, start, policy, track_count=None))]
fn schedule(
    requests: Vec<Track>,
    start: Track,
    policy: String,
    track_count: Option<Track>,
) -> PyResult<PySchedule> {
    let policy: Policy = policy
        .parse()
        .map_err(|e: crate::input::InputError| PyValueError::new_err(e.to_string()))?;
    scheduler(track_count)
        .schedule(policy, start, &requests)
        .map(PySchedule::from)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Run every policy over the same workload.
#[pyfunction]
fn all_policies(
    requests: Vec<Track>,
    start: Track,
    track_count: Track,
) -> PyResult<Vec<PySchedule>> {
    match scheduler(Some(track_count)).schedule_all(start, &requests) {
        Ok(schedules) => Ok(schedules.into_iter().map(PySchedule::from).collect()),
        Err(e) => Err(PyValueError::new_err(e.to_string())),
    }
}

/// The disk_sched Python module.
#[pymodule]
fn disk_sched(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySchedule>()?;
    m.add_function(wrap_pyfunction!(schedule, m)?)?;
    m.add_function(wrap_pyfunction!(all_policies, m)?)?;
    Ok(())
}
