//! Logging macros for the disk scheduler with verbosity level control.
//!
//! Provides zero-cost logging when disabled (verbosity=0).
//! Verbosity levels:
//! - 0: SILENT (only errors)
//! - 1: MOVES (one summary line per computed schedule)
//! - 2: CHECKS (per-step decisions: SSTF candidates, sweep splits)
//! - 3: DEBUG (sorted locations, ranks, full algorithm internals)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_MOVES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Clamp a requested verbosity (e.g. a `-vvvv` count) to the highest level.
pub fn clamp_verbosity(requested: u8) -> u8 {
    requested.min(VERBOSITY_DEBUG)
}

/// Log at MOVES level (verbosity >= 1).
///
/// Used for: the summary of each computed schedule.
#[macro_export]
macro_rules! log_moves {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_MOVES {
            eprintln!($($arg)*);
        }
    };
}

/// Log at CHECKS level (verbosity >= 2).
///
/// Used for: SSTF candidate comparisons, sweep splits, boundary insertions.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels_are_ordered() {
        assert!(VERBOSITY_SILENT < VERBOSITY_MOVES);
        assert!(VERBOSITY_MOVES < VERBOSITY_CHECKS);
        assert!(VERBOSITY_CHECKS < VERBOSITY_DEBUG);
    }

    #[test]
    fn test_clamp_verbosity() {
        assert_eq!(clamp_verbosity(0), VERBOSITY_SILENT);
        assert_eq!(clamp_verbosity(2), VERBOSITY_CHECKS);
        assert_eq!(clamp_verbosity(9), VERBOSITY_DEBUG);
    }

    #[test]
    fn test_log_macros_compile() {
        // Just verify macros compile and don't panic
        let verbosity = VERBOSITY_SILENT;
        log_moves!(verbosity, "moves {}", 1);
        log_checks!(verbosity, "checks {}", 2);
        log_debug!(verbosity, "debug {}", 3);
    }
}
