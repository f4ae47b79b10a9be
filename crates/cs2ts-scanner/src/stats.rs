//! Conversion statistics with atomic counters.
//!
//! This module provides [`ConvertStats`] for tracking batch progress and
//! [`StatsSnapshot`] for point-in-time views.
//!
//! # Thread Safety
//!
//! All counters use [`AtomicU64`] with [`Relaxed`](std::sync::atomic::Ordering::Relaxed)
//! ordering. Statistics are informational and don't require strict ordering.
//!
//! # Examples
//!
//! ```
//! use cs2ts_scanner::ConvertStats;
//!
//! let stats = ConvertStats::new();
//! stats.record_converted(2);
//! stats.record_error();
//!
//! let snapshot = stats.snapshot();
//! assert_eq!(snapshot.total, 2);
//! assert_eq!(snapshot.warnings, 2);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Atomic counters for a batch conversion.
#[derive(Debug, Default)]
pub struct ConvertStats {
    /// Files processed, successfully or not.
    total: AtomicU64,
    /// Files converted.
    converted: AtomicU64,
    /// Converted files that raised at least one warning.
    with_warnings: AtomicU64,
    /// Warnings across all converted files.
    warnings: AtomicU64,
    /// Files that failed to read or convert.
    errors: AtomicU64,
}

impl ConvertStats {
    /// Creates a new [`ConvertStats`] with all counters at zero.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a converted file and the number of warnings it raised.
    pub fn record_converted(&self, warnings: usize) {
        self.total.fetch_add(1, Ordering::Relaxed);
        self.converted.fetch_add(1, Ordering::Relaxed);
        if warnings > 0 {
            self.with_warnings.fetch_add(1, Ordering::Relaxed);
            self.warnings
                .fetch_add(u64::try_from(warnings).unwrap_or(u64::MAX), Ordering::Relaxed);
        }
    }

    /// Records a file that could not be converted.
    #[inline]
    pub fn record_error(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a point-in-time snapshot of all counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total: self.total.load(Ordering::Relaxed),
            converted: self.converted.load(Ordering::Relaxed),
            with_warnings: self.with_warnings.load(Ordering::Relaxed),
            warnings: self.warnings.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.total.store(0, Ordering::Relaxed);
        self.converted.store(0, Ordering::Relaxed);
        self.with_warnings.store(0, Ordering::Relaxed);
        self.warnings.store(0, Ordering::Relaxed);
        self.errors.store(0, Ordering::Relaxed);
    }
}

/// A point-in-time snapshot of [`ConvertStats`].
///
/// # Examples
///
/// ```
/// use cs2ts_scanner::StatsSnapshot;
///
/// let snap = StatsSnapshot {
///     total: 10,
///     converted: 9,
///     with_warnings: 2,
///     warnings: 5,
///     errors: 1,
/// };
///
/// assert_eq!(snap.clean(), 7);
/// assert!((snap.success_rate() - 90.0).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Files processed.
    pub total: u64,
    /// Files converted.
    pub converted: u64,
    /// Converted files with at least one warning.
    pub with_warnings: u64,
    /// Warnings across all converted files.
    pub warnings: u64,
    /// Files that failed.
    pub errors: u64,
}

impl StatsSnapshot {
    /// Converted files without warnings.
    #[inline]
    #[must_use]
    pub const fn clean(&self) -> u64 {
        self.converted.saturating_sub(self.with_warnings)
    }

    /// Percentage of processed files that converted; 100.0 when empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Acceptable for statistics display
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }

        (self.converted as f64 / self.total as f64) * 100.0
    }
}
