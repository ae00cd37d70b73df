//! Fixed-Size Rolling Window for Baseline Tracking
//!
//! ## Overview
//!
//! The thermal-rise start signal compares upcoming readings against a
//! *local baseline*: the mean of the last few core temperatures. This module
//! provides the ring buffer that holds those readings while the start
//! detector walks the series.
//!
//! ## Design
//!
//! Capacity is a compile-time constant, the active window length is a
//! runtime value (`limit <= N`) taken from the configuration. Pushing into a
//! full window overwrites the oldest reading, and a running sum keeps
//! `mean()` O(1):
//!
//! ```text
//! RollingWindow<4>, limit = 3
//! ┌──────┬──────┬──────┬──────┐
//! │ 21.0 │ 21.5 │ 22.0 │  --  │   sum = 64.5, mean = 21.5
//! └──────┴──────┴──────┴──────┘
//! push(30.0) evicts 21.0        sum = 73.5, mean = 24.5
//! ```
//!
//! No heap allocation, so the window lives on the stack of the detector call.
//!
//! ## Usage Example
//!
//! ```rust
//! use bakecurve_core::buffer::RollingWindow;
//!
//! let mut window: RollingWindow<8> = RollingWindow::with_limit(3);
//! window.push(20.0);
//! window.push(21.0);
//! window.push(22.0);
//! window.push(23.0); // evicts 20.0
//! assert_eq!(window.mean(), Some(22.0));
//! ```

/// Fixed-capacity rolling window of temperatures
///
/// ## Internal Invariants
///
/// - `limit` is within `1..=N`
/// - `len <= limit`
/// - `write_pos < N`
/// - `sum` equals the sum of the `len` most recent readings
#[derive(Debug, Clone)]
pub struct RollingWindow<const N: usize> {
    data: [f64; N],
    write_pos: usize,
    len: usize,
    limit: usize,
    sum: f64,
}

impl<const N: usize> RollingWindow<N> {
    /// Window using the full capacity
    pub const fn new() -> Self {
        Self::with_limit(N)
    }

    /// Window holding at most `limit` readings (clamped to `1..=N`)
    pub const fn with_limit(limit: usize) -> Self {
        let limit = if limit == 0 {
            1
        } else if limit > N {
            N
        } else {
            limit
        };
        Self {
            data: [0.0; N],
            write_pos: 0,
            len: 0,
            limit,
            sum: 0.0,
        }
    }

    /// Add a reading, evicting the oldest when the window is full
    pub fn push(&mut self, value: f64) {
        if self.len == self.limit {
            let oldest = self.physical_index(0);
            self.sum -= self.data[oldest];
            self.len -= 1;
        }
        self.data[self.write_pos] = value;
        self.write_pos = (self.write_pos + 1) % N;
        self.len += 1;
        self.sum += value;
    }

    /// Mean of the readings currently held
    pub fn mean(&self) -> Option<f64> {
        if self.len == 0 {
            None
        } else {
            Some(self.sum / self.len as f64)
        }
    }

    /// Most recent reading
    pub fn last(&self) -> Option<f64> {
        if self.len == 0 {
            return None;
        }
        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };
        Some(self.data[idx])
    }

    /// Number of readings held
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing has been pushed since creation or `clear`
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when `len == limit`
    pub fn is_full(&self) -> bool {
        self.len == self.limit
    }

    /// Active window length
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drop all readings, keeping the limit
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
        self.sum = 0.0;
    }

    /// Readings from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.data[self.physical_index(i)])
    }

    // Logical index 0 is the oldest reading held.
    fn physical_index(&self, logical: usize) -> usize {
        (self.write_pos + N - self.len + logical) % N
    }
}

impl<const N: usize> Default for RollingWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn empty_window() {
        let window: RollingWindow<4> = RollingWindow::new();
        assert!(window.is_empty());
        assert_eq!(window.mean(), None);
        assert_eq!(window.last(), None);
    }

    #[test]
    fn mean_tracks_pushes() {
        let mut window = RollingWindow::<4>::new();
        window.push(20.0);
        window.push(22.0);
        assert_eq!(window.len(), 2);
        assert_eq!(window.mean(), Some(21.0));
        assert_eq!(window.last(), Some(22.0));
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut window = RollingWindow::<8>::with_limit(3);
        for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
            window.push(value);
        }
        assert!(window.is_full());
        let held: Vec<f64> = window.iter().collect();
        assert_eq!(held, [3.0, 4.0, 5.0]);
        assert_eq!(window.mean(), Some(4.0));
    }

    #[test]
    fn wraps_around_capacity() {
        let mut window = RollingWindow::<3>::new();
        for i in 0..10 {
            window.push(i as f64);
        }
        let held: Vec<f64> = window.iter().collect();
        assert_eq!(held, [7.0, 8.0, 9.0]);
        assert_eq!(window.last(), Some(9.0));
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(RollingWindow::<4>::with_limit(0).limit(), 1);
        assert_eq!(RollingWindow::<4>::with_limit(99).limit(), 4);
    }

    #[test]
    fn clear_resets_sum() {
        let mut window = RollingWindow::<4>::new();
        window.push(50.0);
        window.clear();
        window.push(10.0);
        assert_eq!(window.mean(), Some(10.0));
    }
}
