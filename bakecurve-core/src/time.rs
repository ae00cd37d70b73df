//! Timestamp units
//!
//! Probe exports log timestamps either in seconds or in milliseconds since the
//! start of the recording. The engine keeps timestamps in whatever unit the
//! series was recorded in and only converts when it needs minutes (durations,
//! cooling rates, the derived minutes-elapsed column).

use crate::constants::time::{MS_PER_MINUTE, SECONDS_PER_MINUTE};

/// Raw timestamp as stored in a [`Sample`](crate::Sample)
pub type Timestamp = f64;

/// Unit of the timestamp column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeUnit {
    /// Seconds since recording start (probe CSV default)
    #[default]
    Seconds,
    /// Milliseconds since recording start
    Milliseconds,
}

impl TimeUnit {
    /// Number of timestamp units in one minute
    pub const fn per_minute(self) -> f64 {
        match self {
            TimeUnit::Seconds => SECONDS_PER_MINUTE,
            TimeUnit::Milliseconds => MS_PER_MINUTE,
        }
    }

    /// Convert a timestamp span to minutes
    pub fn to_minutes(self, span: Timestamp) -> f64 {
        span / self.per_minute()
    }

    /// Minutes between two timestamps (`to - from`)
    pub fn minutes_between(self, from: Timestamp, to: Timestamp) -> f64 {
        self.to_minutes(to - from)
    }

    /// Short label for diagnostics
    pub const fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_to_minutes() {
        assert_eq!(TimeUnit::Seconds.to_minutes(300.0), 5.0);
        assert_eq!(TimeUnit::Seconds.minutes_between(60.0, 180.0), 2.0);
    }

    #[test]
    fn milliseconds_to_minutes() {
        assert_eq!(TimeUnit::Milliseconds.to_minutes(300_000.0), 5.0);
        assert_eq!(TimeUnit::Milliseconds.suffix(), "ms");
    }

    #[test]
    fn default_is_seconds() {
        assert_eq!(TimeUnit::default(), TimeUnit::Seconds);
    }
}
