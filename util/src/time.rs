use std::fmt::{self, Write};
use std::time::{Duration, Instant};

use chrono::Local;

/// Format used by [current_date_time_str] callers that have no preference
pub const DEFAULT_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A monotonic epoch; time is reported in seconds since its creation.
#[derive(Clone, Debug)]
pub struct Timebase(Instant);

impl Default for Timebase {
    fn default() -> Self {
        Self(Instant::now())
    }
}

impl Timebase {
    pub fn now(&self) -> f64 {
        self.0.elapsed().as_secs_f64()
    }

    pub fn instant(&self) -> Instant {
        self.0
    }

    pub fn dur(&self, t: f64) -> Duration {
        Duration::from_secs_f64(t)
    }
}

/// Local wall-clock time rendered with a strftime style `fmt`.
///
/// Fails if `fmt` contains an unknown specifier.
///
/// ```
/// use grabbag_util::time::{current_date_time_str, DEFAULT_DATE_TIME_FORMAT};
///
/// let s = current_date_time_str(DEFAULT_DATE_TIME_FORMAT)?;
/// assert_eq!(s.len(), "2024-01-31 23:59:59".len());
/// # Ok::<(), std::fmt::Error>(())
/// ```
pub fn current_date_time_str(fmt: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{}", Local::now().format(fmt))?;
    Ok(out)
}
