//! Throttling for periodic loops.
//!
//! A loop takes an [Instant] at the top of each tick and hands it to
//! [schedule_rate] (or [RateLimiter::wait]) at the bottom. If the tick
//! finished early the thread sleeps off the rest of the period; if it is
//! already late, nothing sleeps. Either way the real elapsed time of the tick
//! comes back in seconds so the caller can notice jitter.
//!
//! ```no_run
//! use std::time::Instant;
//! use grabbag_util::rate::RateLimiter;
//!
//! let limiter = RateLimiter::new(50)?;
//! loop {
//!     let start = Instant::now();
//!     // poll sensors, pack a frame, ...
//!     let elapsed = limiter.wait(start);
//!     if limiter.overran(elapsed) {
//!         eprintln!("tick took {elapsed:.3}s");
//!     }
//! }
//! # Ok::<(), grabbag_util::error::InvalidArgument>(())
//! ```

use std::thread::sleep;
use std::time::{Duration, Instant};

use log::debug;

use crate::config::LoopConfig;
use crate::error::InvalidArgument;
use crate::result::bail_if;

/// Shaved off every sleep to make up for the scheduler waking us late.
pub const DEFAULT_WAKEUP_COMPENSATION: Duration = Duration::from_millis(2);

/// Sleep so that a loop whose current tick began at `start` runs at most
/// `rate` times per second; returns the seconds elapsed since `start`.
///
/// Fails if `rate` is zero.
pub fn schedule_rate(rate: u32, start: Instant) -> Result<f64, InvalidArgument> {
    Ok(RateLimiter::new(rate)?.wait(start))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimiter {
    period: Duration,
    compensation: Duration,
}

impl RateLimiter {
    pub fn new(rate_hz: u32) -> Result<Self, InvalidArgument> {
        bail_if(rate_hz == 0, InvalidArgument("rate must be positive"))?;
        Ok(Self {
            period: Duration::from_secs(1) / rate_hz,
            compensation: DEFAULT_WAKEUP_COMPENSATION,
        })
    }

    pub fn from_config(cfg: &LoopConfig) -> Result<Self, InvalidArgument> {
        Ok(Self::new(cfg.rate_hz)?
            .with_compensation(Duration::from_millis(cfg.wakeup_compensation_ms)))
    }

    pub fn with_compensation(self, compensation: Duration) -> Self {
        Self {
            compensation,
            ..self
        }
    }

    /// Target duration of one tick
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn compensation(&self) -> Duration {
        self.compensation
    }

    /// Sleep off whatever is left of the current period and return the
    /// seconds elapsed since `start`, measured after the sleep.
    pub fn wait(&self, start: Instant) -> f64 {
        let elapsed = start.elapsed();
        match self.period.checked_sub(elapsed) {
            Some(left) if !left.is_zero() => {
                sleep(left.saturating_sub(self.compensation));
            }
            _ => debug!(
                "Loop tick took {:?}, exceeding the period of {:?}",
                elapsed, self.period
            ),
        }
        start.elapsed().as_secs_f64()
    }

    /// Whether an elapsed time returned by [Self::wait] overshot the period
    pub fn overran(&self, elapsed_secs: f64) -> bool {
        elapsed_secs > self.period.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_is_rejected() {
        assert_eq!(
            schedule_rate(0, Instant::now()),
            Err(InvalidArgument("rate must be positive"))
        );
        assert!(RateLimiter::new(0).is_err());
    }

    #[test]
    fn period_follows_rate() {
        assert_eq!(RateLimiter::new(10).unwrap().period(), Duration::from_millis(100));
        assert_eq!(RateLimiter::new(1).unwrap().period(), Duration::from_secs(1));
        assert_eq!(RateLimiter::new(3).unwrap().period(), Duration::from_nanos(333_333_333));
    }

    #[test]
    fn config_sets_compensation() {
        let cfg = LoopConfig {
            rate_hz: 20,
            wakeup_compensation_ms: 5,
        };
        let limiter = RateLimiter::from_config(&cfg).unwrap();
        assert_eq!(limiter.period(), Duration::from_millis(50));
        assert_eq!(limiter.compensation(), Duration::from_millis(5));
    }

    #[test]
    fn sleeps_when_ahead() {
        let start = Instant::now();
        let elapsed = schedule_rate(10, start).unwrap();
        // 100ms period minus 2ms compensation; upper bound is generous for busy hosts
        assert!(elapsed >= 0.095, "returned {elapsed}");
        assert!(elapsed < 0.5, "returned {elapsed}");
        assert!(start.elapsed() >= Duration::from_millis(97));
    }

    #[test]
    fn returns_elapsed_when_behind() {
        let Some(start) = Instant::now().checked_sub(Duration::from_millis(400)) else {
            return;
        };
        let called = Instant::now();
        let elapsed = schedule_rate(10, start).unwrap();
        assert!(called.elapsed() < Duration::from_millis(50));
        assert!((0.4..0.5).contains(&elapsed), "returned {elapsed}");
        assert!(RateLimiter::new(10).unwrap().overran(elapsed));
    }

    #[test]
    fn overran_compares_against_period() {
        let limiter = RateLimiter::new(4).unwrap();
        assert!(!limiter.overran(0.25));
        assert!(limiter.overran(0.2501));
    }
}
