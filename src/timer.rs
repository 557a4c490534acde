//! Elapsed-time guard.
//!
//! A [`Timer`] logs when it starts and logs its elapsed time exactly once when
//! it stops, either through [`Timer::stop`] or when it is dropped.

use std::time::{Duration, Instant};
use tracing::info;

/// Measures the time between its creation and [`Timer::stop`] (or drop).
#[derive(Debug)]
pub struct Timer {
    description: String,
    started: Instant,
    elapsed: Option<Duration>,
}

impl Timer {
    /// Start timing `description`.
    pub fn start(description: impl Into<String>) -> Self {
        let description = description.into();
        info!("starting {description}");
        Self {
            description,
            started: Instant::now(),
            elapsed: None,
        }
    }

    /// Time since start, or the frozen value once stopped.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.started.elapsed())
    }

    /// Stop the timer and return the elapsed time. Later calls return the
    /// same value without logging again.
    pub fn stop(&mut self) -> Duration {
        if let Some(elapsed) = self.elapsed {
            return elapsed;
        }
        let elapsed = self.started.elapsed();
        self.elapsed = Some(elapsed);
        info!(
            "{} finished in {:.4}s",
            self.description,
            elapsed.as_secs_f64()
        );
        elapsed
    }

    /// Whether [`Timer::stop`] has run.
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        self.elapsed.is_some()
    }

    /// What is being timed.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// A value paired with the time it took to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    /// What the timed closure returned, untouched.
    pub value: T,
    /// Wall time spent in the closure.
    pub elapsed: Duration,
}

/// Run `f` under a [`Timer`] and return its value with the elapsed time.
///
/// The value is passed through as-is, so an `Err` from `f` stays an `Err`.
pub fn time_scope<T>(description: impl Into<String>, f: impl FnOnce() -> T) -> Timed<T> {
    let mut timer = Timer::start(description);
    let value = f();
    let elapsed = timer.stop();
    Timed { value, elapsed }
}

/// Run `f` and log how long it took under `name`.
pub fn timed<T>(name: &str, f: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let out = f();
    info!("{name} took {:.4}s", started.elapsed().as_secs_f64());
    out
}
