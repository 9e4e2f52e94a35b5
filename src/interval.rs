use crate::core_types::{CallSite, LogKind};
use crate::logger::Logger;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct IntervalState {
    started_at: Option<Instant>,
    duration: Duration,
}

/// Handle for a timed span returned by [`Logger::interval`].
///
/// Ending a running interval emits one [`LogKind::Interval`] record carrying
/// the measured duration. A running interval is ended when dropped.
#[derive(Debug)]
pub struct Interval {
    name: String,
    site: CallSite,
    logger: Logger,
    state: Mutex<IntervalState>,
}

impl Interval {
    pub(crate) fn new(name: String, site: CallSite, logger: Logger) -> Self {
        Self {
            name,
            site,
            logger,
            state: Mutex::new(IntervalState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, IntervalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn site(&self) -> CallSite {
        self.site
    }

    pub fn is_running(&self) -> bool {
        self.state().started_at.is_some()
    }

    /// Duration of the last completed run.
    pub fn duration(&self) -> Duration {
        self.state().duration
    }

    /// Start timing. Returns `false` if the interval is already running.
    pub fn begin(&self) -> bool {
        let mut state = self.state();
        if state.started_at.is_some() {
            return false;
        }
        state.started_at = Some(Instant::now());
        true
    }

    /// Stop timing and report the elapsed time, or `None` if the interval
    /// was not running.
    pub fn end(&self) -> Option<Duration> {
        let duration = {
            let mut state = self.state();
            let started_at = state.started_at.take()?;
            state.duration = started_at.elapsed();
            state.duration
        };
        let record = self
            .logger
            .record(LogKind::Interval, self.name.as_str(), self.site)
            .with_duration(duration);
        self.logger.emit(record);
        Some(duration)
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.end();
    }
}
