use crate::core_types::{CallSite, LogKind, ScopePhase};
use crate::logger::Logger;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use uuid::Uuid;

#[derive(Debug, Default)]
struct ScopeState {
    entered_at: Option<Instant>,
    duration: Duration,
}

/// Handle for a named span of work returned by [`Logger::scope`].
///
/// Entering and leaving each emit a [`LogKind::Scope`] record tagged with
/// the scope's `uid`. A scope that is still entered when dropped is left.
#[derive(Debug)]
pub struct Scope {
    name: String,
    uid: Uuid,
    site: CallSite,
    logger: Logger,
    state: Mutex<ScopeState>,
}

impl Scope {
    pub(crate) fn new(name: String, site: CallSite, logger: Logger) -> Self {
        Self {
            name,
            uid: Uuid::new_v4(),
            site,
            logger,
            state: Mutex::new(ScopeState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ScopeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uid(&self) -> Uuid {
        self.uid
    }

    pub fn site(&self) -> CallSite {
        self.site
    }

    pub fn is_entered(&self) -> bool {
        self.state().entered_at.is_some()
    }

    /// Time spent inside the scope on its last visit.
    pub fn duration(&self) -> Duration {
        self.state().duration
    }

    /// Enter the scope. Returns `false` if it was already entered.
    pub fn enter(&self) -> bool {
        {
            let mut state = self.state();
            if state.entered_at.is_some() {
                return false;
            }
            state.entered_at = Some(Instant::now());
            state.duration = Duration::ZERO;
        }
        let record = self
            .logger
            .record(LogKind::Scope, self.name.as_str(), self.site)
            .with_scope(self.uid, ScopePhase::Enter);
        self.logger.emit(record);
        true
    }

    /// Leave the scope, returning the time spent inside it, or `None` if it
    /// was not entered.
    pub fn leave(&self) -> Option<Duration> {
        let duration = {
            let mut state = self.state();
            let entered_at = state.entered_at.take()?;
            state.duration = entered_at.elapsed();
            state.duration
        };
        let record = self
            .logger
            .record(LogKind::Scope, self.name.as_str(), self.site)
            .with_scope(self.uid, ScopePhase::Leave)
            .with_duration(duration);
        self.logger.emit(record);
        Some(duration)
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.leave();
    }
}
