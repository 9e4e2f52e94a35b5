//! The logging call surface.
//!
//! Every keyword macro expands to one of the [`Logger`] methods below, with
//! the call site appended. The methods are plain functions, so code that
//! already has a [`CallSite`] at hand can call them directly.
//!
//! A process-wide logger is available through [`logger`]. It is created on
//! first use from the environment (see [`LogConfig::from_env`]) and writes to
//! [`TracingOutput`]; call [`install`] early to replace it.

use crate::cached::Cached;
use crate::config::LogConfig;
use crate::core_types::{CallSite, LogKind, LogRecord, StackAddresses};
use crate::error::{LogError, LogResult};
use crate::interval::Interval;
use crate::logging::{log_debug, log_warn};
use crate::outputs::{LogOutput, TracingOutput};
use crate::scope::Scope;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

struct Inner {
    output: Box<dyn LogOutput>,
    config: LogConfig,
    enabled: AtomicBool,
}

/// Call surface for the keyword macros.
///
/// Cloning is cheap; clones share the output, the configuration and the
/// enabled switch.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

impl Logger {
    /// Logger with the default configuration.
    pub fn new(output: impl LogOutput + 'static) -> Self {
        Self::with_config(LogConfig::default(), output)
    }

    pub fn with_config(config: LogConfig, output: impl LogOutput + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                output: Box::new(output),
                enabled: AtomicBool::new(config.enabled),
                config,
            }),
        }
    }

    /// Logger configured from the environment, writing to [`TracingOutput`].
    ///
    /// Invalid environment values are reported and the defaults used instead.
    pub fn from_env() -> Self {
        let config = LogConfig::from_env().unwrap_or_else(|err| {
            log_warn!(error = %err, "Falling back to default logging configuration");
            LogConfig::default()
        });
        Self::with_config(config, TracingOutput::new())
    }

    /// Configuration the logger was built with.
    ///
    /// `enabled` here is only the initial state; [`is_enabled`](Self::is_enabled)
    /// reports the live switch after [`enable`](Self::enable) or
    /// [`disable`](Self::disable).
    pub fn config(&self) -> &LogConfig {
        &self.inner.config
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.enabled.load(Ordering::Acquire)
    }

    pub fn enable(&self) {
        self.inner.enabled.store(true, Ordering::Release);
    }

    /// Stop forwarding calls. Every method returns `None` until re-enabled.
    pub fn disable(&self) {
        self.inner.enabled.store(false, Ordering::Release);
    }

    /// Snapshot the calling thread's stack with the configured depth.
    pub fn capture_stack(&self) -> StackAddresses {
        StackAddresses::capture(self.inner.config.stack_depth)
    }

    pub(crate) fn record(
        &self,
        kind: LogKind,
        message: impl Into<String>,
        site: CallSite,
    ) -> LogRecord {
        LogRecord::new(self.inner.config.category.as_str(), kind, message, site)
            .with_file_identity(self.inner.config.file_identity)
    }

    /// Hand `record` to the output unless the logger is disabled.
    ///
    /// Handles call this directly, so the switch is checked here as well.
    pub(crate) fn emit(&self, record: LogRecord) -> Option<LogRecord> {
        if !self.is_enabled() {
            return None;
        }
        self.inner.output.write(&record);
        Some(record)
    }

    fn message(
        &self,
        kind: LogKind,
        message: impl Into<String>,
        site: CallSite,
    ) -> Option<LogRecord> {
        // Checked before `emit` so a disabled logger skips building the record.
        if !self.is_enabled() {
            return None;
        }
        self.emit(self.record(kind, message, site))
    }

    /// Log a message that is essential to troubleshoot problems later.
    pub fn log(&self, message: impl Into<String>, site: CallSite) -> Option<LogRecord> {
        self.message(LogKind::Log, message, site)
    }

    /// Log a message together with a snapshot of the caller's stack.
    pub fn trace(
        &self,
        message: impl Into<String>,
        site: CallSite,
        stack: StackAddresses,
    ) -> Option<LogRecord> {
        // Same early check as `message`.
        if !self.is_enabled() {
            return None;
        }
        self.emit(self.record(LogKind::Trace, message, site).with_stack(stack))
    }

    pub fn debug(&self, message: impl Into<String>, site: CallSite) -> Option<LogRecord> {
        self.message(LogKind::Debug, message, site)
    }

    pub fn info(&self, message: impl Into<String>, site: CallSite) -> Option<LogRecord> {
        self.message(LogKind::Info, message, site)
    }

    pub fn warning(&self, message: impl Into<String>, site: CallSite) -> Option<LogRecord> {
        self.message(LogKind::Warning, message, site)
    }

    pub fn error(&self, message: impl Into<String>, site: CallSite) -> Option<LogRecord> {
        self.message(LogKind::Error, message, site)
    }

    /// Log a bug or fault.
    pub fn fault(&self, message: impl Into<String>, site: CallSite) -> Option<LogRecord> {
        self.message(LogKind::Fault, message, site)
    }

    /// Record a failed assertion. Nothing is forwarded when `condition` holds.
    ///
    /// This never panics; callers that want to abort on failure check the
    /// returned record.
    pub fn assert(
        &self,
        condition: bool,
        message: impl Into<String>,
        site: CallSite,
    ) -> Option<LogRecord> {
        if condition || !self.is_enabled() {
            return None;
        }
        self.emit(
            self.record(LogKind::Assert, message, site)
                .with_condition(condition),
        )
    }

    /// Create a named scope.
    ///
    /// With a body, the scope is entered, the body runs with the scope, and
    /// the scope is left before it is returned. Without one, the caller
    /// decides when to [`enter`](Scope::enter) and [`leave`](Scope::leave).
    pub fn scope<F>(
        &self,
        name: impl Into<String>,
        site: CallSite,
        body: Option<F>,
    ) -> Option<Scope>
    where
        F: FnOnce(&Scope),
    {
        if !self.is_enabled() {
            return None;
        }
        let scope = Scope::new(name.into(), site, self.clone());
        if let Some(body) = body {
            scope.enter();
            body(&scope);
            scope.leave();
        }
        Some(scope)
    }

    /// Create a named interval that measures elapsed time.
    ///
    /// With a body, the interval is begun, the body runs, and the interval
    /// is ended before it is returned.
    pub fn interval<F>(
        &self,
        name: impl Into<String>,
        site: CallSite,
        body: Option<F>,
    ) -> Option<Interval>
    where
        F: FnOnce(),
    {
        if !self.is_enabled() {
            return None;
        }
        let interval = Interval::new(name.into(), site, self.clone());
        if let Some(body) = body {
            interval.begin();
            body();
            interval.end();
        }
        Some(interval)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.inner.config)
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}

static PROCESS_LOGGER: Cached<Logger> = Cached::new();

/// Make `logger` the process-wide logger used by the keyword macros.
///
/// # Errors
///
/// Returns [`LogError::AlreadyInstalled`] if a process-wide logger exists,
/// including the default one created by an earlier call to [`logger`].
pub fn install(logger: Logger) -> LogResult<()> {
    PROCESS_LOGGER
        .set(logger)
        .map_err(|_| LogError::already_installed())?;
    log_debug!("Process-wide logger installed");
    Ok(())
}

/// The process-wide logger, created from the environment on first use.
pub fn logger() -> &'static Logger {
    PROCESS_LOGGER.get_or_init(Logger::from_env)
}
