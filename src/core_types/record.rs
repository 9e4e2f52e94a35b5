//! Log records handed from the call surface to outputs.

use crate::core_types::call_site::CallSite;
use crate::core_types::stack::StackAddresses;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::Level;
use uuid::Uuid;

/// Which keyword produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Log,
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Assert,
    Fault,
    Scope,
    Interval,
}

impl LogKind {
    /// Upper-case tag used in text output.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Log => "LOG",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Assert => "ASSERT",
            Self::Fault => "FAULT",
            Self::Scope => "SCOPE",
            Self::Interval => "INTERVAL",
        }
    }

    /// The `tracing` level a record of this kind is emitted at.
    pub fn level(self) -> Level {
        match self {
            Self::Trace => Level::TRACE,
            Self::Debug | Self::Scope | Self::Interval => Level::DEBUG,
            Self::Log | Self::Info => Level::INFO,
            Self::Warning => Level::WARN,
            Self::Error | Self::Assert | Self::Fault => Level::ERROR,
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// How the source file of a call site is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileIdentity {
    /// Last path component, e.g. `conn.rs`.
    #[default]
    Name,
    /// Crate-relative identifier, e.g. `app/net/conn.rs`.
    Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopePhase {
    Enter,
    Leave,
}

/// Ties a scope record to the scope that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeMark {
    pub uid: Uuid,
    pub phase: ScopePhase,
}

/// One forwarded logging call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub time: DateTime<Utc>,
    pub category: String,
    pub kind: LogKind,
    pub message: String,
    pub site: CallSite,
    /// Name of the thread that made the call, when it has one.
    pub thread: Option<String>,
    /// Present for `trace` records.
    pub stack: Option<StackAddresses>,
    /// Present for `assert` records.
    pub condition: Option<bool>,
    /// Present when a scope is left or an interval ends.
    pub duration: Option<Duration>,
    pub scope: Option<ScopeMark>,
    pub file_identity: FileIdentity,
}

impl LogRecord {
    pub fn new(
        category: impl Into<String>,
        kind: LogKind,
        message: impl Into<String>,
        site: CallSite,
    ) -> Self {
        Self {
            time: Utc::now(),
            category: category.into(),
            kind,
            message: message.into(),
            site,
            thread: std::thread::current().name().map(str::to_owned),
            stack: None,
            condition: None,
            duration: None,
            scope: None,
            file_identity: FileIdentity::default(),
        }
    }

    pub fn with_stack(mut self, stack: StackAddresses) -> Self {
        self.stack = Some(stack);
        self
    }

    pub fn with_condition(mut self, condition: bool) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_scope(mut self, uid: Uuid, phase: ScopePhase) -> Self {
        self.scope = Some(ScopeMark { uid, phase });
        self
    }

    pub fn with_file_identity(mut self, identity: FileIdentity) -> Self {
        self.file_identity = identity;
        self
    }

    /// The `(message, file, function, line)` tuple of the call.
    pub fn forwarded(&self) -> (&str, &'static str, &'static str, u32) {
        (
            self.message.as_str(),
            self.site.file_name(),
            self.site.function(),
            self.site.line(),
        )
    }

    /// File label according to the configured [`FileIdentity`].
    pub fn file(&self) -> String {
        match self.file_identity {
            FileIdentity::Name => self.site.file_name().to_string(),
            FileIdentity::Id => self.site.file_id(),
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] {}:{} {}",
            self.category,
            self.kind,
            self.file(),
            self.site.line(),
            self.site.function()
        )?;
        if !self.message.is_empty() {
            write!(f, " {}", self.message)?;
        }
        if let Some(duration) = self.duration {
            write!(f, " ({:.3}s)", duration.as_secs_f64())?;
        }
        Ok(())
    }
}
