use crate::core_types::LogRecord;
use crate::outputs::LogOutput;
use tracing::Level;

/// Output that re-emits records as `tracing` events.
///
/// Events carry the call site as structured fields, so any subscriber the
/// application installs (e.g. `tracing-subscriber`'s fmt layer) shows them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingOutput;

impl TracingOutput {
    pub fn new() -> Self {
        Self
    }
}

// `tracing::event!` needs a constant level, so each level gets its own arm.
macro_rules! emit {
    ($level:expr, $record:expr) => {{
        let record = $record;
        tracing::event!(
            $level,
            category = %record.category,
            kind = %record.kind,
            file = %record.file(),
            function = record.site.function(),
            line = record.site.line(),
            thread = record.thread.as_deref(),
            duration_ms = record.duration.map(|d| d.as_secs_f64() * 1000.0),
            condition = record.condition,
            stack_depth = record.stack.as_ref().map(|s| s.len()),
            "{}",
            record.message
        )
    }};
}

impl LogOutput for TracingOutput {
    fn write(&self, record: &LogRecord) {
        let level = record.kind.level();
        if level == Level::TRACE {
            emit!(Level::TRACE, record)
        } else if level == Level::DEBUG {
            emit!(Level::DEBUG, record)
        } else if level == Level::INFO {
            emit!(Level::INFO, record)
        } else if level == Level::WARN {
            emit!(Level::WARN, record)
        } else {
            emit!(Level::ERROR, record)
        }
    }
}
