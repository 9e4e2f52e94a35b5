//! Log outputs
//!
//! An output receives every record the call surface produces:
//!
//! - **tracing_output**: forwards records as `tracing` events (the default)
//! - **memory**: keeps records in memory for inspection
//!
//! ## Architecture
//!
//! ```text
//! debug!/trace!/scope!/...   <- keyword macros capture the call site
//!          |
//!       Logger               <- call surface, builds LogRecords
//!          |
//!      LogOutput             <- TracingOutput | MemoryOutput | your own
//! ```

pub mod memory;
pub mod tracing_output;

pub use memory::MemoryOutput;
pub use tracing_output::TracingOutput;

use crate::core_types::LogRecord;

/// Destination for log records.
///
/// Implementations are called from whichever thread made the logging call.
#[cfg_attr(test, mockall::automock)]
pub trait LogOutput: Send + Sync {
    fn write(&self, record: &LogRecord);
}
