//! # sitelog
//!
//! Terse logging keywords that capture their call site automatically.
//!
//! ## Key Features
//!
//! - **Keywords**: `log!`, `trace!`, `debug!`, `info!`, `warning!`, `error!`,
//!   `assert!`, `fault!`, `scope!` and `interval!`
//! - **Call sites**: file name, stable file identifier, function and line are
//!   captured at compile time and forwarded with every call
//! - **Stack snapshots**: `trace!` forwards the caller's return addresses
//! - **Outputs**: records go to `tracing` by default, or to any [`LogOutput`]
//! - **Compute once**: [`Cached`] and [`cached!`] for values initialized
//!   exactly once, even under concurrent first access
//!
//! ## Example
//!
//! ```rust
//! use sitelog::{LogConfig, Logger, MemoryOutput};
//!
//! let output = MemoryOutput::new();
//! let logger = Logger::with_config(LogConfig::default().with_category("net"), output.clone());
//!
//! sitelog::info!(logger: &logger, "listening on port {}", 8080);
//! let passed = sitelog::assert!(logger: &logger, 1 + 1 == 3, "arithmetic is broken");
//! assert!(passed.is_some());
//!
//! sitelog::scope!(logger: &logger, "handshake", |scope| {
//!     sitelog::debug!(logger: &logger, "inside {}", scope.name());
//! });
//!
//! assert_eq!(output.len(), 5);
//! ```
//!
//! Macros invoked without `logger:` use the process-wide [`logger()`], which
//! can be replaced once with [`install`].

pub mod cached;
pub mod config;
pub mod core_types;
pub mod error;
pub mod interval;
pub mod logger;
pub(crate) mod logging;
mod macros;
pub mod outputs;
pub mod scope;

#[cfg(test)]
pub mod tests;

pub use cached::Cached;
pub use config::LogConfig;
pub use core_types::{
    file_id, file_name, function_name, CallSite, FileIdentity, LogKind, LogRecord, ScopeMark,
    ScopePhase, StackAddresses,
};
pub use error::{LogError, LogResult};
pub use interval::Interval;
pub use logger::{install, logger, Logger};
pub use outputs::{LogOutput, MemoryOutput, TracingOutput};
pub use scope::Scope;

#[doc(hidden)]
pub use core_types::call_site::__enclosing_path;
#[doc(hidden)]
pub use macros::__scope_body;
