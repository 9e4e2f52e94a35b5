//! Test helper utilities for sitelog unit tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::config::LogConfig;
use crate::core_types::CallSite;
use crate::logger::Logger;
use crate::outputs::MemoryOutput;

/// Call site used by the forwarding scenarios: `bar` at line 42 of `Foo.ext`.
pub fn scenario_site() -> CallSite {
    CallSite::new("app/src/Foo.ext", "app::net", "app::net::bar", 42, 5)
}

/// Logger with the default configuration writing to a fresh memory output.
pub fn memory_logger() -> (Logger, MemoryOutput) {
    memory_logger_with(LogConfig::default())
}

pub fn memory_logger_with(config: LogConfig) -> (Logger, MemoryOutput) {
    let output = MemoryOutput::new();
    (Logger::with_config(config, output.clone()), output)
}
