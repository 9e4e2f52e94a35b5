//! Test helper utilities for sitelog integration tests
//!
//! This module provides the process-wide fixtures shared by the integration
//! test files. Each test file is its own process, so the global logger is
//! installed at most once per file.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use sitelog::{install, Cached, LogConfig, Logger, MemoryOutput};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Category used by the logger installed through [`global_output`].
pub const TEST_CATEGORY: &str = "integration";

/// Install a memory-backed process-wide logger on first call and return its
/// output.
///
/// Tests using this must be `#[serial]`, since they all share the output.
pub fn global_output() -> &'static MemoryOutput {
    static OUTPUT: Cached<MemoryOutput> = Cached::new();
    OUTPUT.get_or_init(|| {
        let output = MemoryOutput::new();
        let config = LogConfig::default().with_category(TEST_CATEGORY);
        install(Logger::with_config(config, output.clone()))
            .expect("global logger should only be installed by this helper");
        output
    })
}

/// In-memory sink for `tracing-subscriber`'s fmt layer.
#[derive(Clone, Default)]
pub struct CapturedLines {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLines {
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

pub struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl MakeWriter<'_> for CapturedLines {
    type Writer = CapturedWriter;

    fn make_writer(&self) -> Self::Writer {
        CapturedWriter {
            buffer: self.buffer.clone(),
        }
    }
}
