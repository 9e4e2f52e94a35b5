// Test modules for sitelog
//
// Each source unit has a matching test file that focuses on the behaviour
// callers rely on rather than on internal structure.

// Shared fixtures
pub mod helpers;

pub mod config;
pub mod error;

// NOTE: macro expansion against the process-wide logger is covered by the
// integration tests in tests/, which run in their own process.
