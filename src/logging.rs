//! Crate-internal diagnostics.
//!
//! sitelog reports its own setup events through `tracing` so they never loop
//! back into a [`Logger`](crate::Logger). Macros are re-exported with the
//! log_* naming used across the crate.

pub(crate) use tracing::{debug as log_debug, error as log_error, warn as log_warn};
