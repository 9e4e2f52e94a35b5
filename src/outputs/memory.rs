use crate::core_types::LogRecord;
use crate::outputs::LogOutput;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Output that keeps every record in memory.
///
/// Clones share the same storage, so one clone can be handed to a
/// [`Logger`](crate::Logger) while another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of everything written so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Remove and return everything written so far.
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.lock())
    }

    pub fn last(&self) -> Option<LogRecord> {
        self.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl LogOutput for MemoryOutput {
    fn write(&self, record: &LogRecord) {
        self.lock().push(record.clone());
    }
}
