//! Compute-once values.
//!
//! [`Cached<T>`] holds a value that is produced by the first caller and
//! shared by everyone after. Concurrent first callers block until the single
//! initializer finishes, so the initializer runs exactly once.
//!
//! ```rust
//! use sitelog::cached;
//!
//! let settings = cached!(Vec<String>, vec!["a".to_string(), "b".to_string()]);
//! assert!(std::ptr::eq(settings(), settings()));
//! ```

use once_cell::sync::OnceCell;
use std::fmt;

/// A value computed on first access and cached for the life of the cell.
pub struct Cached<T> {
    cell: OnceCell<T>,
}

impl<T> Cached<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// The cached value, if it has been computed.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Return the cached value, running `init` if this is the first access.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(init)
    }

    /// Like [`get_or_init`](Self::get_or_init), but a failed initializer
    /// leaves the cell empty so a later call can try again.
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.cell.get_or_try_init(init)
    }

    /// Store `value` unless the cell is already filled, in which case the
    /// value is handed back.
    pub fn set(&self, value: T) -> Result<(), T> {
        self.cell.set(value)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Cached<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cached")
            .field("value", &self.cell.get())
            .finish()
    }
}

/// Build a `fn() -> &'static T` accessor whose value is computed on the
/// first call.
///
/// The initializer runs inside a free function, so it cannot borrow local
/// variables of the surrounding scope.
#[macro_export]
macro_rules! cached {
    ($ty:ty, $init:expr $(,)?) => {{
        fn __cached_value() -> &'static $ty {
            static CELL: $crate::Cached<$ty> = $crate::Cached::new();
            CELL.get_or_init(|| $init)
        }
        __cached_value as fn() -> &'static $ty
    }};
}
