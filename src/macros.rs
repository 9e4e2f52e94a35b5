//! Keyword macros.
//!
//! Each keyword captures its call site and forwards to the matching
//! [`Logger`](crate::Logger) method. Without a `logger:` argument the
//! process-wide [`logger()`](crate::logger) is used.
//!
//! ```rust
//! use sitelog::{Logger, MemoryOutput};
//!
//! let output = MemoryOutput::new();
//! let logger = Logger::new(output.clone());
//!
//! sitelog::debug!(logger: &logger);
//! sitelog::info!(logger: &logger, "connected to {}:{}", "localhost", 8080);
//!
//! let records = output.records();
//! assert_eq!(records[0].message, "");
//! assert_eq!(records[1].message, "connected to localhost:8080");
//! ```
//!
//! Messages use `format!` syntax and are only formatted when the logger is
//! enabled.

/// The [`CallSite`](crate::CallSite) of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            ::core::file!(),
            ::core::module_path!(),
            $crate::function_name!(@path),
            ::core::line!(),
            ::core::column!(),
        )
    };
}

/// Bare name of the enclosing function.
#[macro_export]
macro_rules! function_name {
    () => {
        $crate::function_name($crate::function_name!(@path))
    };
    (@path) => {{
        fn __here() {}
        $crate::__enclosing_path(__here)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __message_call {
    ($method:ident, $logger:expr) => {{
        let __logger: &$crate::Logger = $logger;
        __logger.$method(::std::string::String::new(), $crate::call_site!())
    }};
    ($method:ident, $logger:expr, $($arg:tt)+) => {{
        let __logger: &$crate::Logger = $logger;
        if __logger.is_enabled() {
            __logger.$method(::std::format!($($arg)+), $crate::call_site!())
        } else {
            ::core::option::Option::None
        }
    }};
}

/// Log a message that is essential to troubleshoot problems later.
#[macro_export]
macro_rules! log {
    (logger: $logger:expr $(,)?) => { $crate::__message_call!(log, $logger) };
    (logger: $logger:expr, $($arg:tt)+) => { $crate::__message_call!(log, $logger, $($arg)+) };
    () => { $crate::__message_call!(log, $crate::logger()) };
    ($($arg:tt)+) => { $crate::__message_call!(log, $crate::logger(), $($arg)+) };
}

/// Log a message with a snapshot of the current call stack.
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr $(,)?) => {{
        let __logger: &$crate::Logger = $logger;
        if __logger.is_enabled() {
            let __stack = $crate::StackAddresses::capture(__logger.config().stack_depth);
            __logger.trace(::std::string::String::new(), $crate::call_site!(), __stack)
        } else {
            ::core::option::Option::None
        }
    }};
    (logger: $logger:expr, $($arg:tt)+) => {{
        let __logger: &$crate::Logger = $logger;
        if __logger.is_enabled() {
            let __stack = $crate::StackAddresses::capture(__logger.config().stack_depth);
            __logger.trace(::std::format!($($arg)+), $crate::call_site!(), __stack)
        } else {
            ::core::option::Option::None
        }
    }};
    () => { $crate::trace!(logger: $crate::logger()) };
    ($($arg:tt)+) => { $crate::trace!(logger: $crate::logger(), $($arg)+) };
}

#[macro_export]
macro_rules! debug {
    (logger: $logger:expr $(,)?) => { $crate::__message_call!(debug, $logger) };
    (logger: $logger:expr, $($arg:tt)+) => { $crate::__message_call!(debug, $logger, $($arg)+) };
    () => { $crate::__message_call!(debug, $crate::logger()) };
    ($($arg:tt)+) => { $crate::__message_call!(debug, $crate::logger(), $($arg)+) };
}

#[macro_export]
macro_rules! info {
    (logger: $logger:expr $(,)?) => { $crate::__message_call!(info, $logger) };
    (logger: $logger:expr, $($arg:tt)+) => { $crate::__message_call!(info, $logger, $($arg)+) };
    () => { $crate::__message_call!(info, $crate::logger()) };
    ($($arg:tt)+) => { $crate::__message_call!(info, $crate::logger(), $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    (logger: $logger:expr $(,)?) => { $crate::__message_call!(warning, $logger) };
    (logger: $logger:expr, $($arg:tt)+) => { $crate::__message_call!(warning, $logger, $($arg)+) };
    () => { $crate::__message_call!(warning, $crate::logger()) };
    ($($arg:tt)+) => { $crate::__message_call!(warning, $crate::logger(), $($arg)+) };
}

#[macro_export]
macro_rules! error {
    (logger: $logger:expr $(,)?) => { $crate::__message_call!(error, $logger) };
    (logger: $logger:expr, $($arg:tt)+) => { $crate::__message_call!(error, $logger, $($arg)+) };
    () => { $crate::__message_call!(error, $crate::logger()) };
    ($($arg:tt)+) => { $crate::__message_call!(error, $crate::logger(), $($arg)+) };
}

/// Log a bug or fault.
#[macro_export]
macro_rules! fault {
    (logger: $logger:expr $(,)?) => { $crate::__message_call!(fault, $logger) };
    (logger: $logger:expr, $($arg:tt)+) => { $crate::__message_call!(fault, $logger, $($arg)+) };
    () => { $crate::__message_call!(fault, $crate::logger()) };
    ($($arg:tt)+) => { $crate::__message_call!(fault, $crate::logger(), $($arg)+) };
}

/// Forward a condition with an optional message. The condition is evaluated
/// exactly once; a record is produced only when it is `false`.
///
/// Unlike `std::assert!` this never panics.
#[macro_export]
macro_rules! assert {
    (logger: $logger:expr, $cond:expr $(,)?) => {{
        let __logger: &$crate::Logger = $logger;
        let __condition: bool = $cond;
        __logger.assert(__condition, ::std::string::String::new(), $crate::call_site!())
    }};
    (logger: $logger:expr, $cond:expr, $($arg:tt)+) => {{
        let __logger: &$crate::Logger = $logger;
        let __condition: bool = $cond;
        if !__condition && __logger.is_enabled() {
            __logger.assert(__condition, ::std::format!($($arg)+), $crate::call_site!())
        } else {
            ::core::option::Option::None
        }
    }};
    ($cond:expr $(,)?) => { $crate::assert!(logger: $crate::logger(), $cond) };
    ($cond:expr, $($arg:tt)+) => { $crate::assert!(logger: $crate::logger(), $cond, $($arg)+) };
}

/// Create a named [`Scope`](crate::Scope), optionally running a closure
/// inside it.
#[macro_export]
macro_rules! scope {
    (logger: $logger:expr, $name:expr $(,)?) => {{
        let __logger: &$crate::Logger = $logger;
        __logger.scope(
            $name,
            $crate::call_site!(),
            ::core::option::Option::None::<fn(&$crate::Scope)>,
        )
    }};
    (logger: $logger:expr, $name:expr, $body:expr $(,)?) => {{
        let __logger: &$crate::Logger = $logger;
        __logger.scope($name, $crate::call_site!(), $crate::__scope_body($body))
    }};
    ($name:expr $(,)?) => { $crate::scope!(logger: $crate::logger(), $name) };
    ($name:expr, $body:expr $(,)?) => { $crate::scope!(logger: $crate::logger(), $name, $body) };
}

/// Create a named [`Interval`](crate::Interval), optionally timing a
/// closure.
#[macro_export]
macro_rules! interval {
    (logger: $logger:expr, $name:expr $(,)?) => {{
        let __logger: &$crate::Logger = $logger;
        __logger.interval(
            $name,
            $crate::call_site!(),
            ::core::option::Option::None::<fn()>,
        )
    }};
    (logger: $logger:expr, $name:expr, $body:expr $(,)?) => {{
        let __logger: &$crate::Logger = $logger;
        __logger.interval($name, $crate::call_site!(), ::core::option::Option::Some($body))
    }};
    ($name:expr $(,)?) => { $crate::interval!(logger: $crate::logger(), $name) };
    ($name:expr, $body:expr $(,)?) => { $crate::interval!(logger: $crate::logger(), $name, $body) };
}

/// Pins a scope closure to the higher-ranked `FnOnce(&Scope)` signature.
#[doc(hidden)]
pub fn __scope_body<F>(body: F) -> Option<F>
where
    F: FnOnce(&crate::Scope),
{
    Some(body)
}
