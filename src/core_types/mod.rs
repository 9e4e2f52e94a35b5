//! Core types shared by the call surface, the handles and the outputs.

pub mod call_site;
pub mod record;
pub mod stack;

pub use call_site::{file_id, file_name, function_name, CallSite};
pub use record::{FileIdentity, LogKind, LogRecord, ScopeMark, ScopePhase};
pub use stack::StackAddresses;
