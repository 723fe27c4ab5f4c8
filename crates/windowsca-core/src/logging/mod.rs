//! Logging abstractions
//!
//! An injected `Logger` for the provider plus a process-wide debug file
//! logger for the resolver.

mod traits;
mod noop;
mod console;
pub mod file_logger;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;

pub use file_logger::{
    log, trace, debug, info, warn, error,
    log_file_path, LogLevel, LogSettings,
};
