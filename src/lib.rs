//! # Logbook
//!
//! A small logging facade that unifies date-bucketed local file logs,
//! console echo, and an optional remote structured-logging backend behind
//! one API.
//!
//! ## Features
//!
//! - **Date-bucketed files**: records land in `<logs-root>/<YYYY-MM-DD>/<name>.log`
//! - **Inferred names**: the log name defaults to the calling source file
//! - **Remote forwarding**: optional structured submission plus per-error
//!   reports to a remote collection service
//! - **Thread safe**: one instance can be shared across threads

pub mod core;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ErrorReporter, LogError, LogRecord, Logger, LoggerBuilder, Result, Severity, Sink,
        SinkRegistry, DEFAULT_LOGS_ROOT, HANDLER_FILE,
    };
    pub use crate::sinks::{Credentials, FileSink, RemoteClient, RemoteSink, Resource};
}

pub use crate::core::{
    ErrorReporter, LogError, LogRecord, Logger, LoggerBuilder, Result, Severity, Sink,
    SinkRegistry, DEFAULT_LOGS_ROOT, HANDLER_FILE,
};
pub use crate::sinks::{Credentials, FileSink, RemoteClient, RemoteSink, Resource};
