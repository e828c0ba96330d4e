//! Core facade types and traits

pub mod caller;
pub mod config;
pub mod error;
pub mod logger;
pub mod record;
pub mod registry;
pub mod severity;
pub mod timestamp;

pub use error::{LogError, Result};
pub use logger::{Logger, LoggerBuilder, DEFAULT_LOGS_ROOT, HANDLER_FILE};
pub use record::LogRecord;
pub use registry::{ErrorReporter, Sink, SinkRegistry};
pub use severity::{Severity, LEVEL_UNSET};
