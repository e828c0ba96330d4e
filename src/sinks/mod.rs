//! Sink implementations

pub mod file;
pub mod remote;

pub use file::FileSink;
pub use remote::{Credentials, RemoteClient, RemoteSink, Resource, ResourceLabels};

// Re-export traits for convenience
pub use crate::core::{ErrorReporter, Sink};
