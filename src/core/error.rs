//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Log directory could not be created (already-existing is not an error)
    #[error("failed to create log directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Local log file could not be opened
    #[error("failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Append to a local log file failed
    #[error("failed to write log file '{path}': {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Remote backend transport failure
    #[error("remote backend error: {0}")]
    RemoteTransport(#[from] reqwest::Error),

    /// Remote backend rejected a submission
    #[error("remote backend rejected request for project '{project_id}': {message}")]
    RemoteRejected { project_id: String, message: String },

    /// Sink error (generic)
    #[error("sink '{sink}' failed: {message}")]
    Sink { sink: String, message: String },
}

impl LogError {
    /// Create a directory creation error
    pub fn create_dir(path: impl Into<String>, source: std::io::Error) -> Self {
        LogError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a file open error
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LogError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<String>, source: std::io::Error) -> Self {
        LogError::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a remote rejection error
    pub fn remote_rejected(project_id: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::RemoteRejected {
            project_id: project_id.into(),
            message: message.into(),
        }
    }

    /// Create a generic sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::Sink {
            sink: sink.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LogError::create_dir("logs/2024-01-05", io_err);
        assert!(matches!(err, LogError::CreateDir { .. }));

        let err = LogError::remote_rejected("sage-inn-292904", "quota exceeded");
        assert!(matches!(err, LogError::RemoteRejected { .. }));
    }

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::other("disk full");
        let err = LogError::file_write("logs/2024-01-05/svc.log", io_err);
        assert_eq!(
            err.to_string(),
            "failed to write log file 'logs/2024-01-05/svc.log': disk full"
        );

        let err = LogError::sink("remote", "connection reset");
        assert_eq!(err.to_string(), "sink 'remote' failed: connection reset");
    }
}
