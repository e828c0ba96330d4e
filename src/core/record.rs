//! Log record structure

use super::severity::Severity;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One dispatched log call. Ephemeral: stamped once at dispatch so every
/// sink and the named log file agree on the timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    pub fn new(severity: Severity, message: String) -> Self {
        Self {
            severity,
            message,
            timestamp: Local::now(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stamps_now() {
        let before = Local::now();
        let record = LogRecord::new(Severity::Info, "hello".to_string());
        let after = Local::now();

        assert!(record.timestamp >= before && record.timestamp <= after);
        assert_eq!(record.severity, Severity::Info);
        assert_eq!(record.message, "hello");
    }
}
