//! File sink implementation

use crate::core::{timestamp, LogError, LogRecord, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Registry sink that appends `timestamp LEVELNAME: message` lines to a
/// local file.
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::file_open(path.display().to_string(), e))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }
}

impl Sink for FileSink {
    fn submit(&mut self, record: &LogRecord) -> Result<()> {
        let line = format!(
            "{} {}: {}\n",
            timestamp::handler_stamp(&record.timestamp),
            record.severity.to_str(),
            record.message
        );
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| LogError::file_write(self.path.display().to_string(), e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LogError::file_write(self.path.display().to_string(), e))
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_submit_writes_formatted_line() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("any.log");

        let at = chrono::Local
            .with_ymd_and_hms(2024, 1, 5, 10, 30, 45)
            .single()
            .expect("valid datetime");

        let mut sink = FileSink::new(&path).expect("create sink");
        let record = LogRecord::new(Severity::Info, "hello".to_string()).with_timestamp(at);
        sink.submit(&record).expect("submit");
        sink.flush().expect("flush");

        let content = std::fs::read_to_string(&path).expect("read file");
        assert_eq!(content, "2024-01-05 10:30:45 INFO: hello\n");
    }

    #[test]
    fn test_append_mode_preserves_existing_lines() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("any.log");

        {
            let mut sink = FileSink::new(&path).expect("create sink");
            sink.submit(&LogRecord::new(Severity::Info, "first".to_string()))
                .expect("submit");
        }
        {
            let mut sink = FileSink::new(&path).expect("create sink");
            sink.submit(&LogRecord::new(Severity::Debug, "second".to_string()))
                .expect("submit");
        }

        let content = std::fs::read_to_string(&path).expect("read file");
        assert_eq!(content.lines().count(), 2);
    }
}
