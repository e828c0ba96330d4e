//! Sink trait and the per-logger sink registry
//!
//! Each `Logger` owns its own registry instead of reconfiguring a shared
//! process-wide subsystem, so two loggers in one process never collide.

use super::{error::Result, record::LogRecord, severity::LEVEL_UNSET};

/// An output destination for log records
pub trait Sink: Send {
    fn submit(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Receives one discrete report per error-severity call once remote logging
/// is configured.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, project_id: &str, detail: &str) -> Result<()>;
}

/// Ordered collection of sinks with a numeric level threshold.
///
/// The default threshold is [`LEVEL_UNSET`], which captures every severity.
pub struct SinkRegistry {
    sinks: Vec<Box<dyn Sink>>,
    threshold: u8,
}

impl SinkRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            threshold: LEVEL_UNSET,
        }
    }

    pub fn attach(&mut self, sink: Box<dyn Sink>) {
        self.sinks.push(sink);
    }

    pub fn set_threshold(&mut self, threshold: u8) {
        self.threshold = threshold;
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Submit a record to every attached sink. The first sink failure
    /// propagates; there is no retry and no partial-success recovery.
    pub fn dispatch(&mut self, record: &LogRecord) -> Result<()> {
        if record.severity.level() < self.threshold {
            return Ok(());
        }
        for sink in &mut self.sinks {
            sink.submit(record)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::severity::Severity;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSink {
        submitted: Arc<AtomicUsize>,
    }

    impl Sink for CountingSink {
        fn submit(&mut self, _record: &LogRecord) -> Result<()> {
            self.submitted.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn test_dispatch_reaches_all_sinks() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let mut registry = SinkRegistry::new();
        registry.attach(Box::new(CountingSink {
            submitted: Arc::clone(&first),
        }));
        registry.attach(Box::new(CountingSink {
            submitted: Arc::clone(&second),
        }));

        assert_eq!(registry.sink_count(), 2);

        let record = LogRecord::new(Severity::Info, "hello".to_string());
        registry.dispatch(&record).expect("dispatch");

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_default_threshold_captures_all() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut registry = SinkRegistry::new();
        registry.attach(Box::new(CountingSink {
            submitted: Arc::clone(&counter),
        }));

        for severity in [
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ] {
            registry
                .dispatch(&LogRecord::new(severity, "x".to_string()))
                .expect("dispatch");
        }

        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_threshold_filters_below() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut registry = SinkRegistry::new();
        registry.attach(Box::new(CountingSink {
            submitted: Arc::clone(&counter),
        }));
        registry.set_threshold(Severity::Warning.level());

        registry
            .dispatch(&LogRecord::new(Severity::Debug, "dropped".to_string()))
            .expect("dispatch");
        registry
            .dispatch(&LogRecord::new(Severity::Error, "kept".to_string()))
            .expect("dispatch");

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sink_failure_propagates() {
        struct FailingSink;

        impl Sink for FailingSink {
            fn submit(&mut self, _record: &LogRecord) -> Result<()> {
                Err(crate::core::error::LogError::sink("failing", "boom"))
            }

            fn flush(&mut self) -> Result<()> {
                Ok(())
            }

            fn name(&self) -> &str {
                "failing"
            }
        }

        let mut registry = SinkRegistry::new();
        registry.attach(Box::new(FailingSink));

        let record = LogRecord::new(Severity::Info, "hello".to_string());
        assert!(registry.dispatch(&record).is_err());
    }
}
