//! Main logger facade implementation

use super::{
    caller,
    config,
    error::{LogError, Result},
    record::LogRecord,
    registry::{ErrorReporter, Sink, SinkRegistry},
    severity::Severity,
    timestamp,
};
use crate::sinks::{Credentials, FileSink, RemoteClient, RemoteSink, Resource};
use chrono::Local;
use parking_lot::Mutex;
use std::error::Error;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::panic::Location;
use std::path::PathBuf;

/// Root directory for local logs unless overridden via the builder
pub const DEFAULT_LOGS_ROOT: &str = "logs";

/// Handler file written by the registry's file sink, shared across loggers
/// in the same dated directory
pub const HANDLER_FILE: &str = "any.log";

/// Trace rendering when `error()` is called without an error context
const NO_ACTIVE_ERROR: &str = "no active error";

/// Logging facade over a date-bucketed local file, a console echo, and an
/// optional remote backend.
///
/// The dated directory and log name are fixed at construction; every record
/// from one instance lands in the same directory for the instance lifetime.
/// The named log file handle stays open until the logger is dropped, and
/// writes to it are serialized behind a mutex so a shared instance is safe
/// across threads.
///
/// # Example
///
/// ```no_run
/// use logbook::Logger;
///
/// let logger = Logger::with_name("svc")?;
/// logger.info("started")?;
/// # Ok::<(), logbook::LogError>(())
/// ```
pub struct Logger {
    name: String,
    log_dir: PathBuf,
    log_file: PathBuf,
    file: Mutex<File>,
    registry: Mutex<SinkRegistry>,
    remote_project_id: Option<String>,
    reporter: Option<Box<dyn ErrorReporter>>,
}

impl Logger {
    /// Create a logger named after the calling source file.
    #[track_caller]
    pub fn new() -> Result<Self> {
        Self::from_parts(None, PathBuf::from(DEFAULT_LOGS_ROOT), Location::caller())
    }

    /// Create a logger with an explicit name.
    #[track_caller]
    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        Self::from_parts(
            Some(name.into()),
            PathBuf::from(DEFAULT_LOGS_ROOT),
            Location::caller(),
        )
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```no_run
    /// use logbook::Logger;
    ///
    /// let logger = Logger::builder()
    ///     .name("svc")
    ///     .logs_root("/var/log/svc")
    ///     .build()?;
    /// # Ok::<(), logbook::LogError>(())
    /// ```
    #[must_use]
    #[track_caller]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new(Location::caller())
    }

    fn from_parts(
        name: Option<String>,
        logs_root: PathBuf,
        location: &'static Location<'static>,
    ) -> Result<Self> {
        let name = caller::resolve_name(name.as_deref(), location);

        let today = Local::now();
        let log_dir = logs_root.join(timestamp::dir_date(&today));
        // create_dir_all treats an existing directory as success
        fs::create_dir_all(&log_dir)
            .map_err(|e| LogError::create_dir(log_dir.display().to_string(), e))?;

        let log_file = log_dir.join(format!("{}.log", name));

        println!("{} logs can be found in {}", name, log_dir.display());

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .map_err(|e| LogError::file_open(log_file.display().to_string(), e))?;

        let mut registry = SinkRegistry::new();
        registry.attach(Box::new(FileSink::new(log_dir.join(HANDLER_FILE))?));

        Ok(Self {
            name,
            log_dir,
            log_file,
            file: Mutex::new(file),
            registry: Mutex::new(registry),
            remote_project_id: None,
            reporter: None,
        })
    }

    /// Enable remote logging against the given backend project.
    ///
    /// Attaches a remote sink for structured record submission and installs
    /// an error reporter invoked once per error-severity call. Client
    /// construction failures propagate; there is no local-only fallback.
    pub fn set_remote_logging(
        &mut self,
        project_id: impl Into<String>,
        credentials: Option<Credentials>,
    ) -> Result<()> {
        let project_id = project_id.into();
        let resource = Resource::cloud_function(&project_id, config::function_tag());

        let client = match credentials {
            Some(credentials) => RemoteClient::with_credentials(&project_id, credentials)?,
            None => RemoteClient::new(&project_id)?,
        };

        let sink = RemoteSink::new(client.clone(), resource);
        self.attach_remote(project_id, Box::new(sink), Box::new(client));
        Ok(())
    }

    /// Attach a remote sink and error reporter directly.
    ///
    /// `set_remote_logging` goes through here; tests use it to inject
    /// recording fakes without a live backend.
    pub fn attach_remote(
        &mut self,
        project_id: impl Into<String>,
        sink: Box<dyn Sink>,
        reporter: Box<dyn ErrorReporter>,
    ) {
        self.remote_project_id = Some(project_id.into());
        self.registry.lock().attach(sink);
        self.reporter = Some(reporter);
    }

    /// Attach an additional local sink.
    pub fn attach_sink(&self, sink: Box<dyn Sink>) {
        self.registry.lock().attach(sink);
    }

    /// Dispatch a message at the given severity.
    ///
    /// For [`Severity::Error`] the message gains an error-trace rendering
    /// (see [`Logger::error_with`] for an explicit error context) and, if
    /// remote logging is configured, one discrete report is sent. The
    /// record then goes to every registered sink, is echoed to stdout when
    /// non-empty, and is appended to the named log file.
    pub fn log(&self, text: &str, severity: Severity) -> Result<()> {
        self.dispatch(text, severity, None)
    }

    #[inline]
    pub fn info(&self, text: &str) -> Result<()> {
        self.dispatch(text, Severity::Info, None)
    }

    #[inline]
    pub fn warning(&self, text: &str) -> Result<()> {
        self.dispatch(text, Severity::Warning, None)
    }

    #[inline]
    pub fn debug(&self, text: &str) -> Result<()> {
        self.dispatch(text, Severity::Debug, None)
    }

    /// Log at error severity without an error context; the appended trace
    /// reads "no active error".
    #[inline]
    pub fn error(&self, text: &str) -> Result<()> {
        self.dispatch(text, Severity::Error, None)
    }

    /// Log at error severity with an explicit error context. The error and
    /// its source chain are rendered into the stored message.
    pub fn error_with(&self, text: &str, source: &(dyn Error + 'static)) -> Result<()> {
        self.dispatch(text, Severity::Error, Some(source))
    }

    fn dispatch(
        &self,
        text: &str,
        severity: Severity,
        source: Option<&(dyn Error + 'static)>,
    ) -> Result<()> {
        let mut message = text.to_string();

        if severity == Severity::Error {
            message.push('\n');
            message.push_str(&render_trace(source));

            if let (Some(project_id), Some(reporter)) =
                (&self.remote_project_id, &self.reporter)
            {
                reporter.report(project_id, &message)?;
            }
        }

        let record = LogRecord::new(severity, message);
        self.registry.lock().dispatch(&record)?;

        // Error messages always carry a trace, so they always echo
        if !record.message.is_empty() {
            println!("{}", record.message);
        }

        self.append_line(&record)
    }

    fn append_line(&self, record: &LogRecord) -> Result<()> {
        let line = format!(
            "{} {}: {}\n",
            timestamp::line_stamp(&record.timestamp),
            record.severity.code(),
            record.message
        );

        let mut file = self.file.lock();
        file.write_all(line.as_bytes())
            .map_err(|e| LogError::file_write(self.log_file.display().to_string(), e))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn log_dir(&self) -> &std::path::Path {
        &self.log_dir
    }

    pub fn log_file(&self) -> &std::path::Path {
        &self.log_file
    }

    pub fn remote_project_id(&self) -> Option<&str> {
        self.remote_project_id.as_deref()
    }

    pub fn flush(&self) -> Result<()> {
        self.registry.lock().flush()?;
        self.file.lock().flush().map_err(LogError::from)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

fn render_trace(source: Option<&(dyn Error + 'static)>) -> String {
    match source {
        None => NO_ACTIVE_ERROR.to_string(),
        Some(err) => {
            let mut out = format!("error: {}", err);
            let mut cause = err.source();
            while let Some(inner) = cause {
                out.push_str(&format!("\ncaused by: {}", inner));
                cause = inner.source();
            }
            out
        }
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    name: Option<String>,
    logs_root: PathBuf,
    location: &'static Location<'static>,
}

impl LoggerBuilder {
    fn new(location: &'static Location<'static>) -> Self {
        Self {
            name: None,
            logs_root: PathBuf::from(DEFAULT_LOGS_ROOT),
            location,
        }
    }

    /// Set an explicit log name instead of inferring one
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the root directory under which dated directories are created
    #[must_use = "builder methods return a new value"]
    pub fn logs_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.logs_root = root.into();
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        Logger::from_parts(self.name, self.logs_root, self.location)
    }
}
