//! Fixed timestamp formats used by the facade
//!
//! Three formats, all strftime-based: the dated directory name, the handler
//! file stamp, and the millisecond-precision stamp on named log file lines.

use chrono::{DateTime, Local};

/// Directory bucket name, e.g. `2024-01-05`
pub const DIR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Stamp on handler file lines, e.g. `2024-01-05 10:30:45`
pub const HANDLER_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stamp on named log file lines, e.g. `05-01-2024 10:30:45.123`
/// (`%.3f` truncates to milliseconds)
pub const LINE_FORMAT: &str = "%d-%m-%Y %H:%M:%S%.3f";

/// Format a timestamp as a dated directory name
#[must_use]
pub fn dir_date(at: &DateTime<Local>) -> String {
    at.format(DIR_DATE_FORMAT).to_string()
}

/// Format a timestamp for a handler file line
#[must_use]
pub fn handler_stamp(at: &DateTime<Local>) -> String {
    at.format(HANDLER_FORMAT).to_string()
}

/// Format a timestamp for a named log file line
#[must_use]
pub fn line_stamp(at: &DateTime<Local>) -> String {
    at.format(LINE_FORMAT).to_string()
}
