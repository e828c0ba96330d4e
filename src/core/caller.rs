//! Caller identity resolution
//!
//! The log name defaults to the base name of the source file that invoked
//! the public constructor, captured via `#[track_caller]` rather than by
//! walking the call stack at runtime. When no usable file name can be
//! extracted, the process invocation argument is used instead.

use std::panic::Location;
use std::path::Path;

/// Resolve the log name for a logger.
///
/// Precedence: an explicit name wins; otherwise the caller file's base name
/// (without extension); otherwise the base name of `argv[0]`.
pub fn resolve_name(explicit: Option<&str>, caller: &Location<'_>) -> String {
    if let Some(name) = explicit {
        if !name.is_empty() {
            return name.to_string();
        }
    }
    if let Some(stem) = file_stem(caller.file()) {
        return stem;
    }
    invocation_name()
}

fn file_stem(path: &str) -> Option<String> {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

fn invocation_name() -> String {
    std::env::args()
        .next()
        .and_then(|arg0| file_stem(&arg0))
        .unwrap_or_else(|| "log".to_string())
}
