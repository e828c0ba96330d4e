//! Environment-driven remote backend configuration

use std::env;

/// Selects the remote project id. The misspelling is load-bearing: existing
/// deployments export this exact name.
pub const ENVIRONMENT_VAR: &str = "ENVIRONEMENT";

/// Project id used when `ENVIRONEMENT=PROD`
pub const PRODUCTION_PROJECT_ID: &str = "odo-prod";

/// Project id used in every other environment
pub const DEVELOPMENT_PROJECT_ID: &str = "sage-inn-292904";

/// Pick the remote project id for the current environment.
#[must_use]
pub fn remote_project_id() -> &'static str {
    match env::var(ENVIRONMENT_VAR) {
        Ok(value) if value == "PROD" => PRODUCTION_PROJECT_ID,
        _ => DEVELOPMENT_PROJECT_ID,
    }
}

/// Function tag sent in the remote resource descriptor: the enclosing
/// project directory's base name, `unknown` when it cannot be determined.
#[must_use]
pub fn function_tag() -> String {
    env::current_dir()
        .ok()
        .and_then(|dir| {
            dir.file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "unknown".to_string())
}
