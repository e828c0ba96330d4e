//! Remote backend sink and client
//!
//! Submits structured records to a remote log collection service and sends
//! one discrete report per error-severity call. All calls are blocking and
//! happen inline on the caller's thread; failures propagate with no retry.

use crate::core::{ErrorReporter, LogError, LogRecord, Result, Sink};
use serde::Serialize;
use std::env;
use std::time::Duration;

/// Overridable via [`ENDPOINT_VAR`]
pub const DEFAULT_ENDPOINT: &str = "https://logging.odo.dev";

/// Environment override for the backend endpoint
pub const ENDPOINT_VAR: &str = "REMOTE_LOG_ENDPOINT";

/// Ambient credential source when none are supplied explicitly
pub const TOKEN_VAR: &str = "REMOTE_LOG_TOKEN";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Bearer token credentials for the remote backend
#[derive(Debug, Clone)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Ambient credentials from the environment, if present
    pub fn from_env() -> Option<Self> {
        env::var(TOKEN_VAR).ok().map(Credentials::new)
    }
}

/// Resource descriptor sent alongside every remote submission
#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    pub labels: ResourceLabels,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceLabels {
    pub project_id: String,
    pub function_name: String,
}

impl Resource {
    /// The fixed descriptor shape the backend expects for this facade
    pub fn cloud_function(
        project_id: impl Into<String>,
        function_name: impl Into<String>,
    ) -> Self {
        Self {
            kind: "cloud_function".to_string(),
            labels: ResourceLabels {
                project_id: project_id.into(),
                function_name: function_name.into(),
            },
        }
    }
}

/// Blocking HTTP client for the remote backend, keyed by project id.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct RemoteClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    project_id: String,
    credentials: Option<Credentials>,
}

impl RemoteClient {
    /// Construct a client with ambient credentials (environment token, or
    /// unauthenticated if none is set).
    pub fn new(project_id: impl Into<String>) -> Result<Self> {
        Self::build(project_id.into(), Credentials::from_env())
    }

    /// Construct a client with explicit credentials.
    pub fn with_credentials(
        project_id: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        Self::build(project_id.into(), Some(credentials))
    }

    fn build(project_id: String, credentials: Option<Credentials>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let endpoint =
            env::var(ENDPOINT_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            http,
            endpoint,
            project_id,
            credentials,
        })
    }

    /// Override the backend endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<()> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), path);
        let mut request = self.http.post(url).json(body);
        if let Some(ref credentials) = self.credentials {
            request = request.bearer_auth(&credentials.token);
        }

        let response = request.send()?;
        if !response.status().is_success() {
            return Err(LogError::remote_rejected(
                &self.project_id,
                format!("HTTP {}", response.status()),
            ));
        }
        Ok(())
    }

    /// Submit one structured record.
    pub fn submit_record(&self, record: &LogRecord, resource: &Resource) -> Result<()> {
        #[derive(Serialize)]
        struct Entry<'a> {
            timestamp: String,
            severity: &'static str,
            message: &'a str,
            resource: &'a Resource,
        }

        let entry = Entry {
            timestamp: record.timestamp.to_rfc3339(),
            severity: record.severity.to_str(),
            message: &record.message,
            resource,
        };
        self.post(&format!("v1/projects/{}/entries", self.project_id), &entry)
    }
}

impl ErrorReporter for RemoteClient {
    fn report(&self, project_id: &str, detail: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Event<'a> {
            message: &'a str,
        }

        self.post(
            &format!("v1/projects/{}/events:report", project_id),
            &Event { message: detail },
        )
    }
}

/// Registry sink forwarding every record to the remote backend
pub struct RemoteSink {
    client: RemoteClient,
    resource: Resource,
}

impl RemoteSink {
    pub fn new(client: RemoteClient, resource: Resource) -> Self {
        Self { client, resource }
    }
}

impl Sink for RemoteSink {
    fn submit(&mut self, record: &LogRecord) -> Result<()> {
        self.client.submit_record(record, &self.resource)
    }

    fn flush(&mut self) -> Result<()> {
        // Each submission is sent inline; nothing is buffered
        Ok(())
    }

    fn name(&self) -> &str {
        "remote"
    }
}
