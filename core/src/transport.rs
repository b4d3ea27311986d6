//! Blocking executor for `HttpRequest` values, built on ureq.
//!
//! # Design
//! One GET per `execute` call, no retries, no redirect special-casing beyond
//! ureq's defaults. Status-code-as-error is disabled so 4xx/5xx responses
//! come back as data and body-shape interpretation stays in
//! `BestiaryClient::parse_*`. This is the single chokepoint for connection
//! behavior: a caller wanting a timeout sets it here once and every endpoint
//! inherits it.

use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes `HttpRequest` values over real HTTP.
///
/// Holds only a `ureq::Agent` (connection pool); safe to share across
/// threads and to clone per call site.
#[derive(Debug, Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    /// A transport with no overall timeout, matching the service's own
    /// behavior of letting slow responses run.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// A transport that abandons any call running longer than `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Perform exactly one GET for `req` and accumulate the body as text.
    ///
    /// Connection-level failures (DNS, refusal, timeout, TLS) surface as
    /// `ApiError::Transport` with the underlying error unmodified.
    pub fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut response = self.agent.get(&req.url).call()?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        Ok(HttpResponse { status, body })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}
