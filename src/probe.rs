//! HTTP reachability probe.
//!
//! One GET per run. The request timeout is nested inside an operation
//! deadline: the client never gets more time than the deadline has left.
use crate::error::UnreachableError;
use serde_json::Value;
use std::time::{Duration, Instant};
use ureq::Agent;

/// Upper bound for the HTTP request itself (connect, send, body read).
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Upper bound for the whole reachability check.
pub const OPERATION_DEADLINE: Duration = Duration::from_secs(15);
/// `response_field` value when no `response_key` is configured.
pub const REACHABLE_MESSAGE: &str = "API Reachable";

#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub request_timeout: Duration,
    pub deadline: Duration,
    pub response_key: Option<String>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            request_timeout: REQUEST_TIMEOUT,
            deadline: OPERATION_DEADLINE,
            response_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub status: u16,
    /// Value published as `response_field`.
    pub response_field: String,
    pub elapsed: Duration,
}

/// A fixed point in time after which the probe gives up.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    limit: Duration,
}

impl Deadline {
    pub fn start(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time left, or `None` once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.limit
            .checked_sub(self.elapsed())
            .filter(|left| !left.is_zero())
    }

    /// Clamp `timeout` to the time left.
    pub fn bound(&self, timeout: Duration) -> Option<Duration> {
        self.remaining().map(|left| left.min(timeout))
    }

    fn exceeded(&self) -> UnreachableError {
        UnreachableError::DeadlineExceeded {
            deadline_ms: self.limit.as_millis(),
        }
    }
}

/// Issue a GET to `url` and require a 2xx status.
pub fn check_reachable(
    url: &str,
    options: &ProbeOptions,
) -> Result<ProbeOutcome, UnreachableError> {
    let deadline = Deadline::start(options.deadline);
    let timeout = deadline
        .bound(options.request_timeout)
        .ok_or_else(|| deadline.exceeded())?;

    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into();

    let mut response = agent
        .get(url)
        .call()
        .map_err(|err| classify(err, timeout))?;
    let status = response.status().as_u16();
    if !(200..300).contains(&status) {
        tracing::debug!(url, status, "API returned a non-success status");
        return Err(UnreachableError::Status { status });
    }

    let response_field = match options.response_key.as_deref() {
        Some(key) => {
            let body: Value = response
                .body_mut()
                .read_json()
                .map_err(|err| match classify(err, timeout) {
                    UnreachableError::Transport(cause) => UnreachableError::Response(format!(
                        "failed to parse JSON response: {cause}"
                    )),
                    other => other,
                })?;
            extract_field(&body, key)?
        }
        None => REACHABLE_MESSAGE.to_string(),
    };

    if deadline.remaining().is_none() {
        return Err(deadline.exceeded());
    }

    let elapsed = deadline.elapsed();
    tracing::info!(
        url,
        status,
        elapsed_ms = elapsed.as_millis(),
        "API check complete"
    );
    Ok(ProbeOutcome {
        status,
        response_field,
        elapsed,
    })
}

/// Read a top-level string field from a JSON object body.
pub fn extract_field(body: &Value, key: &str) -> Result<String, UnreachableError> {
    body.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            UnreachableError::Response(format!(
                "field '{key}' not found in API response or is not a string"
            ))
        })
}

fn classify(err: ureq::Error, timeout: Duration) -> UnreachableError {
    match err {
        ureq::Error::Timeout(_) => UnreachableError::Timeout {
            timeout_ms: timeout.as_millis(),
        },
        ureq::Error::Io(ref io) if io.kind() == std::io::ErrorKind::TimedOut => {
            UnreachableError::Timeout {
                timeout_ms: timeout.as_millis(),
            }
        }
        ureq::Error::StatusCode(status) => UnreachableError::Status { status },
        other => UnreachableError::Transport(other),
    }
}
