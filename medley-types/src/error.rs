//! Typed application error with HTTP-semantics status and a fixed
//! priority ranking for picking a representative error.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Application error carried per feature through the aggregation pipeline.
///
/// Carries an HTTP-semantics status code, a machine-readable code string, a
/// human message, and optionally the underlying cause. Immutable once
/// constructed; on the wire it serializes as
/// `{"statusCode": ..., "code": ..., "message": ...}`.
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    status: u16,
    code: &'static str,
    message: String,
    #[source]
    source: Option<BoxedCause>,
}

impl AppError {
    /// Build an error from its three visible parts.
    #[must_use]
    pub fn new(status: u16, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxedCause>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Helper: 400 for malformed caller input.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, "BAD_REQUEST", message)
    }

    /// Helper: 401 for missing or rejected credentials.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, "UNAUTHORIZED", message)
    }

    /// Helper: 403 for valid credentials lacking access.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, "FORBIDDEN", message)
    }

    /// Helper: 404 for a missing upstream resource.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, "NOT_FOUND", message)
    }

    /// Helper: 422 for semantically invalid input.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(422, "VALIDATION_FAILED", message)
    }

    /// Helper: 429 for an exhausted upstream or caller quota.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(429, "RATE_LIMITED", message)
    }

    /// Helper: 502 for an upstream that failed or answered garbage.
    #[must_use]
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(502, "EXTERNAL_SERVICE_ERROR", message)
    }

    /// Helper: 503 for an upstream that is temporarily unreachable.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(503, "SERVICE_UNAVAILABLE", message)
    }

    /// Helper: 500 for a bug or unmapped condition; last resort.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(500, "INTERNAL_SERVICE_ERROR", message)
    }

    /// Helper: an upstream reply carrying its own failure status.
    #[must_use]
    pub fn provider_error(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, "PROVIDER_ERROR", message)
    }

    /// Helper: the provider has no adapter wired for the feature, or the
    /// feature name is unknown to it. Client-correctable.
    #[must_use]
    pub fn unsupported_feature(feature: &str) -> Self {
        Self::new(
            400,
            "FEATURE_UNSUPPORTED",
            format!("feature not supported: {feature}"),
        )
    }

    /// Helper: the requested provider is not registered. Client-correctable.
    #[must_use]
    pub fn unsupported_provider(provider: &str) -> Self {
        Self::new(
            400,
            "PROVIDER_UNSUPPORTED",
            format!("provider not supported: {provider}"),
        )
    }

    /// Helper: an upstream fetch exceeded its deadline. Gateway-class so it
    /// outranks internal errors but stays below client-correctable ones.
    #[must_use]
    pub fn provider_timeout(provider: &str, feature: &str) -> Self {
        Self::new(
            503,
            "PROVIDER_TIMEOUT",
            format!("{provider} timed out fetching {feature}"),
        )
    }

    /// HTTP-semantics status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Machine-readable code string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Priority rank of this error's status; lower wins.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        error_priority(self.status)
    }
}

impl Serialize for AppError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("AppError", 3)?;
        s.serialize_field("statusCode", &self.status)?;
        s.serialize_field("code", self.code)?;
        s.serialize_field("message", &self.message)?;
        s.end()
    }
}

/// Map a status to its fixed priority rank; lower numbers are picked first.
///
/// Client-correctable statuses outrank upstream failures, which outrank
/// internal errors; anything unlisted sinks to the bottom.
#[must_use]
pub const fn error_priority(status: u16) -> u8 {
    match status {
        400 => 1,
        401 => 2,
        403 => 3,
        404 => 4,
        422 => 5,
        429 => 6,
        502 => 7,
        503 => 8,
        500 => 9,
        _ => 99,
    }
}

/// Return the higher-priority of two errors; the incumbent wins ties.
#[must_use]
pub fn pick_better<'a>(current: &'a AppError, candidate: &'a AppError) -> &'a AppError {
    if candidate.priority() < current.priority() {
        candidate
    } else {
        current
    }
}
