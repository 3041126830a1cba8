//! Incoming aggregation request envelopes.

use serde::{Deserialize, Serialize};

/// One provider invocation inside an [`AggregateRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRequest {
    /// Provider identifier, matched case-insensitively.
    pub provider: String,
    /// Optional caller-supplied credential, overriding the configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Requested feature names, in order. May be empty or contain names
    /// unknown to the provider; duplicates are processed independently.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub functionality: Vec<String>,
}

impl ProviderRequest {
    /// Convenience constructor for a provider with a list of features.
    #[must_use]
    pub fn new<I, S>(provider: impl Into<String>, functionality: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            provider: provider.into(),
            api_key: None,
            functionality: functionality.into_iter().map(Into::into).collect(),
        }
    }
}

/// The incoming request: an ordered list of provider invocations.
///
/// Provider names are not required to be unique; duplicate entries produce
/// independent fetches whose responses overwrite each other by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// Providers to fan out to, in request order.
    pub providers: Vec<ProviderRequest>,
}
