//! The provider capability and its feature dispatch core.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use medley_types::{AppError, ContentItem, ProviderRequest};

use crate::feature::FeatureStrategy;

/// Capability implemented by every content provider (and by decorators
/// wrapping one).
///
/// A provider resolves a feature name to an upstream fetch plus the
/// feature's post-processing. New providers are added by registering
/// adapter/strategy pairs in a [`FeatureRegistry`]; nothing outside a
/// provider's own registry branches on provider identity.
#[async_trait]
pub trait ProviderStrategy: Send + Sync {
    /// Stable provider identifier (e.g. "youtube").
    fn name(&self) -> &'static str;

    /// Fetch and post-process one feature's items.
    ///
    /// # Errors
    /// - Client-error classification when the feature is unknown to this
    ///   provider.
    /// - Gateway-class classification when the upstream call fails.
    /// - Whatever the feature strategy itself reports.
    async fn fetch_feature(
        &self,
        req: &ProviderRequest,
        feature: &str,
    ) -> Result<Vec<ContentItem>, AppError>;
}

/// Upstream fetch contract: perform the vendor call for one feature and
/// produce raw normalized items.
///
/// Pagination, auth-token refresh, and rate-limit handling are internal to
/// the adapter; any upstream failure (network error, non-2xx, malformed
/// payload) must surface as a gateway-class [`AppError`].
#[async_trait]
pub trait FetchAdapter: Send + Sync {
    /// Call the upstream and return raw normalized items.
    async fn fetch(&self, req: &ProviderRequest) -> Result<Vec<ContentItem>, AppError>;
}

/// Per-provider registry mapping feature names to fetch adapters and
/// feature strategies.
///
/// Dispatch order: adapter lookup (absent → "feature unsupported"),
/// adapter invocation (failure propagates), then the feature strategy
/// (absent → adapter output passes through unchanged).
#[derive(Default)]
pub struct FeatureRegistry {
    adapters: HashMap<String, Arc<dyn FetchAdapter>>,
    strategies: HashMap<String, Arc<dyn FeatureStrategy>>,
}

impl FeatureRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the upstream adapter serving `feature`.
    pub fn register_adapter(&mut self, feature: impl Into<String>, adapter: Arc<dyn FetchAdapter>) {
        self.adapters.insert(feature.into(), adapter);
    }

    /// Register the post-processing strategy serving `feature`.
    pub fn register_strategy(
        &mut self,
        feature: impl Into<String>,
        strategy: Arc<dyn FeatureStrategy>,
    ) {
        self.strategies.insert(feature.into(), strategy);
    }

    /// Whether an adapter is wired for `feature`.
    #[must_use]
    pub fn supports(&self, feature: &str) -> bool {
        self.adapters.contains_key(feature)
    }

    /// Run the dispatch algorithm for one feature.
    ///
    /// # Errors
    /// See [`ProviderStrategy::fetch_feature`].
    pub async fn dispatch(
        &self,
        req: &ProviderRequest,
        feature: &str,
    ) -> Result<Vec<ContentItem>, AppError> {
        let adapter = self
            .adapters
            .get(feature)
            .ok_or_else(|| AppError::unsupported_feature(feature))?;

        let raw = adapter.fetch(req).await?;

        match self.strategies.get(feature) {
            Some(strategy) => strategy.apply(raw),
            None => Ok(raw),
        }
    }
}
