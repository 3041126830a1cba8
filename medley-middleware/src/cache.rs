//! Response cache decorator for provider strategies.

use std::sync::Arc;

use async_trait::async_trait;
use medley_core::{Middleware, ProviderStrategy};
use medley_types::{AppError, CacheConfig, ContentItem, ProviderRequest};
use moka::future::Cache;

/// Identity of one cached fetch.
///
/// The credential is part of the key: two tenants asking for the same
/// provider/feature must never see each other's snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FeatureKey {
    provider: String,
    feature: String,
    credential: Option<String>,
}

impl FeatureKey {
    fn new(provider: &str, req: &ProviderRequest, feature: &str) -> Self {
        Self {
            provider: provider.to_owned(),
            feature: feature.to_owned(),
            credential: req.api_key.clone(),
        }
    }
}

/// Transparent caching wrapper around a provider strategy.
///
/// Implements the same [`ProviderStrategy`] contract as the inner strategy,
/// so callers cannot tell the two apart. Policy:
///
/// - Hit within TTL: return the stored snapshot; the inner strategy is not
///   invoked and the cache is not touched.
/// - Miss: invoke the inner strategy. Failures propagate unchanged and are
///   never stored, so errors are retried on the next call.
/// - Success: store under the key with the fixed TTL, then return.
///
/// Concurrent misses for the same key may each reach the inner strategy;
/// the store's per-key atomicity keeps the entries consistent, but no
/// request coalescing is performed here.
pub struct CachingProvider {
    inner: Arc<dyn ProviderStrategy>,
    store: Option<Cache<FeatureKey, Arc<Vec<ContentItem>>>>,
}

impl CachingProvider {
    /// Wrap `inner` according to `cfg`. A zero TTL disables the store and
    /// the wrapper degrades to a pass-through.
    #[must_use]
    pub fn new(inner: Arc<dyn ProviderStrategy>, cfg: &CacheConfig) -> Self {
        let store = cfg.is_enabled().then(|| {
            Cache::builder()
                .max_capacity(cfg.max_entries)
                .time_to_live(cfg.ttl)
                .build()
        });
        Self { inner, store }
    }
}

#[async_trait]
impl ProviderStrategy for CachingProvider {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn fetch_feature(
        &self,
        req: &ProviderRequest,
        feature: &str,
    ) -> Result<Vec<ContentItem>, AppError> {
        let Some(store) = &self.store else {
            return self.inner.fetch_feature(req, feature).await;
        };

        let key = FeatureKey::new(self.inner.name(), req, feature);
        if let Some(hit) = store.get(&key).await {
            tracing::debug!(provider = %key.provider, feature, "cache hit");
            return Ok((*hit).clone());
        }
        tracing::debug!(provider = %key.provider, feature, "cache miss");

        let items = self.inner.fetch_feature(req, feature).await?;
        store.insert(key, Arc::new(items.clone())).await;
        Ok(items)
    }
}

/// Declarative layer that applies caching when building a provider stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Capture the cache configuration for later application.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn ProviderStrategy>) -> Arc<dyn ProviderStrategy> {
        let Self { cfg } = *self;
        Arc::new(CachingProvider::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        "CachingMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "ttl_ms": u64::try_from(self.cfg.ttl.as_millis()).unwrap_or(u64::MAX),
            "max_entries": self.cfg.max_entries,
        })
    }
}
