//! Provider factory: resolves a provider name to a ready-to-use strategy.

use std::collections::HashMap;
use std::sync::Arc;

use medley_core::ProviderStrategy;
use medley_middleware::ProviderBuilder;
use medley_types::CacheConfig;

/// Resolves provider names (case-insensitively) to cache-wrapped
/// strategies.
///
/// Registration is static: every provider is handed to the builder before
/// construction and wrapped by the cache decorator exactly once, so the
/// cache store is shared across all requests hitting that provider.
pub struct ProviderFactory {
    providers: HashMap<String, Arc<dyn ProviderStrategy>>,
}

impl ProviderFactory {
    /// Start building a factory.
    #[must_use]
    pub fn builder() -> ProviderFactoryBuilder {
        ProviderFactoryBuilder::new()
    }

    /// Resolve `name` to its strategy, or `None` when unregistered.
    ///
    /// `None` is the sentinel the aggregation engine turns into a reported
    /// "provider not supported" error; it is not an error value here.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn ProviderStrategy>> {
        self.providers.get(&name.to_lowercase()).cloned()
    }

    /// Number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no providers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Builder collecting providers and the cache configuration they share.
pub struct ProviderFactoryBuilder {
    cache: CacheConfig,
    raw: Vec<Arc<dyn ProviderStrategy>>,
}

impl Default for ProviderFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderFactoryBuilder {
    /// Create a builder with the default cache configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: CacheConfig::default(),
            raw: Vec::new(),
        }
    }

    /// Replace the cache configuration applied to every provider.
    #[must_use]
    pub fn cache_config(mut self, cfg: CacheConfig) -> Self {
        self.cache = cfg;
        self
    }

    /// Register a provider strategy. A later registration under the same
    /// name replaces the earlier one.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn ProviderStrategy>) -> Self {
        self.raw.push(provider);
        self
    }

    /// Build the factory, wrapping each provider with the cache decorator.
    #[must_use]
    pub fn build(self) -> ProviderFactory {
        let providers = self
            .raw
            .into_iter()
            .map(|p| {
                let key = p.name().to_lowercase();
                let wrapped = ProviderBuilder::new(p).with_cache(&self.cache).build();
                (key, wrapped)
            })
            .collect();
        ProviderFactory { providers }
    }
}
