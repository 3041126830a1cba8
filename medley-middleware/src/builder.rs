//! Builder for composing a provider strategy with middleware layers.
//!
//! Layers form an onion around the raw strategy: the `layers` vector stores
//! them outermost-first (last added = outermost) and `build()` applies them
//! in reverse so the first stored layer ends up wrapping everything else.

use std::sync::Arc;

use medley_core::{Middleware, ProviderStrategy};
use medley_types::CacheConfig;

/// Generic middleware builder for composing a provider with layered
/// wrappers.
pub struct ProviderBuilder {
    raw: Arc<dyn ProviderStrategy>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ProviderBuilder {
    /// Create a new builder from a raw, unwrapped strategy.
    #[must_use]
    pub fn new(raw: Arc<dyn ProviderStrategy>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the caching layer at the outermost position.
    ///
    /// If a caching layer already exists it is removed and replaced.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != "CachingMiddleware");
        self.layers
            .insert(0, Box::new(crate::cache::CacheMiddleware::new(cfg.clone())));
        self
    }

    /// Remove the caching layer if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != "CachingMiddleware");
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Build the wrapped strategy, applying layers innermost to outermost.
    #[must_use]
    pub fn build(self) -> Arc<dyn ProviderStrategy> {
        let mut acc: Arc<dyn ProviderStrategy> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
