//! Middleware trait for wrapping `ProviderStrategy` implementations.

use std::sync::Arc;

use crate::provider::ProviderStrategy;

/// Trait implemented by provider middleware layers.
///
/// A middleware consumes an inner `ProviderStrategy` and returns a wrapped
/// strategy that augments behavior (e.g., caching) while keeping the
/// `fetch_feature` contract indistinguishable to callers.
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner strategy and return the
    /// wrapped strategy.
    fn apply(self: Box<Self>, inner: Arc<dyn ProviderStrategy>) -> Arc<dyn ProviderStrategy>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}
