//! medley-youtube
//!
//! YouTube provider strategy: trending chart and playlist-backed my-list,
//! fetched from the Data API v3 and normalized into medley content items.

use std::sync::Arc;

use async_trait::async_trait;
use medley_core::{FeatureRegistry, ProviderStrategy};
use medley_types::{AppError, ContentItem, ProviderRequest, YouTubeConfig};

mod adapters;
mod features;
mod mapper;
mod util;

pub use crate::adapters::{MyListAdapter, TrendingAdapter};
pub use crate::features::{MyListFeature, TrendingFeature};

/// Provider tag stamped on every item this crate produces.
pub const PROVIDER: &str = "youtube";

/// YouTube provider strategy.
///
/// Features are wired at construction: `trending` (most-popular chart for
/// the configured region) and `mylist` (items of the configured playlist).
pub struct YouTubeProvider {
    registry: FeatureRegistry,
}

impl YouTubeProvider {
    /// Build the provider with its adapters and feature strategies wired.
    #[must_use]
    pub fn new(cfg: YouTubeConfig) -> Self {
        let client = reqwest::Client::new();
        let mut registry = FeatureRegistry::new();
        registry.register_adapter(
            "trending",
            Arc::new(TrendingAdapter::new(cfg.clone(), client.clone())),
        );
        registry.register_strategy("trending", Arc::new(TrendingFeature));
        registry.register_adapter("mylist", Arc::new(MyListAdapter::new(cfg, client)));
        registry.register_strategy("mylist", Arc::new(MyListFeature));
        Self { registry }
    }
}

#[async_trait]
impl ProviderStrategy for YouTubeProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn fetch_feature(
        &self,
        req: &ProviderRequest,
        feature: &str,
    ) -> Result<Vec<ContentItem>, AppError> {
        self.registry.dispatch(req, feature).await
    }
}
