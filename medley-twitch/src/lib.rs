//! medley-twitch
//!
//! Twitch provider strategy: trending live streams fetched from the Helix
//! API behind an app-token provider that owns its own refresh policy.

use std::sync::Arc;

use async_trait::async_trait;
use medley_core::{FeatureRegistry, ProviderStrategy};
use medley_types::{AppError, ContentItem, ProviderRequest, TwitchConfig};

mod adapters;
mod features;
mod token;

pub use crate::adapters::TrendingStreamsAdapter;
pub use crate::features::TrendingFeature;
pub use crate::token::AppTokenProvider;

/// Provider tag stamped on every item this crate produces.
pub const PROVIDER: &str = "twitch";

/// Twitch provider strategy.
///
/// The `trending` feature is wired at construction; the OAuth app token is
/// owned by an injected [`AppTokenProvider`] shared across adapters.
pub struct TwitchProvider {
    registry: FeatureRegistry,
}

impl TwitchProvider {
    /// Build the provider with its adapters and feature strategies wired.
    #[must_use]
    pub fn new(cfg: TwitchConfig) -> Self {
        let client = reqwest::Client::new();
        let tokens = Arc::new(AppTokenProvider::new(cfg.clone(), client.clone()));
        Self::with_token_provider(cfg, client, tokens)
    }

    /// Build the provider around an existing token provider, e.g. one
    /// shared with other Helix consumers.
    #[must_use]
    pub fn with_token_provider(
        cfg: TwitchConfig,
        client: reqwest::Client,
        tokens: Arc<AppTokenProvider>,
    ) -> Self {
        let mut registry = FeatureRegistry::new();
        registry.register_adapter(
            "trending",
            Arc::new(TrendingStreamsAdapter::new(cfg, client, tokens)),
        );
        registry.register_strategy("trending", Arc::new(TrendingFeature));
        Self { registry }
    }
}

#[async_trait]
impl ProviderStrategy for TwitchProvider {
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
