//! Medley fans one request out across multiple content providers and
//! merges the results into a single partially-successful response.
//!
//! Overview
//! - Resolves provider names through a [`ProviderFactory`] built once at
//!   startup; every resolved provider is wrapped by the response cache.
//! - Fetches each requested feature independently; one feature's failure
//!   never aborts sibling features or sibling providers.
//! - Collects failures per feature into an explicit accumulator
//!   ([`medley_types::ProviderResponse`]) instead of propagating them.
//! - Derives exactly one HTTP status from the mix of successes and
//!   failures via [`select_status`], preferring client-correctable errors
//!   over upstream failures when everything failed.
//!
//! Building a gateway and aggregating a request:
//! ```rust,ignore
//! use std::sync::Arc;
//! use medley::{Aggregator, ProviderFactory, select_status};
//! use medley_types::{AggregateRequest, CacheConfig, GatewayConfig};
//!
//! let factory = ProviderFactory::builder()
//!     .cache_config(CacheConfig::default())
//!     .with_provider(Arc::new(medley_youtube::YouTubeProvider::new(yt_cfg)))
//!     .with_provider(Arc::new(medley_twitch::TwitchProvider::new(tw_cfg)))
//!     .build();
//!
//! let gateway = Aggregator::new(factory, GatewayConfig::default());
//! let response = gateway.aggregate(&request).await;
//! let status = select_status(&response);
//! // hand (status, response) to the transport layer for serialization
//! ```
//!
//! See `medley/examples/` for a runnable end-to-end demonstration.
#![warn(missing_docs)]

mod aggregator;
mod factory;
mod status;

pub use aggregator::Aggregator;
pub use factory::{ProviderFactory, ProviderFactoryBuilder};
pub use status::select_status;

pub use medley_middleware::{CacheMiddleware, CachingProvider, ProviderBuilder};

// Re-export the contract and DTO layers for convenience.
pub use medley_core::{FeatureRegistry, FeatureStrategy, FetchAdapter, Middleware, ProviderStrategy};
pub use medley_types::{
    AggregateRequest, AggregateResponse, AppError, CacheConfig, ContentItem, ContentType,
    GatewayConfig, PROVIDER_ERROR_KEY, ProviderRequest, ProviderResponse,
};
