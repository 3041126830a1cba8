//! Configuration types consumed at factory-construction time.
//!
//! Loading (YAML files, environment overrides) belongs to the process
//! bootstrap outside this workspace; only the typed boundary lives here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for the aggregation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Timeout applied to each individual upstream feature fetch.
    pub provider_timeout: Duration,
    /// Optional overall deadline for one aggregation call. When exceeded,
    /// the engine returns whatever partial results were collected.
    pub request_timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}

/// Tunables for the response cache wrapped around each provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a stored feature snapshot stays valid. Zero disables the
    /// cache layer entirely.
    pub ttl: Duration,
    /// Maximum number of (provider, feature, credential) entries retained.
    pub max_entries: u64,
}

impl CacheConfig {
    /// Whether the configuration enables caching at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_entries: 1024,
        }
    }
}

/// Construction-time settings for the YouTube provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeConfig {
    /// API origin; overridable for tests.
    pub api_host: String,
    /// Application API key used when the request carries none.
    pub api_key: String,
    /// Region whose trending chart is fetched.
    pub region: String,
    /// Playlist backing the my-list feature.
    pub playlist_id: String,
    /// Upper bound on items requested per upstream call.
    pub max_results: u32,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_host: "https://www.googleapis.com".to_owned(),
            api_key: String::new(),
            region: "DE".to_owned(),
            playlist_id: String::new(),
            max_results: 20,
        }
    }
}

/// Construction-time settings for the Twitch provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwitchConfig {
    /// Helix API origin; overridable for tests.
    pub api_host: String,
    /// OAuth token endpoint origin; overridable for tests.
    pub auth_host: String,
    /// Application client id.
    pub client_id: String,
    /// Application client secret.
    pub client_secret: String,
    /// Upper bound on streams requested per upstream call.
    pub first: u32,
}

impl Default for TwitchConfig {
    fn default() -> Self {
        Self {
            api_host: "https://api.twitch.tv".to_owned(),
            auth_host: "https://id.twitch.tv".to_owned(),
            client_id: String::new(),
            client_secret: String::new(),
            first: 20,
        }
    }
}
