//! Wire the real YouTube and Twitch providers into a gateway.
//!
//! Requires credentials:
//!   YOUTUBE_API_KEY, TWITCH_CLIENT_ID, TWITCH_CLIENT_SECRET
//!
//! Run with: `cargo run -p medley --example 02_live_gateway`

use std::sync::Arc;
use std::time::Duration;

use medley::{Aggregator, ProviderFactory, select_status};
use medley_twitch::TwitchProvider;
use medley_types::{
    AggregateRequest, CacheConfig, GatewayConfig, ProviderRequest, TwitchConfig, YouTubeConfig,
};
use medley_youtube::YouTubeProvider;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let youtube_cfg = YouTubeConfig {
        api_key: std::env::var("YOUTUBE_API_KEY").unwrap_or_default(),
        ..YouTubeConfig::default()
    };
    let twitch_cfg = TwitchConfig {
        client_id: std::env::var("TWITCH_CLIENT_ID").unwrap_or_default(),
        client_secret: std::env::var("TWITCH_CLIENT_SECRET").unwrap_or_default(),
        ..TwitchConfig::default()
    };

    let factory = ProviderFactory::builder()
        .cache_config(CacheConfig {
            ttl: Duration::from_secs(120),
            max_entries: 256,
        })
        .with_provider(Arc::new(YouTubeProvider::new(youtube_cfg)))
        .with_provider(Arc::new(TwitchProvider::new(twitch_cfg)))
        .build();

    let gateway = Aggregator::new(
        factory,
        GatewayConfig {
            provider_timeout: Duration::from_secs(5),
            request_timeout: Some(Duration::from_secs(10)),
        },
    );

    let request = AggregateRequest {
        providers: vec![
            ProviderRequest::new("youtube", ["trending"]),
            ProviderRequest::new("twitch", ["trending"]),
        ],
    };

    let response = gateway.aggregate(&request).await;
    println!("overall status: {}", select_status(&response));
    println!(
        "{}",
        serde_json::to_string_pretty(&response).expect("response serializes")
    );
}
