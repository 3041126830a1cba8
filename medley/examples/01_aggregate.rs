//! Aggregate two scripted providers and print the merged response.
//!
//! Run with: `cargo run -p medley --example 01_aggregate`

use std::sync::Arc;

use medley::{Aggregator, ProviderFactory, select_status};
use medley_mock::MockProvider;
use medley_types::{AggregateRequest, GatewayConfig, ProviderRequest};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let youtube = Arc::new(
        MockProvider::new("youtube")
            .with_items(
                "trending",
                vec![
                    MockProvider::item("youtube", "yt1"),
                    MockProvider::item("youtube", "yt2"),
                ],
            )
            .with_failure("mylist", 502, "playlist backend unreachable"),
    );
    let twitch = Arc::new(
        MockProvider::new("twitch").with_items("trending", vec![MockProvider::item("twitch", "tw1")]),
    );

    let factory = ProviderFactory::builder()
        .with_provider(youtube)
        .with_provider(twitch)
        .build();
    let gateway = Aggregator::new(factory, GatewayConfig::default());

    let request = AggregateRequest {
        providers: vec![
            ProviderRequest::new("youtube", ["trending", "mylist"]),
            ProviderRequest::new("twitch", ["trending"]),
            ProviderRequest::new("vimeo", ["trending"]),
        ],
    };

    let response = gateway.aggregate(&request).await;
    let status = select_status(&response);

    println!("overall status: {status}");
    println!(
        "{}",
        serde_json::to_string_pretty(&response).expect("response serializes")
    );
}
