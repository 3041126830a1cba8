use std::sync::Arc;
use std::time::Duration;

use medley::{ProviderFactory, ProviderStrategy};
use medley_mock::MockProvider;
use medley_types::{CacheConfig, ProviderRequest};

#[tokio::test]
async fn provider_names_resolve_case_insensitively() {
    let factory = ProviderFactory::builder()
        .with_provider(Arc::new(MockProvider::new("youtube")))
        .build();

    assert!(factory.get("youtube").is_some());
    assert!(factory.get("YouTube").is_some());
    assert!(factory.get("YOUTUBE").is_some());
    assert_eq!(factory.len(), 1);
}

#[tokio::test]
async fn unregistered_names_resolve_to_the_sentinel() {
    let factory = ProviderFactory::builder()
        .with_provider(Arc::new(MockProvider::new("youtube")))
        .build();
    assert!(factory.get("vimeo").is_none());
}

#[tokio::test]
async fn resolved_providers_come_cache_wrapped() {
    let mock = Arc::new(
        MockProvider::new("youtube")
            .with_items("trending", vec![MockProvider::item("youtube", "yt1")]),
    );
    let factory = ProviderFactory::builder()
        .cache_config(CacheConfig {
            ttl: Duration::from_secs(60),
            max_entries: 16,
        })
        .with_provider(mock.clone())
        .build();

    let strategy = factory.get("youtube").unwrap();
    let req = ProviderRequest::new("youtube", ["trending"]);
    let _ = strategy.fetch_feature(&req, "trending").await.unwrap();
    let _ = strategy.fetch_feature(&req, "trending").await.unwrap();

    assert_eq!(mock.call_count("trending"), 1, "second fetch hits the cache");
}

#[tokio::test]
async fn the_cache_store_is_shared_across_resolutions() {
    let mock = Arc::new(
        MockProvider::new("youtube")
            .with_items("trending", vec![MockProvider::item("youtube", "yt1")]),
    );
    let factory = ProviderFactory::builder()
        .cache_config(CacheConfig {
            ttl: Duration::from_secs(60),
            max_entries: 16,
        })
        .with_provider(mock.clone())
        .build();

    let req = ProviderRequest::new("youtube", ["trending"]);
    let _ = factory
        .get("youtube")
        .unwrap()
        .fetch_feature(&req, "trending")
        .await
        .unwrap();
    let _ = factory
        .get("YOUTUBE")
        .unwrap()
        .fetch_feature(&req, "trending")
        .await
        .unwrap();

    assert_eq!(
        mock.call_count("trending"),
        1,
        "both resolutions share one decorator instance"
    );
}
