use std::sync::Arc;

use medley_core::ProviderStrategy;
use medley_middleware::ProviderBuilder;
use medley_mock::MockProvider;
use medley_types::ProviderRequest;

#[tokio::test]
async fn builder_without_layers_returns_the_raw_strategy_behavior() {
    let mock = Arc::new(
        MockProvider::new("mock").with_items("trending", vec![MockProvider::item("mock", "a")]),
    );
    let raw: Arc<dyn ProviderStrategy> = mock.clone();
    let built = ProviderBuilder::new(raw).build();
    let req = ProviderRequest::new("mock", ["trending"]);

    let _ = built.fetch_feature(&req, "trending").await.unwrap();
    let _ = built.fetch_feature(&req, "trending").await.unwrap();
    assert_eq!(mock.call_count("trending"), 2, "no cache layer, no reuse");
}

#[tokio::test]
async fn with_cache_then_without_cache_strips_the_layer() {
    let mock = Arc::new(
        MockProvider::new("mock").with_items("trending", vec![MockProvider::item("mock", "a")]),
    );
    let raw: Arc<dyn ProviderStrategy> = mock.clone();
    let built = ProviderBuilder::new(raw)
        .with_cache(&medley_types::CacheConfig::default())
        .without_cache()
        .build();
    let req = ProviderRequest::new("mock", ["trending"]);

    let _ = built.fetch_feature(&req, "trending").await.unwrap();
    let _ = built.fetch_feature(&req, "trending").await.unwrap();
    assert_eq!(mock.call_count("trending"), 2);
}
