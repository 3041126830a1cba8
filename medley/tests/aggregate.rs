use std::sync::Arc;
use std::time::Duration;

use medley::{Aggregator, PROVIDER_ERROR_KEY, ProviderFactory, select_status};
use medley_mock::MockProvider;
use medley_types::{AggregateRequest, CacheConfig, GatewayConfig, ProviderRequest};

fn factory(providers: Vec<Arc<MockProvider>>) -> ProviderFactory {
    let mut builder = ProviderFactory::builder().cache_config(CacheConfig {
        ttl: Duration::ZERO, // call counts stay observable per fetch
        max_entries: 64,
    });
    for p in providers {
        builder = builder.with_provider(p);
    }
    builder.build()
}

fn request(entries: Vec<ProviderRequest>) -> AggregateRequest {
    AggregateRequest { providers: entries }
}

#[tokio::test]
async fn single_provider_single_feature_success() {
    let youtube = Arc::new(
        MockProvider::new("youtube")
            .with_items("trending", vec![MockProvider::item("youtube", "yt1")]),
    );
    let gateway = Aggregator::new(factory(vec![youtube]), GatewayConfig::default());

    let resp = gateway
        .aggregate(&request(vec![ProviderRequest::new("youtube", ["trending"])]))
        .await;

    let provider = &resp.providers["youtube"];
    assert_eq!(provider.data["trending"].len(), 1);
    assert_eq!(provider.data["trending"][0].id, "yt1");
    assert!(provider.feature_errors.is_empty());
    assert_eq!(select_status(&resp), 200);
}

#[tokio::test]
async fn sibling_feature_failure_yields_multi_status() {
    let youtube = Arc::new(
        MockProvider::new("youtube")
            .with_items("trending", vec![MockProvider::item("youtube", "yt1")])
            .with_failure("mylist", 502, "provider down"),
    );
    let gateway = Aggregator::new(factory(vec![youtube]), GatewayConfig::default());

    let resp = gateway
        .aggregate(&request(vec![ProviderRequest::new(
            "youtube",
            ["trending", "mylist"],
        )]))
        .await;

    let provider = &resp.providers["youtube"];
    assert!(provider.data.contains_key("trending"));
    assert_eq!(provider.feature_errors["mylist"].status(), 502);
    assert_eq!(select_status(&resp), 207);
}

#[tokio::test]
async fn unregistered_provider_is_reported_under_the_reserved_key() {
    let gateway = Aggregator::new(factory(vec![]), GatewayConfig::default());

    let resp = gateway
        .aggregate(&request(vec![ProviderRequest::new("vimeo", ["trending"])]))
        .await;

    let provider = &resp.providers["vimeo"];
    assert!(provider.data.is_empty());
    let err = &provider.feature_errors[PROVIDER_ERROR_KEY];
    assert_eq!(err.status(), 400);
    assert_eq!(err.code(), "PROVIDER_UNSUPPORTED");
    assert_eq!(select_status(&resp), 400);
}

#[tokio::test]
async fn provider_isolation_and_priority_when_everything_fails() {
    let youtube = Arc::new(MockProvider::new("youtube").with_failure("trending", 400, "bad key"));
    let twitch = Arc::new(MockProvider::new("twitch").with_failure("trending", 502, "down"));
    let gateway = Aggregator::new(factory(vec![youtube, twitch]), GatewayConfig::default());

    let resp = gateway
        .aggregate(&request(vec![
            ProviderRequest::new("youtube", ["trending"]),
            ProviderRequest::new("twitch", ["trending"]),
        ]))
        .await;

    assert_eq!(resp.providers.len(), 2);
    assert_eq!(resp.providers["youtube"].feature_errors["trending"].status(), 400);
    assert_eq!(resp.providers["twitch"].feature_errors["trending"].status(), 502);
    assert_eq!(select_status(&resp), 400, "client-correctable error wins");
}

#[tokio::test]
async fn one_entry_per_distinct_provider_name() {
    let a = Arc::new(MockProvider::new("a").with_items("trending", vec![]));
    let b = Arc::new(MockProvider::new("b").with_items("trending", vec![]));
    let gateway = Aggregator::new(factory(vec![a, b]), GatewayConfig::default());

    let resp = gateway
        .aggregate(&request(vec![
            ProviderRequest::new("a", ["trending"]),
            ProviderRequest::new("b", ["trending"]),
            ProviderRequest::new("a", ["trending"]),
        ]))
        .await;

    assert_eq!(resp.providers.len(), 2);
}

#[tokio::test]
async fn duplicate_provider_entries_overwrite_wholesale() {
    // The last request entry for a name wins; feature maps are not merged.
    let mock = Arc::new(
        MockProvider::new("youtube")
            .with_items("trending", vec![MockProvider::item("youtube", "yt1")])
            .with_items("mylist", vec![MockProvider::item("youtube", "yt2")]),
    );
    let gateway = Aggregator::new(factory(vec![mock]), GatewayConfig::default());

    let resp = gateway
        .aggregate(&request(vec![
            ProviderRequest::new("youtube", ["trending"]),
            ProviderRequest::new("youtube", ["mylist"]),
        ]))
        .await;

    let provider = &resp.providers["youtube"];
    assert!(!provider.data.contains_key("trending"));
    assert!(provider.data.contains_key("mylist"));
}

#[tokio::test]
async fn unsupported_feature_is_isolated_to_its_key() {
    let youtube = Arc::new(
        MockProvider::new("youtube")
            .with_items("trending", vec![MockProvider::item("youtube", "yt1")]),
    );
    let gateway = Aggregator::new(factory(vec![youtube]), GatewayConfig::default());

    let resp = gateway
        .aggregate(&request(vec![ProviderRequest::new(
            "youtube",
            ["trending", "watchlater"],
        )]))
        .await;

    let provider = &resp.providers["youtube"];
    assert!(provider.data.contains_key("trending"));
    assert_eq!(provider.feature_errors["watchlater"].code(), "FEATURE_UNSUPPORTED");
    assert_eq!(select_status(&resp), 207);
}

#[tokio::test]
async fn stalled_fetch_surfaces_as_a_gateway_class_timeout() {
    let youtube = Arc::new(MockProvider::new("youtube").with_hang("trending"));
    let cfg = GatewayConfig {
        provider_timeout: Duration::from_millis(50),
        request_timeout: None,
    };
    let gateway = Aggregator::new(factory(vec![youtube]), cfg);

    let resp = gateway
        .aggregate(&request(vec![ProviderRequest::new("youtube", ["trending"])]))
        .await;

    let err = &resp.providers["youtube"].feature_errors["trending"];
    assert_eq!(err.status(), 503);
    assert_eq!(err.code(), "PROVIDER_TIMEOUT");
    assert_eq!(select_status(&resp), 503);
}

#[tokio::test]
async fn request_deadline_returns_partial_results() {
    let fast = Arc::new(
        MockProvider::new("fast").with_items("trending", vec![MockProvider::item("fast", "f1")]),
    );
    let slow = Arc::new(MockProvider::new("slow").with_hang("trending"));
    let cfg = GatewayConfig {
        provider_timeout: Duration::from_secs(30),
        request_timeout: Some(Duration::from_millis(100)),
    };
    let gateway = Aggregator::new(factory(vec![fast, slow]), cfg);

    let resp = gateway
        .aggregate(&request(vec![
            ProviderRequest::new("fast", ["trending"]),
            ProviderRequest::new("slow", ["trending"]),
        ]))
        .await;

    assert!(resp.providers.contains_key("fast"));
    assert!(!resp.providers.contains_key("slow"));
}

#[tokio::test]
async fn zero_providers_yield_an_empty_response() {
    let gateway = Aggregator::new(factory(vec![]), GatewayConfig::default());
    let resp = gateway.aggregate(&request(vec![])).await;
    assert!(resp.providers.is_empty());
    assert_eq!(select_status(&resp), 200);
}

#[tokio::test]
async fn response_serializes_into_the_documented_wire_shape() {
    let youtube = Arc::new(
        MockProvider::new("youtube")
            .with_items("trending", vec![MockProvider::item("youtube", "yt1")])
            .with_failure("mylist", 502, "provider down"),
    );
    let gateway = Aggregator::new(factory(vec![youtube]), GatewayConfig::default());

    let resp = gateway
        .aggregate(&request(vec![ProviderRequest::new(
            "youtube",
            ["trending", "mylist"],
        )]))
        .await;

    let v = serde_json::to_value(&resp).unwrap();
    assert_eq!(v["providers"]["youtube"]["data"]["trending"][0]["id"], "yt1");
    assert_eq!(
        v["providers"]["youtube"]["featureErrors"]["mylist"]["statusCode"],
        502
    );
}
