//! The aggregation engine: per-provider/per-feature fan-out with total
//! isolation of partial failures.

use std::collections::HashMap;
use std::sync::Arc;

use medley_core::ProviderStrategy;
use medley_types::{
    AggregateRequest, AggregateResponse, AppError, ContentItem, GatewayConfig, PROVIDER_ERROR_KEY,
    ProviderRequest, ProviderResponse,
};
use tokio::sync::Mutex;

/// Aggregates provider content and applies per-feature post-processing.
///
/// The engine itself never fails: every fetch or feature-processing
/// failure is captured under its feature key in the provider's response,
/// and an unresolvable provider is reported under
/// [`PROVIDER_ERROR_KEY`]. Nothing a single (provider, feature) pair does
/// can abort its siblings.
pub struct Aggregator {
    factory: crate::ProviderFactory,
    cfg: GatewayConfig,
}

impl Aggregator {
    /// Build the engine around a provider factory and its tunables.
    #[must_use]
    pub const fn new(factory: crate::ProviderFactory, cfg: GatewayConfig) -> Self {
        Self { factory, cfg }
    }

    /// Fan the request out and merge everything into one response.
    ///
    /// Providers run concurrently, one task per request entry; features
    /// within a provider run concurrently as well. Duplicate provider
    /// names overwrite wholesale, later request entries winning. When the
    /// configured request deadline expires, whatever partial results were
    /// already collected are returned; in-flight fetches are dropped.
    ///
    /// A request with zero providers yields an empty response; rejecting
    /// such requests is the transport boundary's job.
    pub async fn aggregate(&self, req: &AggregateRequest) -> AggregateResponse {
        tracing::info!(providers = req.providers.len(), "content aggregation started");

        // Keyed accumulator; the request index makes "last entry wins"
        // deterministic even though tasks finish in any order.
        let collected: Mutex<HashMap<String, (usize, ProviderResponse)>> =
            Mutex::new(HashMap::new());

        let tasks = req.providers.iter().enumerate().map(|(idx, entry)| {
            let collected = &collected;
            async move {
                let provider_resp = self.aggregate_provider(entry).await;
                let mut guard = collected.lock().await;
                match guard.get(&entry.provider) {
                    Some((stored_idx, _)) if *stored_idx > idx => {}
                    _ => {
                        guard.insert(entry.provider.clone(), (idx, provider_resp));
                    }
                }
            }
        });

        let joined = futures::future::join_all(tasks);
        match self.cfg.request_timeout {
            Some(deadline) => {
                if tokio::time::timeout(deadline, joined).await.is_err() {
                    tracing::warn!(
                        deadline_ms = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX),
                        "request deadline exceeded; returning partial results"
                    );
                }
            }
            None => {
                joined.await;
            }
        }

        let mut resp = AggregateResponse::default();
        for (name, (_, provider_resp)) in collected.into_inner() {
            resp.providers.insert(name, provider_resp);
        }
        resp
    }

    async fn aggregate_provider(&self, entry: &ProviderRequest) -> ProviderResponse {
        let Some(strategy) = self.factory.get(&entry.provider) else {
            tracing::warn!(provider = %entry.provider, "provider not supported");
            let mut resp = ProviderResponse::default();
            resp.record(
                PROVIDER_ERROR_KEY,
                Err(AppError::unsupported_provider(&entry.provider)),
            );
            return resp;
        };

        let fetches = entry.functionality.iter().map(|feature| {
            let strategy = Arc::clone(&strategy);
            async move {
                let outcome = self.fetch_with_timeout(&strategy, entry, feature).await;
                (feature.clone(), outcome)
            }
        });

        let mut resp = ProviderResponse::default();
        for (feature, outcome) in futures::future::join_all(fetches).await {
            if let Err(err) = &outcome {
                tracing::warn!(
                    provider = %entry.provider,
                    feature = %feature,
                    status = err.status(),
                    code = err.code(),
                    "feature fetch failed"
                );
            }
            resp.record(feature, outcome);
        }
        resp
    }

    async fn fetch_with_timeout(
        &self,
        strategy: &Arc<dyn ProviderStrategy>,
        entry: &ProviderRequest,
        feature: &str,
    ) -> Result<Vec<ContentItem>, AppError> {
        match tokio::time::timeout(
            self.cfg.provider_timeout,
            strategy.fetch_feature(entry, feature),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(AppError::provider_timeout(strategy.name(), feature)),
        }
    }
}
