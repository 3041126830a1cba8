//! medley-mock
//!
//! A scriptable provider for tests and examples. Behaviors are fixed at
//! construction: per feature, the provider can return items, fail with a
//! given status, or hang until the caller's timeout fires. Every dispatch
//! is counted so tests can assert how often the strategy was reached
//! (e.g. through a cache layer).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use medley_core::ProviderStrategy;
use medley_types::{AppError, ContentItem, ContentType, ProviderRequest};

/// Instruction for how a feature dispatch should behave.
enum MockBehavior {
    /// Return the provided items immediately.
    Items(Vec<ContentItem>),
    /// Fail immediately with an error of the given status.
    Fail { status: u16, message: String },
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

/// A provider whose per-feature behavior is scripted at construction.
pub struct MockProvider {
    name: &'static str,
    behaviors: HashMap<String, MockBehavior>,
    calls: Mutex<HashMap<String, usize>>,
}

impl MockProvider {
    /// Create a mock provider with no behaviors; every feature is
    /// unsupported until scripted.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            behaviors: HashMap::new(),
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Script `feature` to return `items`.
    #[must_use]
    pub fn with_items(mut self, feature: impl Into<String>, items: Vec<ContentItem>) -> Self {
        self.behaviors
            .insert(feature.into(), MockBehavior::Items(items));
        self
    }

    /// Script `feature` to fail with `status` and `message`.
    #[must_use]
    pub fn with_failure(
        mut self,
        feature: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        self.behaviors.insert(
            feature.into(),
            MockBehavior::Fail {
                status,
                message: message.into(),
            },
        );
        self
    }

    /// Script `feature` to hang until the caller gives up.
    #[must_use]
    pub fn with_hang(mut self, feature: impl Into<String>) -> Self {
        self.behaviors.insert(feature.into(), MockBehavior::Hang);
        self
    }

    /// How many times `feature` was dispatched to this provider.
    ///
    /// # Panics
    /// Panics if the internal counter lock is poisoned.
    #[must_use]
    pub fn call_count(&self, feature: &str) -> usize {
        self.calls
            .lock()
            .expect("mock call counter poisoned")
            .get(feature)
            .copied()
            .unwrap_or(0)
    }

    /// Build a deterministic fixture item tagged with `provider`.
    #[must_use]
    pub fn item(provider: &str, id: &str) -> ContentItem {
        let mut item = ContentItem::new(id, provider, ContentType::Video);
        item.title = format!("{id} title");
        item.thumbnail_url = format!("https://example.test/{id}.jpg");
        item
    }
}

#[async_trait]
impl ProviderStrategy for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch_feature(
        &self,
        _req: &ProviderRequest,
        feature: &str,
    ) -> Result<Vec<ContentItem>, AppError> {
        {
            let mut calls = self.calls.lock().expect("mock call counter poisoned");
            *calls.entry(feature.to_owned()).or_insert(0) += 1;
        }

        match self.behaviors.get(feature) {
            Some(MockBehavior::Items(items)) => Ok(items.clone()),
            Some(MockBehavior::Fail { status, message }) => {
                Err(AppError::provider_error(*status, message.clone()))
            }
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(AppError::unsupported_feature(feature)),
        }
    }
}
