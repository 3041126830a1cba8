//! Outgoing aggregation response envelopes.
//!
//! The response is an explicit partial-failure accumulator: per provider, a
//! map of feature data and a disjoint map of feature errors. Nothing here is
//! thrown or caught; every failure is data.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::AppError;
use crate::item::ContentItem;

/// Reserved feature key for the synthetic "provider not supported" error.
///
/// Distinct from any real feature name so it can never collide with
/// requested functionality.
pub const PROVIDER_ERROR_KEY: &str = "_provider";

/// Per-provider aggregation result: feature data and feature errors.
///
/// Invariant: a feature name appears in at most one of the two maps. Use
/// [`ProviderResponse::record`] to preserve it when inserting outcomes.
#[derive(Debug, Default, Serialize)]
pub struct ProviderResponse {
    /// Successfully fetched and post-processed items, keyed by feature.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, Vec<ContentItem>>,
    /// Failures, keyed by feature.
    #[serde(rename = "featureErrors", skip_serializing_if = "BTreeMap::is_empty")]
    pub feature_errors: BTreeMap<String, AppError>,
}

impl ProviderResponse {
    /// Record one feature outcome, keeping the data/error maps disjoint.
    ///
    /// A duplicate feature name overwrites the previous outcome wholesale,
    /// whichever map it landed in.
    pub fn record(&mut self, feature: impl Into<String>, outcome: Result<Vec<ContentItem>, AppError>) {
        let feature = feature.into();
        match outcome {
            Ok(items) => {
                self.feature_errors.remove(&feature);
                self.data.insert(feature, items);
            }
            Err(err) => {
                self.data.remove(&feature);
                self.feature_errors.insert(feature, err);
            }
        }
    }

    /// Whether any feature produced data.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }

    /// Whether any feature failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.feature_errors.is_empty()
    }
}

/// The merged response: one entry per distinct provider name.
///
/// Built empty at the start of one aggregation call, populated
/// incrementally, and discarded after serialization. Ordered keys keep
/// error tie-breaking and JSON output deterministic.
#[derive(Debug, Default, Serialize)]
pub struct AggregateResponse {
    /// Per-provider results keyed by the requested provider name.
    pub providers: BTreeMap<String, ProviderResponse>,
}
