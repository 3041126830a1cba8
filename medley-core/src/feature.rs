//! The pure post-processing step applied to one provider's raw items for
//! one requested feature.

use medley_types::{AppError, ContentItem};

/// A feature strategy filters, orders, bounds, and enriches the raw items a
/// fetch adapter produced.
///
/// Implementations must be pure over their input: no I/O, no hidden state.
/// An empty input yields an empty result, never an error; errors originate
/// only from upstream fetch failures, so most strategies never construct
/// one. Applying a strategy to its own output must not lose information
/// beyond re-sorting stability.
pub trait FeatureStrategy: Send + Sync {
    /// Feature name this strategy serves (e.g. "trending").
    fn name(&self) -> &'static str;

    /// Transform raw adapter output into the feature's final item list.
    fn apply(&self, items: Vec<ContentItem>) -> Result<Vec<ContentItem>, AppError>;
}
