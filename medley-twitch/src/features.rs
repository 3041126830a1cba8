//! Feature strategies applied to raw Twitch items.

use medley_core::FeatureStrategy;
use medley_types::display::format_view_count;
use medley_types::{AppError, ContentItem};

use crate::PROVIDER;

const MAX_TRENDING: usize = 20;

/// Trending: rank streams by concurrent viewers, keep the top slice, and
/// normalize the provider tag.
pub struct TrendingFeature;

impl FeatureStrategy for TrendingFeature {
    fn name(&self) -> &'static str {
        "trending"
    }

    fn apply(&self, mut items: Vec<ContentItem>) -> Result<Vec<ContentItem>, AppError> {
        if items.is_empty() {
            return Ok(items);
        }

        items.sort_by(|a, b| b.view_count.value.cmp(&a.view_count.value));
        items.truncate(MAX_TRENDING);

        for item in &mut items {
            item.provider = PROVIDER.to_owned();
            item.view_count.display = Some(format_view_count(item.view_count.value));
        }
        Ok(items)
    }
}
