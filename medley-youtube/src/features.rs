//! Feature strategies applied to raw YouTube items.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use medley_core::FeatureStrategy;
use medley_types::display::{format_view_count, relative_time};
use medley_types::{AppError, ContentItem, ContentType};

/// Trending: keep proper videos that can actually be rendered, rank them by
/// view count, and precompute display strings.
pub struct TrendingFeature;

impl FeatureStrategy for TrendingFeature {
    fn name(&self) -> &'static str {
        "trending"
    }

    fn apply(&self, items: Vec<ContentItem>) -> Result<Vec<ContentItem>, AppError> {
        if items.is_empty() {
            return Ok(items);
        }
        let input = items.len();

        // TV surfaces skip shorts/live entries and anything unrenderable.
        let filtered = items.into_iter().filter(|it| {
            it.content_type == ContentType::Video
                && !it.thumbnail_url.is_empty()
                && !it.title.is_empty()
        });

        let mut seen = HashSet::new();
        let mut unique: Vec<ContentItem> = filtered
            .filter(|it| seen.insert(it.id.clone()))
            .collect();

        // Stable sort: equal view counts keep first-seen order.
        unique.sort_by(|a, b| b.view_count.value.cmp(&a.view_count.value));

        let now = Utc::now();
        for item in &mut unique {
            enrich(item, now);
        }

        tracing::debug!(input, output = unique.len(), "youtube trending processed");
        Ok(unique)
    }
}

/// My-list: preserve the playlist's order, drop duplicates and untitled
/// leftovers, and precompute display strings.
pub struct MyListFeature;

impl FeatureStrategy for MyListFeature {
    fn name(&self) -> &'static str {
        "mylist"
    }

    fn apply(&self, items: Vec<ContentItem>) -> Result<Vec<ContentItem>, AppError> {
        let mut seen = HashSet::new();
        let mut out: Vec<ContentItem> = items
            .into_iter()
            .filter(|it| !it.title.is_empty())
            .filter(|it| seen.insert(it.id.clone()))
            .collect();

        let now = Utc::now();
        for item in &mut out {
            enrich(item, now);
        }
        Ok(out)
    }
}

fn enrich(item: &mut ContentItem, now: DateTime<Utc>) {
    if let Some(published) = item.published_at.as_mut() {
        published.relative = Some(relative_time(now, published.timestamp));
    }
    item.view_count.display = Some(format_view_count(item.view_count.value));
}
