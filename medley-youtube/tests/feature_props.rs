use medley_core::FeatureStrategy;
use medley_types::{ContentItem, ContentType, ViewCount};
use medley_youtube::TrendingFeature;
use proptest::prelude::*;

fn video(id_n: u8, views: i64) -> ContentItem {
    let mut item = ContentItem::new(format!("id{id_n}"), "youtube", ContentType::Video);
    item.title = format!("title {id_n}");
    item.thumbnail_url = format!("https://img/{id_n}.jpg");
    item.view_count = ViewCount::new(views);
    item
}

proptest! {
    // Re-applying the strategy to its own output must not change anything:
    // the output is already filtered, deduplicated, sorted, and enriched.
    #[test]
    fn trending_is_idempotent(raw in prop::collection::vec((0u8..12, 0i64..1_000_000), 0..40)) {
        let items: Vec<ContentItem> = raw.into_iter().map(|(id, views)| video(id, views)).collect();

        let once = TrendingFeature.apply(items).unwrap();
        let twice = TrendingFeature.apply(once.clone()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn trending_output_is_sorted_and_duplicate_free(raw in prop::collection::vec((0u8..12, 0i64..1_000_000), 0..40)) {
        let items: Vec<ContentItem> = raw.into_iter().map(|(id, views)| video(id, views)).collect();
        let out = TrendingFeature.apply(items).unwrap();

        let mut seen = std::collections::HashSet::new();
        for pair in out.windows(2) {
            prop_assert!(pair[0].view_count.value >= pair[1].view_count.value);
        }
        for item in &out {
            prop_assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
        }
    }
}
