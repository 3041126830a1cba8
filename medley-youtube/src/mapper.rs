//! Wire-format to normalized-item mapping.

use chrono::{DateTime, Utc};
use medley_types::{ContentItem, ContentType, Extras, PublishedAt, ViewCount};

use crate::adapters::{PlaylistItem, Thumbnails, Video};
use crate::{PROVIDER, util};

pub(crate) fn map_video(v: &Video) -> Option<ContentItem> {
    let sn = v.snippet.as_ref()?;
    if v.id.is_empty() {
        return None;
    }

    let mut item = ContentItem::new(v.id.clone(), PROVIDER, ContentType::Video);
    item.title = sn.title.clone();
    item.description = sn.description.clone();
    item.published_at = parse_rfc3339(&sn.published_at).map(PublishedAt::new);
    item.thumbnail_url = sn.thumbnails.as_ref().map(best_thumbnail).unwrap_or_default();
    item.content_url = util::video_url(&v.id);
    item.view_count = ViewCount::new(
        v.statistics
            .as_ref()
            .and_then(|st| st.view_count.as_deref())
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0),
    );
    item.channel_id = sn.channel_id.clone();
    item.channel = sn.channel_title.clone();
    item.channel_url = util::channel_url(&sn.channel_id);

    let extras = Extras {
        duration_seconds: v
            .content_details
            .as_ref()
            .and_then(|cd| cd.duration.as_deref())
            .map(util::parse_iso8601_duration),
        language: sn.default_audio_language.clone(),
        tags: sn.tags.clone(),
        ..Extras::default()
    };
    Some(item.with_extras(extras))
}

pub(crate) fn map_playlist_item(p: &PlaylistItem) -> Option<ContentItem> {
    let sn = p.snippet.as_ref()?;
    let video_id = sn
        .resource_id
        .as_ref()
        .and_then(|r| r.video_id.as_deref())
        .filter(|id| !id.is_empty())?;

    let mut item = ContentItem::new(video_id, PROVIDER, ContentType::Video);
    item.title = sn.title.clone();
    item.description = sn.description.clone();
    item.published_at = parse_rfc3339(&sn.published_at).map(PublishedAt::new);
    item.thumbnail_url = sn.thumbnails.as_ref().map(best_thumbnail).unwrap_or_default();
    item.content_url = util::video_url(video_id);
    item.channel_id = sn.channel_id.clone();
    item.channel = sn.channel_title.clone();
    item.channel_url = util::channel_url(&sn.channel_id);
    Some(item)
}

/// Highest-quality thumbnail available.
fn best_thumbnail(t: &Thumbnails) -> String {
    [&t.maxres, &t.high, &t.medium, &t.fallback]
        .into_iter()
        .flatten()
        .next()
        .map(|thumb| thumb.url.clone())
        .unwrap_or_default()
}

fn parse_rfc3339(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
