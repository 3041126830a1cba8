//! The normalized content model every provider adapter must produce.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of content an item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ContentType {
    /// A regular on-demand video.
    #[default]
    Video,
    /// A currently running live broadcast.
    Live,
    /// An archived broadcast (video on demand).
    Vod,
    /// A short excerpt of a longer broadcast.
    Clip,
    /// A feature-length movie.
    Movie,
    /// An episode of a series.
    Episode,
}

/// Publication timestamp plus its precomputed human-relative rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedAt {
    /// Absolute publication instant.
    pub timestamp: DateTime<Utc>,
    /// Display string such as "2 days ago"; filled in by feature enrichment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative: Option<String>,
}

impl PublishedAt {
    /// Wrap an absolute timestamp with no relative rendering yet.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            relative: None,
        }
    }
}

/// View counter plus its precomputed display rendering ("1.2M").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewCount {
    /// Raw number of views/viewers reported by the upstream.
    pub value: i64,
    /// Display string such as "1.2M"; filled in by feature enrichment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl ViewCount {
    /// Wrap a raw counter with no display rendering yet.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            display: None,
        }
    }
}

/// Provider-specific optional attributes that do not fit the common shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extras {
    /// Content length in seconds, when the upstream reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    /// BCP-47 language tag of the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Upstream content rating label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// Free-form upstream tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Season number for episodic content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    /// Episode number for episodic content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
    /// Whether the item is currently live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<bool>,
    /// Whether the item requires a paid entitlement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,
}

impl Extras {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Provider-agnostic content representation.
///
/// `id` and `provider` are always set by the adapter that produced the item;
/// every other field is best-effort and may be empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Upstream identifier, unique within the provider.
    pub id: String,
    /// Name of the provider that produced the item.
    pub provider: String,
    /// Kind of content.
    pub content_type: ContentType,
    /// Title, possibly empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Description, possibly empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Publication instant plus relative rendering, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<PublishedAt>,
    /// Best-quality thumbnail URL, possibly empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thumbnail_url: String,
    /// Direct link to the content.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content_url: String,
    /// View counter plus display rendering.
    #[serde(default)]
    pub view_count: ViewCount,
    /// Upstream channel identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub channel_id: String,
    /// Upstream channel display name.
    #[serde(
        default,
        rename = "channelTitle",
        skip_serializing_if = "String::is_empty"
    )]
    pub channel: String,
    /// Link to the channel.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub channel_url: String,
    /// Provider-specific attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
}

impl ContentItem {
    /// Create an item with the two invariant fields set and everything else
    /// left at its default.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        provider: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            id: id.into(),
            provider: provider.into(),
            content_type,
            ..Self::default()
        }
    }

    /// Attach extras only when they carry at least one value.
    #[must_use]
    pub fn with_extras(mut self, extras: Extras) -> Self {
        self.extras = (!extras.is_empty()).then_some(extras);
        self
    }
}
