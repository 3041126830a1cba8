//! Upstream fetch adapters for the YouTube Data API v3.

use async_trait::async_trait;
use medley_core::FetchAdapter;
use medley_types::{AppError, ContentItem, ProviderRequest, YouTubeConfig};
use serde::Deserialize;

use crate::mapper;

#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Video {
    #[serde(default)]
    pub id: String,
    pub snippet: Option<Snippet>,
    pub statistics: Option<Statistics>,
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub published_at: String,
    pub thumbnails: Option<Thumbnails>,
    pub default_audio_language: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Thumbnails {
    pub maxres: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    #[serde(rename = "default")]
    pub fallback: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Statistics {
    pub view_count: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ContentDetails {
    pub duration: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItem {
    pub snippet: Option<PlaylistSnippet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub published_at: String,
    pub thumbnails: Option<Thumbnails>,
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResourceId {
    pub video_id: Option<String>,
}

/// Fetches the most-popular chart for the configured region.
pub struct TrendingAdapter {
    cfg: YouTubeConfig,
    client: reqwest::Client,
}

impl TrendingAdapter {
    /// Capture the configuration and shared HTTP client.
    #[must_use]
    pub const fn new(cfg: YouTubeConfig, client: reqwest::Client) -> Self {
        Self { cfg, client }
    }
}

#[async_trait]
impl FetchAdapter for TrendingAdapter {
    async fn fetch(&self, req: &ProviderRequest) -> Result<Vec<ContentItem>, AppError> {
        let key = req.api_key.as_deref().unwrap_or(&self.cfg.api_key);
        let max_results = self.cfg.max_results.to_string();
        let url = format!("{}/youtube/v3/videos", self.cfg.api_host);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet,statistics,contentDetails"),
                ("chart", "mostPopular"),
                ("regionCode", self.cfg.region.as_str()),
                ("maxResults", max_results.as_str()),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|e| AppError::bad_gateway("youtube trending request failed").with_source(e))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(%status, "youtube trending API failed");
            return Err(AppError::provider_error(
                502,
                format!("youtube returned status {status}"),
            ));
        }

        let body: VideoListResponse = resp
            .json()
            .await
            .map_err(|e| AppError::bad_gateway("malformed youtube trending payload").with_source(e))?;

        Ok(body.items.iter().filter_map(mapper::map_video).collect())
    }
}

/// Fetches the configured playlist backing the my-list feature.
pub struct MyListAdapter {
    cfg: YouTubeConfig,
    client: reqwest::Client,
}

impl MyListAdapter {
    /// Capture the configuration and shared HTTP client.
    #[must_use]
    pub const fn new(cfg: YouTubeConfig, client: reqwest::Client) -> Self {
        Self { cfg, client }
    }
}

#[async_trait]
impl FetchAdapter for MyListAdapter {
    async fn fetch(&self, req: &ProviderRequest) -> Result<Vec<ContentItem>, AppError> {
        let key = req.api_key.as_deref().unwrap_or(&self.cfg.api_key);
        let max_results = self.cfg.max_results.to_string();
        let url = format!("{}/youtube/v3/playlistItems", self.cfg.api_host);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("playlistId", self.cfg.playlist_id.as_str()),
                ("maxResults", max_results.as_str()),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|e| AppError::bad_gateway("youtube playlist request failed").with_source(e))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(%status, "youtube playlist API failed");
            return Err(AppError::provider_error(
                502,
                format!("youtube returned status {status}"),
            ));
        }

        let body: PlaylistItemListResponse = resp
            .json()
            .await
            .map_err(|e| AppError::bad_gateway("malformed youtube playlist payload").with_source(e))?;

        Ok(body.items.iter().filter_map(mapper::map_playlist_item).collect())
    }
}
