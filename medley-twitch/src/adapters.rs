//! Upstream fetch adapter for the Helix streams API.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use medley_core::FetchAdapter;
use medley_types::{
    AppError, ContentItem, ContentType, Extras, ProviderRequest, PublishedAt, TwitchConfig,
    ViewCount,
};
use serde::Deserialize;

use crate::{PROVIDER, token::AppTokenProvider};

#[derive(Debug, Deserialize)]
pub(crate) struct StreamsResponse {
    #[serde(default)]
    pub data: Vec<Stream>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Stream {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_login: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub viewer_count: i64,
    #[serde(default)]
    pub started_at: String,
    #[serde(default)]
    pub thumbnail_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub is_mature: bool,
}

/// Fetches the currently most-watched live streams.
pub struct TrendingStreamsAdapter {
    cfg: TwitchConfig,
    client: reqwest::Client,
    tokens: Arc<AppTokenProvider>,
}

impl TrendingStreamsAdapter {
    /// Capture the configuration, shared HTTP client, and token provider.
    #[must_use]
    pub const fn new(
        cfg: TwitchConfig,
        client: reqwest::Client,
        tokens: Arc<AppTokenProvider>,
    ) -> Self {
        Self {
            cfg,
            client,
            tokens,
        }
    }
}

#[async_trait]
impl FetchAdapter for TrendingStreamsAdapter {
    async fn fetch(&self, _req: &ProviderRequest) -> Result<Vec<ContentItem>, AppError> {
        let token = self.tokens.token().await?;
        let first = self.cfg.first.to_string();
        let url = format!("{}/helix/streams", self.cfg.api_host);

        let resp = self
            .client
            .get(&url)
            .query(&[("first", first.as_str())])
            .header("Client-ID", self.cfg.client_id.as_str())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::bad_gateway("twitch streams request failed").with_source(e))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(%status, "twitch streams API failed");
            return Err(AppError::provider_error(
                502,
                format!("twitch returned status {status}"),
            ));
        }

        let body: StreamsResponse = resp
            .json()
            .await
            .map_err(|e| AppError::bad_gateway("malformed twitch streams payload").with_source(e))?;

        Ok(body.data.iter().map(map_stream).collect())
    }
}

fn map_stream(s: &Stream) -> ContentItem {
    let mut item = ContentItem::new(s.id.clone(), PROVIDER, ContentType::Live);
    item.title = s.title.clone();
    item.published_at = parse_rfc3339(&s.started_at).map(PublishedAt::new);
    item.thumbnail_url = fill_thumbnail_template(&s.thumbnail_url);
    item.content_url = stream_url(&s.user_login);
    item.view_count = ViewCount::new(s.viewer_count);
    item.channel_id = s.user_id.clone();
    item.channel = s.user_name.clone();
    item.channel_url = stream_url(&s.user_login);

    let extras = Extras {
        language: s.language.clone(),
        rating: s.is_mature.then(|| "mature".to_owned()),
        live: Some(true),
        ..Extras::default()
    };
    item.with_extras(extras)
}

/// Helix thumbnails carry a literal `{width}x{height}` placeholder.
fn fill_thumbnail_template(url: &str) -> String {
    url.replacen("{width}x{height}", "1280x720", 1)
}

fn stream_url(login: &str) -> String {
    if login.is_empty() {
        return String::new();
    }
    format!("https://www.twitch.tv/{login}")
}

fn parse_rfc3339(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_template_is_filled_once() {
        assert_eq!(
            fill_thumbnail_template("https://cdn/{width}x{height}.jpg"),
            "https://cdn/1280x720.jpg"
        );
        assert_eq!(fill_thumbnail_template("https://cdn/fixed.jpg"), "https://cdn/fixed.jpg");
    }

    #[test]
    fn stream_urls_guard_against_empty_logins() {
        assert_eq!(stream_url(""), "");
        assert_eq!(stream_url("somestreamer"), "https://www.twitch.tv/somestreamer");
    }

    #[test]
    fn mapped_streams_carry_the_live_markers() {
        let s = Stream {
            id: "s1".to_owned(),
            user_id: "u1".to_owned(),
            user_login: "streamer".to_owned(),
            user_name: "Streamer".to_owned(),
            title: "Playing".to_owned(),
            viewer_count: 42,
            started_at: "2024-05-01T12:00:00Z".to_owned(),
            thumbnail_url: "https://cdn/{width}x{height}.jpg".to_owned(),
            language: Some("de".to_owned()),
            is_mature: true,
        };
        let item = map_stream(&s);
        assert_eq!(item.provider, "twitch");
        assert_eq!(item.content_type, ContentType::Live);
        let extras = item.extras.as_ref().unwrap();
        assert_eq!(extras.live, Some(true));
        assert_eq!(extras.rating.as_deref(), Some("mature"));
        assert_eq!(extras.language.as_deref(), Some("de"));
    }
}
