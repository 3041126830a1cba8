//! App-token provider for the Helix API.
//!
//! Owns the cached client-credentials token and its refresh policy. The
//! token state lives behind an async mutex held across the refresh call, so
//! concurrent callers coalesce onto a single upstream token request.

use std::time::{Duration, Instant};

use medley_types::{AppError, TwitchConfig};
use serde::Deserialize;
use tokio::sync::Mutex;

/// Refresh this many seconds before the upstream-reported expiry.
const EXPIRY_SKEW_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Cached OAuth client-credentials token with TTL-based refresh.
pub struct AppTokenProvider {
    cfg: TwitchConfig,
    client: reqwest::Client,
    state: Mutex<Option<CachedToken>>,
}

impl AppTokenProvider {
    /// Capture the configuration and shared HTTP client.
    #[must_use]
    pub const fn new(cfg: TwitchConfig, client: reqwest::Client) -> Self {
        Self {
            cfg,
            client,
            state: Mutex::const_new(None),
        }
    }

    /// Return a valid app token, refreshing it when missing or expired.
    ///
    /// # Errors
    /// Gateway-class [`AppError`] when the token endpoint is unreachable,
    /// answers a non-success status, or returns a malformed payload.
    pub async fn token(&self) -> Result<String, AppError> {
        let mut state = self.state.lock().await;
        if let Some(cached) = state.as_ref()
            && Instant::now() < cached.expires_at
        {
            return Ok(cached.token.clone());
        }

        let url = format!("{}/oauth2/token", self.cfg.auth_host);
        let resp = self
            .client
            .post(&url)
            .query(&[
                ("client_id", self.cfg.client_id.as_str()),
                ("client_secret", self.cfg.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await
            .map_err(|e| AppError::bad_gateway("twitch token request failed").with_source(e))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(%status, "twitch token endpoint failed");
            return Err(AppError::bad_gateway(format!(
                "twitch token endpoint returned status {status}"
            )));
        }

        let tok: TokenResponse = resp
            .json()
            .await
            .map_err(|e| AppError::bad_gateway("malformed twitch token payload").with_source(e))?;

        let ttl = Duration::from_secs(tok.expires_in.saturating_sub(EXPIRY_SKEW_SECS));
        *state = Some(CachedToken {
            token: tok.access_token.clone(),
            expires_at: Instant::now() + ttl,
        });
        tracing::debug!("twitch app token refreshed");
        Ok(tok.access_token)
    }
}
