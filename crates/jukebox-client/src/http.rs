//! HTTP transport for the remote daemon.
//!
//! Provides [`HttpClient`], a [`PlayerControl`] implementation over reqwest.
//! Requests are JSON-encoded `POST`s to `/player/*` plus `GET /status`.

use std::error::Error as _;

use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::json;

use crate::{ClientConfig, ClientError, PlayerControl, Snapshot};

/// HTTP client for the playback daemon.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    http: Client,
}

impl HttpClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Setup`] if the TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Setup(describe(&e)))?;

        Ok(Self { base_url: config.base_url.clone(), http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn transport(&self, err: &reqwest::Error) -> ClientError {
        tracing::warn!(addr = %self.base_url, "request failed: {}", describe(err));
        ClientError::Transport { addr: self.base_url.clone(), message: describe(err) }
    }

    /// Map a non-success response to [`ClientError::Remote`].
    async fn check(&self, response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if !status.is_client_error() && !status.is_server_error() {
            return Ok(response);
        }

        // The body is informational; an unreadable one still reports the status.
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %body, "daemon rejected request");
        Err(ClientError::Remote { status: status.as_u16(), body })
    }

    async fn post(&self, path: &str, payload: Option<impl Serialize>) -> Result<(), ClientError> {
        tracing::debug!(path, "POST");

        let mut request = self.http.post(self.url(path));
        if let Some(payload) = payload {
            request = request.json(&payload);
        }

        let response = request.send().await.map_err(|e| self.transport(&e))?;
        self.check(response).await?;
        Ok(())
    }

    async fn post_empty(&self, path: &str) -> Result<(), ClientError> {
        self.post(path, None::<()>).await
    }
}

impl PlayerControl for HttpClient {
    async fn status(&self) -> Result<Snapshot, ClientError> {
        tracing::debug!(path = "/status", "GET");

        let response =
            self.http.get(self.url("/status")).send().await.map_err(|e| self.transport(&e))?;
        let response = self.check(response).await?;
        let body = response.text().await.map_err(|e| self.transport(&e))?;

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn play(&self, uri: &str) -> Result<(), ClientError> {
        self.post("/player/play", Some(json!({ "uri": uri }))).await
    }

    async fn play_pause(&self) -> Result<(), ClientError> {
        self.post_empty("/player/playpause").await
    }

    async fn next(&self) -> Result<(), ClientError> {
        self.post_empty("/player/next").await
    }

    async fn prev(&self) -> Result<(), ClientError> {
        self.post_empty("/player/prev").await
    }

    async fn set_volume(&self, percent: u8) -> Result<(), ClientError> {
        self.post("/player/volume", Some(json!({ "volume": percent }))).await
    }

    async fn seek(&self, position_ms: u64) -> Result<(), ClientError> {
        self.post("/player/seek", Some(json!({ "position": position_ms }))).await
    }

    async fn set_shuffle(&self, enabled: bool) -> Result<(), ClientError> {
        self.post("/player/shuffle_context", Some(json!({ "shuffle_context": enabled }))).await
    }

    async fn enqueue(&self, uri: &str) -> Result<(), ClientError> {
        self.post("/player/add_to_queue", Some(json!({ "uri": uri }))).await
    }
}

/// Flatten an error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
