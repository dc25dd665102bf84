use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use super::Transport;
use crate::error::{Error, TransportError};
use crate::jsonrpc::{self, Request, Response};
use crate::Result;

/// Stateless HTTP(S) transport. Connections come from `reqwest`'s pool; the
/// timeout covers connect, send and the whole body.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Http)?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<Response> {
        let body = jsonrpc::encode(request)?;
        tracing::debug!(url = %self.url, method = %request.method, id = %request.id, "http request");

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(TransportError::Http)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(url = %self.url, %status, "unexpected http status");
            return Err(Error::BadStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(TransportError::Http)?;
        tracing::trace!(len = bytes.len(), "http response");
        jsonrpc::decode(&bytes)
    }
}
