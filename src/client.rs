use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::call::{to_params, Call};
use crate::error::Error;
use crate::jsonrpc::{self, Id, Request};
use crate::options::{ConnectionMeta, Endpoint};
use crate::transport::{HttpTransport, IpcTransport, Transport};
use crate::Result;

/// Connect with default options. See [`Client::connect`].
pub async fn connect(uri: &str) -> Result<Client> {
    Client::connect(ConnectionMeta::new(uri)).await
}

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    /// `http://`/`https://` get a pooled HTTP transport and nothing is dialed
    /// yet; `unix://`/`ipc://` connect to the socket before returning.
    pub async fn connect(meta: ConnectionMeta) -> Result<Self> {
        let endpoint = meta.endpoint()?;
        let transport: Box<dyn Transport> = match &endpoint {
            Endpoint::Http { .. } => {
                let url = endpoint
                    .url()
                    .ok_or_else(|| Error::InvalidUri(meta.uri.clone()))?;
                Box::new(HttpTransport::new(&url, meta.timeout)?)
            }
            Endpoint::Ipc { path } => Box::new(IpcTransport::connect(path.clone(), &meta).await?),
        };
        tracing::info!(uri = %meta.uri, "client ready");
        Ok(Self::from_parts(transport, Some(endpoint)))
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self::from_parts(Box::new(transport), None)
    }

    fn from_parts(transport: Box<dyn Transport>, endpoint: Option<Endpoint>) -> Self {
        Client {
            inner: Arc::new(ClientInner {
                transport,
                endpoint,
                next_id: AtomicU64::new(1),
            }),
        }
    }
}

pub struct ClientInner {
    transport: Box<dyn Transport>,
    endpoint: Option<Endpoint>,
    next_id: AtomicU64,
}

impl ClientInner {
    /// `None` for clients built around a custom transport.
    pub fn endpoint(&self) -> Option<&Endpoint> {
        self.endpoint.as_ref()
    }

    /// The id the next unpinned request will carry.
    pub fn next_id(&self) -> u64 {
        self.next_id.load(Ordering::SeqCst)
    }

    pub async fn call<C: Call>(&self, call: C) -> Result<C::Response> {
        let params = to_params(&call)?;
        let value = self.request(call.method(), params).await?;
        serde_json::from_value(value).map_err(Error::Decode)
    }

    /// Raw round trip with an id from the counter.
    pub async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        self.round_trip(method, params, None).await
    }

    /// Raw round trip with a caller-chosen id; the counter is left alone.
    pub async fn request_with_id(&self, method: &str, params: Vec<Value>, id: impl Into<Id>) -> Result<Value> {
        self.round_trip(method, params, Some(id.into())).await
    }

    // The counter is read before the round trip and bumped only after the
    // transport delivered an envelope, so concurrent unpinned calls can share
    // an id. Ids are never matched against responses.
    async fn round_trip(&self, method: &str, params: Vec<Value>, pinned: Option<Id>) -> Result<Value> {
        let id = match &pinned {
            Some(id) => id.clone(),
            None => Id::Num(self.next_id.load(Ordering::SeqCst)),
        };
        let request = Request::new(method, params, id);
        let response = self.transport.send(&request).await?;
        if pinned.is_none() {
            self.next_id.fetch_add(1, Ordering::SeqCst);
        }
        jsonrpc::extract_result(response)
    }
}
