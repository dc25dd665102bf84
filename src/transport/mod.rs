use std::sync::Arc;

use async_trait::async_trait;

use crate::jsonrpc::{Request, Response};
use crate::Result;

mod http;
mod ipc;
mod mock;

pub use http::HttpTransport;
pub use ipc::IpcTransport;
pub use mock::MockTransport;

/// One JSON-RPC round trip.
///
/// Implementations return the decoded envelope; pulling `result` out of it is
/// left to the client so every transport reports node errors the same way.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &Request) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: &Request) -> Result<Response> {
        (**self).send(request).await
    }
}
