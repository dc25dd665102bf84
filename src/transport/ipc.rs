use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;
use tokio::sync::Mutex;
use tokio::time::{sleep, timeout};

use super::Transport;
use crate::error::TransportError;
use crate::jsonrpc::{self, Request, Response};
use crate::options::ConnectionMeta;
use crate::Result;

type Connection = BufReader<UnixStream>;

/// Newline-delimited JSON-RPC over one long-lived Unix socket.
///
/// The mutex serializes every write+read pair: the line read right after a
/// write is taken as its response. A connection that reads back nothing is
/// replaced in place, under the same lock, and the call is replayed once.
///
/// A replayed call may run twice on the node if the first write got through
/// before the peer went away.
pub struct IpcTransport {
    path: PathBuf,
    timeout: Duration,
    reconnect_attempts: usize,
    reconnect_delay: Duration,
    // `None` once a connection has been given up on; the next call reconnects.
    connection: Mutex<Option<Connection>>,
}

impl IpcTransport {
    /// Connects right away; the error is returned as is if the socket is not
    /// there.
    pub async fn connect(path: impl Into<PathBuf>, meta: &ConnectionMeta) -> Result<Self> {
        let path = path.into();
        let connection = Self::open(&path, meta.timeout).await?;
        tracing::debug!(path = %path.display(), "ipc connected");
        Ok(Self {
            path,
            timeout: meta.timeout,
            reconnect_attempts: meta.reconnect_attempts,
            reconnect_delay: meta.reconnect_delay,
            connection: Mutex::new(Some(connection)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn open(path: &Path, limit: Duration) -> Result<Connection> {
        match timeout(limit, UnixStream::connect(path)).await {
            Ok(Ok(stream)) => Ok(BufReader::new(stream)),
            Ok(Err(e)) => Err(TransportError::Io(e).into()),
            Err(_) => Err(TransportError::Timeout(limit).into()),
        }
    }

    async fn reconnect(&self) -> Result<Connection> {
        for attempt in 1..=self.reconnect_attempts {
            match Self::open(&self.path, self.timeout).await {
                Ok(connection) => {
                    tracing::info!(path = %self.path.display(), attempt, "ipc reconnected");
                    return Ok(connection);
                }
                Err(e) => {
                    tracing::error!(
                        "reconnect attempt {attempt}/{} to {} failed: {e}",
                        self.reconnect_attempts,
                        self.path.display()
                    );
                    if attempt < self.reconnect_attempts {
                        sleep(self.reconnect_delay).await;
                    }
                }
            }
        }
        Err(TransportError::NoData.into())
    }

    /// Writes one request line and reads one response line. `Ok(None)` means
    /// the peer looks gone.
    async fn exchange(&self, connection: &mut Connection, payload: &[u8]) -> Result<Option<Vec<u8>>> {
        if let Err(e) = connection.get_mut().write_all(payload).await {
            if is_disconnect(&e) {
                tracing::warn!(path = %self.path.display(), "ipc write failed: {e}");
                return Ok(None);
            }
            return Err(TransportError::Io(e).into());
        }

        let mut line = Vec::new();
        match timeout(self.timeout, connection.read_until(b'\n', &mut line)).await {
            Err(_) => {
                tracing::error!(path = %self.path.display(), "no response within {:?}", self.timeout);
                Err(TransportError::Timeout(self.timeout).into())
            }
            Ok(Ok(0)) => Ok(None),
            Ok(Ok(_)) => Ok(Some(line)),
            Ok(Err(e)) if is_disconnect(&e) => Ok(None),
            Ok(Err(e)) => Err(TransportError::Io(e).into()),
        }
    }
}

fn is_disconnect(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::BrokenPipe
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::NotConnected
            | ErrorKind::UnexpectedEof
    )
}

#[async_trait]
impl Transport for IpcTransport {
    async fn send(&self, request: &Request) -> Result<Response> {
        let mut payload = jsonrpc::encode(request)?;
        payload.push(b'\n');
        tracing::debug!(path = %self.path.display(), method = %request.method, id = %request.id, "ipc request");

        let mut guard = self.connection.lock().await;
        let mut reconnected = false;
        let line = loop {
            let mut connection = match guard.take() {
                Some(connection) => connection,
                None => {
                    reconnected = true;
                    self.reconnect().await?
                }
            };
            // On error the connection is dropped here, leaving `None` behind.
            match self.exchange(&mut connection, &payload).await? {
                Some(line) => {
                    *guard = Some(connection);
                    break line;
                }
                None if reconnected => {
                    tracing::error!(path = %self.path.display(), "no data received after reconnect");
                    return Err(TransportError::NoData.into());
                }
                None => {
                    tracing::warn!(path = %self.path.display(), "no data received, reconnecting");
                }
            }
        };
        drop(guard);

        tracing::trace!(len = line.len(), "ipc response");
        jsonrpc::decode(&line)
    }
}
