use std::path::PathBuf;
use std::time::Duration;

use percent_encoding::percent_decode_str;
use reqwest::Url;

use crate::error::Error;
use crate::Result;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_RECONNECT_ATTEMPTS: usize = 3;
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_millis(500);

/// Where the node listens, as parsed from the connection URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Http { host: String, port: u16, tls: bool },
    Ipc { path: PathBuf },
}

impl Endpoint {
    /// `http`/`https` select the HTTP transport, `ipc`/`unix` the socket one.
    pub fn parse(uri: &str) -> Result<Self> {
        let url = Url::parse(uri).map_err(|e| Error::InvalidUri(format!("{uri}: {e}")))?;
        match url.scheme() {
            scheme @ ("http" | "https") => {
                let host = url
                    .host_str()
                    .ok_or_else(|| Error::InvalidUri(format!("{uri}: missing host")))?;
                // `Url` drops an explicit port equal to the scheme default,
                // so ask for the known default rather than assuming 80.
                let port = url.port_or_known_default().unwrap_or(80);
                Ok(Endpoint::Http {
                    host: host.to_string(),
                    port,
                    tls: scheme.ends_with('s'),
                })
            }
            "ipc" | "unix" => {
                // `Url` hands the path back percent-encoded.
                let raw = percent_decode_str(url.path())
                    .decode_utf8()
                    .map_err(|e| Error::InvalidUri(format!("{uri}: {e}")))?;
                let path = match url.host_str() {
                    Some(host) if !host.is_empty() => format!("{host}{raw}"),
                    _ => raw.into_owned(),
                };
                if path.is_empty() {
                    return Err(Error::InvalidUri(format!("{uri}: missing socket path")));
                }
                Ok(Endpoint::Ipc { path: path.into() })
            }
            other => Err(Error::UnsupportedScheme(other.to_string())),
        }
    }

    /// `scheme://host:port` for the HTTP variant.
    pub fn url(&self) -> Option<String> {
        match self {
            Endpoint::Http { host, port, tls } => {
                let scheme = if *tls { "https" } else { "http" };
                Some(format!("{scheme}://{host}:{port}"))
            }
            Endpoint::Ipc { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConnectionMeta {
    pub uri: String,
    /// HTTP: whole request. IPC: each connect attempt and each response read.
    pub timeout: Duration,
    pub reconnect_attempts: usize,
    pub reconnect_delay: Duration,
}

impl ConnectionMeta {
    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            timeout: DEFAULT_TIMEOUT,
            reconnect_attempts: DEFAULT_RECONNECT_ATTEMPTS,
            reconnect_delay: DEFAULT_RECONNECT_DELAY,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn reconnect_attempts(mut self, attempts: usize) -> Self {
        self.reconnect_attempts = attempts;
        self
    }

    pub fn reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    pub fn endpoint(&self) -> Result<Endpoint> {
        Endpoint::parse(&self.uri)
    }
}
