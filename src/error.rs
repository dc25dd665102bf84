use std::time::Duration;

/// Every failure a call can surface.
///
/// The first four variants are the round-trip failures of the core; the rest
/// come from parameter shaping, result typing and client construction.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Transport error {0}")]
    Transport(#[from] TransportError),
    #[error("Bad status {0}")]
    BadStatus(u16),
    #[error("Bad json {0}")]
    BadJson(String),
    #[error("Rpc error {0}")]
    BadResponse(RpcError),
    #[error("Encode error {0}")]
    Encode(serde_json::Error),
    #[error("Decode error {0}")]
    Decode(serde_json::Error),
    #[error("Invalid block {0}")]
    InvalidBlock(String),
    #[error("Invalid hex {0}")]
    InvalidHex(String),
    #[error("Invalid uri {0}")]
    InvalidUri(String),
    #[error("Scheme not supported: {0}")]
    UnsupportedScheme(String),
}

impl Error {
    /// The node-side error, if the node answered with one.
    pub fn rpc(&self) -> Option<&RpcError> {
        match self {
            Error::BadResponse(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// The connection could not be established or broke for good.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("no data received, connection refused")]
    NoData,
}

/// The `error` member of a JSON-RPC response, kept verbatim.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RpcError: {{\"code\": {}, \"message\": \"{}\"}}",
            self.code, self.message
        )
    }
}
impl std::error::Error for RpcError {}

impl From<RpcError> for Error {
    fn from(err: RpcError) -> Self {
        Error::BadResponse(err)
    }
}
