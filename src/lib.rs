//! Async client for an Ethereum node's JSON-RPC interface, over HTTP(S) or
//! the node's IPC socket.
//!
//! ```no_run
//! use async_ethereum::call::eth;
//!
//! # async fn run() -> async_ethereum::Result<()> {
//! let client = async_ethereum::connect("http://127.0.0.1:8545").await?;
//! let height = client.call(eth::BlockNumber).await?;
//! let raw = client.request("eth_blockNumber", vec![]).await?;
//! # Ok(())
//! # }
//! ```

pub mod call;
mod client;
mod error;
pub mod jsonrpc;
mod options;
pub mod transport;
pub mod types;
pub mod units;

pub use client::{connect, Client, ClientInner};
pub use error::{Error, RpcError, TransportError};
pub use options::{ConnectionMeta, Endpoint};
pub use types::{BlockId, Quantity, TransactionRequest};

pub type Result<T> = std::result::Result<T, Error>;
