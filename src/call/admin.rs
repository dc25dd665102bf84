use serde::ser::SerializeSeq;
use serde_json::Value;

use super::Call;

rpc_calls! {
    /// `url` is the peer's enode URL.
    AddPeer => "admin_addPeer" -> bool {
        url: String,
    };

    Datadir => "admin_datadir" -> String;
    NodeInfo => "admin_nodeInfo" -> Value;
    Peers => "admin_peers" -> Vec<Value>;
    StopRpc => "admin_stopRPC" -> bool;
    StopWs => "admin_stopWS" -> bool;
}

#[deprecated(note = "admin_setSolc was removed from the node")]
#[derive(Debug, Clone)]
pub struct SetSolc {
    pub path: String,
}

#[allow(deprecated)]
impl Default for SetSolc {
    fn default() -> Self {
        Self {
            path: "/usr/bin/solc".to_string(),
        }
    }
}

#[allow(deprecated)]
impl Call for SetSolc {
    type Response = String;

    fn method(&self) -> &'static str {
        "admin_setSolc"
    }

    fn serialize_params<S: SerializeSeq>(&self, serializer: &mut S) -> Result<(), S::Error> {
        serializer.serialize_element(&self.path)
    }
}

/// Listener settings shared by `admin_startRPC` and `admin_startWS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listener {
    pub host: String,
    pub port: u16,
    pub cors: Vec<String>,
    pub apis: Vec<String>,
}

impl Listener {
    fn with_port(port: u16) -> Self {
        Self {
            host: "localhost".to_string(),
            port,
            cors: Vec::new(),
            apis: vec!["eth".to_string(), "net".to_string(), "web3".to_string()],
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn cors<S: Into<String>>(mut self, cors: Vec<S>) -> Self {
        self.cors = cors.into_iter().map(Into::into).collect();
        self
    }

    pub fn apis<S: Into<String>>(mut self, apis: Vec<S>) -> Self {
        self.apis = apis.into_iter().map(Into::into).collect();
        self
    }

    fn serialize_into<S: SerializeSeq>(&self, serializer: &mut S) -> Result<(), S::Error> {
        serializer.serialize_element(&self.host)?;
        serializer.serialize_element(&self.port)?;
        serializer.serialize_element(&self.cors.join(","))?;
        serializer.serialize_element(&self.apis.join(","))
    }
}

/// Starts the HTTP RPC listener. Defaults to `localhost:8545` serving
/// `eth,net,web3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRpc(pub Listener);

impl Default for StartRpc {
    fn default() -> Self {
        StartRpc(Listener::with_port(8545))
    }
}

impl Call for StartRpc {
    type Response = bool;

    fn method(&self) -> &'static str {
        "admin_startRPC"
    }

    fn serialize_params<S: SerializeSeq>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.0.serialize_into(serializer)
    }
}

/// Starts the websocket listener. Defaults to `localhost:8546`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartWs(pub Listener);

impl Default for StartWs {
    fn default() -> Self {
        StartWs(Listener::with_port(8546))
    }
}

impl Call for StartWs {
    type Response = bool;

    fn method(&self) -> &'static str {
        "admin_startWS"
    }

    fn serialize_params<S: SerializeSeq>(&self, serializer: &mut S) -> Result<(), S::Error> {
        self.0.serialize_into(serializer)
    }
}
