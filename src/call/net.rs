use crate::types::Quantity;

rpc_calls! {
    /// Network id as a decimal string.
    Version => "net_version" -> String;
    Listening => "net_listening" -> bool;
    PeerCount => "net_peerCount" -> Quantity;
}
