use std::collections::HashMap;

use serde_json::Value;

use crate::types::Quantity;

rpc_calls! {
    /// Pending and queued transactions, keyed by sender and nonce.
    Content => "txpool_content" -> Value;
    Inspect => "txpool_inspect" -> Value;
    /// `pending` and `queued` counts.
    Status => "txpool_status" -> HashMap<String, Quantity>;
}
