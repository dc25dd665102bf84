use serde_json::Value;

use crate::types::Quantity;

rpc_calls! {
    SetExtra => "miner_setExtra" -> bool {
        data: String,
    };

    /// Minimal gas price accepted into mined blocks, in wei.
    SetGasPrice => "miner_setGasPrice" -> bool {
        price: Quantity,
    };

    Start => "miner_start" -> Value {
        threads: u64,
    };

    Stop => "miner_stop" -> Value;

    SetEtherbase => "miner_setEtherbase" -> bool {
        address: String,
    };
}
