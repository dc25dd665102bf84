//! The `eth` namespace.
//!
//! Counts and gas figures come back as [`Quantity`]; blocks, transactions and
//! receipts are left as raw JSON, `None` when the node knows nothing of them.

use serde_json::Value;

use crate::types::{BlockId, FilterOptions, Quantity, TransactionRequest};

rpc_calls! {
    ProtocolVersion => "eth_protocolVersion" -> Quantity;

    /// `false`, or an object describing sync progress.
    Syncing => "eth_syncing" -> Value;

    Coinbase => "eth_coinbase" -> String;
    Mining => "eth_mining" -> bool;
    Hashrate => "eth_hashrate" -> Quantity;

    /// Current gas price in wei.
    GasPrice => "eth_gasPrice" -> Quantity;

    Accounts => "eth_accounts" -> Vec<String>;
    BlockNumber => "eth_blockNumber" -> Quantity;

    /// Balance in wei.
    GetBalance => "eth_getBalance" -> Quantity {
        address: String,
        block: BlockId,
    };

    GetStorageAt => "eth_getStorageAt" -> String {
        address: String,
        position: Quantity,
        block: BlockId,
    };

    GetTransactionCount => "eth_getTransactionCount" -> Quantity {
        address: String,
        block: BlockId,
    };

    GetBlockTransactionCountByHash => "eth_getBlockTransactionCountByHash" -> Option<Quantity> {
        hash: String,
    };

    GetBlockTransactionCountByNumber => "eth_getBlockTransactionCountByNumber" -> Option<Quantity> {
        block: BlockId,
    };

    GetUncleCountByBlockHash => "eth_getUncleCountByBlockHash" -> Option<Quantity> {
        hash: String,
    };

    GetUncleCountByBlockNumber => "eth_getUncleCountByBlockNumber" -> Option<Quantity> {
        block: BlockId,
    };

    GetCode => "eth_getCode" -> String {
        address: String,
        block: BlockId,
    };

    /// `data` is hex; the node prefixes the Ethereum message header.
    Sign => "eth_sign" -> String {
        address: String,
        data: String,
    };

    /// Returns the transaction hash.
    SendTransaction => "eth_sendTransaction" -> String {
        transaction: TransactionRequest,
    };

    SendRawTransaction => "eth_sendRawTransaction" -> String {
        data: String,
    };

    /// Executes a message call without creating a transaction.
    Call => "eth_call" -> String {
        transaction: TransactionRequest,
        block: BlockId,
    };

    EstimateGas => "eth_estimateGas" -> Quantity {
        transaction: TransactionRequest,
    };

    GetBlockByHash => "eth_getBlockByHash" -> Option<Value> {
        hash: String,
        full_transactions: bool,
    };

    GetBlockByNumber => "eth_getBlockByNumber" -> Option<Value> {
        block: BlockId,
        full_transactions: bool,
    };

    GetTransactionByHash => "eth_getTransactionByHash" -> Option<Value> {
        hash: String,
    };

    GetTransactionByBlockHashAndIndex => "eth_getTransactionByBlockHashAndIndex" -> Option<Value> {
        hash: String,
        index: Quantity,
    };

    GetTransactionByBlockNumberAndIndex => "eth_getTransactionByBlockNumberAndIndex" -> Option<Value> {
        block: BlockId,
        index: Quantity,
    };

    GetTransactionReceipt => "eth_getTransactionReceipt" -> Option<Value> {
        hash: String,
    };

    GetUncleByBlockHashAndIndex => "eth_getUncleByBlockHashAndIndex" -> Option<Value> {
        hash: String,
        index: Quantity,
    };

    GetUncleByBlockNumberAndIndex => "eth_getUncleByBlockNumberAndIndex" -> Option<Value> {
        block: BlockId,
        index: Quantity,
    };

    #[deprecated(note = "compilers were removed from the node")]
    GetCompilers => "eth_getCompilers" -> Vec<String>;

    #[deprecated(note = "compilers were removed from the node")]
    CompileSolidity => "eth_compileSolidity" -> Value {
        code: String,
    };

    #[deprecated(note = "compilers were removed from the node")]
    CompileLll => "eth_compileLLL" -> Value {
        code: String,
    };

    #[deprecated(note = "compilers were removed from the node")]
    CompileSerpent => "eth_compileSerpent" -> Value {
        code: String,
    };

    /// Returns the filter id.
    NewFilter => "eth_newFilter" -> String {
        filter: FilterOptions,
    };

    NewBlockFilter => "eth_newBlockFilter" -> String;
    NewPendingTransactionFilter => "eth_newPendingTransactionFilter" -> String;

    UninstallFilter => "eth_uninstallFilter" -> bool {
        filter_id: String,
    };

    GetFilterChanges => "eth_getFilterChanges" -> Vec<Value> {
        filter_id: String,
    };

    GetFilterLogs => "eth_getFilterLogs" -> Vec<Value> {
        filter_id: String,
    };

    GetLogs => "eth_getLogs" -> Vec<Value> {
        filter: FilterOptions,
    };

    /// Header pow-hash, seed hash and boundary condition.
    GetWork => "eth_getWork" -> Vec<String>;

    SubmitWork => "eth_submitWork" -> bool {
        nonce: String,
        header: String,
        mix_digest: String,
    };

    SubmitHashrate => "eth_submitHashrate" -> bool {
        hashrate: Quantity,
        id: String,
    };
}
