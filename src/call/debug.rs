//! The `debug` namespace. Profiling calls take a file path on the node's
//! filesystem and a duration in seconds.

use serde_json::Value;

use crate::types::Quantity;

rpc_calls! {
    /// `location` is `file.go:line`.
    BacktraceAt => "debug_backtraceAt" -> Value {
        location: String,
    };

    BlockProfile => "debug_blockProfile" -> Value {
        file: String,
        seconds: u64,
    };

    CpuProfile => "debug_cpuProfile" -> Value {
        file: String,
        seconds: u64,
    };

    /// State dump of every account at the given height.
    DumpBlock => "debug_dumpBlock" -> Value {
        number: Quantity,
    };

    GcStats => "debug_gcStats" -> Value;

    GetBlockRlp => "debug_getBlockRlp" -> String {
        number: u64,
    };

    GoTrace => "debug_goTrace" -> Value {
        file: String,
        seconds: u64,
    };

    MemStats => "debug_memStats" -> Value;

    SeedHash => "debug_seedHash" -> String {
        number: u64,
    };

    /// Rewinds the chain head. Destructive.
    SetHead => "debug_setHead" -> Value {
        number: Quantity,
    };

    SetBlockProfileRate => "debug_setBlockProfileRate" -> Value {
        rate: u64,
    };

    Stacks => "debug_stacks" -> String;

    StartCpuProfile => "debug_startCPUProfile" -> Value {
        file: String,
    };

    StartGoTrace => "debug_startGoTrace" -> Value {
        file: String,
    };

    StopCpuProfile => "debug_stopCPUProfile" -> Value;
    StopGoTrace => "debug_stopGoTrace" -> Value;

    TraceBlock => "debug_traceBlock" -> Value {
        block_rlp: String,
    };

    TraceBlockByNumber => "debug_traceBlockByNumber" -> Value {
        number: Quantity,
    };

    TraceBlockByHash => "debug_traceBlockByHash" -> Value {
        hash: String,
    };

    TraceBlockFromFile => "debug_traceBlockFromFile" -> Value {
        file: String,
    };

    TraceTransaction => "debug_traceTransaction" -> Value {
        hash: String,
    };

    Verbosity => "debug_verbosity" -> Value {
        level: u64,
    };

    Vmodule => "debug_vmodule" -> Value {
        pattern: String,
    };

    WriteBlockProfile => "debug_writeBlockProfile" -> Value {
        file: String,
    };

    WriteMemProfile => "debug_writeMemProfile" -> Value {
        file: String,
    };
}
