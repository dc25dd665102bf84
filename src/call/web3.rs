use serde::ser::SerializeSeq;

use super::Call;
use crate::units::add_0x;

rpc_calls! {
    ClientVersion => "web3_clientVersion" -> String;
}

/// Keccak-256 of `data`; the string is sent as `0x`-prefixed hex of its
/// UTF-8 bytes.
#[derive(Debug, Clone)]
pub struct Sha3 {
    pub data: String,
}

impl Sha3 {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl Call for Sha3 {
    type Response = String;

    fn method(&self) -> &'static str {
        "web3_sha3"
    }

    fn serialize_params<S: SerializeSeq>(&self, serializer: &mut S) -> Result<(), S::Error> {
        serializer.serialize_element(&add_0x(hex::encode(self.data.as_bytes())))
    }
}
