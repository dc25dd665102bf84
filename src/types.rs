use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, skip_serializing_none, SerializeAs};

use crate::error::Error;

/// A block height or one of the fixed tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockId {
    Earliest,
    #[default]
    Latest,
    Pending,
    Number(u64),
}

impl Serialize for BlockId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BlockId::Earliest => serializer.serialize_str("earliest"),
            BlockId::Latest => serializer.serialize_str("latest"),
            BlockId::Pending => serializer.serialize_str("pending"),
            BlockId::Number(n) => serializer.serialize_str(&format!("{n:#x}")),
        }
    }
}

impl FromStr for BlockId {
    type Err = Error;

    /// Only the tags are accepted here; heights go through `From<u64>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earliest" => Ok(BlockId::Earliest),
            "latest" => Ok(BlockId::Latest),
            "pending" => Ok(BlockId::Pending),
            other => Err(Error::InvalidBlock(format!("invalid block tag {other:?}"))),
        }
    }
}

impl From<u64> for BlockId {
    fn from(number: u64) -> Self {
        BlockId::Number(number)
    }
}

/// An unsigned integer that travels as a `0x` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(pub u128);

impl Quantity {
    pub fn value(self) -> u128 {
        self.0
    }
}

impl From<u128> for Quantity {
    fn from(value: u128) -> Self {
        Quantity(value)
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Quantity(value.into())
    }
}

impl From<Quantity> for u128 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:#x}", self.0))
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuantityVisitor;

        impl Visitor<'_> for QuantityVisitor {
            type Value = Quantity;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a 0x-prefixed hex quantity")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Quantity, E> {
                let digits = v
                    .strip_prefix("0x")
                    .or_else(|| v.strip_prefix("0X"))
                    .ok_or_else(|| E::custom(format!("missing 0x prefix in {v:?}")))?;
                u128::from_str_radix(digits, 16)
                    .map(Quantity)
                    .map_err(|e| E::custom(format!("bad hex quantity {v:?}: {e}")))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Quantity, E> {
                Ok(Quantity(v.into()))
            }
        }

        deserializer.deserialize_any(QuantityVisitor)
    }
}

/// `serde_as` adapter writing plain integers as hex quantities.
pub struct HexQuantity;

impl<T> SerializeAs<T> for HexQuantity
where
    T: Copy + Into<u128>,
{
    fn serialize_as<S: Serializer>(source: &T, serializer: S) -> Result<S::Ok, S::Error> {
        Quantity((*source).into()).serialize(serializer)
    }
}

/// Transaction object for `eth_sendTransaction`, `eth_call`,
/// `eth_estimateGas` and `personal_sendTransaction`.
#[serde_as]
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub from: String,
    pub to: Option<String>,
    #[serde_as(as = "Option<HexQuantity>")]
    pub gas: Option<u64>,
    #[serde_as(as = "Option<HexQuantity>")]
    pub gas_price: Option<u128>,
    #[serde_as(as = "Option<HexQuantity>")]
    pub value: Option<u128>,
    pub data: Option<String>,
    #[serde_as(as = "Option<HexQuantity>")]
    pub nonce: Option<u64>,
}

impl TransactionRequest {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            ..Default::default()
        }
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn gas(mut self, gas: u64) -> Self {
        self.gas = Some(gas);
        self
    }

    pub fn gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    pub fn value(mut self, value: u128) -> Self {
        self.value = Some(value);
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }
}

/// Log filter for `eth_newFilter` and `eth_getLogs`.
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub from_block: BlockId,
    pub to_block: BlockId,
    pub address: Option<String>,
    pub topics: Option<Vec<serde_json::Value>>,
}

/// Whisper message for `shh_post`.
#[serde_as]
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ShhPost {
    pub from: Option<String>,
    pub to: Option<String>,
    pub topics: Vec<String>,
    pub payload: String,
    #[serde_as(as = "HexQuantity")]
    pub priority: u64,
    #[serde_as(as = "HexQuantity")]
    pub ttl: u64,
}

/// Whisper filter for `shh_newFilter`.
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ShhFilter {
    pub to: Option<String>,
    pub topics: Vec<serde_json::Value>,
}
