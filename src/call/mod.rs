//! Typed node methods.
//!
//! Each struct is one RPC method: its fields are the positional params,
//! `Response` is what the result is decoded into. Pass them to
//! [`Client::call`](crate::Client).

use serde::ser::{SerializeSeq, Serializer};
use serde_json::Value;

use crate::error::Error;

pub trait Call {
    type Response: serde::de::DeserializeOwned;

    fn method(&self) -> &'static str;
    fn serialize_params<S: SerializeSeq>(&self, _serializer: &mut S) -> Result<(), S::Error> {
        Ok(())
    }
}

macro_rules! option_element {
    ($opt: expr, $serializer: expr) => {
        if let Some(ref value) = $opt {
            $serializer.serialize_element(value)?;
        }
    };
}

/// Declares plain calls. `{ .. }` holds the positional params, `[ .. ]` the
/// optional trailing ones, which are left off the wire when `None`.
macro_rules! rpc_calls {
    () => {};
    (
        $(#[$meta:meta])*
        $name:ident => $method:literal -> $response:ty;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        #[allow(deprecated)]
        impl $crate::call::Call for $name {
            type Response = $response;

            fn method(&self) -> &'static str {
                $method
            }
        }

        rpc_calls!($($rest)*);
    };
    (
        $(#[$meta:meta])*
        $name:ident => $method:literal -> $response:ty {
            $($field:ident : $fty:ty),* $(,)?
        } $([ $($opt:ident : $oty:ty),* $(,)? ])?;
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            $(pub $field: $fty,)*
            $($(pub $opt: Option<$oty>,)*)?
        }

        #[allow(deprecated)]
        impl $crate::call::Call for $name {
            type Response = $response;

            fn method(&self) -> &'static str {
                $method
            }

            fn serialize_params<S: ::serde::ser::SerializeSeq>(
                &self,
                serializer: &mut S,
            ) -> ::std::result::Result<(), S::Error> {
                $(serializer.serialize_element(&self.$field)?;)*
                $($(option_element!(self.$opt, serializer);)*)?
                Ok(())
            }
        }

        rpc_calls!($($rest)*);
    };
}

pub mod admin;
pub mod db;
pub mod debug;
pub mod eth;
pub mod miner;
pub mod net;
pub mod personal;
pub mod shh;
pub mod txpool;
pub mod web3;

/// The params array of a call.
#[derive(Debug)]
pub struct Params<'a, T>(pub &'a T);

impl<T> serde::Serialize for Params<'_, T>
where
    T: Call,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(None)?;
        self.0.serialize_params(&mut seq)?;
        seq.end()
    }
}

pub(crate) fn to_params<C: Call>(call: &C) -> crate::Result<Vec<Value>> {
    match serde_json::to_value(Params(call)).map_err(Error::Encode)? {
        Value::Array(params) => Ok(params),
        other => Err(Error::Encode(serde::ser::Error::custom(format!(
            "params of {} serialized to {other}",
            call.method()
        )))),
    }
}
