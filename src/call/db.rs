//! The local database namespace. Superseded on every current node.

use serde::ser::SerializeSeq;

use super::Call;
use crate::units::add_0x;

rpc_calls! {
    #[deprecated(note = "db_* was removed from the node")]
    PutString => "db_putString" -> bool {
        db: String,
        key: String,
        value: String,
    };

    #[deprecated(note = "db_* was removed from the node")]
    GetString => "db_getString" -> String {
        db: String,
        key: String,
    };

    #[deprecated(note = "db_* was removed from the node")]
    GetHex => "db_getHex" -> String {
        db: String,
        key: String,
    };
}

/// Stores binary data; `value` gets a `0x` prefix if it lacks one.
#[deprecated(note = "db_* was removed from the node")]
#[derive(Debug, Clone)]
pub struct PutHex {
    pub db: String,
    pub key: String,
    pub value: String,
}

#[allow(deprecated)]
impl Call for PutHex {
    type Response = bool;

    fn method(&self) -> &'static str {
        "db_putHex"
    }

    fn serialize_params<S: SerializeSeq>(&self, serializer: &mut S) -> Result<(), S::Error> {
        serializer.serialize_element(&self.db)?;
        serializer.serialize_element(&self.key)?;
        if self.value.starts_with("0x") {
            serializer.serialize_element(&self.value)
        } else {
            serializer.serialize_element(&add_0x(&self.value))
        }
    }
}
