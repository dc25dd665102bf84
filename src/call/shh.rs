//! Whisper.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::{ShhFilter, ShhPost};

/// Whisper protocol version. Nodes send it as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhisperVersion(pub f64);

impl<'de> Deserialize<'de> for WhisperVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(WhisperVersion(n)),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map(WhisperVersion)
                .map_err(|e| serde::de::Error::custom(format!("bad whisper version {s:?}: {e}"))),
        }
    }
}

rpc_calls! {
    Version => "shh_version" -> WhisperVersion;

    Post => "shh_post" -> bool {
        post: ShhPost,
    };

    #[deprecated(note = "superseded by shh_newKeyPair")]
    NewIdentity => "shh_newIdentity" -> String;

    #[deprecated(note = "superseded by shh_hasKeyPair")]
    HasIdentity => "shh_hasIdentity" -> bool {
        address: String,
    };

    #[deprecated(note = "whisper groups were never implemented")]
    NewGroup => "shh_newGroup" -> String;

    #[deprecated(note = "whisper groups were never implemented")]
    AddToGroup => "shh_addToGroup" -> bool {
        identity: String,
    };

    #[deprecated(note = "superseded by shh_newMessageFilter")]
    NewFilter => "shh_newFilter" -> String {
        filter: ShhFilter,
    };

    #[deprecated(note = "superseded by shh_deleteMessageFilter")]
    UninstallFilter => "shh_uninstallFilter" -> bool {
        filter_id: String,
    };

    #[deprecated(note = "superseded by shh_getFilterMessages")]
    GetFilterChanges => "shh_getFilterChanges" -> Vec<Value> {
        filter_id: String,
    };

    #[deprecated(note = "superseded by shh_getFilterMessages")]
    GetMessages => "shh_getMessages" -> Vec<Value> {
        filter_id: String,
    };
}
