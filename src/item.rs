//! Item - the record stored under its id in world state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ContractError;

/// A key-value record with a current owner.
///
/// Encoded as a JSON object with the field names `ID`, `Owner` and `Value`.
/// Fields are declared in sorted order so the encoding has sorted keys.
/// Decoding ignores unknown fields and fills missing ones with empty
/// strings, so records written by other contract versions still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Item {
    pub fn new(id: impl Into<String>, owner: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            value: value.into(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ContractError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a stored record. Only a JSON object is a record; the derived
    /// struct decoding alone would also take a positional array.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ContractError> {
        let fields: Map<String, Value> = serde_json::from_slice(bytes)?;
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

/// The records `InitLedger` writes when no bootstrap set is configured.
pub fn default_bootstrap() -> Vec<Item> {
    vec![
        Item::new("Item1", "Alice", "A Yellow Lamp"),
        Item::new("Item2", "Bob", "A Green Parrot"),
        Item::new("Item3", "Charlie", "A Carrot Cake"),
    ]
}
