use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which half of a parameter entry an accessor was reading.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ParamField {
    Entry,
    Key,
    Value,
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamField::Entry => f.write_str("entry"),
            ParamField::Key => f.write_str("key"),
            ParamField::Value => f.write_str("value"),
        }
    }
}

#[derive(Serialize, Deserialize, Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeInternalError {
    #[error("Invalid WASM module: {0}")]
    InvalidWasmModule(String),
    #[error("WASM execution trapped: {0}")]
    WasmTrap(String),
    #[error("Failed to read the page location: {0}")]
    LocationUnavailable(String),
}

/// Fault raised when the guest asks for an entry or character that does not exist.
#[derive(Serialize, Deserialize, Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} index {index} out of range (len {len})")]
pub struct IndexOutOfRange {
    pub field: ParamField,
    pub index: i64,
    pub len: usize,
}
