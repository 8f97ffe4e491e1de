pub mod internal;

use crate::internal::{BridgeInternalError, IndexOutOfRange};
use config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Internal Error: {0}")]
    InternalError(#[from] BridgeInternalError),
    #[error("Index out of range: {0}")]
    IndexOutOfRange(#[from] IndexOutOfRange),
    #[error("The URL is wrongly constructed: {0}")]
    BadUrl(String),
    #[error("Config Error {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("IO Error {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    pub fn invalid_module(msg: impl Into<String>) -> Self {
        BridgeError::InternalError(BridgeInternalError::InvalidWasmModule(msg.into()))
    }

    pub fn trap(msg: impl Into<String>) -> Self {
        BridgeError::InternalError(BridgeInternalError::WasmTrap(msg.into()))
    }

    pub fn out_of_range(&self) -> Option<&IndexOutOfRange> {
        match self {
            BridgeError::IndexOutOfRange(fault) => Some(fault),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::ParamField;

    #[test]
    fn out_of_range_message_names_field_and_bounds() {
        let err = BridgeError::from(IndexOutOfRange {
            field: ParamField::Key,
            index: 4,
            len: 2,
        });
        assert_eq!(
            err.to_string(),
            "Index out of range: key index 4 out of range (len 2)"
        );
        assert!(err.out_of_range().is_some());
    }

    #[test]
    fn fault_serializes_with_snake_case_field() {
        let fault = IndexOutOfRange {
            field: ParamField::Entry,
            index: -1,
            len: 0,
        };
        let json = serde_json::to_value(&fault).unwrap();
        assert_eq!(json["field"], "entry");
        assert_eq!(json["index"], -1);
    }

    #[test]
    fn invalid_module_is_not_a_range_fault() {
        let err = BridgeError::invalid_module("missing `run` export");
        assert!(err.out_of_range().is_none());
        assert!(err.to_string().contains("missing `run` export"));
    }
}
