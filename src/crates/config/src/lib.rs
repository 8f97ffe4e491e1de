use crate::config::get_config_builder;
use ::config::ConfigError;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

pub mod config;

pub const DEFAULT_NAMESPACE: &str = "env";
pub const DEFAULT_ENTRY: &str = "run";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(default)]
pub struct BridgeConfig {
    /// Import namespace the five parameter functions are registered under.
    #[builder(setter(into))]
    pub namespace: String,
    /// Exported `() -> i32` function invoked by the runner.
    #[builder(setter(into))]
    pub entry: String,
    /// Query string used when the caller does not supply one.
    #[builder(setter(into, strip_option))]
    pub query: Option<String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            namespace: DEFAULT_NAMESPACE.into(),
            entry: DEFAULT_ENTRY.into(),
            query: None,
        }
    }
}

pub fn load_config(paths: &[String]) -> Result<BridgeConfig, ConfigError> {
    let builder = get_config_builder(paths)?;
    let config = builder.build()?.try_deserialize()?;

    Ok(config)
}
