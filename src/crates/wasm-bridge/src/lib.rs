pub mod host;
pub mod instance;
#[cfg(target_arch = "wasm32")]
pub mod location;
pub mod module;
pub mod query;
pub mod runner;
mod state;

pub use query::{ParamEntry, QueryParams};
pub use state::BridgeState;

pub mod wasmer {
    pub use wasmer::*;
}
