use crate::host::HostFunctionMap;
use crate::instance::BridgeInstance;
use crate::module::BridgeModule;
use crate::query::QueryParams;
use crate::state::BridgeState;
use querybridge_config::BridgeConfig;
use querybridge_errors::BridgeError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub exit_code: i32,
    pub entries: usize,
}

pub struct BridgeRunner<'a> {
    pub module: &'a BridgeModule,
    config: &'a BridgeConfig,
    host_imports: Option<&'a HostFunctionMap>,
}

impl<'a> BridgeRunner<'a> {
    pub fn new(
        module: &'a BridgeModule,
        config: &'a BridgeConfig,
        host_imports: Option<&'a HostFunctionMap>,
    ) -> Self {
        Self {
            module,
            config,
            host_imports,
        }
    }

    pub fn run(&self, params: QueryParams) -> Result<RunOutcome, BridgeError> {
        let entries = params.len();
        let state = BridgeState::from_params(params);

        let mut instance = BridgeInstance::new(self.module, self.config, state, self.host_imports)?;

        tracing::debug!(
            module = %self.module.path.display(),
            entry = %self.config.entry,
            entries,
            "Calling WASM entry"
        );

        let exit_code = instance.call_entry()?;

        Ok(RunOutcome { exit_code, entries })
    }

    pub fn run_query(&self, query: &str) -> Result<RunOutcome, BridgeError> {
        self.run(QueryParams::parse(query))
    }
}
