use crate::host::{make_imports, HostFunctionMap};
use crate::module::BridgeModule;
use crate::query::QueryParams;
use crate::state::BridgeState;
use querybridge_config::BridgeConfig;
use querybridge_errors::BridgeError;
use wasmer::{FunctionEnv, Instance, RuntimeError, Store, TypedFunction};

pub struct BridgeInstance {
    store: Store,
    _instance: Instance,
    env: FunctionEnv<BridgeState>,
    entry: TypedFunction<(), i32>,
}

impl BridgeInstance {
    pub fn new(
        module: &BridgeModule,
        config: &BridgeConfig,
        state: BridgeState,
        host_imports: Option<&HostFunctionMap>,
    ) -> Result<Self, BridgeError> {
        module.validate(config, host_imports)?;

        let mut store = Store::new(module.engine.clone());
        let env = FunctionEnv::new(&mut store, state);
        let imports = make_imports(&mut store, &env, &config.namespace, host_imports);

        let instance = Instance::new(&mut store, &module.module, &imports).map_err(|e| {
            BridgeError::invalid_module(format!("Error creating WASM Instance {e}"))
        })?;

        let entry = instance
            .exports
            .get_typed_function::<(), i32>(&store, config.entry.as_str())
            .map_err(|e| {
                BridgeError::invalid_module(format!("missing `{}` export {e}", config.entry))
            })?;

        Ok(Self {
            store,
            _instance: instance,
            env,
            entry,
        })
    }

    pub fn state(&self) -> &BridgeState {
        self.env.as_ref(&self.store)
    }

    /// Replace the parameters the guest sees on its next call.
    pub fn reinitialize(&mut self, params: QueryParams) {
        self.env.as_mut(&mut self.store).initialize_with(params);
    }

    pub fn call_entry(&mut self) -> Result<i32, BridgeError> {
        self.entry.call(&mut self.store).map_err(from_trap)
    }
}

/// Recover the bridge error raised by a host import, if that is what trapped.
pub(crate) fn from_trap(err: RuntimeError) -> BridgeError {
    match err.downcast::<BridgeError>() {
        Ok(err) => err,
        Err(other) => BridgeError::trap(format!("WASM entry call failed {other}")),
    }
}
