use crate::host::{i32_signature, trap, HostImport};
use crate::state::BridgeState;
use wasmer::{Function, FunctionEnv, FunctionEnvMut, FunctionType, RuntimeError, Store};

pub struct ParamValueLengthImport;

impl HostImport for ParamValueLengthImport {
    fn name(&self) -> &str {
        "param_value_length"
    }

    fn signature(&self) -> FunctionType {
        i32_signature(1)
    }

    fn build(&self, store: &mut Store, env: &FunctionEnv<BridgeState>) -> Function {
        Function::new_typed_with_env(store, env, param_value_length_raw)
    }
}

pub static PARAM_VALUE_LENGTH_IMPORT: ParamValueLengthImport = ParamValueLengthImport;

fn param_value_length_raw(
    ctx: FunctionEnvMut<BridgeState>,
    entry: i32,
) -> Result<i32, RuntimeError> {
    ctx.data().value_length(entry).map_err(trap)
}
