use crate::host::{i32_signature, trap, HostImport};
use crate::state::BridgeState;
use wasmer::{Function, FunctionEnv, FunctionEnvMut, FunctionType, RuntimeError, Store};

pub struct ParamKeyLengthImport;

impl HostImport for ParamKeyLengthImport {
    fn name(&self) -> &str {
        "param_key_length"
    }

    fn signature(&self) -> FunctionType {
        i32_signature(1)
    }

    fn build(&self, store: &mut Store, env: &FunctionEnv<BridgeState>) -> Function {
        Function::new_typed_with_env(store, env, param_key_length_raw)
    }
}

pub static PARAM_KEY_LENGTH_IMPORT: ParamKeyLengthImport = ParamKeyLengthImport;

fn param_key_length_raw(
    ctx: FunctionEnvMut<BridgeState>,
    entry: i32,
) -> Result<i32, RuntimeError> {
    ctx.data().key_length(entry).map_err(trap)
}
