use crate::host::{i32_signature, HostImport};
use crate::state::BridgeState;
use wasmer::{Function, FunctionEnv, FunctionEnvMut, FunctionType, Store};

pub struct ParamCountImport;

impl HostImport for ParamCountImport {
    fn name(&self) -> &str {
        "param_count"
    }

    fn signature(&self) -> FunctionType {
        i32_signature(0)
    }

    fn build(&self, store: &mut Store, env: &FunctionEnv<BridgeState>) -> Function {
        Function::new_typed_with_env(store, env, param_count_raw)
    }
}

pub static PARAM_COUNT_IMPORT: ParamCountImport = ParamCountImport;

fn param_count_raw(ctx: FunctionEnvMut<BridgeState>) -> i32 {
    ctx.data().entry_count()
}
