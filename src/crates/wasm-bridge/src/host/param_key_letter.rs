use crate::host::{i32_signature, trap, HostImport};
use crate::state::BridgeState;
use wasmer::{Function, FunctionEnv, FunctionEnvMut, FunctionType, RuntimeError, Store};

pub struct ParamKeyLetterImport;

impl HostImport for ParamKeyLetterImport {
    fn name(&self) -> &str {
        "param_key_letter"
    }

    fn signature(&self) -> FunctionType {
        i32_signature(2)
    }

    fn build(&self, store: &mut Store, env: &FunctionEnv<BridgeState>) -> Function {
        Function::new_typed_with_env(store, env, param_key_letter_raw)
    }
}

pub static PARAM_KEY_LETTER_IMPORT: ParamKeyLetterImport = ParamKeyLetterImport;

fn param_key_letter_raw(
    ctx: FunctionEnvMut<BridgeState>,
    entry: i32,
    index: i32,
) -> Result<i32, RuntimeError> {
    ctx.data().key_char_code(entry, index).map_err(trap)
}
