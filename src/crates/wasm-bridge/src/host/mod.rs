use crate::state::BridgeState;
use querybridge_errors::BridgeError;
use std::collections::HashMap;
use std::sync::Arc;
use wasmer::{Function, FunctionEnv, FunctionType, Imports, RuntimeError, Store, Type};

mod param_count;
mod param_key_length;
mod param_key_letter;
mod param_value_length;
mod param_value_letter;

pub use param_count::PARAM_COUNT_IMPORT;
pub use param_key_length::PARAM_KEY_LENGTH_IMPORT;
pub use param_key_letter::PARAM_KEY_LETTER_IMPORT;
pub use param_value_length::PARAM_VALUE_LENGTH_IMPORT;
pub use param_value_letter::PARAM_VALUE_LETTER_IMPORT;

pub type HostFunctionBuilder =
    Arc<dyn Fn(&mut Store, &FunctionEnv<BridgeState>) -> Function + Send + Sync>;
/// Embedder-provided functions, keyed by namespace then import name.
pub type HostFunctionMap = HashMap<String, Vec<(String, HostFunctionBuilder)>>;

/// A typed host function the bridge exposes to guests.
pub trait HostImport: Sync {
    fn name(&self) -> &str;

    fn signature(&self) -> FunctionType;

    fn build(&self, store: &mut Store, env: &FunctionEnv<BridgeState>) -> Function;
}

pub static BRIDGE_IMPORTS: [&dyn HostImport; 5] = [
    &PARAM_COUNT_IMPORT,
    &PARAM_KEY_LENGTH_IMPORT,
    &PARAM_KEY_LETTER_IMPORT,
    &PARAM_VALUE_LENGTH_IMPORT,
    &PARAM_VALUE_LETTER_IMPORT,
];

pub fn find_import(name: &str) -> Option<&'static dyn HostImport> {
    BRIDGE_IMPORTS
        .iter()
        .copied()
        .find(|import| import.name() == name)
}

pub(crate) fn i32_signature(params: usize) -> FunctionType {
    FunctionType::new(vec![Type::I32; params], vec![Type::I32])
}

/// Turn an accessor failure into a trap carrying the original error.
pub(crate) fn trap(err: BridgeError) -> RuntimeError {
    tracing::warn!(error = %err, "Guest parameter access faulted");
    RuntimeError::user(Box::new(err))
}

/// Add the parameter functions to an existing import table under `namespace`.
pub fn register_imports(
    imports: &mut Imports,
    store: &mut Store,
    env: &FunctionEnv<BridgeState>,
    namespace: &str,
) {
    for import in BRIDGE_IMPORTS {
        let function = import.build(store, env);
        imports.define(namespace, import.name(), function);
        tracing::trace!(namespace, name = import.name(), "Registered host import");
    }
}

pub fn make_imports(
    store: &mut Store,
    env: &FunctionEnv<BridgeState>,
    namespace: &str,
    host_imports: Option<&HostFunctionMap>,
) -> Imports {
    let mut imports = Imports::new();
    register_imports(&mut imports, store, env, namespace);

    if let Some(host_map) = host_imports {
        for (extra_namespace, functions) in host_map {
            for (name, builder) in functions {
                if extra_namespace == namespace && find_import(name).is_some() {
                    tracing::warn!(
                        namespace,
                        name = %name,
                        "Skipping host import shadowing a bridge import"
                    );
                    continue;
                }
                let function = builder(store, env);
                imports.define(extra_namespace, name, function);
            }
        }
    }

    imports
}

/// True when `host_imports` provides `namespace`.`name`.
pub(crate) fn provides(
    host_imports: Option<&HostFunctionMap>,
    namespace: &str,
    name: &str,
) -> bool {
    host_imports
        .and_then(|map| map.get(namespace))
        .is_some_and(|functions| functions.iter().any(|(n, _)| n == name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_the_five_accessors() {
        let names: Vec<_> = BRIDGE_IMPORTS.iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            vec![
                "param_count",
                "param_key_length",
                "param_key_letter",
                "param_value_length",
                "param_value_letter",
            ]
        );
    }

    #[test]
    fn signatures_take_index_arguments() {
        let arity = |name: &str| find_import(name).unwrap().signature().params().len();
        assert_eq!(arity("param_count"), 0);
        assert_eq!(arity("param_key_length"), 1);
        assert_eq!(arity("param_value_letter"), 2);
        for import in BRIDGE_IMPORTS {
            assert_eq!(import.signature().results(), &[Type::I32]);
        }
    }

    #[test]
    fn unknown_names_are_not_bridge_imports() {
        assert!(find_import("param_key").is_none());
        assert!(find_import("get_query_param").is_none());
    }

    #[test]
    fn make_imports_registers_under_namespace() {
        let mut store = Store::default();
        let env = FunctionEnv::new(&mut store, BridgeState::new());
        let imports = make_imports(&mut store, &env, "params", None);

        assert!(imports.get_export("params", "param_count").is_some());
        assert!(imports.get_export("params", "param_value_letter").is_some());
        assert!(imports.get_export("env", "param_count").is_none());
    }

    #[test]
    fn make_imports_never_builds_shadowing_functions() {
        let shadow: HostFunctionBuilder = Arc::new(
            |_store: &mut Store, _env: &FunctionEnv<BridgeState>| -> Function {
                panic!("bridge accessor must not be replaced")
            },
        );
        let mut host_imports: HostFunctionMap = HashMap::new();
        host_imports.insert("env".into(), vec![("param_count".into(), shadow)]);

        let mut store = Store::default();
        let env = FunctionEnv::new(&mut store, BridgeState::new());
        let imports = make_imports(&mut store, &env, "env", Some(&host_imports));
        assert!(imports.get_export("env", "param_count").is_some());
    }
}
