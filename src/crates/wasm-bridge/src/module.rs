use crate::host::{find_import, provides, HostFunctionMap};
use querybridge_config::BridgeConfig;
use querybridge_errors::BridgeError;
use std::path::{Path, PathBuf};
use wasmer::{Engine, ExternType, Module, Type};

pub struct BridgeModule {
    pub engine: Engine,
    pub module: Module,
    pub path: PathBuf,
}

impl BridgeModule {
    pub fn new(engine: Engine, module: Module) -> Self {
        Self {
            engine,
            module,
            path: PathBuf::new(),
        }
    }

    /// Load & compile a Wasm module from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BridgeError> {
        let path = path.as_ref().to_path_buf();
        let bytes = std::fs::read(&path)?;
        let mut module = Self::from_bytes(&bytes)?;
        module.path = path;

        Ok(module)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BridgeError> {
        let (engine, module) = Self::initiate(bytes, None)?;
        Ok(Self::new(engine, module))
    }

    pub fn initiate(
        bytes: &[u8],
        engine: Option<Engine>,
    ) -> Result<(Engine, Module), BridgeError> {
        let engine = engine.unwrap_or_default();
        let module = Module::new(&engine, bytes)
            .map_err(|e| BridgeError::invalid_module(format!("Error compiling module {e}")))?;

        Ok((engine, module))
    }

    /// Names the module imports from the bridge namespace.
    pub fn bridge_imports(&self, namespace: &str) -> Vec<String> {
        self.module
            .imports()
            .filter(|import| import.module() == namespace)
            .map(|import| import.name().to_string())
            .collect()
    }

    /// Check the entry export and every import declared under the bridge
    /// namespace before instantiating.
    pub fn validate(
        &self,
        config: &BridgeConfig,
        host_imports: Option<&HostFunctionMap>,
    ) -> Result<(), BridgeError> {
        self.validate_entry(&config.entry)?;

        let namespace = config.namespace.as_str();
        if let Some(name) = shadowed_import(host_imports, namespace) {
            return Err(BridgeError::invalid_module(format!(
                "host import `{namespace}.{name}` collides with a bridge import"
            )));
        }

        for import in self.module.imports() {
            if import.module() != namespace {
                continue;
            }

            let name = import.name();
            match (find_import(name), import.ty()) {
                (Some(host), ExternType::Function(ty)) => {
                    let expected = host.signature();
                    if *ty != expected {
                        return Err(BridgeError::invalid_module(format!(
                            "import `{namespace}.{name}` has signature {ty}, expected {expected}"
                        )));
                    }
                }
                (Some(_), other) => {
                    return Err(BridgeError::invalid_module(format!(
                        "import `{namespace}.{name}` must be a function, found {other:?}"
                    )));
                }
                (None, _) if provides(host_imports, namespace, name) => {}
                (None, _) => {
                    return Err(BridgeError::invalid_module(format!(
                        "unresolved import `{namespace}.{name}`"
                    )));
                }
            }
        }

        Ok(())
    }

    fn validate_entry(&self, entry: &str) -> Result<(), BridgeError> {
        let export = self
            .module
            .exports()
            .find(|export| export.name() == entry)
            .ok_or_else(|| BridgeError::invalid_module(format!("missing `{entry}` export")))?;

        match export.ty() {
            ExternType::Function(ty) if ty.params().is_empty() && ty.results() == [Type::I32] => {
                Ok(())
            }
            other => Err(BridgeError::invalid_module(format!(
                "export `{entry}` must be a `() -> i32` function, found {other:?}"
            ))),
        }
    }
}

/// First embedder function that would replace one of the bridge accessors.
fn shadowed_import<'a>(
    host_imports: Option<&'a HostFunctionMap>,
    namespace: &str,
) -> Option<&'a str> {
    host_imports?
        .get(namespace)?
        .iter()
        .map(|(name, _)| name.as_str())
        .find(|name| find_import(name).is_some())
}
