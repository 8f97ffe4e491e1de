use crate::cmd::resolve_params;
use crate::CmdRun;
use querybridge_config::load_config;
use querybridge_errors::BridgeError;
use querybridge_wasm::module::BridgeModule;
use querybridge_wasm::runner::BridgeRunner;

/// Run the module and hand back its exit code.
pub fn run_cmd(cmd: CmdRun) -> Result<i32, BridgeError> {
    let config = load_config(&cmd.config)?;
    let params = resolve_params(&cmd.source, &config)?;
    let module = BridgeModule::from_path(&cmd.module)?;

    let outcome = BridgeRunner::new(&module, &config, None).run(params)?;

    tracing::info!(
        module = %cmd.module.display(),
        exit_code = outcome.exit_code,
        entries = outcome.entries,
        "Module finished"
    );

    Ok(outcome.exit_code)
}
