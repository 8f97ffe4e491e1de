use crate::cmd::resolve_params;
use crate::CmdInspect;
use querybridge_config::load_config;
use querybridge_errors::BridgeError;
use std::io::Write;

pub fn inspect_cmd<W: Write>(cmd: CmdInspect, out: &mut W) -> Result<(), BridgeError> {
    let config = load_config(&cmd.config)?;
    let params = resolve_params(&cmd.source, &config)?;

    serde_json::to_writer_pretty(&mut *out, &params).map_err(std::io::Error::from)?;
    writeln!(out)?;

    Ok(())
}
