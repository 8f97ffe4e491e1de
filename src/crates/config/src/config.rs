use crate::BridgeConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, FileFormat, FileSourceFile};
use std::path::Path;
use walkdir::WalkDir;

pub const ENV_VAR_PREFIX: &str = "QUERYBRIDGE";
pub const ENV_VAR_DELIM: &str = "__";

type TomlSource = config::File<FileSourceFile, FileFormat>;

/// Every `*.toml` under a directory in file-name order, or the single file at `config_path`.
fn config_sources(config_path: &str) -> Result<Vec<TomlSource>, ConfigError> {
    let path = Path::new(config_path);
    if !path.is_dir() {
        return Ok(vec![config::File::with_name(config_path).required(true)]);
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name().follow_links(true) {
        let entry = entry.map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        let file = entry.path();
        if file.is_file() && file.extension().is_some_and(|ext| ext == "toml") {
            sources.push(config::File::from(file).format(FileFormat::Toml));
        }
    }

    if sources.is_empty() {
        return Err(ConfigError::Message(format!(
            "config directory `{config_path}` contains no .toml files"
        )));
    }

    Ok(sources)
}

/// Defaults from `BridgeConfig`, then `paths` in order, then `QUERYBRIDGE__*` variables.
pub(crate) fn get_config_builder(
    paths: &[String],
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = BridgeConfig::default();
    let mut builder = Config::builder()
        .set_default("namespace", defaults.namespace)?
        .set_default("entry", defaults.entry)?;

    for path in paths {
        for source in config_sources(path)? {
            builder = builder.add_source(source);
        }
    }

    let env_source = config::Environment::with_prefix(ENV_VAR_PREFIX)
        .separator(ENV_VAR_DELIM)
        .try_parsing(true);

    Ok(builder.add_source(env_source))
}
