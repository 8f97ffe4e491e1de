pub mod inspect;
pub mod run;

use crate::QueryArgs;
use querybridge_config::BridgeConfig;
use querybridge_errors::BridgeError;
use querybridge_wasm::QueryParams;

/// Capture parameters from the command line, then the config, then nothing.
pub fn resolve_params(
    source: &QueryArgs,
    config: &BridgeConfig,
) -> Result<QueryParams, BridgeError> {
    if let Some(url) = &source.url {
        return QueryParams::from_url(url);
    }

    match source.query.as_deref().or(config.query.as_deref()) {
        Some(query) => Ok(QueryParams::parse(query)),
        None => {
            tracing::info!("No query supplied, running with an empty parameter list");
            Ok(QueryParams::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use querybridge_config::BridgeConfigBuilder;

    fn args(query: Option<&str>, url: Option<&str>) -> QueryArgs {
        QueryArgs {
            query: query.map(String::from),
            url: url.map(String::from),
        }
    }

    #[test]
    fn command_line_query_wins_over_config() {
        let config = BridgeConfigBuilder::default()
            .query("?from=config")
            .build()
            .unwrap();
        let params = resolve_params(&args(Some("?from=cli"), None), &config).unwrap();
        assert_eq!(params.first("from"), Some("cli"));
    }

    #[test]
    fn config_query_is_the_fallback() {
        let config = BridgeConfigBuilder::default()
            .query("?from=config")
            .build()
            .unwrap();
        let params = resolve_params(&QueryArgs::default(), &config).unwrap();
        assert_eq!(params.first("from"), Some("config"));
    }

    #[test]
    fn url_source_reads_query_component() {
        let params = resolve_params(
            &args(None, Some("https://example.com/play?level=3")),
            &BridgeConfig::default(),
        )
        .unwrap();
        assert_eq!(params.first("level"), Some("3"));
    }

    #[test]
    fn nothing_supplied_is_empty() {
        let params = resolve_params(&QueryArgs::default(), &BridgeConfig::default()).unwrap();
        assert!(params.is_empty());
    }
}
