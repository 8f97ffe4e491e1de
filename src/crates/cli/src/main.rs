use clap::Parser;
use querybridge_cli::cmd::inspect::inspect_cmd;
use querybridge_cli::cmd::run::run_cmd;
use querybridge_cli::{Cli, Command};
use querybridge_errors::BridgeError;

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cmd: Result<i32, BridgeError> = match cli.command {
        None => Ok(0),
        Some(cmd) => match cmd {
            Command::Run(run_options) => run_cmd(run_options),
            Command::Inspect(inspect_options) => {
                inspect_cmd(inspect_options, &mut std::io::stdout().lock()).map(|()| 0)
            }
        },
    };

    match cmd {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
