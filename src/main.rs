use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use betledger::adapter::inbound::cli::command::Cli;
use betledger::adapter::inbound::cli::diagnostic::ConfigDiagnostic;
use betledger::adapter::inbound::cli::dispatch;
use betledger::adapter::inbound::cli::output::{self, OutputConfig};
use betledger::error::{ConfigError, Error};
use betledger::infrastructure::config::{paths, Config};

fn load_config(path: Option<&PathBuf>) -> Result<Config, Error> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_or_default(paths::default_config()),
    }
}

fn report_config_error(path: &std::path::Path, err: &Error) {
    if let Error::Config(ConfigError::Parse(toml_err)) = err {
        if !output::is_json() {
            if let Some(diagnostic) = ConfigDiagnostic::from_toml(path, toml_err) {
                eprintln!("{:?}", miette::Report::new(diagnostic));
                return;
            }
        }
    }
    output::error(&err.to_string());
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    output::set_color(cli.color.forced());

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            let path = cli.config.clone().unwrap_or_else(paths::default_config);
            report_config_error(&path, &e);
            return ExitCode::FAILURE;
        }
    };

    config.init_logging(output::verbosity());
    debug!(command = ?cli.command, "betledger starting");

    match dispatch(&cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Command failed");
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
