//! Handlers for `betledger preference`.

use serde_json::json;

use crate::adapter::inbound::cli::command::PreferenceCommand;
use crate::adapter::inbound::cli::{context, output};
use crate::domain::OddsNotation;
use crate::error::Result;
use crate::infrastructure::config::Config;

pub fn execute(command: &PreferenceCommand, config: &Config) -> Result<()> {
    match command {
        PreferenceCommand::Show => show(config),
        PreferenceCommand::Set { notation } => set(config, *notation),
        PreferenceCommand::Reset => reset(config),
    }
}

fn show(config: &Config) -> Result<()> {
    let preferences = context::preferences(config);
    let resolved = preferences.resolve(&context::runtime_environment(config))?;

    if output::is_json() {
        output::document(&json!({
            "command": "preference.show",
            "preference": resolved,
            "path": preferences.store().path(),
        }));
        return Ok(());
    }

    if output::is_quiet() {
        output::value(resolved.notation);
        return Ok(());
    }

    output::field("Odds format", output::highlight(resolved.notation));
    output::field("Source", resolved.source);
    output::field("Example", resolved.notation.example());
    Ok(())
}

fn set(config: &Config, notation: OddsNotation) -> Result<()> {
    context::preferences(config).set(notation)?;

    if output::is_json() {
        output::document(&json!({
            "command": "preference.set",
            "odds_format": notation,
        }));
        return Ok(());
    }

    output::success(&format!("Odds format set to {notation}"));
    Ok(())
}

fn reset(config: &Config) -> Result<()> {
    context::preferences(config).reset()?;

    if output::is_json() {
        output::document(&json!({ "command": "preference.reset" }));
        return Ok(());
    }

    output::success("Stored preferences cleared");
    Ok(())
}
