//! Handler for `betledger convert`.

use serde_json::json;

use crate::adapter::inbound::cli::command::ConvertArgs;
use crate::adapter::inbound::cli::{context, output};
use crate::domain::odds::convert;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Convert one odds value, defaulting the target to the user's notation.
pub fn execute(args: &ConvertArgs, config: &Config) -> Result<()> {
    let to = match args.to {
        Some(to) => to,
        None => {
            context::preferences(config)
                .resolve(&context::runtime_environment(config))?
                .notation
        }
    };

    let converted = convert(&args.odds, args.from, to)?;

    if output::is_json() {
        output::document(&json!({
            "command": "convert",
            "input": args.odds,
            "from": args.from,
            "to": to,
            "odds": converted,
        }));
        return Ok(());
    }

    output::value(converted);
    Ok(())
}
