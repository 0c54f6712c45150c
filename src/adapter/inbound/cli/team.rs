//! Handler for `betledger team`.

use serde_json::json;

use crate::adapter::inbound::cli::command::TeamArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::team::team_abbreviation;
use crate::error::Result;

pub fn execute(args: &TeamArgs) -> Result<()> {
    let name = args.joined();
    let abbreviation = team_abbreviation(&name);

    if output::is_json() {
        output::document(&json!({
            "command": "team",
            "name": name,
            "abbreviation": abbreviation,
        }));
        return Ok(());
    }

    output::value(abbreviation);
    Ok(())
}
