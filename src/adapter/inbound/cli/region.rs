//! Handler for `betledger region`.

use serde_json::json;

use crate::adapter::inbound::cli::command::RegionArgs;
use crate::adapter::inbound::cli::{context, output};
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Show the region detected from the given or ambient timezone and locale.
pub fn execute(args: &RegionArgs, config: &Config) -> Result<()> {
    let env = context::runtime_environment(config)
        .with_overrides(args.timezone.as_deref(), args.locale.as_deref());
    let region = env.region();
    let notation = region.default_notation();

    if output::is_json() {
        output::document(&json!({
            "command": "region",
            "timezone": env.timezone,
            "locale": env.locale,
            "region": region,
            "default_notation": notation,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        output::value(region);
        return Ok(());
    }

    output::field("Timezone", env.timezone.as_deref().unwrap_or("-"));
    output::field("Locale", env.locale.as_deref().unwrap_or("-"));
    output::field("Region", output::highlight(region));
    output::field(
        "Notation",
        format!("{notation} (e.g. {})", notation.example()),
    );
    Ok(())
}
