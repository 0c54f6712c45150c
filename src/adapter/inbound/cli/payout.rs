//! Handler for `betledger payout`.

use serde_json::json;

use crate::adapter::inbound::cli::command::PayoutArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::odds::format_multiplier;
use crate::domain::{combined_price, price_payout, Odds};
use crate::error::Result;

/// Price a single or parlay from its leg odds.
pub fn execute(args: &PayoutArgs) -> Result<()> {
    let legs = args
        .odds
        .iter()
        .map(|odds| Odds::parse(odds.as_str(), args.notation))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let payout = price_payout(args.stake, &legs)?;
    let profit = payout - args.stake;
    let combined = combined_price(&legs)?;
    let combined_display = format_multiplier(combined, args.notation)?;

    if output::is_json() {
        output::document(&json!({
            "command": "payout",
            "stake": args.stake,
            "legs": args.odds,
            "notation": args.notation,
            "combined_odds": combined_display,
            "potential_payout": payout,
            "potential_profit": profit,
        }));
        return Ok(());
    }

    if output::is_quiet() {
        output::value(format!("{payout:.2}"));
        return Ok(());
    }

    output::section(if legs.len() == 1 { "Single" } else { "Parlay" });
    output::field("Stake", format!("{:.2}", args.stake));
    output::field("Odds", output::highlight(&combined_display));
    output::field("Payout", format!("{payout:.2}"));
    output::field("Profit", output::signed_money(profit));
    Ok(())
}
