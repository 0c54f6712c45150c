//! Handler for the `stats` command.
//!
//! Loads the ledger, applies filters, aggregates and prints.

use chrono::{Local, TimeZone};
use serde_json::json;
use tracing::info;

use crate::adapter::inbound::cli::command::StatsArgs;
use crate::adapter::inbound::cli::{context, output};
use crate::application::{BetAggregator, BetFacets, BetFilter};
use crate::domain::{Bet, PortfolioReport};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::BetSource;

use super::format::{print_daily, print_facets, print_skipped, print_summary};
use super::json::{daily_to_json, facets_to_json, skipped_to_json, summary_to_json};

fn summarize_in<Tz: TimeZone>(tz: Tz, bets: &[Bet]) -> PortfolioReport {
    BetAggregator::new(tz).summarize(bets)
}

/// Execute `stats`.
pub fn execute(args: &StatsArgs, config: &Config) -> Result<()> {
    let ledger = context::ledger(config, args.ledger.as_deref());
    let loaded = ledger.load_bets()?;

    let filter = BetFilter {
        sport: args.sport.clone(),
        league: args.league.clone(),
        status: args.status,
    };
    let bets = filter.apply(&loaded.bets);
    info!(
        path = %ledger.path().display(),
        loaded = loaded.bets.len(),
        matched = bets.len(),
        "Computing statistics"
    );

    let report = match config.display.offset() {
        Some(offset) => summarize_in(offset, &bets),
        None => summarize_in(Local, &bets),
    };
    let facets = args.facets.then(|| BetFacets::collect(&loaded.bets));

    if output::is_json() {
        output::document(&json!({
            "command": "stats",
            "summary": summary_to_json(&report.summary),
            "daily": daily_to_json(&report.summary.daily),
            "skipped": skipped_to_json(&report.skipped, &loaded.rejected),
            "facets": facets.as_ref().map(facets_to_json),
        }));
        return Ok(());
    }

    print_skipped(&report.skipped, &loaded.rejected);
    if output::is_quiet() {
        output::value(format!("{:+.2}", report.summary.total_profit));
        return Ok(());
    }

    print_summary(&report.summary);
    print_daily(&report.summary.daily);
    if let Some(facets) = &facets {
        print_facets(facets);
    }
    Ok(())
}
