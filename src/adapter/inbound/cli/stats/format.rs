//! Formatting and printing functions for statistics output.

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::BetFacets;
use crate::domain::{DailyProfit, PortfolioSummary, SkippedBet};
use crate::port::RejectedRow;

#[derive(Tabled)]
struct DailyRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Bets")]
    bets: usize,
    #[tabled(rename = "Net P/L")]
    net: String,
}

/// Print the portfolio summary to stdout.
pub fn print_summary(summary: &PortfolioSummary) {
    output::section("Portfolio");
    output::field("Bets", summary.total_bets);
    output::field(
        "Settled",
        format!(
            "{} ({} won, {} lost)",
            summary.settled_bets, summary.won_bets, summary.lost_bets
        ),
    );
    output::field("Win rate", format!("{:.1}%", summary.win_rate));

    output::section("Money");
    output::field("Staked", format!("{:.2}", summary.total_staked));
    output::field("Net P/L", output::signed_money(summary.total_profit));
    output::field("Avg stake", format!("{:.2}", summary.average_stake));
    if summary.pending_bets > 0 {
        output::field(
            "Pending",
            format!(
                "{:.2} on {} open bet(s)",
                summary.pending_stake, summary.pending_bets
            ),
        );
    }
}

/// Print the daily profit table to stdout.
pub fn print_daily(rows: &[DailyProfit]) {
    output::section("Daily");
    if rows.is_empty() {
        output::note("No settled bets.");
        return;
    }

    let rows = rows.iter().map(|row| DailyRow {
        date: row.date.to_string(),
        bets: row.bet_count,
        net: format!("{:+.2}", row.net_profit),
    });
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    output::lines(&table.to_string());
}

/// Warn about every record left out of the statistics.
pub fn print_skipped(skipped: &[SkippedBet], rejected: &[RejectedRow]) {
    for row in rejected {
        output::warning(&format!(
            "ledger row {} ({}) skipped: {}",
            row.index,
            row.id.as_deref().unwrap_or("no id"),
            row.reason
        ));
    }
    for bet in skipped {
        output::warning(&format!("bet {} skipped: {}", bet.bet_id, bet.reason));
    }
}

pub fn print_facets(facets: &BetFacets) {
    output::section("Filters");
    output::field("Sports", facets.sports.join(", "));
    output::field("Leagues", facets.leagues.join(", "));
    output::field(
        "Statuses",
        facets
            .statuses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    );
}
