//! Command-line interface definitions.
//!
//! Defines the CLI structure for betledger using `clap`: odds conversion,
//! payout pricing, portfolio statistics and preference management.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::{OddsNotation, SettlementStatus};

/// Sports bet tracking: odds conversion, settlement and portfolio statistics
#[derive(Parser, Debug)]
#[command(name = "betledger")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file [default: ~/.betledger/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Forced setting, or `None` to detect.
    #[must_use]
    pub fn forced(&self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert odds between notations
    Convert(ConvertArgs),

    /// Price the potential payout of a single or parlay
    Payout(PayoutArgs),

    /// Portfolio statistics over the bet ledger
    Stats(StatsArgs),

    /// Show the region and default notation for a timezone and locale
    Region(RegionArgs),

    /// Show or change the stored odds notation
    #[command(subcommand)]
    Preference(PreferenceCommand),

    /// Abbreviate a team name
    Team(TeamArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Odds to convert, e.g. -110, 2.50 or 5/2
    #[arg(allow_negative_numbers = true)]
    pub odds: String,

    /// Notation of the input [american, decimal, fractional]
    #[arg(short, long)]
    pub from: OddsNotation,

    /// Target notation [default: your preferred notation]
    #[arg(short, long)]
    pub to: Option<OddsNotation>,
}

#[derive(Args, Debug)]
pub struct PayoutArgs {
    /// Amount staked
    #[arg(short, long)]
    pub stake: Decimal,

    /// Odds of each leg; more than one prices a parlay
    #[arg(required = true, allow_negative_numbers = true)]
    pub odds: Vec<String>,

    /// Notation of the odds
    #[arg(short, long, default_value = "decimal")]
    pub notation: OddsNotation,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Ledger file [default: storage.ledger_path]
    #[arg(long)]
    pub ledger: Option<PathBuf>,

    /// Only bets with a leg in this sport
    #[arg(long)]
    pub sport: Option<String>,

    /// Only bets with a leg in this league
    #[arg(long)]
    pub league: Option<String>,

    /// Only bets with a leg in this status
    #[arg(long)]
    pub status: Option<SettlementStatus>,

    /// List the sports, leagues and statuses present
    #[arg(long)]
    pub facets: bool,
}

#[derive(Args, Debug)]
pub struct RegionArgs {
    /// IANA timezone, e.g. Europe/London [default: TZ]
    #[arg(long)]
    pub timezone: Option<String>,

    /// Locale, e.g. en_GB.UTF-8 [default: LC_ALL, LANG]
    #[arg(long)]
    pub locale: Option<String>,
}

/// Subcommands for `betledger preference`.
#[derive(Subcommand, Debug)]
pub enum PreferenceCommand {
    /// Show the odds notation in effect and where it came from
    Show,
    /// Store an odds notation
    Set {
        /// american, decimal (or european) or fractional
        notation: OddsNotation,
    },
    /// Forget the stored notation so it is detected again
    Reset,
}

#[derive(Args, Debug)]
pub struct TeamArgs {
    /// Full team name, e.g. "Toronto Maple Leafs"
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,
}

impl TeamArgs {
    /// Words joined back into one name, so quoting is optional.
    #[must_use]
    pub fn joined(&self) -> String {
        self.name.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_name_and_version() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "betledger");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn convert_accepts_negative_american_line() {
        let cli = Cli::try_parse_from(["betledger", "convert", "-110", "--from", "american"]).unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.odds, "-110");
                assert_eq!(args.from, OddsNotation::American);
                assert_eq!(args.to, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn convert_accepts_notation_aliases() {
        let cli = Cli::try_parse_from([
            "betledger", "convert", "2.5", "-f", "european", "-t", "Fractional",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.from, OddsNotation::Decimal);
                assert_eq!(args.to, Some(OddsNotation::Fractional));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_notation_is_rejected() {
        let result = Cli::try_parse_from(["betledger", "convert", "2.5", "--from", "hongkong"]);
        assert!(result.is_err());
    }

    #[test]
    fn payout_collects_legs() {
        let cli = Cli::try_parse_from([
            "betledger", "payout", "--stake", "20", "1.91", "2.0",
        ])
        .unwrap();
        match cli.command {
            Commands::Payout(args) => {
                assert_eq!(args.stake, dec!(20));
                assert_eq!(args.odds, vec!["1.91", "2.0"]);
                assert_eq!(args.notation, OddsNotation::Decimal);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn stats_filters_parse() {
        let cli = Cli::try_parse_from([
            "betledger", "stats", "--sport", "Hockey", "--status", "push", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Stats(args) => {
                assert_eq!(args.sport.as_deref(), Some("Hockey"));
                assert_eq!(args.status, Some(SettlementStatus::Void));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn preference_set_parses_notation() {
        let cli = Cli::try_parse_from(["betledger", "preference", "set", "american"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Preference(PreferenceCommand::Set {
                notation: OddsNotation::American
            })
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "betledger", "team", "Toronto", "Maple", "Leafs", "-vv", "--color", "never",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color.forced(), Some(false));
        match cli.command {
            Commands::Team(args) => assert_eq!(args.joined(), "Toronto Maple Leafs"),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
