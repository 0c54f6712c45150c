//! CLI module graph.

pub mod command;
pub mod context;
pub mod convert;
pub mod diagnostic;
pub mod output;
pub mod payout;
pub mod preference;
pub mod region;
pub mod stats;
pub mod team;

use crate::error::Result;
use crate::infrastructure::config::Config;

use self::command::Commands;

/// Run a parsed subcommand.
pub fn dispatch(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Convert(args) => convert::execute(args, config),
        Commands::Payout(args) => payout::execute(args),
        Commands::Stats(args) => stats::handler::execute(args, config),
        Commands::Region(args) => region::execute(args, config),
        Commands::Preference(command) => preference::execute(command, config),
        Commands::Team(args) => team::execute(args),
    }
}
