use dox_config::DoxConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, config: &DoxConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => commands::generate::handle(&args, config, flags),
        Commands::Classify(args) => commands::classify::handle(&args, config, flags),
        Commands::Args(args) => commands::args::handle(&args, flags),
        Commands::Complete(args) => commands::complete::handle(&args, config, flags),
        Commands::Config => commands::config::handle(flags),
    }
}
