use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Search(args) => commands::search::handle(args, ctx, flags),
        Commands::Query(args) => commands::query::handle(args, ctx, flags),
        Commands::Get(args) => commands::get::handle(args, ctx, flags),
        Commands::Fields(_) | Commands::Schema(_) => {
            anyhow::bail!("fields/schema do not read records and are handled before loading")
        }
    }
}
