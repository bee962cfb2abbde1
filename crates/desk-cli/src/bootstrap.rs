use anyhow::Context;
use desk_config::DeskConfig;

use crate::cli::Cli;

/// Load layered configuration (dotenv, TOML files, `DESK_*` env), then apply
/// command-line file overrides on top.
pub fn load_config(cli: &Cli) -> anyhow::Result<DeskConfig> {
    let mut config = DeskConfig::load_with_dotenv().context("failed to load desk configuration")?;
    cli.apply_file_overrides(&mut config);

    tracing::debug!(
        organizations = %config.data.organizations_file,
        users = %config.data.users_file,
        tickets = %config.data.tickets_file,
        "record files resolved"
    );

    Ok(config)
}
