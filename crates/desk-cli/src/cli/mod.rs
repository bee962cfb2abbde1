use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `desk` binary.
#[derive(Debug, Parser)]
#[command(
    name = "desk",
    version,
    about = "Search organizations, users and tickets loaded from JSON exports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the organizations JSON file
    #[arg(long, global = true, value_name = "PATH")]
    pub orgs_file: Option<String>,

    /// Path to the users JSON file
    #[arg(long, global = true, value_name = "PATH")]
    pub users_file: Option<String>,

    /// Path to the tickets JSON file
    #[arg(long, global = true, value_name = "PATH")]
    pub tickets_file: Option<String>,

    /// Print primary matches only, without related records
    #[arg(long, global = true)]
    pub no_related: bool,
}

impl Cli {
    /// Merge command-line flags over loaded configuration.
    ///
    /// An unparseable configured format has already been rejected by
    /// `DeskConfig::load`, so falling back to JSON here only covers a
    /// hand-built config.
    #[must_use]
    pub fn global_flags(&self, config: &desk_config::DeskConfig) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_config(&config.general.default_format).unwrap_or(OutputFormat::Json)
        });

        GlobalFlags {
            format,
            quiet: self.quiet,
            show_related: config.general.show_related && !self.no_related,
        }
    }

    /// Apply `--orgs-file`/`--users-file`/`--tickets-file` to `config`.
    pub fn apply_file_overrides(&self, config: &mut desk_config::DeskConfig) {
        let overrides = [
            (desk_core::enums::ResourceKind::Organization, &self.orgs_file),
            (desk_core::enums::ResourceKind::User, &self.users_file),
            (desk_core::enums::ResourceKind::Ticket, &self.tickets_file),
        ];
        for (kind, value) in overrides {
            if let Some(path) = value {
                config.data.file_mut(kind).clone_from(path);
            }
        }
    }
}
