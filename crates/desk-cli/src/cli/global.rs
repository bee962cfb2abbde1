use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse a configured format name, case-insensitively.
    #[must_use]
    pub fn from_config(raw: &str) -> Option<Self> {
        Self::from_str(raw.trim(), true).ok()
    }
}

/// Global flags after merging with configuration.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub show_related: bool,
}
