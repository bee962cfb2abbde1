use anyhow::Context;
use desk_config::DeskConfig;
use desk_db::{Store, load_store_from_paths};

/// State shared by the commands that query records.
pub struct AppContext {
    pub store: Store,
}

impl AppContext {
    /// Read the three configured record files into a store.
    pub fn init(config: &DeskConfig) -> anyhow::Result<Self> {
        let paths = config.data.paths().context(
            "record files are not configured; pass --orgs-file/--users-file/--tickets-file \
             or set [data] in .desk/config.toml",
        )?;

        let store = load_store_from_paths(&paths).context("failed to load record files")?;
        if store.is_empty() {
            tracing::warn!("all record files are empty; every query will return no entries");
        }

        Ok(Self { store })
    }
}
