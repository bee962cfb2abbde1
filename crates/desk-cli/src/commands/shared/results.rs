use desk_db::Query;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output;

/// Printed instead of a result document when nothing matched.
pub const NO_ENTRIES: &str = "No entries found";

/// Resolve `query` against the loaded store and print the outcome.
pub fn resolve_and_print(query: &Query, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let resolution = ctx.store.resolve(query)?;

    if resolution.is_empty() {
        tracing::debug!(conditions = query.len(), "query matched nothing");
        println!("{NO_ENTRIES}");
        return Ok(());
    }

    output::output_resolution(&resolution, flags)
}
