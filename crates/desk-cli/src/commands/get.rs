use desk_db::{Condition, Query};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetArgs;
use crate::commands::shared::parse::parse_resource;
use crate::commands::shared::results::resolve_and_print;
use crate::context::AppContext;

/// Handle `desk get`.
pub fn handle(args: &GetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_resource(&args.resource)?;
    let query = Query::new().with(Condition::id_match(kind, args.id.as_str()));
    resolve_and_print(&query, ctx, flags)
}
