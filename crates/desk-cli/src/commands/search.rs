use anyhow::{Context, bail};
use desk_core::enums::Connector;
use desk_db::{Condition, Query, is_id_field};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::parse::{parse_clause, parse_resource};
use crate::commands::shared::results::resolve_and_print;
use crate::context::AppContext;

/// Handle `desk search`.
pub fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args)?;
    tracing::debug!(conditions = query.len(), "search query built");
    resolve_and_print(&query, ctx, flags)
}

/// The positional triple becomes the first condition (union); each `--where`
/// clause appends another condition on the same resource.
///
/// An id match can only widen the result, so an `intersection` clause on
/// `_id` is rejected.
pub fn build_query(args: &SearchArgs) -> anyhow::Result<Query> {
    let kind = parse_resource(&args.resource)?;
    let value = args.value.join(" ");

    let mut query = Query::new().with(Condition::parse(
        kind.as_str(),
        "union",
        &args.field,
        &value,
    )?);

    for clause in &args.clauses {
        let (connector, field, value) = parse_clause(clause)?;
        if connector == Connector::Intersection && is_id_field(field) {
            bail!(
                "invalid --where clause '{clause}': an id match always unions; \
                 use `desk get` or a union clause"
            );
        }
        let condition = Condition::parse(kind.as_str(), connector.as_str(), field, value)
            .with_context(|| format!("invalid --where clause '{clause}'"))?;
        query.push(condition);
    }

    Ok(query)
}
