use anyhow::Context;
use desk_db::{Condition, Query};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QueryArgs;
use crate::commands::shared::parse::split_query;
use crate::commands::shared::results::resolve_and_print;
use crate::context::AppContext;

/// Handle `desk query`.
pub fn handle(args: &QueryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = match (&args.query, &args.file) {
        (_, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read query file {path}"))?;
            parse_query_document(&content).with_context(|| format!("invalid query file {path}"))?
        }
        (Some(raw), None) => parse_query_string(raw)?,
        (None, None) => anyhow::bail!("provide a query string or --file"),
    };

    resolve_and_print(&query, ctx, flags)
}

/// "RESOURCE FIELD VALUE" into a one-condition query.
pub fn parse_query_string(raw: &str) -> anyhow::Result<Query> {
    let (resource, field, value) = split_query(raw)?;
    let condition = Condition::parse(resource, "union", field, value)?;
    Ok(Query::new().with(condition))
}

/// A JSON document shaped like `desk schema query`.
pub fn parse_query_document(content: &str) -> anyhow::Result<Query> {
    let query: Query = serde_json::from_str(content)?;
    if query.is_empty() {
        tracing::warn!("query file has no conditions");
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use desk_core::enums::{Connector, ResourceKind};
    use desk_db::Condition;
    use pretty_assertions::assert_eq;

    use super::{parse_query_document, parse_query_string};

    #[test]
    fn string_with_id_field_is_id_match() {
        let query = parse_query_string("ticket id 436bf9b0-1147-4c0a-8439-6f79833bff5b")
            .expect("parses");
        assert_eq!(
            query.conditions,
            vec![Condition::id_match(
                ResourceKind::Ticket,
                "436bf9b0-1147-4c0a-8439-6f79833bff5b"
            )]
        );
    }

    #[test]
    fn string_keeps_spaces_in_value() {
        let query = parse_query_string("user name Cross Barlow").expect("parses");
        assert_eq!(
            query.conditions,
            vec![Condition::field_match(
                ResourceKind::User,
                "name",
                "Cross Barlow",
                Connector::Union
            )]
        );
    }

    #[test]
    fn unknown_resource_is_rejected() {
        assert!(parse_query_string("group name x").is_err());
    }

    #[test]
    fn document_parses_tagged_conditions() {
        let query = parse_query_document(
            r#"{
                "conditions": [
                    { "condition": "field_match", "kind": "organization", "field": "details", "value": "MegaCorp" },
                    { "condition": "field_match", "kind": "organization", "field": "tags", "value": "West", "connector": "intersection" },
                    { "condition": "id_match", "kind": "organization", "key": "102" }
                ]
            }"#,
        )
        .expect("parses");

        assert_eq!(query.len(), 3);
        assert_eq!(query.conditions[0].connector(), Connector::Union);
        assert_eq!(query.conditions[1].connector(), Connector::Intersection);
        assert_eq!(
            query.conditions[2],
            Condition::id_match(ResourceKind::Organization, "102")
        );
    }

    #[test]
    fn document_rejects_unknown_condition() {
        assert!(parse_query_document(r#"{"conditions":[{"condition":"fuzzy"}]}"#).is_err());
    }
}
