use anyhow::{Context, bail};
use desk_core::enums::{Connector, ResourceKind};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

pub fn parse_resource(raw: &str) -> anyhow::Result<ResourceKind> {
    raw.parse::<ResourceKind>()
        .with_context(|| format!("expected one of {}", resource_names()))
}

/// Split a "RESOURCE FIELD VALUE" string into its three parts.
///
/// Splits on the first two single spaces; everything after the second one is
/// the value, verbatim. The value may be empty (`"ticket type "`).
pub fn split_query(raw: &str) -> anyhow::Result<(&str, &str, &str)> {
    let mut parts = raw.trim_start().splitn(3, ' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(resource), Some(field), Some(value)) if !resource.is_empty() && !field.is_empty() => {
            Ok((resource, field, value))
        }
        _ => bail!("invalid query '{raw}': expected \"RESOURCE FIELD VALUE\""),
    }
}

/// Split a `--where` clause "CONNECTOR FIELD VALUE".
pub fn parse_clause(raw: &str) -> anyhow::Result<(Connector, &str, &str)> {
    let (connector, field, value) = split_query(raw)
        .with_context(|| format!("invalid --where clause '{raw}'"))?;
    let connector = connector
        .parse::<Connector>()
        .with_context(|| format!("invalid --where clause '{raw}'"))?;
    Ok((connector, field, value))
}

fn resource_names() -> String {
    ResourceKind::ALL
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use desk_core::enums::{Connector, ResourceKind};
    use pretty_assertions::assert_eq;

    use super::{parse_clause, parse_resource, split_query};
    use crate::commands::schema::SchemaType;

    #[test]
    fn splits_into_three_parts_keeping_spaces_in_value() {
        assert_eq!(
            split_query("user name Cross Barlow").expect("should split"),
            ("user", "name", "Cross Barlow")
        );
    }

    #[test]
    fn trailing_space_means_empty_value() {
        assert_eq!(
            split_query("ticket type ").expect("should split"),
            ("ticket", "type", "")
        );
    }

    #[test]
    fn fewer_than_three_parts_is_an_error() {
        let err = split_query("user name").expect_err("should fail");
        assert!(err.to_string().contains("RESOURCE FIELD VALUE"));
        assert!(split_query("").is_err());
    }

    #[test]
    fn parses_clause_with_alias_connector() {
        assert_eq!(
            parse_clause("and tags Fulton").expect("should parse"),
            (Connector::Intersection, "tags", "Fulton")
        );
        assert!(parse_clause("xor tags Fulton").is_err());
    }

    #[test]
    fn resource_error_lists_valid_names() {
        assert_eq!(parse_resource("Ticket").expect("should parse"), ResourceKind::Ticket);
        let err = parse_resource("widget").expect_err("should fail");
        assert!(format!("{err:#}").contains("organization, user, ticket"));
    }

    #[test]
    fn parses_snake_case_enum() {
        let kind: SchemaType = super::parse_enum("Query", "type").expect("should parse");
        assert_eq!(kind, SchemaType::Query);
        let err = super::parse_enum::<SchemaType>("resolution", "type").expect_err("should fail");
        assert!(err.to_string().contains("invalid type 'resolution'"));
    }
}
