//! Resource kinds, set connectors and field comparison kinds.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and round-trip through `as_str()` / `FromStr`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ResourceKind
// ---------------------------------------------------------------------------

/// The three searchable record types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Organization,
    User,
    Ticket,
}

impl ResourceKind {
    /// Every resource kind, in load order.
    pub const ALL: [Self; 3] = [Self::Organization, Self::User, Self::Ticket];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::User => "user",
            Self::Ticket => "ticket",
        }
    }

    /// Whether primary keys of this kind are integers (tickets use strings).
    #[must_use]
    pub const fn has_integer_id(self) -> bool {
        matches!(self, Self::Organization | Self::User)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "organization" => Ok(Self::Organization),
            "user" => Ok(Self::User),
            "ticket" => Ok(Self::Ticket),
            _ => Err(CoreError::InvalidResourceKind(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Connector
// ---------------------------------------------------------------------------

/// How a condition's matches combine with the running result set.
///
/// ```text
/// union        → running ∪ matches
/// intersection → running ∩ matches
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Connector {
    #[default]
    Union,
    Intersection,
}

impl Connector {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersection => "intersection",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Connector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "union" | "or" => Ok(Self::Union),
            "intersection" | "and" => Ok(Self::Intersection),
            _ => Err(CoreError::InvalidConnector(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// FieldKind
// ---------------------------------------------------------------------------

/// Comparison type of a searchable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Exact string equality.
    Text,
    /// Boolean literal equality.
    Boolean,
    /// Base-10 integer equality.
    Integer,
    /// Instant equality in the fixed timestamp format.
    Timestamp,
    /// Membership in a set of strings.
    TextSet,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Timestamp => "timestamp",
            Self::TextSet => "text_set",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_kind_round_trips_through_str() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.as_str().parse::<ResourceKind>(), Ok(kind));
        }
    }

    #[test]
    fn resource_kind_parse_is_case_insensitive() {
        assert_eq!("Ticket".parse::<ResourceKind>(), Ok(ResourceKind::Ticket));
    }

    #[test]
    fn unknown_resource_kind_is_rejected() {
        let err = "group".parse::<ResourceKind>().expect_err("should fail");
        assert_eq!(err, CoreError::InvalidResourceKind("group".into()));
    }

    #[test]
    fn connector_accepts_boolean_aliases() {
        assert_eq!("and".parse::<Connector>(), Ok(Connector::Intersection));
        assert_eq!("OR".parse::<Connector>(), Ok(Connector::Union));
    }

    #[test]
    fn unknown_connector_is_rejected() {
        let err = "xor".parse::<Connector>().expect_err("should fail");
        assert_eq!(err, CoreError::InvalidConnector("xor".into()));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&FieldKind::TextSet).expect("serialize");
        assert_eq!(json, "\"text_set\"");
        let kind: ResourceKind = serde_json::from_str("\"organization\"").expect("deserialize");
        assert_eq!(kind, ResourceKind::Organization);
    }
}
