//! Error taxonomy for record lookup and query resolution.
//!
//! Loader and configuration errors are defined in their own crates
//! (`LoadError`, `ConfigError`); everything a query can fail with is here.

use thiserror::Error;

use crate::enums::{FieldKind, ResourceKind};

/// Errors raised while looking up records or resolving a query.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Id lookup returned no record.
    #[error("No {kind} found with id {id}")]
    NotFound { kind: ResourceKind, id: String },

    /// The field name is not an attribute of the targeted resource.
    #[error("Field '{field}' does not exist on {kind}")]
    FieldMissing { kind: ResourceKind, field: String },

    /// The target value cannot be coerced to the attribute's comparison type.
    #[error("Invalid match value '{value}' for {kind} field '{field}': expected {expected}")]
    InvalidMatchValue {
        kind: ResourceKind,
        field: String,
        value: String,
        expected: FieldKind,
    },

    /// A condition named a resource that does not exist.
    #[error("Invalid resource '{0}': expected organization, user or ticket")]
    InvalidResourceKind(String),

    /// A condition named a connector that does not exist.
    #[error("Invalid connector '{0}': expected union or intersection")]
    InvalidConnector(String),
}

impl CoreError {
    /// Whether this error is a structural problem with the query itself
    /// (as opposed to a missing record).
    #[must_use]
    pub const fn is_query_error(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}
