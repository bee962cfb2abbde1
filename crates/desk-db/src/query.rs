//! Query conditions and their combination into a result set.
//!
//! A query is an ordered list of conditions. The first condition seeds the
//! running set; each later one either adds to it (`union`) or narrows it to
//! the records it also matched (`intersection`). Intersection compares
//! natural keys, so a condition over one resource kind intersected with one
//! over another always yields nothing.

use std::collections::BTreeMap;

use desk_core::enums::{Connector, FieldKind, ResourceKind};
use desk_core::errors::CoreError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::matcher::{FieldPredicate, Searchable};
use crate::resolution::{RecordKey, RecordRef, RecordSet, Resolution};
use crate::store::Store;

/// A single query term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum Condition {
    /// Direct primary-key lookup. Always combined with `union`.
    IdMatch { kind: ResourceKind, key: String },

    /// Scan every record of `kind`, keeping those whose `field` equals
    /// `value` after coercion to the field's declared type.
    FieldMatch {
        kind: ResourceKind,
        field: String,
        value: String,
        #[serde(default)]
        connector: Connector,
    },
}

impl Condition {
    pub fn id_match(kind: ResourceKind, key: impl Into<String>) -> Self {
        Self::IdMatch {
            kind,
            key: key.into(),
        }
    }

    pub fn field_match(
        kind: ResourceKind,
        field: impl Into<String>,
        value: impl Into<String>,
        connector: Connector,
    ) -> Self {
        Self::FieldMatch {
            kind,
            field: field.into(),
            value: value.into(),
            connector,
        }
    }

    /// Build a condition from its textual parts.
    ///
    /// A `field` of `id` or `_id` becomes an [`Condition::IdMatch`], which
    /// always unions; an `intersection` connector on it is logged and
    /// dropped. The id key is kept verbatim: integer kinds trim it at lookup
    /// time, ticket ids are compared as-is. Anything else becomes a field
    /// match.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidResourceKind`] or
    /// [`CoreError::InvalidConnector`] for unknown names.
    pub fn parse(
        resource: &str,
        connector: &str,
        field: &str,
        value: &str,
    ) -> Result<Self, CoreError> {
        let kind: ResourceKind = resource.parse()?;
        let connector: Connector = connector.parse()?;
        let field = field.trim();
        if is_id_field(field) {
            if connector == Connector::Intersection {
                tracing::warn!(
                    %kind,
                    key = value,
                    "id match always unions; intersection connector ignored"
                );
            }
            return Ok(Self::id_match(kind, value));
        }
        Ok(Self::field_match(kind, field, value, connector))
    }

    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::IdMatch { kind, .. } | Self::FieldMatch { kind, .. } => *kind,
        }
    }

    #[must_use]
    pub const fn connector(&self) -> Connector {
        match self {
            Self::IdMatch { .. } => Connector::Union,
            Self::FieldMatch { connector, .. } => *connector,
        }
    }

    /// Records of the store satisfying this condition on its own.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] when an id lookup misses
    /// - [`CoreError::InvalidMatchValue`] when an integer id or a field value
    ///   does not coerce to the expected type
    /// - [`CoreError::FieldMissing`] when the field is not searchable
    pub fn evaluate<'a>(&self, store: &'a Store) -> Result<Vec<RecordRef<'a>>, CoreError> {
        match self {
            Self::IdMatch { kind, key } => lookup(store, *kind, key).map(|record| vec![record]),
            Self::FieldMatch {
                kind, field, value, ..
            } => match kind {
                ResourceKind::Organization => {
                    scan(store.organizations(), field, value, RecordRef::Organization)
                }
                ResourceKind::User => scan(store.users(), field, value, RecordRef::User),
                ResourceKind::Ticket => scan(store.tickets(), field, value, RecordRef::Ticket),
            },
        }
    }
}

/// Whether `field` names the primary key (`id` or `_id`, any case).
#[must_use]
pub fn is_id_field(field: &str) -> bool {
    let field = field.trim();
    field.eq_ignore_ascii_case("id") || field.eq_ignore_ascii_case("_id")
}

fn lookup<'a>(store: &'a Store, kind: ResourceKind, key: &str) -> Result<RecordRef<'a>, CoreError> {
    let integer_key = || {
        key.trim()
            .parse::<i64>()
            .map_err(|_| CoreError::InvalidMatchValue {
                kind,
                field: "_id".to_string(),
                value: key.to_string(),
                expected: FieldKind::Integer,
            })
    };

    match kind {
        ResourceKind::Organization => store
            .get_organization(integer_key()?)
            .map(RecordRef::Organization),
        ResourceKind::User => store.get_user(integer_key()?).map(RecordRef::User),
        ResourceKind::Ticket => store.get_ticket(key).map(RecordRef::Ticket),
    }
}

fn scan<'a, R: Searchable + 'a>(
    records: impl Iterator<Item = &'a R>,
    field: &str,
    value: &str,
    wrap: fn(&'a R) -> RecordRef<'a>,
) -> Result<Vec<RecordRef<'a>>, CoreError> {
    let predicate = FieldPredicate::compile::<R>(field, value)?;
    Ok(records
        .filter(|record| predicate.test(*record))
        .map(wrap)
        .collect())
}

/// An ordered list of conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Query {
    pub conditions: Vec<Condition>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a condition, builder style.
    #[must_use]
    pub fn with(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Combine every condition into the primary match set, without related
    /// expansion.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Condition::evaluate`]. No partial
    /// result is returned.
    pub fn resolve_matches<'a>(&self, store: &'a Store) -> Result<RecordSet<'a>, CoreError> {
        let mut running: BTreeMap<RecordKey, RecordRef<'a>> = BTreeMap::new();

        for (index, condition) in self.conditions.iter().enumerate() {
            let found = condition.evaluate(store)?;
            let hits = found.len();

            match (index, condition.connector()) {
                (0, _) | (_, Connector::Union) => {
                    running.extend(found.into_iter().map(|record| (record.key(), record)));
                }
                (_, Connector::Intersection) => {
                    running = found
                        .into_iter()
                        .map(|record| (record.key(), record))
                        .filter(|(key, _)| running.contains_key(key))
                        .collect();
                }
            }

            tracing::trace!(
                index,
                kind = %condition.kind(),
                connector = %condition.connector(),
                hits,
                running = running.len(),
                "condition applied"
            );
        }

        Ok(running.into_values().collect())
    }

    /// Resolve the query against `store`, returning primary matches plus
    /// their one-hop related records.
    ///
    /// # Errors
    ///
    /// See [`Query::resolve_matches`].
    pub fn resolve<'a>(&self, store: &'a Store) -> Result<Resolution<'a>, CoreError> {
        let matches = self.resolve_matches(store)?;
        let resolution = Resolution::expand(store, matches);
        tracing::debug!(
            conditions = self.conditions.len(),
            matches = resolution.matches.len(),
            related = resolution.related.len(),
            "query resolved"
        );
        Ok(resolution)
    }
}

impl Store {
    /// Shorthand for [`Query::resolve`].
    ///
    /// # Errors
    ///
    /// See [`Query::resolve_matches`].
    pub fn resolve(&self, query: &Query) -> Result<Resolution<'_>, CoreError> {
        query.resolve(self)
    }
}
