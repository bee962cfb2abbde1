//! Typed field matching for each resource.
//!
//! Every searchable attribute has exactly one entry in its resource's field
//! table, naming the comparison type. There is no stringify-and-compare
//! fallback: a name not in the table is [`CoreError::FieldMissing`].
//!
//! | kind        | target parsed as          | matches when                   |
//! |-------------|---------------------------|--------------------------------|
//! | `text`      | as-is                     | equal                          |
//! | `boolean`   | boolean literal           | equal                          |
//! | `integer`   | base-10 `i64`             | equal (unset never matches)    |
//! | `timestamp` | fixed timestamp format    | same instant (unset never)     |
//! | `text_set`  | as-is                     | any element equal              |

use desk_core::entities::{Organization, Ticket, User};
use desk_core::enums::{FieldKind, ResourceKind};
use desk_core::errors::CoreError;
use desk_core::timestamp::{self, Timestamp};

/// A borrowed, typed view of one attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Boolean(bool),
    Integer(Option<i64>),
    Timestamp(Option<&'a Timestamp>),
    TextSet(&'a [String]),
}

impl FieldValue<'_> {
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Integer(_) => FieldKind::Integer,
            Self::Timestamp(_) => FieldKind::Timestamp,
            Self::TextSet(_) => FieldKind::TextSet,
        }
    }
}

/// A record type that can be searched field by field.
pub trait Searchable {
    /// The resource this record type belongs to.
    const KIND: ResourceKind;

    /// Every searchable field by its external (serialized) name.
    const FIELDS: &'static [(&'static str, FieldKind)];

    /// Typed value of `field` (lowercase external name), or `None` if the
    /// name is not an attribute of this record type.
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>>;

    /// Comparison type of `field`, or `None` if it does not exist.
    #[must_use]
    fn field_kind(field: &str) -> Option<FieldKind> {
        Self::FIELDS
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, kind)| *kind)
    }
}

impl Searchable for Organization {
    const KIND: ResourceKind = ResourceKind::Organization;
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("_id", FieldKind::Integer),
        ("url", FieldKind::Text),
        ("external_id", FieldKind::Text),
        ("name", FieldKind::Text),
        ("domain_names", FieldKind::TextSet),
        ("created_at", FieldKind::Timestamp),
        ("details", FieldKind::Text),
        ("shared_tickets", FieldKind::Boolean),
        ("tags", FieldKind::TextSet),
    ];

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        Some(match field {
            "_id" => FieldValue::Integer(Some(self.id)),
            "url" => FieldValue::Text(&self.url),
            "external_id" => FieldValue::Text(&self.external_id),
            "name" => FieldValue::Text(&self.name),
            "domain_names" => FieldValue::TextSet(&self.domain_names),
            "created_at" => FieldValue::Timestamp(self.created_at.as_ref()),
            "details" => FieldValue::Text(&self.details),
            "shared_tickets" => FieldValue::Boolean(self.shared_tickets),
            "tags" => FieldValue::TextSet(&self.tags),
            _ => return None,
        })
    }
}

impl Searchable for User {
    const KIND: ResourceKind = ResourceKind::User;
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("_id", FieldKind::Integer),
        ("url", FieldKind::Text),
        ("external_id", FieldKind::Text),
        ("name", FieldKind::Text),
        ("alias", FieldKind::Text),
        ("created_at", FieldKind::Timestamp),
        ("active", FieldKind::Boolean),
        ("verified", FieldKind::Boolean),
        ("shared", FieldKind::Boolean),
        ("locale", FieldKind::Text),
        ("timezone", FieldKind::Text),
        ("last_login_at", FieldKind::Timestamp),
        ("email", FieldKind::Text),
        ("phone", FieldKind::Text),
        ("signature", FieldKind::Text),
        ("organization_id", FieldKind::Integer),
        ("tags", FieldKind::TextSet),
        ("suspended", FieldKind::Boolean),
        ("role", FieldKind::Text),
    ];

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        Some(match field {
            "_id" => FieldValue::Integer(Some(self.id)),
            "url" => FieldValue::Text(&self.url),
            "external_id" => FieldValue::Text(&self.external_id),
            "name" => FieldValue::Text(&self.name),
            "alias" => FieldValue::Text(&self.alias),
            "created_at" => FieldValue::Timestamp(self.created_at.as_ref()),
            "active" => FieldValue::Boolean(self.active),
            "verified" => FieldValue::Boolean(self.verified),
            "shared" => FieldValue::Boolean(self.shared),
            "locale" => FieldValue::Text(&self.locale),
            "timezone" => FieldValue::Text(&self.timezone),
            "last_login_at" => FieldValue::Timestamp(self.last_login_at.as_ref()),
            "email" => FieldValue::Text(&self.email),
            "phone" => FieldValue::Text(&self.phone),
            "signature" => FieldValue::Text(&self.signature),
            "organization_id" => FieldValue::Integer(self.organization_id),
            "tags" => FieldValue::TextSet(&self.tags),
            "suspended" => FieldValue::Boolean(self.suspended),
            "role" => FieldValue::Text(&self.role),
            _ => return None,
        })
    }
}

impl Searchable for Ticket {
    const KIND: ResourceKind = ResourceKind::Ticket;
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("_id", FieldKind::Text),
        ("url", FieldKind::Text),
        ("external_id", FieldKind::Text),
        ("created_at", FieldKind::Timestamp),
        ("type", FieldKind::Text),
        ("subject", FieldKind::Text),
        ("description", FieldKind::Text),
        ("priority", FieldKind::Text),
        ("status", FieldKind::Text),
        ("submitter_id", FieldKind::Integer),
        ("assignee_id", FieldKind::Integer),
        ("organization_id", FieldKind::Integer),
        ("tags", FieldKind::TextSet),
        ("has_incidents", FieldKind::Boolean),
        ("due_at", FieldKind::Text),
        ("via", FieldKind::Text),
    ];

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        Some(match field {
            "_id" => FieldValue::Text(&self.id),
            "url" => FieldValue::Text(&self.url),
            "external_id" => FieldValue::Text(&self.external_id),
            "created_at" => FieldValue::Timestamp(self.created_at.as_ref()),
            "type" => FieldValue::Text(&self.ticket_type),
            "subject" => FieldValue::Text(&self.subject),
            "description" => FieldValue::Text(&self.description),
            "priority" => FieldValue::Text(&self.priority),
            "status" => FieldValue::Text(&self.status),
            "submitter_id" => FieldValue::Integer(self.submitter_id),
            "assignee_id" => FieldValue::Integer(self.assignee_id),
            "organization_id" => FieldValue::Integer(self.organization_id),
            "tags" => FieldValue::TextSet(&self.tags),
            "has_incidents" => FieldValue::Boolean(self.has_incidents),
            "due_at" => FieldValue::Text(&self.due_at),
            "via" => FieldValue::Text(&self.via),
            _ => return None,
        })
    }
}

/// Coerced comparison target.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Expected {
    Text(String),
    Boolean(bool),
    Integer(i64),
    Timestamp(Timestamp),
    Member(String),
}

/// A field comparison compiled once per condition: the field name is
/// resolved and the target value coerced before any record is visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPredicate {
    field: String,
    expected: Expected,
}

impl FieldPredicate {
    /// Resolve `field` (case-insensitive) on `R` and coerce `value` to its
    /// comparison type.
    ///
    /// # Errors
    ///
    /// - [`CoreError::FieldMissing`] if `R` has no such field.
    /// - [`CoreError::InvalidMatchValue`] if `value` cannot be coerced.
    pub fn compile<R: Searchable>(field: &str, value: &str) -> Result<Self, CoreError> {
        let field = field.trim().to_ascii_lowercase();
        let kind = R::field_kind(&field).ok_or_else(|| CoreError::FieldMissing {
            kind: R::KIND,
            field: field.clone(),
        })?;

        let invalid = || CoreError::InvalidMatchValue {
            kind: R::KIND,
            field: field.clone(),
            value: value.to_string(),
            expected: kind,
        };

        let expected = match kind {
            FieldKind::Text => Expected::Text(value.to_string()),
            FieldKind::TextSet => Expected::Member(value.to_string()),
            FieldKind::Boolean => Expected::Boolean(parse_bool(value).ok_or_else(invalid)?),
            FieldKind::Integer => {
                Expected::Integer(value.trim().parse::<i64>().map_err(|_| invalid())?)
            }
            FieldKind::Timestamp => {
                Expected::Timestamp(timestamp::parse(value).map_err(|_| invalid())?)
            }
        };

        Ok(Self { field, expected })
    }

    /// The resolved (lowercase) field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Whether `record` satisfies this predicate.
    #[must_use]
    pub fn test<R: Searchable>(&self, record: &R) -> bool {
        let Some(actual) = record.field_value(&self.field) else {
            return false;
        };

        match (&self.expected, actual) {
            (Expected::Text(want), FieldValue::Text(have)) => want == have,
            (Expected::Boolean(want), FieldValue::Boolean(have)) => *want == have,
            (Expected::Integer(want), FieldValue::Integer(have)) => have == Some(*want),
            (Expected::Timestamp(want), FieldValue::Timestamp(have)) => have == Some(want),
            (Expected::Member(want), FieldValue::TextSet(have)) => have.iter().any(|v| v == want),
            _ => false,
        }
    }
}

/// Decide whether one record's `field` matches `value`.
///
/// Compiles a [`FieldPredicate`] per call; query resolution compiles once
/// and reuses it across records.
///
/// # Errors
///
/// See [`FieldPredicate::compile`].
pub fn matches<R: Searchable>(record: &R, field: &str, value: &str) -> Result<bool, CoreError> {
    Ok(FieldPredicate::compile::<R>(field, value)?.test(record))
}

/// Accepts the usual textual boolean forms: `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
