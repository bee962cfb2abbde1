use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::timestamp::{self, Timestamp};

/// A support ticket. Unlike the other resources its id is a string (a UUID
/// in the source data).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub external_id: String,
    #[serde(default, with = "timestamp::option")]
    #[schemars(with = "Option<String>")]
    pub created_at: Option<Timestamp>,
    #[serde(rename = "type", default)]
    pub ticket_type: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub status: String,
    /// Foreign key to the submitting [`super::User`].
    #[serde(default)]
    pub submitter_id: Option<i64>,
    /// Foreign key to the assigned [`super::User`].
    #[serde(default)]
    pub assignee_id: Option<i64>,
    /// Foreign key to [`super::Organization`].
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub has_incidents: bool,
    /// Kept verbatim; the source data does not guarantee a parseable format.
    #[serde(default)]
    pub due_at: String,
    #[serde(default)]
    pub via: String,
}
