use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::timestamp::{self, Timestamp};

/// A customer organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Organization {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub external_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain_names: Vec<String>,
    #[serde(default, with = "timestamp::option")]
    #[schemars(with = "Option<String>")]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub shared_tickets: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}
