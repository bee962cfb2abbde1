use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::timestamp::{self, Timestamp};

/// An end user or agent, optionally belonging to one organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub external_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default, with = "timestamp::option")]
    #[schemars(with = "Option<String>")]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub shared: bool,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default, with = "timestamp::option")]
    #[schemars(with = "Option<String>")]
    pub last_login_at: Option<Timestamp>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub signature: String,
    /// Foreign key to [`super::Organization`].
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub suspended: bool,
    #[serde(default)]
    pub role: String,
}
