use desk_core::entities::{Organization, Ticket, User};
use desk_db::Query;
use schemars::{Schema, schema_for};
use serde::Deserialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::commands::shared::parse::parse_enum;
use crate::output;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SchemaType {
    Organization,
    User,
    Ticket,
    Query,
}

impl SchemaType {
    #[must_use]
    pub fn schema(self) -> Schema {
        match self {
            Self::Organization => schema_for!(Organization),
            Self::User => schema_for!(User),
            Self::Ticket => schema_for!(Ticket),
            Self::Query => schema_for!(Query),
        }
    }
}

/// Handle `desk schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema_type: SchemaType = parse_enum(&args.type_name, "schema type")?;
    output::output(&schema_type.schema(), flags.format)
}
