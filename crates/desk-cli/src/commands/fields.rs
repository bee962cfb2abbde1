use desk_core::entities::{Organization, Ticket, User};
use desk_core::enums::{FieldKind, ResourceKind};
use desk_db::Searchable;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FieldsArgs;
use crate::commands::shared::parse::parse_resource;
use crate::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FieldRow {
    pub resource: ResourceKind,
    pub field: &'static str,
    pub kind: FieldKind,
}

/// Handle `desk fields`.
pub fn handle(args: &FieldsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kinds = match &args.resource {
        Some(raw) => vec![parse_resource(raw)?],
        None => ResourceKind::ALL.to_vec(),
    };

    let rows = kinds.into_iter().flat_map(field_rows).collect::<Vec<_>>();
    output::output(&rows, flags.format)
}

pub fn field_rows(kind: ResourceKind) -> Vec<FieldRow> {
    let fields = match kind {
        ResourceKind::Organization => Organization::FIELDS,
        ResourceKind::User => User::FIELDS,
        ResourceKind::Ticket => Ticket::FIELDS,
    };

    fields
        .iter()
        .map(|&(field, kind_of_field)| FieldRow {
            resource: kind,
            field,
            kind: kind_of_field,
        })
        .collect()
}
