use desk_core::enums::ResourceKind;
use desk_db::{RecordSet, Resolution};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// What gets printed for a resolved query.
#[derive(Serialize)]
struct ResolutionView<'r, 'a> {
    matches: &'r RecordSet<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    related: Option<&'r RecordSet<'a>>,
}

/// Render a resolution, honoring `show_related`.
pub fn render_resolution(
    resolution: &Resolution<'_>,
    format: OutputFormat,
    show_related: bool,
) -> anyhow::Result<String> {
    let view = ResolutionView {
        matches: &resolution.matches,
        related: show_related.then_some(&resolution.related),
    };

    match format {
        OutputFormat::Json | OutputFormat::Raw => render(&view, format),
        OutputFormat::Table => {
            let mut sections = render_record_set_tables("matches", view.matches)?;
            if let Some(related) = view.related {
                sections.extend(render_record_set_tables("related", related)?);
            }
            Ok(sections.join("\n\n"))
        }
    }
}

pub fn output_resolution(resolution: &Resolution<'_>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render_resolution(resolution, flags.format, flags.show_related)?;
    println!("{rendered}");
    Ok(())
}

/// Columns shown per resource in table mode. JSON output always carries every
/// field.
const fn table_columns(kind: ResourceKind) -> &'static [&'static str] {
    match kind {
        ResourceKind::Organization => &["_id", "name", "details", "domain_names", "tags"],
        ResourceKind::User => &["_id", "name", "email", "role", "organization_id", "active"],
        ResourceKind::Ticket => &[
            "_id",
            "subject",
            "type",
            "priority",
            "status",
            "submitter_id",
            "assignee_id",
            "organization_id",
        ],
    }
}

/// One titled table per non-empty bucket.
fn render_record_set_tables(label: &str, set: &RecordSet<'_>) -> anyhow::Result<Vec<String>> {
    let options = table_options();
    let Value::Object(buckets) = serde_json::to_value(set)? else {
        anyhow::bail!("record set did not serialize to an object");
    };

    let mut sections = Vec::new();
    for kind in ResourceKind::ALL {
        let bucket = format!("{}s", kind.as_str());
        let Some(Value::Array(items)) = buckets.get(&bucket) else {
            continue;
        };
        if items.is_empty() {
            continue;
        }

        let headers = table_columns(kind);
        let rows = items
            .iter()
            .filter_map(Value::as_object)
            .map(|record| {
                headers
                    .iter()
                    .map(|header| {
                        record
                            .get(*header)
                            .map_or_else(|| String::from("-"), value_to_cell)
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        sections.push(format!(
            "{label}: {bucket} ({})\n{}",
            rows.len(),
            table::render_entity_table(headers, &rows, options)
        ));
    }
    Ok(sections)
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();

    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => Ok(table::render_entity_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options,
        )),
    }
}

/// Table for a JSON array; object items share a column per key, in first-seen
/// order.
fn render_array_table(items: &[Value]) -> String {
    let options = table_options();

    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<&str>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|map| map.keys()) {
        if !headers.contains(&key.as_str()) {
            headers.push(key);
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(*header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&headers, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_cell)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>"))
        }
    }
}
