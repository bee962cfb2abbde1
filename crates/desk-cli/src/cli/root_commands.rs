use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Find records of one resource by field value, with optional extra clauses.
    Search(SearchArgs),
    /// Run a single "RESOURCE FIELD VALUE" query string, or a JSON query file.
    Query(QueryArgs),
    /// Fetch one record by primary id.
    Get(GetArgs),
    /// List searchable fields and their value kinds.
    Fields(FieldsArgs),
    /// Print the JSON schema for a record or query type.
    Schema(SchemaArgs),
}

/// Arguments for `desk search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// organization, user or ticket
    pub resource: String,
    /// Field name; `_id` or `id` performs a primary-key lookup
    pub field: String,
    /// Value to match; multiple words are joined with single spaces
    #[arg(num_args = 0.., allow_negative_numbers = true)]
    pub value: Vec<String>,
    /// Extra clause "<union|intersection> FIELD VALUE" on the same resource
    #[arg(short = 'w', long = "where", value_name = "CLAUSE")]
    pub clauses: Vec<String>,
}

/// Arguments for `desk query`.
#[derive(Clone, Debug, Args)]
pub struct QueryArgs {
    /// "RESOURCE FIELD VALUE"
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub query: Option<String>,
    /// JSON query document (see `desk schema query`)
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,
}

/// Arguments for `desk get`.
#[derive(Clone, Debug, Args)]
pub struct GetArgs {
    pub resource: String,
    pub id: String,
}

/// Arguments for `desk fields`.
#[derive(Clone, Debug, Args)]
pub struct FieldsArgs {
    /// Limit the listing to one resource
    pub resource: Option<String>,
}

/// Arguments for `desk schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// organization, user, ticket or query
    pub type_name: String,
}
