pub mod dispatch;
pub mod fields;
pub mod get;
pub mod query;
pub mod schema;
pub mod search;
pub mod shared;
