//! # desk-db
//!
//! In-memory relational store over organizations, users and tickets.
//!
//! Handles everything between decoded records and a resolved result set:
//! - `Store`: records keyed by primary id plus derived back-reference indices
//! - `matcher`: typed, per-resource field comparison
//! - `query`: id/field conditions combined with union/intersection connectors
//! - `resolution`: result buckets and one-hop related-record expansion
//! - `loader`: JSON array decoding into a populated store
//!
//! ## Data flow
//!
//! ```text
//! JSON arrays ──load──▶ Store ──resolve(Query)──▶ Resolution { matches, related }
//!                         ▲                │
//!                         └── matcher ◀────┘ (per field-match condition)
//! ```
//!
//! The store is populated once and read-only afterwards; nothing here takes a
//! lock or suspends.

pub mod error;
pub mod loader;
pub mod matcher;
pub mod query;
pub mod resolution;
pub mod store;

pub use error::LoadError;
pub use loader::{DataPaths, load_store, load_store_from_paths, read_records};
pub use matcher::{FieldPredicate, FieldValue, Searchable, matches};
pub use query::{Condition, Query, is_id_field};
pub use resolution::{RecordKey, RecordRef, RecordSet, Resolution};
pub use store::Store;
