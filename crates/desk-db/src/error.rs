//! Loader error types for desk-db.
//!
//! Query-time failures use [`desk_core::errors::CoreError`]; this module only
//! covers getting records into the store.

use desk_core::enums::ResourceKind;
use thiserror::Error;

/// Errors from reading and decoding record files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The record source could not be read.
    #[error("I/O error reading {kind} records from {source_name}: {message}")]
    Io {
        kind: ResourceKind,
        source_name: String,
        message: String,
    },

    /// The record source is not a JSON array of the expected record shape.
    #[error("Failed to parse {kind} records from {source_name}: {message}")]
    Parse {
        kind: ResourceKind,
        source_name: String,
        message: String,
    },
}
